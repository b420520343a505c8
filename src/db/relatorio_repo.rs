// src/db/relatorio_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::evento::StatusEvento,
    models::ocorrencia::StatusOcorrencia,
};

/// Contagens consolidadas, exceto rondas: o status de ronda é derivado da
/// validade pelo serviço, nunca contado pela coluna cache.
pub struct ContagensRelatorio {
    pub ocorrencias_abertas: i64,
    pub ocorrencias_em_andamento: i64,
    pub ocorrencias_concluidas: i64,
    pub ocorrencias_canceladas: i64,
    pub eventos_agendados: i64,
    pub eventos_concluidos: i64,
    pub cautelas_abertas: i64,
    pub usuarios_pendentes: i64,
}

#[derive(Clone)]
pub struct RelatorioRepository {
    pool: PgPool,
}

impl RelatorioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn contagens(&self) -> Result<ContagensRelatorio, AppError> {
        // Transação para um snapshot consistente das contagens.
        let mut tx = self.pool.begin().await?;

        let ocorrencias_abertas =
            contar_ocorrencias(&mut *tx, StatusOcorrencia::Aberta).await?;
        let ocorrencias_em_andamento =
            contar_ocorrencias(&mut *tx, StatusOcorrencia::EmAndamento).await?;
        let ocorrencias_concluidas =
            contar_ocorrencias(&mut *tx, StatusOcorrencia::Concluida).await?;
        let ocorrencias_canceladas =
            contar_ocorrencias(&mut *tx, StatusOcorrencia::Cancelada).await?;

        let eventos_agendados = contar_eventos(&mut *tx, StatusEvento::Agendado).await?;
        let eventos_concluidos = contar_eventos(&mut *tx, StatusEvento::Concluido).await?;

        let cautelas_abertas = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM cautelas_armaria WHERE data_devolucao IS NULL",
        )
        .fetch_one(&mut *tx)
        .await?;

        let usuarios_pendentes = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE status = 'PENDENTE_APROVACAO'",
        )
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(ContagensRelatorio {
            ocorrencias_abertas,
            ocorrencias_em_andamento,
            ocorrencias_concluidas,
            ocorrencias_canceladas,
            eventos_agendados,
            eventos_concluidos,
            cautelas_abertas,
            usuarios_pendentes,
        })
    }
}

async fn contar_ocorrencias<'e, E>(executor: E, status: StatusOcorrencia) -> Result<i64, AppError>
where
    E: Executor<'e, Database = Postgres>,
{
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM ocorrencias WHERE status = $1")
        .bind(status)
        .fetch_one(executor)
        .await?;
    Ok(total)
}

async fn contar_eventos<'e, E>(executor: E, status: StatusEvento) -> Result<i64, AppError>
where
    E: Executor<'e, Database = Postgres>,
{
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM eventos WHERE status = $1")
        .bind(status)
        .fetch_one(executor)
        .await?;
    Ok(total)
}
