// src/db/armaria_repo.rs

use chrono::Utc;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::armaria::{
        AbrirCautelaPayload, CautelaArmaria, CriarItemPayload, ItemArmaria, StatusItem,
    },
};

#[derive(Clone)]
pub struct ArmariaRepository {
    pool: PgPool,
}

impl ArmariaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // --- ITENS ---

    pub async fn listar_itens(&self) -> Result<Vec<ItemArmaria>, AppError> {
        let itens =
            sqlx::query_as::<_, ItemArmaria>("SELECT * FROM itens_armaria ORDER BY created_at")
                .fetch_all(&self.pool)
                .await?;
        Ok(itens)
    }

    pub async fn find_item(&self, id: Uuid) -> Result<Option<ItemArmaria>, AppError> {
        let item = sqlx::query_as::<_, ItemArmaria>("SELECT * FROM itens_armaria WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    pub async fn criar_item(&self, payload: &CriarItemPayload) -> Result<ItemArmaria, AppError> {
        let item = sqlx::query_as::<_, ItemArmaria>(
            r#"
            INSERT INTO itens_armaria (
                tipo, marca, modelo, numero_serie, etiqueta,
                calibre, nivel, alocacao, observacoes, anexos
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(payload.tipo)
        .bind(&payload.marca)
        .bind(&payload.modelo)
        .bind(&payload.numero_serie)
        .bind(&payload.etiqueta)
        .bind(&payload.calibre)
        .bind(&payload.nivel)
        .bind(&payload.alocacao)
        .bind(&payload.observacoes)
        .bind(&payload.anexos)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn atualizar_item(
        &self,
        id: Uuid,
        status: Option<StatusItem>,
        alocacao: Option<&str>,
        observacoes: Option<&str>,
    ) -> Result<Option<ItemArmaria>, AppError> {
        let item = sqlx::query_as::<_, ItemArmaria>(
            r#"
            UPDATE itens_armaria
            SET status = COALESCE($2, status),
                alocacao = COALESCE($3, alocacao),
                observacoes = COALESCE($4, observacoes),
                updated_at = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(alocacao)
        .bind(observacoes)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    // --- CAUTELAS ---

    pub async fn listar_cautelas(&self, somente_abertas: bool) -> Result<Vec<CautelaArmaria>, AppError> {
        let sql = if somente_abertas {
            "SELECT * FROM cautelas_armaria WHERE data_devolucao IS NULL ORDER BY data_saida DESC"
        } else {
            "SELECT * FROM cautelas_armaria ORDER BY data_saida DESC"
        };
        let cautelas = sqlx::query_as::<_, CautelaArmaria>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(cautelas)
    }

    pub async fn find_cautela(&self, id: Uuid) -> Result<Option<CautelaArmaria>, AppError> {
        let cautela =
            sqlx::query_as::<_, CautelaArmaria>("SELECT * FROM cautelas_armaria WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(cautela)
    }

    /// Cautela ainda em aberto para o item, se houver.
    pub async fn cautela_aberta_do_item<'e, E>(
        &self,
        executor: E,
        item_id: Uuid,
    ) -> Result<Option<CautelaArmaria>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cautela = sqlx::query_as::<_, CautelaArmaria>(
            "SELECT * FROM cautelas_armaria WHERE item_id = $1 AND data_devolucao IS NULL",
        )
        .bind(item_id)
        .fetch_optional(executor)
        .await?;
        Ok(cautela)
    }

    pub async fn abrir_cautela<'e, E>(
        &self,
        executor: E,
        payload: &AbrirCautelaPayload,
    ) -> Result<CautelaArmaria, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cautela = sqlx::query_as::<_, CautelaArmaria>(
            r#"
            INSERT INTO cautelas_armaria (
                item_id, servidor_id, previsao_devolucao,
                condicao_entrega, responsavel_entrega, observacoes
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(payload.item_id)
        .bind(&payload.servidor_id)
        .bind(payload.previsao_devolucao)
        .bind(&payload.condicao_entrega)
        .bind(&payload.responsavel_entrega)
        .bind(&payload.observacoes)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            // O índice parcial único segura corridas na abertura.
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("idx_cautela_aberta_por_item")
                {
                    return AppError::CautelaJaAberta;
                }
            }
            e.into()
        })?;

        Ok(cautela)
    }

    pub async fn registrar_devolucao(
        &self,
        id: Uuid,
        condicao_retorno: &str,
        responsavel_recebimento: &str,
    ) -> Result<Option<CautelaArmaria>, AppError> {
        let cautela = sqlx::query_as::<_, CautelaArmaria>(
            r#"
            UPDATE cautelas_armaria
            SET data_devolucao = $2,
                condicao_retorno = $3,
                responsavel_recebimento = $4
            WHERE id = $1 AND data_devolucao IS NULL
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(Utc::now())
        .bind(condicao_retorno)
        .bind(responsavel_recebimento)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cautela)
    }
}
