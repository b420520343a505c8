// src/db/ocorrencia_repo.rs

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::ocorrencia::{CriarOcorrenciaPayload, Ocorrencia, StatusOcorrencia},
};

#[derive(Clone)]
pub struct OcorrenciaRepository {
    pool: PgPool,
}

impl OcorrenciaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // A visibilidade por ator é resolvida em memória pela política; o banco
    // devolve tudo e o serviço filtra.
    pub async fn listar(&self) -> Result<Vec<Ocorrencia>, AppError> {
        let ocorrencias = sqlx::query_as::<_, Ocorrencia>(
            "SELECT * FROM ocorrencias ORDER BY data_ocorrencia DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(ocorrencias)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Ocorrencia>, AppError> {
        let ocorrencia = sqlx::query_as::<_, Ocorrencia>("SELECT * FROM ocorrencias WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(ocorrencia)
    }

    pub async fn criar(
        &self,
        payload: &CriarOcorrenciaPayload,
        criador_id: &str,
        criador_nome: &str,
    ) -> Result<Ocorrencia, AppError> {
        let ocorrencia = sqlx::query_as::<_, Ocorrencia>(
            r#"
            INSERT INTO ocorrencias (
                titulo, descricao, tipo, endereco, latitude, longitude,
                criador_id, criador_nome, citados, anexos, data_ocorrencia
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&payload.titulo)
        .bind(&payload.descricao)
        .bind(payload.tipo)
        .bind(&payload.endereco)
        .bind(payload.latitude)
        .bind(payload.longitude)
        .bind(criador_id)
        .bind(criador_nome)
        .bind(&payload.citados)
        .bind(&payload.anexos)
        .bind(payload.data_ocorrencia)
        .fetch_one(&self.pool)
        .await?;

        Ok(ocorrencia)
    }

    // Atualização parcial: campo nulo mantém o valor atual.
    pub async fn atualizar(
        &self,
        id: Uuid,
        status: Option<StatusOcorrencia>,
        descricao: Option<&str>,
        citados: Option<&[String]>,
        anexos: Option<&[String]>,
    ) -> Result<Option<Ocorrencia>, AppError> {
        let ocorrencia = sqlx::query_as::<_, Ocorrencia>(
            r#"
            UPDATE ocorrencias
            SET status = COALESCE($2, status),
                descricao = COALESCE($3, descricao),
                citados = COALESCE($4, citados),
                anexos = COALESCE($5, anexos),
                updated_at = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(descricao)
        .bind(citados)
        .bind(anexos)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(ocorrencia)
    }

    pub async fn excluir(&self, id: Uuid) -> Result<bool, AppError> {
        let resultado = sqlx::query("DELETE FROM ocorrencias WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(resultado.rows_affected() > 0)
    }
}
