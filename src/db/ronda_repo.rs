// src/db/ronda_repo.rs

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::ronda::{AtualizarRondaPayload, CriarRondaPayload, RondaMp, StatusRondaMp},
};

#[derive(Clone)]
pub struct RondaRepository {
    pool: PgPool,
}

impl RondaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self) -> Result<Vec<RondaMp>, AppError> {
        let rondas = sqlx::query_as::<_, RondaMp>("SELECT * FROM rondas_mp ORDER BY validade")
            .fetch_all(&self.pool)
            .await?;
        Ok(rondas)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<RondaMp>, AppError> {
        let ronda = sqlx::query_as::<_, RondaMp>("SELECT * FROM rondas_mp WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(ronda)
    }

    // `status` chega calculado pelo serviço a partir da validade; a coluna é
    // só cache de exibição.
    pub async fn criar(
        &self,
        payload: &CriarRondaPayload,
        status: StatusRondaMp,
    ) -> Result<RondaMp, AppError> {
        let ronda = sqlx::query_as::<_, RondaMp>(
            r#"
            INSERT INTO rondas_mp (
                endereco, latitude, longitude, beneficiario, cpf,
                telefone, validade, status, observacoes, anexos
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&payload.endereco)
        .bind(payload.latitude)
        .bind(payload.longitude)
        .bind(&payload.beneficiario)
        .bind(&payload.cpf)
        .bind(&payload.telefone)
        .bind(payload.validade)
        .bind(status)
        .bind(&payload.observacoes)
        .bind(&payload.anexos)
        .fetch_one(&self.pool)
        .await?;

        Ok(ronda)
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        payload: &AtualizarRondaPayload,
        status: Option<StatusRondaMp>,
    ) -> Result<Option<RondaMp>, AppError> {
        let ronda = sqlx::query_as::<_, RondaMp>(
            r#"
            UPDATE rondas_mp
            SET endereco = COALESCE($2, endereco),
                latitude = COALESCE($3, latitude),
                longitude = COALESCE($4, longitude),
                telefone = COALESCE($5, telefone),
                validade = COALESCE($6, validade),
                status = COALESCE($7, status),
                observacoes = COALESCE($8, observacoes),
                updated_at = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.endereco)
        .bind(payload.latitude)
        .bind(payload.longitude)
        .bind(&payload.telefone)
        .bind(payload.validade)
        .bind(status)
        .bind(&payload.observacoes)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(ronda)
    }

    pub async fn excluir(&self, id: Uuid) -> Result<bool, AppError> {
        let resultado = sqlx::query("DELETE FROM rondas_mp WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(resultado.rows_affected() > 0)
    }

    /// Validades de todas as rondas, para contagem por status derivado.
    pub async fn listar_validades(&self) -> Result<Vec<DateTime<Utc>>, AppError> {
        let validades = sqlx::query_scalar::<_, DateTime<Utc>>("SELECT validade FROM rondas_mp")
            .fetch_all(&self.pool)
            .await?;
        Ok(validades)
    }
}
