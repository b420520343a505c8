// src/db/evento_repo.rs

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::evento::{AtualizarEventoPayload, CriarEventoPayload, Evento},
};

#[derive(Clone)]
pub struct EventoRepository {
    pool: PgPool,
}

impl EventoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self) -> Result<Vec<Evento>, AppError> {
        let eventos = sqlx::query_as::<_, Evento>("SELECT * FROM eventos ORDER BY data_inicio")
            .fetch_all(&self.pool)
            .await?;
        Ok(eventos)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Evento>, AppError> {
        let evento = sqlx::query_as::<_, Evento>("SELECT * FROM eventos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(evento)
    }

    pub async fn criar(
        &self,
        payload: &CriarEventoPayload,
        publico: &[String],
    ) -> Result<Evento, AppError> {
        let evento = sqlx::query_as::<_, Evento>(
            r#"
            INSERT INTO eventos (
                titulo, descricao, data_inicio, data_fim,
                local, tipo, anexos, publico
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&payload.titulo)
        .bind(&payload.descricao)
        .bind(payload.data_inicio)
        .bind(payload.data_fim)
        .bind(&payload.local)
        .bind(payload.tipo)
        .bind(&payload.anexos)
        .bind(publico)
        .fetch_one(&self.pool)
        .await?;

        Ok(evento)
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        payload: &AtualizarEventoPayload,
    ) -> Result<Option<Evento>, AppError> {
        let evento = sqlx::query_as::<_, Evento>(
            r#"
            UPDATE eventos
            SET titulo = COALESCE($2, titulo),
                descricao = COALESCE($3, descricao),
                data_inicio = COALESCE($4, data_inicio),
                data_fim = COALESCE($5, data_fim),
                local = COALESCE($6, local),
                status = COALESCE($7, status),
                publico = COALESCE($8, publico),
                updated_at = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.titulo)
        .bind(&payload.descricao)
        .bind(payload.data_inicio)
        .bind(payload.data_fim)
        .bind(&payload.local)
        .bind(payload.status)
        .bind(&payload.publico)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(evento)
    }

    pub async fn excluir(&self, id: Uuid) -> Result<bool, AppError> {
        let resultado = sqlx::query("DELETE FROM eventos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(resultado.rows_affected() > 0)
    }
}
