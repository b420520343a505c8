// src/handlers/rondas.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::ronda::{AtualizarRondaPayload, CriarRondaPayload, RondaMp, StatusRondaMp},
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct RondasQuery {
    /// Filtro comparado contra o status DERIVADO da validade.
    pub status: Option<StatusRondaMp>,
}

// GET /api/ronda-mp
#[utoipa::path(
    get,
    path = "/api/ronda-mp",
    tag = "RondaMP",
    params(RondasQuery),
    responses((status = 200, description = "Rondas com status recalculado", body = [RondaMp])),
    security(("api_jwt" = []))
)]
pub async fn listar(
    State(app_state): State<AppState>,
    Query(query): Query<RondasQuery>,
) -> Result<Json<Vec<RondaMp>>, AppError> {
    let rondas = app_state.ronda_service.listar(query.status).await?;
    Ok(Json(rondas))
}

// POST /api/ronda-mp
#[utoipa::path(
    post,
    path = "/api/ronda-mp",
    tag = "RondaMP",
    request_body = CriarRondaPayload,
    responses(
        (status = 201, description = "Medida protetiva registrada", body = RondaMp),
        (status = 400, description = "CPF ou campos inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn criar(
    State(app_state): State<AppState>,
    Json(payload): Json<CriarRondaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let ronda = app_state.ronda_service.criar(&payload).await?;

    Ok((StatusCode::CREATED, Json(ronda)))
}

// GET /api/ronda-mp/{id}
#[utoipa::path(
    get,
    path = "/api/ronda-mp/{id}",
    tag = "RondaMP",
    params(("id" = Uuid, Path, description = "ID da ronda")),
    responses(
        (status = 200, description = "Ronda com status recalculado", body = RondaMp),
        (status = 404, description = "Ronda não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn buscar(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RondaMp>, AppError> {
    let ronda = app_state.ronda_service.buscar(id).await?;
    Ok(Json(ronda))
}

// PUT /api/ronda-mp/{id}
#[utoipa::path(
    put,
    path = "/api/ronda-mp/{id}",
    tag = "RondaMP",
    params(("id" = Uuid, Path, description = "ID da ronda")),
    request_body = AtualizarRondaPayload,
    responses(
        (status = 200, description = "Ronda atualizada", body = RondaMp),
        (status = 404, description = "Ronda não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn atualizar(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarRondaPayload>,
) -> Result<Json<RondaMp>, AppError> {
    let ronda = app_state.ronda_service.atualizar(id, &payload).await?;
    Ok(Json(ronda))
}

// DELETE /api/ronda-mp/{id}
#[utoipa::path(
    delete,
    path = "/api/ronda-mp/{id}",
    tag = "RondaMP",
    params(("id" = Uuid, Path, description = "ID da ronda")),
    responses((status = 204, description = "Ronda excluída")),
    security(("api_jwt" = []))
)]
pub async fn excluir(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.ronda_service.excluir(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
