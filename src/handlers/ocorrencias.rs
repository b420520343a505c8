// src/handlers/ocorrencias.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        auth::AuthenticatedUser,
        rbac::{PoliticaCriacaoOcorrencia, RequirePolicy},
    },
    models::ocorrencia::{AtualizarOcorrenciaPayload, CriarOcorrenciaPayload, Ocorrencia},
};

// GET /api/ocorrencias
// A resposta já vem filtrada pela política de visibilidade do ator.
#[utoipa::path(
    get,
    path = "/api/ocorrencias",
    tag = "Ocorrencias",
    responses((status = 200, description = "Ocorrências visíveis ao ator", body = [Ocorrencia])),
    security(("api_jwt" = []))
)]
pub async fn listar(
    State(app_state): State<AppState>,
    AuthenticatedUser(ator): AuthenticatedUser,
) -> Result<Json<Vec<Ocorrencia>>, AppError> {
    let ocorrencias = app_state.ocorrencia_service.listar_visiveis(&ator).await?;
    Ok(Json(ocorrencias))
}

// POST /api/ocorrencias
#[utoipa::path(
    post,
    path = "/api/ocorrencias",
    tag = "Ocorrencias",
    request_body = CriarOcorrenciaPayload,
    responses(
        (status = 201, description = "Ocorrência registrada", body = Ocorrencia),
        (status = 403, description = "Cargo sem permissão de registro")
    ),
    security(("api_jwt" = []))
)]
pub async fn criar(
    State(app_state): State<AppState>,
    _guard: RequirePolicy<PoliticaCriacaoOcorrencia>,
    AuthenticatedUser(ator): AuthenticatedUser,
    Json(payload): Json<CriarOcorrenciaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let ocorrencia = app_state.ocorrencia_service.criar(&ator, &payload).await?;

    Ok((StatusCode::CREATED, Json(ocorrencia)))
}

// GET /api/ocorrencias/{id}
#[utoipa::path(
    get,
    path = "/api/ocorrencias/{id}",
    tag = "Ocorrencias",
    params(("id" = Uuid, Path, description = "ID da ocorrência")),
    responses(
        (status = 200, description = "Ocorrência", body = Ocorrencia),
        (status = 404, description = "Inexistente ou invisível para o ator")
    ),
    security(("api_jwt" = []))
)]
pub async fn buscar(
    State(app_state): State<AppState>,
    AuthenticatedUser(ator): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Ocorrencia>, AppError> {
    let ocorrencia = app_state.ocorrencia_service.buscar(&ator, id).await?;
    Ok(Json(ocorrencia))
}

// PUT /api/ocorrencias/{id}
#[utoipa::path(
    put,
    path = "/api/ocorrencias/{id}",
    tag = "Ocorrencias",
    params(("id" = Uuid, Path, description = "ID da ocorrência")),
    request_body = AtualizarOcorrenciaPayload,
    responses(
        (status = 200, description = "Ocorrência atualizada", body = Ocorrencia),
        (status = 403, description = "Só criador e secretários alteram"),
        (status = 409, description = "Transição de status não permitida")
    ),
    security(("api_jwt" = []))
)]
pub async fn atualizar(
    State(app_state): State<AppState>,
    AuthenticatedUser(ator): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarOcorrenciaPayload>,
) -> Result<Json<Ocorrencia>, AppError> {
    let ocorrencia = app_state
        .ocorrencia_service
        .atualizar(&ator, id, &payload)
        .await?;
    Ok(Json(ocorrencia))
}

// DELETE /api/ocorrencias/{id}
#[utoipa::path(
    delete,
    path = "/api/ocorrencias/{id}",
    tag = "Ocorrencias",
    params(("id" = Uuid, Path, description = "ID da ocorrência")),
    responses(
        (status = 204, description = "Ocorrência excluída"),
        (status = 403, description = "Só criador e secretários excluem")
    ),
    security(("api_jwt" = []))
)]
pub async fn excluir(
    State(app_state): State<AppState>,
    AuthenticatedUser(ator): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.ocorrencia_service.excluir(&ator, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
