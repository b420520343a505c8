// src/handlers/eventos.rs

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
        rbac::{PoliticaGestaoEventos, RequirePolicy},
    },
    models::evento::{AtualizarEventoPayload, CriarEventoPayload, Evento},
};

// GET /api/eventos
#[utoipa::path(
    get,
    path = "/api/eventos",
    tag = "Eventos",
    responses((status = 200, description = "Eventos visíveis à lotação do ator", body = [Evento])),
    security(("api_jwt" = []))
)]
pub async fn listar(
    State(app_state): State<AppState>,
    AuthenticatedUser(ator): AuthenticatedUser,
) -> Result<Json<Vec<Evento>>, AppError> {
    let eventos = app_state.evento_service.listar_visiveis(&ator).await?;
    Ok(Json(eventos))
}

// GET /api/eventos/{id}
#[utoipa::path(
    get,
    path = "/api/eventos/{id}",
    tag = "Eventos",
    params(("id" = Uuid, Path, description = "ID do evento")),
    responses(
        (status = 200, description = "Evento", body = Evento),
        (status = 404, description = "Inexistente ou fora do público-alvo")
    ),
    security(("api_jwt" = []))
)]
pub async fn buscar(
    State(app_state): State<AppState>,
    AuthenticatedUser(ator): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Evento>, AppError> {
    let evento = app_state.evento_service.buscar(&ator, id).await?;
    Ok(Json(evento))
}

// POST /api/eventos
#[utoipa::path(
    post,
    path = "/api/eventos",
    tag = "Eventos",
    request_body = CriarEventoPayload,
    responses(
        (status = 201, description = "Evento agendado", body = Evento),
        (status = 403, description = "Gestão de eventos é do gabinete")
    ),
    security(("api_jwt" = []))
)]
pub async fn criar(
    State(app_state): State<AppState>,
    _guard: RequirePolicy<PoliticaGestaoEventos>,
    Json(payload): Json<CriarEventoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let evento = app_state.evento_service.criar(&payload).await?;

    Ok((StatusCode::CREATED, Json(evento)))
}

// PUT /api/eventos/{id}
#[utoipa::path(
    put,
    path = "/api/eventos/{id}",
    tag = "Eventos",
    params(("id" = Uuid, Path, description = "ID do evento")),
    request_body = AtualizarEventoPayload,
    responses(
        (status = 200, description = "Evento atualizado", body = Evento),
        (status = 403, description = "Gestão de eventos é do gabinete")
    ),
    security(("api_jwt" = []))
)]
pub async fn atualizar(
    State(app_state): State<AppState>,
    _guard: RequirePolicy<PoliticaGestaoEventos>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarEventoPayload>,
) -> Result<Json<Evento>, AppError> {
    let evento = app_state.evento_service.atualizar(id, &payload).await?;
    Ok(Json(evento))
}

// DELETE /api/eventos/{id}
#[utoipa::path(
    delete,
    path = "/api/eventos/{id}",
    tag = "Eventos",
    params(("id" = Uuid, Path, description = "ID do evento")),
    responses(
        (status = 204, description = "Evento excluído"),
        (status = 403, description = "Gestão de eventos é do gabinete")
    ),
    security(("api_jwt" = []))
)]
pub async fn excluir(
    State(app_state): State<AppState>,
    _guard: RequirePolicy<PoliticaGestaoEventos>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.evento_service.excluir(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
