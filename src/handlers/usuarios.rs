// src/handlers/usuarios.rs

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, rbac::{PoliticaAprovacao, RequirePolicy}},
    models::auth::User,
};

// GET /api/users/pendentes
#[utoipa::path(
    get,
    path = "/api/users/pendentes",
    tag = "Users",
    responses(
        (status = 200, description = "Cadastros aguardando aprovação", body = [User]),
        (status = 403, description = "Apenas secretários aprovam cadastros")
    ),
    security(("api_jwt" = []))
)]
pub async fn listar_pendentes(
    State(app_state): State<AppState>,
    _guard: RequirePolicy<PoliticaAprovacao>,
) -> Result<Json<Vec<User>>, AppError> {
    let pendentes = app_state.auth_service.listar_pendentes().await?;
    Ok(Json(pendentes))
}

// POST /api/users/{id}/aprovar
#[utoipa::path(
    post,
    path = "/api/users/{id}/aprovar",
    tag = "Users",
    params(("id" = Uuid, Path, description = "ID do usuário pendente")),
    responses(
        (status = 200, description = "Usuário aprovado e ativado", body = User),
        (status = 403, description = "Apenas secretários aprovam cadastros"),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn aprovar(
    State(app_state): State<AppState>,
    _guard: RequirePolicy<PoliticaAprovacao>,
    AuthenticatedUser(aprovador): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let aprovado = app_state.auth_service.aprovar_usuario(id, &aprovador).await?;
    Ok(Json(aprovado))
}
