// src/handlers/armaria.rs

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
    models::armaria::{
        AbrirCautelaPayload, AtualizarItemPayload, CautelaArmaria, CriarItemPayload,
        DevolucaoPayload, ItemArmaria,
    },
};

// =============================================================================
//  1. INVENTÁRIO
// =============================================================================

// GET /api/armaria/itens
#[utoipa::path(
    get,
    path = "/api/armaria/itens",
    tag = "Armaria",
    responses((status = 200, description = "Inventário da armária", body = [ItemArmaria])),
    security(("api_jwt" = []))
)]
pub async fn listar_itens(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ItemArmaria>>, AppError> {
    let itens = app_state.armaria_service.listar_itens().await?;
    Ok(Json(itens))
}

// POST /api/armaria/itens
#[utoipa::path(
    post,
    path = "/api/armaria/itens",
    tag = "Armaria",
    request_body = CriarItemPayload,
    responses((status = 201, description = "Item cadastrado", body = ItemArmaria)),
    security(("api_jwt" = []))
)]
pub async fn criar_item(
    State(app_state): State<AppState>,
    Json(payload): Json<CriarItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let item = app_state.armaria_service.criar_item(&payload).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

// GET /api/armaria/itens/{id}
#[utoipa::path(
    get,
    path = "/api/armaria/itens/{id}",
    tag = "Armaria",
    params(("id" = Uuid, Path, description = "ID do item")),
    responses(
        (status = 200, description = "Item", body = ItemArmaria),
        (status = 404, description = "Item não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn buscar_item(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ItemArmaria>, AppError> {
    let item = app_state.armaria_service.buscar_item(id).await?;
    Ok(Json(item))
}

// PUT /api/armaria/itens/{id}
#[utoipa::path(
    put,
    path = "/api/armaria/itens/{id}",
    tag = "Armaria",
    params(("id" = Uuid, Path, description = "ID do item")),
    request_body = AtualizarItemPayload,
    responses((status = 200, description = "Item atualizado", body = ItemArmaria)),
    security(("api_jwt" = []))
)]
pub async fn atualizar_item(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarItemPayload>,
) -> Result<Json<ItemArmaria>, AppError> {
    let item = app_state.armaria_service.atualizar_item(id, &payload).await?;
    Ok(Json(item))
}

// =============================================================================
//  2. CAUTELAS
// =============================================================================

#[derive(Debug, Deserialize, IntoParams)]
pub struct CautelasQuery {
    /// Quando verdadeiro, devolve só as cautelas ainda em aberto.
    #[serde(default)]
    pub abertas: bool,
}

// GET /api/armaria/cautelas
#[utoipa::path(
    get,
    path = "/api/armaria/cautelas",
    tag = "Armaria",
    params(CautelasQuery),
    responses((status = 200, description = "Cautelas (histórico ou só abertas)", body = [CautelaArmaria])),
    security(("api_jwt" = []))
)]
pub async fn listar_cautelas(
    State(app_state): State<AppState>,
    Query(query): Query<CautelasQuery>,
) -> Result<Json<Vec<CautelaArmaria>>, AppError> {
    let cautelas = app_state
        .armaria_service
        .listar_cautelas(query.abertas)
        .await?;
    Ok(Json(cautelas))
}

// POST /api/armaria/cautelas
#[utoipa::path(
    post,
    path = "/api/armaria/cautelas",
    tag = "Armaria",
    request_body = AbrirCautelaPayload,
    responses(
        (status = 201, description = "Cautela aberta", body = CautelaArmaria),
        (status = 409, description = "Item indisponível ou já cautelado")
    ),
    security(("api_jwt" = []))
)]
pub async fn abrir_cautela(
    State(app_state): State<AppState>,
    Json(payload): Json<AbrirCautelaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let cautela = app_state.armaria_service.abrir_cautela(&payload).await?;

    Ok((StatusCode::CREATED, Json(cautela)))
}

// POST /api/armaria/cautelas/{id}/devolucao
#[utoipa::path(
    post,
    path = "/api/armaria/cautelas/{id}/devolucao",
    tag = "Armaria",
    params(("id" = Uuid, Path, description = "ID da cautela")),
    request_body = DevolucaoPayload,
    responses(
        (status = 200, description = "Devolução registrada", body = CautelaArmaria),
        (status = 404, description = "Cautela inexistente ou já devolvida")
    ),
    security(("api_jwt" = []))
)]
pub async fn registrar_devolucao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DevolucaoPayload>,
) -> Result<Json<CautelaArmaria>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let cautela = app_state
        .armaria_service
        .registrar_devolucao(id, &payload)
        .await?;
    Ok(Json(cautela))
}
