// src/handlers/mapas.rs

use axum::{extract::State, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::mapa::MapPin,
};

// GET /api/mapas/pins
// Ocorrências entram filtradas pela política de visibilidade; rondas entram
// todas, com status derivado na hora.
#[utoipa::path(
    get,
    path = "/api/mapas/pins",
    tag = "Mapas",
    responses((status = 200, description = "Pontos plotáveis no mapa", body = [MapPin])),
    security(("api_jwt" = []))
)]
pub async fn pins(
    State(app_state): State<AppState>,
    AuthenticatedUser(ator): AuthenticatedUser,
) -> Result<Json<Vec<MapPin>>, AppError> {
    let pins = app_state.mapa_service.pins(&ator).await?;
    Ok(Json(pins))
}
