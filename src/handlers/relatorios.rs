// src/handlers/relatorios.rs

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{PoliticaRelatorios, RequirePolicy},
    models::relatorio::ResumoRelatorio,
};

// GET /api/relatorios/resumo
#[utoipa::path(
    get,
    path = "/api/relatorios/resumo",
    tag = "Relatorios",
    responses(
        (status = 200, description = "Indicadores consolidados", body = ResumoRelatorio),
        (status = 403, description = "Relatórios são restritos aos secretários")
    ),
    security(("api_jwt" = []))
)]
pub async fn resumo(
    State(app_state): State<AppState>,
    _guard: RequirePolicy<PoliticaRelatorios>,
) -> Result<Json<ResumoRelatorio>, AppError> {
    let resumo = app_state.relatorio_service.resumo().await?;
    Ok(Json(resumo))
}

// GET /api/relatorios/export
#[utoipa::path(
    get,
    path = "/api/relatorios/export",
    tag = "Relatorios",
    responses(
        (status = 200, description = "Relatório consolidado em PDF", body = Vec<u8>, content_type = "application/pdf"),
        (status = 403, description = "Relatórios são restritos aos secretários")
    ),
    security(("api_jwt" = []))
)]
pub async fn exportar(
    State(app_state): State<AppState>,
    _guard: RequirePolicy<PoliticaRelatorios>,
) -> Result<impl IntoResponse, AppError> {
    let pdf = app_state.relatorio_service.exportar_pdf().await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"relatorio-integra.pdf\"",
            ),
        ],
        pdf,
    ))
}
