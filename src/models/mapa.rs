// src/models/mapa.rs

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

pub const PIN_OCORRENCIA: &str = "OCORRENCIA";
pub const PIN_RONDA_MP: &str = "RONDA_MP";

/// Ponto plotável no mapa, agregado de ocorrências e rondas com coordenadas.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MapPin {
    pub id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub titulo: String,
    #[schema(example = "OCORRENCIA")]
    pub tipo: String,
    pub status: Option<String>,
    /// Cor derivada do status, pronta para o marcador.
    #[schema(example = "#ef4444")]
    pub cor: Option<String>,
}
