// src/models/armaria.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_item_armaria", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoItemArmaria {
    ArmaFogo,
    Municao,
    Colete,
    Radio,
    Taser,
    Algemas,
    Outros,
}

impl TipoItemArmaria {
    pub fn label(&self) -> &'static str {
        match self {
            TipoItemArmaria::ArmaFogo => "Arma de Fogo",
            TipoItemArmaria::Municao => "Munição",
            TipoItemArmaria::Colete => "Colete Balístico",
            TipoItemArmaria::Radio => "Rádio",
            TipoItemArmaria::Taser => "Taser",
            TipoItemArmaria::Algemas => "Algemas",
            TipoItemArmaria::Outros => "Outros",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_item", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusItem {
    Ativo,
    Manutencao,
    Baixado,
}

impl StatusItem {
    pub fn label(&self) -> &'static str {
        match self {
            StatusItem::Ativo => "Ativo",
            StatusItem::Manutencao => "Em Manutenção",
            StatusItem::Baixado => "Baixado",
        }
    }

    pub fn cor(&self) -> &'static str {
        match self {
            StatusItem::Ativo => "#22c55e",
            StatusItem::Manutencao => "#eab308",
            StatusItem::Baixado => "#6b7280",
        }
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemArmaria {
    pub id: Uuid,
    pub tipo: TipoItemArmaria,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub numero_serie: Option<String>,
    #[schema(example = "GCM-0042")]
    pub etiqueta: Option<String>,
    pub calibre: Option<String>,
    pub nivel: Option<String>,
    pub status: StatusItem,
    pub alocacao: String,
    pub observacoes: Option<String>,
    pub anexos: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Cautela: vínculo de um item a um servidor por um período.
/// Aberta enquanto `data_devolucao` for nula; no máximo uma aberta por item.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CautelaArmaria {
    pub id: Uuid,
    pub item_id: Uuid,
    /// Matrícula do servidor que recebeu o item.
    pub servidor_id: String,
    pub data_saida: DateTime<Utc>,
    pub previsao_devolucao: Option<DateTime<Utc>>,
    pub condicao_entrega: String,
    pub responsavel_entrega: String,
    pub data_devolucao: Option<DateTime<Utc>>,
    pub condicao_retorno: Option<String>,
    pub responsavel_recebimento: Option<String>,
    pub observacoes: Option<String>,
    pub anexos: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl CautelaArmaria {
    pub fn aberta(&self) -> bool {
        self.data_devolucao.is_none()
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriarItemPayload {
    pub tipo: TipoItemArmaria,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub numero_serie: Option<String>,
    pub etiqueta: Option<String>,
    pub calibre: Option<String>,
    pub nivel: Option<String>,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Armária Central")]
    pub alocacao: String,

    pub observacoes: Option<String>,

    #[serde(default)]
    pub anexos: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarItemPayload {
    pub status: Option<StatusItem>,
    pub alocacao: Option<String>,
    pub observacoes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AbrirCautelaPayload {
    pub item_id: Uuid,

    /// Matrícula do servidor que recebe o item.
    #[validate(length(min = 1, message = "required"))]
    pub servidor_id: String,

    pub previsao_devolucao: Option<DateTime<Utc>>,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Em perfeito estado")]
    pub condicao_entrega: String,

    #[validate(length(min = 1, message = "required"))]
    pub responsavel_entrega: String,

    pub observacoes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevolucaoPayload {
    #[validate(length(min = 1, message = "required"))]
    pub condicao_retorno: String,

    #[validate(length(min = 1, message = "required"))]
    pub responsavel_recebimento: String,
}
