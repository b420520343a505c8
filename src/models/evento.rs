// src/models/evento.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::auth::Lotacao;

/// Marcador de público-alvo que contempla todas as lotações.
pub const PUBLICO_TODOS: &str = "TODOS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_evento", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoEvento {
    Reuniao,
    Treinamento,
    Cerimonia,
    Outros,
}

impl TipoEvento {
    pub fn label(&self) -> &'static str {
        match self {
            TipoEvento::Reuniao => "Reunião",
            TipoEvento::Treinamento => "Treinamento",
            TipoEvento::Cerimonia => "Cerimônia",
            TipoEvento::Outros => "Outros",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_evento", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusEvento {
    Agendado,
    EmAndamento,
    Concluido,
    Cancelado,
}

impl StatusEvento {
    pub fn label(&self) -> &'static str {
        match self {
            StatusEvento::Agendado => "Agendado",
            StatusEvento::EmAndamento => "Em Andamento",
            StatusEvento::Concluido => "Concluído",
            StatusEvento::Cancelado => "Cancelado",
        }
    }

    pub fn cor(&self) -> &'static str {
        match self {
            StatusEvento::Agendado => "#3b82f6",
            StatusEvento::EmAndamento => "#eab308",
            StatusEvento::Concluido => "#22c55e",
            StatusEvento::Cancelado => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Evento {
    pub id: Uuid,
    pub titulo: String,
    pub descricao: String,
    pub data_inicio: DateTime<Utc>,
    pub data_fim: Option<DateTime<Utc>>,
    pub local: String,
    pub tipo: TipoEvento,
    pub status: StatusEvento,
    pub anexos: Vec<String>,
    /// Lotações contempladas (tags) ou o marcador `TODOS`.
    pub publico: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Evento {
    /// O evento contempla a lotação informada?
    pub fn contempla(&self, lotacao: Lotacao) -> bool {
        self.publico
            .iter()
            .any(|p| p == PUBLICO_TODOS || p == lotacao.tag())
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriarEventoPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Treinamento de abordagem")]
    pub titulo: String,

    #[validate(length(min = 1, message = "required"))]
    pub descricao: String,

    pub data_inicio: DateTime<Utc>,
    pub data_fim: Option<DateTime<Utc>>,

    #[validate(length(min = 1, message = "required"))]
    pub local: String,

    pub tipo: TipoEvento,

    #[serde(default)]
    pub anexos: Vec<String>,

    /// Vazio equivale a `TODOS`.
    #[serde(default)]
    pub publico: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarEventoPayload {
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub data_inicio: Option<DateTime<Utc>>,
    pub data_fim: Option<DateTime<Utc>>,
    pub local: Option<String>,
    pub status: Option<StatusEvento>,
    pub publico: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn evento_com_publico(publico: Vec<String>) -> Evento {
        let agora = Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).single().expect("data");
        Evento {
            id: Uuid::nil(),
            titulo: "Reunião geral".to_string(),
            descricao: String::new(),
            data_inicio: agora,
            data_fim: None,
            local: "Auditório".to_string(),
            tipo: TipoEvento::Reuniao,
            status: StatusEvento::Agendado,
            anexos: vec![],
            publico,
            created_at: agora,
            updated_at: agora,
        }
    }

    #[test]
    fn todos_contempla_qualquer_lotacao() {
        let evento = evento_com_publico(vec![PUBLICO_TODOS.to_string()]);
        assert!(evento.contempla(Lotacao::Secretaria));
        assert!(evento.contempla(Lotacao::GcmBy));
        assert!(evento.contempla(Lotacao::DefesaCivil));
        assert!(evento.contempla(Lotacao::VigilanciaPatrimonial));
    }

    #[test]
    fn publico_restrito_filtra_por_lotacao() {
        let evento = evento_com_publico(vec!["GCM_BY".to_string()]);
        assert!(evento.contempla(Lotacao::GcmBy));
        assert!(!evento.contempla(Lotacao::DefesaCivil));
    }
}
