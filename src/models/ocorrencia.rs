// src/models/ocorrencia.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_ocorrencia", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoOcorrencia {
    Atendimento,
    Patrulhamento,
    OcorrenciaPolicial,
    AcidenteTransito,
    DisturbioOrdemPublica,
    Outros,
}

impl TipoOcorrencia {
    pub fn label(&self) -> &'static str {
        match self {
            TipoOcorrencia::Atendimento => "Atendimento",
            TipoOcorrencia::Patrulhamento => "Patrulhamento",
            TipoOcorrencia::OcorrenciaPolicial => "Ocorrência Policial",
            TipoOcorrencia::AcidenteTransito => "Acidente de Trânsito",
            TipoOcorrencia::DisturbioOrdemPublica => "Distúrbio da Ordem Pública",
            TipoOcorrencia::Outros => "Outros",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_ocorrencia", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusOcorrencia {
    Aberta,
    EmAndamento,
    Concluida,
    Cancelada,
}

impl StatusOcorrencia {
    pub fn label(&self) -> &'static str {
        match self {
            StatusOcorrencia::Aberta => "Aberta",
            StatusOcorrencia::EmAndamento => "Em Andamento",
            StatusOcorrencia::Concluida => "Concluída",
            StatusOcorrencia::Cancelada => "Cancelada",
        }
    }

    pub fn cor(&self) -> &'static str {
        match self {
            StatusOcorrencia::Aberta => "#3b82f6",
            StatusOcorrencia::EmAndamento => "#eab308",
            StatusOcorrencia::Concluida => "#22c55e",
            StatusOcorrencia::Cancelada => "#ef4444",
        }
    }

    pub fn encerrada(&self) -> bool {
        matches!(self, StatusOcorrencia::Concluida | StatusOcorrencia::Cancelada)
    }
}

/// Transições permitidas no ciclo de vida:
/// ABERTA -> EM_ANDAMENTO | CANCELADA, EM_ANDAMENTO -> CONCLUIDA | CANCELADA.
/// CONCLUIDA e CANCELADA são terminais.
pub fn transicao_valida(de: StatusOcorrencia, para: StatusOcorrencia) -> bool {
    use StatusOcorrencia::*;
    matches!(
        (de, para),
        (Aberta, EmAndamento) | (Aberta, Cancelada) | (EmAndamento, Concluida) | (EmAndamento, Cancelada)
    )
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ocorrencia {
    pub id: Uuid,
    #[schema(example = "Patrulhamento no centro")]
    pub titulo: String,
    pub descricao: String,
    pub tipo: TipoOcorrencia,
    pub status: StatusOcorrencia,
    pub endereco: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Matrícula de quem registrou a ocorrência.
    #[schema(example = "SSP000002")]
    pub criador_id: String,
    pub criador_nome: String,
    /// Matrículas citadas; não precisam resolver para usuários existentes.
    pub citados: Vec<String>,
    pub anexos: Vec<String>,
    pub data_ocorrencia: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriarOcorrenciaPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Atendimento na Praça Central")]
    pub titulo: String,

    #[validate(length(min = 1, message = "required"))]
    pub descricao: String,

    pub tipo: TipoOcorrencia,

    #[validate(length(min = 1, message = "required"))]
    pub endereco: String,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    #[serde(default)]
    pub citados: Vec<String>,

    #[serde(default)]
    pub anexos: Vec<String>,

    pub data_ocorrencia: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarOcorrenciaPayload {
    pub status: Option<StatusOcorrencia>,
    pub descricao: Option<String>,
    pub citados: Option<Vec<String>>,
    pub anexos: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use StatusOcorrencia::*;

    #[test]
    fn ciclo_de_vida_linear() {
        assert!(transicao_valida(Aberta, EmAndamento));
        assert!(transicao_valida(EmAndamento, Concluida));
        assert!(transicao_valida(EmAndamento, Cancelada));
        assert!(transicao_valida(Aberta, Cancelada));
    }

    #[test]
    fn estados_terminais_nao_saem() {
        for destino in [Aberta, EmAndamento, Concluida, Cancelada] {
            assert!(!transicao_valida(Concluida, destino));
            assert!(!transicao_valida(Cancelada, destino));
        }
    }

    #[test]
    fn nao_pula_andamento_nem_reabre() {
        assert!(!transicao_valida(Aberta, Concluida));
        assert!(!transicao_valida(EmAndamento, Aberta));
        assert!(!transicao_valida(Aberta, Aberta));
    }

    #[test]
    fn todo_status_tem_cor_e_rotulo() {
        for status in [Aberta, EmAndamento, Concluida, Cancelada] {
            assert!(status.cor().starts_with('#'));
            assert!(!status.label().is_empty());
        }
    }
}
