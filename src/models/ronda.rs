// src/models/ronda.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validators::validar_cpf;

const MS_POR_DIA: i64 = 86_400_000;

/// Situação de uma medida protetiva, sempre derivada da data de validade.
/// A coluna `status` no banco é só cache de exibição; quem manda é
/// `StatusRondaMp::derivar`, recalculado a cada leitura e escrita.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_ronda_mp", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusRondaMp {
    Valida,
    AVencer,
    Vencida,
}

impl StatusRondaMp {
    /// `dias = teto((validade - agora) / 1 dia)`; negativo é vencida,
    /// até 7 dias é "a vencer", acima disso é válida.
    pub fn derivar(validade: DateTime<Utc>, agora: DateTime<Utc>) -> Self {
        let dias_restantes = dias_restantes(validade, agora);
        if dias_restantes < 0 {
            StatusRondaMp::Vencida
        } else if dias_restantes <= 7 {
            StatusRondaMp::AVencer
        } else {
            StatusRondaMp::Valida
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusRondaMp::Valida => "Válida",
            StatusRondaMp::AVencer => "A Vencer",
            StatusRondaMp::Vencida => "Vencida",
        }
    }

    pub fn cor(&self) -> &'static str {
        match self {
            StatusRondaMp::Valida => "#22c55e",
            StatusRondaMp::AVencer => "#eab308",
            StatusRondaMp::Vencida => "#ef4444",
        }
    }
}

// Teto da divisão em dias, inclusive para deltas negativos.
fn dias_restantes(validade: DateTime<Utc>, agora: DateTime<Utc>) -> i64 {
    let delta_ms = (validade - agora).num_milliseconds();
    (delta_ms + MS_POR_DIA - 1).div_euclid(MS_POR_DIA)
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RondaMp {
    pub id: Uuid,
    pub endereco: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Nome da pessoa protegida pela medida.
    pub beneficiario: String,
    pub cpf: String,
    pub telefone: Option<String>,
    pub validade: DateTime<Utc>,
    pub status: StatusRondaMp,
    pub observacoes: Option<String>,
    pub anexos: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriarRondaPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Rua das Palmeiras, 120")]
    pub endereco: String,

    pub latitude: f64,
    pub longitude: f64,

    #[validate(length(min = 1, message = "required"))]
    pub beneficiario: String,

    #[validate(custom(function = validar_cpf))]
    #[schema(example = "529.982.247-25")]
    pub cpf: String,

    pub telefone: Option<String>,

    pub validade: DateTime<Utc>,

    pub observacoes: Option<String>,

    #[serde(default)]
    pub anexos: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarRondaPayload {
    pub endereco: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub telefone: Option<String>,
    pub validade: Option<DateTime<Utc>>,
    pub observacoes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn agora() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).single().expect("data")
    }

    #[test]
    fn vencida_no_passado() {
        let t = agora();
        assert_eq!(
            StatusRondaMp::derivar(t - Duration::days(1), t),
            StatusRondaMp::Vencida
        );
    }

    #[test]
    fn a_vencer_dentro_de_sete_dias() {
        let t = agora();
        assert_eq!(
            StatusRondaMp::derivar(t + Duration::days(3), t),
            StatusRondaMp::AVencer
        );
    }

    #[test]
    fn valida_alem_de_sete_dias() {
        let t = agora();
        assert_eq!(
            StatusRondaMp::derivar(t + Duration::days(8), t),
            StatusRondaMp::Valida
        );
    }

    #[test]
    fn fronteira_exata_de_sete_dias() {
        let t = agora();
        // Exatamente 7 dias: teto(7) = 7, ainda "a vencer".
        assert_eq!(
            StatusRondaMp::derivar(t + Duration::days(7), t),
            StatusRondaMp::AVencer
        );
        // Um segundo além: teto sobe para 8, já válida.
        assert_eq!(
            StatusRondaMp::derivar(t + Duration::days(7) + Duration::seconds(1), t),
            StatusRondaMp::Valida
        );
    }

    #[test]
    fn vencendo_agora_ainda_nao_esta_vencida() {
        let t = agora();
        // Delta zero e delta de segundos atrás arredondam para 0 dias.
        assert_eq!(StatusRondaMp::derivar(t, t), StatusRondaMp::AVencer);
        assert_eq!(
            StatusRondaMp::derivar(t - Duration::seconds(1), t),
            StatusRondaMp::AVencer
        );
    }

    #[test]
    fn todo_status_tem_cor_e_rotulo() {
        for status in [StatusRondaMp::Valida, StatusRondaMp::AVencer, StatusRondaMp::Vencida] {
            assert!(status.cor().starts_with('#'));
            assert!(!status.label().is_empty());
        }
    }
}
