// src/models/relatorio.rs

use serde::Serialize;
use utoipa::ToSchema;

// Resumo consolidado (os cards da tela de relatórios)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumoRelatorio {
    pub ocorrencias_abertas: i64,
    pub ocorrencias_em_andamento: i64,
    pub ocorrencias_concluidas: i64,
    pub ocorrencias_canceladas: i64,

    pub eventos_agendados: i64,
    pub eventos_concluidos: i64,

    // Rondas contadas pelo status DERIVADO da validade, não pela coluna cache.
    pub rondas_validas: i64,
    pub rondas_a_vencer: i64,
    pub rondas_vencidas: i64,

    pub cautelas_abertas: i64,
    pub usuarios_pendentes: i64,
}
