// src/services/relatorio_service.rs

use chrono::Utc;
use genpdf::{elements, style, Element};

use crate::{
    common::error::AppError,
    common::validators::formatar_instante_br,
    db::{RelatorioRepository, RondaRepository},
    models::relatorio::ResumoRelatorio,
    models::ronda::StatusRondaMp,
};

#[derive(Clone)]
pub struct RelatorioService {
    relatorio_repo: RelatorioRepository,
    ronda_repo: RondaRepository,
}

impl RelatorioService {
    pub fn new(relatorio_repo: RelatorioRepository, ronda_repo: RondaRepository) -> Self {
        Self {
            relatorio_repo,
            ronda_repo,
        }
    }

    pub async fn resumo(&self) -> Result<ResumoRelatorio, AppError> {
        let contagens = self.relatorio_repo.contagens().await?;

        // Rondas são contadas pelo status derivado da validade, não pela
        // coluna cache.
        let agora = Utc::now();
        let mut rondas_validas = 0;
        let mut rondas_a_vencer = 0;
        let mut rondas_vencidas = 0;
        for validade in self.ronda_repo.listar_validades().await? {
            match StatusRondaMp::derivar(validade, agora) {
                StatusRondaMp::Valida => rondas_validas += 1,
                StatusRondaMp::AVencer => rondas_a_vencer += 1,
                StatusRondaMp::Vencida => rondas_vencidas += 1,
            }
        }

        Ok(ResumoRelatorio {
            ocorrencias_abertas: contagens.ocorrencias_abertas,
            ocorrencias_em_andamento: contagens.ocorrencias_em_andamento,
            ocorrencias_concluidas: contagens.ocorrencias_concluidas,
            ocorrencias_canceladas: contagens.ocorrencias_canceladas,
            eventos_agendados: contagens.eventos_agendados,
            eventos_concluidos: contagens.eventos_concluidos,
            rondas_validas,
            rondas_a_vencer,
            rondas_vencidas,
            cautelas_abertas: contagens.cautelas_abertas,
            usuarios_pendentes: contagens.usuarios_pendentes,
        })
    }

    /// Gera o relatório consolidado em PDF, renderizado em memória.
    pub async fn exportar_pdf(&self) -> Result<Vec<u8>, AppError> {
        let resumo = self.resumo().await?;

        // Carrega a fonte da pasta 'fonts/'
        let font_family = genpdf::fonts::from_files("./fonts", "Roboto", None)
            .map_err(|_| AppError::FontNotFound("Fonte não encontrada na pasta ./fonts".to_string()))?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title("Relatório Consolidado - INTEGRA SSP-BY");
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        doc.push(
            elements::Paragraph::new("SECRETARIA DE SEGURANÇA PÚBLICA")
                .styled(style::Style::new().bold().with_font_size(18)),
        );
        doc.push(
            elements::Paragraph::new("Relatório Consolidado")
                .styled(style::Style::new().with_font_size(14)),
        );
        doc.push(elements::Paragraph::new(format!(
            "Emitido em: {}",
            formatar_instante_br(&Utc::now())
        )));
        doc.push(elements::Break::new(2));

        // --- TABELA DE INDICADORES ---
        let mut table = elements::TableLayout::new(vec![4, 2]);
        table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

        let style_bold = style::Style::new().bold();
        table
            .row()
            .element(elements::Paragraph::new("Indicador").styled(style_bold))
            .element(elements::Paragraph::new("Total").styled(style_bold))
            .push()
            .expect("Table error");

        let linhas = [
            ("Ocorrências abertas", resumo.ocorrencias_abertas),
            ("Ocorrências em andamento", resumo.ocorrencias_em_andamento),
            ("Ocorrências concluídas", resumo.ocorrencias_concluidas),
            ("Ocorrências canceladas", resumo.ocorrencias_canceladas),
            ("Eventos agendados", resumo.eventos_agendados),
            ("Eventos concluídos", resumo.eventos_concluidos),
            ("Rondas MP válidas", resumo.rondas_validas),
            ("Rondas MP a vencer", resumo.rondas_a_vencer),
            ("Rondas MP vencidas", resumo.rondas_vencidas),
            ("Cautelas em aberto", resumo.cautelas_abertas),
            ("Cadastros aguardando aprovação", resumo.usuarios_pendentes),
        ];

        for (rotulo, total) in linhas {
            table
                .row()
                .element(elements::Paragraph::new(rotulo))
                .element(elements::Paragraph::new(format!("{total}")))
                .push()
                .expect("Table row error");
        }

        doc.push(table);
        doc.push(elements::Break::new(2));

        doc.push(
            elements::Paragraph::new("Documento gerado pelo INTEGRA SSP-BY.")
                .styled(style::Style::new().italic().with_font_size(8)),
        );

        // Renderiza para buffer (memória)
        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;

        Ok(buffer)
    }
}
