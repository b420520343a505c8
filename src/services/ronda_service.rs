// src/services/ronda_service.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::RondaRepository,
    models::ronda::{AtualizarRondaPayload, CriarRondaPayload, RondaMp, StatusRondaMp},
};

#[derive(Clone)]
pub struct RondaService {
    repo: RondaRepository,
}

impl RondaService {
    pub fn new(repo: RondaRepository) -> Self {
        Self { repo }
    }

    /// Lista com status recalculado da validade. O filtro, quando informado,
    /// compara contra o valor derivado, nunca contra a coluna cache.
    pub async fn listar(
        &self,
        filtro_status: Option<StatusRondaMp>,
    ) -> Result<Vec<RondaMp>, AppError> {
        let agora = Utc::now();
        let rondas = self.repo.listar().await?;

        Ok(rondas
            .into_iter()
            .map(|mut ronda| {
                ronda.status = StatusRondaMp::derivar(ronda.validade, agora);
                ronda
            })
            .filter(|ronda| filtro_status.is_none_or(|f| ronda.status == f))
            .collect())
    }

    pub async fn buscar(&self, id: Uuid) -> Result<RondaMp, AppError> {
        let mut ronda = self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        ronda.status = StatusRondaMp::derivar(ronda.validade, Utc::now());
        Ok(ronda)
    }

    pub async fn criar(&self, payload: &CriarRondaPayload) -> Result<RondaMp, AppError> {
        let status = StatusRondaMp::derivar(payload.validade, Utc::now());
        self.repo.criar(payload, status).await
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        payload: &AtualizarRondaPayload,
    ) -> Result<RondaMp, AppError> {
        let atual = self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        // Recalcula sempre, também quando a validade não mudou: o cache pode
        // ter envelhecido desde a última escrita.
        let validade_efetiva = payload.validade.unwrap_or(atual.validade);
        let status = StatusRondaMp::derivar(validade_efetiva, Utc::now());

        self.repo
            .atualizar(id, payload, Some(status))
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn excluir(&self, id: Uuid) -> Result<(), AppError> {
        if self.repo.excluir(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}
