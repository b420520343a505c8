// src/services/ocorrencia_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::OcorrenciaRepository,
    models::auth::{Cargo, User},
    models::ocorrencia::{
        transicao_valida, AtualizarOcorrenciaPayload, CriarOcorrenciaPayload, Ocorrencia,
    },
    services::policy,
};

#[derive(Clone)]
pub struct OcorrenciaService {
    repo: OcorrenciaRepository,
}

impl OcorrenciaService {
    pub fn new(repo: OcorrenciaRepository) -> Self {
        Self { repo }
    }

    /// Lista apenas o que a política deixa o ator enxergar. Linha invisível
    /// não é erro: simplesmente não aparece.
    pub async fn listar_visiveis(&self, ator: &User) -> Result<Vec<Ocorrencia>, AppError> {
        let todas = self.repo.listar().await?;
        Ok(todas
            .into_iter()
            .filter(|ocorrencia| policy::pode_ver_ocorrencia(ator, ocorrencia))
            .collect())
    }

    // Registro invisível responde como inexistente, para não vazar que existe.
    pub async fn buscar(&self, ator: &User, id: Uuid) -> Result<Ocorrencia, AppError> {
        let ocorrencia = self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        if !policy::pode_ver_ocorrencia(ator, &ocorrencia) {
            return Err(AppError::NotFound);
        }
        Ok(ocorrencia)
    }

    // A permissão de criação é checada na rota; aqui só gravamos com a
    // autoria do ator autenticado.
    pub async fn criar(
        &self,
        ator: &User,
        payload: &CriarOcorrenciaPayload,
    ) -> Result<Ocorrencia, AppError> {
        self.repo
            .criar(payload, &ator.matricula, &ator.nome)
            .await
    }

    pub async fn atualizar(
        &self,
        ator: &User,
        id: Uuid,
        payload: &AtualizarOcorrenciaPayload,
    ) -> Result<Ocorrencia, AppError> {
        let atual = self.buscar(ator, id).await?;

        // Citado enxerga, mas só criador e secretários alteram.
        if !pode_editar(ator, &atual) {
            return Err(AppError::Forbidden);
        }

        if let Some(novo_status) = payload.status {
            if !transicao_valida(atual.status, novo_status) {
                return Err(AppError::TransicaoInvalida);
            }
        }

        self.repo
            .atualizar(
                id,
                payload.status,
                payload.descricao.as_deref(),
                payload.citados.as_deref(),
                payload.anexos.as_deref(),
            )
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn excluir(&self, ator: &User, id: Uuid) -> Result<(), AppError> {
        let atual = self.buscar(ator, id).await?;
        if !pode_editar(ator, &atual) {
            return Err(AppError::Forbidden);
        }

        if self.repo.excluir(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}

fn pode_editar(ator: &User, ocorrencia: &Ocorrencia) -> bool {
    matches!(ator.cargo, Cargo::Secretario | Cargo::SecretarioExecutivo)
        || ocorrencia.criador_id == ator.matricula
}
