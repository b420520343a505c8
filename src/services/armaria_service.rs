// src/services/armaria_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ArmariaRepository,
    models::armaria::{
        AbrirCautelaPayload, AtualizarItemPayload, CautelaArmaria, CriarItemPayload,
        DevolucaoPayload, ItemArmaria, StatusItem,
    },
};

#[derive(Clone)]
pub struct ArmariaService {
    repo: ArmariaRepository,
    pool: PgPool,
}

impl ArmariaService {
    pub fn new(repo: ArmariaRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    // --- ITENS ---

    pub async fn listar_itens(&self) -> Result<Vec<ItemArmaria>, AppError> {
        self.repo.listar_itens().await
    }

    pub async fn buscar_item(&self, id: Uuid) -> Result<ItemArmaria, AppError> {
        self.repo.find_item(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn criar_item(&self, payload: &CriarItemPayload) -> Result<ItemArmaria, AppError> {
        self.repo.criar_item(payload).await
    }

    pub async fn atualizar_item(
        &self,
        id: Uuid,
        payload: &AtualizarItemPayload,
    ) -> Result<ItemArmaria, AppError> {
        self.repo
            .atualizar_item(
                id,
                payload.status,
                payload.alocacao.as_deref(),
                payload.observacoes.as_deref(),
            )
            .await?
            .ok_or(AppError::NotFound)
    }

    // --- CAUTELAS ---

    pub async fn listar_cautelas(
        &self,
        somente_abertas: bool,
    ) -> Result<Vec<CautelaArmaria>, AppError> {
        self.repo.listar_cautelas(somente_abertas).await
    }

    /// Abre uma cautela respeitando as duas regras do acervo: o item precisa
    /// estar ATIVO e não pode haver outra cautela aberta para ele.
    pub async fn abrir_cautela(
        &self,
        payload: &AbrirCautelaPayload,
    ) -> Result<CautelaArmaria, AppError> {
        let item = self
            .repo
            .find_item(payload.item_id)
            .await?
            .ok_or(AppError::NotFound)?;

        if item.status != StatusItem::Ativo {
            return Err(AppError::ItemIndisponivel);
        }

        let mut tx = self.pool.begin().await?;

        if self
            .repo
            .cautela_aberta_do_item(&mut *tx, payload.item_id)
            .await?
            .is_some()
        {
            return Err(AppError::CautelaJaAberta);
        }

        let cautela = self.repo.abrir_cautela(&mut *tx, payload).await?;

        tx.commit().await?;

        Ok(cautela)
    }

    /// Fecha a cautela registrando devolução. Cautela já devolvida (ou
    /// inexistente) responde como não encontrada.
    pub async fn registrar_devolucao(
        &self,
        id: Uuid,
        payload: &DevolucaoPayload,
    ) -> Result<CautelaArmaria, AppError> {
        self.repo
            .registrar_devolucao(
                id,
                &payload.condicao_retorno,
                &payload.responsavel_recebimento,
            )
            .await?
            .ok_or(AppError::NotFound)
    }
}
