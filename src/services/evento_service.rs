// src/services/evento_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::EventoRepository,
    models::auth::User,
    models::evento::{AtualizarEventoPayload, CriarEventoPayload, Evento, PUBLICO_TODOS},
    services::policy,
};

#[derive(Clone)]
pub struct EventoService {
    repo: EventoRepository,
}

impl EventoService {
    pub fn new(repo: EventoRepository) -> Self {
        Self { repo }
    }

    /// Gestores veem a agenda inteira; os demais, o que contempla sua lotação.
    pub async fn listar_visiveis(&self, ator: &User) -> Result<Vec<Evento>, AppError> {
        let todos = self.repo.listar().await?;
        Ok(todos
            .into_iter()
            .filter(|evento| policy::pode_ver_evento(ator, evento))
            .collect())
    }

    pub async fn buscar(&self, ator: &User, id: Uuid) -> Result<Evento, AppError> {
        let evento = self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        if !policy::pode_ver_evento(ator, &evento) {
            return Err(AppError::NotFound);
        }
        Ok(evento)
    }

    // Criação/edição/exclusão já chegam aqui barradas pela guarda de rota
    // (gestão de eventos é do gabinete).
    pub async fn criar(&self, payload: &CriarEventoPayload) -> Result<Evento, AppError> {
        // Público vazio equivale a aberto para todos.
        let publico: Vec<String> = if payload.publico.is_empty() {
            vec![PUBLICO_TODOS.to_string()]
        } else {
            payload.publico.clone()
        };

        self.repo.criar(payload, &publico).await
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        payload: &AtualizarEventoPayload,
    ) -> Result<Evento, AppError> {
        self.repo
            .atualizar(id, payload)
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
