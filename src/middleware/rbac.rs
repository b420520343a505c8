// src/middleware/rbac.rs

use axum::{extract::FromRequestParts, http::request::Parts};
use std::marker::PhantomData;

use crate::{common::error::AppError, models::auth::User, services::policy};

/// 1. O Trait que define uma regra de acesso de rota.
/// A decisão em si vive nas funções puras de `services::policy`; aqui só
/// damos um tipo a cada regra para usá-la como extrator.
pub trait PolicyDef: Send + Sync + 'static {
    fn permitido(user: &User) -> bool;
    fn descricao() -> &'static str;
}

/// 2. O Extractor (Guardião)
pub struct RequirePolicy<T>(pub PhantomData<T>);

// 3. Implementação do FromRequestParts
impl<T, S> FromRequestParts<S> for RequirePolicy<T>
where
    T: PolicyDef,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // A. Extrai o usuário pendurado pelo auth_guard
        let user = parts.extensions.get::<User>().ok_or(AppError::InvalidToken)?;

        // B. Consulta a política (pura, sem I/O)
        if !T::permitido(user) {
            tracing::debug!(
                "Acesso negado: {} não pode {}",
                user.matricula,
                T::descricao()
            );
            return Err(AppError::Forbidden);
        }

        Ok(RequirePolicy(PhantomData))
    }
}

// ---
// DEFINIÇÃO DAS REGRAS (TIPOS)
// ---

pub struct PoliticaCriacaoOcorrencia;
impl PolicyDef for PoliticaCriacaoOcorrencia {
    fn permitido(user: &User) -> bool {
        policy::pode_criar_ocorrencia(user)
    }
    fn descricao() -> &'static str {
        "registrar ocorrências"
    }
}

pub struct PoliticaGestaoEventos;
impl PolicyDef for PoliticaGestaoEventos {
    fn permitido(user: &User) -> bool {
        policy::pode_gerenciar_eventos(user)
    }
    fn descricao() -> &'static str {
        "gerenciar eventos"
    }
}

pub struct PoliticaRelatorios;
impl PolicyDef for PoliticaRelatorios {
    fn permitido(user: &User) -> bool {
        policy::pode_acessar_relatorios(user)
    }
    fn descricao() -> &'static str {
        "acessar relatórios"
    }
}

pub struct PoliticaAprovacao;
impl PolicyDef for PoliticaAprovacao {
    fn permitido(user: &User) -> bool {
        policy::pode_aprovar_usuarios(user)
    }
    fn descricao() -> &'static str {
        "aprovar cadastros"
    }
}
