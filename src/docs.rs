// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,

        // --- Users ---
        handlers::auth::get_me,
        handlers::usuarios::listar_pendentes,
        handlers::usuarios::aprovar,

        // --- OCORRENCIAS ---
        handlers::ocorrencias::listar,
        handlers::ocorrencias::criar,
        handlers::ocorrencias::buscar,
        handlers::ocorrencias::atualizar,
        handlers::ocorrencias::excluir,

        // --- ARMARIA ---
        handlers::armaria::listar_itens,
        handlers::armaria::criar_item,
        handlers::armaria::buscar_item,
        handlers::armaria::atualizar_item,
        handlers::armaria::listar_cautelas,
        handlers::armaria::abrir_cautela,
        handlers::armaria::registrar_devolucao,

        // --- EVENTOS ---
        handlers::eventos::listar,
        handlers::eventos::buscar,
        handlers::eventos::criar,
        handlers::eventos::atualizar,
        handlers::eventos::excluir,

        // --- RONDA MP ---
        handlers::rondas::listar,
        handlers::rondas::criar,
        handlers::rondas::buscar,
        handlers::rondas::atualizar,
        handlers::rondas::excluir,

        // --- RELATORIOS ---
        handlers::relatorios::resumo,
        handlers::relatorios::exportar,

        // --- MAPAS ---
        handlers::mapas::pins,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Lotacao,
            models::auth::Cargo,
            models::auth::StatusUsuario,
            models::auth::User,
            models::auth::UsuarioPublico,
            models::auth::RegistroPayload,
            models::auth::RegistroResponse,
            models::auth::LoginPayload,
            models::auth::AuthResponse,

            // --- Ocorrencias ---
            models::ocorrencia::TipoOcorrencia,
            models::ocorrencia::StatusOcorrencia,
            models::ocorrencia::Ocorrencia,
            models::ocorrencia::CriarOcorrenciaPayload,
            models::ocorrencia::AtualizarOcorrenciaPayload,

            // --- Armaria ---
            models::armaria::TipoItemArmaria,
            models::armaria::StatusItem,
            models::armaria::ItemArmaria,
            models::armaria::CautelaArmaria,
            models::armaria::CriarItemPayload,
            models::armaria::AtualizarItemPayload,
            models::armaria::AbrirCautelaPayload,
            models::armaria::DevolucaoPayload,

            // --- Eventos ---
            models::evento::TipoEvento,
            models::evento::StatusEvento,
            models::evento::Evento,
            models::evento::CriarEventoPayload,
            models::evento::AtualizarEventoPayload,

            // --- Ronda MP ---
            models::ronda::StatusRondaMp,
            models::ronda::RondaMp,
            models::ronda::CriarRondaPayload,
            models::ronda::AtualizarRondaPayload,

            // --- Relatorios / Mapas ---
            models::relatorio::ResumoRelatorio,
            models::mapa::MapPin,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Cadastro e login"),
        (name = "Users", description = "Perfil e aprovação de cadastros"),
        (name = "Ocorrencias", description = "Ocorrências e atendimentos"),
        (name = "Armaria", description = "Inventário e cautelas"),
        (name = "Eventos", description = "Agenda institucional"),
        (name = "RondaMP", description = "Medidas protetivas (Ronda Maria da Penha)"),
        (name = "Relatorios", description = "Indicadores consolidados"),
        (name = "Mapas", description = "Visualização geográfica"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_jwt",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}
