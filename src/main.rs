// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Rotas de usuário (protegidas pelo middleware)
    let user_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .route("/pendentes", get(handlers::usuarios::listar_pendentes))
        .route("/{id}/aprovar", post(handlers::usuarios::aprovar))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let ocorrencia_routes = Router::new()
        .route(
            "/",
            get(handlers::ocorrencias::listar).post(handlers::ocorrencias::criar),
        )
        .route(
            "/{id}",
            get(handlers::ocorrencias::buscar)
                .put(handlers::ocorrencias::atualizar)
                .delete(handlers::ocorrencias::excluir),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let armaria_routes = Router::new()
        .route(
            "/itens",
            get(handlers::armaria::listar_itens).post(handlers::armaria::criar_item),
        )
        .route(
            "/itens/{id}",
            get(handlers::armaria::buscar_item).put(handlers::armaria::atualizar_item),
        )
        .route(
            "/cautelas",
            get(handlers::armaria::listar_cautelas).post(handlers::armaria::abrir_cautela),
        )
        .route(
            "/cautelas/{id}/devolucao",
            post(handlers::armaria::registrar_devolucao),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let evento_routes = Router::new()
        .route(
            "/",
            get(handlers::eventos::listar).post(handlers::eventos::criar),
        )
        .route(
            "/{id}",
            get(handlers::eventos::buscar)
                .put(handlers::eventos::atualizar)
                .delete(handlers::eventos::excluir),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let ronda_routes = Router::new()
        .route(
            "/",
            get(handlers::rondas::listar).post(handlers::rondas::criar),
        )
        .route(
            "/{id}",
            get(handlers::rondas::buscar)
                .put(handlers::rondas::atualizar)
                .delete(handlers::rondas::excluir),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let relatorio_routes = Router::new()
        .route("/resumo", get(handlers::relatorios::resumo))
        .route("/export", get(handlers::relatorios::exportar))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let mapa_routes = Router::new()
        .route("/pins", get(handlers::mapas::pins))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api/ocorrencias", ocorrencia_routes)
        .nest("/api/armaria", armaria_routes)
        .nest("/api/eventos", evento_routes)
        .nest("/api/ronda-mp", ronda_routes)
        .nest("/api/relatorios", relatorio_routes)
        .nest("/api/mapas", mapa_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!(
        "🚀 Servidor escutando em {}",
        listener
            .local_addr()
            .expect("Falha ao obter o endereço local")
    );
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
