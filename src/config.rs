// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::db::{
    ArmariaRepository, EventoRepository, OcorrenciaRepository, RelatorioRepository,
    RondaRepository, UserRepository,
};
use crate::services::{
    armaria_service::ArmariaService, auth::AuthService, evento_service::EventoService,
    mapa_service::MapaService, ocorrencia_service::OcorrenciaService,
    relatorio_service::RelatorioService, ronda_service::RondaService,
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub ocorrencia_service: OcorrenciaService,
    pub armaria_service: ArmariaService,
    pub evento_service: EventoService,
    pub ronda_service: RondaService,
    pub relatorio_service: RelatorioService,
    pub mapa_service: MapaService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let ocorrencia_repo = OcorrenciaRepository::new(db_pool.clone());
        let armaria_repo = ArmariaRepository::new(db_pool.clone());
        let evento_repo = EventoRepository::new(db_pool.clone());
        let ronda_repo = RondaRepository::new(db_pool.clone());
        let relatorio_repo = RelatorioRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo, jwt_secret, db_pool.clone());
        let ocorrencia_service = OcorrenciaService::new(ocorrencia_repo.clone());
        let armaria_service = ArmariaService::new(armaria_repo, db_pool.clone());
        let evento_service = EventoService::new(evento_repo);
        let ronda_service = RondaService::new(ronda_repo.clone());
        let relatorio_service = RelatorioService::new(relatorio_repo, ronda_repo.clone());
        let mapa_service = MapaService::new(ocorrencia_repo, ronda_repo);

        Ok(Self {
            db_pool,
            auth_service,
            ocorrencia_service,
            armaria_service,
            evento_service,
            ronda_service,
            relatorio_service,
            mapa_service,
        })
    }
}
