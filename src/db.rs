pub mod user_repo;
pub use user_repo::UserRepository;
pub mod ocorrencia_repo;
pub use ocorrencia_repo::OcorrenciaRepository;
pub mod armaria_repo;
pub use armaria_repo::ArmariaRepository;
pub mod evento_repo;
pub use evento_repo::EventoRepository;
pub mod ronda_repo;
pub use ronda_repo::RondaRepository;
pub mod relatorio_repo;
pub use relatorio_repo::RelatorioRepository;
