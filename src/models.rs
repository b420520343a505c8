pub mod armaria;
pub mod auth;
pub mod evento;
pub mod mapa;
pub mod ocorrencia;
pub mod relatorio;
pub mod ronda;
