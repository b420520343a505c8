pub mod armaria;
pub mod auth;
pub mod eventos;
pub mod mapas;
pub mod ocorrencias;
pub mod relatorios;
pub mod rondas;
pub mod usuarios;
