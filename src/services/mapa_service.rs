// src/services/mapa_service.rs

use chrono::Utc;

use crate::{
    common::error::AppError,
    db::{OcorrenciaRepository, RondaRepository},
    models::auth::User,
    models::mapa::{MapPin, PIN_OCORRENCIA, PIN_RONDA_MP},
    models::ronda::StatusRondaMp,
    services::policy,
};

#[derive(Clone)]
pub struct MapaService {
    ocorrencia_repo: OcorrenciaRepository,
    ronda_repo: RondaRepository,
}

impl MapaService {
    pub fn new(ocorrencia_repo: OcorrenciaRepository, ronda_repo: RondaRepository) -> Self {
        Self {
            ocorrencia_repo,
            ronda_repo,
        }
    }

    /// Agrega os pontos plotáveis: ocorrências que o ator pode ver (e que têm
    /// coordenadas) e todas as rondas, com status derivado na hora.
    pub async fn pins(&self, ator: &User) -> Result<Vec<MapPin>, AppError> {
        let mut pins = Vec::new();

        for ocorrencia in self.ocorrencia_repo.listar().await? {
            if !policy::pode_ver_ocorrencia(ator, &ocorrencia) {
                continue;
            }
            let (Some(latitude), Some(longitude)) = (ocorrencia.latitude, ocorrencia.longitude)
            else {
                continue;
            };

            pins.push(MapPin {
                id: ocorrencia.id,
                latitude,
                longitude,
                titulo: ocorrencia.titulo,
                tipo: PIN_OCORRENCIA.to_string(),
                status: Some(ocorrencia.status.label().to_string()),
                cor: Some(ocorrencia.status.cor().to_string()),
            });
        }

        let agora = Utc::now();
        for ronda in self.ronda_repo.listar().await? {
            let status = StatusRondaMp::derivar(ronda.validade, agora);
            pins.push(MapPin {
                id: ronda.id,
                latitude: ronda.latitude,
                longitude: ronda.longitude,
                titulo: ronda.endereco,
                tipo: PIN_RONDA_MP.to_string(),
                status: Some(status.label().to_string()),
                cor: Some(status.cor().to_string()),
            });
        }

        Ok(pins)
    }
}
