// src/services/policy.rs
//
// Política de autorização por cargo/lotação. Todas as funções são puras e
// totais: mesmo par (ator, registro) devolve sempre o mesmo bool, sem I/O.
// "Não" aqui não é erro; nas listagens o chamador apenas filtra a linha.

use crate::models::auth::{Cargo, Lotacao, User};
use crate::models::evento::Evento;
use crate::models::ocorrencia::Ocorrencia;

/// Cargos autorizados a registrar ocorrência (comando da GCM + secretários).
const CARGOS_CRIACAO_OCORRENCIA: [Cargo; 7] = [
    Cargo::Comandante,
    Cargo::Subcomandante,
    Cargo::InspetorChefe,
    Cargo::Inspetor,
    Cargo::ComandanteGuarnicao,
    Cargo::Secretario,
    Cargo::SecretarioExecutivo,
];

fn e_secretario(ator: &User) -> bool {
    matches!(ator.cargo, Cargo::Secretario | Cargo::SecretarioExecutivo)
}

pub fn pode_criar_ocorrencia(ator: &User) -> bool {
    // A lista de cargos é quem decide; a checagem de lotação derruba
    // cadastros com par cargo/lotação inconsistente.
    let setor_ok = ator.lotacao == Lotacao::GcmBy || e_secretario(ator);
    setor_ok && CARGOS_CRIACAO_OCORRENCIA.contains(&ator.cargo)
}

pub fn pode_ver_ocorrencia(ator: &User, ocorrencia: &Ocorrencia) -> bool {
    // Secretários veem tudo
    if e_secretario(ator) {
        return true;
    }

    // Criador vê suas ocorrências
    if ocorrencia.criador_id == ator.matricula {
        return true;
    }

    // Citados veem ocorrências onde foram citados
    if ocorrencia.citados.iter().any(|m| *m == ator.matricula) {
        return true;
    }

    false
}

pub fn pode_gerenciar_eventos(ator: &User) -> bool {
    matches!(
        ator.cargo,
        Cargo::Secretario | Cargo::SecretarioExecutivo | Cargo::AssessorAdministrativo
    )
}

pub fn pode_ver_evento(ator: &User, evento: &Evento) -> bool {
    pode_gerenciar_eventos(ator) || evento.contempla(ator.lotacao)
}

pub fn pode_acessar_relatorios(ator: &User) -> bool {
    e_secretario(ator)
}

pub fn pode_aprovar_usuarios(ator: &User) -> bool {
    e_secretario(ator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::StatusUsuario;
    use crate::models::evento::{StatusEvento, TipoEvento, PUBLICO_TODOS};
    use crate::models::ocorrencia::{StatusOcorrencia, TipoOcorrencia};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn ator(cargo: Cargo, matricula: &str) -> User {
        let agora = Utc.with_ymd_and_hms(2026, 1, 10, 8, 0, 0).single().expect("data");
        User {
            id: Uuid::new_v4(),
            nome: "Servidor de Teste".to_string(),
            cpf: "52998224725".to_string(),
            telefone: None,
            email: format!("{matricula}@ssp.gov.br"),
            matricula: matricula.to_string(),
            lotacao: cargo.lotacao(),
            cargo,
            funcao_disposicao: None,
            senha_hash: "hash".to_string(),
            status: StatusUsuario::Ativo,
            aprovado_por: None,
            aprovado_em: None,
            ultimo_login: None,
            created_at: agora,
            updated_at: agora,
        }
    }

    fn ocorrencia(criador: &str, citados: &[&str]) -> Ocorrencia {
        let agora = Utc.with_ymd_and_hms(2026, 1, 10, 8, 0, 0).single().expect("data");
        Ocorrencia {
            id: Uuid::new_v4(),
            titulo: "Ocorrência de teste".to_string(),
            descricao: String::new(),
            tipo: TipoOcorrencia::Patrulhamento,
            status: StatusOcorrencia::Aberta,
            endereco: "Av. Brasil, 100".to_string(),
            latitude: None,
            longitude: None,
            criador_id: criador.to_string(),
            criador_nome: "Criador".to_string(),
            citados: citados.iter().map(|s| s.to_string()).collect(),
            anexos: vec![],
            data_ocorrencia: agora,
            created_at: agora,
            updated_at: agora,
        }
    }

    fn evento(publico: &[&str]) -> Evento {
        let agora = Utc.with_ymd_and_hms(2026, 1, 10, 8, 0, 0).single().expect("data");
        Evento {
            id: Uuid::new_v4(),
            titulo: "Evento de teste".to_string(),
            descricao: String::new(),
            data_inicio: agora,
            data_fim: None,
            local: "Auditório".to_string(),
            tipo: TipoEvento::Reuniao,
            status: StatusEvento::Agendado,
            anexos: vec![],
            publico: publico.iter().map(|s| s.to_string()).collect(),
            created_at: agora,
            updated_at: agora,
        }
    }

    #[test]
    fn comando_da_gcm_e_secretarios_criam_ocorrencia() {
        for cargo in CARGOS_CRIACAO_OCORRENCIA {
            assert!(pode_criar_ocorrencia(&ator(cargo, "M1")), "{cargo:?}");
        }
    }

    #[test]
    fn demais_cargos_nao_criam_ocorrencia() {
        for cargo in [
            Cargo::Guarda,
            Cargo::Motorista,
            Cargo::Armeiro,
            Cargo::Atendente153,
            Cargo::OperadorCftv,
            Cargo::AssessorAdministrativo,
            Cargo::Psicologa,
            Cargo::Tecnico,
            Cargo::DiretorDefesaCivil,
            Cargo::SupervisorChefe,
            Cargo::VigilanteEfetivo,
        ] {
            assert!(!pode_criar_ocorrencia(&ator(cargo, "M1")), "{cargo:?}");
        }
    }

    #[test]
    fn cadastro_com_lotacao_inconsistente_nao_cria_ocorrencia() {
        // Cargo do comando da GCM gravado com lotação errada: a checagem de
        // setor derruba, mesmo o cargo estando na lista.
        let mut servidor = ator(Cargo::Comandante, "M1");
        servidor.lotacao = Lotacao::DefesaCivil;
        assert!(!pode_criar_ocorrencia(&servidor));
    }

    #[test]
    fn secretario_ve_qualquer_ocorrencia() {
        let secretario = ator(Cargo::Secretario, "SEC01");
        let executivo = ator(Cargo::SecretarioExecutivo, "SEC02");
        for occ in [
            ocorrencia("OUTRO", &[]),
            ocorrencia("OUTRO", &["ALGUEM"]),
            ocorrencia("SEC01", &[]),
        ] {
            assert!(pode_ver_ocorrencia(&secretario, &occ));
            assert!(pode_ver_ocorrencia(&executivo, &occ));
        }
    }

    #[test]
    fn criador_ve_as_proprias_ocorrencias() {
        let guarda = ator(Cargo::Guarda, "GCM10");
        assert!(pode_ver_ocorrencia(&guarda, &ocorrencia("GCM10", &[])));
        assert!(!pode_ver_ocorrencia(&guarda, &ocorrencia("GCM99", &[])));
    }

    #[test]
    fn citado_ve_exatamente_onde_foi_citado() {
        let guarda = ator(Cargo::Guarda, "GCM10");
        let citando = ocorrencia("GCM99", &["GCM10", "GCM11"]);
        let sem_citar = ocorrencia("GCM99", &["GCM11"]);

        assert!(pode_ver_ocorrencia(&guarda, &citando));
        assert!(!pode_ver_ocorrencia(&guarda, &sem_citar));
    }

    #[test]
    fn estranho_nao_ve_nada() {
        // Nem secretário, nem criador, nem citado: negação por padrão.
        let tecnico = ator(Cargo::Tecnico, "DC01");
        assert!(!pode_ver_ocorrencia(&tecnico, &ocorrencia("GCM99", &["GCM10"])));
        assert!(!pode_ver_ocorrencia(&tecnico, &ocorrencia("SEC01", &[])));
    }

    #[test]
    fn gestao_de_eventos_e_do_gabinete() {
        assert!(pode_gerenciar_eventos(&ator(Cargo::Secretario, "M1")));
        assert!(pode_gerenciar_eventos(&ator(Cargo::SecretarioExecutivo, "M1")));
        assert!(pode_gerenciar_eventos(&ator(Cargo::AssessorAdministrativo, "M1")));

        assert!(!pode_gerenciar_eventos(&ator(Cargo::Comandante, "M1")));
        assert!(!pode_gerenciar_eventos(&ator(Cargo::Guarda, "M1")));
        assert!(!pode_gerenciar_eventos(&ator(Cargo::Advogada, "M1")));
    }

    #[test]
    fn visibilidade_de_evento_segue_o_publico_alvo() {
        let guarda = ator(Cargo::Guarda, "GCM10");
        assert!(pode_ver_evento(&guarda, &evento(&[PUBLICO_TODOS])));
        assert!(pode_ver_evento(&guarda, &evento(&["GCM_BY", "DEFESA_CIVIL"])));
        assert!(!pode_ver_evento(&guarda, &evento(&["SECRETARIA"])));

        // Gestor enxerga mesmo sem estar no público-alvo.
        let assessor = ator(Cargo::AssessorAdministrativo, "SEC03");
        assert!(pode_ver_evento(&assessor, &evento(&["GCM_BY"])));
    }

    #[test]
    fn relatorios_e_aprovacao_sao_dos_secretarios() {
        for cargo in [Cargo::Secretario, Cargo::SecretarioExecutivo] {
            assert!(pode_acessar_relatorios(&ator(cargo, "M1")));
            assert!(pode_aprovar_usuarios(&ator(cargo, "M1")));
        }
        for cargo in [Cargo::AssessorAdministrativo, Cargo::Comandante, Cargo::Guarda] {
            assert!(!pode_acessar_relatorios(&ator(cargo, "M1")));
            assert!(!pode_aprovar_usuarios(&ator(cargo, "M1")));
        }
    }
}
