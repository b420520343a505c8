// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Unidade organizacional da Secretaria de Segurança Pública.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "lotacao", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Lotacao {
    Secretaria,
    GcmBy,
    DefesaCivil,
    VigilanciaPatrimonial,
}

impl Lotacao {
    /// Marcador textual usado no público-alvo de eventos.
    pub fn tag(&self) -> &'static str {
        match self {
            Lotacao::Secretaria => "SECRETARIA",
            Lotacao::GcmBy => "GCM_BY",
            Lotacao::DefesaCivil => "DEFESA_CIVIL",
            Lotacao::VigilanciaPatrimonial => "VIGILANCIA_PATRIMONIAL",
        }
    }
}

/// Cargo do servidor. O conjunto é fechado e cada cargo pertence a exatamente
/// uma lotação (`Cargo::lotacao`); o cadastro rejeita pares inconsistentes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "cargo", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cargo {
    // Secretaria
    Secretario,
    SecretarioExecutivo,
    AssessorAdministrativo,
    Advogada,
    AdvogadaCoordRondaMp,
    AssistenteSocial,
    Psicologa,
    GuardaDisposicao,
    VigilanteDisposicao,
    // GCM-BY
    Comandante,
    Subcomandante,
    InspetorChefe,
    Inspetor,
    ComandanteGuarnicao,
    Ouvidor,
    Corregedor,
    Motorista,
    Guarda,
    #[sqlx(rename = "ATENDENTE_153")]
    #[serde(rename = "ATENDENTE_153")]
    Atendente153,
    #[sqlx(rename = "DESPACHANTE_153")]
    #[serde(rename = "DESPACHANTE_153")]
    Despachante153,
    OperadorCftv,
    Armeiro,
    // Defesa Civil
    DiretorDefesaCivil,
    Tecnico,
    Agente,
    AuxiliadorFrota,
    Disposicao,
    // Vigilancia Patrimonial
    DiretorVigilancia,
    SupervisorChefe,
    Supervisor,
    VigilanteEfetivo,
    VigilanteContratado,
}

impl Cargo {
    /// Lotação a que o cargo pertence. Match exaustivo: cargo novo sem
    /// lotação não compila.
    pub fn lotacao(&self) -> Lotacao {
        use Cargo::*;
        match self {
            Secretario | SecretarioExecutivo | AssessorAdministrativo | Advogada
            | AdvogadaCoordRondaMp | AssistenteSocial | Psicologa | GuardaDisposicao
            | VigilanteDisposicao => Lotacao::Secretaria,

            Comandante | Subcomandante | InspetorChefe | Inspetor | ComandanteGuarnicao
            | Ouvidor | Corregedor | Motorista | Guarda | Atendente153 | Despachante153
            | OperadorCftv | Armeiro => Lotacao::GcmBy,

            DiretorDefesaCivil | Tecnico | Agente | AuxiliadorFrota | Disposicao => {
                Lotacao::DefesaCivil
            }

            DiretorVigilancia | SupervisorChefe | Supervisor | VigilanteEfetivo
            | VigilanteContratado => Lotacao::VigilanciaPatrimonial,
        }
    }

    pub fn pertence_a(&self, lotacao: Lotacao) -> bool {
        self.lotacao() == lotacao
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_usuario", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusUsuario {
    PendenteAprovacao,
    Ativo,
    Inativo,
    Suspenso,
}

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub nome: String,
    pub cpf: String,
    pub telefone: Option<String>,
    pub email: String,
    pub matricula: String,
    pub lotacao: Lotacao,
    pub cargo: Cargo,
    pub funcao_disposicao: Option<String>,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub senha_hash: String,

    pub status: StatusUsuario,
    pub aprovado_por: Option<String>,
    pub aprovado_em: Option<DateTime<Utc>>,
    pub ultimo_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Campos públicos devolvidos no 201 do cadastro.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioPublico {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub matricula: String,
    pub lotacao: Lotacao,
    pub status: StatusUsuario,
}

impl From<&User> for UsuarioPublico {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            nome: user.nome.clone(),
            email: user.email.clone(),
            matricula: user.matricula.clone(),
            lotacao: user.lotacao,
            status: user.status,
        }
    }
}

/// Corpo do 201 do cadastro.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegistroResponse {
    pub message: String,
    pub user: UsuarioPublico,
}

// Dados para registro de um novo usuário. Os campos são opcionais porque o
// endpoint responde com UMA mensagem por vez, na ordem de checagem do
// contrato (ausência, CPF, e-mail, senha, cargo x lotação, conflitos).
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistroPayload {
    pub nome: Option<String>,
    pub cpf: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub matricula: Option<String>,
    pub lotacao: Option<Lotacao>,
    pub cargo: Option<Cargo>,
    pub funcao_disposicao: Option<String>,
    pub senha: Option<String>,
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(length(min = 1, message = "Informe a matrícula ou o e-mail."))]
    #[schema(example = "SSP000001")]
    pub usuario: String,
    #[validate(length(min = 1, message = "Informe a senha."))]
    pub senha: String,
}

// Resposta de autenticação com o token
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // Subject (ID do usuário)
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cada_cargo_pertence_a_uma_unica_lotacao() {
        assert_eq!(Cargo::Secretario.lotacao(), Lotacao::Secretaria);
        assert_eq!(Cargo::VigilanteDisposicao.lotacao(), Lotacao::Secretaria);
        assert_eq!(Cargo::Comandante.lotacao(), Lotacao::GcmBy);
        assert_eq!(Cargo::Armeiro.lotacao(), Lotacao::GcmBy);
        assert_eq!(Cargo::Tecnico.lotacao(), Lotacao::DefesaCivil);
        assert_eq!(Cargo::VigilanteContratado.lotacao(), Lotacao::VigilanciaPatrimonial);

        assert!(Cargo::Guarda.pertence_a(Lotacao::GcmBy));
        assert!(!Cargo::Guarda.pertence_a(Lotacao::Secretaria));
    }

    #[test]
    fn cargos_153_serializam_com_underscore() {
        assert_eq!(
            serde_json::to_string(&Cargo::Atendente153).expect("serializa"),
            "\"ATENDENTE_153\""
        );
        assert_eq!(
            serde_json::from_str::<Cargo>("\"DESPACHANTE_153\"").expect("desserializa"),
            Cargo::Despachante153
        );
    }

    #[test]
    fn lotacao_serializa_como_no_banco() {
        assert_eq!(
            serde_json::to_string(&Lotacao::GcmBy).expect("serializa"),
            "\"GCM_BY\""
        );
        assert_eq!(Lotacao::GcmBy.tag(), "GCM_BY");
        assert_eq!(Lotacao::VigilanciaPatrimonial.tag(), "VIGILANCIA_PATRIMONIAL");
    }
}
