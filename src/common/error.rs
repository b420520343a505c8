use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Negação de autorização nem sempre passa por aqui: nas listagens as funções
// de política devolvem bool e o handler apenas filtra as linhas. `Forbidden`
// existe para as rotas em que a ação inteira é vedada.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Campos obrigatórios ausentes")]
    CamposObrigatorios,

    #[error("CPF inválido")]
    CpfInvalido,

    #[error("E-mail inválido")]
    EmailInvalido,

    #[error("Senha muito curta")]
    SenhaCurta,

    #[error("Cargo não pertence à lotação")]
    CargoInvalido,

    #[error("E-mail já cadastrado")]
    EmailJaCadastrado,

    #[error("CPF já cadastrado")]
    CpfJaCadastrado,

    #[error("Matrícula já cadastrada")]
    MatriculaJaCadastrada,

    #[error("Item já possui cautela aberta")]
    CautelaJaAberta,

    #[error("Item indisponível para cautela")]
    ItemIndisponivel,

    #[error("Transição de status inválida")]
    TransicaoInvalida,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Conta aguardando aprovação ou desativada")]
    ContaNaoAtiva,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Acesso negado")]
    Forbidden,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Registro não encontrado")]
    NotFound,

    #[error("Fonte não encontrada: {0}")]
    FontNotFound(String),

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação de payload.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::CamposObrigatorios => (
                StatusCode::BAD_REQUEST,
                "Todos os campos obrigatórios devem ser preenchidos.",
            ),
            AppError::CpfInvalido => (StatusCode::BAD_REQUEST, "CPF inválido."),
            AppError::EmailInvalido => (StatusCode::BAD_REQUEST, "E-mail inválido."),
            AppError::SenhaCurta => (
                StatusCode::BAD_REQUEST,
                "Senha deve ter pelo menos 6 caracteres.",
            ),
            AppError::CargoInvalido => (
                StatusCode::BAD_REQUEST,
                "O cargo informado não pertence à lotação escolhida.",
            ),

            AppError::EmailJaCadastrado => (
                StatusCode::BAD_REQUEST,
                "Já existe um usuário cadastrado com este e-mail.",
            ),
            AppError::CpfJaCadastrado => (
                StatusCode::BAD_REQUEST,
                "Já existe um usuário cadastrado com este CPF.",
            ),
            AppError::MatriculaJaCadastrada => (
                StatusCode::BAD_REQUEST,
                "Já existe um usuário cadastrado com esta matrícula.",
            ),

            AppError::CautelaJaAberta => (
                StatusCode::CONFLICT,
                "Este item já possui uma cautela em aberto.",
            ),
            AppError::ItemIndisponivel => (
                StatusCode::CONFLICT,
                "Item em manutenção ou baixado não pode ser cautelado.",
            ),
            AppError::TransicaoInvalida => {
                (StatusCode::CONFLICT, "Transição de status não permitida.")
            }

            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Matrícula ou senha inválidos.")
            }
            AppError::ContaNaoAtiva => (
                StatusCode::FORBIDDEN,
                "Sua conta ainda não foi aprovada ou está desativada.",
            ),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.",
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Você não tem permissão para realizar esta ação.",
            ),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "Usuário não encontrado."),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Registro não encontrado."),

            // Todos os outros erros (DatabaseError, InternalServerError...) viram 500.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu;
            // o cliente recebe só a mensagem genérica.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor.",
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
