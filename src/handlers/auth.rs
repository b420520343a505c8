// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::auth::{
        AuthResponse, LoginPayload, RegistroPayload, RegistroResponse, User, UsuarioPublico,
    },
};

// Handler de registro.
// Todo modo de falha vira resposta estruturada: 400 com a mensagem do
// primeiro problema encontrado, 201 com os campos públicos no sucesso.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegistroPayload,
    responses(
        (status = 201, description = "Cadastro realizado, aguardando aprovação", body = RegistroResponse),
        (status = 400, description = "Campo ausente, inválido ou já cadastrado")
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    Json(payload): Json<RegistroPayload>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state.auth_service.register_user(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistroResponse {
            message: "Cadastro realizado com sucesso! Aguarde aprovação.".to_string(),
            user: UsuarioPublico::from(&user),
        }),
    ))
}

// Handler de login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Token emitido", body = AuthResponse),
        (status = 401, description = "Credenciais inválidas"),
        (status = 403, description = "Conta ainda não aprovada")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .login_user(&payload.usuario, &payload.senha)
        .await?;

    Ok(Json(AuthResponse { token }))
}

// Handler da rota protegida /me
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "Users",
    responses((status = 200, description = "Usuário autenticado", body = User)),
    security(("api_jwt" = []))
)]
pub async fn get_me(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
    Json(user)
}
