// src/db/user_repo.rs

use chrono::Utc;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::auth::{Cargo, Lotacao, StatusUsuario, User},
};

// O repositório de usuários, responsável por todas as interações com a tabela 'users'
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_user)
    }

    // Login aceita matrícula ou e-mail no mesmo campo.
    pub async fn find_by_matricula_ou_email(
        &self,
        usuario: &str,
    ) -> Result<Option<User>, AppError> {
        let maybe_user =
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE matricula = $1 OR email = $1")
                .bind(usuario)
                .fetch_optional(&self.pool)
                .await?;
        Ok(maybe_user)
    }

    /// Busca algum usuário que colida com e-mail, CPF ou matrícula.
    /// Quem nomeia o campo em conflito (na ordem do contrato) é o serviço.
    pub async fn find_conflito(
        &self,
        email: &str,
        cpf: &str,
        matricula: &str,
    ) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE email = $1 OR cpf = $2 OR matricula = $3 LIMIT 1",
        )
        .bind(email)
        .bind(cpf)
        .bind(matricula)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_user)
    }

    // Cria um novo usuário, sempre como PENDENTE_APROVACAO.
    // Com tratamento de erro específico para identidades duplicadas: além da
    // checagem prévia do serviço, os índices únicos seguram corridas.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_user<'e, E>(
        &self,
        executor: E,
        nome: &str,
        cpf: &str,
        telefone: Option<&str>,
        email: &str,
        matricula: &str,
        lotacao: Lotacao,
        cargo: Cargo,
        funcao_disposicao: Option<&str>,
        senha_hash: &str,
    ) -> Result<User, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (
                nome, cpf, telefone, email, matricula,
                lotacao, cargo, funcao_disposicao, senha_hash, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'PENDENTE_APROVACAO')
            RETURNING *
            "#,
        )
        .bind(nome)
        .bind(cpf)
        .bind(telefone)
        .bind(email)
        .bind(matricula)
        .bind(lotacao)
        .bind(cargo)
        .bind(funcao_disposicao)
        .bind(senha_hash)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    // Nomes padrão que o Postgres cria para os UNIQUE da tabela
                    match db_err.constraint() {
                        Some("users_email_key") => return AppError::EmailJaCadastrado,
                        Some("users_cpf_key") => return AppError::CpfJaCadastrado,
                        Some("users_matricula_key") => return AppError::MatriculaJaCadastrada,
                        _ => {}
                    }
                }
            }
            e.into()
        })?;

        Ok(user)
    }

    pub async fn count_users<'e, E>(&self, executor: E) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(executor)
            .await?;
        Ok(total)
    }

    // Promoção de bootstrap: o primeiro usuário do sistema vira Secretário
    // Executivo ativo, sem passar pela fila de aprovação.
    pub async fn promover_primeiro_usuario<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<User, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET status = 'ATIVO',
                cargo = 'SECRETARIO_EXECUTIVO',
                aprovado_em = $2,
                updated_at = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_one(executor)
        .await?;

        Ok(user)
    }

    pub async fn list_pendentes(&self) -> Result<Vec<User>, AppError> {
        let pendentes = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE status = 'PENDENTE_APROVACAO' ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(pendentes)
    }

    pub async fn aprovar(
        &self,
        id: Uuid,
        novo_status: StatusUsuario,
        aprovador_matricula: &str,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET status = $2,
                aprovado_por = $3,
                aprovado_em = $4,
                updated_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(novo_status)
        .bind(aprovador_matricula)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn registrar_login(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET ultimo_login = $2 WHERE id = $1")
            .bind(id)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
