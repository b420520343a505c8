// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    common::validators::{cpf_valido, email_valido},
    db::UserRepository,
    models::auth::{Cargo, Claims, Lotacao, RegistroPayload, StatusUsuario, User},
};

const CUSTO_BCRYPT: u32 = 12;
const MINIMO_SENHA: usize = 6;

/// Payload de registro já depurado: campos obrigatórios presentes e válidos.
struct DadosRegistro {
    nome: String,
    cpf: String,
    telefone: Option<String>,
    email: String,
    matricula: String,
    lotacao: Lotacao,
    cargo: Cargo,
    funcao_disposicao: Option<String>,
    senha: String,
}

// Checagem sequencial do contrato de cadastro: devolve sempre UM erro por
// vez, na ordem ausência -> CPF -> e-mail -> senha -> cargo x lotação.
fn validar_registro(payload: RegistroPayload) -> Result<DadosRegistro, AppError> {
    let RegistroPayload {
        nome,
        cpf,
        telefone,
        email,
        matricula,
        lotacao,
        cargo,
        funcao_disposicao,
        senha,
    } = payload;

    let (Some(nome), Some(cpf), Some(email), Some(matricula), Some(lotacao), Some(cargo), Some(senha)) =
        (nome, cpf, email, matricula, lotacao, cargo, senha)
    else {
        return Err(AppError::CamposObrigatorios);
    };

    if [&nome, &cpf, &email, &matricula, &senha]
        .iter()
        .any(|campo| campo.trim().is_empty())
    {
        return Err(AppError::CamposObrigatorios);
    }

    if !cpf_valido(&cpf) {
        return Err(AppError::CpfInvalido);
    }

    if !email_valido(&email) {
        return Err(AppError::EmailInvalido);
    }

    if senha.chars().count() < MINIMO_SENHA {
        return Err(AppError::SenhaCurta);
    }

    if !cargo.pertence_a(lotacao) {
        return Err(AppError::CargoInvalido);
    }

    Ok(DadosRegistro {
        nome,
        cpf,
        telefone,
        email,
        matricula,
        lotacao,
        cargo,
        funcao_disposicao,
        senha,
    })
}

// Nomeia o campo duplicado na ordem fixa e-mail -> CPF -> matrícula, para que
// só UMA mensagem seja devolvida mesmo com mais de uma colisão.
fn campo_conflitante(existente: &User, email: &str, cpf: &str) -> AppError {
    if existente.email == email {
        AppError::EmailJaCadastrado
    } else if existente.cpf == cpf {
        AppError::CpfJaCadastrado
    } else {
        AppError::MatriculaJaCadastrada
    }
}

/// Regra de bootstrap: com o sistema vazio, o primeiro cadastro vira o
/// Secretário Executivo ativo, ignorando o cargo enviado. Os demais mantêm o
/// cargo e aguardam aprovação.
fn resultado_bootstrap(
    total_apos_insercao: i64,
    cargo_solicitado: Cargo,
) -> (Cargo, StatusUsuario) {
    if total_apos_insercao == 1 {
        (Cargo::SecretarioExecutivo, StatusUsuario::Ativo)
    } else {
        (cargo_solicitado, StatusUsuario::PendenteAprovacao)
    }
}

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
    pool: PgPool,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String, pool: PgPool) -> Self {
        Self {
            user_repo,
            jwt_secret,
            pool,
        }
    }

    pub async fn register_user(&self, payload: RegistroPayload) -> Result<User, AppError> {
        let dados = validar_registro(payload)?;

        // Checagem prévia de duplicidade, nomeando o campo em conflito.
        // (Os índices únicos do banco seguram o que escapar por corrida.)
        if let Some(existente) = self
            .user_repo
            .find_conflito(&dados.email, &dados.cpf, &dados.matricula)
            .await?
        {
            return Err(campo_conflitante(&existente, &dados.email, &dados.cpf));
        }

        // Hashing fora da transação, em thread separada
        let senha = dados.senha.clone();
        let senha_hash = tokio::task::spawn_blocking(move || hash(&senha, CUSTO_BCRYPT))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let mut tx = self.pool.begin().await?;

        let user = self
            .user_repo
            .create_user(
                &mut *tx,
                &dados.nome,
                &dados.cpf,
                dados.telefone.as_deref(),
                &dados.email,
                &dados.matricula,
                dados.lotacao,
                dados.cargo,
                dados.funcao_disposicao.as_deref(),
                &senha_hash,
            )
            .await?;

        // Se for o primeiro usuário, aprovar automaticamente como Secretário Executivo
        let total = self.user_repo.count_users(&mut *tx).await?;
        let (cargo_final, status_final) = resultado_bootstrap(total, user.cargo);
        let user = if (user.cargo, user.status) != (cargo_final, status_final) {
            self.user_repo
                .promover_primeiro_usuario(&mut *tx, user.id)
                .await?
        } else {
            user
        };

        tx.commit().await?;

        Ok(user)
    }

    pub async fn login_user(&self, usuario: &str, senha: &str) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_matricula_ou_email(usuario)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let senha_clone = senha.to_owned();
        let hash_clone = user.senha_hash.clone();

        // Executa a verificação em um thread separado
        let senha_confere = tokio::task::spawn_blocking(move || verify(&senha_clone, &hash_clone))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !senha_confere {
            return Err(AppError::InvalidCredentials);
        }

        // Contas pendentes, inativas ou suspensas não entram.
        if user.status != StatusUsuario::Ativo {
            return Err(AppError::ContaNaoAtiva);
        }

        self.user_repo.registrar_login(user.id).await?;

        self.create_token(user.id)
    }

    pub async fn validate_token(&self, token: &str) -> Result<User, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        let user = self
            .user_repo
            .find_by_id(token_data.claims.sub)
            .await?
            .ok_or(AppError::UserNotFound)?;

        // Conta suspensa depois de emitido o token perde o acesso.
        if user.status != StatusUsuario::Ativo {
            return Err(AppError::ContaNaoAtiva);
        }

        Ok(user)
    }

    pub async fn listar_pendentes(&self) -> Result<Vec<User>, AppError> {
        self.user_repo.list_pendentes().await
    }

    pub async fn aprovar_usuario(
        &self,
        id: Uuid,
        aprovador: &User,
    ) -> Result<User, AppError> {
        self.user_repo
            .aprovar(id, StatusUsuario::Ativo, &aprovador.matricula)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    fn create_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: user_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn payload_completo() -> RegistroPayload {
        RegistroPayload {
            nome: Some("João Silva".to_string()),
            cpf: Some("52998224725".to_string()),
            telefone: None,
            email: Some("joao.silva@ssp.gov.br".to_string()),
            matricula: Some("SSP000002".to_string()),
            lotacao: Some(Lotacao::GcmBy),
            cargo: Some(Cargo::Comandante),
            funcao_disposicao: None,
            senha: Some("segredo123".to_string()),
        }
    }

    fn usuario_existente(email: &str, cpf: &str, matricula: &str) -> User {
        let agora = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).single().expect("data");
        User {
            id: Uuid::new_v4(),
            nome: "Alguém".to_string(),
            cpf: cpf.to_string(),
            telefone: None,
            email: email.to_string(),
            matricula: matricula.to_string(),
            lotacao: Lotacao::GcmBy,
            cargo: Cargo::Guarda,
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

    #[test]
    fn registro_completo_passa() {
        assert!(validar_registro(payload_completo()).is_ok());
    }

    #[test]
    fn falta_de_campo_obrigatorio_e_o_primeiro_erro() {
        let mut payload = payload_completo();
        payload.nome = None;
        // CPF também inválido, mas a ausência vem primeiro.
        payload.cpf = Some("123".to_string());
        assert!(matches!(
            validar_registro(payload),
            Err(AppError::CamposObrigatorios)
        ));

        let mut payload = payload_completo();
        payload.senha = Some("   ".to_string());
        assert!(matches!(
            validar_registro(payload),
            Err(AppError::CamposObrigatorios)
        ));
    }

    #[test]
    fn cpf_invalido_e_rejeitado() {
        let mut payload = payload_completo();
        payload.cpf = Some("11111111111".to_string());
        assert!(matches!(validar_registro(payload), Err(AppError::CpfInvalido)));
    }

    #[test]
    fn email_invalido_e_rejeitado() {
        let mut payload = payload_completo();
        payload.email = Some("joao@ssp".to_string());
        assert!(matches!(
            validar_registro(payload),
            Err(AppError::EmailInvalido)
        ));
    }

    #[test]
    fn senha_curta_e_rejeitada() {
        let mut payload = payload_completo();
        payload.senha = Some("12345".to_string());
        assert!(matches!(validar_registro(payload), Err(AppError::SenhaCurta)));
    }

    #[test]
    fn cargo_fora_da_lotacao_e_rejeitado() {
        let mut payload = payload_completo();
        // Comandante é da GCM, não da Defesa Civil.
        payload.lotacao = Some(Lotacao::DefesaCivil);
        assert!(matches!(
            validar_registro(payload),
            Err(AppError::CargoInvalido)
        ));
    }

    #[test]
    fn conflito_nomeia_o_campo_na_ordem_do_contrato() {
        // Colide nos três campos: e-mail vence.
        let tudo = usuario_existente("a@b.co", "52998224725", "SSP01");
        assert!(matches!(
            campo_conflitante(&tudo, "a@b.co", "52998224725"),
            AppError::EmailJaCadastrado
        ));

        // Colide em CPF e matrícula: CPF vence.
        assert!(matches!(
            campo_conflitante(&tudo, "outro@b.co", "52998224725"),
            AppError::CpfJaCadastrado
        ));

        // Só matrícula.
        assert!(matches!(
            campo_conflitante(&tudo, "outro@b.co", "00000000000"),
            AppError::MatriculaJaCadastrada
        ));
    }

    #[test]
    fn primeiro_usuario_vira_secretario_executivo_ativo() {
        // Independe do cargo enviado no cadastro.
        for cargo in [Cargo::Guarda, Cargo::Tecnico, Cargo::Advogada] {
            assert_eq!(
                resultado_bootstrap(1, cargo),
                (Cargo::SecretarioExecutivo, StatusUsuario::Ativo)
            );
        }
    }

    #[test]
    fn demais_usuarios_aguardam_aprovacao_com_o_cargo_enviado() {
        assert_eq!(
            resultado_bootstrap(2, Cargo::Guarda),
            (Cargo::Guarda, StatusUsuario::PendenteAprovacao)
        );
        assert_eq!(
            resultado_bootstrap(57, Cargo::Psicologa),
            (Cargo::Psicologa, StatusUsuario::PendenteAprovacao)
        );
    }
}
