// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{Claims, User},
};

// Tempo de vida fixo da sessão.
const TOKEN_TTL_DAYS: i64 = 1;

// Emite e verifica os tokens de sessão. Não guarda estado nenhum além do
// segredo: a validade mora inteira dentro do próprio token.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
}

impl TokenIssuer {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        self.issue_with_ttl(user, Duration::days(TOKEN_TTL_DAYS))
    }

    fn issue_with_ttl(&self, user: &User, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + ttl;

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            company_id: user.company_id,
            iat: now.timestamp() as usize,
            exp: expires_at.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )?)
    }

    // Assinatura inválida, payload malformado e expiração viram variantes
    // distintas aqui, mas respondem de forma idêntica na borda HTTP.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AppError::ExpiredToken,
            _ => AppError::InvalidToken,
        })?;

        Ok(token_data.claims)
    }
}

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String) -> Self {
        Self {
            user_repo,
            tokens: TokenIssuer::new(jwt_secret),
        }
    }

    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    // Login: busca por e-mail, confere a senha e só então a flag de ativo.
    // Conta inexistente e senha errada produzem o mesmo erro, para não
    // denunciar quais e-mails possuem cadastro.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // Executa a verificação bcrypt fora do runtime async
        let is_password_valid = tokio::task::spawn_blocking(move || {
            verify(&password_clone, &password_hash_clone)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        gate_account(&user, is_password_valid)?;

        let token = self.tokens.issue(&user)?;
        Ok((user, token))
    }

    // Hashing de senha para criação de usuários, também fora do runtime.
    pub async fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let password_clone = password.to_owned();
        let hashed = tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
        Ok(hashed)
    }
}

// A decisão pós-consulta do login, isolada para poder ser testada sem banco.
fn gate_account(user: &User, is_password_valid: bool) -> Result<(), AppError> {
    if !is_password_valid {
        return Err(AppError::InvalidCredentials);
    }
    if !user.is_active {
        return Err(AppError::InactiveAccount);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::Role;
    use uuid::Uuid;

    fn sample_user(is_active: bool) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Maria Silva".into(),
            email: "financeiro@trr.com.br".into(),
            password_hash: "$2a$10$irrelevante".into(),
            role: Role::Financeiro,
            company_id: Some(Uuid::new_v4()),
            is_active,
            avatar_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn token_round_trip_preserves_identity() {
        let issuer = TokenIssuer::new("segredo-de-teste".into());
        let user = sample_user(true);

        let token = issuer.issue(&user).unwrap();
        let claims = issuer.verify(&token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, Role::Financeiro);
        assert_eq!(claims.company_id, user.company_id);
        assert_eq!(claims.exp, claims.iat + 60 * 60 * 24);
    }

    #[test]
    fn expired_token_is_rejected() {
        let issuer = TokenIssuer::new("segredo-de-teste".into());
        let user = sample_user(true);

        // Expirado há um dia, bem além da tolerância do validador.
        let token = issuer.issue_with_ttl(&user, Duration::days(-1)).unwrap();

        assert!(matches!(issuer.verify(&token), Err(AppError::ExpiredToken)));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = TokenIssuer::new("segredo-de-teste".into());
        let outro = TokenIssuer::new("outro-segredo".into());
        let user = sample_user(true);

        let token = outro.issue(&user).unwrap();

        assert!(matches!(issuer.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let issuer = TokenIssuer::new("segredo-de-teste".into());
        assert!(matches!(
            issuer.verify("nem.um.jwt"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn expired_and_invalid_tokens_answer_identically() {
        use axum::response::IntoResponse;

        let expirado = AppError::ExpiredToken.into_response();
        let invalido = AppError::InvalidToken.into_response();

        assert_eq!(expirado.status(), invalido.status());
    }

    #[test]
    fn wrong_password_beats_inactive_flag() {
        // Senha errada em conta inativa continua sendo credencial inválida.
        let user = sample_user(false);
        assert!(matches!(
            gate_account(&user, false),
            Err(AppError::InvalidCredentials)
        ));
    }

    #[test]
    fn inactive_account_with_right_password_is_blocked() {
        let user = sample_user(false);
        assert!(matches!(
            gate_account(&user, true),
            Err(AppError::InactiveAccount)
        ));
    }

    #[test]
    fn active_account_with_right_password_passes() {
        let user = sample_user(true);
        assert!(gate_account(&user, true).is_ok());
    }
}
