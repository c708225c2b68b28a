//! Account registration and login

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::account::{AccountClaims, AccountResponse, LoginResponse, RegisterAccount},
    repository::accounts::AccountsRepository,
};

#[derive(Clone)]
pub struct AccountsService {
    repository: AccountsRepository,
    config: AuthConfig,
}

impl AccountsService {
    pub fn new(repository: AccountsRepository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Create an account together with its person record
    pub async fn register(&self, data: &RegisterAccount) -> AppResult<AccountResponse> {
        let password_hash = hash_password(&data.password)?;
        let account = self
            .repository
            .create_with_person(&data.username, &password_hash, &data.full_name)
            .await?;
        tracing::info!(account_id = account.id, username = %account.username, "account registered");
        Ok(account.into())
    }

    /// Authenticate by username and password and issue a bearer token
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginResponse> {
        let account = self
            .repository
            .get_by_username(username)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid username or password".to_string()))?;

        if !verify_password(&account.password_hash, password)? {
            tracing::warn!(username = %username, "login rejected");
            return Err(AppError::Authentication(
                "Invalid username or password".to_string(),
            ));
        }

        let now = Utc::now().timestamp();
        let expires_in = self.config.jwt_expiration_hours * 3600;
        let claims = AccountClaims {
            sub: account.username,
            account_id: account.id,
            person_id: account.person_id,
            exp: now + expires_in as i64,
            iat: now,
        };

        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        Ok(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
        })
    }
}

/// Hash a password using Argon2
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_verifies() {
        let hash = hash_password("correct horse").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(&hash, "correct horse").unwrap());
        assert!(!verify_password(&hash, "wrong horse").unwrap());
    }

    #[test]
    fn test_malformed_hash_is_internal_error() {
        let err = verify_password("not-a-hash", "x").unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
