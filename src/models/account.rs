//! Account model and JWT claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Account row
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: i64,
    pub username: String,
    /// Hashed password (argon2)
    pub password_hash: String,
    pub person_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Sign-up request: creates the account and the person it belongs to
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterAccount {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 2, max = 56, message = "Full name must be 2-56 characters"))]
    pub full_name: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountResponse {
    pub id: i64,
    pub username: String,
    pub person_id: i64,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            person_id: account.person_id,
        }
    }
}

/// JWT claims carried by bearer tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountClaims {
    pub sub: String,
    pub account_id: i64,
    pub person_id: i64,
    pub exp: i64,
    pub iat: i64,
}

impl AccountClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(exp_offset: i64) -> AccountClaims {
        let now = Utc::now().timestamp();
        AccountClaims {
            sub: "librarian".to_string(),
            account_id: 1,
            person_id: 2,
            exp: now + exp_offset,
            iat: now,
        }
    }

    #[test]
    fn test_token_roundtrip() {
        let token = claims(3600).create_token("secret").unwrap();
        let decoded = AccountClaims::from_token(&token, "secret").unwrap();
        assert_eq!(decoded.sub, "librarian");
        assert_eq!(decoded.person_id, 2);
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let token = claims(3600).create_token("secret").unwrap();
        assert!(AccountClaims::from_token(&token, "other").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = claims(-3600).create_token("secret").unwrap();
        assert!(AccountClaims::from_token(&token, "secret").is_err());
    }
}
