use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account_id::AccountId, bearer_token::BearerToken, password::Password,
    password_hash::PasswordHash,
};

#[derive(Debug, Error)]
pub enum HasherError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Port trait for one-way password hashing
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash with a fresh random salt. Two calls on the same password never
    /// return the same encoding.
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HasherError>;

    /// `false` on mismatch and on a malformed `hash`.
    async fn verify(&self, candidate: &Password, hash: &PasswordHash) -> bool;
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Port trait for issuing and checking bearer tokens
pub trait TokenService: Send + Sync {
    fn issue(&self, account_id: &AccountId) -> Result<BearerToken, TokenError>;

    /// The embedded account id, or [`TokenError::InvalidToken`] when the
    /// signature, format or expiry check fails.
    fn verify(&self, token: &str) -> Result<AccountId, TokenError>;
}
