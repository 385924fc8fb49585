use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, AccountUpdate, NewAccount},
    account_id::AccountId,
    email::Email,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Email already exists")]
    DuplicateEmail,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::DuplicateEmail, Self::DuplicateEmail)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence for account records.
///
/// Implementations enforce email uniqueness and assign identifiers on
/// `create`. Update and delete report how many records they touched rather
/// than failing on an unknown id.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError>;
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountStoreError>;
    async fn create(&self, account: NewAccount) -> Result<Account, AccountStoreError>;
    async fn update_fields(
        &self,
        id: &AccountId,
        update: AccountUpdate,
    ) -> Result<u64, AccountStoreError>;
    async fn delete_by_id(&self, id: &AccountId) -> Result<u64, AccountStoreError>;
}
