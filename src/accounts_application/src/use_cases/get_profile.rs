use accounts_core::{Account, AccountId, AccountStore, AccountStoreError};

/// Error types for get profile use case
#[derive(Debug, thiserror::Error)]
pub enum GetProfileError {
    #[error("Account not found")]
    AccountNotFound,
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
}

/// Get profile use case - loads a single account by id
pub struct GetProfileUseCase<A>
where
    A: AccountStore,
{
    account_store: A,
}

impl<A> GetProfileUseCase<A>
where
    A: AccountStore,
{
    pub fn new(account_store: A) -> Self {
        Self { account_store }
    }

    #[tracing::instrument(name = "GetProfileUseCase::execute", skip(self))]
    pub async fn execute(&self, account_id: AccountId) -> Result<Account, GetProfileError> {
        self.account_store
            .find_by_id(&account_id)
            .await?
            .ok_or(GetProfileError::AccountNotFound)
    }
}
