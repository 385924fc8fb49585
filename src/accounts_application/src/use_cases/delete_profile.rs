use accounts_core::{AccountId, AccountStore, AccountStoreError};

/// Error types for delete profile use case
#[derive(Debug, thiserror::Error)]
pub enum DeleteProfileError {
    #[error("Account not found")]
    AccountNotFound,
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
}

/// Delete profile use case - removes an account
pub struct DeleteProfileUseCase<A>
where
    A: AccountStore,
{
    account_store: A,
}

impl<A> DeleteProfileUseCase<A>
where
    A: AccountStore,
{
    pub fn new(account_store: A) -> Self {
        Self { account_store }
    }

    /// Execute the delete profile use case
    ///
    /// # Returns
    /// The number of deleted records, or `AccountNotFound` when it would be zero
    #[tracing::instrument(name = "DeleteProfileUseCase::execute", skip(self))]
    pub async fn execute(&self, account_id: AccountId) -> Result<u64, DeleteProfileError> {
        let deleted = self.account_store.delete_by_id(&account_id).await?;

        if deleted == 0 {
            return Err(DeleteProfileError::AccountNotFound);
        }

        Ok(deleted)
    }
}
