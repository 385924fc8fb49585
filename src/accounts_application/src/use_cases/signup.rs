use accounts_core::{
    Account, AccountStore, AccountStoreError, Email, HasherError, NewAccount, Password,
    PasswordHasher, Username,
};

/// Error types for signup use case
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("Password hashing failed: {0}")]
    HasherError(#[from] HasherError),
}

/// Signup use case - handles account registration
pub struct SignupUseCase<A, H>
where
    A: AccountStore,
    H: PasswordHasher,
{
    account_store: A,
    hasher: H,
}

impl<A, H> SignupUseCase<A, H>
where
    A: AccountStore,
    H: PasswordHasher,
{
    pub fn new(account_store: A, hasher: H) -> Self {
        Self {
            account_store,
            hasher,
        }
    }

    /// Execute the signup use case
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `email` - Validated email address
    /// * `password` - Validated plaintext password, hashed before it reaches the store
    ///
    /// # Returns
    /// The created account, or `DuplicateEmail` if the address is taken
    #[tracing::instrument(name = "SignupUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: Username,
        email: Email,
        password: Password,
    ) -> Result<Account, SignupError> {
        if self.account_store.find_by_email(&email).await?.is_some() {
            return Err(AccountStoreError::DuplicateEmail.into());
        }

        let password_hash = self.hasher.hash(&password).await?;

        let account = self
            .account_store
            .create(NewAccount {
                username,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(account_id = %account.id(), "account created");

        Ok(account)
    }
}
