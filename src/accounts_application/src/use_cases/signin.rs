use accounts_core::{
    AccountStore, AccountStoreError, BearerToken, Email, Password, PasswordHasher, TokenError,
    TokenService,
};

/// Error types specific to signin use case
#[derive(Debug, thiserror::Error)]
pub enum SigninError {
    #[error("Wrong email or password")]
    InvalidCredentials,
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

/// Signin use case - verifies credentials and issues a bearer token
pub struct SigninUseCase<A, H, T>
where
    A: AccountStore,
    H: PasswordHasher,
    T: TokenService,
{
    account_store: A,
    hasher: H,
    token_service: T,
}

impl<A, H, T> SigninUseCase<A, H, T>
where
    A: AccountStore,
    H: PasswordHasher,
    T: TokenService,
{
    pub fn new(account_store: A, hasher: H, token_service: T) -> Self {
        Self {
            account_store,
            hasher,
            token_service,
        }
    }

    /// Execute the signin use case
    ///
    /// An unknown email and a wrong password both yield `InvalidCredentials`,
    /// and neither issues a token.
    #[tracing::instrument(name = "SigninUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<BearerToken, SigninError> {
        let Some(account) = self.account_store.find_by_email(&email).await? else {
            tracing::debug!("no account for email");
            return Err(SigninError::InvalidCredentials);
        };

        if !self
            .hasher
            .verify(&password, account.password_hash())
            .await
        {
            tracing::debug!(account_id = %account.id(), "password mismatch");
            return Err(SigninError::InvalidCredentials);
        }

        let token = self.token_service.issue(account.id())?;

        Ok(token)
    }
}
