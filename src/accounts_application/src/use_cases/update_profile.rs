use accounts_core::{
    AccountId, AccountStore, AccountStoreError, AccountUpdate, Email, HasherError, Password,
    PasswordHasher, Username,
};

/// The fields a caller may change on their profile.
///
/// Anything outside this list cannot be expressed. A new password is hashed
/// before it is handed to the store.
#[derive(Debug, Default)]
pub struct ProfilePatch {
    pub username: Option<Username>,
    pub email: Option<Email>,
    pub password: Option<Password>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Error types for update profile use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Nothing to update")]
    EmptyPatch,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("Password hashing failed: {0}")]
    HasherError(#[from] HasherError),
}

/// Update profile use case - applies an allow-listed patch to an account
pub struct UpdateProfileUseCase<A, H>
where
    A: AccountStore,
    H: PasswordHasher,
{
    account_store: A,
    hasher: H,
}

impl<A, H> UpdateProfileUseCase<A, H>
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

    /// Execute the update profile use case
    ///
    /// # Returns
    /// The number of updated records, or `AccountNotFound` when it would be zero
    #[tracing::instrument(name = "UpdateProfileUseCase::execute", skip(self, patch))]
    pub async fn execute(
        &self,
        account_id: AccountId,
        patch: ProfilePatch,
    ) -> Result<u64, UpdateProfileError> {
        if patch.is_empty() {
            return Err(UpdateProfileError::EmptyPatch);
        }

        if let Some(email) = &patch.email {
            let owner = self.account_store.find_by_email(email).await?;
            if owner.is_some_and(|owner| owner.id() != &account_id) {
                return Err(AccountStoreError::DuplicateEmail.into());
            }
        }

        let password_hash = match &patch.password {
            Some(password) => Some(self.hasher.hash(password).await?),
            None => None,
        };

        let update = AccountUpdate {
            username: patch.username,
            email: patch.email,
            password_hash,
        };

        let updated = self.account_store.update_fields(&account_id, update).await?;

        if updated == 0 {
            return Err(UpdateProfileError::AccountNotFound);
        }

        Ok(updated)
    }
}
