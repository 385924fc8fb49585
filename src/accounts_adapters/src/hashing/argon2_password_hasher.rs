use accounts_core::{HasherError, Password, PasswordHash, PasswordHasher};
use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{self, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};

use crate::config::PasswordHashingSetting;

/// Argon2id hasher producing PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$digest`).
///
/// The cost parameters only apply to new hashes; verification reads them back
/// from the stored string, so raising the cost does not lock out old accounts.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new(setting: &PasswordHashingSetting) -> Result<Self, HasherError> {
        let params = Params::new(
            setting.memory_kib,
            setting.iterations,
            setting.parallelism,
            None,
        )
        .map_err(|e| HasherError::UnexpectedError(e.to_string()))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let hasher = self.argon2();
        let password = password.clone();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                password_hash::PasswordHasher::hash_password(
                    &hasher,
                    password.as_ref().expose_secret().as_bytes(),
                    &salt,
                )
                .map(|h| PasswordHash::new(Secret::from(h.to_string())))
                .map_err(|e| HasherError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| HasherError::UnexpectedError(e.to_string()))?;

        result
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(&self, candidate: &Password, hash: &PasswordHash) -> bool {
        let current_span: tracing::Span = tracing::Span::current();
        let verifier = self.argon2();
        let candidate = candidate.clone();
        let expected = hash.clone();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let Ok(expected) = argon2::PasswordHash::new(expected.as_ref().expose_secret())
                else {
                    tracing::warn!("stored password hash is not a valid PHC string");
                    return false;
                };

                verifier
                    .verify_password(candidate.as_ref().expose_secret().as_bytes(), &expected)
                    .is_ok()
            })
        })
        .await;

        match result {
            Ok(matches) => matches,
            Err(e) => {
                tracing::error!(error = %e, "password verification task failed");
                false
            }
        }
    }
}
