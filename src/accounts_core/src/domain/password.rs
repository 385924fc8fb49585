use secrecy::{ExposeSecret, Secret};

use super::{account_error::AccountError, validation::PASSWORD_RULE};

/// A plaintext password that passed the length rules.
///
/// Only ever handed to a [`PasswordHasher`](crate::PasswordHasher); it is
/// never stored.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = AccountError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        PASSWORD_RULE.check(Some(value.expose_secret()))?;
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
