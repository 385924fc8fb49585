use std::hash::{Hash, Hasher};

use secrecy::{ExposeSecret, Secret};

use super::{account_error::AccountError, validation::EMAIL_RULE};

/// A syntactically valid email address.
///
/// Kept behind [`Secret`] so it does not end up in debug output or traces.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl TryFrom<Secret<String>> for Email {
    type Error = AccountError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        EMAIL_RULE.check(Some(value.expose_secret()))?;
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
