use secrecy::Secret;

/// Encoded output of a password hasher: algorithm parameters, salt and digest.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(encoded: Secret<String>) -> Self {
        Self(encoded)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
