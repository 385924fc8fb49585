use super::{account_error::AccountError, validation::USERNAME_RULE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn parse(value: String) -> Result<Self, AccountError> {
        USERNAME_RULE.check(Some(&value))?;
        Ok(Self(value))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
