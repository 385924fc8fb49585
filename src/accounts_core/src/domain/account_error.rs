use thiserror::Error;

use super::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid account id \"{0}\"")]
    InvalidAccountId(String),
}
