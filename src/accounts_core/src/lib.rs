pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountUpdate, NewAccount},
    account_error::AccountError,
    account_id::AccountId,
    bearer_token::BearerToken,
    email::Email,
    password::Password,
    password_hash::PasswordHash,
    username::Username,
    validation::{
        FieldRule, Format, PROFILE_UPDATE_SCHEMA, SIGNIN_SCHEMA, SIGNUP_SCHEMA, Schema,
        ValidationError,
    },
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::{HasherError, PasswordHasher, TokenError, TokenService},
};
