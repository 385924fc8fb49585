pub mod account;
pub mod account_error;
pub mod account_id;
pub mod bearer_token;
pub mod email;
pub mod password;
pub mod password_hash;
pub mod username;
pub mod validation;
