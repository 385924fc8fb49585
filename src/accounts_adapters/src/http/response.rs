use accounts_core::Account;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Body of every successful response.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
}

/// Body of every failed response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Wrap `data` in the success envelope with the given status.
pub fn success<T: Serialize>(status: StatusCode, data: T) -> Response {
    (
        status,
        Json(SuccessResponse {
            success: true,
            data,
        }),
    )
        .into_response()
}

/// What clients get to see of an account. The password hash never leaves the service.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountView {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id().to_string(),
            username: account.username().as_ref().to_owned(),
            email: account.email().as_ref().expose_secret().clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatedCount {
    pub updated: u64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeletedCount {
    pub deleted: u64,
}
