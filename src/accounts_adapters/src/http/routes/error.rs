use accounts_application::{
    DeleteProfileError, GetProfileError, SigninError, SignupError, UpdateProfileError,
};
use accounts_core::{
    AccountError, AccountStoreError, HasherError, PROFILE_UPDATE_SCHEMA, TokenError,
    ValidationError,
};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::http::response::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Email already exists!")]
    DuplicateEmail,

    #[error("Wrong Email or Password!")]
    WrongCredentials,

    #[error("User does not exist!")]
    AccountNotFound,

    #[error("No authorization header found! Access denied!")]
    MissingAuthorizationHeader,

    #[error("No token found! Access denied!")]
    MissingToken,

    #[error("Invalid token! Access denied!")]
    InvalidToken,

    #[error("Resource Not Found!")]
    RouteNotFound,

    #[error("Request body is too large!")]
    PayloadTooLarge,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) | ApiError::DuplicateEmail | ApiError::WrongCredentials => {
                StatusCode::BAD_REQUEST
            }
            ApiError::AccountNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MissingAuthorizationHeader => StatusCode::FORBIDDEN,
            ApiError::MissingToken | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let error_message = match self {
            ApiError::UnexpectedError(detail) => {
                tracing::error!(error = %detail, "request failed");
                String::from("Internal Server Error!")
            }
            other => other.to_string(),
        };

        (status_code, Json(ErrorResponse::new(error_message))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<AccountError> for ApiError {
    fn from(error: AccountError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge;
        }
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<AccountStoreError> for ApiError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::DuplicateEmail => ApiError::DuplicateEmail,
            AccountStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<HasherError> for ApiError {
    fn from(error: HasherError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::InvalidToken => ApiError::InvalidToken,
            TokenError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<SignupError> for ApiError {
    fn from(error: SignupError) -> Self {
        match error {
            SignupError::AccountStoreError(e) => e.into(),
            SignupError::HasherError(e) => e.into(),
        }
    }
}

impl From<SigninError> for ApiError {
    fn from(error: SigninError) -> Self {
        match error {
            SigninError::InvalidCredentials => ApiError::WrongCredentials,
            SigninError::AccountStoreError(e) => e.into(),
            // a token that cannot be issued is a server fault, not a client one
            SigninError::TokenError(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<GetProfileError> for ApiError {
    fn from(error: GetProfileError) -> Self {
        match error {
            GetProfileError::AccountNotFound => ApiError::AccountNotFound,
            GetProfileError::AccountStoreError(e) => e.into(),
        }
    }
}

impl From<UpdateProfileError> for ApiError {
    fn from(error: UpdateProfileError) -> Self {
        match error {
            UpdateProfileError::EmptyPatch => {
                ValidationError::MissingAll(PROFILE_UPDATE_SCHEMA.field_list()).into()
            }
            UpdateProfileError::AccountNotFound => ApiError::AccountNotFound,
            UpdateProfileError::AccountStoreError(e) => e.into(),
            UpdateProfileError::HasherError(e) => e.into(),
        }
    }
}

impl From<DeleteProfileError> for ApiError {
    fn from(error: DeleteProfileError) -> Self {
        match error {
            DeleteProfileError::AccountNotFound => ApiError::AccountNotFound,
            DeleteProfileError::AccountStoreError(e) => e.into(),
        }
    }
}
