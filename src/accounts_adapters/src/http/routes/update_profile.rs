use accounts_application::{ProfilePatch, UpdateProfileUseCase};
use accounts_core::{
    AccountId, AccountStore, Email, PROFILE_UPDATE_SCHEMA, Password, PasswordHasher, Username,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use secrecy::Secret;

use super::error::ApiError;
use crate::http::{
    request::{JsonObject, field, schema_fields},
    response::{UpdatedCount, success},
};

/// Apply a partial update. Only `username`, `email` and `password` may be
/// sent; any other key fails the whole request before the store is touched.
#[tracing::instrument(name = "Update profile", skip_all)]
pub async fn update_profile<A, H>(
    State((account_store, hasher)): State<(A, H)>,
    Path(user_id): Path<String>,
    body: Result<Json<JsonObject>, JsonRejection>,
) -> Result<Response, ApiError>
where
    A: AccountStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let account_id = AccountId::parse(&user_id)?;
    let Json(body) = body?;

    PROFILE_UPDATE_SCHEMA.reject_unknown(body.keys().map(String::as_str))?;
    let fields = schema_fields(&body, &PROFILE_UPDATE_SCHEMA)?;

    let patch = ProfilePatch {
        username: field(&fields, "username")
            .map(|value| Username::parse(value.to_owned()))
            .transpose()?,
        email: field(&fields, "email")
            .map(|value| Email::try_from(Secret::from(value.to_owned())))
            .transpose()?,
        password: field(&fields, "password")
            .map(|value| Password::try_from(Secret::from(value.to_owned())))
            .transpose()?,
    };

    let use_case = UpdateProfileUseCase::new(account_store, hasher);
    let updated = use_case.execute(account_id, patch).await?;

    Ok(success(StatusCode::OK, UpdatedCount { updated }))
}
