use accounts_application::SigninUseCase;
use accounts_core::{AccountStore, Email, Password, PasswordHasher, SIGNIN_SCHEMA, TokenService};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use secrecy::Secret;

use super::error::ApiError;
use crate::http::{
    request::{JsonObject, required_field, schema_fields},
    response::success,
};

#[tracing::instrument(name = "Signin", skip_all)]
pub async fn signin<A, H, T>(
    State((account_store, hasher, token_service)): State<(A, H, T)>,
    body: Result<Json<JsonObject>, JsonRejection>,
) -> Result<Response, ApiError>
where
    A: AccountStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    let Json(body) = body?;
    let fields = schema_fields(&body, &SIGNIN_SCHEMA)?;

    let email = Email::try_from(Secret::from(
        required_field(&fields, "email")?.to_owned(),
    ))?;
    let password = Password::try_from(Secret::from(
        required_field(&fields, "password")?.to_owned(),
    ))?;

    let use_case = SigninUseCase::new(account_store, hasher, token_service);
    let token = use_case.execute(email, password).await?;

    Ok(success(StatusCode::OK, token.into_string()))
}
