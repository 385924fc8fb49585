use accounts_application::SignupUseCase;
use accounts_core::{AccountStore, Email, Password, PasswordHasher, SIGNUP_SCHEMA, Username};
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
    response::{AccountView, success},
};

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<A, H>(
    State((account_store, hasher)): State<(A, H)>,
    body: Result<Json<JsonObject>, JsonRejection>,
) -> Result<Response, ApiError>
where
    A: AccountStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let Json(body) = body?;
    let fields = schema_fields(&body, &SIGNUP_SCHEMA)?;

    let username = Username::parse(required_field(&fields, "username")?.to_owned())?;
    let email = Email::try_from(Secret::from(
        required_field(&fields, "email")?.to_owned(),
    ))?;
    let password = Password::try_from(Secret::from(
        required_field(&fields, "password")?.to_owned(),
    ))?;

    let use_case = SignupUseCase::new(account_store, hasher);
    let account = use_case.execute(username, email, password).await?;

    Ok(success(StatusCode::CREATED, AccountView::from(&account)))
}
