use accounts_application::GetProfileUseCase;
use accounts_core::{AccountId, AccountStore};
use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use super::error::ApiError;
use crate::http::{
    auth::AuthenticatedAccount,
    response::{AccountView, success},
};

#[tracing::instrument(name = "Get profile", skip_all)]
pub async fn get_profile<A>(
    State(account_store): State<A>,
    Extension(caller): Extension<AuthenticatedAccount>,
    Path(user_id): Path<String>,
) -> Result<Response, ApiError>
where
    A: AccountStore + Clone + 'static,
{
    let account_id = AccountId::parse(&user_id)?;
    tracing::debug!(caller = %caller.0, %account_id, "profile requested");

    let use_case = GetProfileUseCase::new(account_store);
    let account = use_case.execute(account_id).await?;

    Ok(success(StatusCode::OK, AccountView::from(&account)))
}
