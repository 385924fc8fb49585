use accounts_application::DeleteProfileUseCase;
use accounts_core::{AccountId, AccountStore};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use super::error::ApiError;
use crate::http::response::{DeletedCount, success};

#[tracing::instrument(name = "Delete profile", skip_all)]
pub async fn delete_profile<A>(
    State(account_store): State<A>,
    Path(user_id): Path<String>,
) -> Result<Response, ApiError>
where
    A: AccountStore + Clone + 'static,
{
    let account_id = AccountId::parse(&user_id)?;

    let use_case = DeleteProfileUseCase::new(account_store);
    let deleted = use_case.execute(account_id).await?;

    Ok(success(StatusCode::OK, DeletedCount { deleted }))
}
