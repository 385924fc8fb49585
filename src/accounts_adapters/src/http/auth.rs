use accounts_core::{AccountId, TokenService};
use axum::{
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

use super::routes::error::ApiError;

/// Account id taken from a verified bearer token, stored in request extensions.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedAccount(pub AccountId);

/// Reject the request unless it carries a valid bearer token.
///
/// A missing `Authorization` header is a 403, a header without a token or
/// with a bad token is a 401.
pub async fn require_bearer<T>(
    State(token_service): State<T>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    T: TokenService + Clone + 'static,
{
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(ApiError::MissingAuthorizationHeader)?;

    let token = bearer_token(header).ok_or(ApiError::MissingToken)?;
    let account_id = token_service.verify(token)?;

    request
        .extensions_mut()
        .insert(AuthenticatedAccount(account_id));

    Ok(next.run(request).await)
}

fn bearer_token(header: &HeaderValue) -> Option<&str> {
    let value = header.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
