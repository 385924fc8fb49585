use super::error::ApiError;

/// Fallback for every path or method no route claims.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
