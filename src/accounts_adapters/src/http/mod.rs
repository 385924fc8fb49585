pub mod auth;
pub mod request;
pub mod response;
pub mod routes;

pub use auth::{AuthenticatedAccount, require_bearer};
pub use response::{AccountView, DeletedCount, ErrorResponse, SuccessResponse, UpdatedCount};
pub use routes::error::ApiError;
