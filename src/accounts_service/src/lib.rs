pub mod account_service;
pub mod helpers;
pub mod tracing;

pub use account_service::AccountService;
pub use helpers::{DatabaseSetupError, configure_postgresql, get_postgres_pool};
