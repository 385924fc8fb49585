//! # Accounts - User Account Service Library
//!
//! This is a facade crate that re-exports all public APIs from the account service components.
//! Use this crate to embed signup, signin and profile management in another binary.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Account`, etc.
//! - **Ports**: `AccountStore`, `PasswordHasher`, `TokenService`
//! - **Use cases**: `SignupUseCase`, `SigninUseCase`, etc.
//! - **Adapters**: `PostgresAccountStore`, `HashMapAccountStore`, `Argon2PasswordHasher`, `JwtTokenService`
//! - **Service**: `AccountService` - The main entry point for the account service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use accounts_core::*;
}

pub use accounts_core::{
    Account, AccountError, AccountId, BearerToken, Email, Password, PasswordHash, Username,
    ValidationError,
};

// ============================================================================
// Ports
// ============================================================================

pub use accounts_core::{
    AccountStore, AccountStoreError, HasherError, PasswordHasher, TokenError, TokenService,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use accounts_application::*;
}

pub use accounts_application::{
    DeleteProfileUseCase, GetProfileUseCase, SigninUseCase, SignupUseCase, UpdateProfileUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers, envelope and bearer middleware
    pub mod http {
        pub use accounts_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use accounts_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use accounts_adapters::config::*;
    }
}

pub use accounts_adapters::{
    Argon2PasswordHasher, HashMapAccountStore, JwtTokenService, PostgresAccountStore,
};

// ============================================================================
// Account Service (Main Entry Point)
// ============================================================================

pub use accounts_service::{AccountService, configure_postgresql, tracing::init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
