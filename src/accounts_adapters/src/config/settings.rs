use axum::http::HeaderValue;
use config::{Config, ConfigError, File};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{CONFIG_FILE, env, prod};

/// Everything the service needs at startup, loaded once and passed down.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountServiceSetting {
    pub application: ApplicationSetting,
    pub auth: AuthSetting,
    #[serde(default)]
    pub postgres: PostgresSetting,
    pub password_hashing: PasswordHashingSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSetting {
    pub host: String,
    pub port: u16,
    /// Comma separated list of origins allowed by CORS.
    pub allowed_origins: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSetting {
    pub jwt: JwtSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSetting {
    pub secret: Secret<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostgresSetting {
    /// Without a connection string the service keeps accounts in memory.
    pub url: Option<Secret<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordHashingSetting {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl AccountServiceSetting {
    /// Load settings from `.env`, the optional settings file and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings, reading environment variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides = [
            ("application.host", env::HOST_ENV_VAR),
            ("application.port", env::PORT_ENV_VAR),
            ("application.allowed_origins", env::ALLOWED_ORIGINS_ENV_VAR),
            ("auth.jwt.secret", env::JWT_SECRET_ENV_VAR),
            ("postgres.url", env::DATABASE_URL_ENV_VAR),
            (
                "password_hashing.memory_kib",
                env::PASSWORD_HASH_MEMORY_KIB_ENV_VAR,
            ),
            (
                "password_hashing.iterations",
                env::PASSWORD_HASH_ITERATIONS_ENV_VAR,
            ),
            (
                "password_hashing.parallelism",
                env::PASSWORD_HASH_PARALLELISM_ENV_VAR,
            ),
        ];

        let mut builder = Config::builder()
            .set_default("application.host", prod::HOST)?
            .set_default("application.port", prod::PORT)?
            .set_default(
                "password_hashing.memory_kib",
                prod::password_hashing::MEMORY_KIB,
            )?
            .set_default(
                "password_hashing.iterations",
                prod::password_hashing::ITERATIONS,
            )?
            .set_default(
                "password_hashing.parallelism",
                prod::password_hashing::PARALLELISM,
            )?
            .add_source(File::with_name(CONFIG_FILE).required(false));

        for (key, var) in overrides {
            let value = lookup(var).filter(|value| !value.trim().is_empty());
            builder = builder.set_override_option(key, value)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }

    /// Configured CORS origins, or the service's own localhost origin.
    pub fn allowed_origins(&self) -> AllowedOrigins {
        match &self.application.allowed_origins {
            Some(origins) => AllowedOrigins::parse(origins),
            None => AllowedOrigins::parse(&format!("http://localhost:{}", self.application.port)),
        }
    }
}

/// Origins accepted by the CORS layer.
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    /// Parse a comma separated list; entries that are not valid header values are skipped.
    pub fn parse(origins: &str) -> Self {
        let origins = origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin, "ignoring invalid allowed origin");
                    None
                }
            })
            .collect();

        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.contains(origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
