pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const HOST_ENV_VAR: &str = "HOST";
    pub const PORT_ENV_VAR: &str = "PORT";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "ALLOWED_ORIGINS";
    pub const PASSWORD_HASH_MEMORY_KIB_ENV_VAR: &str = "PASSWORD_HASH_MEMORY_KIB";
    pub const PASSWORD_HASH_ITERATIONS_ENV_VAR: &str = "PASSWORD_HASH_ITERATIONS";
    pub const PASSWORD_HASH_PARALLELISM_ENV_VAR: &str = "PASSWORD_HASH_PARALLELISM";
}

/// Optional settings file, looked up relative to the working directory.
pub const CONFIG_FILE: &str = "config/accounts";

/// Tokens are valid for one hour.
pub const TOKEN_TIME_TO_LIVE_SECONDS: i64 = 3600;

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

pub mod prod {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: i64 = 7000;

    pub mod password_hashing {
        pub const MEMORY_KIB: i64 = 15000;
        pub const ITERATIONS: i64 = 2;
        pub const PARALLELISM: i64 = 1;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const JWT_SECRET: &str = "test-signing-secret";

    pub mod password_hashing {
        pub const MEMORY_KIB: u32 = 1024;
        pub const ITERATIONS: u32 = 1;
        pub const PARALLELISM: u32 = 1;
    }
}
