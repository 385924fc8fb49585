use accounts::{
    AccountService, Argon2PasswordHasher, HashMapAccountStore, JwtTokenService,
    PostgresAccountStore, adapters::config::AccountServiceSetting, configure_postgresql,
    init_tracing,
};
use color_eyre::eyre::Result;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let config = AccountServiceSetting::load()?;

    let hasher = Argon2PasswordHasher::new(&config.password_hashing)?;
    let token_service = JwtTokenService::new(&config.auth.jwt);
    let allowed_origins = Some(config.allowed_origins());

    let listener = TcpListener::bind(config.address()).await?;

    match &config.postgres.url {
        Some(url) => {
            let pg_pool = configure_postgresql(url).await?;
            let account_service =
                AccountService::new(PostgresAccountStore::new(pg_pool), hasher, token_service);
            account_service
                .run_standalone(listener, allowed_origins)
                .await?;
        }
        None => {
            tracing::warn!("DATABASE_URL not set, accounts are kept in memory");
            let account_service =
                AccountService::new(HashMapAccountStore::new(), hasher, token_service);
            account_service
                .run_standalone(listener, allowed_origins)
                .await?;
        }
    }

    Ok(())
}
