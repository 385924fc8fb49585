use accounts_core::{
    Account, AccountId, AccountStore, AccountStoreError, AccountUpdate, Email, NewAccount,
    PasswordHash, Username,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountStoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let username = Username::parse(row.username)
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
        let email = Email::try_from(Secret::from(row.email))
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        Ok(Account::new(
            AccountId::from(row.id),
            username,
            email,
            PasswordHash::new(Secret::from(row.password_hash)),
        ))
    }
}

#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresAccountStore { pool }
    }
}

fn map_write_error(e: sqlx::Error) -> AccountStoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AccountStoreError::DuplicateEmail;
        }
    }
    AccountStoreError::UnexpectedError(e.to_string())
}

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Retrieving account by email from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, username, email, password_hash
                FROM accounts
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    #[tracing::instrument(name = "Retrieving account by id from PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, username, email, password_hash
                FROM accounts
                WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn create(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
                INSERT INTO accounts (username, email, password_hash)
                VALUES ($1, $2, $3)
                RETURNING id
            "#,
        )
        .bind(account.username.as_ref())
        .bind(account.email.as_ref().expose_secret())
        .bind(account.password_hash.as_ref().expose_secret())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(account.into_account(AccountId::from(id)))
    }

    #[tracing::instrument(name = "Updating account in PostgreSQL", skip_all)]
    async fn update_fields(
        &self,
        id: &AccountId,
        update: AccountUpdate,
    ) -> Result<u64, AccountStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET username = COALESCE($2, username),
                    email = COALESCE($3, email),
                    password_hash = COALESCE($4, password_hash)
                WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(update.username.as_ref().map(|u| u.as_ref()))
        .bind(update.email.as_ref().map(|e| e.as_ref().expose_secret().as_str()))
        .bind(
            update
                .password_hash
                .as_ref()
                .map(|h| h.as_ref().expose_secret().as_str()),
        )
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(name = "Deleting account from PostgreSQL", skip_all)]
    async fn delete_by_id(&self, id: &AccountId) -> Result<u64, AccountStoreError> {
        let result = sqlx::query(
            r#"
                DELETE FROM accounts
                WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
