use gatehouse_core::{Account, AccountStore, AccountStoreError, Email};
use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, PgPool, migrate::MigrateError};

/// Account store backed by PostgreSQL.
///
/// Email uniqueness is enforced by the primary key, so concurrent inserts for
/// the same address cannot both succeed.
#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresAccountStore { pool }
    }

    /// Apply the bundled schema migrations.
    pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations").run(pool).await
    }
}

#[derive(FromRow)]
struct AccountRow {
    email: String,
    password_hash: String,
    verified: bool,
    verification_code: Option<String>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountStoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Account::parse(
            Secret::from(row.email),
            Secret::from(row.password_hash),
            row.verified,
            row.verification_code,
        )
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))
    }
}

fn stored_code(account: &Account) -> Option<&str> {
    account.verification_code().map(|code| code.as_str())
}

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Checking account existence in PostgreSQL", skip_all)]
    async fn exists(&self, email: &Email) -> Result<bool, AccountStoreError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)")
            .bind(email.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))
    }

    #[tracing::instrument(name = "Retrieving account from PostgreSQL", skip_all)]
    async fn find(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT email, password_hash, verified, TRIM(verification_code) AS verification_code
                FROM accounts
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn add_account(&self, account: Account) -> Result<(), AccountStoreError> {
        let query = sqlx::query(
            r#"
                INSERT INTO accounts (email, password_hash, verified, verification_code)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(account.email().as_str())
        .bind(account.password_hash().as_ref().expose_secret())
        .bind(account.is_verified())
        .bind(stored_code(&account));

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountStoreError::AccountAlreadyExists;
                }
            }
            AccountStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Marking account verified in PostgreSQL", skip_all)]
    async fn mark_verified(&self, email: &Email) -> Result<(), AccountStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET verified = TRUE, verification_code = NULL
                WHERE email = $1 AND verified = FALSE
            "#,
        )
        .bind(email.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        if self.exists(email).await? {
            Err(AccountStoreError::AlreadyVerified)
        } else {
            Err(AccountStoreError::AccountNotFound)
        }
    }
}
