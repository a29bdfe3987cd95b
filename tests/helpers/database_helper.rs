//! Test database helper utilities
//!
//! Provides a migrated PostgreSQL database for repository tests, either from
//! `TEST_DATABASE_URL` or from a throwaway testcontainers instance. Fails the
//! test when neither can be reached.

use sqlx::PgPool;
use std::sync::Once;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres as PostgresImage;

use contest_bot::database::{run_migrations, ParticipantRepository};

static INIT: Once = Once::new();

/// Test database helper that manages PostgreSQL test database setup
pub struct TestDatabase {
    pub pool: PgPool,
    pub database_url: String,
    _container: Option<ContainerAsync<PostgresImage>>,
}

impl TestDatabase {
    /// Connect to a migrated test database
    pub async fn new() -> Self {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt::try_init();
        });

        // For CI, use the environment variable if available
        let (database_url, container) = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => (url, None),
            Err(_) => {
                let (url, container) = Self::start_container().await;
                (url, Some(container))
            }
        };

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        run_migrations(&pool).await.expect("Failed to run migrations");

        Self {
            pool,
            database_url,
            _container: container,
        }
    }

    async fn start_container() -> (String, ContainerAsync<PostgresImage>) {
        let container = PostgresImage::default()
            .with_db_name("test_contest")
            .with_user("test_user")
            .with_password("test_password")
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get container host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get container port");
        let url = format!(
            "postgresql://test_user:test_password@{}:{}/test_contest",
            host, port
        );

        (url, container)
    }

    pub fn repository(&self) -> ParticipantRepository {
        ParticipantRepository::new(self.pool.clone())
    }

    /// Remove rows created for the given Telegram users
    pub async fn cleanup(&self, telegram_user_ids: &[i64]) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM participants WHERE telegram_user_id = ANY($1)")
            .bind(telegram_user_ids)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Count rows stored for one Telegram user
    pub async fn count_rows_for(&self, telegram_user_id: i64) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM participants WHERE telegram_user_id = $1")
            .bind(telegram_user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
