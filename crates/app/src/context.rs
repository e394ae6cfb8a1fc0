//! App Context

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::{
    database::{self, PoolSettings},
    domain::{
        checkout::{CheckoutService, StoreCheckoutService},
        lessons::{
            LessonsService, StoreLessonsService,
            repositories::{LessonsRepository, MemoryLessonsRepository, PgLessonsRepository},
        },
        orders::{
            OrdersService, StoreOrdersService,
            repositories::{MemoryOrdersRepository, OrdersRepository, PgOrdersRepository},
        },
    },
    store::UnavailableStore,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("invalid database connection string")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub lessons: Arc<dyn LessonsService>,
    pub checkout: Arc<dyn CheckoutService>,
    pub orders: Arc<dyn OrdersService>,
    pool: Option<PgPool>,
}

impl AppContext {
    /// Wrap already-built services, e.g. mocks in handler tests.
    #[must_use]
    pub fn new(
        lessons: Arc<dyn LessonsService>,
        checkout: Arc<dyn CheckoutService>,
        orders: Arc<dyn OrdersService>,
    ) -> Self {
        Self {
            lessons,
            checkout,
            orders,
            pool: None,
        }
    }

    #[must_use]
    pub fn from_repositories(
        lessons: Arc<dyn LessonsRepository>,
        orders: Arc<dyn OrdersRepository>,
    ) -> Self {
        Self::new(
            Arc::new(StoreLessonsService::new(lessons.clone())),
            Arc::new(StoreCheckoutService::new(lessons)),
            Arc::new(StoreOrdersService::new(orders)),
        )
    }

    /// Services backed by process-local repositories.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repositories(
            Arc::new(MemoryLessonsRepository::new()),
            Arc::new(MemoryOrdersRepository::new()),
        )
    }

    /// Services whose every data operation fails as unavailable.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::from_repositories(Arc::new(UnavailableStore), Arc::new(UnavailableStore))
    }

    /// Build application context from a database URL.
    ///
    /// An unreachable database is logged and the pool falls back to
    /// connecting on first use, so the server can still start.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection string cannot be parsed, or when
    /// `run_migrations` is set and the migrations fail.
    pub async fn from_database_url(
        url: &str,
        settings: PoolSettings,
        run_migrations: bool,
    ) -> Result<Self, AppInitError> {
        let pool = match database::connect(url, settings).await {
            Ok(pool) => {
                tracing::info!("connected to database");
                pool
            }
            Err(error) => {
                tracing::warn!(%error, "database unreachable, connecting lazily");
                database::connect_lazy(url, settings).map_err(AppInitError::Database)?
            }
        };

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;

            tracing::info!("database migrations applied");
        }

        let mut context = Self::from_repositories(
            Arc::new(PgLessonsRepository::new(pool.clone())),
            Arc::new(PgOrdersRepository::new(pool.clone())),
        );

        context.pool = Some(pool);

        Ok(context)
    }

    /// Release the database pool, if there is one.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
            tracing::info!("database pool closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::lessons::LessonsServiceError;

    use super::*;

    #[tokio::test]
    async fn in_memory_context_starts_empty() -> TestResult {
        let context = AppContext::in_memory();

        assert!(context.lessons.list_lessons().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn unavailable_context_fails_data_operations() {
        let context = AppContext::unavailable();

        let result = context.lessons.list_lessons().await;

        assert!(
            matches!(result, Err(LessonsServiceError::Unavailable(_))),
            "expected Unavailable, got {result:?}"
        );
    }

    #[tokio::test]
    async fn malformed_database_url_is_rejected() {
        let result =
            AppContext::from_database_url("not a url", PoolSettings::default(), false).await;

        assert!(
            matches!(result, Err(AppInitError::Database(_))),
            "expected Database error"
        );
    }
}
