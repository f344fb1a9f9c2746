//! Read-only access to guild and user configuration.
//!
//! Every read here is unscoped: rows carrying a `deleted_at` marker are returned
//! alongside live ones, because the admin views must see everything. The method
//! names say so, to keep the intent visible at call sites.

use crate::schema::{guilds, users};
use crate::{DbPool, GuildRecord, UserRecord};
use async_trait::async_trait;
use diesel::dsl::{AsSelect, SqlTypeOf};
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use fleetdash_error::{StoreError, StoreErrorKind, StoreResult};
use tracing::{debug, instrument};

/// Source of guild and user configuration for the admin listings.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// All guild rows, including soft-deleted ones, in primary-key order.
    async fn list_all_guilds_including_removed(&self) -> StoreResult<Vec<GuildRecord>>;

    /// All user rows, including soft-deleted ones, in primary-key order.
    async fn list_all_users_including_removed(&self) -> StoreResult<Vec<UserRecord>>;

    /// Check the store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}

/// Query selecting every guild row. No soft-delete predicate is applied.
pub fn all_guilds_query() -> guilds::BoxedQuery<'static, Pg, SqlTypeOf<AsSelect<GuildRecord, Pg>>> {
    guilds::table
        .select(GuildRecord::as_select())
        .order(guilds::id.asc())
        .into_boxed()
}

/// Query selecting every user row. No soft-delete predicate is applied.
pub fn all_users_query() -> users::BoxedQuery<'static, Pg, SqlTypeOf<AsSelect<UserRecord, Pg>>> {
    users::table
        .select(UserRecord::as_select())
        .order(users::id.asc())
        .into_boxed()
}

/// PostgreSQL-backed [`ConfigStore`] sharing one connection pool.
///
/// Diesel is synchronous, so each read runs on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct PostgresConfigStore {
    pool: DbPool,
}

impl PostgresConfigStore {
    /// Create a store over an existing pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn with_connection<T, F>(&self, op: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> StoreResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            op(&mut conn)
        })
        .await
        .map_err(|e| StoreError::new(StoreErrorKind::Join(e.to_string())))?
    }
}

#[async_trait]
impl ConfigStore for PostgresConfigStore {
    #[instrument(skip(self))]
    async fn list_all_guilds_including_removed(&self) -> StoreResult<Vec<GuildRecord>> {
        let rows = self
            .with_connection(|conn| Ok(all_guilds_query().load::<GuildRecord>(conn)?))
            .await?;

        debug!(count = rows.len(), "Loaded guilds");
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn list_all_users_including_removed(&self) -> StoreResult<Vec<UserRecord>> {
        let rows = self
            .with_connection(|conn| Ok(all_users_query().load::<UserRecord>(conn)?))
            .await?;

        debug!(count = rows.len(), "Loaded users");
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> StoreResult<()> {
        self.with_connection(|conn| {
            diesel::sql_query("SELECT 1").execute(conn)?;
            Ok(())
        })
        .await
    }
}
