//! Tests for the unscoped configuration listings against a real database.
//!
//! These tests require a running PostgreSQL database reachable through
//! `DATABASE_URL`. Each test runs inside a test transaction that is never committed.
//!
//! Run with: cargo test --package fleetdash_database -- --ignored

use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use fleetdash_database::schema::{guilds, users};
use fleetdash_database::{GuildRecord, UserRecord, all_guilds_query, all_users_query};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Connect, make sure the tables exist, and open a test transaction.
fn create_test_connection() -> PgConnection {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let mut conn = PgConnection::establish(&url).expect("Failed to connect to test database");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run migrations");
    conn.begin_test_transaction()
        .expect("Failed to begin test transaction");
    conn
}

#[test]
#[ignore] // Requires DATABASE_URL
fn test_guild_listing_includes_removed_rows() {
    let mut conn = create_test_connection();
    diesel::delete(guilds::table).execute(&mut conn).unwrap();

    let now = Utc::now().naive_utc();
    diesel::insert_into(guilds::table)
        .values(&vec![
            (guilds::id.eq(1_i64), guilds::prefix.eq("!"), guilds::deleted_at.eq(None::<chrono::NaiveDateTime>)),
            (guilds::id.eq(2_i64), guilds::prefix.eq("?"), guilds::deleted_at.eq(Some(now))),
        ])
        .execute(&mut conn)
        .unwrap();

    let rows: Vec<GuildRecord> = all_guilds_query().load(&mut conn).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].prefix, "!");
    assert!(!rows[0].is_removed());
    assert_eq!(rows[1].id, 2);
    assert!(rows[1].is_removed());
}

#[test]
#[ignore] // Requires DATABASE_URL
fn test_user_listing_includes_removed_rows() {
    let mut conn = create_test_connection();
    diesel::delete(users::table).execute(&mut conn).unwrap();

    let now = Utc::now().naive_utc();
    diesel::insert_into(users::table)
        .values((
            users::id.eq(10_i64),
            users::anilist.eq(Some("foo")),
            users::deleted_at.eq(Some(now)),
        ))
        .execute(&mut conn)
        .unwrap();

    let rows: Vec<UserRecord> = all_users_query().load(&mut conn).unwrap();

    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_removed());
    assert_eq!(rows[0].anilist_handle.as_deref(), Some("foo"));
    assert_eq!(rows[0].myanimelist_handle, None);
}
