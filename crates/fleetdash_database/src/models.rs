//! Row models for the configuration tables.
//!
//! Both tables carry a `deleted_at` soft-delete marker. The bot itself filters on it;
//! the admin listings in this crate never do.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;

/// Database row for the guilds table.
///
/// Per-guild bot settings keyed by the guild's snowflake id.
#[derive(Debug, Clone, PartialEq, Serialize, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::guilds)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GuildRecord {
    /// Discord guild snowflake
    pub id: i64,

    // Timestamps
    /// When the row was created
    pub created_at: NaiveDateTime,
    /// When the row was last written
    pub updated_at: NaiveDateTime,
    /// Soft-delete marker; set when the bot removed the row
    pub deleted_at: Option<NaiveDateTime>,

    // Settings
    /// Command prefix
    pub prefix: String,
    /// Channel the bot posts notifications to
    pub channel_id: Option<i64>,
    /// Role mentioned in notifications
    pub role_id: Option<i64>,
    /// Watched anime ids
    pub watchlist: Option<Vec<i64>>,
}

impl GuildRecord {
    /// True when the guild has been soft-deleted.
    pub fn is_removed(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Database row for the users table.
///
/// Linked anime-tracker profiles keyed by the user's snowflake id. Any number of
/// the handles may be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRecord {
    /// Discord user snowflake
    pub id: i64,

    // Timestamps
    /// When the row was created
    pub created_at: NaiveDateTime,
    /// When the row was last written
    pub updated_at: NaiveDateTime,
    /// Soft-delete marker; set when the bot removed the row
    pub deleted_at: Option<NaiveDateTime>,

    // Linked profiles
    #[diesel(column_name = anilist)]
    /// AniList username
    pub anilist_handle: Option<String>,
    #[diesel(column_name = myanimelist)]
    /// MyAnimeList username
    pub myanimelist_handle: Option<String>,
    #[diesel(column_name = kitsu)]
    /// Kitsu username
    pub kitsu_handle: Option<String>,
}

impl UserRecord {
    /// True when the user has been soft-deleted.
    pub fn is_removed(&self) -> bool {
        self.deleted_at.is_some()
    }
}
