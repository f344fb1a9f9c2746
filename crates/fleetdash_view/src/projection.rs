//! One-line projections of records for the plain-text listings.
//!
//! Line indices are the zero-based position in the listing, not the record id.

use crate::{format_latency, join_lines};
use fleetdash_database::{GuildRecord, UserRecord};
use fleetdash_telemetry::ShardStatus;

/// Project a guild row to `"<index>.\tID: <id> | Prefix: <prefix>"`.
///
/// Channel, role and watchlist are appended only when populated. A zero id counts
/// as unset, matching how the bot stores "no channel".
pub fn project_guild_line(index: usize, guild: &GuildRecord) -> String {
    let mut line = format!("{}.\tID: {} | Prefix: {}", index, guild.id, guild.prefix);

    if let Some(channel) = guild.channel_id.filter(|id| *id != 0) {
        line.push_str(&format!(" | Channel: {}", channel));
    }
    if let Some(role) = guild.role_id.filter(|id| *id != 0) {
        line.push_str(&format!(" | Role: {}", role));
    }
    if let Some(watchlist) = guild.watchlist.as_ref().filter(|w| !w.is_empty()) {
        let ids: Vec<String> = watchlist.iter().map(i64::to_string).collect();
        line.push_str(&format!(" | Watchlist: {}", ids.join(", ")));
    }

    line
}

/// The linked-profile tags of a user, in AniList, MyAnimeList, Kitsu order.
///
/// Unset and empty handles are skipped.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDateTime;
/// use fleetdash_database::UserRecord;
/// use fleetdash_view::profile_tags;
///
/// let user = UserRecord {
///     id: 7,
///     created_at: NaiveDateTime::default(),
///     updated_at: NaiveDateTime::default(),
///     deleted_at: None,
///     anilist_handle: Some("foo".into()),
///     myanimelist_handle: Some(String::new()),
///     kitsu_handle: None,
/// };
/// assert_eq!(profile_tags(&user), vec!["AL: foo".to_string()]);
/// ```
pub fn profile_tags(user: &UserRecord) -> Vec<String> {
    [
        ("AL", &user.anilist_handle),
        ("MAL", &user.myanimelist_handle),
        ("Kitsu", &user.kitsu_handle),
    ]
    .into_iter()
    .filter_map(|(label, handle)| {
        handle
            .as_deref()
            .filter(|h| !h.is_empty())
            .map(|h| format!("{}: {}", label, h))
    })
    .collect()
}

/// Project a user row to `"<index>.\tID: <id> | <profile tags joined by ' | '>"`.
pub fn project_user_line(index: usize, user: &UserRecord) -> String {
    format!(
        "{}.\tID: {} | {}",
        index,
        user.id,
        profile_tags(user).join(" | ")
    )
}

/// Project a shard's health to a single line.
pub fn project_shard_line(index: usize, shard: &ShardStatus) -> String {
    format!(
        "{}.\tID: {} | ShardCount: {} | IsClosed: {} | Latency: {} | IsWsRatelimited: {}",
        index,
        shard.id,
        shard.shard_count,
        shard.closed,
        format_latency(shard.latency_seconds),
        shard.ws_rate_limited
    )
}

/// Every guild as a newline-joined listing.
pub fn guild_lines(guilds: &[GuildRecord]) -> String {
    join_lines(
        guilds
            .iter()
            .enumerate()
            .map(|(i, g)| project_guild_line(i, g)),
    )
}

/// Every user as a newline-joined listing.
pub fn user_lines(users: &[UserRecord]) -> String {
    join_lines(users.iter().enumerate().map(|(i, u)| project_user_line(i, u)))
}

/// Every shard as a newline-joined listing, in report order.
pub fn shard_lines(shards: &[ShardStatus]) -> String {
    join_lines(
        shards
            .iter()
            .enumerate()
            .map(|(i, s)| project_shard_line(i, s)),
    )
}
