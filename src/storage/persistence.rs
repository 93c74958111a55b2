//! Session and stats persistence
//!
//! Loading never fails: missing, unreadable, unparseable or stale data all
//! read as "no prior state". A stored session is only valid for the calendar
//! day it was written on.

use super::KeyValueStore;
use crate::game::{Session, Stats};
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io;
use tracing::debug;

/// Key holding today's session
pub const SESSION_KEY: &str = "chromacle-state";

/// Key holding cumulative stats
pub const STATS_KEY: &str = "chromacle-stats";

/// Load the stored session if it belongs to `today`
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use chromacle::game::Session;
/// use chromacle::storage::{MemoryStore, load_session, save_session};
///
/// let today = NaiveDate::from_ymd_opt(2025, 2, 2).unwrap();
/// let yesterday = today.pred_opt().unwrap();
/// let mut store = MemoryStore::new();
///
/// save_session(&mut store, &Session::new(yesterday)).unwrap();
/// assert!(load_session(&store, today).is_none());
/// ```
pub fn load_session<S: KeyValueStore + ?Sized>(store: &S, today: NaiveDate) -> Option<Session> {
    let session: Session = load_json(store, SESSION_KEY)?;
    if session.date != today {
        debug!(stored = %session.date, %today, "stored session expired");
        None
    } else if !session.is_consistent() {
        debug!(
            guesses = session.guesses.len(),
            game_over = session.game_over,
            won = session.won,
            "stored session flags disagree with its guesses, ignoring"
        );
        None
    } else {
        Some(session)
    }
}

/// Overwrite the stored session
///
/// # Errors
///
/// Returns an I/O error if the store cannot be written.
pub fn save_session<S: KeyValueStore + ?Sized>(store: &mut S, session: &Session) -> io::Result<()> {
    save_json(store, SESSION_KEY, session)
}

/// Load stats, all zeros when absent, unparseable or self-contradictory
pub fn load_stats<S: KeyValueStore + ?Sized>(store: &S) -> Stats {
    match load_json::<_, Stats>(store, STATS_KEY) {
        Some(stats) if stats.is_consistent() => stats,
        Some(stats) => {
            debug!(?stats, "stored stats break their invariants, ignoring");
            Stats::default()
        }
        None => Stats::default(),
    }
}

/// Overwrite the stored stats
///
/// # Errors
///
/// Returns an I/O error if the store cannot be written.
pub fn save_stats<S: KeyValueStore + ?Sized>(store: &mut S, stats: &Stats) -> io::Result<()> {
    save_json(store, STATS_KEY, stats)
}

fn load_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            debug!(key, error = %e, "unreadable stored value, ignoring");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(key, error = %e, "malformed stored value, ignoring");
            None
        }
    }
}

fn save_json<S, T>(store: &mut S, key: &str, value: &T) -> io::Result<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let json = serde_json::to_string(value).map_err(io::Error::other)?;
    store.set(key, &json)
}
