//! The daily game: session state machine wired to persistence and stats

use super::{GameState, Session, Stats, SubmitOutcome};
use crate::core::{Color, daily_color};
use crate::output::format_share;
use crate::storage::{KeyValueStore, load_session, load_stats, save_session, save_stats};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// A day's game bound to its store
///
/// Stats are updated exactly once, on the submission that ends the game.
/// Every accepted submission saves the session.
pub struct Game<S: KeyValueStore> {
    store: S,
    date: NaiveDate,
    secret: Color,
    session: Session,
    stats: Stats,
}

impl<S: KeyValueStore> Game<S> {
    /// Restore today's session from `store`, or start a fresh one
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use chromacle::game::{Game, GameState};
    /// use chromacle::storage::MemoryStore;
    ///
    /// let game = Game::load(MemoryStore::new(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    /// assert_eq!(game.state(), GameState::InProgress);
    /// ```
    pub fn load(store: S, date: NaiveDate) -> Self {
        let session = load_session(&store, date).unwrap_or_else(|| {
            debug!(%date, "starting fresh session");
            Session::new(date)
        });
        let stats = load_stats(&store);

        Self {
            store,
            date,
            secret: daily_color(date),
            session,
            stats,
        }
    }

    /// Score a guess and advance the game
    ///
    /// Returns [`SubmitOutcome::Rejected`] without touching state or storage
    /// once the game is over. Storage write failures are logged and the
    /// in-memory game carries on.
    pub fn submit_guess(&mut self, color: Color) -> SubmitOutcome {
        let outcome = self.session.submit(color, self.secret);

        match outcome {
            SubmitOutcome::Rejected => {
                debug!(%color, "game already over, guess ignored");
                return outcome;
            }
            SubmitOutcome::Won | SubmitOutcome::Lost => {
                let won = outcome == SubmitOutcome::Won;
                // Stats may have changed on disk since startup
                self.stats = load_stats(&self.store);
                self.stats.record(won);
                info!(
                    won,
                    guesses = self.session.guesses.len(),
                    streak = self.stats.streak,
                    "game finished"
                );
                if let Err(e) = save_stats(&mut self.store, &self.stats) {
                    warn!(error = %e, "failed to save stats");
                }
            }
            SubmitOutcome::Continue => {}
        }

        if let Err(e) = save_session(&mut self.store, &self.session) {
            warn!(error = %e, "failed to save session");
        }
        outcome
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.session.state()
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Today's secret; front ends only reveal it once the game is over
    #[must_use]
    pub const fn secret(&self) -> Color {
        self.secret
    }

    /// Shareable summary of today's session
    #[must_use]
    pub fn share_text(&self) -> String {
        format_share(&self.session)
    }

    /// Give back the underlying store
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_GUESSES;
    use crate::storage::{MemoryStore, SESSION_KEY, STATS_KEY};
    use std::io;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    /// Opposite side of the wheel and far off on both percentages
    fn miss(secret: Color) -> Color {
        Color::new(
            secret.h + 180,
            if secret.s > 50 { 0 } else { 100 },
            if secret.l > 50 { 0 } else { 100 },
        )
    }

    #[test]
    fn secret_comes_from_the_date() {
        let game = Game::load(MemoryStore::new(), today());
        assert_eq!(game.secret(), daily_color(today()));
        assert_eq!(game.date(), today());
    }

    #[test]
    fn win_updates_stats_once_and_persists() {
        let mut game = Game::load(MemoryStore::new(), today());
        let secret = game.secret();

        assert_eq!(game.submit_guess(miss(secret)), SubmitOutcome::Continue);
        assert_eq!(game.stats().played, 0);

        assert_eq!(game.submit_guess(secret), SubmitOutcome::Won);
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(
            *game.stats(),
            Stats {
                played: 1,
                won: 1,
                streak: 1,
                max_streak: 1
            }
        );

        assert_eq!(game.submit_guess(secret), SubmitOutcome::Rejected);
        assert_eq!(game.stats().played, 1);
        assert_eq!(game.session().guesses.len(), 2);

        let store = game.into_store();
        assert_eq!(load_stats(&store).played, 1);
        let saved = load_session(&store, today()).unwrap();
        assert!(saved.won && saved.game_over);
        assert_eq!(saved.guesses.len(), 2);
    }

    #[test]
    fn loss_after_six_misses_resets_streak() {
        let mut store = MemoryStore::new();
        save_stats(
            &mut store,
            &Stats {
                played: 3,
                won: 3,
                streak: 3,
                max_streak: 3,
            },
        )
        .unwrap();

        let mut game = Game::load(store, today());
        let wrong = miss(game.secret());
        for _ in 0..MAX_GUESSES - 1 {
            assert_eq!(game.submit_guess(wrong), SubmitOutcome::Continue);
            assert_eq!(game.stats().played, 3);
        }
        assert_eq!(game.submit_guess(wrong), SubmitOutcome::Lost);
        assert_eq!(game.state(), GameState::Lost);
        assert!(game.session().game_over);
        assert_eq!(
            *game.stats(),
            Stats {
                played: 4,
                won: 3,
                streak: 0,
                max_streak: 3
            }
        );
    }

    #[test]
    fn every_accepted_guess_is_saved() {
        let mut game = Game::load(MemoryStore::new(), today());
        let wrong = miss(game.secret());
        game.submit_guess(wrong);
        game.submit_guess(wrong);

        let store = game.into_store();
        assert_eq!(load_session(&store, today()).unwrap().guesses.len(), 2);
        assert!(store.get(STATS_KEY).unwrap().is_none());
    }

    #[test]
    fn reload_resumes_todays_session() {
        let mut game = Game::load(MemoryStore::new(), today());
        game.submit_guess(miss(game.secret()));
        let store = game.into_store();

        let resumed = Game::load(store, today());
        assert_eq!(resumed.session().guesses.len(), 1);
        assert_eq!(resumed.state(), GameState::InProgress);
    }

    #[test]
    fn finished_game_stays_finished_after_reload() {
        let mut game = Game::load(MemoryStore::new(), today());
        let secret = game.secret();
        game.submit_guess(secret);

        let mut resumed = Game::load(game.into_store(), today());
        assert_eq!(resumed.state(), GameState::Won);
        assert_eq!(resumed.submit_guess(secret), SubmitOutcome::Rejected);
        assert_eq!(resumed.stats().played, 1);
    }

    #[test]
    fn new_day_starts_fresh_but_keeps_stats() {
        let mut game = Game::load(MemoryStore::new(), today());
        let secret = game.secret();
        game.submit_guess(secret);

        let tomorrow = today().succ_opt().unwrap();
        let next = Game::load(game.into_store(), tomorrow);
        assert_eq!(next.state(), GameState::InProgress);
        assert!(next.session().guesses.is_empty());
        assert_eq!(next.stats().won, 1);
        assert_eq!(next.secret(), daily_color(tomorrow));
    }

    #[test]
    fn corrupt_storage_starts_fresh() {
        let mut store = MemoryStore::new();
        store.set(SESSION_KEY, "garbage").unwrap();
        store.set(STATS_KEY, "[1,2,3]").unwrap();

        let game = Game::load(store, today());
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(*game.stats(), Stats::default());
    }

    #[test]
    fn restored_session_with_contradictory_flags_starts_fresh() {
        let mut full = Session::new(today());
        let wrong = miss(daily_color(today()));
        for _ in 0..MAX_GUESSES {
            full.submit(wrong, daily_color(today()));
        }
        full.game_over = false;

        let mut store = MemoryStore::new();
        save_session(&mut store, &full).unwrap();

        let mut game = Game::load(store, today());
        assert!(game.session().guesses.is_empty());
        assert_eq!(game.submit_guess(wrong), SubmitOutcome::Continue);
        assert_eq!(game.session().guesses.len(), 1);
    }

    #[test]
    fn saturated_stats_survive_a_finish() {
        let mut store = MemoryStore::new();
        let maxed = Stats {
            played: u32::MAX,
            won: u32::MAX,
            streak: u32::MAX,
            max_streak: u32::MAX,
        };
        save_stats(&mut store, &maxed).unwrap();

        let mut game = Game::load(store, today());
        let secret = game.secret();
        assert_eq!(game.submit_guess(secret), SubmitOutcome::Won);
        assert_eq!(*game.stats(), maxed);
    }

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> io::Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    #[test]
    fn write_failures_do_not_interrupt_play() {
        let mut game = Game::load(ReadOnlyStore, today());
        let secret = game.secret();
        assert_eq!(game.submit_guess(miss(secret)), SubmitOutcome::Continue);
        assert_eq!(game.submit_guess(secret), SubmitOutcome::Won);
        assert_eq!(game.stats().won, 1);
    }

    #[test]
    fn share_text_reflects_session() {
        let mut game = Game::load(MemoryStore::new(), today());
        let secret = game.secret();
        game.submit_guess(secret);
        let text = game.share_text();
        assert!(text.contains("1/6"));
        assert!(text.starts_with("🎨 Chromacle 6/15/2025"));
    }
}
