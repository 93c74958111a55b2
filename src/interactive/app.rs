//! TUI application state and logic

use crate::core::Color;
use crate::game::{Game, SubmitOutcome};
use crate::storage::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which slider has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Hue,
    Saturation,
    Lightness,
}

impl Channel {
    pub const ALL: [Self; 3] = [Self::Hue, Self::Saturation, Self::Lightness];

    #[must_use]
    pub const fn max(self) -> u16 {
        match self {
            Self::Hue => 359,
            Self::Saturation | Self::Lightness => 100,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hue => "H",
            Self::Saturation => "S",
            Self::Lightness => "L",
        }
    }

    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Hue => "°",
            Self::Saturation | Self::Lightness => "%",
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Hue => Self::Saturation,
            Self::Saturation => Self::Lightness,
            Self::Lightness => Self::Hue,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Hue => Self::Lightness,
            Self::Saturation => Self::Hue,
            Self::Lightness => Self::Saturation,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<S: KeyValueStore> {
    pub game: Game<S>,
    pub hue: u16,
    pub saturation: u16,
    pub lightness: u16,
    pub selected: Channel,
    pub messages: Vec<Message>,
    pub show_share: bool,
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    #[must_use]
    pub fn new(game: Game<S>) -> Self {
        let mut app = Self {
            game,
            hue: 180,
            saturation: 50,
            lightness: 50,
            selected: Channel::Hue,
            messages: Vec::new(),
            show_share: false,
            should_quit: false,
        };

        if app.game.state().is_terminal() {
            app.add_message("Today's game is done. New color at midnight!", MessageStyle::Info);
            app.add_message("Press 's' to show share text.", MessageStyle::Info);
        } else if app.game.session().guesses.is_empty() {
            app.add_message("Match today's color! ↑↓ pick a slider, ←→ adjust.", MessageStyle::Info);
            app.add_message("Enter to guess. Shift or PgUp/PgDn moves by 10.", MessageStyle::Info);
        } else {
            app.add_message("Welcome back! Today's guesses were restored.", MessageStyle::Info);
        }
        app
    }

    /// Color under the sliders right now
    #[must_use]
    pub const fn preview(&self) -> Color {
        Color::new(self.hue, self.saturation as u8, self.lightness as u8)
    }

    #[must_use]
    pub const fn value(&self, channel: Channel) -> u16 {
        match channel {
            Channel::Hue => self.hue,
            Channel::Saturation => self.saturation,
            Channel::Lightness => self.lightness,
        }
    }

    /// Move the selected slider; hue wraps around, the others stop at the ends
    pub fn adjust(&mut self, delta: i32) {
        let channel = self.selected;
        let current = i32::from(self.value(channel));
        let max = i32::from(channel.max());
        let next: i32 = match channel {
            Channel::Hue => (current + delta).rem_euclid(max + 1),
            Channel::Saturation | Channel::Lightness => (current + delta).clamp(0, max),
        };
        let next = next as u16;

        match channel {
            Channel::Hue => self.hue = next,
            Channel::Saturation => self.saturation = next,
            Channel::Lightness => self.lightness = next,
        }
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    pub fn submit(&mut self) {
        let color = self.preview();
        match self.game.submit_guess(color) {
            SubmitOutcome::Rejected => {
                self.add_message("The game is over for today.", MessageStyle::Error);
            }
            SubmitOutcome::Continue => {
                let left = self.game.session().attempts_left();
                let hints = self
                    .game
                    .session()
                    .last_guess()
                    .map(crate::output::formatters::hint_row)
                    .unwrap_or_default();
                self.add_message(
                    &format!("{} {hints} · {left} left", color.to_hex()),
                    MessageStyle::Info,
                );
            }
            SubmitOutcome::Won => {
                let n = self.game.session().guesses.len();
                self.add_message(&format!("🎨 Nailed it in {n}!"), MessageStyle::Success);
                self.add_message("Press 's' to show share text.", MessageStyle::Info);
            }
            SubmitOutcome::Lost => {
                let hex = self.game.secret().to_hex();
                self.add_message(&format!("The color was {hex}"), MessageStyle::Error);
                self.add_message("Press 's' to show share text.", MessageStyle::Info);
            }
        }
    }

    pub fn toggle_share(&mut self) {
        if self.game.state().is_terminal() {
            self.show_share = !self.show_share;
        } else {
            self.add_message("Finish today's game to share it.", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let step = if modifiers.contains(KeyModifiers::SHIFT) {
            10
        } else {
            1
        };

        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('s') => self.toggle_share(),
            _ if self.game.state().is_terminal() => {}
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.adjust(-step),
            KeyCode::Right | KeyCode::Char('l') => self.adjust(step),
            KeyCode::PageDown => self.adjust(-10),
            KeyCode::PageUp => self.adjust(10),
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// Returns the share text when the player asked for it, so it can be printed
/// to the normal screen after the TUI closes.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(app: App<S>) -> Result<Option<String>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Errors from the loop surface only once the terminal is usable again
    res
}

fn run_app<B, S, E>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
    mut next_event: E,
) -> Result<Option<String>>
where
    B: ratatui::backend::Backend,
    S: KeyValueStore,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.show_share.then(|| app.game.share_text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_GUESSES;
    use crate::game::GameState;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use crossterm::event::KeyEvent;
    use ratatui::backend::TestBackend;

    fn app() -> App<MemoryStore> {
        let date = NaiveDate::from_ymd_opt(2025, 8, 20).unwrap();
        App::new(Game::load(MemoryStore::new(), date))
    }

    #[test]
    fn starts_at_mid_sliders() {
        let app = app();
        assert_eq!(app.preview(), Color::new(180, 50, 50));
        assert_eq!(app.selected, Channel::Hue);
    }

    #[test]
    fn hue_wraps_and_percentages_clamp() {
        let mut app = app();
        app.hue = 355;
        app.adjust(10);
        assert_eq!(app.hue, 5);
        app.adjust(-10);
        assert_eq!(app.hue, 355);

        app.select_next();
        app.saturation = 95;
        app.adjust(10);
        assert_eq!(app.saturation, 100);

        app.select_next();
        app.lightness = 3;
        app.adjust(-10);
        assert_eq!(app.lightness, 0);
    }

    #[test]
    fn selection_cycles() {
        let mut app = app();
        for expected in [Channel::Saturation, Channel::Lightness, Channel::Hue] {
            app.select_next();
            assert_eq!(app.selected, expected);
        }
        app.select_prev();
        assert_eq!(app.selected, Channel::Lightness);
    }

    #[test]
    fn keys_drive_the_game() {
        let mut app = app();
        let secret = app.game.secret();
        app.hue = secret.h;
        app.saturation = u16::from(secret.s);
        app.lightness = u16::from(secret.l);

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.game.state(), GameState::Won);

        // Sliders are frozen once the game ends
        app.handle_key(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.hue, secret.h);

        app.handle_key(KeyCode::Char('s'), KeyModifiers::NONE);
        assert!(app.show_share);

        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn test_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(100, 40)).unwrap()
    }

    #[test]
    fn event_errors_reach_the_caller() {
        let mut terminal = test_terminal();
        let res = run_app(&mut terminal, app(), || {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "input closed"))
        });
        let err = res.unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }

    #[test]
    fn scripted_win_returns_share_text() {
        let mut app = app();
        let secret = app.game.secret();
        app.hue = secret.h;
        app.saturation = u16::from(secret.s);
        app.lightness = u16::from(secret.l);

        let mut keys = vec![KeyCode::Char('q'), KeyCode::Char('s'), KeyCode::Enter].into_iter();
        let mut terminal = test_terminal();
        let share = run_app(&mut terminal, app, || {
            key(keys.next_back().unwrap_or(KeyCode::Esc))
        })
        .unwrap();
        assert!(share.unwrap().contains("1/6"));
    }

    #[test]
    fn lost_game_renders_closest_miss() {
        let mut app = app();
        let secret = app.game.secret();
        app.hue = (secret.h + 180) % 360;
        app.saturation = if secret.s > 50 { 0 } else { 100 };
        app.lightness = if secret.l > 50 { 0 } else { 100 };
        for _ in 0..MAX_GUESSES {
            app.submit();
        }
        assert_eq!(app.game.state(), GameState::Lost);

        let mut terminal = test_terminal();
        terminal.draw(|f| super::super::rendering::ui(f, &app)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Closest miss:"));
    }

    #[test]
    fn share_unavailable_mid_game() {
        let mut app = app();
        app.toggle_share();
        assert!(!app.show_share);
    }
}
