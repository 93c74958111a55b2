//! TUI rendering with ratatui
//!
//! Sliders, preview swatch, guess history and the end-of-game reveal.

use super::app::{App, Channel, MessageStyle};
use crate::core::{Color as Hsl, MAX_GUESSES};
use crate::game::GameState;
use crate::output::formatters::{closeness_bar, hint_row};
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

fn rgb(color: Hsl) -> Color {
    let [r, g, b] = color.to_rgb();
    Color::Rgb(r, g, b)
}

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Main content
            Constraint::Length(11), // Sliders or result
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Guesses
            Constraint::Percentage(40), // Messages / share
        ])
        .split(chunks[1]);

    render_guesses(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    if app.game.state().is_terminal() {
        render_result(f, app, chunks[2]);
    } else {
        render_controls(f, app, chunks[2]);
    }

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎨 CHROMACLE · guess the daily color")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn render_guesses<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let guesses = &app.game.session().guesses;

    let mut items: Vec<ListItem> = guesses
        .iter()
        .enumerate()
        .map(|(i, guess)| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}. ", i + 1)),
                Span::styled("      ", Style::default().bg(rgb(guess.color))),
                Span::raw(" "),
                Span::styled(
                    guess.hex.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {}  ", hint_row(guess))),
                Span::styled(
                    closeness_bar(guess.closeness, 10),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    for i in guesses.len()..MAX_GUESSES {
        items.push(
            ListItem::new(format!("{}. ······", i + 1)).style(Style::default().fg(Color::DarkGray)),
        );
    }

    let list = List::new(items).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_info_panel<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    if app.show_share {
        let share = Paragraph::new(app.game.share_text())
            .block(
                Block::default()
                    .title(" Share (printed on exit) ")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(share, area);
        return;
    }

    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_controls<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let preview = app.preview();
    let turn = app.game.session().guesses.len() + 1;

    let block = Block::default()
        .title(format!(" GUESS ({turn}/{MAX_GUESSES}) · Enter to submit "))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(18), Constraint::Min(20)])
        .split(inner);

    let swatch = Paragraph::new(vec![Line::from(""), Line::from(preview.to_hex())])
        .alignment(Alignment::Center)
        .style(Style::default().bg(rgb(preview)).fg(Color::White));
    f.render_widget(swatch, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(columns[1]);

    for (channel, row) in Channel::ALL.into_iter().zip(rows.iter()) {
        render_slider(f, app, channel, *row);
    }
}

fn render_slider<S: KeyValueStore>(f: &mut Frame, app: &App<S>, channel: Channel, area: Rect) {
    let value = app.value(channel);
    let focused = app.selected == channel;
    let preview = app.preview();

    // Gauge shows what moving this slider does to the color
    let fg = match channel {
        Channel::Hue => rgb(Hsl::new(value, 100, 50)),
        Channel::Saturation => rgb(Hsl::new(preview.h, 100, 50)),
        Channel::Lightness => rgb(Hsl::new(preview.h, preview.s, 75)),
    };

    let border = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(
                    " {}{} {value}{} ",
                    if focused { "▶ " } else { "" },
                    channel.label(),
                    channel.unit()
                ))
                .borders(Borders::ALL)
                .style(border),
        )
        .gauge_style(Style::default().fg(fg))
        .ratio(f64::from(value) / f64::from(channel.max()))
        .label("");
    f.render_widget(gauge, area);
}

fn render_result<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let secret = app.game.secret();
    let session = app.game.session();
    let won = app.game.state() == GameState::Won;

    let (title, color) = if won {
        (
            format!(" 🎨 Nailed it in {}! ", session.guesses.len()),
            Color::Green,
        )
    } else {
        (format!(" The color was {} ", secret.to_hex()), Color::Red)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .style(Style::default().fg(color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Percentage(50)];
    if won {
        constraints.push(Constraint::Percentage(50));
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    let mut secret_lines = vec![
        Line::from(""),
        Line::from(format!("Secret {}", secret.to_hex())),
        Line::from(secret.to_string()),
    ];
    if !won && let Some(best) = session.best_closeness() {
        secret_lines.push(Line::from(format!("Closest miss: {best}")));
    }
    let secret_swatch = Paragraph::new(secret_lines)
    .alignment(Alignment::Center)
    .style(Style::default().bg(rgb(secret)).fg(Color::White));
    f.render_widget(secret_swatch, columns[0]);

    if won && let Some(last) = session.last_guess() {
        let yours = Paragraph::new(vec![
            Line::from(""),
            Line::from(format!("Yours {}", last.hex)),
            Line::from(last.color.to_string()),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().bg(rgb(last.color)).fg(Color::White));
        f.render_widget(yours, columns[1]);
    }
}

fn render_status<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let stats = app.game.stats();

    let streak = Paragraph::new(format!("🔥 {}  🏆 {}", stats.streak, stats.max_streak))
        .alignment(Alignment::Center);
    f.render_widget(streak, chunks[0]);

    let record = Paragraph::new(format!("✅ {}/{}", stats.won, stats.played))
        .alignment(Alignment::Center);
    f.render_widget(record, chunks[1]);

    let help_text = if app.game.state().is_terminal() {
        "q: Quit | s: Share"
    } else {
        "↑↓: Slider | ←→: Adjust (Shift ×10) | Enter: Guess | q: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
