//! Tips view: clock, random tip and daily reminders.

use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::DAILY_REMINDERS;
use crate::tui::styles::WellbeingTheme;

/// Clock format shown above the tip.
pub const CLOCK_FORMAT: &str = "%H:%M • %d %b %Y";

/// Tips page state.
pub struct TipsState {
    pub current: Option<&'static str>,
    pub now: DateTime<Local>,
}

impl Default for TipsState {
    fn default() -> Self {
        Self {
            current: None,
            now: Local::now(),
        }
    }
}

/// Render the tips view
pub fn render_tips(f: &mut Frame, area: Rect, state: &TipsState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(7), // Tip
            Constraint::Min(0),    // Reminders
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", WellbeingTheme::text()),
        Span::styled("Quick Well-Being Tips", WellbeingTheme::title()),
        Span::styled(
            format!(" │ {}", state.now.format(CLOCK_FORMAT)),
            WellbeingTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(WellbeingTheme::border()),
    );
    f.render_widget(header, chunks[0]);

    let tip_line = match state.current {
        Some(tip) => Line::from(Span::styled(tip, WellbeingTheme::title())),
        None => Line::from(Span::styled(
            "Press Enter for a tip.",
            WellbeingTheme::text_muted(),
        )),
    };
    let tip = Paragraph::new(vec![Line::from(""), tip_line])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(" Tip of the moment ", WellbeingTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(WellbeingTheme::border_focused()),
        );
    f.render_widget(tip, chunks[1]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, DAILY_REMINDERS.len() as u32); DAILY_REMINDERS.len()])
        .margin(1)
        .split(chunks[2]);

    for ((title, text), card) in DAILY_REMINDERS.iter().zip(cards.iter()) {
        let p = Paragraph::new(vec![
            Line::from(Span::styled(*title, WellbeingTheme::subtitle())),
            Line::from(""),
            Line::from(Span::styled(*text, WellbeingTheme::text())),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(WellbeingTheme::border()),
        );
        f.render_widget(p, *card);
    }

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[Enter/Space] ", WellbeingTheme::key_hint()),
        Span::styled("Get a tip ", WellbeingTheme::key_desc()),
        Span::styled("[Esc] ", WellbeingTheme::key_hint()),
        Span::styled("Home", WellbeingTheme::key_desc()),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(WellbeingTheme::border()),
    );
    f.render_widget(footer, chunks[3]);
}
