//! UI module: View components for the TUI.

pub mod eda;
pub mod home;
pub mod prediction;
pub mod tips;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::tui::app::Page;
use crate::tui::styles::WellbeingTheme;

/// Page selector along the top of the screen.
pub fn render_page_tabs(f: &mut Frame, area: Rect, current: Page) {
    let titles = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, p)| format!("F{} {}", i + 1, p.title()));

    let tabs = Tabs::new(titles)
        .select(current.index())
        .style(WellbeingTheme::text_secondary())
        .highlight_style(WellbeingTheme::header())
        .divider("│")
        .block(
            Block::default()
                .title(Span::styled(" Wellbeing ", WellbeingTheme::subtitle()))
                .borders(Borders::BOTTOM)
                .border_style(WellbeingTheme::border()),
        );

    f.render_widget(tabs, area);
}

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![Span::styled(
            "DISCLAIMER: The score is an indicative estimate from a survey model and does not replace professional advice.",
            WellbeingTheme::text_muted(),
        )]),
        Line::from(vec![Span::styled(
            "Your name is used for display only and is never stored.",
            WellbeingTheme::text_muted(),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(WellbeingTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}
