//! Home view: about text, how it works, and the start action.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::{WellbeingTheme, LOGO};

const ABOUT: &str = "This app helps you gain insight into your daily habits and work-life \
balance. An ensemble AI model trained on lifestyle survey data turns your answers into a \
personalized balance score, with suggestions for where small changes could help. It supports \
UN Sustainable Development Goal 3: Good Health and Well-Being.";

const STEPS: [(&str, &str); 3] = [
    ("1", "Input your activity data"),
    ("2", "The model processes the data"),
    ("3", "Get personalized suggestions"),
];

const PRODUCTS: [(&str, &str); 2] = [
    ("Work-Life Score", "Predict your balance instantly"),
    ("Lifestyle Insights", "Tailored tips to improve habits"),
];

/// Render the home view.
///
/// `prediction_ready` reflects whether the scoring artifacts loaded.
pub fn render_home(f: &mut Frame, area: Rect, prediction_ready: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Logo
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let logo = Paragraph::new(
        LOGO.lines()
            .filter(|l| !l.is_empty())
            .map(|l| Line::from(Span::styled(l, WellbeingTheme::subtitle())))
            .collect::<Vec<_>>(),
    )
    .alignment(Alignment::Center);
    f.render_widget(logo, chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(chunks[1]);

    render_about(f, content[0], prediction_ready);
    render_how_it_works(f, content[1]);
    render_home_footer(f, chunks[2]);
}

fn render_about(f: &mut Frame, area: Rect, prediction_ready: bool) {
    let status = if prediction_ready {
        Span::styled("● Model ready", WellbeingTheme::success())
    } else {
        Span::styled("● Model unavailable", WellbeingTheme::warning())
    };

    let text = vec![
        Line::from(Span::styled(
            "Explore Good Health & Well-Being",
            WellbeingTheme::title(),
        )),
        Line::from(""),
        Line::from(Span::styled(ABOUT, WellbeingTheme::text())),
        Line::from(""),
        Line::from(status),
    ];

    let p = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(" About Our App ", WellbeingTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(WellbeingTheme::border()),
    );

    f.render_widget(p, area);
}

fn render_how_it_works(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for (n, step) in STEPS {
        lines.push(Line::from(vec![
            Span::styled(format!(" {n} "), WellbeingTheme::selected()),
            Span::styled(format!("  {step}"), WellbeingTheme::text()),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "What you get",
        WellbeingTheme::subtitle(),
    )));
    for (name, blurb) in PRODUCTS {
        lines.push(Line::from(vec![
            Span::styled(format!("{name}: "), WellbeingTheme::focused()),
            Span::styled(blurb, WellbeingTheme::text_secondary()),
        ]));
    }

    let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(" How It Works ", WellbeingTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(WellbeingTheme::border()),
    );

    f.render_widget(p, area);
}

fn render_home_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[Enter] ", WellbeingTheme::key_hint()),
        Span::styled("Start ", WellbeingTheme::key_desc()),
        Span::styled("[F1-F4] ", WellbeingTheme::key_hint()),
        Span::styled("Pages ", WellbeingTheme::key_desc()),
        Span::styled("[Tab] ", WellbeingTheme::key_hint()),
        Span::styled("Next page ", WellbeingTheme::key_desc()),
        Span::styled("[Q] ", WellbeingTheme::key_hint()),
        Span::styled("Quit", WellbeingTheme::key_desc()),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(WellbeingTheme::border()),
    );

    f.render_widget(footer, area);
}
