//! Survey form and prediction result.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use zeroize::Zeroize;

use crate::application::Assessment;
use crate::domain::{age_bracket, SurveyResponse, GENDERS, QUESTIONS, QUESTION_COUNT};
use crate::tui::styles::WellbeingTheme;

const NAME_FIELD: usize = 0;
const AGE_FIELD: usize = 1;
const GENDER_FIELD: usize = 2;
const FIRST_QUESTION: usize = 3;

/// Name, age, gender and one row per question.
pub const FIELD_COUNT: usize = FIRST_QUESTION + QUESTION_COUNT;

const MAX_NAME_LEN: usize = 64;
const MAX_AGE: i64 = 80;

fn takes_text(field: usize) -> bool {
    matches!(field, NAME_FIELD | AGE_FIELD)
}

/// What the result pane shows.
#[derive(Debug, Clone, Default)]
pub enum PredictionOutcome {
    #[default]
    Idle,
    /// Required input missing or prediction disabled
    Warning(String),
    Error(String),
    Scored(Assessment),
}

/// Survey form state.
///
/// Choices are stored as indices into the canonical tables, so the form can
/// only ever produce labels the encoder accepts.
pub struct SurveyFormState {
    pub name: String,
    pub age: String,
    pub gender: usize,
    pub answers: [usize; QUESTION_COUNT],
    pub selected_field: usize,
    pub outcome: PredictionOutcome,
}

impl Default for SurveyFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            gender: 0,
            answers: [0; QUESTION_COUNT],
            selected_field: 0,
            outcome: PredictionOutcome::Idle,
        }
    }
}

impl Drop for SurveyFormState {
    fn drop(&mut self) {
        self.name.zeroize();
    }
}

impl SurveyFormState {
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % FIELD_COUNT;
    }

    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = FIELD_COUNT - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Whether the selected field takes typed text.
    #[must_use]
    pub fn is_text_field(&self) -> bool {
        takes_text(self.selected_field)
    }

    /// Add a character to the name or age field.
    pub fn input_char(&mut self, c: char) {
        match self.selected_field {
            NAME_FIELD if !c.is_control() && self.name.chars().count() < MAX_NAME_LEN => {
                self.name.push(c);
            }
            AGE_FIELD if c.is_ascii_digit() && self.age.len() < 2 => {
                self.age.push(c);
            }
            _ => {}
        }
    }

    pub fn delete_char(&mut self) {
        match self.selected_field {
            NAME_FIELD => {
                self.name.pop();
            }
            AGE_FIELD => {
                self.age.pop();
            }
            _ => {}
        }
    }

    /// Step the selected choice forward, wrapping. Age steps by one year.
    pub fn next_choice(&mut self) {
        self.step_choice(true);
    }

    pub fn prev_choice(&mut self) {
        self.step_choice(false);
    }

    fn step_choice(&mut self, forward: bool) {
        let cycle = |current: usize, len: usize| {
            if forward {
                (current + 1) % len
            } else if current == 0 {
                len - 1
            } else {
                current - 1
            }
        };

        match self.selected_field {
            NAME_FIELD => {}
            AGE_FIELD => {
                let age = self.age_value();
                let next = if forward {
                    (age + 1).min(MAX_AGE)
                } else {
                    (age - 1).max(0)
                };
                self.age = next.to_string();
            }
            GENDER_FIELD => self.gender = cycle(self.gender, GENDERS.len()),
            field => {
                let q = field - FIRST_QUESTION;
                self.answers[q] = cycle(self.answers[q], QUESTIONS[q].options.len());
            }
        }
    }

    fn age_value(&self) -> i64 {
        self.age.parse().unwrap_or(0)
    }

    /// Label currently chosen for a question.
    #[must_use]
    pub fn answer_label(&self, question: usize) -> &'static str {
        QUESTIONS[question].options[self.answers[question]].0
    }

    /// Build the response the service scores.
    #[must_use]
    pub fn to_response(&self) -> SurveyResponse {
        let mut response = SurveyResponse {
            name: self.name.clone(),
            age: self.age_value(),
            gender: GENDERS[self.gender].0.to_string(),
            ..SurveyResponse::default()
        };
        for (i, table) in QUESTIONS.iter().enumerate() {
            response.answer(table.feature, self.answer_label(i));
        }
        response
    }

    /// Wipe the name buffer and reset every field.
    pub fn clear_sensitive(&mut self) {
        self.name.zeroize();
        self.age.clear();
        self.gender = 0;
        self.answers = [0; QUESTION_COUNT];
        self.selected_field = 0;
        self.outcome = PredictionOutcome::Idle;
    }
}

/// Render the survey form and result pane.
///
/// `unavailable` carries the reason prediction is disabled, if it is.
pub fn render_prediction(
    f: &mut Frame,
    area: Rect,
    state: &SurveyFormState,
    unavailable: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form + result
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_prediction_header(f, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_form_fields(f, body[0], state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(body[1]);

    render_field_detail(f, right[0], state);
    render_result(f, right[1], state, unavailable);
    render_prediction_footer(f, chunks[2], state);
}

fn render_prediction_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", WellbeingTheme::text()),
        Span::styled("Work-Life Balance Prediction", WellbeingTheme::title()),
        Span::styled(
            " │ Answer the survey, then predict",
            WellbeingTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(WellbeingTheme::border()),
    );

    f.render_widget(header, area);
}

fn field_title(field: usize) -> &'static str {
    match field {
        NAME_FIELD => "Your name",
        AGE_FIELD => "Your age",
        GENDER_FIELD => "Gender",
        q => QUESTIONS[q - FIRST_QUESTION].prompt,
    }
}

fn field_value(state: &SurveyFormState, field: usize) -> String {
    match field {
        NAME_FIELD => state.name.clone(),
        AGE_FIELD => match age_bracket(state.age_value()) {
            Ok(bracket) if !state.age.is_empty() => {
                format!("{} ({})", state.age, bracket.label())
            }
            _ => state.age.clone(),
        },
        GENDER_FIELD => GENDERS[state.gender].0.to_string(),
        q => state.answer_label(q - FIRST_QUESTION).to_string(),
    }
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &SurveyFormState) {
    let items: Vec<ListItem> = (0..FIELD_COUNT)
        .map(|field| {
            let is_selected = field == state.selected_field;
            let value = field_value(state, field);
            let value_line = if takes_text(field) {
                let shown = if value.is_empty() {
                    Span::styled("type here", WellbeingTheme::text_muted())
                } else {
                    Span::styled(value, WellbeingTheme::text())
                };
                Line::from(vec![
                    Span::raw("   "),
                    shown,
                    if is_selected {
                        Span::styled("▌", WellbeingTheme::primary_cursor())
                    } else {
                        Span::raw("")
                    },
                ])
            } else if is_selected {
                Line::from(vec![
                    Span::styled("   ‹ ", WellbeingTheme::key_hint()),
                    Span::styled(value, WellbeingTheme::focused()),
                    Span::styled(" ›", WellbeingTheme::key_hint()),
                ])
            } else {
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(value, WellbeingTheme::text()),
                ])
            };

            let title_style = if is_selected {
                WellbeingTheme::focused()
            } else {
                WellbeingTheme::text_secondary()
            };

            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{:>2}. {}", field + 1, field_title(field)),
                    title_style,
                )),
                value_line,
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(Span::styled(" Survey ", WellbeingTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(WellbeingTheme::border_focused()),
    );

    let mut list_state = ListState::default().with_selected(Some(state.selected_field));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_field_detail(f: &mut Frame, area: Rect, state: &SurveyFormState) {
    let field = state.selected_field;
    let mut lines = vec![Line::from(Span::styled(
        field_title(field),
        WellbeingTheme::title(),
    ))];

    match field {
        NAME_FIELD => lines.push(Line::from(Span::styled(
            "Used only to greet you; never scored or logged.",
            WellbeingTheme::text_muted(),
        ))),
        AGE_FIELD => lines.push(Line::from(Span::styled(
            "Whole years, 1 to 80. Grouped into four brackets.",
            WellbeingTheme::text_muted(),
        ))),
        GENDER_FIELD => lines.push(Line::from(Span::styled(
            format!("{} options", GENDERS.len()),
            WellbeingTheme::text_muted(),
        ))),
        q => {
            let table = &QUESTIONS[q - FIRST_QUESTION];
            if let Some(help) = table.help {
                lines.push(Line::from(Span::styled(help, WellbeingTheme::text_secondary())));
            }
            lines.push(Line::from(Span::styled(
                format!(
                    "Option {} of {}",
                    state.answers[q - FIRST_QUESTION] + 1,
                    table.options.len()
                ),
                WellbeingTheme::text_muted(),
            )));
        }
    }

    let detail = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(" Question ", WellbeingTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(WellbeingTheme::border()),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(detail, area);
}

fn render_result(f: &mut Frame, area: Rect, state: &SurveyFormState, unavailable: Option<&str>) {
    match (&state.outcome, unavailable) {
        (PredictionOutcome::Scored(assessment), _) => render_assessment(f, area, state, assessment),
        (PredictionOutcome::Warning(msg), _) => render_message(f, area, msg, true),
        (PredictionOutcome::Error(msg), _) => render_message(f, area, msg, false),
        (PredictionOutcome::Idle, Some(reason)) => render_message(
            f,
            area,
            &format!("Prediction is disabled: {reason}"),
            true,
        ),
        (PredictionOutcome::Idle, None) => {
            let idle = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Fill in the survey and press Enter to predict.",
                    WellbeingTheme::text_secondary(),
                )),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(Span::styled(" Result ", WellbeingTheme::subtitle()))
                    .borders(Borders::ALL)
                    .border_style(WellbeingTheme::border()),
            );
            f.render_widget(idle, area);
        }
    }
}

fn render_assessment(f: &mut Frame, area: Rect, state: &SurveyFormState, assessment: &Assessment) {
    let score = assessment.score;
    let style = WellbeingTheme::verdict(score.verdict);

    let block = Block::default()
        .title(Span::styled(" Result ", WellbeingTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Greeting
            Constraint::Length(1), // Gauge
            Constraint::Length(4), // Banner
            Constraint::Min(0),    // Recommendations
        ])
        .split(inner);

    let greeting = Paragraph::new(Line::from(vec![
        Span::styled("Hi ", WellbeingTheme::text_secondary()),
        Span::styled(state.name.trim().to_string(), WellbeingTheme::title()),
        Span::styled(", here is your result.", WellbeingTheme::text_secondary()),
    ]));
    f.render_widget(greeting, chunks[0]);

    let ratio = (score.display / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(style)
        .ratio(ratio)
        .label(format!("Prediction: {:.2}", score.display));
    f.render_widget(gauge, chunks[1]);

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(score.verdict.headline(), style)),
        Line::from(Span::styled(
            score.verdict.description(),
            WellbeingTheme::text(),
        )),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(banner, chunks[2]);

    let mut lines = vec![Line::from(Span::styled(
        "Recommendations",
        WellbeingTheme::subtitle(),
    ))];
    if assessment.recommendations.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing to flag. Keep your routines going.",
            WellbeingTheme::success(),
        )));
    } else {
        lines.extend(assessment.recommendations.iter().map(|r| {
            Line::from(vec![
                Span::styled("• ", WellbeingTheme::key_hint()),
                Span::styled(r.clone(), WellbeingTheme::text()),
            ])
        }));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[3]);
}

fn render_message(f: &mut Frame, area: Rect, message: &str, warning: bool) {
    let (style, title) = if warning {
        (WellbeingTheme::warning(), " Warning ")
    } else {
        (WellbeingTheme::danger(), " Error ")
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), style)),
    ];

    let p = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(title, style))
                .borders(Borders::ALL)
                .border_style(style),
        );

    f.render_widget(p, area);
}

fn render_prediction_footer(f: &mut Frame, area: Rect, state: &SurveyFormState) {
    let mut spans = vec![
        Span::styled("[↑↓] ", WellbeingTheme::key_hint()),
        Span::styled("Field ", WellbeingTheme::key_desc()),
    ];
    if state.is_text_field() {
        spans.push(Span::styled("[Type] ", WellbeingTheme::key_hint()));
        spans.push(Span::styled("Edit ", WellbeingTheme::key_desc()));
    }
    if state.selected_field != NAME_FIELD {
        spans.push(Span::styled("[←→] ", WellbeingTheme::key_hint()));
        spans.push(Span::styled("Change ", WellbeingTheme::key_desc()));
    }
    spans.extend([
        Span::styled("[Enter] ", WellbeingTheme::key_hint()),
        Span::styled("Predict ", WellbeingTheme::key_desc()),
        Span::styled("[Ctrl+R] ", WellbeingTheme::key_hint()),
        Span::styled("Reset ", WellbeingTheme::key_desc()),
        Span::styled("[Esc] ", WellbeingTheme::key_hint()),
        Span::styled("Home", WellbeingTheme::key_desc()),
    ]);

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(WellbeingTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{encode, Feature};

    #[test]
    fn test_default_form_encodes() {
        let mut form = SurveyFormState::default();
        form.name = "Sam".into();
        form.age = "30".into();

        let response = form.to_response();
        assert_eq!(response.age, 30);
        assert_eq!(response.gender, "Male");
        assert_eq!(response.answers.len(), QUESTIONS.len());
        assert!(encode(&response).is_ok());
    }

    #[test]
    fn test_choices_wrap() {
        let mut form = SurveyFormState::default();
        form.selected_field = GENDER_FIELD;
        form.prev_choice();
        assert_eq!(form.gender, GENDERS.len() - 1);
        form.next_choice();
        assert_eq!(form.gender, 0);

        form.selected_field = FIRST_QUESTION + 1;
        form.next_choice();
        let response = form.to_response();
        assert_eq!(
            response.answers.get(&Feature::DailyStress).map(String::as_str),
            Some(QUESTIONS[1].options[1].0)
        );
    }

    #[test]
    fn test_age_input_is_bounded() {
        let mut form = SurveyFormState::default();
        form.selected_field = AGE_FIELD;
        for c in "7x93".chars() {
            form.input_char(c);
        }
        assert_eq!(form.age, "79");

        form.next_choice();
        form.next_choice();
        assert_eq!(form.age, "80");

        form.age.clear();
        form.prev_choice();
        assert_eq!(form.age, "0");
    }

    #[test]
    fn test_typing_only_edits_text_fields() {
        let mut form = SurveyFormState::default();
        form.input_char('A');
        form.input_char('\n');
        assert_eq!(form.name, "A");

        form.selected_field = GENDER_FIELD;
        form.input_char('B');
        form.delete_char();
        assert_eq!(form.name, "A");
        assert_eq!(form.gender, 0);
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = SurveyFormState::default();
        form.prev_field();
        assert_eq!(form.selected_field, FIELD_COUNT - 1);
        form.next_field();
        assert_eq!(form.selected_field, 0);
    }

    #[test]
    fn test_clear_sensitive_resets_form() {
        let mut form = SurveyFormState::default();
        form.name = "Sam".into();
        form.age = "30".into();
        form.answers[3] = 2;
        form.outcome = PredictionOutcome::Warning("x".into());

        form.clear_sensitive();
        assert!(form.name.is_empty());
        assert!(form.age.is_empty());
        assert_eq!(form.answers, [0; QUESTION_COUNT]);
        assert!(matches!(form.outcome, PredictionOutcome::Idle));
    }
}
