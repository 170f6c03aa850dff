//! Main TUI application state machine.
//!
//! Handles:
//! - Page navigation
//! - Input event handling
//! - Service integration

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use rand_chacha::ChaCha20Rng;
use zeroize::Zeroize;

use crate::adapters::CsvDataset;
use crate::application::{ArtifactPredictionService, EdaService};
use crate::config::AppConfig;
use crate::domain::TipDeck;
use crate::WellbeingError;

use super::ui::{
    eda::{render_eda, EdaViewState},
    home::render_home,
    prediction::{render_prediction, PredictionOutcome, SurveyFormState},
    render_disclaimer, render_page_tabs,
    tips::{render_tips, TipsState},
};

/// Top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Eda,
    Prediction,
    Tips,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Eda, Page::Prediction, Page::Tips];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Eda => "EDA",
            Self::Prediction => "Prediction",
            Self::Tips => "Tips",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }
}

/// Navigation requests, independent of which key produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Select(Page),
    Next,
    Prev,
    /// The Home page's start button
    Start,
}

/// Page transition table.
#[must_use]
pub fn navigate(current: Page, action: NavAction) -> Page {
    let n = Page::ALL.len();
    match action {
        NavAction::Select(page) => page,
        NavAction::Next => Page::ALL[(current.index() + 1) % n],
        NavAction::Prev => Page::ALL[(current.index() + n - 1) % n],
        NavAction::Start => Page::Prediction,
    }
}

/// Map a key to a navigation action on the given page.
///
/// The survey form consumes Tab and digits, so those only navigate elsewhere.
#[must_use]
pub fn nav_action(page: Page, key: KeyCode, modifiers: KeyModifiers) -> Option<NavAction> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match key {
        KeyCode::F(n @ 1..=4) => Some(NavAction::Select(Page::ALL[usize::from(n) - 1])),
        KeyCode::Right if ctrl => Some(NavAction::Next),
        KeyCode::Left if ctrl => Some(NavAction::Prev),
        KeyCode::Esc if page != Page::Home => Some(NavAction::Select(Page::Home)),
        KeyCode::Enter if page == Page::Home => Some(NavAction::Start),
        _ if page == Page::Prediction => None,
        KeyCode::Tab => Some(NavAction::Next),
        KeyCode::BackTab => Some(NavAction::Prev),
        KeyCode::Char(c @ '1'..='4') => {
            let i = c.to_digit(10).map_or(0, |d| d as usize - 1);
            Some(NavAction::Select(Page::ALL[i]))
        }
        _ => None,
    }
}

/// Main application state
pub struct App {
    page: Page,
    should_quit: bool,

    prediction_service: ArtifactPredictionService,
    eda_service: EdaService<CsvDataset>,
    tip_deck: TipDeck<ChaCha20Rng>,

    survey_state: SurveyFormState,
    eda_state: EdaViewState,
    tips_state: TipsState,
}

impl App {
    /// Create a new application from configuration.
    ///
    /// Missing or invalid artifacts disable prediction instead of failing.
    ///
    /// # Errors
    /// Returns error if services cannot be initialized.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let prediction_service =
            ArtifactPredictionService::from_artifact_dir(&config.artifact_dir);

        let eda_service = EdaService::new(Arc::new(CsvDataset::new(&config.dataset_path)));

        let tip_deck = match config.tip_seed {
            Some(seed) => TipDeck::seeded(seed),
            None => TipDeck::from_entropy(),
        };

        Self::with_dependencies(prediction_service, eda_service, tip_deck)
    }

    /// Create application with injected dependencies (Composition Root pattern).
    ///
    /// # Errors
    /// Returns error if initialization fails.
    pub fn with_dependencies(
        prediction_service: ArtifactPredictionService,
        eda_service: EdaService<CsvDataset>,
        tip_deck: TipDeck<ChaCha20Rng>,
    ) -> Result<Self> {
        let eda_state = EdaViewState {
            source: eda_service.source_name(),
            ..EdaViewState::default()
        };

        Ok(Self {
            page: Page::Home,
            should_quit: false,
            prediction_service,
            eda_service,
            tip_deck,
            survey_state: SurveyFormState::default(),
            eda_state,
            tips_state: TipsState::default(),
        })
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        self.survey_state.clear_sensitive();
        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            self.tips_state.now = Local::now();

            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(2),
                        Constraint::Min(0),
                        Constraint::Length(3),
                    ])
                    .split(area);

                render_page_tabs(f, chunks[0], self.page);

                match self.page {
                    Page::Home => {
                        render_home(f, chunks[1], self.prediction_service.is_available())
                    }
                    Page::Eda => render_eda(f, chunks[1], &self.eda_state),
                    Page::Prediction => render_prediction(
                        f,
                        chunks[1],
                        &self.survey_state,
                        self.prediction_service.unavailable_reason(),
                    ),
                    Page::Tips => render_tips(f, chunks[1], &self.tips_state),
                }

                render_disclaimer(f, chunks[2]);
            })?;

            // Handle input (short poll to stay responsive)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(action) = nav_action(self.page, key, modifiers) {
            self.go_to(navigate(self.page, action));
            return;
        }

        match self.page {
            Page::Home => self.handle_home_key(key),
            Page::Eda => self.handle_eda_key(key),
            Page::Prediction => self.handle_prediction_key(key, modifiers),
            Page::Tips => self.handle_tips_key(key),
        }
    }

    fn go_to(&mut self, page: Page) {
        if page != self.page {
            tracing::debug!("Page {} -> {}", self.page.title(), page.title());
        }
        self.page = page;
        if page == Page::Eda && !self.eda_state.is_loaded() {
            self.load_eda();
        }
    }

    fn handle_home_key(&mut self, key: KeyCode) {
        if let KeyCode::Char('q') | KeyCode::Char('Q') = key {
            self.should_quit = true;
        }
    }

    fn handle_eda_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Right => self.eda_state.tab = self.eda_state.tab.next(),
            KeyCode::Left => self.eda_state.tab = self.eda_state.tab.prev(),
            KeyCode::Down => self.eda_state.next_feature(),
            KeyCode::Up => self.eda_state.prev_feature(),
            KeyCode::Char('c') | KeyCode::Char('C') => self.eda_state.next_category(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.load_eda(),
            _ => {}
        }
    }

    fn handle_prediction_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        if key == KeyCode::Enter {
            self.submit_survey();
            return;
        }

        let form = &mut self.survey_state;
        match key {
            KeyCode::Char('r') if ctrl => form.clear_sensitive(),
            KeyCode::Up | KeyCode::BackTab => form.prev_field(),
            KeyCode::Down | KeyCode::Tab => form.next_field(),
            KeyCode::Left => form.prev_choice(),
            KeyCode::Right => form.next_choice(),
            KeyCode::Char(c) if !ctrl => form.input_char(c),
            KeyCode::Backspace => form.delete_char(),
            _ => {}
        }
    }

    fn handle_tips_key(&mut self, key: KeyCode) {
        if let KeyCode::Enter | KeyCode::Char(' ') = key {
            self.tips_state.current = Some(self.tip_deck.draw());
        }
    }

    fn submit_survey(&mut self) {
        let mut response = self.survey_state.to_response();
        self.survey_state.outcome = match self.prediction_service.assess(&response) {
            Ok(assessment) => PredictionOutcome::Scored(assessment),
            Err(WellbeingError::MissingRequired(what)) => {
                PredictionOutcome::Warning(format!("Please enter {what}."))
            }
            Err(WellbeingError::ArtifactMissing(reason)) => {
                PredictionOutcome::Warning(format!("Prediction is disabled: {reason}"))
            }
            Err(e) => {
                tracing::error!("Prediction failed: {e}");
                PredictionOutcome::Error(e.to_string())
            }
        };
        response.name.zeroize();
    }

    fn load_eda(&mut self) {
        self.eda_state.report = None;
        self.eda_state.error = None;

        match self.eda_service.run() {
            Ok(report) => {
                let features = report.feature_columns().len();
                let categories = report.categorical_columns().len();
                if self.eda_state.feature >= features {
                    self.eda_state.feature = 0;
                }
                if self.eda_state.category >= categories {
                    self.eda_state.category = 0;
                }
                self.eda_state.report = Some(report);
            }
            Err(e) => {
                tracing::error!("EDA failed: {e}");
                self.eda_state.error = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::artifacts::tests::write_artifacts;
    use crate::application::PredictionService;
    use crate::tui::ui::eda::EdaTab;
    use std::io::Write;
    use tempfile::TempDir;

    fn app_with(artifacts: Option<&TempDir>, csv: &std::path::Path) -> App {
        let prediction = match artifacts {
            Some(dir) => ArtifactPredictionService::from_artifact_dir(dir.path()),
            None => PredictionService::unavailable("model.json not found"),
        };
        let eda = EdaService::new(Arc::new(CsvDataset::new(csv)));
        App::with_dependencies(prediction, eda, TipDeck::seeded(3)).expect("app")
    }

    fn press(app: &mut App, key: KeyCode) {
        app.handle_key(key, KeyModifiers::NONE);
    }

    #[test]
    fn test_navigate_transitions() {
        assert_eq!(navigate(Page::Home, NavAction::Start), Page::Prediction);
        assert_eq!(navigate(Page::Tips, NavAction::Start), Page::Prediction);
        assert_eq!(navigate(Page::Home, NavAction::Next), Page::Eda);
        assert_eq!(navigate(Page::Tips, NavAction::Next), Page::Home);
        assert_eq!(navigate(Page::Home, NavAction::Prev), Page::Tips);
        for page in Page::ALL {
            assert_eq!(navigate(Page::Eda, NavAction::Select(page)), page);
        }
    }

    #[test]
    fn test_nav_keys() {
        let none = KeyModifiers::NONE;
        assert_eq!(
            nav_action(Page::Home, KeyCode::Enter, none),
            Some(NavAction::Start)
        );
        assert_eq!(
            nav_action(Page::Tips, KeyCode::F(2), none),
            Some(NavAction::Select(Page::Eda))
        );
        assert_eq!(
            nav_action(Page::Eda, KeyCode::Esc, none),
            Some(NavAction::Select(Page::Home))
        );
        assert_eq!(nav_action(Page::Home, KeyCode::Esc, none), None);
        assert_eq!(
            nav_action(Page::Tips, KeyCode::Char('3'), none),
            Some(NavAction::Select(Page::Prediction))
        );
        assert_eq!(
            nav_action(Page::Prediction, KeyCode::Right, KeyModifiers::CONTROL),
            Some(NavAction::Next)
        );
    }

    #[test]
    fn test_survey_keeps_typing_keys() {
        let none = KeyModifiers::NONE;
        assert_eq!(nav_action(Page::Prediction, KeyCode::Tab, none), None);
        assert_eq!(nav_action(Page::Prediction, KeyCode::Char('2'), none), None);
        assert_eq!(nav_action(Page::Prediction, KeyCode::Enter, none), None);
    }

    #[test]
    fn test_start_and_quit() {
        let mut app = app_with(None, std::path::Path::new("missing.csv"));
        assert_eq!(app.page(), Page::Home);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.page(), Page::Prediction);

        // 'q' is text on the survey
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.survey_state.name, "q");

        app.handle_key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_missing_name_warns() {
        let mut app = app_with(None, std::path::Path::new("missing.csv"));
        app.go_to(Page::Prediction);
        press(&mut app, KeyCode::Enter);
        match &app.survey_state.outcome {
            PredictionOutcome::Warning(msg) => assert!(msg.contains("your name")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_unavailable_model_warns_after_validation() {
        let mut app = app_with(None, std::path::Path::new("missing.csv"));
        app.go_to(Page::Prediction);
        app.survey_state.name = "Sam".into();
        app.survey_state.age = "30".into();
        press(&mut app, KeyCode::Enter);
        match &app.survey_state.outcome {
            PredictionOutcome::Warning(msg) => assert!(msg.contains("disabled")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_predict_with_artifacts() {
        let dir = TempDir::new().unwrap();
        write_artifacts(dir.path());
        let mut app = app_with(Some(&dir), std::path::Path::new("missing.csv"));

        app.go_to(Page::Prediction);
        for c in "Sam".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Down);
        for c in "30".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        match &app.survey_state.outcome {
            PredictionOutcome::Scored(a) => {
                assert!(a.score.display >= 1.0);
                assert!(!a.recommendations.is_empty());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        app.handle_key(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert!(app.survey_state.name.is_empty());
        assert!(matches!(app.survey_state.outcome, PredictionOutcome::Idle));
    }

    #[test]
    fn test_eda_loads_on_first_visit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Timestamp,DAILY_STRESS,GENDER,WORK_LIFE_BALANCE_SCORE").unwrap();
        writeln!(file, "7/7/15,2,Male,600").unwrap();
        writeln!(file, "7/7/15,3,Female,650").unwrap();
        writeln!(file, "7/8/15,1,Female,700").unwrap();
        drop(file);

        let mut app = app_with(None, &path);
        assert!(!app.eda_state.is_loaded());

        press(&mut app, KeyCode::F(2));
        assert_eq!(app.page(), Page::Eda);
        let report = app.eda_state.report.as_ref().expect("report");
        assert!(report.cleaning.timestamp_dropped);
        assert_eq!(report.feature_columns(), vec!["DAILY_STRESS"]);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.eda_state.tab, EdaTab::Cleaning);
    }

    #[test]
    fn test_eda_error_is_shown() {
        let mut app = app_with(None, std::path::Path::new("/nonexistent/data.csv"));
        press(&mut app, KeyCode::F(2));
        assert!(app.eda_state.report.is_none());
        assert!(app.eda_state.error.is_some());
    }

    #[test]
    fn test_seeded_tips() {
        let mut a = app_with(None, std::path::Path::new("missing.csv"));
        let mut b = app_with(None, std::path::Path::new("missing.csv"));
        for app in [&mut a, &mut b] {
            press(app, KeyCode::F(4));
            press(app, KeyCode::Enter);
        }
        assert!(a.tips_state.current.is_some());
        assert_eq!(a.tips_state.current, b.tips_state.current);
    }
}
