//! # steamspark
//!
//! A terminal learning hub: quizzes, trivia, idioms, the Sustainable
//! Development Goals, tutorials and a mindfulness journey, each driven by a
//! CSV dataset with columns localized into English, Yoruba, Hausa and Igbo.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use steamspark::{Config, Spark, SparkError};
//!
//! fn main() -> Result<(), SparkError> {
//!     let config = Config::load("steamspark.json")?;
//!     Spark::new(&config).run()?;
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
pub mod data;
pub mod engine;
pub mod logging;
mod models;
pub mod pages;
pub mod session;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, PageAction, Screen};
pub use config::{Config, ConfigError};
pub use data::{Dataset, DatasetCache, LoadError};
pub use models::{Language, ModuleKind, Profile, QuizItem};
pub use session::SessionContext;

use pages::{ChoiceAction, ExplorerAction, HubAction, JourneyAction, TriviaAction, TutorialAction};

/// Error type for the application.
#[derive(Debug)]
pub enum SparkError {
    /// Error reading the configuration file.
    Config(ConfigError),
    /// Error loading a dataset outside of a page.
    Load(LoadError),
    /// IO error from the terminal or the log file.
    Io(io::Error),
}

impl std::fmt::Display for SparkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SparkError::Config(e) => write!(f, "Invalid configuration: {}", e),
            SparkError::Load(e) => write!(f, "Failed to load dataset: {}", e),
            SparkError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for SparkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SparkError::Config(e) => Some(e),
            SparkError::Load(e) => Some(e),
            SparkError::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SparkError {
    fn from(err: ConfigError) -> Self {
        SparkError::Config(err)
    }
}

impl From<LoadError> for SparkError {
    fn from(err: LoadError) -> Self {
        SparkError::Load(err)
    }
}

impl From<io::Error> for SparkError {
    fn from(err: io::Error) -> Self {
        SparkError::Io(err)
    }
}

/// A learning session that can be run in the terminal.
pub struct Spark {
    app: App,
}

impl Spark {
    /// Start a new session from the given settings.
    pub fn new(config: &Config) -> Self {
        Self::with_session(SessionContext::from_config(config))
    }

    pub fn with_session(ctx: SessionContext) -> Self {
        Self { app: App::new(ctx) }
    }

    /// Run the session in the terminal.
    ///
    /// This will take over the terminal, display the hub, and return when
    /// the user quits.
    pub fn run(mut self) -> Result<(), SparkError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        log::info!("session ended with {} points", self.app.ctx.profile.score());
        result
    }

    /// Load every module dataset up front and report its row count.
    ///
    /// Stops at the first dataset that is missing or does not fit its module.
    pub fn check(&mut self) -> Result<Vec<(ModuleKind, usize)>, SparkError> {
        let mut counts = Vec::with_capacity(ModuleKind::ALL.len());
        for module in ModuleKind::ALL {
            let loaded = self.app.ctx.cache.get_or_load(module)?;
            counts.push((module, loaded.data.len()));
        }
        Ok(counts)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::SparkTerminal, app: &mut App) -> Result<(), SparkError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Esc | KeyCode::Char('h') if !app.on_hub() => {
            app.apply(PageAction::BackToHub);
            return false;
        }
        _ => {}
    }

    let action = match &app.screen {
        Screen::Hub(_) => hub_action(key).map(PageAction::Hub),
        Screen::Quiz(_) => quiz_action(key).map(PageAction::Quiz),
        Screen::Trivia(page) => trivia_action(key, page.revealed).map(PageAction::Trivia),
        Screen::Explorer(_) => explorer_action(key).map(PageAction::Explorer),
        Screen::Tutorials(_) => tutorial_action(key).map(PageAction::Tutorials),
        Screen::Journey(_) => journey_action(key).map(PageAction::Journey),
        Screen::Unavailable { .. } => matches!(key, KeyCode::Enter).then_some(PageAction::BackToHub),
    };

    if let Some(action) = action {
        app.apply(action);
    }
    false
}

fn hub_action(key: KeyCode) -> Option<HubAction> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(HubAction::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(HubAction::SelectNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(HubAction::Open),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(HubAction::CycleLanguage),
        KeyCode::Char('i') | KeyCode::Char('I') => Some(HubAction::CycleInterest),
        _ => None,
    }
}

fn quiz_action(key: KeyCode) -> Option<ChoiceAction> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(ChoiceAction::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(ChoiceAction::SelectNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(ChoiceAction::Submit),
        KeyCode::Char('n') | KeyCode::Right => Some(ChoiceAction::Next),
        _ => None,
    }
}

fn trivia_action(key: KeyCode, revealed: bool) -> Option<TriviaAction> {
    match key {
        KeyCode::Char('r') => Some(TriviaAction::Reveal),
        KeyCode::Enter | KeyCode::Char(' ') if revealed => Some(TriviaAction::ClaimPoints),
        KeyCode::Enter | KeyCode::Char(' ') => Some(TriviaAction::Reveal),
        KeyCode::Char('n') | KeyCode::Right => Some(TriviaAction::Next),
        _ => None,
    }
}

fn explorer_action(key: KeyCode) -> Option<ExplorerAction> {
    match key {
        KeyCode::Char('p') | KeyCode::Left => Some(ExplorerAction::Previous),
        KeyCode::Char('n') | KeyCode::Right => Some(ExplorerAction::Next),
        KeyCode::Char('b') | KeyCode::Enter => Some(ExplorerAction::CollectBadge),
        KeyCode::Char('t') => Some(ExplorerAction::OpenTutorials),
        _ => None,
    }
}

fn tutorial_action(key: KeyCode) -> Option<TutorialAction> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(TutorialAction::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(TutorialAction::SelectNext),
        _ => None,
    }
}

fn journey_action(key: KeyCode) -> Option<JourneyAction> {
    match key {
        KeyCode::Char('p') | KeyCode::Left => Some(JourneyAction::PreviousDay),
        KeyCode::Char('n') | KeyCode::Right => Some(JourneyAction::NextDay),
        KeyCode::Char('c') | KeyCode::Enter => Some(JourneyAction::Complete),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::fixtures::{session, table};

    fn trivia() -> Dataset {
        table(
            &["ID", "Category", "Question_EN", "x", "x", "x", "Answer_EN"],
            &[&["1", "Space", "Largest planet?", "", "", "", "Jupiter"]],
        )
    }

    #[test]
    fn test_quit_from_anywhere() {
        let mut app = App::new(session(vec![(ModuleKind::Trivia, trivia())]));
        assert!(handle_input(&mut app, KeyCode::Char('q')));
        app.open(ModuleKind::Trivia);
        assert!(handle_input(&mut app, KeyCode::Char('Q')));
    }

    #[test]
    fn test_trivia_keys() {
        let mut app = App::new(session(vec![(ModuleKind::Trivia, trivia())]));
        app.open(ModuleKind::Trivia);
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.ctx.profile.score(), 0);
        match &app.screen {
            Screen::Trivia(page) => assert!(page.revealed),
            other => panic!("expected trivia, got {:?}", other),
        }
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.ctx.profile.score(), 10);

        assert!(!handle_input(&mut app, KeyCode::Esc));
        assert!(app.on_hub());
    }

    #[test]
    fn test_h_on_hub_does_nothing() {
        let mut app = App::new(session(Vec::new()));
        assert!(!handle_input(&mut app, KeyCode::Char('h')));
        assert!(app.on_hub());
    }
}
