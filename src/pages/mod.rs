//! Page state machines.
//!
//! Every page owns the state it renders and exposes `update`, which applies
//! one of the page's actions against the session and reports where to go
//! next. Drawing lives in [`crate::ui`] and only reads these types.

mod explorer;
mod hub;
mod journey;
mod quiz;
mod trivia;
mod tutorials;

pub use explorer::{ExplorerAction, ExplorerPage, SdgCard};
pub use hub::{HubAction, HubPage};
pub use journey::{JourneyAction, JourneyPage};
pub use quiz::{ChoiceAction, ChoicePage};
pub use trivia::{TriviaAction, TriviaCard, TriviaPage};
pub use tutorials::{Lesson, TutorialAction, TutorialPage};

use crate::models::ModuleKind;

/// Where the app should be after a page handled an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Stay,
    Hub,
    Open(ModuleKind),
}

/// Message shown under the page content after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Failure(String),
    Warning(String),
}

impl Feedback {
    pub fn text(&self) -> &str {
        match self {
            Feedback::Success(text) | Feedback::Failure(text) | Feedback::Warning(text) => text,
        }
    }
}
