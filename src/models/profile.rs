use serde::{Deserialize, Serialize};

use super::Language;

/// Subjects offered on the hub, in cycling order.
pub const INTERESTS: [&str; 5] = ["Science", "Tech", "Engineering", "Arts", "Math"];

pub const DEFAULT_NAME: &str = "Innovator";
pub const DEFAULT_INTEREST: &str = "Science";

/// The learner profile shared by every page of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub language: Language,
    pub interest: String,
    #[serde(skip)]
    score: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            language: Language::default(),
            interest: DEFAULT_INTEREST.to_string(),
            score: 0,
        }
    }
}

impl Profile {
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add points to the score ledger and return the new total.
    ///
    /// The ledger never decreases; it saturates instead of overflowing.
    pub fn award(&mut self, points: u32) -> u32 {
        self.score = self.score.saturating_add(points);
        log::info!("{} earned {} points (total {})", self.name, points, self.score);
        self.score
    }

    pub fn cycle_language(&mut self) {
        self.language = self.language.cycle();
    }

    /// Move to the next hub interest. An interest outside the list restarts at the first.
    pub fn cycle_interest(&mut self) {
        let next = INTERESTS
            .iter()
            .position(|i| *i == self.interest)
            .map(|p| (p + 1) % INTERESTS.len())
            .unwrap_or(0);
        self.interest = INTERESTS[next].to_string();
    }
}
