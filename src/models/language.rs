use std::fmt;

use serde::{Deserialize, Serialize};

/// Display language of the learner.
///
/// Each language maps to the two-letter suffix used by localized dataset
/// columns (`Question_EN`, `Answer_YO`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    English,
    Yoruba,
    Hausa,
    Igbo,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Yoruba,
        Language::Hausa,
        Language::Igbo,
    ];

    /// Look a language up by its display name. Unknown names fall back to English.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "English" => Language::English,
            "Yoruba" => Language::Yoruba,
            "Hausa" => Language::Hausa,
            "Igbo" => Language::Igbo,
            _ => Language::English,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Yoruba => "Yoruba",
            Language::Hausa => "Hausa",
            Language::Igbo => "Igbo",
        }
    }

    /// Column suffix token for this language.
    pub fn suffix(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Yoruba => "YO",
            Language::Hausa => "HA",
            Language::Igbo => "IG",
        }
    }

    /// The next language in menu order, wrapping around.
    pub fn cycle(self) -> Self {
        let position = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Language::from_name(&value)
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.name().to_string()
    }
}
