mod language;
mod module;
mod profile;
mod question;

pub use language::Language;
pub use module::ModuleKind;
pub use profile::{DEFAULT_INTEREST, DEFAULT_NAME, INTERESTS, Profile};
pub use question::QuizItem;
