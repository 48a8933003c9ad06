//! Row selection and multiple-choice generation shared by the pages.

mod cursor;
mod options;
mod subject;

pub use cursor::Cursor;
pub use options::{MAX_DISTRACTORS, build_options};
pub use subject::{
    FALLBACK_SUBJECT, SUBJECT_COLUMN, SubjectSelection, canonical_subject, rows_for_subject,
    select_subject,
};
