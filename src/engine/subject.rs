use crate::data::Dataset;

pub const SUBJECT_COLUMN: &str = "Subject";
pub const FALLBACK_SUBJECT: &str = "Science";

/// Rows of a dataset that belong to one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectSelection {
    /// The subject the rows actually belong to.
    pub subject: String,
    /// Row indices in dataset order.
    pub rows: Vec<usize>,
    /// True when the requested subject had no rows and the fallback was used.
    pub fell_back: bool,
}

/// Map hub interest names onto the labels used in the datasets.
pub fn canonical_subject(requested: &str) -> &str {
    match requested {
        "Tech" => "Technology",
        other => other,
    }
}

/// Rows whose subject column equals `subject` exactly.
pub fn rows_for_subject(dataset: &Dataset, subject: &str) -> Vec<usize> {
    let Some(column) = dataset.column_index(SUBJECT_COLUMN) else {
        return Vec::new();
    };
    dataset
        .all_rows()
        .into_iter()
        .filter(|&row| dataset.cell(row, column) == subject)
        .collect()
}

/// Filter by the requested subject, switching to `fallback` when nothing matches.
pub fn select_subject(dataset: &Dataset, requested: &str, fallback: Option<&str>) -> SubjectSelection {
    let subject = canonical_subject(requested);
    let rows = rows_for_subject(dataset, subject);

    match fallback {
        Some(fallback) if rows.is_empty() => {
            log::warn!("no rows for subject '{}', using '{}'", subject, fallback);
            SubjectSelection {
                subject: fallback.to_string(),
                rows: rows_for_subject(dataset, fallback),
                fell_back: true,
            }
        }
        _ => SubjectSelection {
            subject: subject.to_string(),
            rows,
            fell_back: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        let mut rows = Vec::new();
        for i in 0..10 {
            rows.push(vec![i.to_string(), "Science".to_string()]);
        }
        for i in 10..15 {
            rows.push(vec![i.to_string(), "Technology".to_string()]);
        }
        rows.push(vec!["15".to_string(), "science".to_string()]);
        Dataset::new(vec!["ID".into(), "Subject".into()], rows)
    }

    #[test]
    fn test_tech_is_rewritten_to_technology() {
        let selection = select_subject(&dataset(), "Tech", Some(FALLBACK_SUBJECT));
        assert_eq!(selection.subject, "Technology");
        assert_eq!(selection.rows, (10..15).collect::<Vec<_>>());
        assert!(!selection.fell_back);
    }

    #[test]
    fn test_unknown_subject_falls_back_to_science() {
        let data = dataset();
        let selection = select_subject(&data, "History", Some(FALLBACK_SUBJECT));
        assert_eq!(selection.subject, "Science");
        assert_eq!(selection.rows.len(), 10);
        assert_eq!(selection.rows, rows_for_subject(&data, FALLBACK_SUBJECT));
        assert!(selection.fell_back);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let selection = select_subject(&dataset(), "science", None);
        assert_eq!(selection.rows, vec![15]);
    }

    #[test]
    fn test_no_fallback_keeps_empty_selection() {
        let selection = select_subject(&dataset(), "Arts", None);
        assert_eq!(selection.subject, "Arts");
        assert!(selection.rows.is_empty());
        assert!(!selection.fell_back);
    }

    #[test]
    fn test_missing_subject_column_matches_nothing() {
        let data = Dataset::new(vec!["ID".into()], vec![vec!["1".into()]]);
        assert!(rows_for_subject(&data, "Science").is_empty());
    }
}
