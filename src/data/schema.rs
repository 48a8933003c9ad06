//! Localized column resolution.
//!
//! Dataset columns follow a `{Field}_{Suffix}` naming convention
//! (`Question_EN`, `Meaning_YO`). Each module declares the semantic fields it
//! reads and what to use when no column matches; the declaration is resolved
//! once per dataset, for every language, when the dataset is loaded.

use std::collections::HashMap;

use crate::models::{Language, ModuleKind};

use super::SchemaError;

/// What to read when no column carries both the field and language tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Column at this position (position 0 is the identifier column).
    Position(usize),
    /// Column with exactly this name.
    Named(&'static str),
    /// No column; the page substitutes its own default text.
    Nothing,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: &'static str,
    pub fallback: Fallback,
    pub required: bool,
}

impl FieldSpec {
    const fn required(field: &'static str, fallback: Fallback) -> Self {
        Self {
            field,
            fallback,
            required: true,
        }
    }

    const fn optional(field: &'static str, fallback: Fallback) -> Self {
        Self {
            field,
            fallback,
            required: false,
        }
    }
}

/// The columns a module reads from its dataset.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
    /// Non-localized columns that must exist by exact name.
    pub plain: &'static [&'static str],
}

const IGNITE: Schema = Schema {
    fields: &[
        FieldSpec::required("Question", Fallback::Position(1)),
        FieldSpec::required("Answer", Fallback::Position(2)),
    ],
    plain: &["Subject"],
};

const SDG: Schema = Schema {
    fields: &[
        FieldSpec::required("Overview", Fallback::Named("Overview_EN")),
        FieldSpec::optional("Challenge", Fallback::Nothing),
    ],
    plain: &["Goal"],
};

const IDIOM: Schema = Schema {
    fields: &[
        FieldSpec::required("Idiom", Fallback::Position(1)),
        FieldSpec::required("Meaning", Fallback::Position(2)),
    ],
    plain: &[],
};

const TRIVIA: Schema = Schema {
    fields: &[
        FieldSpec::required("Question", Fallback::Position(2)),
        FieldSpec::required("Answer", Fallback::Position(6)),
    ],
    plain: &[],
};

const TUTORIALS: Schema = Schema {
    fields: &[
        FieldSpec::required("Title", Fallback::Named("Title_EN")),
        FieldSpec::required("Link", Fallback::Named("Link_EN")),
    ],
    plain: &["Subject"],
};

const MINDFULNESS: Schema = Schema {
    fields: &[
        FieldSpec::required("Activity", Fallback::Position(1)),
        FieldSpec::required("Reflection", Fallback::Position(2)),
    ],
    plain: &[],
};

impl Schema {
    pub fn for_module(module: ModuleKind) -> &'static Schema {
        match module {
            ModuleKind::IgniteSpark => &IGNITE,
            ModuleKind::SdgExplorer => &SDG,
            ModuleKind::IdiomQuest => &IDIOM,
            ModuleKind::Trivia => &TRIVIA,
            ModuleKind::Tutorials => &TUTORIALS,
            ModuleKind::Mindfulness => &MINDFULNESS,
        }
    }

    /// Resolve every field for every language against `headers`.
    ///
    /// In strict mode any resolution that had to use the fallback is an
    /// error. Otherwise fallbacks are logged and accepted, and only a
    /// required field left with no column at all is rejected.
    pub fn resolve(&self, headers: &[String], strict: bool) -> Result<ResolvedSchema, SchemaError> {
        for name in self.plain {
            if !headers.iter().any(|h| h == name) {
                return Err(SchemaError::MissingColumn {
                    column: name.to_string(),
                });
            }
        }

        let mut columns = HashMap::new();
        for spec in self.fields {
            for language in Language::ALL {
                let resolved = resolve_column(headers, spec.field, language.suffix(), spec.fallback);
                match &resolved {
                    Some(column) if column.matched => {}
                    None if !spec.required => {
                        log::debug!("no {}_{} column", spec.field, language.suffix())
                    }
                    _ if strict => {
                        return Err(SchemaError::Unmatched {
                            field: spec.field.to_string(),
                            suffix: language.suffix().to_string(),
                        });
                    }
                    Some(column) => log::warn!(
                        "no {}_{} column, falling back to '{}'",
                        spec.field,
                        language.suffix(),
                        column.name
                    ),
                    None => {
                        return Err(SchemaError::Unresolved {
                            field: spec.field.to_string(),
                            suffix: language.suffix().to_string(),
                        });
                    }
                }
                columns.insert((spec.field, language), resolved);
            }
        }

        Ok(ResolvedSchema { columns })
    }
}

/// A concrete column chosen for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMatch {
    pub index: usize,
    pub name: String,
    /// False when the column came from the fallback rather than the naming convention.
    pub matched: bool,
}

/// Find the first column whose name contains both `field` and `suffix`,
/// otherwise apply `fallback`. Matching is case-sensitive substring search.
pub fn resolve_column(
    headers: &[String],
    field: &str,
    suffix: &str,
    fallback: Fallback,
) -> Option<ColumnMatch> {
    if let Some((index, name)) = headers
        .iter()
        .enumerate()
        .find(|(_, h)| h.contains(field) && h.contains(suffix))
    {
        return Some(ColumnMatch {
            index,
            name: name.clone(),
            matched: true,
        });
    }

    let index = match fallback {
        Fallback::Position(position) => (position < headers.len()).then_some(position),
        Fallback::Named(name) => headers.iter().position(|h| h == name),
        Fallback::Nothing => None,
    }?;

    Some(ColumnMatch {
        index,
        name: headers[index].clone(),
        matched: false,
    })
}

/// Field and language to column lookups for one loaded dataset.
#[derive(Debug, Clone, Default)]
pub struct ResolvedSchema {
    columns: HashMap<(&'static str, Language), Option<ColumnMatch>>,
}

impl ResolvedSchema {
    pub fn column(&self, field: &'static str, language: Language) -> Option<&ColumnMatch> {
        self.columns
            .get(&(field, language))
            .and_then(|column| column.as_ref())
    }

    pub fn index(&self, field: &'static str, language: Language) -> Option<usize> {
        self.column(field, language).map(|c| c.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn localized() -> Vec<String> {
        headers(&[
            "ID",
            "Subject",
            "Question_EN",
            "Question_YO",
            "Question_HA",
            "Question_IG",
            "Answer_EN",
            "Answer_YO",
            "Answer_HA",
            "Answer_IG",
        ])
    }

    #[test]
    fn test_resolves_suffix_for_every_language() {
        let headers = localized();
        for language in Language::ALL {
            let column =
                resolve_column(&headers, "Answer", language.suffix(), Fallback::Position(2))
                    .unwrap();
            assert!(column.matched);
            assert!(column.name.contains(language.suffix()));
            assert!(column.name.contains("Answer"));
        }
    }

    #[test]
    fn test_first_match_in_column_order_wins() {
        let headers = headers(&["ID", "Question_EN_long", "Question_EN"]);
        let column = resolve_column(&headers, "Question", "EN", Fallback::Position(1)).unwrap();
        assert_eq!(column.index, 1);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let headers = headers(&["ID", "question_en", "answer_en"]);
        let column = resolve_column(&headers, "Question", "EN", Fallback::Position(1)).unwrap();
        assert!(!column.matched);
        assert_eq!(column.name, "question_en");
    }

    #[test]
    fn test_positional_fallback_skips_identifier() {
        let headers = headers(&["ID", "Idiom", "Meaning"]);
        let idiom = resolve_column(&headers, "Idiom", "YO", Fallback::Position(1)).unwrap();
        let meaning = resolve_column(&headers, "Meaning", "YO", Fallback::Position(2)).unwrap();
        assert_eq!((idiom.index, idiom.matched), (1, false));
        assert_eq!((meaning.index, meaning.matched), (2, false));
    }

    #[test]
    fn test_fallbacks_that_find_nothing() {
        let headers = headers(&["ID", "Title_EN"]);
        assert!(resolve_column(&headers, "Link", "EN", Fallback::Named("Link_EN")).is_none());
        assert!(resolve_column(&headers, "Answer", "EN", Fallback::Position(6)).is_none());
        assert!(resolve_column(&headers, "Challenge", "EN", Fallback::Nothing).is_none());
    }

    #[test]
    fn test_lenient_resolve_accepts_fallbacks() {
        let headers = headers(&["ID", "Idiom", "Meaning"]);
        let schema = Schema::for_module(ModuleKind::IdiomQuest);
        let resolved = schema.resolve(&headers, false).unwrap();
        assert_eq!(resolved.index("Idiom", Language::Hausa), Some(1));
        assert_eq!(resolved.index("Meaning", Language::Igbo), Some(2));
    }

    #[test]
    fn test_strict_resolve_rejects_fallbacks() {
        let headers = headers(&["ID", "Idiom", "Meaning"]);
        let schema = Schema::for_module(ModuleKind::IdiomQuest);
        let err = schema.resolve(&headers, true).unwrap_err();
        assert!(matches!(err, SchemaError::Unmatched { .. }));
    }

    #[test]
    fn test_strict_resolve_accepts_complete_dataset() {
        let schema = Schema::for_module(ModuleKind::Trivia);
        let resolved = schema.resolve(&localized(), true).unwrap();
        assert_eq!(resolved.index("Question", Language::Yoruba), Some(3));
        assert_eq!(resolved.index("Answer", Language::Igbo), Some(9));
    }

    #[test]
    fn test_missing_plain_column() {
        let headers = headers(&["ID", "Question_EN", "Answer_EN"]);
        let schema = Schema::for_module(ModuleKind::IgniteSpark);
        let err = schema.resolve(&headers, false).unwrap_err();
        assert!(matches!(err, SchemaError::MissingColumn { ref column } if column == "Subject"));
    }

    #[test]
    fn test_optional_field_may_be_absent() {
        let headers = headers(&["Goal_Number", "Goal", "Overview_EN"]);
        let schema = Schema::for_module(ModuleKind::SdgExplorer);
        let resolved = schema.resolve(&headers, false).unwrap();
        assert_eq!(resolved.index("Overview", Language::Yoruba), Some(2));
        assert!(resolved.column("Challenge", Language::English).is_none());
    }

    #[test]
    fn test_required_field_without_column_is_rejected() {
        let headers = headers(&["ID", "Category", "Question_EN"]);
        let schema = Schema::for_module(ModuleKind::Trivia);
        let err = schema.resolve(&headers, false).unwrap_err();
        assert!(matches!(err, SchemaError::Unresolved { ref field, .. } if field == "Answer"));
    }
}
