mod dataset;
mod loader;
pub mod schema;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub use dataset::Dataset;
pub use loader::{DatasetCache, LoadedDataset};
pub use schema::{ColumnMatch, Fallback, ResolvedSchema, Schema};

/// A dataset's columns do not satisfy its module's schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A plain column is absent.
    MissingColumn { column: String },
    /// Strict mode: no `{field}_{suffix}` column exists.
    Unmatched { field: String, suffix: String },
    /// Neither the naming convention nor the fallback located a column.
    Unresolved { field: String, suffix: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::MissingColumn { column } => write!(f, "missing column '{}'", column),
            SchemaError::Unmatched { field, suffix } => {
                write!(f, "no column named like '{}_{}'", field, suffix)
            }
            SchemaError::Unresolved { field, suffix } => {
                write!(f, "no column for field '{}' ({})", field, suffix)
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// Error loading a module dataset.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened.
    Io { path: PathBuf, source: io::Error },
    /// The file is not valid CSV.
    Csv {
        path: Option<PathBuf>,
        source: csv::Error,
    },
    /// The columns do not fit the module.
    Schema { path: PathBuf, source: SchemaError },
}

impl LoadError {
    pub(crate) fn with_path(self, path: &Path) -> Self {
        match self {
            LoadError::Csv { path: None, source } => LoadError::Csv {
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "Could not open {}: {}", path.display(), source)
            }
            LoadError::Csv {
                path: Some(path),
                source,
            } => write!(f, "Could not parse {}: {}", path.display(), source),
            LoadError::Csv { path: None, source } => write!(f, "Could not parse CSV: {}", source),
            LoadError::Schema { path, source } => {
                write!(f, "Unexpected columns in {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Csv { source, .. } => Some(source),
            LoadError::Schema { source, .. } => Some(source),
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Csv {
            path: None,
            source: err,
        }
    }
}
