use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use crate::models::{Language, ModuleKind};

use super::{Dataset, LoadError, ResolvedSchema, Schema};

/// A module dataset together with its resolved columns.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub data: Dataset,
    pub schema: ResolvedSchema,
}

impl LoadedDataset {
    pub fn new(module: ModuleKind, data: Dataset, strict: bool) -> Result<Self, super::SchemaError> {
        let schema = Schema::for_module(module).resolve(data.headers(), strict)?;
        Ok(Self { data, schema })
    }

    /// Localized cell text, or `None` when the field has no column.
    pub fn text(&self, row: usize, field: &'static str, language: Language) -> Option<&str> {
        self.schema
            .index(field, language)
            .map(|column| self.data.cell(row, column))
    }

    /// Cell of a plain column looked up by exact name.
    pub fn plain(&self, row: usize, column: &str) -> Option<&str> {
        self.data
            .column_index(column)
            .map(|index| self.data.cell(row, index))
    }
}

/// Per-session memo of module datasets, keyed by module.
///
/// A dataset is read from disk the first time it is requested and reused
/// afterwards. Failed loads are not cached, so reopening the page retries.
#[derive(Debug)]
pub struct DatasetCache {
    data_dir: PathBuf,
    files: HashMap<ModuleKind, PathBuf>,
    strict: bool,
    loaded: HashMap<ModuleKind, LoadedDataset>,
}

impl DatasetCache {
    pub fn new<P: AsRef<Path>>(data_dir: P, strict: bool) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            files: HashMap::new(),
            strict,
            loaded: HashMap::new(),
        }
    }

    /// Read `module` from `file` instead of its default file name.
    pub fn set_file<P: Into<PathBuf>>(&mut self, module: ModuleKind, file: P) {
        self.files.insert(module, file.into());
    }

    pub fn path_for(&self, module: ModuleKind) -> PathBuf {
        match self.files.get(&module) {
            Some(file) => self.data_dir.join(file),
            None => self.data_dir.join(module.default_file()),
        }
    }

    pub fn is_loaded(&self, module: ModuleKind) -> bool {
        self.loaded.contains_key(&module)
    }

    /// An already loaded dataset; never touches the disk.
    pub fn get(&self, module: ModuleKind) -> Option<&LoadedDataset> {
        self.loaded.get(&module)
    }

    pub fn get_or_load(&mut self, module: ModuleKind) -> Result<&LoadedDataset, LoadError> {
        let path = self.path_for(module);
        let strict = self.strict;

        match self.loaded.entry(module) {
            Entry::Occupied(entry) => Ok(&*entry.into_mut()),
            Entry::Vacant(entry) => {
                let loaded = load_module(module, &path, strict).inspect_err(|e| {
                    log::error!("failed to load {} dataset: {}", module.key(), e)
                })?;
                Ok(&*entry.insert(loaded))
            }
        }
    }

    /// Seed the cache with an already parsed dataset.
    pub fn insert(&mut self, module: ModuleKind, data: Dataset) -> Result<(), LoadError> {
        let path = self.path_for(module);
        let loaded = LoadedDataset::new(module, data, self.strict)
            .map_err(|source| LoadError::Schema { path, source })?;
        self.loaded.insert(module, loaded);
        Ok(())
    }
}

fn load_module(module: ModuleKind, path: &Path, strict: bool) -> Result<LoadedDataset, LoadError> {
    let data = Dataset::from_path(path)?;
    log::info!(
        "loaded {} dataset from {} ({} rows)",
        module.key(),
        path.display(),
        data.len()
    );
    LoadedDataset::new(module, data, strict).map_err(|source| LoadError::Schema {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const IDIOMS: &str = "ID,Idiom_EN,Meaning_EN,Idiom_YO,Meaning_YO\n\
                          1,Break a leg,Good luck,Ẹsẹ̀ kan,Orire\n\
                          2,Piece of cake,Very easy,Àkàrà,Rọrùn\n";

    #[test]
    fn test_get_or_load_reads_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ModuleKind::IdiomQuest.default_file());
        fs::write(&path, IDIOMS).unwrap();

        let mut cache = DatasetCache::new(dir.path(), false);
        assert!(!cache.is_loaded(ModuleKind::IdiomQuest));
        let loaded = cache.get_or_load(ModuleKind::IdiomQuest).unwrap();
        assert_eq!(loaded.data.len(), 2);
        assert_eq!(loaded.text(1, "Meaning", Language::Yoruba), Some("Rọrùn"));

        // The cached copy survives the file disappearing.
        fs::remove_file(&path).unwrap();
        assert!(cache.is_loaded(ModuleKind::IdiomQuest));
        assert_eq!(cache.get_or_load(ModuleKind::IdiomQuest).unwrap().data.len(), 2);
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = DatasetCache::new(dir.path(), false);
        let err = cache.get_or_load(ModuleKind::Trivia).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains(ModuleKind::Trivia.default_file()));
        assert!(!cache.is_loaded(ModuleKind::Trivia));
    }

    #[test]
    fn test_file_override() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("idioms.csv"), IDIOMS).unwrap();
        let mut cache = DatasetCache::new(dir.path(), false);
        cache.set_file(ModuleKind::IdiomQuest, "idioms.csv");
        assert_eq!(cache.path_for(ModuleKind::IdiomQuest), dir.path().join("idioms.csv"));
        assert!(cache.get_or_load(ModuleKind::IdiomQuest).is_ok());
    }

    #[test]
    fn test_strict_cache_rejects_partial_localization() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(ModuleKind::IdiomQuest.default_file()), IDIOMS).unwrap();

        let mut strict = DatasetCache::new(dir.path(), true);
        let err = strict.get_or_load(ModuleKind::IdiomQuest).unwrap_err();
        assert!(matches!(err, LoadError::Schema { .. }));

        let mut lenient = DatasetCache::new(dir.path(), false);
        let loaded = lenient.get_or_load(ModuleKind::IdiomQuest).unwrap();
        // Hausa has no column of its own and falls back to position 1.
        assert_eq!(loaded.text(0, "Idiom", Language::Hausa), Some("Break a leg"));
    }

    #[test]
    fn test_insert_resolves_schema() {
        let mut cache = DatasetCache::new(".", false);
        let data = Dataset::new(
            vec!["ID".into(), "Idiom".into()],
            vec![vec!["1".into(), "Break a leg".into()]],
        );
        let err = cache.insert(ModuleKind::IdiomQuest, data).unwrap_err();
        assert!(matches!(err, LoadError::Schema { .. }));
    }
}
