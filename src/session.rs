//! Per-session state shared by every page.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::data::DatasetCache;
use crate::engine::Cursor;
use crate::models::{ModuleKind, Profile};

/// Everything one learner's session owns: loaded datasets, the profile and
/// score, each module's position and the random source.
#[derive(Debug)]
pub struct SessionContext {
    pub cache: DatasetCache,
    pub profile: Profile,
    cursors: HashMap<ModuleKind, Cursor>,
    pub rng: StdRng,
}

impl SessionContext {
    pub fn new(cache: DatasetCache, profile: Profile, rng: StdRng) -> Self {
        Self {
            cache,
            profile,
            cursors: HashMap::new(),
            rng,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut cache = DatasetCache::new(&config.data_dir, config.strict_schema);
        for (key, file) in &config.datasets {
            match ModuleKind::ALL.iter().find(|m| m.key() == key) {
                Some(module) => cache.set_file(*module, file),
                None => log::warn!("ignoring dataset override for unknown module '{}'", key),
            }
        }
        Self::new(cache, config.profile.clone(), StdRng::from_entropy())
    }

    pub fn cursor(&self, module: ModuleKind) -> Option<Cursor> {
        self.cursors.get(&module).copied()
    }

    pub fn set_cursor(&mut self, module: ModuleKind, cursor: Cursor) {
        self.cursors.insert(module, cursor);
    }

    /// The module's cursor for a view of `row_count` rows, created on first use.
    ///
    /// A stored cursor that no longer fits the view is re-picked for random
    /// modules and clamped for sequential ones. Returns `None` for an empty view.
    pub fn ensure_cursor(&mut self, module: ModuleKind, row_count: usize) -> Option<Cursor> {
        if row_count == 0 {
            return None;
        }

        let cursor = match self.cursors.get(&module).copied() {
            Some(cursor) if cursor.is_within(row_count) => cursor,
            Some(mut cursor) if !module.random_start() => {
                cursor.clamp_to(row_count);
                cursor
            }
            _ if module.random_start() => Cursor::random(row_count, &mut self.rng)?,
            _ => Cursor::first(),
        };

        self.cursors.insert(module, cursor);
        Some(cursor)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn empty_session() -> SessionContext {
        SessionContext::new(
            DatasetCache::new(".", false),
            Profile::default(),
            StdRng::seed_from_u64(1),
        )
    }

    #[test]
    fn test_cursor_created_once() {
        let mut ctx = empty_session();
        let first = ctx.ensure_cursor(ModuleKind::Trivia, 50).unwrap();
        for _ in 0..10 {
            assert_eq!(ctx.ensure_cursor(ModuleKind::Trivia, 50), Some(first));
        }
    }

    #[test]
    fn test_sequential_module_starts_at_first_row() {
        let mut ctx = empty_session();
        let cursor = ctx.ensure_cursor(ModuleKind::SdgExplorer, 17).unwrap();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_out_of_range_cursor_is_repaired() {
        let mut ctx = empty_session();
        let mut cursor = Cursor::first();
        for _ in 0..9 {
            cursor.next(10);
        }
        ctx.set_cursor(ModuleKind::SdgExplorer, cursor);
        ctx.set_cursor(ModuleKind::IgniteSpark, cursor);

        assert_eq!(ctx.ensure_cursor(ModuleKind::SdgExplorer, 4).unwrap().index(), 3);
        assert!(ctx.ensure_cursor(ModuleKind::IgniteSpark, 4).unwrap().index() < 4);
    }

    #[test]
    fn test_empty_view_has_no_cursor() {
        let mut ctx = empty_session();
        assert!(ctx.ensure_cursor(ModuleKind::IdiomQuest, 0).is_none());
        assert!(ctx.cursor(ModuleKind::IdiomQuest).is_none());
    }

    #[test]
    fn test_from_config_applies_overrides() {
        let mut config = Config::default();
        config.data_dir = "data".into();
        config
            .datasets
            .insert("idiom".to_string(), "idioms.csv".into());
        let ctx = SessionContext::from_config(&config);
        assert_eq!(
            ctx.cache.path_for(ModuleKind::IdiomQuest),
            std::path::Path::new("data").join("idioms.csv")
        );
    }
}
