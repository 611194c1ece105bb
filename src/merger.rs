//! The merge facade.
//!
//! A [`Merger`] binds everything together: the parser, sorter and class map
//! derived from one configuration, plus the result cache. Construction
//! validates the configuration and builds the class-map trie once; merging
//! is then a pure function over that immutable state, so a `Merger` can be
//! shared freely across threads. The cache is the only mutable piece and
//! sits behind a mutex.

use std::sync::{Mutex, PoisonError};

use crate::class_list::ClassList;
use crate::class_map::ClassMap;
use crate::config::{Config, ConfigError};
use crate::conflict::{merge_class_list, ConflictTables, MergeContext};
use crate::lru::LruCache;
use crate::parser::ClassParser;
use crate::sorter::ModifierSorter;

/// A transformation applied to a seed configuration by [`create`].
pub type ConfigTransform = Box<dyn Fn(Config) -> Config + Send + Sync>;

/// A configured class merger with its own result cache.
#[derive(Debug)]
pub struct Merger {
    parser: ClassParser,
    sorter: ModifierSorter,
    class_map: ClassMap,
    tables: ConflictTables,
    cache: Mutex<LruCache>,
}

impl Merger {
    /// Validates `config` and builds a merger from it.
    pub fn new(config: Config) -> Result<Merger, ConfigError> {
        config.validate()?;
        Ok(Merger {
            parser: ClassParser::new(&config),
            sorter: ModifierSorter::new(&config.order_sensitive_modifiers),
            class_map: ClassMap::build(&config),
            tables: ConflictTables::new(&config),
            cache: Mutex::new(LruCache::new(config.cache_size)),
        })
    }

    /// Merges `input`, resolving conflicts so that for classes targeting
    /// the same concern under the same variant context only the
    /// last-declared one survives.
    pub fn merge(&self, input: impl Into<ClassList>) -> String {
        let joined = input.into().to_class_string();
        self.merge_joined(&joined)
    }

    fn merge_joined(&self, joined: &str) -> String {
        if let Some(hit) = self.cache_get(joined) {
            return hit;
        }
        let context = MergeContext {
            parser: &self.parser,
            sorter: &self.sorter,
            class_map: &self.class_map,
            tables: &self.tables,
        };
        let merged = merge_class_list(joined, &context);
        self.cache_put(joined, merged.clone());
        merged
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, LruCache> {
        // Cache contents are derivable from their keys; a poisoned lock is
        // safe to keep using.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reads a cached result, promoting the key on a hit.
    pub fn cache_get(&self, key: &str) -> Option<String> {
        self.lock_cache().get(key).map(String::from)
    }

    /// Stores a result under `key`. No-op while the cache is disabled.
    pub fn cache_put(&self, key: impl Into<String>, value: impl Into<String>) {
        self.lock_cache().put(key, value);
    }

    /// Drops every cached result.
    pub fn cache_clear(&self) {
        self.lock_cache().clear();
    }

    /// Number of cached results.
    pub fn cache_size(&self) -> usize {
        self.lock_cache().len()
    }

    /// Changes the cache bound, dropping least-recent entries on shrink.
    pub fn cache_resize(&self, capacity: usize) {
        self.lock_cache().resize(capacity);
    }
}

/// Builds a merger from a seed configuration factory and a chain of
/// transformations, applied in order.
pub fn create<F>(
    seed: F,
    transforms: impl IntoIterator<Item = ConfigTransform>,
) -> Result<Merger, ConfigError>
where
    F: FnOnce() -> Config,
{
    let mut config = seed();
    for transform in transforms {
        config = transform(config);
    }
    Merger::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClassDef, Config};
    use crate::validators::Validator;

    fn spacing_config() -> Config {
        let mut config = Config::new()
            .with_group("p", vec![ClassDef::branch("p", vec![Validator::Number.into()])])
            .with_group("px", vec![ClassDef::branch("px", vec![Validator::Number.into()])])
            .with_conflicts("p", ["px"]);
        config.cache_size = 8;
        config
    }

    #[test]
    fn merge_resolves_same_group_conflicts() {
        let merger = Merger::new(spacing_config()).unwrap();
        assert_eq!(merger.merge("px-2 px-4"), "px-4");
    }

    #[test]
    fn merge_applies_declared_conflicts() {
        let merger = Merger::new(spacing_config()).unwrap();
        assert_eq!(merger.merge("px-2 p-4"), "p-4");
        assert_eq!(merger.merge("p-4 px-2"), "p-4 px-2");
    }

    #[test]
    fn results_are_cached_and_promoted() {
        let merger = Merger::new(spacing_config()).unwrap();
        assert_eq!(merger.cache_size(), 0);
        merger.merge("px-2 px-4");
        assert_eq!(merger.cache_size(), 1);
        assert_eq!(merger.cache_get("px-2 px-4").as_deref(), Some("px-4"));
    }

    #[test]
    fn cache_surface_round_trips() {
        let merger = Merger::new(spacing_config()).unwrap();
        merger.cache_put("k", "v");
        assert_eq!(merger.cache_get("k").as_deref(), Some("v"));
        merger.cache_resize(0);
        assert_eq!(merger.cache_size(), 0);
        merger.cache_put("k", "v");
        assert_eq!(merger.cache_get("k"), None);
        merger.cache_resize(4);
        merger.cache_put("k", "v");
        merger.cache_clear();
        assert_eq!(merger.cache_size(), 0);
    }

    #[test]
    fn disabled_cache_still_merges() {
        let mut config = spacing_config();
        config.cache_size = 0;
        let merger = Merger::new(config).unwrap();
        assert_eq!(merger.merge("px-2 px-4"), "px-4");
        assert_eq!(merger.cache_size(), 0);
    }

    #[test]
    fn create_applies_transforms_in_order() {
        let merger = create(
            spacing_config,
            [
                Box::new(|mut config: Config| {
                    config.cache_size = 2;
                    config
                }) as ConfigTransform,
                Box::new(|config: Config| {
                    config
                        .with_group("m", vec![ClassDef::branch("m", vec![Validator::Number.into()])])
                }) as ConfigTransform,
            ],
        )
        .unwrap();
        assert_eq!(merger.merge("m-1 m-2"), "m-2");
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = spacing_config().with_conflicts("p", ["ghost"]);
        assert!(Merger::new(config).is_err());
    }
}
