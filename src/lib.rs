//! # twmerge
//!
//! Deterministic deduplication of utility-CSS class lists. Given a
//! whitespace-delimited input, [`merge`] emits an output in which, for every
//! pair of classes that would target the same visual property under the
//! same variant context, only the last-declared one survives:
//!
//! ```
//! assert_eq!(twmerge::merge("px-2 px-4"), "px-4");
//! assert_eq!(twmerge::merge("pt-2 pt-4 pb-3"), "pt-4 pb-3");
//! assert_eq!(twmerge::merge("inset-x-1 inset-1"), "inset-1");
//! assert_eq!(twmerge::merge("hover:px-2 hover:px-4"), "hover:px-4");
//! ```
//!
//! ## How it works
//!
//! Each class is parsed into variants, an important marker, a base class
//! and an optional `/postfix` ([`parser`]); the base is classified into a
//! class group by a trie over hyphenated parts with validator fall-backs
//! ([`class_map`], [`classifier`], [`validators`]); and a conflict engine
//! displaces earlier classes whose group the current class conflicts with,
//! under a canonicalized variant context ([`sorter`]). Results are cached
//! in a bounded LRU ([`lru`]).
//!
//! Classes no group recognizes pass through untouched, so mixing utility
//! classes with custom ones is safe:
//!
//! ```
//! assert_eq!(twmerge::merge("card px-2 px-4"), "card px-4");
//! ```
//!
//! ## Custom configurations
//!
//! [`extend`] layers additions over the default configuration, [`create`]
//! builds a [`Merger`] from scratch:
//!
//! ```
//! use twmerge::{extend, ClassDef, ExtendOptions, PartialConfig};
//!
//! let merger = extend(ExtendOptions {
//!     extend: PartialConfig {
//!         class_groups: vec![(
//!             "shadow".into(),
//!             vec![ClassDef::branch("shadow", vec![ClassDef::lit("glow")])],
//!         )],
//!         ..PartialConfig::default()
//!     },
//!     ..ExtendOptions::default()
//! })
//! .unwrap();
//!
//! assert_eq!(merger.merge("shadow-lg shadow-glow"), "shadow-glow");
//! ```

pub mod class_list;
pub mod class_map;
pub mod classifier;
pub mod config;
mod conflict;
pub mod default_config;
pub mod lru;
pub mod merger;
pub mod parser;
pub mod sorter;
pub mod theme;
pub mod validators;

use once_cell::sync::Lazy;

pub use class_list::ClassList;
pub use config::{
    merge_configs, ClassDef, Config, ConfigError, ExtendOptions, ParseHook, PartialConfig,
};
pub use default_config::default_config;
pub use merger::{create, ConfigTransform, Merger};
pub use parser::{ClassParser, ParsedClass, IMPORTANT_MODIFIER};
pub use theme::Theme;
pub use validators::Validator;

/// The process-wide merger over the default configuration.
static DEFAULT_MERGER: Lazy<Merger> =
    Lazy::new(|| Merger::new(default_config()).expect("default configuration is valid"));

/// Merges `input` against the default configuration.
///
/// Accepts a single string or any nesting of [`ClassList`] convertibles;
/// `None`, booleans and empty strings contribute nothing.
///
/// ```
/// let tone: Option<&str> = None;
/// assert_eq!(
///     twmerge::merge(vec![
///         twmerge::ClassList::from("px-2 font-bold"),
///         twmerge::ClassList::from(tone),
///         twmerge::ClassList::from("px-4"),
///     ]),
///     "font-bold px-4"
/// );
/// ```
pub fn merge(input: impl Into<ClassList>) -> String {
    DEFAULT_MERGER.merge(input)
}

/// Merges `input` against a caller-supplied merger.
pub fn merge_with(input: impl Into<ClassList>, merger: &Merger) -> String {
    merger.merge(input)
}

/// Builds a merger from the default configuration plus the given options.
pub fn extend(options: ExtendOptions) -> Result<Merger, ConfigError> {
    Merger::new(merge_configs(default_config(), &options))
}

/// Reads a cached result from the default merger's cache.
pub fn cache_get(key: &str) -> Option<String> {
    DEFAULT_MERGER.cache_get(key)
}

/// Stores a result in the default merger's cache.
pub fn cache_put(key: impl Into<String>, value: impl Into<String>) {
    DEFAULT_MERGER.cache_put(key, value)
}

/// Drops every entry from the default merger's cache.
pub fn cache_clear() {
    DEFAULT_MERGER.cache_clear()
}

/// Number of entries in the default merger's cache.
pub fn cache_size() -> usize {
    DEFAULT_MERGER.cache_size()
}

/// Changes the bound of the default merger's cache.
pub fn cache_resize(capacity: usize) {
    DEFAULT_MERGER.cache_resize(capacity)
}
