//! Named value scales referenced from class-group definitions.

use rustc_hash::FxHashMap;

use crate::config::ClassDef;

/// The active theme: a mapping from scale name to the class definitions
/// that scale expands to.
///
/// Scales are resolved once, while the class map is built. A
/// [`ClassDef::ThemeRef`] in a class group splices the referenced scale in
/// place, so several groups can share one list of legal values.
#[derive(Clone, Default)]
pub struct Theme {
    scales: FxHashMap<String, Vec<ClassDef>>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the scale stored under `key`.
    pub fn set(&mut self, key: impl Into<String>, defs: Vec<ClassDef>) {
        self.scales.insert(key.into(), defs);
    }

    /// Appends definitions to the scale stored under `key`, creating it if
    /// absent.
    pub fn extend(&mut self, key: impl Into<String>, defs: Vec<ClassDef>) {
        self.scales.entry(key.into()).or_default().extend(defs);
    }

    /// Resolves a scale reference. Unknown keys resolve to the empty scale;
    /// [`crate::config::Config::validate`] reports them to authors who want
    /// the stricter check.
    pub fn resolve(&self, key: &str) -> &[ClassDef] {
        self.scales.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a scale named `key` exists.
    pub fn contains(&self, key: &str) -> bool {
        self.scales.contains_key(key)
    }
}
