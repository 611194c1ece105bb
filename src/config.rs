//! Merge configuration: class groups, conflict tables and tuning knobs.
//!
//! A [`Config`] is the immutable description a [`crate::Merger`] is built
//! from. It names every class group, the definitions that classify a class
//! into a group, the groups each group displaces, and the modifiers whose
//! position is semantically meaningful.
//!
//! Configurations are plain data and cheap to clone; transformation chains
//! (see [`crate::create`]) pass them by value. [`merge_configs`] implements
//! the `extend`/`override` layering used by [`crate::extend`].

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::parser::ParsedClass;
use crate::theme::Theme;
use crate::validators::Validator;

/// User hook replacing the default class-name parse.
///
/// Receives the class name and the default parser, and may delegate to the
/// latter (including recursively).
pub type ParseHook = Arc<dyn Fn(&str, &dyn Fn(&str) -> ParsedClass) -> ParsedClass + Send + Sync>;

/// One entry in a class-group definition list.
///
/// The four shapes mirror what a group may contain: a literal (possibly
/// dotted) class path, a value validator, a reference to a theme scale, or
/// a nested branch keyed by the next path segment.
#[derive(Debug, Clone)]
pub enum ClassDef {
    /// A literal class path such as `"space-x-1"`, or `""` for the branch
    /// root itself.
    Literal(String),
    /// A validator applied to the remainder of the class name.
    Validator(Validator),
    /// Splices the named theme scale in place.
    ThemeRef(String),
    /// Nested definitions keyed by their next path segment. Order is
    /// preserved; it determines validator precedence.
    Branch(Vec<(String, Vec<ClassDef>)>),
}

impl ClassDef {
    /// Literal class path shorthand.
    pub fn lit(path: impl Into<String>) -> Self {
        ClassDef::Literal(path.into())
    }

    /// Validator shorthand.
    pub fn validator(v: Validator) -> Self {
        ClassDef::Validator(v)
    }

    /// Theme scale reference shorthand.
    pub fn theme(key: impl Into<String>) -> Self {
        ClassDef::ThemeRef(key.into())
    }

    /// Single-key branch shorthand.
    pub fn branch(key: impl Into<String>, defs: Vec<ClassDef>) -> Self {
        ClassDef::Branch(vec![(key.into(), defs)])
    }
}

impl From<&str> for ClassDef {
    fn from(path: &str) -> Self {
        ClassDef::lit(path)
    }
}

impl From<Validator> for ClassDef {
    fn from(v: Validator) -> Self {
        ClassDef::Validator(v)
    }
}

/// Full merge configuration.
///
/// `class_groups` is ordered: where two groups register validators on the
/// same trie node, the earlier group's validators are tried first.
#[derive(Clone, Default)]
pub struct Config {
    /// Bound of the input→output cache; `0` disables caching.
    pub cache_size: usize,
    /// When set, only classes starting with `prefix:` take part in
    /// conflict resolution; everything else passes through verbatim.
    pub prefix: Option<String>,
    /// Named value scales referenced by [`ClassDef::ThemeRef`].
    pub theme: Theme,
    /// Group id → definitions, in declaration order.
    pub class_groups: Vec<(String, Vec<ClassDef>)>,
    /// Group id → groups it displaces.
    pub conflicting_class_groups: FxHashMap<String, Vec<String>>,
    /// Group id → groups it additionally displaces when the class carries a
    /// postfix modifier.
    pub conflicting_class_group_modifiers: FxHashMap<String, Vec<String>>,
    /// Modifiers whose position within the modifier list is meaningful.
    pub order_sensitive_modifiers: Vec<String>,
    /// Replacement class-name parser, if any.
    pub experimental_parse_class_name: Option<ParseHook>,
}

impl Config {
    /// An empty configuration with caching disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a class group. Convenience for hand-built configurations.
    pub fn with_group(mut self, id: impl Into<String>, defs: Vec<ClassDef>) -> Self {
        self.class_groups.push((id.into(), defs));
        self
    }

    /// Declares that `id` displaces each group in `displaced`.
    pub fn with_conflicts<I, S>(mut self, id: impl Into<String>, displaced: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conflicting_class_groups
            .insert(id.into(), displaced.into_iter().map(Into::into).collect());
        self
    }

    /// Checks referential integrity: conflict tables must reference
    /// declared groups and theme references must name existing scales.
    ///
    /// The merge path never re-checks; callers who build configurations by
    /// hand run this once at construction time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let known: rustc_hash::FxHashSet<&str> =
            self.class_groups.iter().map(|(id, _)| id.as_str()).collect();

        for (table, origin) in [
            (&self.conflicting_class_groups, "conflicting_class_groups"),
            (
                &self.conflicting_class_group_modifiers,
                "conflicting_class_group_modifiers",
            ),
        ] {
            for (id, displaced) in table {
                if !known.contains(id.as_str()) {
                    return Err(ConfigError::new(format!(
                        "{origin} references unknown class group `{id}`"
                    )));
                }
                for target in displaced {
                    if !known.contains(target.as_str()) {
                        return Err(ConfigError::new(format!(
                            "{origin}[`{id}`] displaces unknown class group `{target}`"
                        )));
                    }
                }
            }
        }

        for (id, defs) in &self.class_groups {
            check_theme_refs(defs, &self.theme, id)?;
        }
        Ok(())
    }
}

fn check_theme_refs(defs: &[ClassDef], theme: &Theme, group: &str) -> Result<(), ConfigError> {
    for def in defs {
        match def {
            ClassDef::ThemeRef(key) if !theme.contains(key) => {
                return Err(ConfigError::new(format!(
                    "class group `{group}` references unknown theme scale `{key}`"
                )));
            }
            ClassDef::Branch(entries) => {
                for (_, sub) in entries {
                    check_theme_refs(sub, theme, group)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Configuration error raised at construction time.
///
/// The merge path itself is total and never produces errors.
#[derive(Debug, Clone)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid merge configuration: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Partial configuration used by [`ExtendOptions`].
///
/// Empty collections mean "leave the base untouched".
#[derive(Clone, Default)]
pub struct PartialConfig {
    pub theme: Vec<(String, Vec<ClassDef>)>,
    pub class_groups: Vec<(String, Vec<ClassDef>)>,
    pub conflicting_class_groups: Vec<(String, Vec<String>)>,
    pub conflicting_class_group_modifiers: Vec<(String, Vec<String>)>,
    pub order_sensitive_modifiers: Vec<String>,
}

impl PartialConfig {
    fn is_empty(&self) -> bool {
        self.theme.is_empty()
            && self.class_groups.is_empty()
            && self.conflicting_class_groups.is_empty()
            && self.conflicting_class_group_modifiers.is_empty()
            && self.order_sensitive_modifiers.is_empty()
    }
}

/// Options accepted by [`crate::extend`]: scalar knobs plus two layers of
/// partial configuration. `overrides` replaces matching leaves, `extend`
/// appends to them.
#[derive(Clone, Default)]
pub struct ExtendOptions {
    pub cache_size: Option<usize>,
    pub prefix: Option<String>,
    pub overrides: PartialConfig,
    pub extend: PartialConfig,
}

/// Applies `options` on top of `base`, override layer first.
pub fn merge_configs(mut base: Config, options: &ExtendOptions) -> Config {
    if let Some(size) = options.cache_size {
        base.cache_size = size;
    }
    if let Some(prefix) = &options.prefix {
        base.prefix = Some(prefix.clone());
    }

    if !options.overrides.is_empty() {
        for (key, defs) in &options.overrides.theme {
            base.theme.set(key.clone(), defs.clone());
        }
        for (id, defs) in &options.overrides.class_groups {
            replace_group(&mut base.class_groups, id, defs.clone());
        }
        for (id, displaced) in &options.overrides.conflicting_class_groups {
            base.conflicting_class_groups
                .insert(id.clone(), displaced.clone());
        }
        for (id, displaced) in &options.overrides.conflicting_class_group_modifiers {
            base.conflicting_class_group_modifiers
                .insert(id.clone(), displaced.clone());
        }
        if !options.overrides.order_sensitive_modifiers.is_empty() {
            base.order_sensitive_modifiers = options.overrides.order_sensitive_modifiers.clone();
        }
    }

    if !options.extend.is_empty() {
        for (key, defs) in &options.extend.theme {
            base.theme.extend(key.clone(), defs.clone());
        }
        for (id, defs) in &options.extend.class_groups {
            extend_group(&mut base.class_groups, id, defs.clone());
        }
        for (id, displaced) in &options.extend.conflicting_class_groups {
            base.conflicting_class_groups
                .entry(id.clone())
                .or_default()
                .extend(displaced.iter().cloned());
        }
        for (id, displaced) in &options.extend.conflicting_class_group_modifiers {
            base.conflicting_class_group_modifiers
                .entry(id.clone())
                .or_default()
                .extend(displaced.iter().cloned());
        }
        base.order_sensitive_modifiers
            .extend(options.extend.order_sensitive_modifiers.iter().cloned());
    }

    base
}

fn replace_group(groups: &mut Vec<(String, Vec<ClassDef>)>, id: &str, defs: Vec<ClassDef>) {
    match groups.iter_mut().find(|(gid, _)| gid == id) {
        Some((_, existing)) => *existing = defs,
        None => groups.push((id.to_string(), defs)),
    }
}

fn extend_group(groups: &mut Vec<(String, Vec<ClassDef>)>, id: &str, defs: Vec<ClassDef>) {
    match groups.iter_mut().find(|(gid, _)| gid == id) {
        Some((_, existing)) => existing.extend(defs),
        None => groups.push((id.to_string(), defs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::Validator;

    fn base() -> Config {
        let mut config = Config::new()
            .with_group("p", vec![ClassDef::branch("p", vec![Validator::Number.into()])])
            .with_group("px", vec![ClassDef::branch("px", vec![Validator::Number.into()])]);
        config
            .conflicting_class_groups
            .insert("p".into(), vec!["px".into()]);
        config
    }

    #[test]
    fn validate_accepts_consistent_config() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn validate_rejects_unknown_conflict_target() {
        let mut config = base();
        config
            .conflicting_class_groups
            .insert("p".into(), vec!["nope".into()]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn validate_rejects_unknown_theme_scale() {
        let config = base().with_group("w", vec![ClassDef::branch("w", vec![ClassDef::theme("spacing")])]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("spacing"));
    }

    #[test]
    fn override_replaces_group_and_extend_appends() {
        let options = ExtendOptions {
            overrides: PartialConfig {
                class_groups: vec![("p".into(), vec![ClassDef::lit("p-only")])],
                ..PartialConfig::default()
            },
            extend: PartialConfig {
                class_groups: vec![("px".into(), vec![ClassDef::lit("px-extra")])],
                ..PartialConfig::default()
            },
            ..ExtendOptions::default()
        };
        let merged = merge_configs(base(), &options);

        let p = &merged.class_groups.iter().find(|(id, _)| id == "p").unwrap().1;
        assert_eq!(p.len(), 1);
        let px = &merged.class_groups.iter().find(|(id, _)| id == "px").unwrap().1;
        assert_eq!(px.len(), 2);
    }

    #[test]
    fn scalar_options_apply() {
        let options = ExtendOptions {
            cache_size: Some(16),
            prefix: Some("tw".into()),
            ..ExtendOptions::default()
        };
        let merged = merge_configs(base(), &options);
        assert_eq!(merged.cache_size, 16);
        assert_eq!(merged.prefix.as_deref(), Some("tw"));
    }

    #[test]
    fn extend_adds_new_group() {
        let options = ExtendOptions {
            extend: PartialConfig {
                class_groups: vec![("shadow".into(), vec![ClassDef::lit("shadow")])],
                conflicting_class_groups: vec![("shadow".into(), vec!["p".into()])],
                ..PartialConfig::default()
            },
            ..ExtendOptions::default()
        };
        let merged = merge_configs(base(), &options);
        assert!(merged.class_groups.iter().any(|(id, _)| id == "shadow"));
        assert_eq!(merged.conflicting_class_groups["shadow"], vec!["p"]);
        assert!(merged.validate().is_ok());
    }
}
