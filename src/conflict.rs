//! Conflict resolution over a parsed, classified token stream.
//!
//! The engine walks tokens in input order and keeps an accumulator keyed by
//! the canonical conflict key: `(canonical modifier string, important flag,
//! group id)`. A class displaces every earlier class whose key matches one
//! of its conflict targets under the same modifier-and-important context;
//! keying the accumulator by exactly that triple makes each displacement a
//! hash removal, so a token's cost is bounded by its conflict-set size and
//! not by the number of classes seen so far.
//!
//! Unclassified tokens key on their base text instead of a group id: exact
//! duplicates collapse to the later occurrence, everything else passes
//! through. External tokens (outside the configured prefix) bypass the
//! accumulator entirely.

use rustc_hash::FxHashMap;

use crate::class_map::ClassMap;
use crate::classifier::class_group_id;
use crate::config::Config;
use crate::parser::{ClassParser, ParsedClass, IMPORTANT_MODIFIER};
use crate::sorter::ModifierSorter;

/// Declared conflicts, indexed by group id.
#[derive(Debug)]
pub(crate) struct ConflictTables {
    groups: FxHashMap<String, Vec<String>>,
    with_postfix: FxHashMap<String, Vec<String>>,
}

impl ConflictTables {
    pub(crate) fn new(config: &Config) -> Self {
        ConflictTables {
            groups: config.conflicting_class_groups.clone(),
            with_postfix: config.conflicting_class_group_modifiers.clone(),
        }
    }

    /// Groups displaced by `group`, including the postfix-only set when
    /// the class carries a postfix modifier.
    fn conflicts_of<'a>(&'a self, group: &str, has_postfix: bool) -> impl Iterator<Item = &'a str> {
        let base = self.groups.get(group).map(Vec::as_slice).unwrap_or(&[]);
        let extra = if has_postfix {
            self.with_postfix.get(group).map(Vec::as_slice).unwrap_or(&[])
        } else {
            &[]
        };
        base.iter().chain(extra).map(String::as_str)
    }
}

/// Everything the engine needs besides the token stream.
pub(crate) struct MergeContext<'a> {
    pub parser: &'a ClassParser,
    pub sorter: &'a ModifierSorter,
    pub class_map: &'a ClassMap,
    pub tables: &'a ConflictTables,
}

#[derive(PartialEq, Eq, Hash)]
enum GroupKey {
    Group(String),
    Unknown(String),
}

#[derive(PartialEq, Eq, Hash)]
struct ConflictKey {
    modifiers: String,
    important: bool,
    group: GroupKey,
}

struct Survivor {
    text: String,
    input_index: usize,
}

/// Merges one whitespace-delimited class list.
pub(crate) fn merge_class_list(class_list: &str, cx: &MergeContext<'_>) -> String {
    let mut accumulator: FxHashMap<ConflictKey, Survivor> = FxHashMap::default();
    let mut externals: Vec<Survivor> = Vec::new();

    for (input_index, token) in class_list.split_whitespace().enumerate() {
        let parsed = cx.parser.parse(token);
        if parsed.external {
            externals.push(Survivor {
                text: emitted_text(cx, token, &parsed),
                input_index,
            });
            continue;
        }

        let (group, has_postfix) = classify(cx.class_map, &parsed);
        let modifiers = cx.sorter.canonical_key(&parsed.modifiers);
        let survivor = Survivor {
            text: emitted_text(cx, token, &parsed),
            input_index,
        };

        match group {
            Some(group) => {
                for displaced in cx.tables.conflicts_of(&group, has_postfix) {
                    accumulator.remove(&ConflictKey {
                        modifiers: modifiers.clone(),
                        important: parsed.important,
                        group: GroupKey::Group(displaced.to_string()),
                    });
                }
                accumulator.insert(
                    ConflictKey {
                        modifiers,
                        important: parsed.important,
                        group: GroupKey::Group(group),
                    },
                    survivor,
                );
            }
            None => {
                accumulator.insert(
                    ConflictKey {
                        modifiers,
                        important: parsed.important,
                        group: GroupKey::Unknown(parsed.base.clone()),
                    },
                    survivor,
                );
            }
        }
    }

    let mut survivors: Vec<Survivor> = externals;
    survivors.extend(accumulator.into_values());
    survivors.sort_unstable_by_key(|s| s.input_index);

    let mut output = String::with_capacity(class_list.len());
    for (i, survivor) in survivors.iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        output.push_str(&survivor.text);
    }
    output
}

/// Classifies a parsed class, handling the postfix modifier.
///
/// The base is first classified with the postfix truncated; when that
/// fails, the full base is retried and a successful match means the slash
/// belonged to the class value (a fraction), not to a postfix modifier.
fn classify(class_map: &ClassMap, parsed: &ParsedClass) -> (Option<String>, bool) {
    match parsed.postfix_offset {
        Some(_) => {
            if let Some(group) = class_group_id(class_map, parsed.base_without_postfix()) {
                (Some(group), true)
            } else {
                (class_group_id(class_map, &parsed.base), false)
            }
        }
        None => (class_group_id(class_map, &parsed.base), false),
    }
}

/// The text a surviving token contributes to the output.
///
/// With no experimental parser this is the original token. With one, the
/// token is rebuilt canonically whenever the experimental parse materially
/// differs from the default parse.
fn emitted_text(cx: &MergeContext<'_>, original: &str, parsed: &ParsedClass) -> String {
    if !cx.parser.has_hook() {
        return original.to_string();
    }
    if *parsed == cx.parser.parse_default(original) {
        return original.to_string();
    }
    rebuild(parsed, cx.parser.full_prefix())
}

fn rebuild(parsed: &ParsedClass, full_prefix: Option<&str>) -> String {
    let mut text = String::new();
    if !parsed.external {
        if let Some(prefix) = full_prefix {
            text.push_str(prefix);
        }
    }
    for modifier in &parsed.modifiers {
        text.push_str(modifier);
        text.push(':');
    }
    text.push_str(&parsed.base);
    if parsed.important {
        text.push(IMPORTANT_MODIFIER);
    }
    text
}
