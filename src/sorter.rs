//! Modifier canonicalization.
//!
//! Variant order is mostly irrelevant: `hover:focus:px-2` and
//! `focus:hover:px-2` style the same element, so both must compete for the
//! same conflict slot. Some variants are position-sensitive though: the
//! arbitrary variants (`[&:nth-child(2)]`) and a configured set of names
//! such as `before`. Reordering across those would change meaning.
//!
//! The canonical form is produced in a single pass: runs of insensitive
//! modifiers are sorted lexicographically, position-sensitive modifiers act
//! as anchors that keep their place and flush the run before them.

use rustc_hash::FxHashSet;

/// Canonicalizes modifier lists against a configured set of
/// order-sensitive names.
#[derive(Debug)]
pub struct ModifierSorter {
    order_sensitive: FxHashSet<String>,
}

impl ModifierSorter {
    pub fn new(order_sensitive_modifiers: &[String]) -> Self {
        ModifierSorter {
            order_sensitive: order_sensitive_modifiers.iter().cloned().collect(),
        }
    }

    fn is_position_sensitive(&self, modifier: &str) -> bool {
        modifier.starts_with('[') || self.order_sensitive.contains(modifier)
    }

    /// Returns the modifiers in canonical order.
    pub fn sort<'a>(&self, modifiers: &'a [String]) -> Vec<&'a str> {
        let mut sorted: Vec<&str> = Vec::with_capacity(modifiers.len());
        let mut pending: Vec<&str> = Vec::new();

        for modifier in modifiers {
            if self.is_position_sensitive(modifier) {
                pending.sort_unstable();
                sorted.append(&mut pending);
                sorted.push(modifier);
            } else {
                pending.push(modifier);
            }
        }
        pending.sort_unstable();
        sorted.append(&mut pending);
        sorted
    }

    /// The canonical conflict-key fragment: sorted modifiers joined by `:`.
    pub fn canonical_key(&self, modifiers: &[String]) -> String {
        self.sort(modifiers).join(":")
    }
}
