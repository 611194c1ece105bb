//! Class classification: base class → class group id.
//!
//! Arbitrary properties (`[paint-order:markers]`) are recognized first and
//! map onto a synthetic group derived from the property name, so two
//! arbitrary declarations of the same property conflict. Everything else is
//! classified by walking the class-map trie over hyphen-split parts, with
//! validator fall-back at every node the descent passed through, deepest
//! node first. The fall-back at inner nodes is what lets `w-[12px]` follow
//! the `w` edge literally and still match the arbitrary-value validator
//! registered on the `w` node.

use crate::class_map::{ClassMap, NodeId};

/// Prefix of the synthetic group ids produced for arbitrary properties.
pub const ARBITRARY_PROPERTY_PREFIX: &str = "arbitrary..";

/// Classifies `base`, returning its class group id.
///
/// Returns `None` for classes no group recognizes; the conflict engine
/// then keys them by their base text.
pub fn class_group_id(map: &ClassMap, base: &str) -> Option<String> {
    if let Some(inner) = base.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        if inner.is_empty() {
            return None;
        }
        // `[property:value]` conflicts per property; a bracketed base
        // without a colon (or with an empty property) classifies as
        // unknown.
        let property = &inner[..inner.find(':')?];
        if property.is_empty() {
            return None;
        }
        return Some(format!("{ARBITRARY_PROPERTY_PREFIX}{property}"));
    }

    let mut parts: Vec<&str> = base.split('-').collect();
    if parts.len() > 1 && parts[0].is_empty() {
        parts.remove(0);
    }
    group_recursive(map, map.root(), &parts)
}

fn group_recursive(map: &ClassMap, node: NodeId, parts: &[&str]) -> Option<String> {
    let current = map.node(node);
    let Some((first, rest)) = parts.split_first() else {
        return current.group_id.clone();
    };

    if let Some(&child) = current.next_part.get(*first) {
        if let Some(group) = group_recursive(map, child, rest) {
            return Some(group);
        }
    }

    if current.validators.is_empty() {
        return None;
    }
    let remainder = parts.join("-");
    current
        .validators
        .iter()
        .find(|(validator, _)| validator.matches(&remainder))
        .map(|(_, group)| group.clone())
}
