//! The class-map trie.
//!
//! Classification walks a trie over hyphen-separated class-name parts. Each
//! node may carry a terminal group id (the path so far is itself a class),
//! validators discriminating open-ended values at that point, and literal
//! children for further parts. The three coexist: the `border` node is a
//! terminal for the `border-w` group, has literal children like `solid`,
//! and carries validators for arbitrary widths.
//!
//! Nodes live in a flat arena and reference each other by index; the map
//! is built once per configuration and never mutated afterwards, so it can
//! be shared freely across threads.

use log::debug;
use rustc_hash::FxHashMap;

use crate::config::{ClassDef, Config};
use crate::theme::Theme;
use crate::validators::Validator;

/// Index of a node in the class-map arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(u32);

/// One trie node.
#[derive(Debug, Default)]
pub struct ClassMapNode {
    /// Literal next-part edges.
    pub(crate) next_part: FxHashMap<String, NodeId>,
    /// Validators in configuration order, each owning its group id.
    pub(crate) validators: Vec<(Validator, String)>,
    /// Set when the path to this node is itself a complete class.
    pub(crate) group_id: Option<String>,
}

/// The immutable classification trie.
#[derive(Debug)]
pub struct ClassMap {
    nodes: Vec<ClassMapNode>,
}

impl ClassMap {
    /// Builds the trie from the configured class groups, resolving theme
    /// references against the configured theme.
    pub fn build(config: &Config) -> ClassMap {
        let mut map = ClassMap {
            nodes: vec![ClassMapNode::default()],
        };
        for (group_id, defs) in &config.class_groups {
            map.add_defs(defs, ClassMap::ROOT, group_id, &config.theme);
        }
        debug!(
            "class map built: {} groups, {} trie nodes",
            config.class_groups.len(),
            map.nodes.len()
        );
        map
    }

    const ROOT: NodeId = NodeId(0);

    pub fn root(&self) -> NodeId {
        ClassMap::ROOT
    }

    pub(crate) fn node(&self, id: NodeId) -> &ClassMapNode {
        &self.nodes[id.0 as usize]
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn add_defs(&mut self, defs: &[ClassDef], node: NodeId, group_id: &str, theme: &Theme) {
        for def in defs {
            match def {
                ClassDef::Literal(path) if path.is_empty() => {
                    self.nodes[node.0 as usize].group_id = Some(group_id.to_string());
                }
                ClassDef::Literal(path) => {
                    let terminal = self.descend(node, path);
                    self.nodes[terminal.0 as usize].group_id = Some(group_id.to_string());
                }
                ClassDef::Validator(validator) => {
                    self.nodes[node.0 as usize]
                        .validators
                        .push((validator.clone(), group_id.to_string()));
                }
                ClassDef::ThemeRef(key) => {
                    if !theme.contains(key) {
                        debug!("class group `{group_id}` references missing theme scale `{key}`");
                    }
                    self.add_defs(theme.resolve(key), node, group_id, theme);
                }
                ClassDef::Branch(entries) => {
                    for (key, sub_defs) in entries {
                        let child = self.descend(node, key);
                        self.add_defs(sub_defs, child, group_id, theme);
                    }
                }
            }
        }
    }

    /// Descends from `node` along the hyphen-split `path`, creating nodes
    /// as needed. A leading empty segment (negative-value classes) is
    /// dropped.
    fn descend(&mut self, node: NodeId, path: &str) -> NodeId {
        let mut current = node;
        for (i, part) in path.split('-').enumerate() {
            if i == 0 && part.is_empty() {
                continue;
            }
            current = self.child(current, part);
        }
        current
    }

    fn child(&mut self, node: NodeId, part: &str) -> NodeId {
        if let Some(&existing) = self.nodes[node.0 as usize].next_part.get(part) {
            return existing;
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(ClassMapNode::default());
        self.nodes[node.0 as usize]
            .next_part
            .insert(part.to_string(), id);
        id
    }
}
