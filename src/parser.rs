//! Class-name parsing.
//!
//! A class name is a single whitespace-free token with the grammar
//!
//! ```text
//! token := [prefix ":"] ( modifier ":" )* ["!"] base ["/" postfix] ["!"]
//! ```
//!
//! where `modifier` and `base` may contain balanced `[…]` and `(…)` groups
//! inside which `:` and `/` lose their meta meaning. The parser is a single
//! left-to-right scan maintaining two depth counters; it never fails. An
//! empty token parses to an empty base.
//!
//! ## Prefix gating
//!
//! When the configuration carries a prefix, only tokens starting with
//! `prefix:` are parsed; everything else is marked [`ParsedClass::external`]
//! and passes through the merge untouched.
//!
//! ## Experimental hook
//!
//! A configured [`crate::config::ParseHook`] replaces the default parse.
//! The hook receives the class name and the default parser and may call the
//! latter, including recursively.

use crate::config::{Config, ParseHook};

/// Marker for high-priority declarations, accepted leading or trailing.
pub const IMPORTANT_MODIFIER: char = '!';

/// The decomposition of a single class name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedClass {
    /// Variant modifiers in source order, without their trailing colons.
    pub modifiers: Vec<String>,
    /// Whether the class carried an important marker.
    pub important: bool,
    /// The base class, important marker stripped. When `postfix_offset` is
    /// set the base still contains the postfix text.
    pub base: String,
    /// Byte position of the postfix `/` inside `base`, if any.
    pub postfix_offset: Option<usize>,
    /// True for tokens outside the configured prefix; they never take part
    /// in conflict resolution.
    pub external: bool,
}

impl ParsedClass {
    /// An external token, emitted verbatim by the merge.
    pub(crate) fn external(token: &str) -> Self {
        ParsedClass {
            base: token.to_string(),
            external: true,
            ..ParsedClass::default()
        }
    }

    /// The base with any postfix truncated away.
    pub fn base_without_postfix(&self) -> &str {
        match self.postfix_offset {
            Some(offset) => &self.base[..offset],
            None => &self.base,
        }
    }
}

/// Token parser bound to a configuration's prefix and parse hook.
pub struct ClassParser {
    /// Configured prefix including its trailing colon.
    full_prefix: Option<String>,
    hook: Option<ParseHook>,
}

impl std::fmt::Debug for ClassParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassParser")
            .field("full_prefix", &self.full_prefix)
            .field("hook", &self.hook.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl ClassParser {
    pub fn new(config: &Config) -> Self {
        ClassParser {
            full_prefix: config.prefix.as_ref().map(|p| format!("{p}:")),
            hook: config.experimental_parse_class_name.clone(),
        }
    }

    /// Parses one token, applying the experimental hook when configured.
    pub fn parse(&self, token: &str) -> ParsedClass {
        match &self.hook {
            Some(hook) => hook(token, &|t| self.parse_default(t)),
            None => self.parse_default(token),
        }
    }

    /// The default parse: prefix gating, then the grammar scan.
    pub fn parse_default(&self, token: &str) -> ParsedClass {
        match &self.full_prefix {
            Some(prefix) => match token.strip_prefix(prefix.as_str()) {
                Some(rest) => scan(rest),
                None => ParsedClass::external(token),
            },
            None => scan(token),
        }
    }

    pub(crate) fn has_hook(&self) -> bool {
        self.hook.is_some()
    }

    /// The configured prefix including its trailing colon.
    pub(crate) fn full_prefix(&self) -> Option<&str> {
        self.full_prefix.as_deref()
    }
}

/// The core scan over one prefix-stripped token.
fn scan(token: &str) -> ParsedClass {
    let bytes = token.as_bytes();
    let mut modifiers = Vec::new();
    let mut bracket_depth = 0usize;
    let mut paren_depth = 0usize;
    let mut modifier_start = 0usize;
    let mut postfix_position: Option<usize> = None;

    for (i, &b) in bytes.iter().enumerate() {
        if bracket_depth == 0 && paren_depth == 0 {
            match b {
                b':' => {
                    modifiers.push(token[modifier_start..i].to_string());
                    modifier_start = i + 1;
                    continue;
                }
                // Last occurrence wins; earlier slashes may belong to
                // fractions inside the base.
                b'/' => {
                    postfix_position = Some(i);
                    continue;
                }
                _ => {}
            }
        }
        match b {
            b'[' => bracket_depth += 1,
            b']' => bracket_depth = bracket_depth.saturating_sub(1),
            b'(' => paren_depth += 1,
            b')' => paren_depth = paren_depth.saturating_sub(1),
            _ => {}
        }
    }

    let base_with_marker = &token[modifier_start..];
    let (base, important) = strip_important(base_with_marker);

    // The recorded position is only meaningful if it still lands on a `/`
    // in the cleaned base; a stripped leading marker shifts everything.
    let postfix_offset = postfix_position.and_then(|position| {
        let offset = position.checked_sub(modifier_start)?;
        (offset > 0 && base.as_bytes().get(offset) == Some(&b'/')).then_some(offset)
    });

    ParsedClass {
        modifiers,
        important,
        base: base.to_string(),
        postfix_offset,
        external: false,
    }
}

/// Strips one important marker, trailing preferred.
fn strip_important(base: &str) -> (&str, bool) {
    if let Some(stripped) = base.strip_suffix(IMPORTANT_MODIFIER) {
        (stripped, true)
    } else if let Some(stripped) = base.strip_prefix(IMPORTANT_MODIFIER) {
        (stripped, true)
    } else {
        (base, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::sync::Arc;

    fn parse(token: &str) -> ParsedClass {
        ClassParser::new(&Config::new()).parse(token)
    }

    #[test]
    fn bare_class_has_no_modifiers() {
        let parsed = parse("block");
        assert_eq!(parsed.base, "block");
        assert!(parsed.modifiers.is_empty());
        assert!(!parsed.important);
        assert!(parsed.postfix_offset.is_none());
        assert!(!parsed.external);
    }

    #[test]
    fn modifiers_split_on_top_level_colons() {
        let parsed = parse("hover:focus:px-2");
        assert_eq!(parsed.modifiers, vec!["hover", "focus"]);
        assert_eq!(parsed.base, "px-2");
    }

    #[test]
    fn colons_inside_brackets_are_opaque() {
        let parsed = parse("hover:[paint-order:markers]");
        assert_eq!(parsed.modifiers, vec!["hover"]);
        assert_eq!(parsed.base, "[paint-order:markers]");
    }

    #[test]
    fn colons_inside_parens_are_opaque() {
        let parsed = parse("supports-(--x:y):block");
        assert_eq!(parsed.modifiers, vec!["supports-(--x:y)"]);
        assert_eq!(parsed.base, "block");
    }

    #[test]
    fn trailing_important_marker() {
        let parsed = parse("px-2!");
        assert!(parsed.important);
        assert_eq!(parsed.base, "px-2");
    }

    #[test]
    fn leading_important_marker() {
        let parsed = parse("hover:!px-2");
        assert!(parsed.important);
        assert_eq!(parsed.modifiers, vec!["hover"]);
        assert_eq!(parsed.base, "px-2");
    }

    #[test]
    fn postfix_offset_points_at_slash() {
        let parsed = parse("text-lg/7");
        assert_eq!(parsed.base, "text-lg/7");
        assert_eq!(parsed.postfix_offset, Some(7));
        assert_eq!(parsed.base_without_postfix(), "text-lg");
    }

    #[test]
    fn postfix_survives_trailing_important() {
        let parsed = parse("text-lg/7!");
        assert!(parsed.important);
        assert_eq!(parsed.postfix_offset, Some(7));
        assert_eq!(parsed.base_without_postfix(), "text-lg");
    }

    #[test]
    fn leading_important_drops_shifted_postfix() {
        // After stripping the leading marker the recorded position no
        // longer lands on a slash, so the postfix is not recognized.
        let parsed = parse("!text-lg/7");
        assert!(parsed.important);
        assert_eq!(parsed.base, "text-lg/7");
        assert_eq!(parsed.postfix_offset, None);
    }

    #[test]
    fn last_slash_wins() {
        let parsed = parse("grid-cols-3/4/5");
        assert_eq!(parsed.postfix_offset, Some(13));
    }

    #[test]
    fn slash_inside_brackets_is_opaque() {
        let parsed = parse("bg-[url(/img.png)]");
        assert_eq!(parsed.postfix_offset, None);
        assert_eq!(parsed.base, "bg-[url(/img.png)]");
    }

    #[test]
    fn slash_in_modifier_region_is_ignored() {
        let parsed = parse("group/name:block");
        assert_eq!(parsed.modifiers, vec!["group/name"]);
        assert_eq!(parsed.base, "block");
        assert_eq!(parsed.postfix_offset, None);
    }

    #[test]
    fn empty_token_parses_to_empty_base() {
        let parsed = parse("");
        assert_eq!(parsed.base, "");
        assert!(parsed.modifiers.is_empty());
    }

    #[test]
    fn prefix_match_strips_and_parses() {
        let mut config = Config::new();
        config.prefix = Some("tw".into());
        let parser = ClassParser::new(&config);

        let parsed = parser.parse("tw:hover:px-2");
        assert!(!parsed.external);
        assert_eq!(parsed.modifiers, vec!["hover"]);
        assert_eq!(parsed.base, "px-2");
    }

    #[test]
    fn prefix_mismatch_is_external() {
        let mut config = Config::new();
        config.prefix = Some("tw".into());
        let parser = ClassParser::new(&config);

        let parsed = parser.parse("px-2");
        assert!(parsed.external);
        assert_eq!(parsed.base, "px-2");
        assert!(parsed.modifiers.is_empty());
    }

    #[test]
    fn hook_replaces_default_parse() {
        let mut config = Config::new();
        config.experimental_parse_class_name = Some(Arc::new(|class_name, default| {
            let mut parsed = default(class_name);
            parsed.modifiers.retain(|m| m != "noop");
            parsed
        }));
        let parser = ClassParser::new(&config);

        let parsed = parser.parse("noop:hover:block");
        assert_eq!(parsed.modifiers, vec!["hover"]);
        assert_eq!(parsed.base, "block");
    }

    #[test]
    fn unbalanced_close_brackets_saturate() {
        let parsed = parse("a]b:c");
        assert_eq!(parsed.modifiers, vec!["a]b"]);
        assert_eq!(parsed.base, "c");
    }
}
