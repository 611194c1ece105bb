//! Value validators for class classification.
//!
//! A [`Validator`] is a pure predicate over the remainder of a class name
//! after the class-map trie has consumed its literal segments. Validators are
//! what let a single trie node accept open-ended values: `w-4`, `w-1/2` and
//! `w-[12px]` all descend to the `w` node and are then discriminated by the
//! validators registered there.
//!
//! Two delimiter families exist:
//!
//! - **Arbitrary values** `[…]` carry an inline value, optionally typed with
//!   a label: `[length:var(--x)]`.
//! - **Arbitrary variables** `(…)` reference a variable, with the same
//!   optional label syntax: `(family-name:--my-font)`.
//!
//! All predicates are total and allocation-free.

use std::fmt;
use std::sync::Arc;

/// Predicate applied to the unmatched remainder of a class name.
///
/// The closed variants cover the validators exposed to configuration
/// authors; [`Validator::Custom`] admits arbitrary user predicates.
#[derive(Clone)]
pub enum Validator {
    /// Accepts anything, including arbitrary values and variables.
    Any,
    /// Accepts anything that is not `[…]` or `(…)` delimited.
    AnyNonArbitrary,
    /// Unsigned integer, e.g. `12`.
    Integer,
    /// Finite number, e.g. `2.5` or `-4`.
    Number,
    /// Integer ratio, e.g. `1/2`.
    Fraction,
    /// Number with a trailing `%`.
    Percent,
    /// T-shirt size with optional multiplier, e.g. `sm`, `2xl`, `2.5xl`.
    TshirtSize,
    /// Any `[…]` value.
    ArbitraryValue,
    /// Any `(…)` variable reference.
    ArbitraryVariable,
    /// `[…]` labelled `length:` or holding a recognizable length.
    ArbitraryLength,
    /// `[…]` labelled `number:` or holding a plain number.
    ArbitraryNumber,
    /// `[…]` labelled `size:`, `length:` or `percentage:`.
    ArbitrarySize,
    /// `[…]` labelled `position:` or `percentage:`.
    ArbitraryPosition,
    /// `[…]` labelled `image:`/`url:` or holding an image function.
    ArbitraryImage,
    /// `[…]` labelled `shadow:` or holding a shadow-shaped value.
    ArbitraryShadow,
    /// `[…]` labelled `family-name:`.
    ArbitraryFamilyName,
    /// `(…)` labelled `length:`.
    ArbitraryVariableLength,
    /// `(…)` labelled `family-name:`.
    ArbitraryVariableFamilyName,
    /// `(…)` labelled `position:`.
    ArbitraryVariablePosition,
    /// `(…)` labelled `size:`.
    ArbitraryVariableSize,
    /// `(…)` labelled `image:`/`url:`.
    ArbitraryVariableImage,
    /// `(…)` labelled `shadow:`.
    ArbitraryVariableShadow,
    /// User-supplied predicate.
    Custom(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl Validator {
    /// Applies this validator to `value`.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Validator::Any => is_any(value),
            Validator::AnyNonArbitrary => is_any_non_arbitrary(value),
            Validator::Integer => is_integer(value),
            Validator::Number => is_number(value),
            Validator::Fraction => is_fraction(value),
            Validator::Percent => is_percent(value),
            Validator::TshirtSize => is_tshirt_size(value),
            Validator::ArbitraryValue => is_arbitrary_value(value),
            Validator::ArbitraryVariable => is_arbitrary_variable(value),
            Validator::ArbitraryLength => is_arbitrary_length(value),
            Validator::ArbitraryNumber => is_arbitrary_number(value),
            Validator::ArbitrarySize => is_arbitrary_size(value),
            Validator::ArbitraryPosition => is_arbitrary_position(value),
            Validator::ArbitraryImage => is_arbitrary_image(value),
            Validator::ArbitraryShadow => is_arbitrary_shadow(value),
            Validator::ArbitraryFamilyName => is_arbitrary_family_name(value),
            Validator::ArbitraryVariableLength => is_arbitrary_variable_length(value),
            Validator::ArbitraryVariableFamilyName => is_arbitrary_variable_family_name(value),
            Validator::ArbitraryVariablePosition => is_arbitrary_variable_position(value),
            Validator::ArbitraryVariableSize => is_arbitrary_variable_size(value),
            Validator::ArbitraryVariableImage => is_arbitrary_variable_image(value),
            Validator::ArbitraryVariableShadow => is_arbitrary_variable_shadow(value),
            Validator::Custom(f) => f(value),
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Validator::Any => "Any",
            Validator::AnyNonArbitrary => "AnyNonArbitrary",
            Validator::Integer => "Integer",
            Validator::Number => "Number",
            Validator::Fraction => "Fraction",
            Validator::Percent => "Percent",
            Validator::TshirtSize => "TshirtSize",
            Validator::ArbitraryValue => "ArbitraryValue",
            Validator::ArbitraryVariable => "ArbitraryVariable",
            Validator::ArbitraryLength => "ArbitraryLength",
            Validator::ArbitraryNumber => "ArbitraryNumber",
            Validator::ArbitrarySize => "ArbitrarySize",
            Validator::ArbitraryPosition => "ArbitraryPosition",
            Validator::ArbitraryImage => "ArbitraryImage",
            Validator::ArbitraryShadow => "ArbitraryShadow",
            Validator::ArbitraryFamilyName => "ArbitraryFamilyName",
            Validator::ArbitraryVariableLength => "ArbitraryVariableLength",
            Validator::ArbitraryVariableFamilyName => "ArbitraryVariableFamilyName",
            Validator::ArbitraryVariablePosition => "ArbitraryVariablePosition",
            Validator::ArbitraryVariableSize => "ArbitraryVariableSize",
            Validator::ArbitraryVariableImage => "ArbitraryVariableImage",
            Validator::ArbitraryVariableShadow => "ArbitraryVariableShadow",
            Validator::Custom(_) => "Custom(..)",
        };
        f.write_str(name)
    }
}

/// A `[…]` or `(…)` value split into its optional label and payload.
struct Delimited<'a> {
    label: Option<&'a str>,
    value: &'a str,
}

/// Splits `s` on its delimiters if it is `open…close` with non-empty
/// content, extracting a `label:` prefix when one is present.
///
/// A label is a run of word characters and dashes starting with a word
/// character, terminated by the first `:`.
fn split_delimited(s: &str, open: char, close: char) -> Option<Delimited<'_>> {
    let inner = s.strip_prefix(open)?.strip_suffix(close)?;
    if inner.is_empty() {
        return None;
    }
    if let Some(colon) = inner.find(':') {
        let label = &inner[..colon];
        let value = &inner[colon + 1..];
        if is_label(label) && !value.is_empty() {
            return Some(Delimited {
                label: Some(label),
                value,
            });
        }
    }
    Some(Delimited {
        label: None,
        value: inner,
    })
}

fn is_label(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Always true.
pub fn is_any(_value: &str) -> bool {
    true
}

/// True unless the value is `[…]` or `(…)` delimited.
pub fn is_any_non_arbitrary(value: &str) -> bool {
    !is_arbitrary_value(value) && !is_arbitrary_variable(value)
}

/// Unsigned decimal integer.
pub fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Finite number, sign and exponent allowed.
pub fn is_number(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

/// Integer ratio `a/b`.
pub fn is_fraction(value: &str) -> bool {
    match value.split_once('/') {
        Some((numerator, denominator)) => is_integer(numerator) && is_integer(denominator),
        None => false,
    }
}

/// Number followed by `%`.
pub fn is_percent(value: &str) -> bool {
    value.strip_suffix('%').is_some_and(is_number)
}

/// T-shirt size: `xs`, `sm`, `md`, `lg` or `xl`, optionally preceded by a
/// decimal multiplier (`2xl`, `2.5xl`).
pub fn is_tshirt_size(value: &str) -> bool {
    const SIZES: [&str; 5] = ["xs", "sm", "md", "lg", "xl"];
    for size in SIZES {
        if let Some(multiplier) = value.strip_suffix(size) {
            if multiplier.is_empty() || is_decimal(multiplier) {
                return true;
            }
        }
    }
    false
}

/// Digits with an optional single fractional part, e.g. `2` or `2.5`.
fn is_decimal(s: &str) -> bool {
    match s.split_once('.') {
        Some((whole, frac)) => is_integer(whole) && is_integer(frac),
        None => is_integer(s),
    }
}

/// Any non-empty `[…]` value.
pub fn is_arbitrary_value(value: &str) -> bool {
    split_delimited(value, '[', ']').is_some()
}

/// Any non-empty `(…)` variable reference.
pub fn is_arbitrary_variable(value: &str) -> bool {
    split_delimited(value, '(', ')').is_some()
}

fn arbitrary(value: &str, labels: &[&str], fallback: fn(&str) -> bool) -> bool {
    match split_delimited(value, '[', ']') {
        Some(Delimited {
            label: Some(label), ..
        }) => labels.contains(&label),
        Some(Delimited { label: None, value }) => fallback(value),
        None => false,
    }
}

fn arbitrary_variable(value: &str, labels: &[&str]) -> bool {
    matches!(
        split_delimited(value, '(', ')'),
        Some(Delimited { label: Some(label), .. }) if labels.contains(&label)
    )
}

/// `[…]` labelled `length:`, or holding a value with a recognizable length
/// unit (`12px`, `calc(100%-2rem)`, `0`).
pub fn is_arbitrary_length(value: &str) -> bool {
    arbitrary(value, &["length"], is_length)
}

/// `[…]` labelled `number:`, or holding a plain number.
pub fn is_arbitrary_number(value: &str) -> bool {
    arbitrary(value, &["number"], is_number)
}

/// `[…]` labelled `size:`, `length:` or `percentage:`.
pub fn is_arbitrary_size(value: &str) -> bool {
    arbitrary(value, &["size", "length", "percentage"], never)
}

/// `[…]` labelled `position:` or `percentage:`.
pub fn is_arbitrary_position(value: &str) -> bool {
    arbitrary(value, &["position", "percentage"], never)
}

/// `[…]` labelled `image:`/`url:`, or holding an image function.
pub fn is_arbitrary_image(value: &str) -> bool {
    arbitrary(value, &["image", "url"], is_image)
}

/// `[…]` labelled `shadow:`, or holding a shadow-shaped value.
pub fn is_arbitrary_shadow(value: &str) -> bool {
    arbitrary(value, &["shadow"], is_shadow)
}

/// `[…]` labelled `family-name:`.
pub fn is_arbitrary_family_name(value: &str) -> bool {
    arbitrary(value, &["family-name"], never)
}

/// `(…)` labelled `length:`.
pub fn is_arbitrary_variable_length(value: &str) -> bool {
    arbitrary_variable(value, &["length"])
}

/// `(…)` labelled `family-name:`.
pub fn is_arbitrary_variable_family_name(value: &str) -> bool {
    arbitrary_variable(value, &["family-name"])
}

/// `(…)` labelled `position:`.
pub fn is_arbitrary_variable_position(value: &str) -> bool {
    arbitrary_variable(value, &["position"])
}

/// `(…)` labelled `size:`.
pub fn is_arbitrary_variable_size(value: &str) -> bool {
    arbitrary_variable(value, &["size"])
}

/// `(…)` labelled `image:`/`url:`.
pub fn is_arbitrary_variable_image(value: &str) -> bool {
    arbitrary_variable(value, &["image", "url"])
}

/// `(…)` labelled `shadow:`.
pub fn is_arbitrary_variable_shadow(value: &str) -> bool {
    arbitrary_variable(value, &["shadow"])
}

fn never(_value: &str) -> bool {
    false
}

/// Units a bare length value may end a number with. Longer units first so
/// the scan below cannot stop at a prefix of a longer unit.
const LENGTH_UNITS: [&str; 32] = [
    "cqmin", "cqmax", "vmin", "vmax", "svmin", "svmax", "dvmin", "dvmax", "lvmin", "lvmax", "cqw",
    "cqh", "cqi", "cqb", "rem", "rlh", "cap", "svh", "svw", "dvh", "dvw", "lvh", "lvw", "px",
    "pt", "pc", "in", "cm", "mm", "ch", "ex", "em",
];

const SHORT_LENGTH_UNITS: [&str; 5] = ["%", "vh", "vw", "lh", "q"];

fn is_length(value: &str) -> bool {
    if value == "0" {
        return true;
    }
    for func in ["calc(", "min(", "max(", "clamp("] {
        if let Some(rest) = value.strip_prefix(func) {
            return rest.contains(')');
        }
    }
    // A digit immediately followed by a unit anywhere in the value counts,
    // mirroring substring matching so composite values like `1px_4px` pass.
    let bytes = value.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if !b.is_ascii_digit() {
            continue;
        }
        let rest = &value[i + 1..];
        if LENGTH_UNITS.iter().any(|u| rest.starts_with(u))
            || SHORT_LENGTH_UNITS.iter().any(|u| rest.starts_with(u))
        {
            return true;
        }
    }
    false
}

fn is_image(value: &str) -> bool {
    const FUNCTIONS: [&str; 9] = [
        "url(",
        "image(",
        "image-set(",
        "cross-fade(",
        "element(",
        "linear-gradient(",
        "radial-gradient(",
        "conic-gradient(",
        "repeating-",
    ];
    FUNCTIONS.iter().any(|f| value.starts_with(f))
}

/// Shadow shape: optional `inset_`, then at least two underscore-separated
/// offsets that each begin like a length (`0_4px`, `inset_0_1px_2px`).
fn is_shadow(value: &str) -> bool {
    let value = value.strip_prefix("inset_").unwrap_or(value);
    let mut parts = value.split('_');
    match (parts.next(), parts.next()) {
        (Some(a), Some(b)) => is_shadow_offset(a) && is_shadow_offset(b),
        _ => false,
    }
}

fn is_shadow_offset(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    s.bytes().next().is_some_and(|b| b.is_ascii_digit() || b == b'.')
}
