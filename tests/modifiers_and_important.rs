//! Variant context handling: modifier canonicalization, order-sensitive
//! variants and the important marker.

use twmerge::merge;

#[test]
fn identical_modifier_contexts_conflict() {
    assert_eq!(merge("hover:px-2 hover:px-4"), "hover:px-4");
    assert_eq!(merge("hover:block hover:inline"), "hover:inline");
}

#[test]
fn different_modifier_contexts_coexist() {
    assert_eq!(merge("px-2 hover:px-4"), "px-2 hover:px-4");
    assert_eq!(merge("hover:px-2 focus:px-4"), "hover:px-2 focus:px-4");
}

#[test]
fn modifier_order_is_canonicalized() {
    assert_eq!(merge("hover:focus:px-2 focus:hover:px-4"), "focus:hover:px-4");
    assert_eq!(merge("c:d:e:block d:c:e:inline"), "d:c:e:inline");
}

#[test]
fn surviving_token_keeps_its_original_spelling() {
    // The canonical form is only a conflict key; output text is verbatim.
    assert_eq!(merge("focus:hover:px-4"), "focus:hover:px-4");
    assert_eq!(merge("hover:focus:px-2 focus:hover:px-4"), "focus:hover:px-4");
}

#[test]
fn order_sensitive_modifiers_anchor_position() {
    assert_eq!(
        merge("*:before:block before:*:inline"),
        "*:before:block before:*:inline"
    );
    assert_eq!(
        merge("before:hover:px-2 hover:before:px-4"),
        "before:hover:px-2 hover:before:px-4"
    );
    assert_eq!(merge("before:hover:px-2 before:hover:px-4"), "before:hover:px-4");
}

#[test]
fn arbitrary_variants_anchor_position() {
    assert_eq!(merge("[&>*]:px-2 [&>*]:px-4"), "[&>*]:px-4");
    assert_eq!(
        merge("[&>*]:hover:px-2 hover:[&>*]:px-4"),
        "[&>*]:hover:px-2 hover:[&>*]:px-4"
    );
}

#[test]
fn insensitive_runs_sort_around_anchors() {
    assert_eq!(
        merge("dark:hover:before:px-2 hover:dark:before:px-4"),
        "hover:dark:before:px-4"
    );
}

#[test]
fn arbitrary_property_conflicts_respect_modifiers() {
    assert_eq!(
        merge("hover:[paint-order:markers] hover:[paint-order:normal]"),
        "hover:[paint-order:normal]"
    );
    assert_eq!(
        merge("hover:[paint-order:markers] focus:[paint-order:normal]"),
        "hover:[paint-order:markers] focus:[paint-order:normal]"
    );
}

// ═══════════════════════════════════════════════════════════════════
// IMPORTANT MARKER
// ═══════════════════════════════════════════════════════════════════

#[test]
fn important_classes_conflict_among_themselves() {
    assert_eq!(merge("px-2! px-4!"), "px-4!");
    assert_eq!(merge("hover:px-2! hover:px-4!"), "hover:px-4!");
}

#[test]
fn important_and_plain_classes_are_independent() {
    assert_eq!(merge("px-2! px-4"), "px-2! px-4");
    assert_eq!(merge("px-2 px-4!"), "px-2 px-4!");
}

#[test]
fn leading_and_trailing_markers_are_equivalent() {
    assert_eq!(merge("!px-2 px-4!"), "px-4!");
    assert_eq!(merge("px-2! !px-4"), "!px-4");
}

#[test]
fn important_postfix_combination() {
    assert_eq!(merge("text-lg/7! text-lg/8!"), "text-lg/8!");
    assert_eq!(merge("leading-9! text-lg/none!"), "text-lg/none!");
    assert_eq!(merge("leading-9 text-lg/none!"), "leading-9 text-lg/none!");
}
