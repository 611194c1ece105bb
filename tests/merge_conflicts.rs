//! End-to-end conflict resolution against the default configuration.

use twmerge::merge;

// ═══════════════════════════════════════════════════════════════════
// SAME-GROUP CONFLICTS
// ═══════════════════════════════════════════════════════════════════

#[test]
fn later_class_wins_within_a_group() {
    assert_eq!(merge("px-2 px-4"), "px-4");
    assert_eq!(merge("block flex"), "flex");
    assert_eq!(merge("bg-red-500 bg-blue-500"), "bg-blue-500");
    assert_eq!(merge("text-red-500 text-blue-500"), "text-blue-500");
}

#[test]
fn unrelated_groups_coexist() {
    assert_eq!(merge("pt-2 pt-4 pb-3"), "pt-4 pb-3");
    assert_eq!(merge("text-red-500 text-lg"), "text-red-500 text-lg");
    assert_eq!(
        merge("flex items-center justify-center p-4"),
        "flex items-center justify-center p-4"
    );
}

#[test]
fn survivors_keep_last_occurrence_order() {
    assert_eq!(merge("px-2 py-1 px-4"), "py-1 px-4");
    assert_eq!(merge("block px-2 flex px-4"), "flex px-4");
}

// ═══════════════════════════════════════════════════════════════════
// CROSS-GROUP CONFLICTS
// ═══════════════════════════════════════════════════════════════════

#[test]
fn broader_group_displaces_narrower() {
    assert_eq!(merge("inset-x-1 inset-1"), "inset-1");
    assert_eq!(merge("px-2 p-4"), "p-4");
    assert_eq!(merge("mt-4 mb-2 m-1"), "m-1");
    assert_eq!(merge("w-4 h-4 size-8"), "size-8");
}

#[test]
fn narrower_group_refines_broader() {
    assert_eq!(merge("inset-1 inset-x-1"), "inset-1 inset-x-1");
    assert_eq!(merge("p-4 px-2"), "p-4 px-2");
    assert_eq!(merge("size-8 w-4"), "size-8 w-4");
}

#[test]
fn two_level_displacement_chains() {
    assert_eq!(merge("pl-2 px-4"), "px-4");
    assert_eq!(merge("pl-2 pr-3 px-4 p-8"), "p-8");
    assert_eq!(merge("border-x-2 border-4"), "border-4");
    assert_eq!(merge("rounded-tl-sm rounded-t-md rounded-lg"), "rounded-lg");
}

#[test]
fn line_clamp_displaces_display_and_overflow() {
    assert_eq!(merge("overflow-auto line-clamp-3"), "line-clamp-3");
    assert_eq!(merge("block line-clamp-2"), "line-clamp-2");
}

// ═══════════════════════════════════════════════════════════════════
// VALUE SHAPES
// ═══════════════════════════════════════════════════════════════════

#[test]
fn arbitrary_values_share_their_group() {
    assert_eq!(merge("bg-red-500 bg-[#B91C1C]"), "bg-[#B91C1C]");
    assert_eq!(merge("w-full w-[500px]"), "w-[500px]");
    assert_eq!(merge("text-[12px] text-lg"), "text-lg");
}

#[test]
fn fractions_and_keywords_share_their_group() {
    assert_eq!(merge("w-full w-1/2"), "w-1/2");
    assert_eq!(merge("h-screen h-full"), "h-full");
    assert_eq!(merge("aspect-square aspect-3/4"), "aspect-3/4");
}

#[test]
fn negative_values_conflict_with_positive() {
    assert_eq!(merge("-mt-2 mt-4"), "mt-4");
    assert_eq!(merge("mt-4 -mt-2"), "-mt-2");
}

#[test]
fn bare_and_valued_forms_share_their_group() {
    assert_eq!(merge("border border-2"), "border-2");
    assert_eq!(merge("border-2 border"), "border");
    assert_eq!(merge("shadow shadow-lg"), "shadow-lg");
    assert_eq!(merge("grow grow-0"), "grow-0");
}

// ═══════════════════════════════════════════════════════════════════
// ARBITRARY PROPERTIES
// ═══════════════════════════════════════════════════════════════════

#[test]
fn arbitrary_properties_conflict_per_property() {
    assert_eq!(
        merge("[paint-order:markers] [paint-order:normal]"),
        "[paint-order:normal]"
    );
    assert_eq!(
        merge("[paint-order:markers] [display:none]"),
        "[paint-order:markers] [display:none]"
    );
}

#[test]
fn bracketed_base_without_property_passes_through() {
    assert_eq!(merge("[foo] px-2"), "[foo] px-2");
    assert_eq!(merge("[:value] px-2"), "[:value] px-2");
}

// ═══════════════════════════════════════════════════════════════════
// POSTFIX MODIFIERS
// ═══════════════════════════════════════════════════════════════════

#[test]
fn postfix_values_share_their_group() {
    assert_eq!(merge("text-lg/7 text-lg/8"), "text-lg/8");
    assert_eq!(merge("text-lg/7 text-xl"), "text-xl");
    assert_eq!(merge("text-lg/7 text-lg"), "text-lg");
}

#[test]
fn postfix_activates_the_modifier_conflict_set() {
    assert_eq!(merge("text-lg/none leading-9"), "text-lg/none leading-9");
    assert_eq!(merge("leading-9 text-lg/none"), "text-lg/none");
    assert_eq!(merge("leading-9 text-lg"), "leading-9 text-lg");
}

// ═══════════════════════════════════════════════════════════════════
// UNKNOWN CLASSES
// ═══════════════════════════════════════════════════════════════════

#[test]
fn unknown_classes_pass_through_in_order() {
    assert_eq!(merge("my-custom-class p-4"), "my-custom-class p-4");
    assert_eq!(merge("foo bar p-4 p-2 baz"), "foo bar p-2 baz");
}

#[test]
fn duplicate_unknown_classes_collapse_to_the_later() {
    assert_eq!(merge("foo foo"), "foo");
    assert_eq!(merge("foo bar foo"), "bar foo");
}

#[test]
fn unknown_duplicates_respect_modifier_context() {
    assert_eq!(merge("hover:foo foo"), "hover:foo foo");
    assert_eq!(merge("hover:foo hover:foo"), "hover:foo");
}

#[test]
fn empty_input_merges_to_empty() {
    assert_eq!(merge(""), "");
}
