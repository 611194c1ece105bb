//! Universal invariants of the merge, checked over a corpus of inputs.

use twmerge::merge;

const CORPUS: &[&str] = &[
    "",
    "px-2 px-4",
    "pt-2 pt-4 pb-3",
    "inset-x-1 inset-1",
    "hover:[paint-order:markers] hover:[paint-order:normal]",
    "c:d:e:block d:c:e:inline",
    "*:before:block before:*:inline",
    "text-lg/7 text-lg/8",
    "text-lg/none leading-9",
    "leading-9 text-lg/none",
    "my-custom-class p-4",
    "foo bar p-4 p-2 baz",
    "px-2! px-4",
    "!px-2 px-4!",
    "w-full w-1/2 h-screen",
    "-mt-2 mt-4 mb-1",
    "bg-red-500 bg-[#B91C1C] text-blue-500",
    "flex items-center justify-center p-4 hover:bg-red-500",
    "border border-2 border-dashed border-red-500",
    "rounded-tl-sm rounded-t-md rounded-lg rounded-br-xl",
    "grid grid-cols-3 col-span-2 gap-4 gap-x-2",
];

#[test]
fn merge_is_idempotent() {
    for input in CORPUS {
        let once = merge(*input);
        assert_eq!(merge(once.as_str()), once, "not idempotent for {input:?}");
    }
}

#[test]
fn output_whitespace_is_normalized() {
    for input in CORPUS {
        let merged = merge(*input);
        assert_eq!(merged.trim(), merged, "outer whitespace for {input:?}");
        assert!(!merged.contains("  "), "double space for {input:?}");
    }
    assert_eq!(merge("  px-2   px-4  "), "px-4");
    assert_eq!(merge("px-2\t\n px-4"), "px-4");
}

#[test]
fn survivors_preserve_relative_input_order() {
    for input in CORPUS {
        let merged = merge(*input);
        let inputs: Vec<&str> = input.split_whitespace().collect();
        // Every surviving class occurs in the input, and the sequence of
        // last-occurrence positions is strictly increasing.
        let mut last_position = None;
        for survivor in merged.split_whitespace() {
            let position = inputs.iter().rposition(|c| c == &survivor);
            assert!(position.is_some(), "{survivor:?} not in input {input:?}");
            assert!(
                last_position < position,
                "order not preserved for {input:?}"
            );
            last_position = position;
        }
    }
}

#[test]
fn untouched_inputs_round_trip() {
    let inputs = [
        "flex items-center justify-center",
        "custom-a custom-b custom-c",
        "px-2 py-1 mt-3",
    ];
    for input in inputs {
        assert_eq!(merge(input), input);
    }
}

#[test]
fn single_classes_are_preserved_verbatim() {
    for input in [
        "px-2",
        "hover:focus:px-2",
        "[paint-order:markers]",
        "w-1/2",
        "px-2!",
        "totally-unknown",
    ] {
        assert_eq!(merge(input), input);
    }
}

#[test]
fn important_never_crosses_the_marker_boundary() {
    // No important class may displace a plain one or vice versa.
    assert_eq!(merge("px-2 px-4!"), "px-2 px-4!");
    assert_eq!(merge("px-2! px-4"), "px-2! px-4");
    assert_eq!(merge("hover:px-2! hover:px-4"), "hover:px-2! hover:px-4");
}
