//! The default class-group table, theme scales and conflict declarations.

use rustc_hash::FxHashMap;

use crate::config::{ClassDef, Config};
use crate::theme::Theme;
use crate::validators::Validator;

/// Default bound of the input→output cache.
pub const DEFAULT_CACHE_SIZE: usize = 500;

fn l(path: &str) -> ClassDef {
    ClassDef::lit(path)
}

fn v(validator: Validator) -> ClassDef {
    ClassDef::Validator(validator)
}

fn t(key: &str) -> ClassDef {
    ClassDef::theme(key)
}

fn b(key: &str, defs: Vec<ClassDef>) -> ClassDef {
    ClassDef::branch(key, defs)
}

fn lits(names: &[&str]) -> Vec<ClassDef> {
    names.iter().map(|n| ClassDef::lit(*n)).collect()
}

const COLOR_FAMILIES: [&str; 22] = [
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

const COLOR_SHADES: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

fn color_scale() -> Vec<ClassDef> {
    let mut defs = lits(&["inherit", "current", "transparent", "black", "white"]);
    for family in COLOR_FAMILIES {
        defs.push(ClassDef::Branch(vec![(
            family.to_string(),
            COLOR_SHADES.iter().map(|s| ClassDef::lit(*s)).collect(),
        )]));
    }
    defs.push(v(Validator::ArbitraryValue));
    defs.push(v(Validator::ArbitraryVariable));
    defs
}

/// Spacing values that cannot be confused with keywords: arbitrary values,
/// variables, the one-pixel step and the numeric spacing scale.
fn spacing_scale() -> Vec<ClassDef> {
    vec![
        v(Validator::ArbitraryVariable),
        v(Validator::ArbitraryValue),
        l("px"),
        t("spacing"),
    ]
}

fn inset_scale() -> Vec<ClassDef> {
    let mut defs = vec![v(Validator::Fraction), l("auto"), l("full")];
    defs.extend(spacing_scale());
    defs
}

fn sizing_scale() -> Vec<ClassDef> {
    let mut defs = vec![
        l("auto"),
        l("full"),
        l("screen"),
        l("min"),
        l("max"),
        l("fit"),
        v(Validator::Fraction),
    ];
    defs.extend(spacing_scale());
    defs
}

fn margin_scale() -> Vec<ClassDef> {
    let mut defs = vec![l("auto")];
    defs.extend(spacing_scale());
    defs
}

fn rounded_scale() -> Vec<ClassDef> {
    vec![
        l("none"),
        l("full"),
        t("radius"),
        v(Validator::ArbitraryValue),
        v(Validator::ArbitraryVariable),
    ]
}

fn border_width_scale() -> Vec<ClassDef> {
    vec![
        l(""),
        v(Validator::Number),
        v(Validator::ArbitraryLength),
        v(Validator::ArbitraryVariableLength),
    ]
}

fn grid_line_scale() -> Vec<ClassDef> {
    vec![
        v(Validator::Integer),
        l("auto"),
        v(Validator::ArbitraryValue),
        v(Validator::ArbitraryVariable),
    ]
}

fn grid_span_scale() -> Vec<ClassDef> {
    vec![
        l("auto"),
        b(
            "span",
            vec![
                l("full"),
                v(Validator::Integer),
                v(Validator::ArbitraryValue),
                v(Validator::ArbitraryVariable),
            ],
        ),
        v(Validator::Integer),
        v(Validator::ArbitraryValue),
        v(Validator::ArbitraryVariable),
    ]
}

fn default_theme() -> Theme {
    let mut theme = Theme::new();
    theme.set("spacing", vec![v(Validator::Number)]);
    theme.set("color", color_scale());
    theme.set("radius", vec![v(Validator::TshirtSize)]);
    theme.set("shadow", vec![v(Validator::TshirtSize)]);
    theme.set("blur", vec![v(Validator::TshirtSize)]);
    theme.set("text", vec![v(Validator::TshirtSize)]);
    theme.set(
        "leading",
        lits(&["none", "tight", "snug", "normal", "relaxed", "loose"]),
    );
    theme.set(
        "font-weight",
        lits(&[
            "thin",
            "extralight",
            "light",
            "normal",
            "medium",
            "semibold",
            "bold",
            "extrabold",
            "black",
        ]),
    );
    theme.set("font", lits(&["sans", "serif", "mono"]));
    theme
}

fn default_class_groups() -> Vec<(String, Vec<ClassDef>)> {
    let groups: Vec<(&str, Vec<ClassDef>)> = vec![
        // Layout
        (
            "aspect",
            vec![b(
                "aspect",
                vec![
                    l("auto"),
                    l("square"),
                    l("video"),
                    v(Validator::Fraction),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        ("container", vec![l("container")]),
        (
            "columns",
            vec![b(
                "columns",
                vec![
                    v(Validator::Integer),
                    v(Validator::TshirtSize),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        (
            "break-after",
            vec![b(
                "break-after",
                lits(&["auto", "avoid", "all", "avoid-page", "page", "left", "right", "column"]),
            )],
        ),
        (
            "break-before",
            vec![b(
                "break-before",
                lits(&["auto", "avoid", "all", "avoid-page", "page", "left", "right", "column"]),
            )],
        ),
        (
            "break-inside",
            vec![b(
                "break-inside",
                lits(&["auto", "avoid", "avoid-page", "avoid-column"]),
            )],
        ),
        ("box", vec![b("box", lits(&["border", "content"]))]),
        (
            "display",
            lits(&[
                "block",
                "inline-block",
                "inline",
                "flex",
                "inline-flex",
                "table",
                "inline-table",
                "table-caption",
                "table-cell",
                "table-column",
                "table-column-group",
                "table-footer-group",
                "table-header-group",
                "table-row-group",
                "table-row",
                "flow-root",
                "grid",
                "inline-grid",
                "contents",
                "list-item",
                "hidden",
            ]),
        ),
        (
            "float",
            vec![b("float", lits(&["right", "left", "none", "start", "end"]))],
        ),
        (
            "clear",
            vec![b("clear", lits(&["left", "right", "both", "none", "start", "end"]))],
        ),
        (
            "isolation",
            vec![l("isolate"), b("isolation", vec![l("auto")])],
        ),
        (
            "object-fit",
            vec![b("object", lits(&["contain", "cover", "fill", "none", "scale-down"]))],
        ),
        (
            "object-position",
            vec![b(
                "object",
                vec![
                    l("top"),
                    l("bottom"),
                    l("center"),
                    l("left"),
                    l("right"),
                    l("left-top"),
                    l("left-bottom"),
                    l("right-top"),
                    l("right-bottom"),
                    v(Validator::ArbitraryPosition),
                    v(Validator::ArbitraryVariablePosition),
                ],
            )],
        ),
        (
            "overflow",
            vec![b("overflow", lits(&["auto", "hidden", "clip", "visible", "scroll"]))],
        ),
        (
            "overflow-x",
            vec![b("overflow-x", lits(&["auto", "hidden", "clip", "visible", "scroll"]))],
        ),
        (
            "overflow-y",
            vec![b("overflow-y", lits(&["auto", "hidden", "clip", "visible", "scroll"]))],
        ),
        (
            "position",
            lits(&["static", "fixed", "absolute", "relative", "sticky"]),
        ),
        ("inset", vec![b("inset", inset_scale())]),
        ("inset-x", vec![b("inset-x", inset_scale())]),
        ("inset-y", vec![b("inset-y", inset_scale())]),
        ("start", vec![b("start", inset_scale())]),
        ("end", vec![b("end", inset_scale())]),
        ("top", vec![b("top", inset_scale())]),
        ("right", vec![b("right", inset_scale())]),
        ("bottom", vec![b("bottom", inset_scale())]),
        ("left", vec![b("left", inset_scale())]),
        (
            "visibility",
            lits(&["visible", "invisible", "collapse"]),
        ),
        (
            "z",
            vec![b(
                "z",
                vec![
                    v(Validator::Integer),
                    l("auto"),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        // Flexbox & grid
        (
            "basis",
            vec![b("basis", {
                let mut defs = vec![v(Validator::Fraction), l("full"), l("auto")];
                defs.extend(spacing_scale());
                defs
            })],
        ),
        (
            "flex-direction",
            vec![b("flex", lits(&["row", "row-reverse", "col", "col-reverse"]))],
        ),
        (
            "flex-wrap",
            vec![b("flex", lits(&["wrap", "wrap-reverse", "nowrap"]))],
        ),
        (
            "flex",
            vec![b(
                "flex",
                vec![
                    v(Validator::Number),
                    v(Validator::Fraction),
                    l("auto"),
                    l("initial"),
                    l("none"),
                    v(Validator::ArbitraryValue),
                ],
            )],
        ),
        (
            "grow",
            vec![b(
                "grow",
                vec![
                    l(""),
                    v(Validator::Number),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        (
            "shrink",
            vec![b(
                "shrink",
                vec![
                    l(""),
                    v(Validator::Number),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        (
            "order",
            vec![b(
                "order",
                vec![
                    v(Validator::Integer),
                    l("first"),
                    l("last"),
                    l("none"),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        (
            "grid-cols",
            vec![b(
                "grid-cols",
                vec![
                    v(Validator::Integer),
                    l("none"),
                    l("subgrid"),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        ("col", vec![b("col", grid_span_scale())]),
        ("col-start", vec![b("col-start", grid_line_scale())]),
        ("col-end", vec![b("col-end", grid_line_scale())]),
        (
            "grid-rows",
            vec![b(
                "grid-rows",
                vec![
                    v(Validator::Integer),
                    l("none"),
                    l("subgrid"),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        ("row", vec![b("row", grid_span_scale())]),
        ("row-start", vec![b("row-start", grid_line_scale())]),
        ("row-end", vec![b("row-end", grid_line_scale())]),
        (
            "grid-flow",
            vec![b("grid-flow", lits(&["row", "col", "dense", "row-dense", "col-dense"]))],
        ),
        (
            "auto-cols",
            vec![b(
                "auto-cols",
                vec![
                    l("auto"),
                    l("min"),
                    l("max"),
                    l("fr"),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        (
            "auto-rows",
            vec![b(
                "auto-rows",
                vec![
                    l("auto"),
                    l("min"),
                    l("max"),
                    l("fr"),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        ("gap", vec![b("gap", spacing_scale())]),
        ("gap-x", vec![b("gap-x", spacing_scale())]),
        ("gap-y", vec![b("gap-y", spacing_scale())]),
        (
            "justify-content",
            vec![b(
                "justify",
                vec![
                    l("normal"),
                    l("start"),
                    l("end"),
                    l("center"),
                    l("between"),
                    l("around"),
                    l("evenly"),
                    l("stretch"),
                    l("baseline"),
                ],
            )],
        ),
        (
            "justify-items",
            vec![b("justify-items", lits(&["start", "end", "center", "stretch", "normal"]))],
        ),
        (
            "justify-self",
            vec![b("justify-self", lits(&["auto", "start", "end", "center", "stretch"]))],
        ),
        (
            "align-content",
            vec![b(
                "content",
                lits(&[
                    "normal", "start", "end", "center", "between", "around", "evenly", "stretch",
                    "baseline",
                ]),
            )],
        ),
        (
            "align-items",
            vec![b("items", lits(&["start", "end", "center", "baseline", "stretch"]))],
        ),
        (
            "align-self",
            vec![b("self", lits(&["auto", "start", "end", "center", "stretch", "baseline"]))],
        ),
        (
            "place-content",
            vec![b(
                "place-content",
                lits(&["start", "end", "center", "between", "around", "evenly", "stretch", "baseline"]),
            )],
        ),
        (
            "place-items",
            vec![b("place-items", lits(&["start", "end", "center", "baseline", "stretch"]))],
        ),
        (
            "place-self",
            vec![b("place-self", lits(&["auto", "start", "end", "center", "stretch"]))],
        ),
        // Spacing
        ("p", vec![b("p", spacing_scale())]),
        ("px", vec![b("px", spacing_scale())]),
        ("py", vec![b("py", spacing_scale())]),
        ("ps", vec![b("ps", spacing_scale())]),
        ("pe", vec![b("pe", spacing_scale())]),
        ("pt", vec![b("pt", spacing_scale())]),
        ("pr", vec![b("pr", spacing_scale())]),
        ("pb", vec![b("pb", spacing_scale())]),
        ("pl", vec![b("pl", spacing_scale())]),
        ("m", vec![b("m", margin_scale())]),
        ("mx", vec![b("mx", margin_scale())]),
        ("my", vec![b("my", margin_scale())]),
        ("ms", vec![b("ms", margin_scale())]),
        ("me", vec![b("me", margin_scale())]),
        ("mt", vec![b("mt", margin_scale())]),
        ("mr", vec![b("mr", margin_scale())]),
        ("mb", vec![b("mb", margin_scale())]),
        ("ml", vec![b("ml", margin_scale())]),
        ("space-x", vec![b("space-x", spacing_scale())]),
        ("space-x-reverse", vec![l("space-x-reverse")]),
        ("space-y", vec![b("space-y", spacing_scale())]),
        ("space-y-reverse", vec![l("space-y-reverse")]),
        // Sizing
        (
            "size",
            vec![b("size", {
                let mut defs = vec![l("auto"), l("full"), l("min"), l("max"), l("fit"), v(Validator::Fraction)];
                defs.extend(spacing_scale());
                defs
            })],
        ),
        ("w", vec![b("w", sizing_scale())]),
        (
            "min-w",
            vec![b("min-w", {
                let mut defs = vec![l("auto"), l("full"), l("min"), l("max"), l("fit")];
                defs.extend(spacing_scale());
                defs
            })],
        ),
        (
            "max-w",
            vec![b("max-w", {
                let mut defs = vec![
                    l("none"),
                    l("full"),
                    l("min"),
                    l("max"),
                    l("fit"),
                    l("prose"),
                    v(Validator::TshirtSize),
                    b("screen", vec![v(Validator::TshirtSize)]),
                ];
                defs.extend(spacing_scale());
                defs
            })],
        ),
        ("h", vec![b("h", sizing_scale())]),
        (
            "min-h",
            vec![b("min-h", {
                let mut defs = vec![l("auto"), l("full"), l("screen"), l("min"), l("max"), l("fit")];
                defs.extend(spacing_scale());
                defs
            })],
        ),
        (
            "max-h",
            vec![b("max-h", {
                let mut defs = vec![l("none"), l("full"), l("screen"), l("min"), l("max"), l("fit")];
                defs.extend(spacing_scale());
                defs
            })],
        ),
        // Typography
        (
            "font-size",
            vec![b(
                "text",
                vec![
                    l("base"),
                    t("text"),
                    v(Validator::ArbitraryLength),
                    v(Validator::ArbitraryVariableLength),
                ],
            )],
        ),
        (
            "font-smoothing",
            vec![l("antialiased"), l("subpixel-antialiased")],
        ),
        ("font-style", vec![l("italic"), l("not-italic")]),
        (
            "font-weight",
            vec![b("font", vec![t("font-weight"), v(Validator::ArbitraryNumber)])],
        ),
        (
            "font-family",
            vec![b(
                "font",
                vec![
                    t("font"),
                    v(Validator::ArbitraryFamilyName),
                    v(Validator::ArbitraryVariableFamilyName),
                    v(Validator::ArbitraryValue),
                ],
            )],
        ),
        (
            "tracking",
            vec![b(
                "tracking",
                vec![
                    l("tighter"),
                    l("tight"),
                    l("normal"),
                    l("wide"),
                    l("wider"),
                    l("widest"),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        (
            "line-clamp",
            vec![b(
                "line-clamp",
                vec![
                    v(Validator::Integer),
                    l("none"),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        (
            "leading",
            vec![b("leading", {
                let mut defs = vec![t("leading")];
                defs.extend(spacing_scale());
                defs
            })],
        ),
        (
            "list-style-position",
            vec![b("list", lits(&["inside", "outside"]))],
        ),
        (
            "list-style-type",
            vec![b(
                "list",
                vec![
                    l("none"),
                    l("disc"),
                    l("decimal"),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        (
            "text-alignment",
            vec![b("text", lits(&["left", "center", "right", "justify", "start", "end"]))],
        ),
        ("text-color", vec![b("text", vec![t("color")])]),
        (
            "text-decoration",
            vec![l("underline"), l("overline"), l("line-through"), l("no-underline")],
        ),
        (
            "text-decoration-style",
            vec![b("decoration", lits(&["solid", "dashed", "dotted", "double", "wavy"]))],
        ),
        ("text-decoration-color", vec![b("decoration", vec![t("color")])]),
        (
            "underline-offset",
            vec![b(
                "underline-offset",
                vec![v(Validator::Number), l("auto"), v(Validator::ArbitraryValue)],
            )],
        ),
        (
            "text-transform",
            vec![l("uppercase"), l("lowercase"), l("capitalize"), l("normal-case")],
        ),
        (
            "text-overflow",
            vec![l("truncate"), b("text", vec![l("ellipsis"), l("clip")])],
        ),
        (
            "text-wrap",
            vec![b("text", lits(&["wrap", "nowrap", "balance", "pretty"]))],
        ),
        ("indent", vec![b("indent", spacing_scale())]),
        (
            "vertical-align",
            vec![b(
                "align",
                vec![
                    l("baseline"),
                    l("top"),
                    l("middle"),
                    l("bottom"),
                    l("text-top"),
                    l("text-bottom"),
                    l("sub"),
                    l("super"),
                    v(Validator::ArbitraryValue),
                ],
            )],
        ),
        (
            "whitespace",
            vec![b(
                "whitespace",
                lits(&["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"]),
            )],
        ),
        (
            "break",
            vec![b("break", lits(&["normal", "words", "all", "keep"]))],
        ),
        ("hyphens", vec![b("hyphens", lits(&["none", "manual", "auto"]))]),
        (
            "content",
            vec![b(
                "content",
                vec![l("none"), v(Validator::ArbitraryValue), v(Validator::ArbitraryVariable)],
            )],
        ),
        // Backgrounds
        (
            "bg-attachment",
            vec![b("bg", lits(&["fixed", "local", "scroll"]))],
        ),
        (
            "bg-clip",
            vec![b("bg-clip", lits(&["border", "padding", "content", "text"]))],
        ),
        (
            "bg-origin",
            vec![b("bg-origin", lits(&["border", "padding", "content"]))],
        ),
        (
            "bg-position",
            vec![b(
                "bg",
                vec![
                    l("top"),
                    l("bottom"),
                    l("center"),
                    l("left"),
                    l("right"),
                    l("left-top"),
                    l("left-bottom"),
                    l("right-top"),
                    l("right-bottom"),
                    v(Validator::ArbitraryPosition),
                    v(Validator::ArbitraryVariablePosition),
                ],
            )],
        ),
        (
            "bg-repeat",
            vec![b(
                "bg",
                vec![
                    l("repeat"),
                    l("no-repeat"),
                    b("repeat", lits(&["x", "y", "round", "space"])),
                ],
            )],
        ),
        (
            "bg-size",
            vec![b(
                "bg",
                vec![
                    l("auto"),
                    l("cover"),
                    l("contain"),
                    v(Validator::ArbitrarySize),
                    v(Validator::ArbitraryVariableSize),
                ],
            )],
        ),
        (
            "bg-image",
            vec![b(
                "bg",
                vec![
                    l("none"),
                    b("gradient-to", lits(&["t", "tr", "r", "br", "b", "bl", "l", "tl"])),
                    v(Validator::ArbitraryImage),
                    v(Validator::ArbitraryVariableImage),
                ],
            )],
        ),
        ("bg-color", vec![b("bg", vec![t("color")])]),
        (
            "gradient-from-pos",
            vec![b("from", vec![v(Validator::Percent), v(Validator::ArbitraryLength)])],
        ),
        ("gradient-from", vec![b("from", vec![t("color")])]),
        (
            "gradient-via-pos",
            vec![b("via", vec![v(Validator::Percent), v(Validator::ArbitraryLength)])],
        ),
        ("gradient-via", vec![b("via", vec![t("color")])]),
        (
            "gradient-to-pos",
            vec![b("to", vec![v(Validator::Percent), v(Validator::ArbitraryLength)])],
        ),
        ("gradient-to", vec![b("to", vec![t("color")])]),
        // Borders
        ("rounded", vec![b("rounded", rounded_scale())]),
        ("rounded-t", vec![b("rounded-t", rounded_scale())]),
        ("rounded-r", vec![b("rounded-r", rounded_scale())]),
        ("rounded-b", vec![b("rounded-b", rounded_scale())]),
        ("rounded-l", vec![b("rounded-l", rounded_scale())]),
        ("rounded-tl", vec![b("rounded-tl", rounded_scale())]),
        ("rounded-tr", vec![b("rounded-tr", rounded_scale())]),
        ("rounded-br", vec![b("rounded-br", rounded_scale())]),
        ("rounded-bl", vec![b("rounded-bl", rounded_scale())]),
        ("border-w", vec![b("border", border_width_scale())]),
        ("border-w-x", vec![b("border-x", border_width_scale())]),
        ("border-w-y", vec![b("border-y", border_width_scale())]),
        ("border-w-t", vec![b("border-t", border_width_scale())]),
        ("border-w-r", vec![b("border-r", border_width_scale())]),
        ("border-w-b", vec![b("border-b", border_width_scale())]),
        ("border-w-l", vec![b("border-l", border_width_scale())]),
        (
            "border-style",
            vec![b("border", lits(&["solid", "dashed", "dotted", "double", "hidden", "none"]))],
        ),
        ("divide-x", vec![b("divide-x", border_width_scale())]),
        ("divide-y", vec![b("divide-y", border_width_scale())]),
        (
            "divide-style",
            vec![b("divide", lits(&["solid", "dashed", "dotted", "double", "none"]))],
        ),
        ("border-color", vec![b("border", vec![t("color")])]),
        ("divide-color", vec![b("divide", vec![t("color")])]),
        (
            "outline-style",
            vec![
                l("outline"),
                b("outline", lits(&["solid", "dashed", "dotted", "double", "none", "hidden"])),
            ],
        ),
        (
            "outline-w",
            vec![b(
                "outline",
                vec![v(Validator::Number), v(Validator::ArbitraryLength), v(Validator::ArbitraryVariableLength)],
            )],
        ),
        (
            "outline-offset",
            vec![b("outline-offset", vec![v(Validator::Number), v(Validator::ArbitraryValue)])],
        ),
        ("outline-color", vec![b("outline", vec![t("color")])]),
        (
            "ring-w",
            vec![b("ring", vec![l(""), v(Validator::Number), v(Validator::ArbitraryLength)])],
        ),
        ("ring-w-inset", vec![l("ring-inset")]),
        (
            "ring-offset-w",
            vec![b("ring-offset", vec![v(Validator::Number), v(Validator::ArbitraryLength)])],
        ),
        ("ring-color", vec![b("ring", vec![t("color")])]),
        // Effects
        (
            "shadow",
            vec![b(
                "shadow",
                vec![
                    l(""),
                    l("none"),
                    l("inner"),
                    t("shadow"),
                    v(Validator::ArbitraryShadow),
                    v(Validator::ArbitraryVariableShadow),
                ],
            )],
        ),
        ("shadow-color", vec![b("shadow", vec![t("color")])]),
        (
            "opacity",
            vec![b(
                "opacity",
                vec![v(Validator::Number), v(Validator::ArbitraryValue), v(Validator::ArbitraryVariable)],
            )],
        ),
        (
            "mix-blend",
            vec![b(
                "mix-blend",
                lits(&[
                    "normal",
                    "multiply",
                    "screen",
                    "overlay",
                    "darken",
                    "lighten",
                    "color-dodge",
                    "color-burn",
                    "hard-light",
                    "soft-light",
                    "difference",
                    "exclusion",
                    "hue",
                    "saturation",
                    "color",
                    "luminosity",
                    "plus-lighter",
                ]),
            )],
        ),
        (
            "bg-blend",
            vec![b(
                "bg-blend",
                lits(&["normal", "multiply", "screen", "overlay", "darken", "lighten"]),
            )],
        ),
        // Filters
        (
            "blur",
            vec![b(
                "blur",
                vec![
                    l(""),
                    l("none"),
                    t("blur"),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        (
            "brightness",
            vec![b("brightness", vec![v(Validator::Number), v(Validator::ArbitraryValue)])],
        ),
        (
            "contrast",
            vec![b("contrast", vec![v(Validator::Number), v(Validator::ArbitraryValue)])],
        ),
        (
            "drop-shadow",
            vec![b(
                "drop-shadow",
                vec![l(""), l("none"), v(Validator::TshirtSize), v(Validator::ArbitraryValue)],
            )],
        ),
        (
            "grayscale",
            vec![b("grayscale", vec![l(""), v(Validator::Number), v(Validator::ArbitraryValue)])],
        ),
        (
            "invert",
            vec![b("invert", vec![l(""), v(Validator::Number), v(Validator::ArbitraryValue)])],
        ),
        (
            "saturate",
            vec![b("saturate", vec![v(Validator::Number), v(Validator::ArbitraryValue)])],
        ),
        (
            "sepia",
            vec![b("sepia", vec![l(""), v(Validator::Number), v(Validator::ArbitraryValue)])],
        ),
        // Tables
        (
            "border-collapse",
            vec![b("border", lits(&["collapse", "separate"]))],
        ),
        ("table-layout", vec![b("table", lits(&["auto", "fixed"]))]),
        ("caption", vec![b("caption", lits(&["top", "bottom"]))]),
        // Transitions & animation
        (
            "transition",
            vec![b(
                "transition",
                vec![
                    l(""),
                    l("all"),
                    l("colors"),
                    l("opacity"),
                    l("shadow"),
                    l("transform"),
                    l("none"),
                    v(Validator::ArbitraryValue),
                ],
            )],
        ),
        (
            "duration",
            vec![b(
                "duration",
                vec![v(Validator::Number), l("initial"), v(Validator::ArbitraryValue)],
            )],
        ),
        (
            "ease",
            vec![b(
                "ease",
                vec![
                    l("linear"),
                    l("in"),
                    l("out"),
                    l("in-out"),
                    l("initial"),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        (
            "delay",
            vec![b("delay", vec![v(Validator::Number), v(Validator::ArbitraryValue)])],
        ),
        (
            "animate",
            vec![b(
                "animate",
                vec![
                    l("none"),
                    l("spin"),
                    l("ping"),
                    l("pulse"),
                    l("bounce"),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        // Transforms
        (
            "scale",
            vec![b(
                "scale",
                vec![l("none"), v(Validator::Number), v(Validator::ArbitraryValue), v(Validator::ArbitraryVariable)],
            )],
        ),
        (
            "scale-x",
            vec![b("scale-x", vec![v(Validator::Number), v(Validator::ArbitraryValue)])],
        ),
        (
            "scale-y",
            vec![b("scale-y", vec![v(Validator::Number), v(Validator::ArbitraryValue)])],
        ),
        (
            "rotate",
            vec![b(
                "rotate",
                vec![l("none"), v(Validator::Number), v(Validator::ArbitraryValue), v(Validator::ArbitraryVariable)],
            )],
        ),
        (
            "translate",
            vec![b("translate", {
                let mut defs = vec![v(Validator::Fraction), l("full"), l("none")];
                defs.extend(spacing_scale());
                defs
            })],
        ),
        (
            "translate-x",
            vec![b("translate-x", {
                let mut defs = vec![v(Validator::Fraction), l("full")];
                defs.extend(spacing_scale());
                defs
            })],
        ),
        (
            "translate-y",
            vec![b("translate-y", {
                let mut defs = vec![v(Validator::Fraction), l("full")];
                defs.extend(spacing_scale());
                defs
            })],
        ),
        (
            "skew-x",
            vec![b("skew-x", vec![v(Validator::Number), v(Validator::ArbitraryValue)])],
        ),
        (
            "skew-y",
            vec![b("skew-y", vec![v(Validator::Number), v(Validator::ArbitraryValue)])],
        ),
        (
            "transform",
            vec![b("transform", vec![l("none"), l("gpu"), l("cpu"), v(Validator::ArbitraryValue)])],
        ),
        (
            "origin",
            vec![b(
                "origin",
                vec![
                    l("center"),
                    l("top"),
                    l("top-right"),
                    l("right"),
                    l("bottom-right"),
                    l("bottom"),
                    l("bottom-left"),
                    l("left"),
                    l("top-left"),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        // Interactivity
        ("accent", vec![b("accent", vec![l("auto"), t("color")])]),
        ("appearance", vec![b("appearance", lits(&["none", "auto"]))]),
        (
            "cursor",
            vec![b(
                "cursor",
                vec![
                    l("auto"),
                    l("default"),
                    l("pointer"),
                    l("wait"),
                    l("text"),
                    l("move"),
                    l("help"),
                    l("not-allowed"),
                    l("none"),
                    l("progress"),
                    l("cell"),
                    l("crosshair"),
                    l("grab"),
                    l("grabbing"),
                    l("zoom-in"),
                    l("zoom-out"),
                    v(Validator::ArbitraryValue),
                    v(Validator::ArbitraryVariable),
                ],
            )],
        ),
        ("caret-color", vec![b("caret", vec![t("color")])]),
        (
            "pointer-events",
            vec![b("pointer-events", lits(&["none", "auto"]))],
        ),
        (
            "resize",
            vec![l("resize"), b("resize", lits(&["none", "x", "y"]))],
        ),
        (
            "scroll-behavior",
            vec![b("scroll", lits(&["auto", "smooth"]))],
        ),
        ("scroll-m", vec![b("scroll-m", spacing_scale())]),
        ("scroll-p", vec![b("scroll-p", spacing_scale())]),
        ("touch", vec![b("touch", lits(&["auto", "none", "manipulation"]))]),
        ("select", vec![b("select", lits(&["none", "text", "all", "auto"]))]),
        (
            "will-change",
            vec![b(
                "will-change",
                vec![l("auto"), l("scroll"), l("contents"), l("transform"), v(Validator::ArbitraryValue)],
            )],
        ),
        // SVG
        ("fill", vec![b("fill", vec![l("none"), t("color")])]),
        (
            "stroke-w",
            vec![b(
                "stroke",
                vec![v(Validator::Number), v(Validator::ArbitraryLength), v(Validator::ArbitraryNumber)],
            )],
        ),
        ("stroke", vec![b("stroke", vec![l("none"), t("color")])]),
        // Accessibility
        ("sr", vec![l("sr-only"), l("not-sr-only")]),
        (
            "forced-color-adjust",
            vec![b("forced-color-adjust", lits(&["auto", "none"]))],
        ),
    ];

    groups
        .into_iter()
        .map(|(id, defs)| (id.to_string(), defs))
        .collect()
}

fn default_conflicts() -> FxHashMap<String, Vec<String>> {
    let table: &[(&str, &[&str])] = &[
        ("overflow", &["overflow-x", "overflow-y"]),
        (
            "inset",
            &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
        ),
        ("inset-x", &["right", "left"]),
        ("inset-y", &["top", "bottom"]),
        ("flex", &["basis", "grow", "shrink"]),
        ("gap", &["gap-x", "gap-y"]),
        ("col", &["col-start", "col-end"]),
        ("row", &["row-start", "row-end"]),
        ("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]),
        ("px", &["pr", "pl"]),
        ("py", &["pt", "pb"]),
        ("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]),
        ("mx", &["mr", "ml"]),
        ("my", &["mt", "mb"]),
        ("size", &["w", "h"]),
        ("line-clamp", &["display", "overflow"]),
        (
            "rounded",
            &[
                "rounded-t",
                "rounded-r",
                "rounded-b",
                "rounded-l",
                "rounded-tl",
                "rounded-tr",
                "rounded-br",
                "rounded-bl",
            ],
        ),
        ("rounded-t", &["rounded-tl", "rounded-tr"]),
        ("rounded-r", &["rounded-tr", "rounded-br"]),
        ("rounded-b", &["rounded-br", "rounded-bl"]),
        ("rounded-l", &["rounded-tl", "rounded-bl"]),
        (
            "border-w",
            &["border-w-x", "border-w-y", "border-w-t", "border-w-r", "border-w-b", "border-w-l"],
        ),
        ("border-w-x", &["border-w-r", "border-w-l"]),
        ("border-w-y", &["border-w-t", "border-w-b"]),
        ("scale", &["scale-x", "scale-y"]),
        ("translate", &["translate-x", "translate-y"]),
    ];

    table
        .iter()
        .map(|(id, displaced)| {
            (
                id.to_string(),
                displaced.iter().map(|d| d.to_string()).collect(),
            )
        })
        .collect()
}

fn default_postfix_conflicts() -> FxHashMap<String, Vec<String>> {
    let mut table = FxHashMap::default();
    table.insert("font-size".to_string(), vec!["leading".to_string()]);
    table
}

fn default_order_sensitive_modifiers() -> Vec<String> {
    [
        "*",
        "**",
        "after",
        "backdrop",
        "before",
        "details-content",
        "file",
        "first-letter",
        "first-line",
        "marker",
        "placeholder",
        "selection",
    ]
    .iter()
    .map(|m| m.to_string())
    .collect()
}

/// The default configuration: a production-grade class-group table with
/// theme scales, conflict declarations and a bounded cache.
pub fn default_config() -> Config {
    Config {
        cache_size: DEFAULT_CACHE_SIZE,
        prefix: None,
        theme: default_theme(),
        class_groups: default_class_groups(),
        conflicting_class_groups: default_conflicts(),
        conflicting_class_group_modifiers: default_postfix_conflicts(),
        order_sensitive_modifiers: default_order_sensitive_modifiers(),
        experimental_parse_class_name: None,
    }
}
