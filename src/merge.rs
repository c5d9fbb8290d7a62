//! Conflict-aware class merging.
//!
//! `merge` flattens its inputs into an ordered token list, classifies each
//! token's de-variantized base form into a conflict category via an
//! ordered pattern table (first match wins), and lets later tokens
//! overwrite earlier ones that share both the category and the ordered
//! variant chain. Tokens matching no category are opaque and only
//! collide with literal duplicates of themselves. Survivors keep the
//! position their conflict key first appeared at.
//!
//! This is a standalone entry point: it needs no configuration and is
//! usable by component code composing class strings at runtime. The
//! variant separator is the default `:`.

use crate::arbitrary::{self, ValueKind};
use crate::variants::split_top_level;
use std::collections::HashMap;

/// Reusable merge handle carrying a memoized classification cache, for
/// hot paths that merge many class lists.
#[derive(Debug, Default)]
pub struct Merger {
    category_cache: HashMap<String, Option<&'static str>>,
}

/// One-shot merge with a fresh classification cache.
pub fn merge(classes: &[&str]) -> String {
    Merger::new().merge(classes)
}

impl Merger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, classes: &[&str]) -> String {
        let mut survivors: Vec<String> = Vec::new();
        let mut slots: HashMap<MergeKey, usize> = HashMap::new();

        for class_list in classes {
            for token in class_list.split_whitespace() {
                let key = self.conflict_key(token);
                match slots.get(&key) {
                    Some(&slot) => survivors[slot] = token.to_string(),
                    None => {
                        slots.insert(key, survivors.len());
                        survivors.push(token.to_string());
                    }
                }
            }
        }

        survivors.join(" ")
    }

    fn conflict_key(&mut self, token: &str) -> MergeKey {
        let mut segments = split_top_level(token, ":");
        let base = segments.pop().unwrap_or_default();
        let category = self.classify(&base);
        match category {
            Some(category) => MergeKey::Category {
                category,
                variants: segments.join(":"),
            },
            None => MergeKey::Opaque(token.to_string()),
        }
    }

    fn classify(&mut self, base: &str) -> Option<&'static str> {
        if let Some(cached) = self.category_cache.get(base) {
            return *cached;
        }
        let category = classify_base(base);
        self.category_cache.insert(base.to_string(), category);
        category
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum MergeKey {
    Category {
        category: &'static str,
        variants: String,
    },
    Opaque(String),
}

enum Matcher {
    /// Exact membership in a fixed identifier set.
    Exact(&'static [&'static str]),
    /// `<prefix><anything>`.
    Prefix(&'static str),
    /// The stem alone, or `<stem>-<anything>`.
    Stem(&'static str),
    /// Value-aware discrimination that a prefix cannot express.
    Fn(fn(&str) -> bool),
}

/// Ordered conflict table: earlier rows claim a base class first, so
/// specific rows (`px-`, `flex-row`) must precede the generic rows that
/// would otherwise swallow them (`p-`, `flex-`).
const CONFLICT_TABLE: &[(&str, Matcher)] = &[
    (
        "display",
        Matcher::Exact(&[
            "block",
            "inline-block",
            "inline",
            "flex",
            "inline-flex",
            "grid",
            "inline-grid",
            "table",
            "table-row",
            "table-cell",
            "contents",
            "flow-root",
            "hidden",
        ]),
    ),
    (
        "position",
        Matcher::Exact(&["static", "fixed", "absolute", "relative", "sticky"]),
    ),
    ("visibility", Matcher::Exact(&["visible", "invisible", "collapse"])),
    ("padding-x", Matcher::Prefix("px-")),
    ("padding-y", Matcher::Prefix("py-")),
    ("padding-top", Matcher::Prefix("pt-")),
    ("padding-right", Matcher::Prefix("pr-")),
    ("padding-bottom", Matcher::Prefix("pb-")),
    ("padding-left", Matcher::Prefix("pl-")),
    ("padding", Matcher::Prefix("p-")),
    ("margin-x", Matcher::Prefix("mx-")),
    ("margin-y", Matcher::Prefix("my-")),
    ("margin-top", Matcher::Prefix("mt-")),
    ("margin-right", Matcher::Prefix("mr-")),
    ("margin-bottom", Matcher::Prefix("mb-")),
    ("margin-left", Matcher::Prefix("ml-")),
    ("margin", Matcher::Prefix("m-")),
    ("min-width", Matcher::Prefix("min-w-")),
    ("max-width", Matcher::Prefix("max-w-")),
    ("min-height", Matcher::Prefix("min-h-")),
    ("max-height", Matcher::Prefix("max-h-")),
    ("size", Matcher::Prefix("size-")),
    ("width", Matcher::Prefix("w-")),
    ("height", Matcher::Prefix("h-")),
    ("gap-x", Matcher::Prefix("gap-x-")),
    ("gap-y", Matcher::Prefix("gap-y-")),
    ("gap", Matcher::Prefix("gap-")),
    ("inset-x", Matcher::Prefix("inset-x-")),
    ("inset-y", Matcher::Prefix("inset-y-")),
    ("inset", Matcher::Prefix("inset-")),
    ("top", Matcher::Prefix("top-")),
    ("right", Matcher::Prefix("right-")),
    ("bottom", Matcher::Prefix("bottom-")),
    ("left", Matcher::Prefix("left-")),
    ("z-index", Matcher::Prefix("z-")),
    (
        "flex-direction",
        Matcher::Exact(&["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"]),
    ),
    (
        "flex-wrap",
        Matcher::Exact(&["flex-wrap", "flex-wrap-reverse", "flex-nowrap"]),
    ),
    ("flex", Matcher::Prefix("flex-")),
    ("flex-grow", Matcher::Stem("grow")),
    ("flex-shrink", Matcher::Stem("shrink")),
    ("order", Matcher::Prefix("order-")),
    ("grid-cols", Matcher::Prefix("grid-cols-")),
    ("grid-rows", Matcher::Prefix("grid-rows-")),
    ("grid-flow", Matcher::Prefix("grid-flow-")),
    ("col-start", Matcher::Prefix("col-start-")),
    ("col-end", Matcher::Prefix("col-end-")),
    ("grid-column", Matcher::Prefix("col-")),
    ("row-start", Matcher::Prefix("row-start-")),
    ("row-end", Matcher::Prefix("row-end-")),
    ("grid-row", Matcher::Prefix("row-")),
    ("align-items", Matcher::Prefix("items-")),
    ("justify-content", Matcher::Prefix("justify-")),
    ("align-content", Matcher::Prefix("content-")),
    ("align-self", Matcher::Prefix("self-")),
    (
        "text-align",
        Matcher::Exact(&[
            "text-left",
            "text-center",
            "text-right",
            "text-justify",
            "text-start",
            "text-end",
        ]),
    ),
    (
        "text-overflow",
        Matcher::Exact(&["truncate", "text-ellipsis", "text-clip"]),
    ),
    ("font-size", Matcher::Fn(is_font_size)),
    ("text-color", Matcher::Prefix("text-")),
    (
        "font-weight",
        Matcher::Exact(&[
            "font-thin",
            "font-extralight",
            "font-light",
            "font-normal",
            "font-medium",
            "font-semibold",
            "font-bold",
            "font-extrabold",
            "font-black",
        ]),
    ),
    ("font-family", Matcher::Exact(&["font-sans", "font-serif", "font-mono"])),
    ("font-style", Matcher::Exact(&["italic", "not-italic"])),
    (
        "text-transform",
        Matcher::Exact(&["uppercase", "lowercase", "capitalize", "normal-case"]),
    ),
    (
        "text-decoration",
        Matcher::Exact(&["underline", "overline", "line-through", "no-underline"]),
    ),
    ("line-height", Matcher::Prefix("leading-")),
    ("letter-spacing", Matcher::Prefix("tracking-")),
    (
        "bg-attachment",
        Matcher::Exact(&["bg-fixed", "bg-local", "bg-scroll"]),
    ),
    (
        "bg-repeat",
        Matcher::Exact(&[
            "bg-repeat",
            "bg-no-repeat",
            "bg-repeat-x",
            "bg-repeat-y",
            "bg-repeat-round",
            "bg-repeat-space",
        ]),
    ),
    ("bg-size", Matcher::Exact(&["bg-auto", "bg-cover", "bg-contain"])),
    (
        "bg-position",
        Matcher::Exact(&[
            "bg-top",
            "bg-bottom",
            "bg-left",
            "bg-right",
            "bg-center",
            "bg-left-top",
            "bg-left-bottom",
            "bg-right-top",
            "bg-right-bottom",
        ]),
    ),
    ("bg-clip", Matcher::Prefix("bg-clip-")),
    ("bg-origin", Matcher::Prefix("bg-origin-")),
    ("bg-color", Matcher::Prefix("bg-")),
    (
        "border-style",
        Matcher::Exact(&[
            "border-solid",
            "border-dashed",
            "border-dotted",
            "border-double",
            "border-none",
        ]),
    ),
    ("border-width-top", Matcher::Fn(is_border_top_width)),
    ("border-width-right", Matcher::Fn(is_border_right_width)),
    ("border-width-bottom", Matcher::Fn(is_border_bottom_width)),
    ("border-width-left", Matcher::Fn(is_border_left_width)),
    ("border-width-x", Matcher::Fn(is_border_x_width)),
    ("border-width-y", Matcher::Fn(is_border_y_width)),
    ("border-width", Matcher::Fn(is_border_width)),
    ("border-color", Matcher::Prefix("border-")),
    ("rounded-tl", Matcher::Stem("rounded-tl")),
    ("rounded-tr", Matcher::Stem("rounded-tr")),
    ("rounded-br", Matcher::Stem("rounded-br")),
    ("rounded-bl", Matcher::Stem("rounded-bl")),
    ("rounded-t", Matcher::Stem("rounded-t")),
    ("rounded-r", Matcher::Stem("rounded-r")),
    ("rounded-b", Matcher::Stem("rounded-b")),
    ("rounded-l", Matcher::Stem("rounded-l")),
    ("rounded", Matcher::Stem("rounded")),
    ("shadow", Matcher::Stem("shadow")),
    ("opacity", Matcher::Prefix("opacity-")),
    ("transition", Matcher::Stem("transition")),
    ("duration", Matcher::Prefix("duration-")),
    ("delay", Matcher::Prefix("delay-")),
    ("ease", Matcher::Prefix("ease-")),
    ("animation", Matcher::Prefix("animate-")),
    ("scale-x", Matcher::Prefix("scale-x-")),
    ("scale-y", Matcher::Prefix("scale-y-")),
    ("scale", Matcher::Prefix("scale-")),
    ("rotate", Matcher::Prefix("rotate-")),
    ("translate-x", Matcher::Prefix("translate-x-")),
    ("translate-y", Matcher::Prefix("translate-y-")),
    ("skew-x", Matcher::Prefix("skew-x-")),
    ("skew-y", Matcher::Prefix("skew-y-")),
    ("transform-origin", Matcher::Prefix("origin-")),
    ("transform", Matcher::Exact(&["transform-none"])),
    ("blur", Matcher::Stem("blur")),
    ("brightness", Matcher::Prefix("brightness-")),
    ("contrast", Matcher::Prefix("contrast-")),
    ("grayscale", Matcher::Stem("grayscale")),
    ("invert", Matcher::Stem("invert")),
    ("saturate", Matcher::Prefix("saturate-")),
    ("sepia", Matcher::Stem("sepia")),
    ("hue-rotate", Matcher::Prefix("hue-rotate-")),
    ("overflow-x", Matcher::Prefix("overflow-x-")),
    ("overflow-y", Matcher::Prefix("overflow-y-")),
    ("overflow", Matcher::Prefix("overflow-")),
    (
        "object-fit",
        Matcher::Exact(&[
            "object-contain",
            "object-cover",
            "object-fill",
            "object-none",
            "object-scale-down",
        ]),
    ),
    ("object-position", Matcher::Prefix("object-")),
    ("cursor", Matcher::Prefix("cursor-")),
    ("user-select", Matcher::Prefix("select-")),
    ("pointer-events", Matcher::Prefix("pointer-events-")),
    ("white-space", Matcher::Prefix("whitespace-")),
    ("word-break", Matcher::Prefix("break-")),
    ("vertical-align", Matcher::Prefix("align-")),
    ("list-style", Matcher::Prefix("list-")),
];

pub fn classify_base(base: &str) -> Option<&'static str> {
    // A leading `-` (negative margin, inset, rotation) never changes the
    // conflict bucket.
    let base = base.strip_prefix('-').unwrap_or(base);

    for (category, matcher) in CONFLICT_TABLE {
        let matched = match matcher {
            Matcher::Exact(set) => set.contains(&base),
            Matcher::Prefix(prefix) => base.starts_with(prefix) && base.len() > prefix.len(),
            Matcher::Stem(stem) => {
                base == *stem || base.strip_prefix(stem).is_some_and(|r| r.starts_with('-'))
            }
            Matcher::Fn(predicate) => predicate(base),
        };
        if matched {
            return Some(category);
        }
    }
    None
}

// `text-lg` is a font size, `text-[14px]` too; `text-red-500` and
// `text-[#fff]` belong to the text-color bucket that follows.
fn is_font_size(base: &str) -> bool {
    let Some(token) = base.strip_prefix("text-") else {
        return false;
    };
    const SIZES: [&str; 13] = [
        "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
    ];
    if SIZES.contains(&token) {
        return true;
    }
    matches!(
        arbitrary::parse(token).map(|value| value.kind),
        Some(ValueKind::Length | ValueKind::Percentage | ValueKind::Number)
    )
}

fn is_border_side_width(base: &str, side: &str) -> bool {
    let Some(rest) = base.strip_prefix("border-").and_then(|r| r.strip_prefix(side)) else {
        return false;
    };
    rest.is_empty() || rest.strip_prefix('-').is_some_and(is_width_token)
}

fn is_border_top_width(base: &str) -> bool {
    is_border_side_width(base, "t")
}

fn is_border_right_width(base: &str) -> bool {
    is_border_side_width(base, "r")
}

fn is_border_bottom_width(base: &str) -> bool {
    is_border_side_width(base, "b")
}

fn is_border_left_width(base: &str) -> bool {
    is_border_side_width(base, "l")
}

fn is_border_x_width(base: &str) -> bool {
    is_border_side_width(base, "x")
}

fn is_border_y_width(base: &str) -> bool {
    is_border_side_width(base, "y")
}

fn is_border_width(base: &str) -> bool {
    if base == "border" {
        return true;
    }
    base.strip_prefix("border-").is_some_and(is_width_token)
}

fn is_width_token(token: &str) -> bool {
    if token.chars().all(|ch| ch.is_ascii_digit()) && !token.is_empty() {
        return true;
    }
    matches!(
        arbitrary::parse(token).map(|value| value.kind),
        Some(ValueKind::Length)
    )
}

#[cfg(test)]
mod tests {
    use super::{Merger, classify_base, merge};

    #[test]
    fn same_category_same_variants_last_write_wins() {
        assert_eq!(merge(&["px-4", "px-6"]), "px-6");
        assert_eq!(
            merge(&["hover:bg-gray-100", "hover:bg-blue-500"]),
            "hover:bg-blue-500"
        );
    }

    #[test]
    fn different_variant_chains_do_not_conflict() {
        assert_eq!(
            merge(&["hover:bg-blue-500", "focus:bg-blue-600"]),
            "hover:bg-blue-500 focus:bg-blue-600"
        );
        assert_eq!(merge(&["bg-red-500", "hover:bg-blue-500"]), "bg-red-500 hover:bg-blue-500");
        assert_eq!(
            merge(&["md:hover:px-4", "hover:md:px-6"]),
            "md:hover:px-4 hover:md:px-6"
        );
    }

    #[test]
    fn opaque_tokens_are_preserved() {
        assert_eq!(
            merge(&["my-custom-widget", "another-class"]),
            "my-custom-widget another-class"
        );
        assert_eq!(merge(&["my-custom-widget", "my-custom-widget"]), "my-custom-widget");
    }

    #[test]
    fn survivors_keep_first_insertion_order() {
        assert_eq!(merge(&["px-4 py-2 px-8"]), "px-8 py-2");
        assert_eq!(merge(&["text-sm", "flex", "text-lg"]), "text-lg flex");
    }

    #[test]
    fn nested_class_lists_are_flattened() {
        assert_eq!(merge(&["p-4 m-2", "", "p-6"]), "p-6 m-2");
    }

    #[test]
    fn merge_is_idempotent() {
        let merged = merge(&["px-4", "hover:bg-gray-100", "px-6", "flex"]);
        assert_eq!(merge(&[merged.as_str()]), merged);
        assert_eq!(merge(&[merged.as_str(), ""]), merged);
    }

    #[test]
    fn axis_paddings_do_not_collapse_into_each_other() {
        assert_eq!(merge(&["px-4", "py-4"]), "px-4 py-4");
        assert_eq!(merge(&["px-4", "p-4"]), "px-4 p-4");
        assert_eq!(merge(&["pt-2", "pb-2"]), "pt-2 pb-2");
    }

    #[test]
    fn value_aware_text_discrimination() {
        assert_eq!(classify_base("text-lg"), Some("font-size"));
        assert_eq!(classify_base("text-[14px]"), Some("font-size"));
        assert_eq!(classify_base("text-red-500"), Some("text-color"));
        assert_eq!(classify_base("text-[#fff]"), Some("text-color"));
        assert_eq!(classify_base("text-center"), Some("text-align"));
        assert_eq!(merge(&["text-sm", "text-lg"]), "text-lg");
        assert_eq!(merge(&["text-sm", "text-red-500"]), "text-sm text-red-500");
    }

    #[test]
    fn border_width_and_color_are_distinct_buckets() {
        assert_eq!(classify_base("border"), Some("border-width"));
        assert_eq!(classify_base("border-2"), Some("border-width"));
        assert_eq!(classify_base("border-t-2"), Some("border-width-top"));
        assert_eq!(classify_base("border-red-500"), Some("border-color"));
        assert_eq!(classify_base("border-solid"), Some("border-style"));
        assert_eq!(merge(&["border-2", "border-red-500"]), "border-2 border-red-500");
        assert_eq!(merge(&["border-2", "border-4"]), "border-4");
    }

    #[test]
    fn negative_values_share_their_bucket() {
        assert_eq!(classify_base("-mt-2"), classify_base("mt-4"));
        assert_eq!(merge(&["mt-4", "-mt-2"]), "-mt-2");
    }

    #[test]
    fn flex_direction_is_not_swallowed_by_generic_flex() {
        assert_eq!(classify_base("flex-row"), Some("flex-direction"));
        assert_eq!(classify_base("flex-1"), Some("flex"));
        assert_eq!(classify_base("flex"), Some("display"));
        assert_eq!(merge(&["flex-row", "flex-1"]), "flex-row flex-1");
        assert_eq!(merge(&["flex-row", "flex-col"]), "flex-col");
    }

    #[test]
    fn memoized_merger_is_consistent_with_one_shot_merge() {
        let mut merger = Merger::new();
        let first = merger.merge(&["px-4", "px-6"]);
        let second = merger.merge(&["px-4", "px-6"]);
        assert_eq!(first, second);
        assert_eq!(first, merge(&["px-4", "px-6"]));
    }

    #[test]
    fn unknown_variants_still_shape_the_conflict_key() {
        // `bogus:` emits no CSS but still distinguishes merge keys.
        assert_eq!(merge(&["bogus:px-4", "px-6"]), "bogus:px-4 px-6");
        assert_eq!(merge(&["bogus:px-4", "bogus:px-6"]), "bogus:px-6");
    }
}
