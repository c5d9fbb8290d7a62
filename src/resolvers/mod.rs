//! Utility resolution: an explicit ordered chain of category resolvers.
//!
//! Each category module owns a prefix space and maps a utility identifier
//! to a CSS declaration list. Dispatch tries arbitrary-value handling
//! first, then walks `RESOLVER_CHAIN` in order and returns the first
//! match; the chain order is a priority list, not an accident. A legacy
//! block at the end covers identifiers that have no dedicated resolver
//! yet.

pub mod background;
pub mod border;
pub mod display;
pub mod effects;
pub mod filter;
pub mod layout;
pub mod position;
pub mod sizing;
pub mod spacing;
pub mod transform;
pub mod transition;
pub mod typography;

use crate::arbitrary::{self, ValueKind};
use crate::config::Theme;

pub type Resolver = fn(&str, &Theme) -> Option<String>;

pub const RESOLVER_CHAIN: [(&str, Resolver); 12] = [
    ("spacing", spacing::generate),
    ("sizing", sizing::generate),
    ("layout", layout::generate),
    ("background", background::generate),
    ("effects", effects::generate),
    ("typography", typography::generate),
    ("display", display::generate),
    ("position", position::generate),
    ("transform", transform::generate),
    ("filter", filter::generate),
    ("border", border::generate),
    ("transition", transition::generate),
];

pub fn generate(utility: &str, value: Option<&str>, theme: &Theme) -> Option<String> {
    if let Some(bracketed) = value {
        return generate_arbitrary(utility, bracketed);
    }
    for (_, resolver) in RESOLVER_CHAIN {
        if let Some(declarations) = resolver(utility, theme) {
            return Some(declarations);
        }
    }
    legacy(utility)
}

fn generate_arbitrary(utility: &str, bracketed: &str) -> Option<String> {
    let value = arbitrary::parse(bracketed)?;
    let dimension = matches!(value.kind, ValueKind::Length | ValueKind::Percentage);

    let properties: &[&str] = match utility {
        "w" if dimension => &["width"],
        "h" if dimension => &["height"],
        "min-w" if dimension => &["min-width"],
        "max-w" if dimension => &["max-width"],
        "min-h" if dimension => &["min-height"],
        "max-h" if dimension => &["max-height"],
        "p" if dimension => &["padding"],
        "px" if dimension => &["padding-left", "padding-right"],
        "py" if dimension => &["padding-top", "padding-bottom"],
        "pt" if dimension => &["padding-top"],
        "pr" if dimension => &["padding-right"],
        "pb" if dimension => &["padding-bottom"],
        "pl" if dimension => &["padding-left"],
        "m" if dimension => &["margin"],
        "mx" if dimension => &["margin-left", "margin-right"],
        "my" if dimension => &["margin-top", "margin-bottom"],
        "mt" if dimension => &["margin-top"],
        "mr" if dimension => &["margin-right"],
        "mb" if dimension => &["margin-bottom"],
        "ml" if dimension => &["margin-left"],
        "gap" if dimension => &["gap"],
        "gap-x" if dimension => &["column-gap"],
        "gap-y" if dimension => &["row-gap"],
        "inset" if dimension => &["inset"],
        "top" if dimension => &["top"],
        "right" if dimension => &["right"],
        "bottom" if dimension => &["bottom"],
        "left" if dimension => &["left"],
        "rounded" if dimension => &["border-radius"],
        "text" => match value.kind {
            ValueKind::Color => &["color"],
            _ => &["font-size"],
        },
        "bg" if value.kind == ValueKind::Color => &["background-color"],
        "border" => match value.kind {
            ValueKind::Color => &["border-color"],
            ValueKind::Length => &["border-width"],
            _ => return None,
        },
        "z" if value.kind == ValueKind::Number => &["z-index"],
        "opacity" if value.kind == ValueKind::Number => &["opacity"],
        "leading" if dimension => &["line-height"],
        _ => return None,
    };

    Some(declarations(properties, value.raw))
}

/// Fallback for identifiers not yet migrated to a dedicated resolver.
fn legacy(utility: &str) -> Option<String> {
    let declarations = match utility {
        "overflow-auto" => "overflow:auto",
        "overflow-hidden" => "overflow:hidden",
        "overflow-visible" => "overflow:visible",
        "overflow-scroll" => "overflow:scroll",
        "overflow-x-auto" => "overflow-x:auto",
        "overflow-x-hidden" => "overflow-x:hidden",
        "overflow-x-visible" => "overflow-x:visible",
        "overflow-x-scroll" => "overflow-x:scroll",
        "overflow-y-auto" => "overflow-y:auto",
        "overflow-y-hidden" => "overflow-y:hidden",
        "overflow-y-visible" => "overflow-y:visible",
        "overflow-y-scroll" => "overflow-y:scroll",
        "cursor-auto" => "cursor:auto",
        "cursor-default" => "cursor:default",
        "cursor-pointer" => "cursor:pointer",
        "cursor-wait" => "cursor:wait",
        "cursor-text" => "cursor:text",
        "cursor-move" => "cursor:move",
        "cursor-help" => "cursor:help",
        "cursor-grab" => "cursor:grab",
        "cursor-grabbing" => "cursor:grabbing",
        "cursor-not-allowed" => "cursor:not-allowed",
        "cursor-none" => "cursor:none",
        "select-none" => "user-select:none",
        "select-text" => "user-select:text",
        "select-all" => "user-select:all",
        "select-auto" => "user-select:auto",
        "pointer-events-none" => "pointer-events:none",
        "pointer-events-auto" => "pointer-events:auto",
        "visible" => "visibility:visible",
        "invisible" => "visibility:hidden",
        "collapse" => "visibility:collapse",
        "object-contain" => "object-fit:contain",
        "object-cover" => "object-fit:cover",
        "object-fill" => "object-fit:fill",
        "object-none" => "object-fit:none",
        "object-scale-down" => "object-fit:scale-down",
        "object-center" => "object-position:center",
        "object-top" => "object-position:top",
        "object-bottom" => "object-position:bottom",
        "object-left" => "object-position:left",
        "object-right" => "object-position:right",
        "align-baseline" => "vertical-align:baseline",
        "align-top" => "vertical-align:top",
        "align-middle" => "vertical-align:middle",
        "align-bottom" => "vertical-align:bottom",
        "align-text-top" => "vertical-align:text-top",
        "align-text-bottom" => "vertical-align:text-bottom",
        "list-none" => "list-style-type:none",
        "list-disc" => "list-style-type:disc",
        "list-decimal" => "list-style-type:decimal",
        "list-inside" => "list-style-position:inside",
        "list-outside" => "list-style-position:outside",
        "whitespace-normal" => "white-space:normal",
        "whitespace-nowrap" => "white-space:nowrap",
        "whitespace-pre" => "white-space:pre",
        "whitespace-pre-line" => "white-space:pre-line",
        "whitespace-pre-wrap" => "white-space:pre-wrap",
        "break-normal" => "overflow-wrap:normal;word-break:normal",
        "break-words" => "overflow-wrap:break-word",
        "break-all" => "word-break:break-all",
        "sr-only" => {
            "position:absolute;width:1px;height:1px;padding:0;margin:-1px;overflow:hidden;clip:rect(0, 0, 0, 0);white-space:nowrap;border-width:0"
        }
        "not-sr-only" => {
            "position:static;width:auto;height:auto;padding:0;margin:0;overflow:visible;clip:auto;white-space:normal"
        }
        _ => return None,
    };
    Some(declarations.to_string())
}

pub(crate) fn declarations(properties: &[&str], value: &str) -> String {
    properties
        .iter()
        .map(|property| format!("{}:{}", property, value))
        .collect::<Vec<_>>()
        .join(";")
}

/// Linear scale: step × 0.25rem, quarter steps, capped at 96.
pub(crate) fn scale_rem(token: &str) -> Option<String> {
    if token.is_empty() || token.starts_with('.') || token.ends_with('.') {
        return None;
    }
    let mut seen_dot = false;
    for ch in token.chars() {
        if ch == '.' {
            if seen_dot {
                return None;
            }
            seen_dot = true;
            continue;
        }
        if !ch.is_ascii_digit() {
            return None;
        }
    }

    let steps: f64 = token.parse().ok()?;
    if steps > 96.0 || (steps * 4.0).fract() != 0.0 {
        return None;
    }
    if steps == 0.0 {
        return Some("0px".to_string());
    }
    Some(format!("{}rem", format_number(steps * 0.25)))
}

/// Fractional token (`1/2`, `2/3`, …) converted to a percentage.
pub(crate) fn fraction_percentage(token: &str) -> Option<String> {
    let (numerator, denominator) = token.split_once('/')?;
    let numerator: u32 = numerator.parse().ok()?;
    let denominator: u32 = denominator.parse().ok()?;
    if denominator == 0 || numerator == 0 || numerator >= denominator {
        return None;
    }
    let percentage = f64::from(numerator) * 100.0 / f64::from(denominator);
    Some(format!("{}%", format_decimal(percentage)))
}

pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }
    let rendered = format!("{:.6}", value);
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Resolves a color token (`blue-500`, `white`, `transparent`) against the
/// theme palette.
pub(crate) fn color_value(theme: &Theme, token: &str) -> Option<String> {
    match token {
        "inherit" => return Some("inherit".to_string()),
        "current" => return Some("currentColor".to_string()),
        "transparent" => return Some("transparent".to_string()),
        "black" => return Some("#000000".to_string()),
        "white" => return Some("#ffffff".to_string()),
        _ => {}
    }
    let (family, shade) = token.rsplit_once('-')?;
    theme.colors.get(family)?.get(shade).cloned()
}

/// Parses an unsigned integer token, rejecting leading zeros longer than
/// one digit.
pub(crate) fn parse_int(token: &str) -> Option<u32> {
    if token.is_empty() || (token.len() > 1 && token.starts_with('0')) {
        return None;
    }
    if !token.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
