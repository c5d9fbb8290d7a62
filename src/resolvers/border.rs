//! Border width, style, color and radius utilities.
//!
//! `border-*` tokens are disambiguated in order: style keywords, side
//! widths, bare widths, then the palette color fallback. Radii come from
//! the theme scale, with per-side and per-corner forms.

use super::{color_value, parse_int};
use crate::config::Theme;

pub fn generate(utility: &str, theme: &Theme) -> Option<String> {
    let exact = match utility {
        "border-solid" => "border-style:solid",
        "border-dashed" => "border-style:dashed",
        "border-dotted" => "border-style:dotted",
        "border-double" => "border-style:double",
        "border-none" => "border-style:none",
        "border" => "border-width:1px",
        "border-t" => "border-top-width:1px",
        "border-r" => "border-right-width:1px",
        "border-b" => "border-bottom-width:1px",
        "border-l" => "border-left-width:1px",
        "border-x" => "border-left-width:1px;border-right-width:1px",
        "border-y" => "border-top-width:1px;border-bottom-width:1px",
        _ => "",
    };
    if !exact.is_empty() {
        return Some(exact.to_string());
    }

    if let Some(rest) = utility.strip_prefix("rounded") {
        return radius(rest, theme);
    }

    let token = utility.strip_prefix("border-")?;

    for (side, properties) in SIDE_WIDTHS {
        if let Some(width) = token.strip_prefix(side) {
            if let Some(width) = border_width(width) {
                return Some(join_width(properties, &width));
            }
        }
    }
    if let Some(width) = border_width(token) {
        return Some(format!("border-width:{}", width));
    }

    let color = color_value(theme, token)?;
    Some(format!("border-color:{}", color))
}

const SIDE_WIDTHS: [(&str, &[&str]); 6] = [
    ("t-", &["border-top-width"]),
    ("r-", &["border-right-width"]),
    ("b-", &["border-bottom-width"]),
    ("l-", &["border-left-width"]),
    ("x-", &["border-left-width", "border-right-width"]),
    ("y-", &["border-top-width", "border-bottom-width"]),
];

fn border_width(token: &str) -> Option<String> {
    let width = parse_int(token).filter(|n| matches!(n, 0 | 2 | 4 | 8))?;
    Some(format!("{}px", width))
}

fn join_width(properties: &[&str], width: &str) -> String {
    properties
        .iter()
        .map(|property| format!("{}:{}", property, width))
        .collect::<Vec<_>>()
        .join(";")
}

fn radius(rest: &str, theme: &Theme) -> Option<String> {
    if rest.is_empty() {
        let value = theme.border_radius.get("DEFAULT")?;
        return Some(format!("border-radius:{}", value));
    }
    let rest = rest.strip_prefix('-')?;

    // Corner prefixes before side prefixes: `tl` must not match `t`.
    const CORNERS: [(&str, &[&str]); 4] = [
        ("tl", &["border-top-left-radius"]),
        ("tr", &["border-top-right-radius"]),
        ("br", &["border-bottom-right-radius"]),
        ("bl", &["border-bottom-left-radius"]),
    ];
    const SIDES: [(&str, &[&str]); 4] = [
        ("t", &["border-top-left-radius", "border-top-right-radius"]),
        ("r", &["border-top-right-radius", "border-bottom-right-radius"]),
        ("b", &["border-bottom-right-radius", "border-bottom-left-radius"]),
        ("l", &["border-top-left-radius", "border-bottom-left-radius"]),
    ];

    for (name, properties) in CORNERS.into_iter().chain(SIDES) {
        if rest == name {
            let value = theme.border_radius.get("DEFAULT")?;
            return Some(join_width(properties, value));
        }
        if let Some(size) = rest.strip_prefix(name).and_then(|r| r.strip_prefix('-')) {
            let value = theme.border_radius.get(size)?;
            return Some(join_width(properties, value));
        }
    }

    let value = theme.border_radius.get(rest)?;
    Some(format!("border-radius:{}", value))
}
