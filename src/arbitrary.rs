//! Validation of bracketed arbitrary values (`w-[342px]`, `bg-[#1e40af]`).
//!
//! The payload is user-authored free text lifted straight out of scanned
//! content, so nothing leaves this module unvalidated. A payload either
//! matches one of four grammars exactly and is returned verbatim, or it is
//! rejected and the utility produces no CSS at all.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Length,
    Color,
    Percentage,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArbitraryValue<'a> {
    pub raw: &'a str,
    pub kind: ValueKind,
}

/// Grammars are tried in a fixed order; the first match wins.
pub fn parse(bracketed: &str) -> Option<ArbitraryValue<'_>> {
    let payload = bracketed.strip_prefix('[')?.strip_suffix(']')?;
    if payload.is_empty() {
        return None;
    }

    if is_length(payload) {
        return Some(ArbitraryValue {
            raw: payload,
            kind: ValueKind::Length,
        });
    }
    if is_color(payload) {
        return Some(ArbitraryValue {
            raw: payload,
            kind: ValueKind::Color,
        });
    }
    if is_percentage(payload) {
        return Some(ArbitraryValue {
            raw: payload,
            kind: ValueKind::Percentage,
        });
    }
    if is_number(payload) {
        return Some(ArbitraryValue {
            raw: payload,
            kind: ValueKind::Number,
        });
    }

    None
}

// Longer units first so `rem` is not mistaken for a malformed `em` and
// `vmin`/`vmax` are not mistaken for `in`.
const LENGTH_UNITS: [&str; 14] = [
    "vmin", "vmax", "rem", "em", "px", "vh", "vw", "ch", "ex", "pt", "pc", "cm", "mm", "in",
];

fn is_length(payload: &str) -> bool {
    LENGTH_UNITS.iter().any(|unit| {
        payload
            .strip_suffix(unit)
            .is_some_and(|number| !number.is_empty() && is_number(number))
    })
}

fn is_percentage(payload: &str) -> bool {
    payload
        .strip_suffix('%')
        .is_some_and(|number| !number.is_empty() && is_number(number))
}

fn is_number(payload: &str) -> bool {
    let digits = payload.strip_prefix('-').unwrap_or(payload);
    if digits.is_empty() || digits.starts_with('.') || digits.ends_with('.') {
        return false;
    }
    let mut seen_dot = false;
    for ch in digits.chars() {
        if ch == '.' {
            if seen_dot {
                return false;
            }
            seen_dot = true;
            continue;
        }
        if !ch.is_ascii_digit() {
            return false;
        }
    }
    true
}

fn is_color(payload: &str) -> bool {
    if let Some(digits) = payload.strip_prefix('#') {
        return matches!(digits.len(), 3 | 4 | 6 | 8)
            && digits.chars().all(|ch| ch.is_ascii_hexdigit());
    }

    for prefix in ["rgba(", "rgb(", "hsla(", "hsl("] {
        if let Some(rest) = payload.strip_prefix(prefix) {
            let Some(args) = rest.strip_suffix(')') else {
                return false;
            };
            return !args.is_empty() && args.chars().all(is_color_component_char);
        }
    }

    is_named_color(payload)
}

// Arguments inside rgb()/hsl() may not contain parentheses, quotes or
// declaration delimiters; this is what keeps the parser an injection
// boundary rather than a formality.
fn is_color_component_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | ',' | ' ' | '%' | '/' | '-')
}

fn is_named_color(payload: &str) -> bool {
    const NAMED: [&str; 33] = [
        "transparent",
        "currentcolor",
        "black",
        "white",
        "red",
        "green",
        "blue",
        "yellow",
        "orange",
        "purple",
        "pink",
        "gray",
        "grey",
        "silver",
        "maroon",
        "fuchsia",
        "lime",
        "olive",
        "navy",
        "teal",
        "aqua",
        "cyan",
        "magenta",
        "gold",
        "indigo",
        "violet",
        "brown",
        "coral",
        "crimson",
        "salmon",
        "tan",
        "tomato",
        "turquoise",
    ];
    let lowered = payload.to_ascii_lowercase();
    NAMED.contains(&lowered.as_str())
}
