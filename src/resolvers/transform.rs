//! Transform utilities: scale, rotate, translate, skew and origin.
//!
//! Values are emitted as direct `transform:` shorthand; composing several
//! transform utilities on one element is out of scope here.

use super::{format_number, fraction_percentage, parse_int, scale_rem};
use crate::config::Theme;

pub fn generate(utility: &str, _theme: &Theme) -> Option<String> {
    let exact = match utility {
        "transform-none" => "transform:none",
        "origin-center" => "transform-origin:center",
        "origin-top" => "transform-origin:top",
        "origin-top-right" => "transform-origin:top right",
        "origin-right" => "transform-origin:right",
        "origin-bottom-right" => "transform-origin:bottom right",
        "origin-bottom" => "transform-origin:bottom",
        "origin-bottom-left" => "transform-origin:bottom left",
        "origin-left" => "transform-origin:left",
        "origin-top-left" => "transform-origin:top left",
        _ => "",
    };
    if !exact.is_empty() {
        return Some(exact.to_string());
    }

    let (base, negative) = match utility.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (utility, false),
    };
    let sign = if negative { "-" } else { "" };

    if let Some(token) = base.strip_prefix("scale-x-") {
        if negative {
            return None;
        }
        return Some(format!("transform:scaleX({})", ratio(token)?));
    }
    if let Some(token) = base.strip_prefix("scale-y-") {
        if negative {
            return None;
        }
        return Some(format!("transform:scaleY({})", ratio(token)?));
    }
    if let Some(token) = base.strip_prefix("scale-") {
        if negative {
            return None;
        }
        return Some(format!("transform:scale({})", ratio(token)?));
    }
    if let Some(token) = base.strip_prefix("rotate-") {
        let degrees = parse_int(token).filter(|n| *n <= 360)?;
        return Some(format!("transform:rotate({}{}deg)", sign, degrees));
    }
    if let Some(token) = base.strip_prefix("translate-x-") {
        let value = translate_value(token)?;
        return Some(format!("transform:translateX({}{})", sign, value));
    }
    if let Some(token) = base.strip_prefix("translate-y-") {
        let value = translate_value(token)?;
        return Some(format!("transform:translateY({}{})", sign, value));
    }
    if let Some(token) = base.strip_prefix("skew-x-") {
        let degrees = parse_int(token).filter(|n| *n <= 45)?;
        return Some(format!("transform:skewX({}{}deg)", sign, degrees));
    }
    if let Some(token) = base.strip_prefix("skew-y-") {
        let degrees = parse_int(token).filter(|n| *n <= 45)?;
        return Some(format!("transform:skewY({}{}deg)", sign, degrees));
    }

    None
}

fn ratio(token: &str) -> Option<String> {
    let value = parse_int(token).filter(|n| *n <= 200)?;
    Some(format_number(f64::from(value) / 100.0))
}

fn translate_value(token: &str) -> Option<String> {
    if token == "full" {
        return Some("100%".to_string());
    }
    if token == "px" {
        return Some("1px".to_string());
    }
    fraction_percentage(token).or_else(|| scale_rem(token))
}
