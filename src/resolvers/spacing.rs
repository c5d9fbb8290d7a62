//! Padding, margin and gap utilities.
//!
//! Value spaces are checked in a fixed order: named keywords, fractional
//! tokens, then the linear step scale. Margins additionally accept a
//! leading `-` for negative values; padding and gap never do.

use super::{declarations, fraction_percentage, scale_rem};
use crate::config::Theme;

const PADDING: [(&str, &[&str]); 7] = [
    ("px-", &["padding-left", "padding-right"]),
    ("py-", &["padding-top", "padding-bottom"]),
    ("pt-", &["padding-top"]),
    ("pr-", &["padding-right"]),
    ("pb-", &["padding-bottom"]),
    ("pl-", &["padding-left"]),
    ("p-", &["padding"]),
];

const MARGIN: [(&str, &[&str]); 7] = [
    ("mx-", &["margin-left", "margin-right"]),
    ("my-", &["margin-top", "margin-bottom"]),
    ("mt-", &["margin-top"]),
    ("mr-", &["margin-right"]),
    ("mb-", &["margin-bottom"]),
    ("ml-", &["margin-left"]),
    ("m-", &["margin"]),
];

const GAP: [(&str, &[&str]); 3] = [
    ("gap-x-", &["column-gap"]),
    ("gap-y-", &["row-gap"]),
    ("gap-", &["gap"]),
];

pub fn generate(utility: &str, _theme: &Theme) -> Option<String> {
    let (base, negative) = match utility.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (utility, false),
    };

    for (prefix, properties) in PADDING {
        if let Some(token) = base.strip_prefix(prefix) {
            if negative {
                return None;
            }
            let value = spacing_value(token, false)?;
            return Some(declarations(properties, &value));
        }
    }

    for (prefix, properties) in MARGIN {
        if let Some(token) = base.strip_prefix(prefix) {
            let value = spacing_value(token, !negative)?;
            let value = if negative { negate(&value) } else { value };
            return Some(declarations(properties, &value));
        }
    }

    for (prefix, properties) in GAP {
        if let Some(token) = base.strip_prefix(prefix) {
            if negative {
                return None;
            }
            let value = spacing_value(token, false)?;
            return Some(declarations(properties, &value));
        }
    }

    None
}

fn spacing_value(token: &str, allow_auto: bool) -> Option<String> {
    match token {
        "auto" if allow_auto => return Some("auto".to_string()),
        "px" => return Some("1px".to_string()),
        _ => {}
    }
    if let Some(percentage) = fraction_percentage(token) {
        return Some(percentage);
    }
    scale_rem(token)
}

fn negate(value: &str) -> String {
    if value == "0px" {
        value.to_string()
    } else {
        format!("-{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::generate;
    use crate::config::Theme;

    #[test]
    fn padding_axes() {
        let theme = Theme::default();
        assert_eq!(generate("p-4", &theme).as_deref(), Some("padding:1rem"));
        assert_eq!(
            generate("px-4", &theme).as_deref(),
            Some("padding-left:1rem;padding-right:1rem")
        );
        assert_eq!(
            generate("py-2", &theme).as_deref(),
            Some("padding-top:0.5rem;padding-bottom:0.5rem")
        );
        assert_eq!(generate("pt-1.5", &theme).as_deref(), Some("padding-top:0.375rem"));
        assert_eq!(generate("pl-px", &theme).as_deref(), Some("padding-left:1px"));
        assert_eq!(generate("p-0", &theme).as_deref(), Some("padding:0px"));
    }

    #[test]
    fn margins_accept_auto_and_negatives() {
        let theme = Theme::default();
        assert_eq!(
            generate("mx-auto", &theme).as_deref(),
            Some("margin-left:auto;margin-right:auto")
        );
        assert_eq!(generate("-mt-2", &theme).as_deref(), Some("margin-top:-0.5rem"));
        assert_eq!(generate("-m-0", &theme).as_deref(), Some("margin:0px"));
        assert_eq!(generate("-mx-auto", &theme), None);
        assert_eq!(generate("-p-4", &theme), None);
    }

    #[test]
    fn gaps() {
        let theme = Theme::default();
        assert_eq!(generate("gap-4", &theme).as_deref(), Some("gap:1rem"));
        assert_eq!(generate("gap-x-2", &theme).as_deref(), Some("column-gap:0.5rem"));
        assert_eq!(generate("gap-y-8", &theme).as_deref(), Some("row-gap:2rem"));
        assert_eq!(generate("gap-auto", &theme), None);
    }

    #[test]
    fn fractions_become_percentages() {
        let theme = Theme::default();
        assert_eq!(generate("ml-1/2", &theme).as_deref(), Some("margin-left:50%"));
    }

    #[test]
    fn rejects_off_scale_and_foreign_prefixes() {
        let theme = Theme::default();
        assert_eq!(generate("p-97", &theme), None);
        assert_eq!(generate("p-banana", &theme), None);
        assert_eq!(generate("padding-4", &theme), None);
        assert_eq!(generate("w-4", &theme), None);
    }
}
