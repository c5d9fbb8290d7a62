//! Positioning: position keywords, inset offsets and z-index.

use super::{declarations, fraction_percentage, parse_int, scale_rem};
use crate::config::Theme;

const OFFSETS: [(&str, &[&str]); 7] = [
    ("inset-x-", &["left", "right"]),
    ("inset-y-", &["top", "bottom"]),
    ("inset-", &["inset"]),
    ("top-", &["top"]),
    ("right-", &["right"]),
    ("bottom-", &["bottom"]),
    ("left-", &["left"]),
];

pub fn generate(utility: &str, _theme: &Theme) -> Option<String> {
    let exact = match utility {
        "static" => "position:static",
        "fixed" => "position:fixed",
        "absolute" => "position:absolute",
        "relative" => "position:relative",
        "sticky" => "position:sticky",
        "z-auto" => "z-index:auto",
        _ => "",
    };
    if !exact.is_empty() {
        return Some(exact.to_string());
    }

    let (base, negative) = match utility.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (utility, false),
    };

    if let Some(token) = base.strip_prefix("z-") {
        let value = parse_int(token).filter(|n| *n <= 50)?;
        if negative {
            return Some(format!("z-index:-{}", value));
        }
        return Some(format!("z-index:{}", value));
    }

    for (prefix, properties) in OFFSETS {
        if let Some(token) = base.strip_prefix(prefix) {
            let value = offset_value(token, negative)?;
            return Some(declarations(properties, &value));
        }
    }

    None
}

fn offset_value(token: &str, negative: bool) -> Option<String> {
    let value = match token {
        "auto" => {
            if negative {
                return None;
            }
            "auto".to_string()
        }
        "full" => "100%".to_string(),
        "px" => "1px".to_string(),
        _ => fraction_percentage(token).or_else(|| scale_rem(token))?,
    };
    if negative && value != "0px" {
        return Some(format!("-{}", value));
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::generate;
    use crate::config::Theme;

    #[test]
    fn position_keywords() {
        let theme = Theme::default();
        assert_eq!(generate("absolute", &theme).as_deref(), Some("position:absolute"));
        assert_eq!(generate("sticky", &theme).as_deref(), Some("position:sticky"));
    }

    #[test]
    fn offsets() {
        let theme = Theme::default();
        assert_eq!(generate("inset-0", &theme).as_deref(), Some("inset:0px"));
        assert_eq!(generate("top-4", &theme).as_deref(), Some("top:1rem"));
        assert_eq!(
            generate("inset-x-2", &theme).as_deref(),
            Some("left:0.5rem;right:0.5rem")
        );
        assert_eq!(generate("left-1/2", &theme).as_deref(), Some("left:50%"));
        assert_eq!(generate("bottom-full", &theme).as_deref(), Some("bottom:100%"));
        assert_eq!(generate("-top-4", &theme).as_deref(), Some("top:-1rem"));
        assert_eq!(generate("-top-auto", &theme), None);
    }

    #[test]
    fn z_index() {
        let theme = Theme::default();
        assert_eq!(generate("z-10", &theme).as_deref(), Some("z-index:10"));
        assert_eq!(generate("z-auto", &theme).as_deref(), Some("z-index:auto"));
        assert_eq!(generate("-z-10", &theme).as_deref(), Some("z-index:-10"));
        assert_eq!(generate("z-60", &theme), None);
    }
}
