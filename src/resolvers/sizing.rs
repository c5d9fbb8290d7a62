//! Width and height utilities, including the min/max variants.

use super::{declarations, fraction_percentage, scale_rem};
use crate::config::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
    Both,
}

const SIZING: [(&str, &[&str], Axis); 7] = [
    ("min-w-", &["min-width"], Axis::Horizontal),
    ("max-w-", &["max-width"], Axis::Horizontal),
    ("min-h-", &["min-height"], Axis::Vertical),
    ("max-h-", &["max-height"], Axis::Vertical),
    ("size-", &["width", "height"], Axis::Both),
    ("w-", &["width"], Axis::Horizontal),
    ("h-", &["height"], Axis::Vertical),
];

pub fn generate(utility: &str, _theme: &Theme) -> Option<String> {
    for (prefix, properties, axis) in SIZING {
        if let Some(token) = utility.strip_prefix(prefix) {
            let value = sizing_value(token, axis)?;
            return Some(declarations(properties, &value));
        }
    }
    None
}

fn sizing_value(token: &str, axis: Axis) -> Option<String> {
    let keyword = match token {
        "auto" => Some("auto"),
        "full" => Some("100%"),
        "screen" => match axis {
            Axis::Horizontal => Some("100vw"),
            Axis::Vertical => Some("100vh"),
            Axis::Both => None,
        },
        "min" => Some("min-content"),
        "max" => Some("max-content"),
        "fit" => Some("fit-content"),
        "px" => Some("1px"),
        "none" => Some("none"),
        _ => None,
    };
    if let Some(keyword) = keyword {
        return Some(keyword.to_string());
    }
    if let Some(percentage) = fraction_percentage(token) {
        return Some(percentage);
    }
    scale_rem(token)
}

#[cfg(test)]
mod tests {
    use super::generate;
    use crate::config::Theme;

    #[test]
    fn keyword_values() {
        let theme = Theme::default();
        assert_eq!(generate("w-full", &theme).as_deref(), Some("width:100%"));
        assert_eq!(generate("w-screen", &theme).as_deref(), Some("width:100vw"));
        assert_eq!(generate("h-screen", &theme).as_deref(), Some("height:100vh"));
        assert_eq!(generate("w-fit", &theme).as_deref(), Some("width:fit-content"));
        assert_eq!(generate("min-w-min", &theme).as_deref(), Some("min-width:min-content"));
        assert_eq!(generate("max-w-none", &theme).as_deref(), Some("max-width:none"));
        assert_eq!(generate("size-screen", &theme), None);
    }

    #[test]
    fn fractions_and_scale() {
        let theme = Theme::default();
        assert_eq!(generate("w-1/2", &theme).as_deref(), Some("width:50%"));
        assert_eq!(generate("w-2/3", &theme).as_deref(), Some("width:66.666667%"));
        assert_eq!(generate("h-4", &theme).as_deref(), Some("height:1rem"));
        assert_eq!(generate("size-8", &theme).as_deref(), Some("width:2rem;height:2rem"));
        assert_eq!(generate("max-h-96", &theme).as_deref(), Some("max-height:24rem"));
    }

    #[test]
    fn keyword_order_precedes_scale() {
        // `full` is a keyword, never a fraction or a scale step.
        let theme = Theme::default();
        assert_eq!(generate("w-full", &theme).as_deref(), Some("width:100%"));
    }

    #[test]
    fn rejects_unknown_tokens() {
        let theme = Theme::default();
        assert_eq!(generate("w-banana", &theme), None);
        assert_eq!(generate("w-97", &theme), None);
        assert_eq!(generate("width-4", &theme), None);
    }
}
