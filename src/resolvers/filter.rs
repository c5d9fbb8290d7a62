//! Filter utilities, emitted as direct `filter:` shorthand values.

use super::{format_number, parse_int};
use crate::config::Theme;

pub fn generate(utility: &str, _theme: &Theme) -> Option<String> {
    let exact = match utility {
        "blur-none" => "filter:blur(0)",
        "blur-sm" => "filter:blur(4px)",
        "blur" => "filter:blur(8px)",
        "blur-md" => "filter:blur(12px)",
        "blur-lg" => "filter:blur(16px)",
        "blur-xl" => "filter:blur(24px)",
        "blur-2xl" => "filter:blur(40px)",
        "blur-3xl" => "filter:blur(64px)",
        "grayscale" => "filter:grayscale(100%)",
        "grayscale-0" => "filter:grayscale(0)",
        "invert" => "filter:invert(100%)",
        "invert-0" => "filter:invert(0)",
        "sepia" => "filter:sepia(100%)",
        "sepia-0" => "filter:sepia(0)",
        _ => "",
    };
    if !exact.is_empty() {
        return Some(exact.to_string());
    }

    let (base, negative) = match utility.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (utility, false),
    };

    if let Some(token) = base.strip_prefix("hue-rotate-") {
        let degrees = parse_int(token).filter(|n| *n <= 360)?;
        let sign = if negative { "-" } else { "" };
        return Some(format!("filter:hue-rotate({}{}deg)", sign, degrees));
    }
    if negative {
        return None;
    }

    for (prefix, function) in [
        ("brightness-", "brightness"),
        ("contrast-", "contrast"),
        ("saturate-", "saturate"),
    ] {
        if let Some(token) = base.strip_prefix(prefix) {
            let value = parse_int(token).filter(|n| *n <= 200)?;
            return Some(format!(
                "filter:{}({})",
                function,
                format_number(f64::from(value) / 100.0)
            ));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::generate;
    use crate::config::Theme;

    #[test]
    fn blur_scale() {
        let theme = Theme::default();
        assert_eq!(generate("blur", &theme).as_deref(), Some("filter:blur(8px)"));
        assert_eq!(generate("blur-sm", &theme).as_deref(), Some("filter:blur(4px)"));
        assert_eq!(generate("blur-none", &theme).as_deref(), Some("filter:blur(0)"));
        assert_eq!(generate("blur-4xl", &theme), None);
    }

    #[test]
    fn percentage_filters() {
        let theme = Theme::default();
        assert_eq!(generate("brightness-50", &theme).as_deref(), Some("filter:brightness(0.5)"));
        assert_eq!(generate("contrast-125", &theme).as_deref(), Some("filter:contrast(1.25)"));
        assert_eq!(generate("saturate-200", &theme).as_deref(), Some("filter:saturate(2)"));
        assert_eq!(generate("grayscale", &theme).as_deref(), Some("filter:grayscale(100%)"));
        assert_eq!(generate("brightness-201", &theme), None);
    }

    #[test]
    fn hue_rotation() {
        let theme = Theme::default();
        assert_eq!(
            generate("hue-rotate-90", &theme).as_deref(),
            Some("filter:hue-rotate(90deg)")
        );
        assert_eq!(
            generate("-hue-rotate-30", &theme).as_deref(),
            Some("filter:hue-rotate(-30deg)")
        );
    }
}
