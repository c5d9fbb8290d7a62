//! Transition and animation utilities.
//!
//! The `@keyframes` referenced by `animate-*` ship in the static
//! preflight block.

use super::parse_int;
use crate::config::Theme;

const DEFAULT_TIMING: &str =
    "transition-timing-function:cubic-bezier(0.4, 0, 0.2, 1);transition-duration:150ms";

pub fn generate(utility: &str, _theme: &Theme) -> Option<String> {
    let exact = match utility {
        "transition" => {
            return Some(format!(
                "transition-property:color, background-color, border-color, text-decoration-color, fill, stroke, opacity, box-shadow, transform, filter, backdrop-filter;{}",
                DEFAULT_TIMING
            ));
        }
        "transition-none" => "transition-property:none",
        "transition-all" => {
            return Some(format!("transition-property:all;{}", DEFAULT_TIMING));
        }
        "transition-colors" => {
            return Some(format!(
                "transition-property:color, background-color, border-color, text-decoration-color, fill, stroke;{}",
                DEFAULT_TIMING
            ));
        }
        "transition-opacity" => {
            return Some(format!("transition-property:opacity;{}", DEFAULT_TIMING));
        }
        "transition-shadow" => {
            return Some(format!("transition-property:box-shadow;{}", DEFAULT_TIMING));
        }
        "transition-transform" => {
            return Some(format!("transition-property:transform;{}", DEFAULT_TIMING));
        }
        "ease-linear" => "transition-timing-function:linear",
        "ease-in" => "transition-timing-function:cubic-bezier(0.4, 0, 1, 1)",
        "ease-out" => "transition-timing-function:cubic-bezier(0, 0, 0.2, 1)",
        "ease-in-out" => "transition-timing-function:cubic-bezier(0.4, 0, 0.2, 1)",
        "animate-none" => "animation:none",
        "animate-spin" => "animation:spin 1s linear infinite",
        "animate-ping" => "animation:ping 1s cubic-bezier(0, 0, 0.2, 1) infinite",
        "animate-pulse" => "animation:pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite",
        "animate-bounce" => "animation:bounce 1s infinite",
        _ => "",
    };
    if !exact.is_empty() {
        return Some(exact.to_string());
    }

    if let Some(token) = utility.strip_prefix("duration-") {
        let millis = parse_int(token).filter(|n| *n <= 1000)?;
        return Some(format!("transition-duration:{}ms", millis));
    }
    if let Some(token) = utility.strip_prefix("delay-") {
        let millis = parse_int(token).filter(|n| *n <= 1000)?;
        return Some(format!("transition-delay:{}ms", millis));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::generate;
    use crate::config::Theme;

    #[test]
    fn transition_property_sets() {
        let theme = Theme::default();
        let css = generate("transition", &theme).expect("transition should resolve");
        assert!(css.contains("transition-property:color, background-color"));
        assert!(css.contains("transition-duration:150ms"));
        assert_eq!(
            generate("transition-none", &theme).as_deref(),
            Some("transition-property:none")
        );
        let css = generate("transition-opacity", &theme).expect("should resolve");
        assert!(css.starts_with("transition-property:opacity;"));
    }

    #[test]
    fn durations_and_delays() {
        let theme = Theme::default();
        assert_eq!(
            generate("duration-150", &theme).as_deref(),
            Some("transition-duration:150ms")
        );
        assert_eq!(generate("delay-75", &theme).as_deref(), Some("transition-delay:75ms"));
        assert_eq!(generate("duration-1001", &theme), None);
    }

    #[test]
    fn easing_and_animations() {
        let theme = Theme::default();
        assert_eq!(
            generate("ease-in-out", &theme).as_deref(),
            Some("transition-timing-function:cubic-bezier(0.4, 0, 0.2, 1)")
        );
        assert_eq!(
            generate("animate-spin", &theme).as_deref(),
            Some("animation:spin 1s linear infinite")
        );
        assert_eq!(generate("animate-wiggle", &theme), None);
    }
}
