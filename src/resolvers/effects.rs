//! Box shadows from the theme scale and opacity.

use super::{format_number, parse_int};
use crate::config::Theme;

pub fn generate(utility: &str, theme: &Theme) -> Option<String> {
    if utility == "shadow" {
        let value = theme.box_shadow.get("DEFAULT")?;
        return Some(format!("box-shadow:{}", value));
    }
    if let Some(token) = utility.strip_prefix("shadow-") {
        let value = theme.box_shadow.get(token)?;
        return Some(format!("box-shadow:{}", value));
    }
    if let Some(token) = utility.strip_prefix("opacity-") {
        let value = parse_int(token).filter(|n| *n <= 100)?;
        return Some(format!("opacity:{}", format_number(f64::from(value) / 100.0)));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::generate;
    use crate::config::Theme;

    #[test]
    fn shadows_come_from_the_theme() {
        let theme = Theme::default();
        assert_eq!(
            generate("shadow", &theme).as_deref(),
            Some("box-shadow:0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)")
        );
        assert_eq!(
            generate("shadow-inner", &theme).as_deref(),
            Some("box-shadow:inset 0 2px 4px 0 rgb(0 0 0 / 0.05)")
        );
        assert_eq!(generate("shadow-none", &theme).as_deref(), Some("box-shadow:0 0 #0000"));
        assert_eq!(generate("shadow-enormous", &theme), None);
    }

    #[test]
    fn opacity_steps() {
        let theme = Theme::default();
        assert_eq!(generate("opacity-0", &theme).as_deref(), Some("opacity:0"));
        assert_eq!(generate("opacity-5", &theme).as_deref(), Some("opacity:0.05"));
        assert_eq!(generate("opacity-50", &theme).as_deref(), Some("opacity:0.5"));
        assert_eq!(generate("opacity-100", &theme).as_deref(), Some("opacity:1"));
        assert_eq!(generate("opacity-101", &theme), None);
        assert_eq!(generate("opacity-x", &theme), None);
    }
}
