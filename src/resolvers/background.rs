//! Background utilities: attachment, clipping, position, repeat, size and
//! the palette color fallback.

use super::color_value;
use crate::config::Theme;

pub fn generate(utility: &str, theme: &Theme) -> Option<String> {
    let exact = match utility {
        "bg-fixed" => "background-attachment:fixed",
        "bg-local" => "background-attachment:local",
        "bg-scroll" => "background-attachment:scroll",
        "bg-clip-border" => "background-clip:border-box",
        "bg-clip-padding" => "background-clip:padding-box",
        "bg-clip-content" => "background-clip:content-box",
        "bg-clip-text" => "background-clip:text",
        "bg-origin-border" => "background-origin:border-box",
        "bg-origin-padding" => "background-origin:padding-box",
        "bg-origin-content" => "background-origin:content-box",
        "bg-top" => "background-position:top",
        "bg-bottom" => "background-position:bottom",
        "bg-left" => "background-position:left",
        "bg-right" => "background-position:right",
        "bg-center" => "background-position:center",
        "bg-left-top" => "background-position:left top",
        "bg-left-bottom" => "background-position:left bottom",
        "bg-right-top" => "background-position:right top",
        "bg-right-bottom" => "background-position:right bottom",
        "bg-repeat" => "background-repeat:repeat",
        "bg-no-repeat" => "background-repeat:no-repeat",
        "bg-repeat-x" => "background-repeat:repeat-x",
        "bg-repeat-y" => "background-repeat:repeat-y",
        "bg-repeat-round" => "background-repeat:round",
        "bg-repeat-space" => "background-repeat:space",
        "bg-auto" => "background-size:auto",
        "bg-cover" => "background-size:cover",
        "bg-contain" => "background-size:contain",
        "bg-none" => "background-image:none",
        _ => "",
    };
    if !exact.is_empty() {
        return Some(exact.to_string());
    }

    let token = utility.strip_prefix("bg-")?;
    let color = color_value(theme, token)?;
    Some(format!("background-color:{}", color))
}

#[cfg(test)]
mod tests {
    use super::generate;
    use crate::config::Theme;

    #[test]
    fn palette_colors() {
        let theme = Theme::default();
        assert_eq!(
            generate("bg-blue-500", &theme).as_deref(),
            Some("background-color:#3b82f6")
        );
        assert_eq!(
            generate("bg-transparent", &theme).as_deref(),
            Some("background-color:transparent")
        );
        assert_eq!(generate("bg-blue-475", &theme), None);
    }

    #[test]
    fn fixed_keywords_win_over_color_lookup() {
        let theme = Theme::default();
        assert_eq!(generate("bg-cover", &theme).as_deref(), Some("background-size:cover"));
        assert_eq!(generate("bg-center", &theme).as_deref(), Some("background-position:center"));
        assert_eq!(generate("bg-no-repeat", &theme).as_deref(), Some("background-repeat:no-repeat"));
    }

    #[test]
    fn foreign_prefixes_fall_through() {
        let theme = Theme::default();
        assert_eq!(generate("text-blue-500", &theme), None);
        assert_eq!(generate("background-red", &theme), None);
    }
}
