//! Typography: font sizes from the theme scale, weights, families,
//! alignment, decoration and the text color fallback.

use super::{color_value, scale_rem};
use crate::config::Theme;

pub fn generate(utility: &str, theme: &Theme) -> Option<String> {
    let exact = match utility {
        "italic" => "font-style:italic",
        "not-italic" => "font-style:normal",
        "underline" => "text-decoration-line:underline",
        "overline" => "text-decoration-line:overline",
        "line-through" => "text-decoration-line:line-through",
        "no-underline" => "text-decoration-line:none",
        "uppercase" => "text-transform:uppercase",
        "lowercase" => "text-transform:lowercase",
        "capitalize" => "text-transform:capitalize",
        "normal-case" => "text-transform:none",
        "truncate" => "overflow:hidden;text-overflow:ellipsis;white-space:nowrap",
        "text-ellipsis" => "text-overflow:ellipsis",
        "text-clip" => "text-overflow:clip",
        "text-left" => "text-align:left",
        "text-center" => "text-align:center",
        "text-right" => "text-align:right",
        "text-justify" => "text-align:justify",
        "text-start" => "text-align:start",
        "text-end" => "text-align:end",
        "antialiased" => "-webkit-font-smoothing:antialiased;-moz-osx-font-smoothing:grayscale",
        "subpixel-antialiased" => "-webkit-font-smoothing:auto;-moz-osx-font-smoothing:auto",
        "font-sans" => {
            "font-family:ui-sans-serif, system-ui, sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\""
        }
        "font-serif" => "font-family:ui-serif, Georgia, Cambria, \"Times New Roman\", Times, serif",
        "font-mono" => {
            "font-family:ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace"
        }
        "font-thin" => "font-weight:100",
        "font-extralight" => "font-weight:200",
        "font-light" => "font-weight:300",
        "font-normal" => "font-weight:400",
        "font-medium" => "font-weight:500",
        "font-semibold" => "font-weight:600",
        "font-bold" => "font-weight:700",
        "font-extrabold" => "font-weight:800",
        "font-black" => "font-weight:900",
        "leading-none" => "line-height:1",
        "leading-tight" => "line-height:1.25",
        "leading-snug" => "line-height:1.375",
        "leading-normal" => "line-height:1.5",
        "leading-relaxed" => "line-height:1.625",
        "leading-loose" => "line-height:2",
        "tracking-tighter" => "letter-spacing:-0.05em",
        "tracking-tight" => "letter-spacing:-0.025em",
        "tracking-normal" => "letter-spacing:0em",
        "tracking-wide" => "letter-spacing:0.025em",
        "tracking-wider" => "letter-spacing:0.05em",
        "tracking-widest" => "letter-spacing:0.1em",
        _ => "",
    };
    if !exact.is_empty() {
        return Some(exact.to_string());
    }

    if let Some(token) = utility.strip_prefix("leading-") {
        let value = scale_rem(token)?;
        return Some(format!("line-height:{}", value));
    }

    if let Some(token) = utility.strip_prefix("text-") {
        if let Some(font_size) = theme.font_size.get(token) {
            return Some(match font_size.line_height.as_deref() {
                Some(line_height) => format!(
                    "font-size:{};line-height:{}",
                    font_size.size, line_height
                ),
                None => format!("font-size:{}", font_size.size),
            });
        }
        let color = color_value(theme, token)?;
        return Some(format!("color:{}", color));
    }

    None
}
