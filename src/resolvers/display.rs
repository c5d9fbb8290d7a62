//! Display utilities.

use crate::config::Theme;

pub fn generate(utility: &str, _theme: &Theme) -> Option<String> {
    let value = match utility {
        "block" => "block",
        "inline-block" => "inline-block",
        "inline" => "inline",
        "flex" => "flex",
        "inline-flex" => "inline-flex",
        "grid" => "grid",
        "inline-grid" => "inline-grid",
        "table" => "table",
        "table-row" => "table-row",
        "table-cell" => "table-cell",
        "contents" => "contents",
        "flow-root" => "flow-root",
        "hidden" => "none",
        _ => return None,
    };
    Some(format!("display:{}", value))
}
