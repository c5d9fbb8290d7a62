//! Flexbox and grid utilities.
//!
//! The generic `flex-<n>` growth arm is checked after the direction and
//! wrap arms so it cannot swallow `flex-row`/`flex-col`. Bare `flex` is
//! not claimed here; as a display value it belongs to the display
//! resolver.

use super::parse_int;
use crate::config::Theme;

pub fn generate(utility: &str, _theme: &Theme) -> Option<String> {
    let exact = match utility {
        "flex-row" => "flex-direction:row",
        "flex-row-reverse" => "flex-direction:row-reverse",
        "flex-col" => "flex-direction:column",
        "flex-col-reverse" => "flex-direction:column-reverse",
        "flex-wrap" => "flex-wrap:wrap",
        "flex-wrap-reverse" => "flex-wrap:wrap-reverse",
        "flex-nowrap" => "flex-wrap:nowrap",
        "flex-1" => "flex:1 1 0%",
        "flex-auto" => "flex:1 1 auto",
        "flex-initial" => "flex:0 1 auto",
        "flex-none" => "flex:none",
        "grow" => "flex-grow:1",
        "grow-0" => "flex-grow:0",
        "shrink" => "flex-shrink:1",
        "shrink-0" => "flex-shrink:0",
        "order-first" => "order:-9999",
        "order-last" => "order:9999",
        "order-none" => "order:0",
        "items-start" => "align-items:flex-start",
        "items-end" => "align-items:flex-end",
        "items-center" => "align-items:center",
        "items-baseline" => "align-items:baseline",
        "items-stretch" => "align-items:stretch",
        "justify-start" => "justify-content:flex-start",
        "justify-end" => "justify-content:flex-end",
        "justify-center" => "justify-content:center",
        "justify-between" => "justify-content:space-between",
        "justify-around" => "justify-content:space-around",
        "justify-evenly" => "justify-content:space-evenly",
        "content-start" => "align-content:flex-start",
        "content-end" => "align-content:flex-end",
        "content-center" => "align-content:center",
        "content-between" => "align-content:space-between",
        "content-around" => "align-content:space-around",
        "content-evenly" => "align-content:space-evenly",
        "self-auto" => "align-self:auto",
        "self-start" => "align-self:flex-start",
        "self-end" => "align-self:flex-end",
        "self-center" => "align-self:center",
        "self-stretch" => "align-self:stretch",
        "self-baseline" => "align-self:baseline",
        "grid-cols-none" => "grid-template-columns:none",
        "grid-rows-none" => "grid-template-rows:none",
        "col-auto" => "grid-column:auto",
        "col-span-full" => "grid-column:1 / -1",
        "row-auto" => "grid-row:auto",
        "row-span-full" => "grid-row:1 / -1",
        "grid-flow-row" => "grid-auto-flow:row",
        "grid-flow-col" => "grid-auto-flow:column",
        "grid-flow-dense" => "grid-auto-flow:dense",
        "grid-flow-row-dense" => "grid-auto-flow:row dense",
        "grid-flow-col-dense" => "grid-auto-flow:column dense",
        _ => "",
    };
    if !exact.is_empty() {
        return Some(exact.to_string());
    }

    if let Some(token) = utility.strip_prefix("grid-cols-") {
        let count = grid_track_count(token)?;
        return Some(format!(
            "grid-template-columns:repeat({}, minmax(0, 1fr))",
            count
        ));
    }
    if let Some(token) = utility.strip_prefix("grid-rows-") {
        let count = grid_track_count(token)?;
        return Some(format!("grid-template-rows:repeat({}, minmax(0, 1fr))", count));
    }
    if let Some(token) = utility.strip_prefix("col-span-") {
        let count = grid_track_count(token)?;
        return Some(format!("grid-column:span {} / span {}", count, count));
    }
    if let Some(token) = utility.strip_prefix("row-span-") {
        let count = grid_track_count(token)?;
        return Some(format!("grid-row:span {} / span {}", count, count));
    }
    if let Some(token) = utility.strip_prefix("col-start-") {
        return Some(format!("grid-column-start:{}", grid_line(token)?));
    }
    if let Some(token) = utility.strip_prefix("col-end-") {
        return Some(format!("grid-column-end:{}", grid_line(token)?));
    }
    if let Some(token) = utility.strip_prefix("row-start-") {
        return Some(format!("grid-row-start:{}", grid_line(token)?));
    }
    if let Some(token) = utility.strip_prefix("row-end-") {
        return Some(format!("grid-row-end:{}", grid_line(token)?));
    }
    if let Some(token) = utility.strip_prefix("order-") {
        let value = parse_int(token).filter(|n| (1..=12).contains(n))?;
        return Some(format!("order:{}", value));
    }

    // Generic growth shorthand (`flex-2` → `flex: 2 2 0%`). Digits only,
    // so the named arms above keep their identifiers.
    if let Some(token) = utility.strip_prefix("flex-") {
        let value = parse_int(token)?;
        return Some(format!("flex:{} {} 0%", value, value));
    }

    None
}

fn grid_track_count(token: &str) -> Option<u32> {
    parse_int(token).filter(|count| (1..=12).contains(count))
}

fn grid_line(token: &str) -> Option<String> {
    if token == "auto" {
        return Some("auto".to_string());
    }
    parse_int(token)
        .filter(|line| (1..=13).contains(line))
        .map(|line| line.to_string())
}
