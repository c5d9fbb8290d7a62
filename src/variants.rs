//! Variant-chain parsing, classification and application.
//!
//! A class token is `variant:variant:utility`. Parsing splits on the
//! configured separator at the top level only, so separators inside
//! `[...]` or `(...)` never split a token. Application sorts variants by
//! kind priority and mutates the selector, collecting media-level work as
//! at-rule wrappers that render outermost-last.

use crate::config::{Config, DarkMode, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass {
    pub variants: Vec<String>,
    pub utility: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    Theme,
    State,
    Responsive,
    Relational,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledUtility {
    /// The originating utility identifier (without variants or value).
    pub utility: String,
    pub selector: String,
    pub declarations: String,
    /// Wrapping at-rules, outermost first.
    pub at_rules: Vec<String>,
}

pub fn parse_class(token: &str, separator: &str) -> ParsedClass {
    let mut segments = split_top_level(token, separator);
    let last = segments.pop().unwrap_or_default();
    let (utility, value) = split_arbitrary_value(&last);
    ParsedClass {
        variants: segments,
        utility,
        value,
    }
}

/// Splits `input` on `separator`, ignoring separators nested inside
/// brackets or parentheses.
pub fn split_top_level(input: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return vec![input.to_string()];
    }

    let mut segments = Vec::new();
    let mut bracket_depth = 0usize;
    let mut paren_depth = 0usize;
    let mut start = 0usize;
    let mut idx = 0usize;

    while idx < input.len() {
        let Some(ch) = input[idx..].chars().next() else {
            break;
        };
        match ch {
            '[' => bracket_depth += 1,
            ']' => bracket_depth = bracket_depth.saturating_sub(1),
            '(' => paren_depth += 1,
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ => {}
        }
        if bracket_depth == 0 && paren_depth == 0 && input[idx..].starts_with(separator) {
            segments.push(input[start..idx].to_string());
            idx += separator.len();
            start = idx;
            continue;
        }
        idx += ch.len_utf8();
    }
    segments.push(input[start..].to_string());
    segments
}

fn split_arbitrary_value(segment: &str) -> (String, Option<String>) {
    if segment.ends_with(']') {
        if let Some(idx) = segment.rfind("-[") {
            let utility = &segment[..idx];
            let value = &segment[idx + 1..];
            if !utility.is_empty() {
                return (utility.to_string(), Some(value.to_string()));
            }
        }
    }
    (segment.to_string(), None)
}

pub fn classify(variant: &str, theme: &Theme) -> VariantKind {
    if variant == "dark" {
        return VariantKind::Theme;
    }
    if theme.screens.contains_key(variant) {
        return VariantKind::Responsive;
    }
    if state_pseudo(variant).is_some() {
        return VariantKind::State;
    }
    if let Some(rest) = variant
        .strip_prefix("group-")
        .or_else(|| variant.strip_prefix("peer-"))
    {
        if state_pseudo(rest).is_some() {
            return VariantKind::Relational;
        }
    }
    VariantKind::Unknown
}

fn priority(kind: VariantKind) -> u8 {
    match kind {
        VariantKind::Theme => 1,
        VariantKind::State => 2,
        VariantKind::Responsive => 3,
        VariantKind::Relational => 4,
        VariantKind::Unknown => 5,
    }
}

fn state_pseudo(variant: &str) -> Option<&'static str> {
    let pseudo = match variant {
        "hover" => ":hover",
        "focus" => ":focus",
        "focus-within" => ":focus-within",
        "focus-visible" => ":focus-visible",
        "active" => ":active",
        "visited" => ":visited",
        "target" => ":target",
        "first" => ":first-child",
        "last" => ":last-child",
        "only" => ":only-child",
        "odd" => ":nth-child(odd)",
        "even" => ":nth-child(even)",
        "empty" => ":empty",
        "disabled" => ":disabled",
        "enabled" => ":enabled",
        "checked" => ":checked",
        "indeterminate" => ":indeterminate",
        "required" => ":required",
        "optional" => ":optional",
        "valid" => ":valid",
        "invalid" => ":invalid",
        "read-only" => ":read-only",
        "placeholder-shown" => ":placeholder-shown",
        _ => return None,
    };
    Some(pseudo)
}

/// Wraps the resolved declarations in the token's variant chain.
///
/// Selector rewrites all land before any at-rule wrap: media-level
/// variants only push onto `at_rules`, and rendering applies those around
/// the finished rule, so an at-rule is always the outermost construct.
pub fn apply(token: &str, parsed: &ParsedClass, declarations: String, config: &Config) -> CompiledUtility {
    let mut selector = format!(".{}", escape_selector(token));
    let mut at_rules = Vec::new();

    let mut ordered: Vec<&String> = parsed.variants.iter().collect();
    ordered.sort_by_key(|variant| priority(classify(variant, &config.theme)));

    for variant in ordered {
        match classify(variant, &config.theme) {
            VariantKind::Theme => match config.dark_mode {
                DarkMode::Class => selector = format!(".dark {}", selector),
                DarkMode::Media => {
                    at_rules.push("@media (prefers-color-scheme: dark)".to_string());
                }
            },
            VariantKind::State => {
                if let Some(pseudo) = state_pseudo(variant) {
                    selector.push_str(pseudo);
                }
            }
            VariantKind::Responsive => {
                if let Some(width) = config.theme.screens.get(variant.as_str()) {
                    at_rules.push(format!("@media (width >= {})", width));
                }
            }
            VariantKind::Relational => {
                if let Some(rest) = variant.strip_prefix("group-") {
                    if let Some(pseudo) = state_pseudo(rest) {
                        selector = format!(".group{} {}", pseudo, selector);
                    }
                } else if let Some(rest) = variant.strip_prefix("peer-") {
                    if let Some(pseudo) = state_pseudo(rest) {
                        selector = format!(".peer{} ~ {}", pseudo, selector);
                    }
                }
            }
            VariantKind::Unknown => {}
        }
    }

    CompiledUtility {
        utility: parsed.utility.clone(),
        selector,
        declarations,
        at_rules,
    }
}

impl CompiledUtility {
    pub fn render(&self, minify: bool) -> String {
        let mut css = if minify {
            format!(
                "{}{{{}}}",
                self.selector,
                format_declarations(&self.declarations, true)
            )
        } else {
            let body = self
                .declarations
                .split(';')
                .map(str::trim)
                .filter(|decl| !decl.is_empty())
                .filter_map(|decl| {
                    let (name, value) = decl.split_once(':')?;
                    Some(format!("  {}: {};", name.trim(), value.trim()))
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("{} {{\n{}\n}}", self.selector, body)
        };

        for at_rule in self.at_rules.iter().rev() {
            css = if minify {
                format!("{}{{{}}}", at_rule, css)
            } else {
                format!("{} {{\n{}\n}}", at_rule, indent_block(&css, 2))
            };
        }

        css
    }
}

fn format_declarations(declarations: &str, minify: bool) -> String {
    let mut parts = Vec::new();
    for decl in declarations.split(';') {
        let decl = decl.trim();
        if decl.is_empty() {
            continue;
        }
        let Some((name, value)) = decl.split_once(':') else {
            continue;
        };
        if minify {
            parts.push(format!("{}:{}", name.trim(), value.trim()));
        } else {
            parts.push(format!("{}: {}", name.trim(), value.trim()));
        }
    }
    if minify {
        parts.join(";")
    } else {
        parts.join("; ")
    }
}

fn indent_block(block: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    block
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn escape_selector(class: &str) -> String {
    let mut escaped = String::with_capacity(class.len() * 2);
    for ch in class.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ':' => escaped.push_str("\\:"),
            '/' => escaped.push_str("\\/"),
            '.' => escaped.push_str("\\."),
            '[' => escaped.push_str("\\["),
            ']' => escaped.push_str("\\]"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            '%' => escaped.push_str("\\%"),
            '#' => escaped.push_str("\\#"),
            ',' => escaped.push_str("\\,"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(ch),
        }
    }
    escaped
}
