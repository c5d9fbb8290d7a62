//! Content scanning: walks the configured globs and extracts candidate
//! class tokens from markup and script sources.
//!
//! The scanner produces the token set the compiler consumes; it never
//! interprets tokens itself. Extraction is deliberately permissive and
//! the candidate filter deliberately strict: anything that survives both
//! still resolves to nothing in the compiler unless a resolver claims it.

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub classes: Vec<String>,
    pub files_scanned: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub base_path: PathBuf,
    pub respect_gitignore: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            respect_gitignore: true,
        }
    }
}

pub fn scan_globs(patterns: &[String]) -> Result<ScanResult, ScanError> {
    scan_globs_with_ignore(patterns, &[])
}

pub fn scan_globs_with_ignore(
    patterns: &[String],
    ignore_patterns: &[String],
) -> Result<ScanResult, ScanError> {
    scan_globs_with_options(patterns, ignore_patterns, &ScanOptions::default())
}

pub fn scan_globs_with_options(
    patterns: &[String],
    ignore_patterns: &[String],
    options: &ScanOptions,
) -> Result<ScanResult, ScanError> {
    if patterns.is_empty() {
        return Err(ScanError {
            message: "scan requires at least one glob pattern".to_string(),
        });
    }

    let globs = build_globset(patterns)?;
    let ignored = build_globset(ignore_patterns)?;

    let mut classes = Vec::new();
    let mut seen = HashSet::new();
    let mut seen_paths = HashSet::new();
    let mut files_scanned = 0usize;

    for root in walk_roots(patterns, &options.base_path) {
        let mut builder = WalkBuilder::new(&root);
        builder
            .hidden(false)
            .git_ignore(options.respect_gitignore)
            .git_global(options.respect_gitignore)
            .git_exclude(options.respect_gitignore);

        for entry in builder.build() {
            let Ok(entry) = entry else { continue };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let path = entry.path();
            let relative = path.strip_prefix(&options.base_path).unwrap_or(path);
            if !globs.is_match(relative) && !globs.is_match(path) {
                continue;
            }
            if ignored.is_match(relative) || ignored.is_match(path) {
                continue;
            }
            if skip_by_name(path) {
                continue;
            }
            if !seen_paths.insert(path.to_path_buf()) {
                continue;
            }
            let Ok(text) = fs::read_to_string(path) else {
                continue;
            };
            files_scanned += 1;
            let ext = path
                .extension()
                .and_then(|value| value.to_str())
                .map(|value| value.to_ascii_lowercase());
            for class in extract_classes(&text, ext.as_deref()) {
                if seen.insert(class.clone()) {
                    classes.push(class);
                }
            }
        }
    }

    Ok(ScanResult {
        classes,
        files_scanned,
    })
}

/// One walk root per pattern: the directory prefix before the first glob
/// metacharacter, resolved against the base path and deduplicated.
fn walk_roots(patterns: &[String], base: &Path) -> Vec<PathBuf> {
    let mut roots = Vec::new();
    let mut seen = HashSet::new();

    for pattern in patterns {
        let prefix_end = pattern
            .find(['*', '?', '[', '{'])
            .unwrap_or(pattern.len());
        let root = match pattern[..prefix_end].rfind('/') {
            Some(idx) => PathBuf::from(&pattern[..=idx]),
            None => PathBuf::from("."),
        };
        let root = if root.is_absolute() {
            root
        } else {
            base.join(root)
        };
        if seen.insert(root.clone()) {
            roots.push(root);
        }
    }

    roots
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, ScanError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|err| ScanError {
            message: format!("invalid glob pattern '{}': {}", pattern, err),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|err| ScanError {
        message: format!("failed to build glob set: {}", err),
    })
}

fn skip_by_name(path: &Path) -> bool {
    if path
        .components()
        .any(|component| component.as_os_str() == "node_modules")
    {
        return true;
    }
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(|value| value.to_ascii_lowercase());
    // Stylesheets would feed emitted class names straight back in.
    matches!(
        ext.as_deref(),
        Some("css" | "scss" | "sass" | "less" | "map" | "lock")
    )
}

/// Extracts candidate class tokens, choosing the extraction strategy by
/// file extension.
pub fn extract_classes(text: &str, ext: Option<&str>) -> Vec<String> {
    let candidates = match ext {
        Some("html" | "htm" | "vue" | "svelte" | "astro") => class_attribute_values(text),
        Some("js" | "jsx" | "ts" | "tsx" | "mjs" | "cjs") => {
            let mut values = string_literal_values(text);
            values.extend(class_attribute_values(text));
            values
        }
        _ => {
            let mut values = class_attribute_values(text);
            values.extend(string_literal_values(text));
            values
        }
    };

    let mut classes = Vec::new();
    let mut seen = HashSet::new();
    for candidate in candidates {
        for token in split_class_list(&candidate) {
            if is_valid_candidate(&token) && seen.insert(token.clone()) {
                classes.push(token);
            }
        }
    }
    classes
}

/// Collects the values of `class`/`className` attributes.
fn class_attribute_values(text: &str) -> Vec<String> {
    const ATTRS: [&str; 3] = ["className", "class:list", "class"];
    let mut out = Vec::new();

    for attr in ATTRS {
        for (idx, _) in text.match_indices(attr) {
            if !at_word_boundary(text, idx, attr.len()) {
                continue;
            }
            let mut pos = skip_whitespace(text, idx + attr.len());
            if !text[pos..].starts_with('=') {
                continue;
            }
            pos = skip_whitespace(text, pos + 1);
            let Some(quote) = text[pos..].chars().next().filter(|c| *c == '"' || *c == '\'')
            else {
                continue;
            };
            let (value, _) = read_quoted(text, pos + 1, quote);
            out.push(value);
        }
    }

    out
}

/// Collects every plain string literal and every static chunk of template
/// literals. `${...}` interpolations contribute only the literals nested
/// inside them, so tokens stitched together at runtime are never
/// half-captured.
fn string_literal_values(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut idx = 0;

    while idx < text.len() {
        let Some(ch) = text[idx..].chars().next() else {
            break;
        };
        match ch {
            '"' | '\'' => {
                let (value, next) = read_quoted(text, idx + 1, ch);
                if !value.is_empty() {
                    out.push(value);
                }
                idx = next;
            }
            '`' => {
                let (chunks, next) = read_template(text, idx + 1);
                out.extend(chunks);
                idx = next;
            }
            _ => idx += ch.len_utf8(),
        }
    }

    out
}

fn read_quoted(text: &str, mut idx: usize, quote: char) -> (String, usize) {
    let mut value = String::new();
    while idx < text.len() {
        let Some(ch) = text[idx..].chars().next() else {
            break;
        };
        idx += ch.len_utf8();
        if ch == '\\' {
            if let Some(next) = text[idx..].chars().next() {
                value.push(next);
                idx += next.len_utf8();
                continue;
            }
            break;
        }
        if ch == quote {
            break;
        }
        value.push(ch);
    }
    (value, idx)
}

fn read_template(text: &str, mut idx: usize) -> (Vec<String>, usize) {
    let mut chunks = Vec::new();
    let mut current = String::new();

    while idx < text.len() {
        let Some(ch) = text[idx..].chars().next() else {
            break;
        };
        idx += ch.len_utf8();
        match ch {
            '`' => break,
            '\\' => {
                if let Some(next) = text[idx..].chars().next() {
                    current.push(next);
                    idx += next.len_utf8();
                }
            }
            '$' if text[idx..].starts_with('{') => {
                if !current.is_empty() {
                    chunks.push(std::mem::take(&mut current));
                }
                idx += 1;
                let mut depth = 1usize;
                while idx < text.len() && depth > 0 {
                    let Some(inner) = text[idx..].chars().next() else {
                        break;
                    };
                    match inner {
                        '{' => {
                            depth += 1;
                            idx += 1;
                        }
                        '}' => {
                            depth -= 1;
                            idx += 1;
                        }
                        // Conditional classes live in literals nested
                        // inside the interpolation.
                        '"' | '\'' => {
                            let (value, next) = read_quoted(text, idx + 1, inner);
                            if !value.is_empty() {
                                chunks.push(value);
                            }
                            idx = next;
                        }
                        _ => idx += inner.len_utf8(),
                    }
                }
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    (chunks, idx)
}

/// Splits a class list on whitespace, keeping whitespace inside `[...]`
/// or `(...)` (arbitrary values) within one token.
fn split_class_list(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in input.chars() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if ch.is_whitespace() && depth == 0 {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(ch);
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Filters out candidates that cannot be class tokens: paths, sentences,
/// unbalanced brackets, or strings with characters no utility uses.
fn is_valid_candidate(token: &str) -> bool {
    if token.is_empty() || token.starts_with('.') || token.starts_with('/') {
        return false;
    }

    let mut has_letter = false;
    let mut bracket_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in token.chars() {
        if ch.is_ascii_alphabetic() {
            has_letter = true;
        }
        match ch {
            '[' => bracket_depth += 1,
            ']' => {
                if bracket_depth == 0 {
                    return false;
                }
                bracket_depth -= 1;
            }
            '(' => paren_depth += 1,
            ')' => {
                if paren_depth == 0 {
                    return false;
                }
                paren_depth -= 1;
            }
            ',' | '#' | '%' | ' ' => {
                if bracket_depth == 0 && paren_depth == 0 {
                    return false;
                }
            }
            c if c.is_ascii_alphanumeric() => {}
            '-' | '_' | ':' | '.' | '/' => {}
            _ => return false,
        }
    }

    if bracket_depth != 0 || paren_depth != 0 {
        return false;
    }
    if token.ends_with(':') || token.ends_with('-') {
        return false;
    }
    has_letter
}

fn at_word_boundary(text: &str, idx: usize, len: usize) -> bool {
    let prev = text[..idx].chars().last();
    let next = text[idx + len..].chars().next();
    let prev_ok = prev.is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'));
    let next_ok = next.is_none_or(|c| c.is_whitespace() || c == '=');
    prev_ok && next_ok
}

fn skip_whitespace(text: &str, mut idx: usize) -> usize {
    while let Some(ch) = text[idx..].chars().next() {
        if !ch.is_whitespace() {
            break;
        }
        idx += ch.len_utf8();
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::{ScanOptions, extract_classes, is_valid_candidate, scan_globs_with_options};
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn extracts_from_class_attribute() {
        let classes = extract_classes(r#"<div class="flex px-4 hover:bg-blue-500"></div>"#, Some("html"));
        assert_eq!(classes, vec!["flex", "px-4", "hover:bg-blue-500"]);
    }

    #[test]
    fn extracts_from_class_name_attribute() {
        let classes = extract_classes(r#"<Button className="md:px-4" />"#, Some("tsx"));
        assert!(classes.contains(&"md:px-4".to_string()));
    }

    #[test]
    fn keeps_arbitrary_values_intact() {
        let classes = extract_classes(r#"<div class="w-[342px] bg-[#1e40af]"></div>"#, Some("html"));
        assert!(classes.contains(&"w-[342px]".to_string()));
        assert!(classes.contains(&"bg-[#1e40af]".to_string()));
    }

    #[test]
    fn extracts_string_literals_from_scripts() {
        let classes = extract_classes(r#"const cls = "px-4 py-2";"#, Some("ts"));
        assert!(classes.contains(&"px-4".to_string()));
        assert!(classes.contains(&"py-2".to_string()));
    }

    #[test]
    fn template_chunks_split_at_interpolations() {
        let classes = extract_classes(r#"const cls = `p-4 ${active ? "bg-blue-500" : ""} m-2`;"#, Some("js"));
        assert!(classes.contains(&"p-4".to_string()));
        assert!(classes.contains(&"m-2".to_string()));
        assert!(classes.contains(&"bg-blue-500".to_string()));
        // No token stitched across the interpolation boundary.
        assert!(!classes.iter().any(|class| class.contains('$')));
    }

    #[test]
    fn deduplicates_across_candidates() {
        let classes = extract_classes(
            r#"<div class="flex"></div><span class="flex px-2"></span>"#,
            Some("html"),
        );
        assert_eq!(classes, vec!["flex", "px-2"]);
    }

    #[test]
    fn rejects_non_class_strings() {
        assert!(!is_valid_candidate("a sentence with spaces"));
        assert!(!is_valid_candidate("./relative/path"));
        assert!(!is_valid_candidate("w-[342px"));
        assert!(!is_valid_candidate("hover:"));
        assert!(!is_valid_candidate("1234"));
        assert!(is_valid_candidate("md:hover:bg-blue-500"));
        assert!(is_valid_candidate("w-[342px]"));
        assert!(is_valid_candidate("w-1/2"));
    }

    #[test]
    fn scans_files_matched_by_glob() {
        let dir = temp_dir("stylecast_scan");
        fs::create_dir_all(&dir).expect("create temp dir");
        fs::write(
            dir.join("index.html"),
            r#"<main class="flex items-center px-4"></main>"#,
        )
        .expect("write html");
        fs::write(dir.join("app.ts"), r#"el.className = "mt-2";"#).expect("write ts");
        fs::write(dir.join("styles.css"), ".flex { display: flex; }").expect("write css");

        let options = ScanOptions {
            base_path: dir.clone(),
            respect_gitignore: false,
        };
        let result = scan_globs_with_options(&["**/*".to_string()], &[], &options)
            .expect("scan should succeed");

        // The stylesheet is skipped, the markup and script are read.
        assert_eq!(result.files_scanned, 2);
        assert!(result.classes.contains(&"flex".to_string()));
        assert!(result.classes.contains(&"px-4".to_string()));
        assert!(result.classes.contains(&"mt-2".to_string()));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn ignore_patterns_exclude_files() {
        let dir = temp_dir("stylecast_scan_ignore");
        fs::create_dir_all(dir.join("generated")).expect("create temp dir");
        fs::write(dir.join("page.html"), r#"<div class="p-2"></div>"#).expect("write html");
        fs::write(
            dir.join("generated/out.html"),
            r#"<div class="p-8"></div>"#,
        )
        .expect("write generated html");

        let options = ScanOptions {
            base_path: dir.clone(),
            respect_gitignore: false,
        };
        let result = scan_globs_with_options(
            &["**/*.html".to_string()],
            &["**/generated/**".to_string()],
            &options,
        )
        .expect("scan should succeed");

        assert!(result.classes.contains(&"p-2".to_string()));
        assert!(!result.classes.contains(&"p-8".to_string()));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_patterns_error() {
        let err = scan_globs_with_options(&[], &[], &ScanOptions::default())
            .expect_err("empty patterns should error");
        assert!(err.message.contains("at least one glob"));
    }

    fn temp_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("{}_{}", prefix, nanos))
    }
}
