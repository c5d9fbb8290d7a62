//! The JIT compilation driver.
//!
//! Tokens are handed in by the scanner (or any other caller); the
//! compiler performs no I/O and discovers nothing itself. Each token runs
//! parse → resolve → variant application, with results cached per token
//! when caching is enabled. The cache belongs to exactly one compiler
//! instance and only `compile` mutates it.

use crate::config::Config;
use crate::resolvers;
use crate::variants;
use log::debug;
use std::collections::HashMap;

const PREFLIGHT_CSS: &str = include_str!("preflight.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerOptions {
    pub cache_enabled: bool,
    pub minify: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            minify: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub size: usize,
    pub enabled: bool,
}

#[derive(Debug)]
pub struct Compiler {
    config: Config,
    options: CompilerOptions,
    cache: HashMap<String, Option<String>>,
}

impl Compiler {
    pub fn new(config: Config, options: CompilerOptions) -> Self {
        Self {
            config,
            options,
            cache: HashMap::new(),
        }
    }

    /// Compiles the token set into a single CSS blob: the static
    /// preflight first (when enabled), then one fragment per resolved
    /// token in iteration order. Unresolvable tokens contribute nothing.
    pub fn compile(&mut self, tokens: &[String]) -> String {
        let mut fragments = Vec::new();
        if self.config.core_plugins.preflight {
            fragments.push(PREFLIGHT_CSS.trim_end().to_string());
        }

        let mut hits = 0usize;
        let mut resolved = 0usize;
        for token in tokens {
            let fragment = if self.options.cache_enabled {
                if let Some(cached) = self.cache.get(token.as_str()) {
                    hits += 1;
                    cached.clone()
                } else {
                    let compiled = self.compile_token(token);
                    self.cache.insert(token.clone(), compiled.clone());
                    compiled
                }
            } else {
                self.compile_token(token)
            };
            if let Some(css) = fragment {
                resolved += 1;
                fragments.push(css);
            }
        }

        debug!(
            "compiled {} tokens ({} resolved, {} cache hits)",
            tokens.len(),
            resolved,
            hits
        );

        let separator = if self.options.minify { "" } else { "\n" };
        fragments.join(separator)
    }

    fn compile_token(&self, token: &str) -> Option<String> {
        let parsed = variants::parse_class(token, &self.config.separator);
        let declarations = resolvers::generate(
            &parsed.utility,
            parsed.value.as_deref(),
            &self.config.theme,
        )?;
        let compiled = variants::apply(token, &parsed, declarations, &self.config);
        Some(compiled.render(self.options.minify))
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            size: self.cache.len(),
            enabled: self.options.cache_enabled,
        }
    }

    /// Drops every cached fragment; the next compile starts cold. Used by
    /// development reloads after content changes.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{Compiler, CompilerOptions};
    use crate::config::Config;

    fn tokens(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn bare_config() -> Config {
        let mut config = Config::default();
        config.core_plugins.preflight = false;
        config
    }

    #[test]
    fn compiles_scenario_token_set() {
        let mut compiler = Compiler::new(bare_config(), CompilerOptions::default());
        let css = compiler.compile(&tokens(&["flex", "items-center", "px-4", "px-8"]));

        // Four independent declarations; the compiler never merges.
        assert!(css.contains(".flex {\n  display: flex;\n}"));
        assert!(css.contains(".items-center {\n  align-items: center;\n}"));
        assert!(css.contains(".px-4 {\n  padding-left: 1rem;\n  padding-right: 1rem;\n}"));
        assert!(css.contains(".px-8 {\n  padding-left: 2rem;\n  padding-right: 2rem;\n}"));
        // Fragments come out in token order.
        let flex_at = css.find(".flex").expect("flex rule");
        let px8_at = css.find(".px-8").expect("px-8 rule");
        assert!(flex_at < px8_at);
    }

    #[test]
    fn unknown_tokens_produce_no_output() {
        let mut compiler = Compiler::new(bare_config(), CompilerOptions::default());
        let css = compiler.compile(&tokens(&["my-custom-widget", "flex"]));
        assert!(!css.contains("my-custom-widget"));
        assert!(css.contains(".flex"));
    }

    #[test]
    fn arbitrary_value_round_trip() {
        let mut compiler = Compiler::new(bare_config(), CompilerOptions::default());
        let css = compiler.compile(&tokens(&["w-[342px]", "w-[not-a-length]"]));
        assert!(css.contains("width: 342px;"));
        assert!(!css.contains("not-a-length"));
    }

    #[test]
    fn variant_nesting_keeps_media_outermost() {
        let mut compiler = Compiler::new(bare_config(), CompilerOptions::default());
        let css = compiler.compile(&tokens(&["md:hover:bg-blue-500"]));
        assert!(css.starts_with("@media (width >= 48rem) {"));
        assert!(css.contains(".md\\:hover\\:bg-blue-500:hover {"));
        assert!(css.contains("background-color: #3b82f6;"));
    }

    #[test]
    fn preflight_prefixes_output_when_enabled() {
        let mut compiler = Compiler::new(Config::default(), CompilerOptions::default());
        let css = compiler.compile(&tokens(&["flex"]));
        assert!(css.starts_with("/* stylecast preflight */"));
        let preflight_at = css.find("box-sizing").expect("preflight body");
        let flex_at = css.find(".flex {").expect("flex rule");
        assert!(preflight_at < flex_at);
    }

    #[test]
    fn cache_grows_and_clears() {
        let mut compiler = Compiler::new(bare_config(), CompilerOptions::default());
        compiler.compile(&tokens(&["flex", "px-4", "nonsense"]));
        let stats = compiler.cache_stats();
        assert!(stats.enabled);
        // Non-resolving tokens are cached too, so re-scans skip them.
        assert_eq!(stats.size, 3);

        compiler.compile(&tokens(&["flex"]));
        assert_eq!(compiler.cache_stats().size, 3);

        compiler.clear_cache();
        assert_eq!(compiler.cache_stats().size, 0);
    }

    #[test]
    fn disabled_cache_stays_empty() {
        let options = CompilerOptions {
            cache_enabled: false,
            ..CompilerOptions::default()
        };
        let mut compiler = Compiler::new(bare_config(), options);
        compiler.compile(&tokens(&["flex", "px-4"]));
        let stats = compiler.cache_stats();
        assert!(!stats.enabled);
        assert_eq!(stats.size, 0);
    }

    #[test]
    fn repeated_compiles_are_idempotent() {
        let mut compiler = Compiler::new(bare_config(), CompilerOptions::default());
        let set = tokens(&["flex", "md:px-4", "hover:bg-blue-500"]);
        let first = compiler.compile(&set);
        let second = compiler.compile(&set);
        assert_eq!(first, second);
    }

    #[test]
    fn minified_output_collapses_whitespace() {
        let options = CompilerOptions {
            minify: true,
            ..CompilerOptions::default()
        };
        let mut compiler = Compiler::new(bare_config(), options);
        let css = compiler.compile(&tokens(&["md:flex", "px-4"]));
        assert!(css.contains("@media (width >= 48rem){.md\\:flex{display:flex}}"));
        assert!(css.contains(".px-4{padding-left:1rem;padding-right:1rem}"));
        assert!(!css.contains('\n'));
    }
}
