use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub dark_mode: DarkMode,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub core_plugins: CorePlugins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Scope dark utilities under a `.dark` ancestor class.
    Class,
    /// Scope dark utilities with a `prefers-color-scheme` media query.
    #[default]
    Media,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CorePlugins {
    #[serde(default = "default_true")]
    pub preflight: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theme {
    #[serde(default = "default_screens")]
    pub screens: BTreeMap<String, String>,
    #[serde(default = "default_colors")]
    pub colors: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default = "default_font_size")]
    pub font_size: BTreeMap<String, FontSize>,
    #[serde(default = "default_border_radius")]
    pub border_radius: BTreeMap<String, String>,
    #[serde(default = "default_box_shadow")]
    pub box_shadow: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FontSize {
    pub size: String,
    #[serde(default)]
    pub line_height: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub message: String,
}

pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|err| ConfigError {
        message: format!("failed to read config {}: {}", path.display(), err),
    })?;
    toml::from_str(&text).map_err(|err| ConfigError {
        message: format!("failed to parse config {}: {}", path.display(), err),
    })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            dark_mode: DarkMode::default(),
            separator: default_separator(),
            core_plugins: CorePlugins::default(),
        }
    }
}

impl Default for CorePlugins {
    fn default() -> Self {
        Self { preflight: true }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            screens: default_screens(),
            colors: default_colors(),
            font_size: default_font_size(),
            border_radius: default_border_radius(),
            box_shadow: default_box_shadow(),
        }
    }
}

fn default_separator() -> String {
    ":".to_string()
}

fn default_true() -> bool {
    true
}

fn default_screens() -> BTreeMap<String, String> {
    named_values(&[
        ("sm", "40rem"),
        ("md", "48rem"),
        ("lg", "64rem"),
        ("xl", "80rem"),
        ("2xl", "96rem"),
    ])
}

fn default_font_size() -> BTreeMap<String, FontSize> {
    let entries: [(&str, &str, Option<&str>); 13] = [
        ("xs", "0.75rem", Some("1rem")),
        ("sm", "0.875rem", Some("1.25rem")),
        ("base", "1rem", Some("1.5rem")),
        ("lg", "1.125rem", Some("1.75rem")),
        ("xl", "1.25rem", Some("1.75rem")),
        ("2xl", "1.5rem", Some("2rem")),
        ("3xl", "1.875rem", Some("2.25rem")),
        ("4xl", "2.25rem", Some("2.5rem")),
        ("5xl", "3rem", Some("1")),
        ("6xl", "3.75rem", Some("1")),
        ("7xl", "4.5rem", Some("1")),
        ("8xl", "6rem", Some("1")),
        ("9xl", "8rem", Some("1")),
    ];

    entries
        .into_iter()
        .map(|(name, size, line_height)| {
            (
                name.to_string(),
                FontSize {
                    size: size.to_string(),
                    line_height: line_height.map(str::to_string),
                },
            )
        })
        .collect()
}

fn default_border_radius() -> BTreeMap<String, String> {
    named_values(&[
        ("none", "0"),
        ("sm", "0.125rem"),
        ("DEFAULT", "0.25rem"),
        ("md", "0.375rem"),
        ("lg", "0.5rem"),
        ("xl", "0.75rem"),
        ("2xl", "1rem"),
        ("3xl", "1.5rem"),
        ("full", "9999px"),
    ])
}

fn default_box_shadow() -> BTreeMap<String, String> {
    named_values(&[
        ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
        (
            "DEFAULT",
            "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
        ),
        (
            "md",
            "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
        ),
        (
            "lg",
            "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
        ),
        (
            "xl",
            "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
        ),
        ("2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
        ("inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
        ("none", "0 0 #0000"),
    ])
}

fn default_colors() -> BTreeMap<String, BTreeMap<String, String>> {
    let families: [(&str, [&str; 10]); 8] = [
        (
            "gray",
            [
                "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563",
                "#374151", "#1f2937", "#111827",
            ],
        ),
        (
            "red",
            [
                "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626",
                "#b91c1c", "#991b1b", "#7f1d1d",
            ],
        ),
        (
            "yellow",
            [
                "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706",
                "#b45309", "#92400e", "#78350f",
            ],
        ),
        (
            "green",
            [
                "#ecfdf5", "#d1fae5", "#a7f3d0", "#6ee7b7", "#34d399", "#10b981", "#059669",
                "#047857", "#065f46", "#064e3b",
            ],
        ),
        (
            "blue",
            [
                "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb",
                "#1d4ed8", "#1e40af", "#1e3a8a",
            ],
        ),
        (
            "indigo",
            [
                "#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1", "#4f46e5",
                "#4338ca", "#3730a3", "#312e81",
            ],
        ),
        (
            "purple",
            [
                "#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed",
                "#6d28d9", "#5b21b6", "#4c1d95",
            ],
        ),
        (
            "pink",
            [
                "#fdf2f8", "#fce7f3", "#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899", "#db2777",
                "#be185d", "#9d174d", "#831843",
            ],
        ),
    ];
    const SHADES: [&str; 10] = [
        "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
    ];

    families
        .into_iter()
        .map(|(family, values)| {
            let shades = SHADES
                .iter()
                .zip(values)
                .map(|(shade, value)| (shade.to_string(), value.to_string()))
                .collect();
            (family.to_string(), shades)
        })
        .collect()
}

fn named_values(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
