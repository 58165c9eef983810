use std::{fs, path::PathBuf};

const DEFAULT_TAB_WIDTH: usize = 4;
const MAX_TAB_WIDTH: usize = 16;
const DEFAULT_SHOW_LINE_NUMBERS: bool = true;

const DEFAULT_CONFIG: &str = "# Main settings\n\
theme = light\n\
# Show the line-number gutter\n\
show_line_numbers = true\n\
# Spaces inserted per Tab keypress\n\
tab_width = 4\n";

pub type ThemeId = String;

const DEFAULT_THEME_ID: &str = "light";

fn parse_theme_id(value: &str) -> Option<ThemeId> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(canonical) = jot_themes::canonical_builtin_theme_id(value) {
        return Some(canonical.to_string());
    }

    let normalized = jot_themes::normalize_theme_id(value);
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub theme: ThemeId,
    pub show_line_numbers: bool,
    pub tab_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME_ID.to_string(),
            show_line_numbers: DEFAULT_SHOW_LINE_NUMBERS,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl AppConfig {
    pub fn load_or_create() -> Self {
        let mut config = Self::default();
        let Some(path) = ensure_config_file() else {
            return config;
        };

        if let Ok(contents) = fs::read_to_string(&path) {
            config = Self::from_contents(&contents);
        }

        config
    }

    fn from_contents(contents: &str) -> Self {
        let mut config = Self::default();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.splitn(2, '=');
            let key = parts.next().unwrap_or("").trim();
            let value = parts.next().unwrap_or("").trim();

            if key.eq_ignore_ascii_case("theme") {
                if let Some(theme) = parse_theme_id(value) {
                    config.theme = theme;
                }
            }

            if key.eq_ignore_ascii_case("show_line_numbers")
                || key.eq_ignore_ascii_case("line_numbers")
            {
                if let Some(show) = parse_bool(value) {
                    config.show_line_numbers = show;
                }
            }

            if key.eq_ignore_ascii_case("tab_width") {
                if let Ok(width) = value.parse::<usize>() {
                    config.tab_width = width.clamp(1, MAX_TAB_WIDTH);
                }
            }
        }

        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn ensure_config_file() -> Option<PathBuf> {
    let path = config_path()?;
    if !path.exists() {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let _ = fs::write(&path, DEFAULT_CONFIG);
    }
    Some(path)
}

fn config_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        dirs::config_dir().map(|p| p.join("jot").join("config.txt"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        dirs::home_dir().map(|p| p.join(".config").join("jot").join("config.txt"))
    }
}

/// Persist the theme choice by rewriting the `theme` line in place, leaving
/// comments and any other settings untouched.
pub fn persist_theme(theme_id: &str) {
    let Some(path) = ensure_config_file() else {
        return;
    };

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) => {
            log::warn!("could not read config to persist theme: {}", e);
            return;
        }
    };

    if let Err(e) = fs::write(&path, rewrite_theme_line(&contents, theme_id)) {
        log::warn!("could not persist theme preference: {}", e);
    }
}

fn rewrite_theme_line(contents: &str, theme_id: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut replaced = false;

    for line in contents.lines() {
        let trimmed = line.trim();
        let is_theme_line = !trimmed.starts_with('#')
            && trimmed
                .split('=')
                .next()
                .is_some_and(|key| key.trim().eq_ignore_ascii_case("theme"));

        if is_theme_line && !replaced {
            lines.push(format!("theme = {}", theme_id));
            replaced = true;
        } else {
            lines.push(line.to_string());
        }
    }

    if !replaced {
        lines.push(format!("theme = {}", theme_id));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
