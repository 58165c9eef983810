mod dark;
mod light;

use ratatui::style::Color;

pub const BUILTIN_THEME_IDS: &[&str] = &["light", "dark"];

/// Everything the view needs to paint one theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeColors {
    pub background: Color,
    pub foreground: Color,
    pub gutter: Color,
    pub selection: Color,
    pub match_highlight: Color,
    pub current_match: Color,
    pub accent: Color,
    pub muted: Color,
    pub panel_background: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

pub fn builtin_theme(theme_id: &str) -> Option<ThemeColors> {
    match canonical_builtin_theme_id(theme_id)? {
        "light" => Some(light()),
        "dark" => Some(dark()),
        _ => None,
    }
}

pub fn canonical_builtin_theme_id(theme_id: &str) -> Option<&'static str> {
    let normalized = normalize_theme_lookup(theme_id);
    match normalized.as_str() {
        "light" | "default" | "day" => Some("light"),
        "dark" | "night" | "darkmode" => Some("dark"),
        _ => None,
    }
}

pub fn normalize_theme_id(theme_id: &str) -> String {
    let mut normalized = String::new();
    let mut last_dash = false;

    for ch in theme_id.trim().chars() {
        let ch = ch.to_ascii_lowercase();
        match ch {
            'a'..='z' | '0'..='9' => {
                normalized.push(ch);
                last_dash = false;
            }
            '-' | '_' | ' ' => {
                if !normalized.is_empty() && !last_dash {
                    normalized.push('-');
                    last_dash = true;
                }
            }
            _ => {}
        }
    }

    while normalized.ends_with('-') {
        normalized.pop();
    }

    normalized
}

fn normalize_theme_lookup(theme_id: &str) -> String {
    let mut normalized = normalize_theme_id(theme_id);
    normalized.retain(|c| c != '-');
    normalized
}

pub fn light() -> ThemeColors {
    light::theme()
}

pub fn dark() -> ThemeColors {
    dark::theme()
}

pub(crate) fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(r, g, b)
}
