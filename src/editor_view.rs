mod files;
mod input_field;
mod interaction;
mod render;
mod search;

use jot_search::SearchState;
use jot_themes::ThemeColors;
use jot_toast::ToastManager;

use crate::config::{self, AppConfig};
use crate::document::Document;
use input_field::InputField;

/// An action held back behind the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PendingAction {
    NewFile,
    OpenFile,
    Quit,
}

impl PendingAction {
    fn message(self) -> &'static str {
        match self {
            Self::NewFile => "You have unsaved changes. Discard them and create a new file?",
            Self::OpenFile => "You have unsaved changes. Discard them and open another file?",
            Self::Quit => "You have unsaved changes. Discard them and quit?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FindFocus {
    Find,
    Replace,
}

/// The single editor window: document, find/replace session, toasts, theme.
pub struct EditorView {
    document: Document,
    config: AppConfig,
    theme_id: String,
    colors: ThemeColors,

    search: SearchState,
    search_open: bool,
    replace_open: bool,
    find_input: InputField,
    replace_input: InputField,
    find_focus: FindFocus,
    search_label: String,

    toasts: ToastManager,

    /// Top-left (line, column) of the visible text window.
    scroll: (usize, usize),
    /// Text-area size from the last frame, for paging and scrolling.
    viewport: (u16, u16),

    confirm: Option<PendingAction>,
    should_quit: bool,
}

impl EditorView {
    pub fn new(config: AppConfig) -> Self {
        let colors = jot_themes::builtin_theme(&config.theme).unwrap_or_else(jot_themes::light);
        let theme_id = jot_themes::canonical_builtin_theme_id(&config.theme)
            .unwrap_or("light")
            .to_string();

        Self {
            document: Document::new(),
            config,
            theme_id,
            colors,
            search: SearchState::new(),
            search_open: false,
            replace_open: false,
            find_input: InputField::new(),
            replace_input: InputField::new(),
            find_focus: FindFocus::Find,
            search_label: String::new(),
            toasts: ToastManager::new(),
            scroll: (0, 0),
            viewport: (0, 0),
            confirm: None,
            should_quit: false,
        }
    }

    /// Once per frame: pull queued toasts in and expire old ones.
    pub fn tick(&mut self) {
        self.toasts.ingest_pending();
        self.toasts.tick();
    }

    pub fn title(&self) -> String {
        self.document.title()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn toggle_theme(&mut self) {
        let next = if jot_themes::canonical_builtin_theme_id(&self.theme_id) == Some("dark") {
            "light"
        } else {
            "dark"
        };
        self.set_theme(next);
        config::persist_theme(next);
    }

    fn set_theme(&mut self, theme_id: &str) {
        if let Some(colors) = jot_themes::builtin_theme(theme_id) {
            self.colors = colors;
            self.theme_id = theme_id.to_string();
            log::info!("switched theme to {}", theme_id);
        }
    }
}
