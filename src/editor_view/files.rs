use std::fs;
use std::path::Path;

use super::{EditorView, PendingAction};

const FILE_FILTER_NAME: &str = "Text Files";
const FILE_FILTER_EXTENSIONS: &[&str] = &["txt", "md", "js", "css", "html", "json"];

impl EditorView {
    pub(super) fn request_new_file(&mut self) {
        if self.document.is_dirty() {
            self.confirm = Some(PendingAction::NewFile);
        } else {
            self.new_file();
        }
    }

    fn new_file(&mut self) {
        self.document.reset();
        log::info!("created a new file");
    }

    pub(super) fn request_open_file(&mut self) {
        if self.document.is_dirty() {
            self.confirm = Some(PendingAction::OpenFile);
        } else {
            self.open_file_dialog();
        }
    }

    fn open_file_dialog(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter(FILE_FILTER_NAME, FILE_FILTER_EXTENSIONS)
            .add_filter("All Files", &["*"])
            .pick_file();

        // Cancelling the dialog leaves the buffer untouched.
        let Some(path) = picked else {
            return;
        };
        self.open_path(&path);
    }

    /// Read a file into the buffer; a failed read leaves the buffer as it
    /// was and reports the error.
    pub fn open_path(&mut self, path: &Path) {
        match fs::read_to_string(path) {
            Ok(contents) => {
                self.document.open(path.to_path_buf(), contents);
                log::info!("opened {}", path.display());
            }
            Err(e) => {
                log::error!("failed to open {}: {}", path.display(), e);
                jot_toast::error(format!("Failed to open file: {}", e));
            }
        }
    }

    pub(super) fn save_file(&mut self) {
        let default_name = if self.document.path().is_some() {
            self.document.display_name()
        } else {
            "untitled.txt".to_string()
        };

        let mut dialog = rfd::FileDialog::new()
            .add_filter(FILE_FILTER_NAME, FILE_FILTER_EXTENSIONS)
            .add_filter("All Files", &["*"])
            .set_file_name(default_name);
        if let Some(dir) = self.document.path().and_then(|p| p.parent()) {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.save_file() else {
            return;
        };

        match fs::write(&path, self.document.text()) {
            Ok(()) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.document.saved(path.clone());
                log::info!("saved {}", path.display());
                jot_toast::success(format!("File saved: {}", name));
            }
            Err(e) => {
                log::error!("failed to save {}: {}", path.display(), e);
                jot_toast::error(format!("Failed to save file: {}", e));
            }
        }
    }

    pub(super) fn request_quit(&mut self) {
        if self.document.is_dirty() {
            self.confirm = Some(PendingAction::Quit);
        } else {
            self.should_quit = true;
        }
    }

    pub(super) fn confirm_proceed(&mut self) {
        let Some(action) = self.confirm.take() else {
            return;
        };
        match action {
            PendingAction::NewFile => self.new_file(),
            PendingAction::OpenFile => self.open_file_dialog(),
            PendingAction::Quit => self.should_quit = true,
        }
    }

    pub(super) fn confirm_cancel(&mut self) {
        self.confirm = None;
    }
}
