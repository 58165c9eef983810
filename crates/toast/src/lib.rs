//! Transient status messages for Jot.
//!
//! Any module can enqueue a toast through the free functions here; the view
//! drains the queue into its [`ToastManager`] once per frame and renders
//! whatever is active.

use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);
const ERROR_TOAST_DURATION: Duration = Duration::from_millis(8000);

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn elapsed(&self) -> Duration {
        self.created_at.elapsed()
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed() >= self.duration
    }
}

#[derive(Clone, Debug)]
pub struct ToastRequest {
    pub kind: ToastKind,
    pub message: String,
    pub duration: Duration,
}

#[derive(Default)]
pub struct ToastManager {
    next_id: u64,
    active: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &[Toast] {
        &self.active
    }

    pub fn push(&mut self, request: ToastRequest) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.active.push(Toast {
            id,
            kind: request.kind,
            message: request.message,
            created_at: Instant::now(),
            duration: request.duration,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.active.retain(|toast| toast.id != id);
    }

    /// Drop every toast that has outlived its duration.
    pub fn tick(&mut self) {
        self.active.retain(|toast| !toast.is_expired());
    }

    /// Pull queued requests into the active set.
    pub fn ingest_pending(&mut self) {
        for request in drain_pending() {
            self.push(request);
        }
    }
}

static TOAST_QUEUE: OnceLock<Mutex<Vec<ToastRequest>>> = OnceLock::new();

fn queue() -> &'static Mutex<Vec<ToastRequest>> {
    TOAST_QUEUE.get_or_init(|| Mutex::new(Vec::new()))
}

pub fn enqueue_toast(kind: ToastKind, message: impl Into<String>, duration: Option<Duration>) {
    let request = ToastRequest {
        kind,
        message: message.into(),
        duration: duration.unwrap_or(DEFAULT_TOAST_DURATION),
    };

    let mut queue = queue().lock().expect("toast queue lock poisoned");
    queue.push(request);
}

pub fn drain_pending() -> Vec<ToastRequest> {
    let mut queue = queue().lock().expect("toast queue lock poisoned");
    std::mem::take(&mut *queue)
}

pub fn info(message: impl Into<String>) {
    enqueue_toast(ToastKind::Info, message, None);
}

pub fn success(message: impl Into<String>) {
    enqueue_toast(ToastKind::Success, message, None);
}

pub fn warning(message: impl Into<String>) {
    enqueue_toast(ToastKind::Warning, message, None);
}

/// Show an error toast that stays longer (8 seconds)
pub fn error(message: impl Into<String>) {
    enqueue_toast(ToastKind::Error, message, Some(ERROR_TOAST_DURATION));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut manager = ToastManager::new();
        let id = manager.push(ToastRequest {
            kind: ToastKind::Success,
            message: "File saved: notes.txt".to_string(),
            duration: DEFAULT_TOAST_DURATION,
        });

        assert_eq!(manager.active().len(), 1);
        assert_eq!(manager.active()[0].kind, ToastKind::Success);

        manager.dismiss(id);
        assert!(manager.active().is_empty());
    }

    #[test]
    fn test_tick_expires_old_toasts() {
        let mut manager = ToastManager::new();
        manager.push(ToastRequest {
            kind: ToastKind::Info,
            message: "short-lived".to_string(),
            duration: Duration::ZERO,
        });
        manager.push(ToastRequest {
            kind: ToastKind::Info,
            message: "long-lived".to_string(),
            duration: Duration::from_secs(60),
        });

        manager.tick();
        assert_eq!(manager.active().len(), 1);
        assert_eq!(manager.active()[0].message, "long-lived");
    }

    #[test]
    fn test_ids_are_unique() {
        let mut manager = ToastManager::new();
        let a = manager.push(ToastRequest {
            kind: ToastKind::Info,
            message: "a".to_string(),
            duration: DEFAULT_TOAST_DURATION,
        });
        let b = manager.push(ToastRequest {
            kind: ToastKind::Info,
            message: "b".to_string(),
            duration: DEFAULT_TOAST_DURATION,
        });
        assert_ne!(a, b);
    }
}
