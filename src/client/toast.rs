//! Toast notifications as an observable store.
//!
//! Only one toast is visible at a time: showing a new one replaces the current
//! one. Subscribers receive the visible list through a `watch` channel.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// How long a toast stays visible unless told otherwise
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Success or failure styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// The action worked
    Success,
    /// The action failed
    Error,
}

/// One visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Identifier used by [`ToastStore::remove`]
    pub id: u64,
    /// Text shown to the user
    pub message: String,
    /// Styling
    pub kind: ToastKind,
    /// When it was shown
    pub shown_at: Instant,
    /// How long it stays
    pub duration: Duration,
}

impl Toast {
    /// Whether the toast should be gone at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}

/// Observable store of visible toasts
#[derive(Debug)]
pub struct ToastStore {
    sender: watch::Sender<Vec<Toast>>,
    next_id: AtomicU64,
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Vec::new());
        Self {
            sender,
            next_id: AtomicU64::new(1),
        }
    }

    /// Receiver that observes every change of the visible toasts.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.sender.subscribe()
    }

    /// Snapshot of the visible toasts.
    #[must_use]
    pub fn visible(&self) -> Vec<Toast> {
        self.sender.borrow().clone()
    }

    /// Shows a toast with the default duration, replacing the current one.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.show_at(message, kind, DEFAULT_DURATION, Instant::now())
    }

    /// Shows a success toast.
    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Success)
    }

    /// Shows an error toast.
    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Error)
    }

    /// Shows a toast with an explicit duration and start time.
    pub fn show_at(
        &self,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Duration,
        now: Instant,
    ) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let toast = Toast {
            id,
            message: message.into(),
            kind,
            shown_at: now,
            duration,
        };
        self.sender.send_replace(vec![toast]);
        id
    }

    /// Removes the toast with `id`. Returns whether it was visible.
    pub fn remove(&self, id: u64) -> bool {
        self.sender.send_if_modified(|toasts| {
            let before = toasts.len();
            toasts.retain(|toast| toast.id != id);
            toasts.len() != before
        })
    }

    /// Removes every toast that has expired at `now` and returns how many were removed.
    pub fn expire(&self, now: Instant) -> usize {
        let mut removed = 0;
        self.sender.send_if_modified(|toasts| {
            let before = toasts.len();
            toasts.retain(|toast| !toast.is_expired(now));
            removed = before - toasts.len();
            removed > 0
        });
        removed
    }
}
