//! Toast notifications shown after mutations.
//!
//! `Toaster` is a bounded ring buffer shared (by clone) between stores,
//! forms and sections. The renderer drains it on every frame.

use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

#[derive(Clone)]
pub struct Toaster {
    entries: Arc<Mutex<VecDeque<Notification>>>,
    capacity: usize,
}

impl Toaster {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Push a notification, evicting the oldest if at capacity.
    pub fn push(&self, notification: Notification) {
        match notification.variant {
            Variant::Default => tracing::info!(
                title = %notification.title,
                "{}",
                notification.description
            ),
            Variant::Destructive => tracing::warn!(
                title = %notification.title,
                "{}",
                notification.description
            ),
        }
        let mut entries = self.lock();
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(notification);
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(Notification {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        });
    }

    pub fn failure(&self, description: impl Into<String>) {
        self.push(Notification {
            title: "Error".to_string(),
            description: description.into(),
            variant: Variant::Destructive,
        });
    }

    /// Snapshot of buffered notifications, oldest first.
    pub fn recent(&self) -> Vec<Notification> {
        self.lock().iter().cloned().collect()
    }

    /// Take every buffered notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Notification>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TOAST_CAPACITY)
    }
}

impl std::fmt::Debug for Toaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toaster")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
