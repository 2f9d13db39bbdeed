//! Toast notifications

use crate::constants::{TOAST_FADE_SECS, TOAST_VISIBLE_SECS};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub started: Instant,
}

impl Toast {
    /// Opacity at `now`: 1.0 while visible, then a linear fade to 0.0
    pub fn alpha(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        if elapsed <= TOAST_VISIBLE_SECS {
            1.0
        } else {
            ((TOAST_VISIBLE_SECS + TOAST_FADE_SECS - elapsed) / TOAST_FADE_SECS).clamp(0.0, 1.0)
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started).as_secs_f32() >= TOAST_VISIBLE_SECS + TOAST_FADE_SECS
    }
}

#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Error);
    }

    fn push(&mut self, message: String, kind: ToastKind) {
        self.items.push(Toast {
            message,
            kind,
            started: Instant::now(),
        });
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Toast> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<&Toast> {
        self.items.last()
    }

    /// Restart the timer of a hovered toast
    pub fn hold(&mut self, index: usize) {
        if let Some(toast) = self.items.get_mut(index) {
            toast.started = Instant::now();
        }
    }

    pub fn expire(&mut self, now: Instant) {
        self.items.retain(|t| !t.is_finished(now));
    }
}
