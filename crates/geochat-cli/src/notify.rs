//! Toast notifications.
//!
//! Toasts are transient and non-blocking: they print immediately and
//! expire after a fixed TTL. There is no queueing and no de-duplication;
//! concurrent toasts stack in insertion order.

use chrono::Utc;
use console::style;
use geochat_core::models::{Toast, ToastKind};

#[derive(Debug, Default)]
pub struct Notifier {
    active: Vec<Toast>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a toast and add it to the active set.
    pub fn toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        let toast = Toast::new(message, kind);
        self.print(&toast);
        self.active.push(toast);
        self.prune();
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.toast(message, ToastKind::Info);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.toast(message, ToastKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.toast(message, ToastKind::Error);
    }

    /// Drop expired toasts. Runs on every emission; there is no timer.
    pub fn prune(&mut self) {
        let now = Utc::now();
        self.active.retain(|toast| !toast.expired_at(now));
    }

    /// Currently active (unexpired) toasts, oldest first.
    pub fn active(&self) -> &[Toast] {
        &self.active
    }

    fn print(&self, toast: &Toast) {
        match toast.kind {
            ToastKind::Info => eprintln!("{} {}", style("ℹ").blue().bold(), toast.message),
            ToastKind::Success => eprintln!("{} {}", style("✓").green().bold(), toast.message),
            ToastKind::Error => eprintln!("{} {}", style("✗").red().bold(), toast.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_stack_in_insertion_order() {
        let mut notify = Notifier::new();
        notify.info("Uploading data.geojson...");
        notify.success("File uploaded successfully");

        let active = notify.active();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].kind, ToastKind::Info);
        assert_eq!(active[1].kind, ToastKind::Success);
    }

    #[test]
    fn duplicate_toasts_are_not_deduplicated() {
        let mut notify = Notifier::new();
        notify.error("Upload failed");
        notify.error("Upload failed");

        assert_eq!(notify.active().len(), 2);
    }
}
