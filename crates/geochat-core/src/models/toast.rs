use chrono::{DateTime, Duration, Utc};

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// How long a toast stays active. Fixed; toasts are not configurable.
pub const TOAST_TTL_MS: i64 = 3000;

/// Ephemeral, non-blocking notification. Self-expires after
/// [`TOAST_TTL_MS`]; never part of a durable collection.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub issued_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            issued_at: Utc::now(),
        }
    }

    /// Whether this toast has outlived its TTL at `now`.
    pub fn expired_at(&self, now: DateTime<Utc>) -> bool {
        now - self.issued_at >= Duration::milliseconds(TOAST_TTL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_ttl() {
        let toast = Toast::new("uploading", ToastKind::Info);
        let now = toast.issued_at;

        assert!(!toast.expired_at(now));
        assert!(!toast.expired_at(now + Duration::milliseconds(TOAST_TTL_MS - 1)));
        assert!(toast.expired_at(now + Duration::milliseconds(TOAST_TTL_MS)));
    }
}
