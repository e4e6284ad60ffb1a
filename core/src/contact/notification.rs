//! Transient notices
//!
//! At most one notice is on screen. Showing a new one replaces the old one
//! and cancels its auto-dismiss, so a stale timer never hides the newer
//! notice.

use crate::config::NotificationConfig;
use crate::task::DelayedTask;
use crate::view::NoticeView;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// Icon shown next to the message
    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Success => "bi-check-circle",
            NoticeKind::Error => "bi-exclamation-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

struct Inner<V> {
    view: V,
    current: Option<Notice>,
    /// Incremented for every notice shown
    sequence: u64,
    dismiss: Option<CancellationToken>,
}

/// Owner of the notice area
pub struct NotificationCenter<V: NoticeView> {
    duration: Duration,
    inner: Arc<Mutex<Inner<V>>>,
}

impl<V: NoticeView> Clone for NotificationCenter<V> {
    fn clone(&self) -> Self {
        Self {
            duration: self.duration,
            inner: self.inner.clone(),
        }
    }
}

impl<V: NoticeView> NotificationCenter<V> {
    pub fn new(config: &NotificationConfig, view: V) -> Self {
        Self {
            duration: config.duration(),
            inner: Arc::new(Mutex::new(Inner {
                view,
                current: None,
                sequence: 0,
                dismiss: None,
            })),
        }
    }

    /// Show `notice`, replacing any current one; it hides itself later
    pub async fn show(&self, notice: Notice) -> DelayedTask {
        let mut inner = self.inner.lock().await;

        if let Some(token) = inner.dismiss.take() {
            token.cancel();
        }
        if inner.current.take().is_some() {
            inner.view.dismiss_notice();
        }

        inner.sequence += 1;
        let sequence = inner.sequence;
        debug!(kind = ?notice.kind, sequence, "showing notice");
        inner.view.show_notice(&notice);
        inner.current = Some(notice);

        let shared = self.inner.clone();
        let task = DelayedTask::spawn(self.duration, async move {
            let mut inner = shared.lock().await;
            if inner.sequence != sequence || inner.current.take().is_none() {
                return false;
            }
            inner.dismiss = None;
            inner.view.dismiss_notice();
            true
        });
        inner.dismiss = Some(task.cancellation_token());
        task
    }

    /// Hide the current notice now
    pub async fn dismiss(&self) {
        let mut inner = self.inner.lock().await;
        if let Some(token) = inner.dismiss.take() {
            token.cancel();
        }
        if inner.current.take().is_some() {
            inner.view.dismiss_notice();
        }
    }

    pub async fn current(&self) -> Option<Notice> {
        self.inner.lock().await.current.clone()
    }

    /// Read the bound view
    pub async fn inspect<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        let inner = self.inner.lock().await;
        f(&inner.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskOutcome;
    use crate::view::MemoryNoticeView;

    fn center() -> NotificationCenter<MemoryNoticeView> {
        NotificationCenter::new(&NotificationConfig::default(), MemoryNoticeView::new())
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_auto_dismisses() {
        let center = center();
        let task = center.show(Notice::success("Saved")).await;
        assert_eq!(center.current().await, Some(Notice::success("Saved")));

        assert_eq!(task.wait().await, TaskOutcome::Completed);
        assert_eq!(center.current().await, None);
        center.inspect(|view| assert!(view.current().is_none())).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_notice_replaces_old_one() {
        let center = center();
        let first = center.show(Notice::error("Please fill in all required fields")).await;

        tokio::time::sleep(Duration::from_millis(4000)).await;
        let second = center.show(Notice::success("Thanks")).await;

        // The first timer must not hide the second notice
        assert_eq!(first.wait().await, TaskOutcome::Cancelled);
        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(center.current().await, Some(Notice::success("Thanks")));

        assert_eq!(second.wait().await, TaskOutcome::Completed);
        assert_eq!(center.current().await, None);
        center.inspect(|view| assert_eq!(view.shown.len(), 2)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_dismiss() {
        let center = center();
        let task = center.show(Notice::success("Hi")).await;
        center.dismiss().await;
        assert_eq!(center.current().await, None);
        assert_eq!(task.wait().await, TaskOutcome::Cancelled);
    }

    #[test]
    fn test_kind_icons() {
        assert_eq!(NoticeKind::Success.icon(), "bi-check-circle");
        assert_eq!(NoticeKind::Error.icon(), "bi-exclamation-circle");
    }
}
