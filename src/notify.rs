//! Feedback notifications (sound and visual cues)
//!
//! Delivery is best effort: the game never waits on a sink and ignores
//! sink failures apart from a debug log line.

use anyhow::Result;

use crate::domain::Notification;

/// Receives feedback cues emitted by the game
pub trait NotificationSink: Send {
    fn notify(&self, notification: Notification) -> Result<()>;
}

/// Logs every cue at debug level
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) -> Result<()> {
        tracing::debug!("Notification: {}", notification);
        Ok(())
    }
}

/// Deliver to `sink` if there is one, swallowing failures
pub(crate) fn dispatch(sink: Option<&dyn NotificationSink>, notification: Notification) {
    let Some(sink) = sink else {
        return;
    };
    if let Err(e) = sink.notify(notification) {
        tracing::debug!("Notification sink failed for {}: {}", notification, e);
    }
}
