// demos/storefront/src/services/toast.rs
use cartstore::{Notification, NotificationSink};
use std::io::Write;

/// Prints notifications to stderr, one line each, the way a toast would pop up.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleToast;

impl NotificationSink for ConsoleToast {
  fn notify(&self, notification: Notification) {
    // Nothing sensible to do if stderr is gone.
    let _ = writeln!(std::io::stderr().lock(), "✖ {}", notification);
  }
}
