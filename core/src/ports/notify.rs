// cartstore/src/ports/notify.rs

//! User-facing notifications and the sink they are fired into.

use std::fmt;
use tracing::warn;

/// The messages a cart operation can surface to the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
  OutOfStock,
  AddFailed,
  RemoveFailed,
  UpdateAmountFailed,
}

impl Notification {
  pub fn message(self) -> &'static str {
    match self {
      Notification::OutOfStock => "requested quantity out of stock",
      Notification::AddFailed => "error adding product",
      Notification::RemoveFailed => "error removing product",
      Notification::UpdateAmountFailed => "error changing product quantity",
    }
  }
}

impl fmt::Display for Notification {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.message())
  }
}

/// Fire-and-forget surface for user-facing errors (toasts, banners, a terminal line).
///
/// `notify` must not block; the store calls it inline and carries on.
pub trait NotificationSink: Send + Sync {
  fn notify(&self, notification: Notification);
}

/// Emits every notification as a `WARN` tracing event. Useful headless.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
  fn notify(&self, notification: Notification) {
    warn!(target: "cartstore::notification", kind = ?notification, "{}", notification);
  }
}
