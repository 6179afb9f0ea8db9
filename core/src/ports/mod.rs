pub mod lookup;
pub mod notify;
pub mod storage;

pub use lookup::{ProductCatalog, StockService};
pub use notify::{Notification, NotificationSink, TracingNotifier};
pub use storage::{FileStore, MemoryStore, PersistentStore};
