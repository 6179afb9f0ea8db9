pub mod commit;
pub mod definition;
pub mod operations;

pub use definition::{CartDependencies, CartListener, CartStore, SubscriptionId};
