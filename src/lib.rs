pub mod channel;
pub mod core;
pub mod dispatch;
pub mod message;
pub mod store;
