#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use store::{Store, StoreError};
