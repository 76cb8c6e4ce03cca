//! Dictionary loading and the length-sorted word store.

pub mod loader;
pub mod store;

pub use loader::*;
pub use store::*;
