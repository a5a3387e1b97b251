//! Todo cache module
//!
//! `TodoStore` is the single canonical list of cached items; the today and
//! storage views are filters over it. `TodoManager` pairs the store with a
//! `TodoApi` and applies each server response to it.

mod error;
mod manager;
mod store;

pub use error::{TodoError, ValidationError};
pub use manager::TodoManager;
pub use store::{TodoEntry, TodoStore};
