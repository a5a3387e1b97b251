//! Todo module - To-do item types
//!
//! Provides TodoItem as returned by the backend, the Bucket partition and
//! the request bodies used by the todo endpoints.

mod bucket;
mod item;
mod request;

pub use bucket::Bucket;
pub use item::{TodoId, TodoItem};
pub use request::{CompletedState, NewTodo, TodayState};
