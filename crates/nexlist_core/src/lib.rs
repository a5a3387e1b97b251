//! nexlist_core - Core types and configuration for the NexList client
//!
//! This crate provides the foundational types used across all NexList crates:
//! - `todo` - TodoItem, Bucket and the request bodies sent to the backend
//! - `memo` - Memo pad wire types
//! - `config` - Client configuration (file + environment)
//! - `paths` - Well-known config locations

pub mod config;
pub mod memo;
pub mod paths;
pub mod todo;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use memo::{Memo, MemoContent, MemoSaved};
pub use todo::{Bucket, CompletedState, NewTodo, TodayState, TodoId, TodoItem};
