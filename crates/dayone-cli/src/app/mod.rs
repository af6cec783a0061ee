//! Application-level utilities for the Day One CLI.
//!
//! This module provides:
//! - Path resolution for the config file, database and media directory
//! - The per-invocation `AppContext`

mod context;
mod resolver;

pub use context::AppContext;
