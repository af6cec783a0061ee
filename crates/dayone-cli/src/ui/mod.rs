//! Terminal UI helpers: output mode routing, styling and tables.

pub mod context;
pub mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
