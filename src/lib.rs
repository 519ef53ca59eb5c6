//! Terminal 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_2048::{core,input,term,reporter,types}`
//! and hosts the [`app`] session controller that wires them together.

pub mod app;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_reporter as reporter;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
