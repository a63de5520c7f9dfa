//! TUI 状态模块

pub mod app;
pub mod focus;

pub use app::{AppState, Screen};
pub use focus::{Control, FocusState, Selectable};
