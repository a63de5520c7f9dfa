//! Ratatui 终端 UI 模块
//!
//! 提供基于 ratatui 的终端用户界面与纯文本输出。

pub mod app;
pub mod components;
pub mod display;
pub mod event;
pub mod labels;
pub mod screens;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::{TuiApp, handle_event};
pub use components::Button;
pub use display::{display_view, render_text};
pub use event::{EventPoll, TuiEvent};
pub use state::{AppState, Control, FocusState, Screen, Selectable};
pub use theme::{Palette, Theme, theme};
pub use ui::{draw, render};
