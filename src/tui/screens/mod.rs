//! 屏幕渲染

pub mod exit;
pub mod wizard;
