//! UI渲染模块
//!
//! 按当前屏幕分发渲染。

use crate::tui::screens;
use crate::tui::state::{AppState, Screen};
use ratatui::{DefaultTerminal, Frame};

/// 渲染一帧
pub fn render(terminal: &mut DefaultTerminal, state: &mut AppState) -> std::io::Result<()> {
    terminal.draw(|frame| draw(frame, state))?;
    Ok(())
}

/// 绘制当前屏幕
pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    screens::wizard::draw(frame, area, state);

    if state.current_screen == Screen::ExitConfirm {
        screens::exit::draw(frame, area);
    }
}
