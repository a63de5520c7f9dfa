//! 退出确认渲染

use crate::tui::components::centered_rect;
use crate::tui::theme::{config::POPUP_WIDTH, theme};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
};
use rust_i18n::t;

/// 在当前画面上方渲染退出确认弹窗
pub fn draw(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(area, POPUP_WIDTH, 3);
    frame.render_widget(Clear, popup);

    let confirm_text = Paragraph::new(t!("exit_confirm"))
        .style(theme().warning())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme().warning()),
        );
    frame.render_widget(confirm_text, popup);
}
