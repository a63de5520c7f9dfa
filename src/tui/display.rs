//! 文本显示模块
//!
//! 无终端界面时，以纯文本输出向导视图。输出固定为英文，便于脚本解析。

use crate::config::Variant;
use crate::tui::labels::nav_label_in;
use crate::tui::theme::config::CLOSE_SYMBOL;
use crate::wizard::WizardView;

/// 文本输出使用的语言
const TEXT_LOCALE: &str = "en";

/// 将视图转换为文本行
pub fn render_text(view: &WizardView, variant: Variant) -> Vec<String> {
    let mut lines = vec![format!("[{}]", CLOSE_SYMBOL)];

    if let Some(panel) = &view.panel {
        let markers = panel
            .markers
            .iter()
            .map(|m| format!("[{}]{}", m.number, if m.active { "*" } else { "" }))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(markers);
        lines.push(panel.message.clone());

        let controls = panel
            .controls
            .iter()
            .map(|c| format!("[{}]", nav_label_in(*c, variant, TEXT_LOCALE)))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(controls);
    }

    lines
}

/// 打印视图
pub fn display_view(view: &WizardView, variant: Variant) {
    for line in render_text(view, variant) {
        println!("{}", line);
    }
}
