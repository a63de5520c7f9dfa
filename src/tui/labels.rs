//! 本地化标签映射
//!
//! 导航按钮在两种变体下的文字与内容。

use crate::config::Variant;
use crate::wizard::NavControl;
use ratatui::text::{Line, Span};
use rust_i18n::t;

/// 按钮基础文字（不含图标），使用当前界面语言
pub fn nav_text(control: NavControl) -> String {
    nav_text_in(control, &rust_i18n::locale())
}

/// 指定语言的按钮基础文字
pub fn nav_text_in(control: NavControl, locale: &str) -> String {
    match control {
        NavControl::Previous => t!("button_previous", locale = locale).to_string(),
        NavControl::Next => t!("button_next", locale = locale).to_string(),
    }
}

/// 按钮完整标签，使用当前界面语言
pub fn nav_label(control: NavControl, variant: Variant) -> String {
    nav_line(control, variant).to_string()
}

/// 指定语言的按钮完整标签
pub fn nav_label_in(control: NavControl, variant: Variant, locale: &str) -> String {
    compose(control, variant, nav_text_in(control, locale)).to_string()
}

/// 按钮内容；组合变体带有手势图标
pub fn nav_line(control: NavControl, variant: Variant) -> Line<'static> {
    compose(control, variant, nav_text(control))
}

fn compose(control: NavControl, variant: Variant, text: String) -> Line<'static> {
    match (variant, control) {
        (Variant::Plain, _) => Line::from(text),
        (Variant::Composed, NavControl::Previous) => {
            Line::from(vec![Span::raw("👈"), Span::raw(" "), Span::raw(text)])
        }
        (Variant::Composed, NavControl::Next) => {
            Line::from(vec![Span::raw(text), Span::raw(" "), Span::raw("👉")])
        }
    }
}
