//! 主题模块
//!
//! 提供统一的主题定义，按钮与进度标记的配色来自配置。

use crate::config::{ButtonColors, ConfigError};
use ratatui::style::{Color, Modifier, Style};

/// 布局与符号常量
pub mod config {
    /// 关闭按钮符号
    pub const CLOSE_SYMBOL: &str = "×";
    /// 面板最大宽度
    pub const PANEL_WIDTH: u16 = 64;
    /// 进度标记宽度
    pub const MARKER_WIDTH: u16 = 5;
    /// 导航按钮最小宽度
    pub const BUTTON_MIN_WIDTH: u16 = 14;
    /// 退出确认弹窗宽度
    pub const POPUP_WIDTH: u16 = 44;
}

/// 主题颜色配置
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// 背景色
    pub bg: Color,
    /// 前景色
    pub fg: Color,
    /// 强调色（紫色）
    pub accent: Color,
    /// 未激活标记色
    pub inactive: Color,
    /// 警告色
    pub warning: Color,
    /// 提示文字色
    pub hint: Color,
    /// 边框色
    pub border: Color,
    /// 标题颜色
    pub title: Color,
}

/// 全局主题实例
pub static THEME: Theme = Theme {
    bg: Color::Reset,
    fg: Color::White,
    accent: Color::Rgb(0x79, 0x50, 0xf2),
    inactive: Color::DarkGray,
    warning: Color::Yellow,
    hint: Color::Gray,
    border: Color::Rgb(0x79, 0x50, 0xf2),
    title: Color::Rgb(0x79, 0x50, 0xf2),
};

/// 获取全局主题引用
pub fn theme() -> &'static Theme {
    &THEME
}

impl Theme {
    /// 普通文本样式
    pub fn normal(&self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }

    /// 标题样式
    pub fn title(&self) -> Style {
        Style::new()
            .fg(self.title)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 边框样式
    pub fn border(&self) -> Style {
        Style::new().fg(self.border).bg(self.bg)
    }

    /// 提示文本样式
    pub fn hint(&self) -> Style {
        Style::new().fg(self.hint).bg(self.bg)
    }

    /// 警告样式
    pub fn warning(&self) -> Style {
        Style::new()
            .fg(self.warning)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 关闭按钮样式
    pub fn toggle(&self, focused: bool) -> Style {
        let style = Style::new().fg(self.fg).add_modifier(Modifier::BOLD);
        if focused {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    /// 进度标记样式，激活时使用按钮配色
    pub fn marker(&self, active: bool, palette: Palette) -> Style {
        if active {
            Style::new()
                .fg(palette.fg)
                .bg(palette.bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(self.inactive).bg(self.bg)
        }
    }
}

/// 按钮配色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// 前景色
    pub fg: Color,
    /// 背景色
    pub bg: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fg: Color::Rgb(0xff, 0xff, 0xff),
            bg: Color::Rgb(0x79, 0x50, 0xf2),
        }
    }
}

impl Palette {
    /// 从配置解析配色
    pub fn from_config(colors: &ButtonColors) -> Result<Self, ConfigError> {
        Ok(Self {
            fg: colors.fg()?,
            bg: colors.bg()?,
        })
    }

    /// 按钮样式
    pub fn style(&self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }
}
