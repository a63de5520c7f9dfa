//! 应用状态

use crate::config::{Config, ConfigError, Variant};
use crate::tui::state::focus::{Control, FocusState};
use crate::tui::theme::Palette;
use crate::wizard::{Action, StepWizard};
use ratatui::layout::{Position, Rect};
use tracing::debug;

/// 屏幕枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// 向导
    #[default]
    Wizard,
    /// 退出确认
    ExitConfirm,
}

/// 应用状态（包含 UI 状态）
#[derive(Debug)]
pub struct AppState {
    /// 当前屏幕
    pub current_screen: Screen,
    /// 向导状态
    pub wizard: StepWizard,
    /// 焦点状态
    pub focus: FocusState,
    /// 按钮变体
    pub variant: Variant,
    /// 按钮配色
    pub palette: Palette,
    /// 上次渲染时各控件所在区域
    pub hit_areas: Vec<(Rect, Control)>,
    /// 是否退出
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let wizard = StepWizard::new();
        Self {
            current_screen: Screen::Wizard,
            focus: FocusState::new(wizard.is_open()),
            wizard,
            variant: Variant::default(),
            palette: Palette::default(),
            hit_areas: Vec::new(),
            should_exit: false,
        }
    }
}

impl AppState {
    /// 根据配置创建
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            variant: config.variant,
            palette: Palette::from_config(&config.button)?,
            ..Self::default()
        })
    }

    /// 派发动作并同步焦点
    pub fn dispatch(&mut self, action: Action) {
        let changed = self.wizard.apply(action);
        self.focus.sync(self.wizard.is_open());
        debug!(
            %action,
            changed,
            step = %self.wizard.step(),
            is_open = self.wizard.is_open(),
            "Action dispatched"
        );
    }

    /// 激活当前焦点控件
    pub fn activate_focused(&mut self) {
        self.dispatch(self.focus.control().action());
    }

    /// 查找位置上的控件
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position::new(column, row);
        self.hit_areas
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, control)| *control)
    }

    /// 点击控件：获得焦点并激活
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        match self.control_at(column, row) {
            Some(control) => {
                self.focus.focus(control);
                self.dispatch(control.action());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.variant = Variant::Plain;
        config.button.bgcolor = "#000".into();

        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.variant, Variant::Plain);
        assert_eq!(state.palette.bg, ratatui::style::Color::Rgb(0, 0, 0));
        assert!(state.wizard.is_open());
    }

    #[test]
    fn test_activate_focused() {
        let mut state = AppState::default();
        state.focus.focus(Control::Next);
        state.activate_focused();
        assert_eq!(state.wizard.step().get(), 2);

        state.focus.focus(Control::Toggle);
        state.activate_focused();
        assert!(!state.wizard.is_open());
        assert_eq!(state.focus.control(), Control::Toggle);
    }

    #[test]
    fn test_click_outside_controls() {
        let mut state = AppState::default();
        state.hit_areas = vec![(Rect::new(10, 0, 3, 1), Control::Toggle)];
        assert!(!state.click(0, 0));
        assert!(state.wizard.is_open());
        assert!(state.click(11, 0));
        assert!(!state.wizard.is_open());
    }
}
