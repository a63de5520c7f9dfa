//! 焦点状态

use crate::wizard::{Action, NavControl};

/// 可获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// 关闭/展开按钮
    Toggle,
    /// 上一步
    Previous,
    /// 下一步
    Next,
}

/// 焦点顺序
const FOCUS_ORDER: [Control; 3] = [Control::Toggle, Control::Previous, Control::Next];

impl Control {
    /// 激活时派发的动作
    pub fn action(self) -> Action {
        match self {
            Control::Toggle => Action::Toggle,
            Control::Previous => Action::Previous,
            Control::Next => Action::Next,
        }
    }
}

impl From<NavControl> for Control {
    fn from(control: NavControl) -> Self {
        match control {
            NavControl::Previous => Control::Previous,
            NavControl::Next => Control::Next,
        }
    }
}

/// 循环选择的通用行为
pub trait Selectable {
    /// 总选项数
    fn count(&self) -> usize;
    /// 当前索引
    fn index(&self) -> usize;
    /// 设置索引（调用方保证在范围内）
    fn set_index(&mut self, index: usize);

    /// 选择下一个
    fn next(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        self.set_index((self.index() + 1) % count);
    }

    /// 选择上一个
    fn prev(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        let prev = if self.index() == 0 {
            count - 1
        } else {
            self.index() - 1
        };
        self.set_index(prev);
    }
}

/// 焦点环：面板展开时包含全部控件，收起时只有关闭按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusState {
    index: usize,
    count: usize,
}

impl FocusState {
    /// 根据面板是否展开创建
    pub fn new(is_open: bool) -> Self {
        Self {
            index: 0,
            count: Self::visible_count(is_open),
        }
    }

    fn visible_count(is_open: bool) -> usize {
        if is_open { FOCUS_ORDER.len() } else { 1 }
    }

    /// 面板状态变化后同步；收起时焦点回到关闭按钮
    pub fn sync(&mut self, is_open: bool) {
        self.count = Self::visible_count(is_open);
        if self.index >= self.count {
            self.index = 0;
        }
    }

    /// 当前焦点控件
    pub fn control(&self) -> Control {
        FOCUS_ORDER[self.index]
    }

    /// 将焦点移到指定控件（不可见时忽略）
    pub fn focus(&mut self, control: Control) {
        if let Some(index) = FOCUS_ORDER[..self.count].iter().position(|c| *c == control) {
            self.index = index;
        }
    }

    /// 控件是否有焦点
    pub fn is_focused(&self, control: Control) -> bool {
        self.control() == control
    }
}

impl Selectable for FocusState {
    fn count(&self) -> usize {
        self.count
    }

    fn index(&self) -> usize {
        self.index
    }

    fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps() {
        let mut focus = FocusState::new(true);
        assert_eq!(focus.control(), Control::Toggle);
        focus.next();
        focus.next();
        assert_eq!(focus.control(), Control::Next);
        focus.next();
        assert_eq!(focus.control(), Control::Toggle);
        focus.prev();
        assert_eq!(focus.control(), Control::Next);
    }

    #[test]
    fn test_closing_resets_focus() {
        let mut focus = FocusState::new(true);
        focus.focus(Control::Next);
        focus.sync(false);
        assert_eq!(focus.control(), Control::Toggle);
        focus.next();
        assert_eq!(focus.control(), Control::Toggle);
    }

    #[test]
    fn test_hidden_control_cannot_take_focus() {
        let mut focus = FocusState::new(false);
        focus.focus(Control::Previous);
        assert_eq!(focus.control(), Control::Toggle);
    }
}
