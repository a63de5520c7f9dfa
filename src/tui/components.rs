//! Common UI components module
//!
//! Provides reusable UI components shared by the screens.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::theme::{config::BUTTON_MIN_WIDTH, theme};

/// Clickable control with custom colors and arbitrary content
///
/// The content is embedded as given. `on_click` is the value handed back by
/// [`Button::activate`]; the caller decides what it means.
#[derive(Debug, Clone)]
pub struct Button<'a, A> {
    content: Line<'a>,
    color: Color,
    bgcolor: Color,
    on_click: A,
    focused: bool,
}

impl<'a, A: Copy> Button<'a, A> {
    /// Create a button around the given content
    pub fn new<C: Into<Line<'a>>>(content: C, on_click: A) -> Self {
        Self {
            content: content.into(),
            color: Color::Reset,
            bgcolor: Color::Reset,
            on_click,
            focused: false,
        }
    }

    /// Foreground color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Background color
    pub fn bgcolor(mut self, bgcolor: Color) -> Self {
        self.bgcolor = bgcolor;
        self
    }

    /// Mark as keyboard focused
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Invoke the click handler
    pub fn activate(&self) -> A {
        self.on_click
    }

    /// Effective style
    pub fn style(&self) -> Style {
        let style = Style::new().fg(self.color).bg(self.bgcolor);
        if self.focused {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        }
    }
}

impl<A: Copy> Widget for &Button<'_, A> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let style = self.style();
        buf.set_style(area, style);

        let row = Rect {
            y: area.y + area.height.saturating_sub(1) / 2,
            height: 1,
            ..area
        };
        self.content.clone().centered().style(style).render(row, buf);
    }
}

/// Width for a control with the given label, including padding
pub fn control_width(label: &str) -> u16 {
    let width = u16::try_from(label.width()).unwrap_or(u16::MAX);
    width.saturating_add(4).max(BUTTON_MIN_WIDTH)
}

/// Split a row into `N` equally sized cells spread across it
pub fn spread_row<const N: usize>(area: Rect, width: u16) -> [Rect; N] {
    Layout::horizontal([Constraint::Length(width); N])
        .flex(Flex::SpaceBetween)
        .areas(area)
}

/// Center a box of at most `width` x `height` inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Max(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Render bottom hint text
pub fn render_hint(hint: &str, frame: &mut Frame, area: Rect) {
    let hint_widget = Paragraph::new(hint)
        .style(theme().hint())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hint_widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_returns_handler_value() {
        let button = Button::new("Next", 7u8).color(Color::White).bgcolor(Color::Blue);
        assert_eq!(button.activate(), 7);
    }

    #[test]
    fn test_render_applies_colors_and_content() {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        let button = Button::new("Go", ())
            .color(Color::White)
            .bgcolor(Color::Rgb(0x79, 0x50, 0xf2));

        (&button).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert_eq!(text.trim(), "Go");
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(0x79, 0x50, 0xf2));
        assert_eq!(buf[(11, 0)].fg, Color::White);
    }

    #[test]
    fn test_focused_style() {
        let button = Button::new("Go", ()).focused(true);
        assert!(button.style().add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_control_width() {
        assert_eq!(control_width("Next"), BUTTON_MIN_WIDTH);
        assert_eq!(control_width("a very long label here"), 26);
    }
}
