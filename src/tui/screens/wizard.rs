//! 向导屏幕渲染

use crate::config::Variant;
use crate::tui::components::{Button, control_width, render_hint, spread_row};
use crate::tui::labels::{nav_label, nav_line, nav_text};
use crate::tui::state::{AppState, Control};
use crate::tui::theme::{
    config::{CLOSE_SYMBOL, MARKER_WIDTH, PANEL_WIDTH},
    theme,
};
use crate::wizard::{Marker, NavControl, PanelView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Modifier,
    widgets::{Block, BorderType, Paragraph, Wrap},
};
use rust_i18n::t;

/// 渲染向导
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    state.hit_areas.clear();

    let title = format!(" {} ", t!("app_title"));
    let block = Block::bordered()
        .title(title)
        .title_style(theme().title())
        .border_type(BorderType::Rounded)
        .border_style(theme().border())
        .style(theme().normal());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [top, _, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_toggle(frame, top, state);

    let view = state.wizard.render();
    let hint = match view.panel {
        Some(ref panel) => {
            draw_panel(frame, body, panel, state);
            t!("wizard_hint")
        }
        None => t!("wizard_closed_hint"),
    };

    render_hint(&hint, frame, footer);
}

/// 右上角的关闭按钮
fn draw_toggle(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let width = 3.min(area.width);
    let rect = Rect {
        x: area.right().saturating_sub(width),
        width,
        ..area
    };

    let focused = state.focus.is_focused(Control::Toggle);
    let toggle = Paragraph::new(CLOSE_SYMBOL)
        .alignment(Alignment::Center)
        .style(theme().toggle(focused));
    frame.render_widget(toggle, rect);
    state.hit_areas.push((rect, Control::Toggle));
}

fn draw_panel(frame: &mut Frame, area: Rect, panel: &PanelView, state: &mut AppState) {
    let [panel_area] = Layout::horizontal([Constraint::Max(PANEL_WIDTH)])
        .flex(Flex::Center)
        .areas(area);

    let [markers_area, _, message_area, _, buttons_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(panel_area);

    draw_markers(frame, markers_area, &panel.markers, state);

    let message = Paragraph::new(panel.message.as_str())
        .style(theme().normal().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, message_area);

    draw_controls(frame, buttons_area, &panel.controls, state);
}

fn draw_markers(frame: &mut Frame, area: Rect, markers: &[Marker; 3], state: &AppState) {
    let cells: [Rect; 3] = spread_row(area, MARKER_WIDTH);

    for (marker, cell) in markers.iter().zip(cells) {
        let style = theme().marker(marker.active, state.palette);
        let widget = Paragraph::new(marker.number.to_string())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            );
        frame.render_widget(widget, cell);
    }
}

fn draw_controls(frame: &mut Frame, area: Rect, controls: &[NavControl; 2], state: &mut AppState) {
    let width = controls
        .iter()
        .map(|c| control_width(&nav_label(*c, state.variant)))
        .max()
        .unwrap_or_default();
    let cells: [Rect; 2] = spread_row(area, width);

    for (nav, cell) in controls.iter().copied().zip(cells) {
        let control = Control::from(nav);
        let focused = state.focus.is_focused(control);

        let target = match state.variant {
            Variant::Plain => {
                let mut style = state.palette.style();
                if focused {
                    style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                }
                let widget = Paragraph::new(nav_text(nav))
                    .alignment(Alignment::Center)
                    .style(style);
                frame.render_widget(widget, cell);
                control
            }
            Variant::Composed => {
                let button = Button::new(nav_line(nav, state.variant), control)
                    .color(state.palette.fg)
                    .bgcolor(state.palette.bg)
                    .focused(focused);
                frame.render_widget(&button, cell);
                button.activate()
            }
        };

        state.hit_areas.push((cell, target));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Action;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw_state(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, area, state);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_mount_shows_first_step() {
        let mut state = AppState::default();
        let content = draw_state(&mut state);

        assert!(content.contains(CLOSE_SYMBOL));
        assert!(content.contains("Step 1: Learn React"), "content was:\n{content}");
        assert!(content.contains("Previous"));
        assert!(content.contains("Next"));
        assert_eq!(state.hit_areas.len(), 3);
    }

    #[test]
    fn test_closed_panel_shows_only_toggle() {
        let mut state = AppState::default();
        state.dispatch(Action::Toggle);
        let content = draw_state(&mut state);

        assert!(content.contains(CLOSE_SYMBOL));
        assert!(!content.contains("Step 1"));
        assert!(!content.contains("Previous"));
        assert!(!content.contains("Next"));
        assert_eq!(state.hit_areas.len(), 1);
        assert_eq!(state.hit_areas[0].1, Control::Toggle);
    }

    fn active_marker_digits(state: &mut AppState) -> usize {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, area, state);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| {
                matches!(cell.symbol(), "1" | "2" | "3") && cell.bg == state.palette.bg
            })
            .count()
    }

    #[test]
    fn test_last_step_message_and_markers() {
        let mut state = AppState::default();
        assert_eq!(active_marker_digits(&mut state), 1);

        state.dispatch(Action::Next);
        state.dispatch(Action::Next);
        let content = draw_state(&mut state);
        assert!(content.contains("Step 3: Apply it in your job"), "content was:\n{content}");
        assert_eq!(active_marker_digits(&mut state), 3);
    }

    #[test]
    fn test_click_on_rendered_next_button() {
        let mut state = AppState::default();
        draw_state(&mut state);

        let (area, _) = state
            .hit_areas
            .iter()
            .copied()
            .find(|(_, c)| *c == Control::Next)
            .expect("next button rendered");
        assert!(state.click(area.x + area.width / 2, area.y));
        assert_eq!(state.wizard.step().get(), 2);
        assert_eq!(state.focus.control(), Control::Next);
    }

    #[test]
    fn test_click_dispatches_button_handler() {
        let mut state = AppState::default();
        let area = Rect::new(0, 0, 80, 1);
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();

        // Handler deliberately differs from the label
        let button = Button::new("Next", Control::Previous);
        terminal
            .draw(|frame| frame.render_widget(&button, area))
            .unwrap();
        state.hit_areas = vec![(area, button.activate())];
        state.dispatch(Action::Next);

        assert!(state.click(40, 0));
        assert_eq!(state.wizard.step().get(), 1);
        assert_eq!(state.focus.control(), Control::Previous);
    }

    #[test]
    fn test_composed_hit_areas_come_from_buttons() {
        let mut state = AppState::default();
        draw_state(&mut state);

        let controls: Vec<Control> = state.hit_areas.iter().map(|(_, c)| *c).collect();
        assert_eq!(controls, vec![Control::Toggle, Control::Previous, Control::Next]);
    }

    #[test]
    fn test_plain_variant_renders_without_icons() {
        let mut state = AppState {
            variant: Variant::Plain,
            ..AppState::default()
        };
        let content = draw_state(&mut state);
        assert!(content.contains("Previous"));
        assert!(!content.contains('👈'));
    }
}
