//! TUI application main module
//!
//! Contains TUI application creation and running logic.

use crate::config::Config;
use crate::error::Result;
use crate::tui::event::{EventPoll, TuiEvent, disable_mouse_capture, enable_mouse_capture};
use crate::tui::state::{AppState, Screen, Selectable};
use crate::tui::ui::render;
use crate::wizard::{Action, StepWizard};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::{info, warn};

/// TUI application
#[derive(Debug)]
pub struct TuiApp {
    /// Terminal
    terminal: DefaultTerminal,
    /// Event poller
    event_poll: EventPoll,
    /// Application state
    pub state: AppState,
    /// Whether mouse capture was enabled
    mouse: bool,
}

impl TuiApp {
    /// Create new TUI application
    pub fn new(config: &Config) -> Result<Self> {
        let state = AppState::from_config(config)?;
        let event_poll = EventPoll::new(Duration::from_millis(config.tick_rate_ms));
        let terminal = ratatui::init();

        if config.mouse {
            if let Err(e) = enable_mouse_capture() {
                ratatui::restore();
                return Err(e.into());
            }
        }

        Ok(Self {
            terminal,
            event_poll,
            state,
            mouse: config.mouse,
        })
    }

    /// Run application until the user quits, returning the final wizard state
    pub fn run(&mut self) -> std::io::Result<StepWizard> {
        let result = self.event_loop();

        if self.mouse {
            if let Err(e) = disable_mouse_capture() {
                warn!(error = %e, "Failed to disable mouse capture");
            }
        }
        ratatui::restore();

        result.map(|()| self.state.wizard)
    }

    fn event_loop(&mut self) -> std::io::Result<()> {
        // Initial render
        render(&mut self.terminal, &mut self.state)?;

        loop {
            match self.event_poll.next() {
                TuiEvent::None => {}
                TuiEvent::Resize(_, _) => {
                    render(&mut self.terminal, &mut self.state)?;
                }
                TuiEvent::CtrlC => {
                    info!("Interrupted");
                    break;
                }
                event => {
                    if handle_event(&mut self.state, event) {
                        break;
                    }
                    render(&mut self.terminal, &mut self.state)?;
                }
            }
        }

        Ok(())
    }
}

/// Handle one event; returns `true` when the application should exit
pub fn handle_event(state: &mut AppState, event: TuiEvent) -> bool {
    match state.current_screen {
        Screen::Wizard => handle_wizard(state, event),
        Screen::ExitConfirm => handle_exit(state, event),
    }
    state.should_exit
}

/// Handle wizard event
fn handle_wizard(state: &mut AppState, event: TuiEvent) {
    let is_open = state.wizard.is_open();

    match event {
        TuiEvent::Left | TuiEvent::Char('h') if is_open => state.dispatch(Action::Previous),
        TuiEvent::Right | TuiEvent::Char('l') if is_open => state.dispatch(Action::Next),
        TuiEvent::Char('x') | TuiEvent::Char(' ') => state.dispatch(Action::Toggle),
        TuiEvent::Tab | TuiEvent::Down => state.focus.next(),
        TuiEvent::BackTab | TuiEvent::Up => state.focus.prev(),
        TuiEvent::Enter => state.activate_focused(),
        TuiEvent::Click(column, row) => {
            state.click(column, row);
        }
        TuiEvent::Char('q') | TuiEvent::Escape => {
            state.current_screen = Screen::ExitConfirm;
        }
        _ => {}
    }
}

/// Handle exit confirmation
fn handle_exit(state: &mut AppState, event: TuiEvent) {
    match event {
        TuiEvent::Char('y') | TuiEvent::Char('Y') => state.should_exit = true,
        TuiEvent::Char('n') | TuiEvent::Char('N') | TuiEvent::Escape => {
            state.current_screen = Screen::Wizard;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::Control;

    fn send(state: &mut AppState, events: &[TuiEvent]) -> bool {
        events
            .iter()
            .cloned()
            .fold(false, |exit, event| exit || handle_event(state, event))
    }

    #[test]
    fn test_arrow_keys_navigate() {
        let mut state = AppState::default();
        send(&mut state, &[TuiEvent::Right, TuiEvent::Char('l'), TuiEvent::Right]);
        assert_eq!(state.wizard.step().get(), 3);
        send(&mut state, &[TuiEvent::Left, TuiEvent::Char('h'), TuiEvent::Left]);
        assert_eq!(state.wizard.step().get(), 1);
    }

    #[test]
    fn test_navigation_keys_ignored_while_closed() {
        let mut state = AppState::default();
        send(&mut state, &[TuiEvent::Char('x'), TuiEvent::Right]);
        assert!(!state.wizard.is_open());
        assert_eq!(state.wizard.step().get(), 1);
    }

    #[test]
    fn test_tab_and_enter_activate_focused_control() {
        let mut state = AppState::default();
        send(&mut state, &[TuiEvent::Tab, TuiEvent::Tab, TuiEvent::Enter]);
        assert_eq!(state.focus.control(), Control::Next);
        assert_eq!(state.wizard.step().get(), 2);

        send(&mut state, &[TuiEvent::BackTab, TuiEvent::BackTab, TuiEvent::Enter]);
        assert!(!state.wizard.is_open());
    }

    #[test]
    fn test_exit_requires_confirmation() {
        let mut state = AppState::default();
        assert!(!send(&mut state, &[TuiEvent::Char('q')]));
        assert_eq!(state.current_screen, Screen::ExitConfirm);

        // Wizard keys are inert while confirming
        assert!(!send(&mut state, &[TuiEvent::Right, TuiEvent::Char('n')]));
        assert_eq!(state.current_screen, Screen::Wizard);
        assert_eq!(state.wizard.step().get(), 1);

        assert!(send(&mut state, &[TuiEvent::Escape, TuiEvent::Char('y')]));
    }
}
