//! View model produced by [`StepWizard::render`](super::StepWizard::render)
//!
//! The view is plain data: the terminal renderer and the headless text
//! printer both consume it, so they can never disagree on what is shown.

use super::{Action, Step};

/// Progress marker for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Step number shown in the marker
    pub number: u8,
    /// Whether the marker is at or below the current step
    pub active: bool,
}

/// Navigation control kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavControl {
    Previous,
    Next,
}

impl NavControl {
    /// Action dispatched when the control is activated
    pub fn action(self) -> Action {
        match self {
            NavControl::Previous => Action::Previous,
            NavControl::Next => Action::Next,
        }
    }
}

/// Content of the open panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub markers: [Marker; 3],
    /// `Step {n}: {message}`
    pub message: String,
    pub controls: [NavControl; 2],
}

/// Whole wizard view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardView {
    /// Toggle control, always present
    pub toggle: Action,
    /// Panel content, `None` while closed
    pub panel: Option<PanelView>,
}

impl WizardView {
    pub(super) fn build(step: Step, is_open: bool) -> Self {
        let panel = is_open.then(|| PanelView {
            markers: [1, 2, 3].map(|number| Marker {
                number,
                active: step.get() >= number,
            }),
            message: message_line(step),
            controls: [NavControl::Previous, NavControl::Next],
        });

        Self {
            toggle: Action::Toggle,
            panel,
        }
    }
}

/// Message line for a step
pub fn message_line(step: Step) -> String {
    format!("Step {}: {}", step, step.message())
}
