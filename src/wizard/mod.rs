//! Step wizard core
//!
//! Owns the two pieces of wizard state (current step and panel visibility)
//! and exposes them only through saturating transitions.

pub mod action;
pub mod step;
pub mod view;

pub use action::Action;
pub use step::{MESSAGES, STEP_COUNT, Step};
pub use view::{Marker, NavControl, PanelView, WizardView, message_line};

use tracing::{debug, trace};

/// Three-step wizard with a collapsible panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepWizard {
    step: Step,
    is_open: bool,
}

impl Default for StepWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl StepWizard {
    /// Create a wizard at step 1 with the panel open
    pub fn new() -> Self {
        Self {
            step: Step::FIRST,
            is_open: true,
        }
    }

    /// Current step
    pub fn step(&self) -> Step {
        self.step
    }

    /// Whether the panel is open
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Message for the current step
    pub fn message(&self) -> &'static str {
        self.step.message()
    }

    /// Flip panel visibility
    pub fn toggle_panel(&mut self) {
        self.is_open = !self.is_open;
        debug!(is_open = self.is_open, "Panel toggled");
    }

    /// Go back one step; no-op at the first step
    pub fn go_previous(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                debug!(step = %self.step, "Moved to previous step");
                true
            }
            None => {
                trace!(step = %self.step, "Already at first step");
                false
            }
        }
    }

    /// Go forward one step; no-op at the last step
    pub fn go_next(&mut self) -> bool {
        match self.step.next() {
            Some(next) => {
                self.step = next;
                debug!(step = %self.step, "Moved to next step");
                true
            }
            None => {
                trace!(step = %self.step, "Already at last step");
                false
            }
        }
    }

    /// Dispatch an action, returning whether the state changed
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Toggle => {
                self.toggle_panel();
                true
            }
            Action::Previous => self.go_previous(),
            Action::Next => self.go_next(),
        }
    }

    /// Build the view for the current state
    pub fn render(&self) -> WizardView {
        WizardView::build(self.step, self.is_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_defaults() {
        let wizard = StepWizard::new();
        assert_eq!(wizard.step(), Step::FIRST);
        assert!(wizard.is_open());

        let view = wizard.render();
        let panel = view.panel.expect("panel should be open");
        assert_eq!(panel.message, "Step 1: Learn React ⚛️");
    }

    #[test]
    fn test_previous_at_first_step_is_noop() {
        let mut wizard = StepWizard::new();
        assert!(!wizard.go_previous());
        assert_eq!(wizard.step().get(), 1);
    }

    #[test]
    fn test_next_saturates_at_last_step() {
        let mut wizard = StepWizard::new();
        assert!(wizard.go_next());
        assert!(wizard.go_next());
        assert_eq!(wizard.step().get(), 3);
        assert!(wizard.is_open());
        assert_eq!(
            wizard.render().panel.map(|p| p.message),
            Some(
                "Step 3: Apply it in your job and dazzle everyone with your awesome skills ✨"
                    .to_string()
            )
        );

        let before = wizard;
        assert!(!wizard.go_next());
        assert_eq!(wizard, before);
    }

    #[test]
    fn test_step_stays_in_range_for_any_sequence() {
        // Every sequence of 8 prev/next moves, encoded as bits
        for mask in 0u16..256 {
            let mut wizard = StepWizard::new();
            for bit in 0..8 {
                if mask & (1 << bit) == 0 {
                    wizard.go_previous();
                } else {
                    wizard.go_next();
                }
                let step = wizard.step().get();
                assert!((1..=STEP_COUNT).contains(&step), "step {step} out of range");
            }
        }
    }

    #[test]
    fn test_toggle_twice_restores_visibility() {
        let mut wizard = StepWizard::new();
        wizard.toggle_panel();
        assert!(!wizard.is_open());
        wizard.toggle_panel();
        assert!(wizard.is_open());
    }

    #[test]
    fn test_toggle_hides_panel_but_keeps_toggle() {
        let mut wizard = StepWizard::new();
        wizard.apply(Action::Toggle);

        let view = wizard.render();
        assert!(view.panel.is_none());
        assert_eq!(view.toggle, Action::Toggle);
    }

    #[test]
    fn test_navigation_while_closed_still_moves_step() {
        let mut wizard = StepWizard::new();
        wizard.toggle_panel();
        assert!(wizard.apply(Action::Next));
        wizard.toggle_panel();
        assert_eq!(wizard.render().panel.map(|p| p.markers[1].active), Some(true));
    }

    #[test]
    fn test_markers_active_up_to_step() {
        let mut wizard = StepWizard::new();
        wizard.go_next();
        let panel = wizard.render().panel.expect("panel should be open");
        let active: Vec<bool> = panel.markers.iter().map(|m| m.active).collect();
        assert_eq!(active, vec![true, true, false]);
        assert_eq!(
            panel.controls.map(NavControl::action),
            [Action::Previous, Action::Next]
        );
    }
}
