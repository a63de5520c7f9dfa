//! Bounded step counter

use std::fmt;

/// Number of steps in the wizard
pub const STEP_COUNT: u8 = 3;

/// Messages shown for each step, indexed by `step - 1`
pub const MESSAGES: [&str; STEP_COUNT as usize] = [
    "Learn React ⚛️",
    "Be happy because you know React 👍",
    "Apply it in your job and dazzle everyone with your awesome skills ✨",
];

/// Current wizard position, always within `1..=STEP_COUNT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Step(u8);

impl Step {
    /// First step
    pub const FIRST: Step = Step(1);
    /// Last step
    pub const LAST: Step = Step(STEP_COUNT);

    /// Create a step, rejecting values outside `1..=STEP_COUNT`
    pub fn new(value: u8) -> Option<Self> {
        (1..=STEP_COUNT).contains(&value).then_some(Self(value))
    }

    /// Numeric value (1-based)
    pub fn get(self) -> u8 {
        self.0
    }

    /// Previous step, or `None` at the first step
    pub fn prev(self) -> Option<Self> {
        Self::new(self.0.checked_sub(1)?)
    }

    /// Next step, or `None` at the last step
    pub fn next(self) -> Option<Self> {
        Self::new(self.0.checked_add(1)?)
    }

    /// Message for this step
    pub fn message(self) -> &'static str {
        MESSAGES[usize::from(self.0 - 1)]
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
