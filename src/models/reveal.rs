use std::fmt;

/// Entrance state of a reveal-wrapped block.
///
/// The only legal transition is `Hidden -> Revealed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

/// One intersection report for an observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn visible(ratio: f64) -> Self {
        Self {
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    pub fn hidden() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// One-shot reveal state machine.
#[derive(Debug, Clone)]
pub struct Reveal {
    state: RevealState,
    threshold: f64,
}

impl Reveal {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: RevealState::Hidden,
            threshold,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Apply an intersection report. Returns `true` only for the report that
    /// performed the `Hidden -> Revealed` transition.
    pub fn observe(&mut self, entry: IntersectionEntry) -> bool {
        match self.state {
            RevealState::Revealed => false,
            RevealState::Hidden if entry.is_intersecting && entry.ratio >= self.threshold => {
                self.state = RevealState::Revealed;
                true
            }
            RevealState::Hidden => false,
        }
    }
}

/// Entrance animation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealMotion {
    /// Initial downward offset in pixels.
    pub offset_px: f64,
    pub transition_secs: f64,
}

impl Default for RevealMotion {
    fn default() -> Self {
        Self {
            offset_px: 24.0,
            transition_secs: 0.8,
        }
    }
}

/// Inline style for a reveal wrapper in the given state.
pub fn reveal_style(state: RevealState, motion: RevealMotion) -> String {
    let (opacity, offset) = match state {
        RevealState::Hidden => (0, motion.offset_px),
        RevealState::Revealed => (1, 0.0),
    };
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); transition: all {}s ease-out",
        motion.transition_secs
    )
}

impl fmt::Display for RevealState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevealState::Hidden => f.write_str("hidden"),
            RevealState::Revealed => f.write_str("revealed"),
        }
    }
}
