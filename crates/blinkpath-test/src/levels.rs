//! Sample levels with known outcomes under the default horizon.

use blinkpath_core::Level;

/// A level string and what solving it must produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleLevel {
    pub raw: &'static str,
    /// Step at which the goal is reached, `None` when no traversal exists.
    pub completion: Option<usize>,
}

impl SampleLevel {
    pub fn level(&self) -> Level {
        Level::parse(self.raw).unwrap()
    }

    pub fn len(&self) -> usize {
        self.raw.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Default horizon for this level.
    pub fn steps(&self) -> usize {
        3 * self.len()
    }
}

/// Already complete before any move.
pub const SINGLE: SampleLevel = SampleLevel {
    raw: "x",
    completion: None,
};

/// Two plain cells: one step to the goal.
pub const TWO_CELLS: SampleLevel = SampleLevel {
    raw: "xx",
    completion: Some(1),
};

/// A gap in the middle. The actor waits on cell 0 and jumps across on the
/// last step of the nine-step horizon.
pub const GAP: SampleLevel = SampleLevel {
    raw: "x.x",
    completion: Some(8),
};

/// Four plain cells: the window over cells 1..=3 at step 0 can never hold two
/// marks, so the model is infeasible.
pub const FOUR_CELLS: SampleLevel = SampleLevel {
    raw: "xxxx",
    completion: None,
};

/// Levels the model must reject as infeasible.
pub const INFEASIBLE: [SampleLevel; 3] = [
    FOUR_CELLS,
    SampleLevel {
        raw: "x.5x",
        completion: None,
    },
    SampleLevel {
        raw: "x2x2x",
        completion: None,
    },
];
