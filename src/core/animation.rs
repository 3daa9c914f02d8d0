use serde::{Deserialize, Serialize};

/// Reveal progress driven by an external animator.
///
/// `phase_x` is the fraction of entries revealed left to right and `phase_y`
/// the fraction of the full value height. Both stay inside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationPhase {
    phase_x: f64,
    phase_y: f64,
}

impl AnimationPhase {
    pub const REVEALED: Self = Self {
        phase_x: 1.0,
        phase_y: 1.0,
    };

    /// Builds a phase pair, clamping both values into `[0, 1]`.
    /// Non-finite input is treated as fully revealed.
    #[must_use]
    pub fn new(phase_x: f64, phase_y: f64) -> Self {
        Self {
            phase_x: clamp_phase(phase_x),
            phase_y: clamp_phase(phase_y),
        }
    }

    #[must_use]
    pub fn phase_x(self) -> f64 {
        self.phase_x
    }

    #[must_use]
    pub fn phase_y(self) -> f64 {
        self.phase_y
    }

    /// Vertical reveal is complete; the frame's points become the next
    /// transition's morph origin.
    #[must_use]
    pub fn is_fully_revealed(self) -> bool {
        self.phase_y == 1.0
    }

    /// First frame of a vertical transition.
    #[must_use]
    pub fn is_transition_start(self) -> bool {
        self.phase_y == 0.0
    }

    /// Number of leading items of `len` revealed under `phase_x`.
    #[must_use]
    pub fn revealed_count(self, len: usize) -> usize {
        revealed_count(len, self.phase_x)
    }
}

impl Default for AnimationPhase {
    fn default() -> Self {
        Self::REVEALED
    }
}

/// Item `k` of `len` is revealed iff `k < len * phase`.
#[must_use]
pub fn revealed_count(len: usize, phase: f64) -> usize {
    if len == 0 || !(phase > 0.0) {
        return 0;
    }
    let scaled = (len as f64 * phase).ceil();
    if scaled >= len as f64 {
        len
    } else {
        scaled as usize
    }
}

fn clamp_phase(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        1.0
    }
}
