//! Heuristic split between trackpad and discrete mouse wheel input.
//!
//! Trackpads emit small, near-continuous pixel deltas; classic wheels report
//! in hardware notches of 120. The first few wheel events of a page session
//! are sampled and the verdict is latched for the rest of the session.
//! False classification is possible and accepted.

/// Empirical thresholds; the defaults carry no documented rationale beyond
/// observed device behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierTuning {
    /// Magnitudes strictly between zero and this read as trackpad.
    pub trackpad_delta_max: f64,
    /// Hardware notch step reported by classic mouse wheels.
    pub notch_delta: f64,
    /// Notch-aligned samples required to latch a wheel verdict.
    pub notch_samples: u32,
    /// Inconclusive samples tolerated before latching the default verdict.
    pub ambiguous_samples: u32,
}

impl Default for ClassifierTuning {
    fn default() -> Self {
        Self {
            trackpad_delta_max: 50.0,
            notch_delta: 120.0,
            notch_samples: 2,
            ambiguous_samples: 3,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SourceClassifier {
    tuning: ClassifierTuning,
    trackpad: bool,
    decided: bool,
    samples: u32,
}

impl SourceClassifier {
    pub fn new() -> Self {
        Self::with_tuning(ClassifierTuning::default())
    }

    pub fn with_tuning(tuning: ClassifierTuning) -> Self {
        Self {
            tuning,
            trackpad: false,
            decided: false,
            samples: 0,
        }
    }

    /// Feed one vertical wheel delta. Zero-magnitude samples are ignored,
    /// and so is everything after the verdict latches.
    pub fn observe(&mut self, delta_y: f64) {
        if self.decided {
            return;
        }
        let magnitude = delta_y.abs();
        if magnitude == 0.0 {
            return;
        }
        if magnitude < self.tuning.trackpad_delta_max {
            self.trackpad = true;
            self.decided = true;
        } else if magnitude % self.tuning.notch_delta == 0.0 {
            self.samples += 1;
            if self.samples >= self.tuning.notch_samples {
                self.trackpad = false;
                self.decided = true;
            }
        } else {
            self.samples += 1;
            if self.samples >= self.tuning.ambiguous_samples {
                self.decided = true;
            }
        }
    }

    pub fn decided(&self) -> bool {
        self.decided
    }

    pub fn is_trackpad(&self) -> bool {
        self.trackpad
    }
}

impl Default for SourceClassifier {
    fn default() -> Self {
        Self::new()
    }
}
