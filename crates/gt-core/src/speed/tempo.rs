//! Footstep tempo capture and the speed regression.
//!
//! The calibration table holds average footstep tempos measured over full
//! hunts of base-speed candidates at each multiplier setting, plus a (0, 0)
//! anchor. The relationship is visibly non-linear, so both directions are
//! fit as quadratics over the same table rather than inverting one fit.

use gt_common::{Error, Result};
use gt_math::{fit_quadratic, Quadratic};
use serde::{Deserialize, Serialize};

/// Measured (speed m/s, tempo bpm) pairs at each multiplier's base speed.
const TEMPO_CALIBRATION: [(f64, f64); 6] = [
    (0.85, 54.0),
    (1.275, 83.3),
    (1.7, 115.3),
    (2.125, 147.7),
    (2.55, 184.9),
    (0.0, 0.0),
];

/// Gap beyond which a tap starts a new sequence, milliseconds.
pub const TAP_RESET_GAP_MS: i64 = 2000;
/// Trailing window for the rolling tempo readout, milliseconds.
pub const ROLLING_WINDOW_MS: i64 = 2000;

/// Both directions of the speed-tempo relationship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempoRegression {
    speed_to_tempo: Quadratic,
    tempo_to_speed: Quadratic,
}

impl TempoRegression {
    /// Fit both directions from the calibration table.
    pub fn fit() -> Result<TempoRegression> {
        let forward: Vec<(f64, f64)> = TEMPO_CALIBRATION.to_vec();
        let backward: Vec<(f64, f64)> =
            TEMPO_CALIBRATION.iter().map(|&(s, t)| (t, s)).collect();
        Ok(TempoRegression {
            speed_to_tempo: fit_quadratic(&forward)
                .map_err(|e| Error::RegressionFit(e.to_string()))?,
            tempo_to_speed: fit_quadratic(&backward)
                .map_err(|e| Error::RegressionFit(e.to_string()))?,
        })
    }

    /// Expected footstep tempo at a 100%-multiplier speed, bpm.
    pub fn tempo_from_speed(&self, speed: f64) -> f64 {
        self.speed_to_tempo.eval(speed)
    }

    /// Estimated 100%-multiplier speed for an observed tempo, m/s.
    pub fn speed_from_tempo(&self, tempo: f64) -> f64 {
        self.tempo_to_speed.eval(tempo)
    }
}

/// Footstep tap timestamps, milliseconds, oldest first.
///
/// Only the current sequence is held: a tap arriving more than the reset
/// gap after the previous one discards everything before it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapTracker {
    taps: Vec<i64>,
}

impl TapTracker {
    pub fn new() -> TapTracker {
        TapTracker::default()
    }

    /// Build from a full timestamp list, applying the sequence-reset rule.
    pub fn from_timestamps(timestamps: &[i64]) -> Result<TapTracker> {
        let mut tracker = TapTracker::new();
        for &at_ms in timestamps {
            tracker.record(at_ms)?;
        }
        Ok(tracker)
    }

    /// Record one tap. Timestamps must strictly increase.
    pub fn record(&mut self, at_ms: i64) -> Result<()> {
        if let Some(&last) = self.taps.last() {
            if at_ms <= last {
                return Err(Error::UnorderedTaps);
            }
            // A gap that saturates i64 is far past the reset threshold.
            if at_ms.saturating_sub(last) > TAP_RESET_GAP_MS {
                self.taps.clear();
            }
        }
        self.taps.push(at_ms);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.taps.clear();
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    /// Average tempo over the whole current sequence, bpm. `None` until the
    /// second tap.
    pub fn average_bpm(&self) -> Option<f64> {
        let (first, last) = match (self.taps.first(), self.taps.last()) {
            (Some(&first), Some(&last)) if self.taps.len() >= 2 => (first, last),
            _ => return None,
        };
        let elapsed_ms = (last - first) as f64;
        Some(60_000.0 * (self.taps.len() - 1) as f64 / elapsed_ms)
    }

    /// Per-tap tempo averaged over the trailing window, one entry per tap
    /// from the second onward.
    ///
    /// The window is inclusive at its trailing edge, so every entry has at
    /// least one preceding tap in range.
    pub fn rolling_bpm(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.taps.len().saturating_sub(1));
        for i in 1..self.taps.len() {
            let mut j = i;
            while j > 0 && self.taps[i] - self.taps[j - 1] <= ROLLING_WINDOW_MS {
                j -= 1;
            }
            let elapsed_ms = (self.taps[i] - self.taps[j]) as f64;
            out.push(60_000.0 * (i - j) as f64 / elapsed_ms);
        }
        out
    }
}
