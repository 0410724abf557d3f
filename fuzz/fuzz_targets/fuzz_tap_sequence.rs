//! Fuzz target for footstep tap sequences.
//!
//! Tests that tap tracking handles arbitrary timestamp lists without
//! panicking and that tempo readouts on the surviving sequence stay finite.

#![no_main]

use gt_core::speed::TapTracker;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|taps: Vec<i64>| {
    // Unordered input must surface as an error, never a panic
    if let Ok(tracker) = TapTracker::from_timestamps(&taps) {
        if let Some(bpm) = tracker.average_bpm() {
            assert!(bpm.is_finite());
        }
        for bpm in tracker.rolling_bpm() {
            assert!(bpm.is_finite());
        }
    }
});
