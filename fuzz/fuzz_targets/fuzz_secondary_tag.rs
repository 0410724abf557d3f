//! Fuzz target for secondary tag parsing.
//!
//! Tests that the tagged secondary observation encoding handles arbitrary
//! input without panicking, including sanity band values outside the
//! validated range.

#![no_main]

use gt_catalog::SecondaryTag;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try to parse as JSON - should never panic, only return an error
    let _ = serde_json::from_slice::<SecondaryTag>(data);
});
