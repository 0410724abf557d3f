//! Fuzz target for observation document parsing.
//!
//! Tests that JSON observation document parsing handles arbitrary input
//! without panicking. Documents come from user-edited files and stdin, so
//! every malformed shape must surface as an error.

#![no_main]

use gt_core::Observations;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try to parse as JSON - should never panic, only return an error
    let _ = serde_json::from_slice::<Observations>(data);
});
