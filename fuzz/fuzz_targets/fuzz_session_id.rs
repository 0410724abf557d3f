//! Fuzz target for session ID parsing.
//!
//! Tests that `SessionId::parse` handles arbitrary strings without
//! panicking. The parser slices the input at fixed byte offsets, so this
//! exercises multi-byte character boundaries in particular.

#![no_main]

use gt_common::SessionId;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // The parser should never panic, only return None for malformed input
    let _ = SessionId::parse(data);
});
