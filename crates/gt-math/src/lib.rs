//! Ghost Triage math utilities.

pub mod math;

pub use math::interp::*;
pub use math::polyfit::*;
