//! Core math modules.

pub mod interp;
pub mod polyfit;
