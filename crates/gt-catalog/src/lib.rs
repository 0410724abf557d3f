//! Static candidate catalog for Ghost Triage.
//!
//! This crate describes the fixed world the deduction engine reasons over:
//! the seven primary evidence kinds, the six secondary observation
//! categories, and the twenty-four ghost candidates with their evidence
//! affinities, hunt thresholds, incense suspension bands, and speed rules.
//!
//! The catalog is immutable for the lifetime of the process. All mutable
//! observation state lives in `gt-core`.

pub mod catalog;
pub mod evidence;
pub mod ghost;
pub mod secondary;

pub use catalog::Catalog;
pub use evidence::{Evidence, EvidenceSet};
pub use ghost::{EvidenceProfile, Ghost, GhostKind, IncenseSuspension, SpeedRule};
pub use secondary::{FlickerPattern, SanityBand, SecondaryCategory, SecondaryTag};
