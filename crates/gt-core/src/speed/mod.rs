//! Movement-speed reasoning: profiles, footstep tempo, and narrowing.

pub mod narrow;
pub mod profile;
pub mod tempo;

pub use narrow::{narrow_by_tempo, TEMPO_LEEWAY};
pub use profile::{profiles, GhostProfile, SpeedMarker, NORMAL_SPEED};
pub use tempo::{TapTracker, TempoRegression};
