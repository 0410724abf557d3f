//! Ghost candidate definitions.

use serde::{Deserialize, Serialize};

use crate::evidence::{Evidence, EvidenceSet};
use crate::secondary::{FlickerPattern, SecondaryTag};

/// The twenty-four candidate identities.
///
/// Ordering follows catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GhostKind {
    Spirit,
    Wraith,
    Phantom,
    Poltergeist,
    Banshee,
    Jinn,
    Mare,
    Revenant,
    Shade,
    Demon,
    Yurei,
    Oni,
    Yokai,
    Hantu,
    Goryo,
    Myling,
    Onryo,
    TheTwins,
    Raiju,
    Obake,
    TheMimic,
    Moroi,
    Deogen,
    Thaye,
}

impl GhostKind {
    /// All candidates in catalog order.
    pub fn all() -> &'static [GhostKind] {
        &[
            GhostKind::Spirit,
            GhostKind::Wraith,
            GhostKind::Phantom,
            GhostKind::Poltergeist,
            GhostKind::Banshee,
            GhostKind::Jinn,
            GhostKind::Mare,
            GhostKind::Revenant,
            GhostKind::Shade,
            GhostKind::Demon,
            GhostKind::Yurei,
            GhostKind::Oni,
            GhostKind::Yokai,
            GhostKind::Hantu,
            GhostKind::Goryo,
            GhostKind::Myling,
            GhostKind::Onryo,
            GhostKind::TheTwins,
            GhostKind::Raiju,
            GhostKind::Obake,
            GhostKind::TheMimic,
            GhostKind::Moroi,
            GhostKind::Deogen,
            GhostKind::Thaye,
        ]
    }

    /// Position in catalog order. Variants are declared in that order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Candidate from a catalog position, if in range.
    pub fn from_index(idx: usize) -> Option<GhostKind> {
        Self::all().get(idx).copied()
    }

    /// Stable machine-readable name (matches the serde encoding).
    pub fn name(&self) -> &'static str {
        match self {
            GhostKind::Spirit => "spirit",
            GhostKind::Wraith => "wraith",
            GhostKind::Phantom => "phantom",
            GhostKind::Poltergeist => "poltergeist",
            GhostKind::Banshee => "banshee",
            GhostKind::Jinn => "jinn",
            GhostKind::Mare => "mare",
            GhostKind::Revenant => "revenant",
            GhostKind::Shade => "shade",
            GhostKind::Demon => "demon",
            GhostKind::Yurei => "yurei",
            GhostKind::Oni => "oni",
            GhostKind::Yokai => "yokai",
            GhostKind::Hantu => "hantu",
            GhostKind::Goryo => "goryo",
            GhostKind::Myling => "myling",
            GhostKind::Onryo => "onryo",
            GhostKind::TheTwins => "the_twins",
            GhostKind::Raiju => "raiju",
            GhostKind::Obake => "obake",
            GhostKind::TheMimic => "the_mimic",
            GhostKind::Moroi => "moroi",
            GhostKind::Deogen => "deogen",
            GhostKind::Thaye => "thaye",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GhostKind::Spirit => "Spirit",
            GhostKind::Wraith => "Wraith",
            GhostKind::Phantom => "Phantom",
            GhostKind::Poltergeist => "Poltergeist",
            GhostKind::Banshee => "Banshee",
            GhostKind::Jinn => "Jinn",
            GhostKind::Mare => "Mare",
            GhostKind::Revenant => "Revenant",
            GhostKind::Shade => "Shade",
            GhostKind::Demon => "Demon",
            GhostKind::Yurei => "Yurei",
            GhostKind::Oni => "Oni",
            GhostKind::Yokai => "Yokai",
            GhostKind::Hantu => "Hantu",
            GhostKind::Goryo => "Goryo",
            GhostKind::Myling => "Myling",
            GhostKind::Onryo => "Onryo",
            GhostKind::TheTwins => "The Twins",
            GhostKind::Raiju => "Raiju",
            GhostKind::Obake => "Obake",
            GhostKind::TheMimic => "The Mimic",
            GhostKind::Moroi => "Moroi",
            GhostKind::Deogen => "Deogen",
            GhostKind::Thaye => "Thaye",
        }
    }

    /// Parse a machine-readable name back into a candidate.
    pub fn from_name(name: &str) -> Option<GhostKind> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

impl std::fmt::Display for GhostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Which primary kinds a candidate exhibits and how.
///
/// `guaranteed` is always a subset of `normal`. `special` kinds sit outside
/// the collectable-count cap and may extend beyond the three normal kinds
/// (The Mimic's ghost orb).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceProfile {
    pub normal: EvidenceSet,
    pub guaranteed: EvidenceSet,
    pub special: EvidenceSet,
}

impl EvidenceProfile {
    /// Whether the candidate can exhibit `kind` at all.
    pub fn exhibits(&self, kind: Evidence) -> bool {
        self.normal.contains(kind) || self.special.contains(kind)
    }

    /// Every kind the candidate can exhibit.
    pub fn exhibited(&self) -> EvidenceSet {
        self.normal.union(self.special)
    }
}

/// How long incense suspends hunting for a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncenseSuspension {
    /// 60 seconds.
    Short,
    /// 90 seconds.
    Normal,
    /// 180 seconds.
    Long,
}

impl IncenseSuspension {
    pub fn seconds(&self) -> f64 {
        match self {
            IncenseSuspension::Short => 60.0,
            IncenseSuspension::Normal => 90.0,
            IncenseSuspension::Long => 180.0,
        }
    }
}

/// Which speed-profile rule applies to a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedRule {
    /// Base speed with the line-of-sight ramp.
    Standard,
    /// Boosted when the breaker is on, the target is visible, and far away.
    BreakerBoost,
    /// Slow while undetected, fast once line of sight or held electronics
    /// give the position away.
    DetectionToggle,
    /// Stepped bands by ambient temperature.
    TemperatureBands,
    /// Two base speeds, each with the line-of-sight ramp.
    TwinPair,
    /// Boosted near active electronics.
    ElectronicsBoost,
    /// Scales with average sanity.
    SanityScaling,
    /// Ramps with distance to the target.
    DistanceRamp,
    /// Slows in steps as it ages with proximity time.
    Ageing,
    /// Mirrors every other candidate's profile.
    MimicAll,
}

/// A complete catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ghost {
    pub kind: GhostKind,
    pub evidence: EvidenceProfile,
    /// Highest sanity band at which this candidate can hunt.
    pub hunt_threshold: u8,
    pub suspension: IncenseSuspension,
    pub flicker: FlickerPattern,
    pub leaves_salt_footprints: bool,
    pub six_fingered_handprint: bool,
    pub spirit_box_breathing: bool,
    pub dots_camera_only: bool,
    pub speed_rule: SpeedRule,
}

impl Ghost {
    /// Whether this candidate is consistent with an asserted secondary tag.
    pub fn matches_tag(&self, tag: &SecondaryTag) -> bool {
        match *tag {
            SecondaryTag::HuntSanity(band) => band.value() <= self.hunt_threshold,
            SecondaryTag::SaltFootprints(yes) => self.leaves_salt_footprints == yes,
            SecondaryTag::Handprint(yes) => self.six_fingered_handprint == yes,
            SecondaryTag::SpiritBoxBreathing(yes) => self.spirit_box_breathing == yes,
            SecondaryTag::DotsCameraOnly(yes) => self.dots_camera_only == yes,
            SecondaryTag::HuntFlicker(pattern) => self.flicker == pattern,
        }
    }
}
