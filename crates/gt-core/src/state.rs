//! Observation state for a deduction run.
//!
//! Everything the engine reads lives in one [`Observations`] snapshot:
//! primary evidence marks, asserted secondary observations, the collectable
//! count, situational factors for speed profiling, the active speed
//! multiplier, and the two exclusion sets (manual and tempo-based).
//!
//! Recompute takes the snapshot by reference and never mutates it, so a run
//! is pure and idempotent by construction. The types enforce the state
//! invariants: a kind cannot be both confirmed and ruled out, the collectable
//! count stays in 0-3, and multiplier codes outside the five settings are a
//! hard error rather than a default.

use std::collections::BTreeSet;

use gt_catalog::{Evidence, EvidenceSet, FlickerPattern, GhostKind, SanityBand, SecondaryTag};
use gt_common::{Error, Result};
use serde::{Deserialize, Serialize};

/// Resolution state of one primary evidence kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceMark {
    #[default]
    Unknown,
    Confirmed,
    RuledOut,
}

/// Wire shape for [`EvidenceState`]: two kind lists.
#[derive(Debug, Default, Serialize, Deserialize)]
struct EvidenceStateDoc {
    #[serde(default)]
    confirmed: EvidenceSet,
    #[serde(default)]
    ruled_out: EvidenceSet,
}

/// Per-kind evidence marks.
///
/// Confirmed and ruled-out are disjoint by construction: marking a kind one
/// way clears the other, and documents asserting both are rejected at
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "EvidenceStateDoc", into = "EvidenceStateDoc")]
pub struct EvidenceState {
    confirmed: EvidenceSet,
    ruled_out: EvidenceSet,
}

impl EvidenceState {
    /// State with every kind unknown.
    pub fn unknown_all() -> EvidenceState {
        EvidenceState::default()
    }

    pub fn mark(&mut self, kind: Evidence, mark: EvidenceMark) {
        self.confirmed.remove(kind);
        self.ruled_out.remove(kind);
        match mark {
            EvidenceMark::Confirmed => self.confirmed.insert(kind),
            EvidenceMark::RuledOut => self.ruled_out.insert(kind),
            EvidenceMark::Unknown => {}
        }
    }

    pub fn confirm(&mut self, kind: Evidence) {
        self.mark(kind, EvidenceMark::Confirmed);
    }

    pub fn rule_out(&mut self, kind: Evidence) {
        self.mark(kind, EvidenceMark::RuledOut);
    }

    pub fn mark_of(&self, kind: Evidence) -> EvidenceMark {
        if self.confirmed.contains(kind) {
            EvidenceMark::Confirmed
        } else if self.ruled_out.contains(kind) {
            EvidenceMark::RuledOut
        } else {
            EvidenceMark::Unknown
        }
    }

    pub fn is_resolved(&self, kind: Evidence) -> bool {
        self.mark_of(kind) != EvidenceMark::Unknown
    }

    pub fn confirmed(&self) -> EvidenceSet {
        self.confirmed
    }

    pub fn ruled_out(&self) -> EvidenceSet {
        self.ruled_out
    }

    pub fn unknown(&self) -> EvidenceSet {
        EvidenceSet::all()
            .difference(self.confirmed)
            .difference(self.ruled_out)
    }

    /// Copy of this state with one kind re-marked. Used for what-if probes.
    pub fn with_mark(&self, kind: Evidence, mark: EvidenceMark) -> EvidenceState {
        let mut probe = *self;
        probe.mark(kind, mark);
        probe
    }
}

impl TryFrom<EvidenceStateDoc> for EvidenceState {
    type Error = String;

    fn try_from(doc: EvidenceStateDoc) -> std::result::Result<Self, Self::Error> {
        let overlap = doc.confirmed.intersection(doc.ruled_out);
        if !overlap.is_empty() {
            return Err(format!(
                "evidence marked both confirmed and ruled out: {}",
                overlap
                    .iter()
                    .map(|e| e.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        Ok(EvidenceState {
            confirmed: doc.confirmed,
            ruled_out: doc.ruled_out,
        })
    }
}

impl From<EvidenceState> for EvidenceStateDoc {
    fn from(state: EvidenceState) -> EvidenceStateDoc {
        EvidenceStateDoc {
            confirmed: state.confirmed,
            ruled_out: state.ruled_out,
        }
    }
}

/// How many normal kinds the true candidate may exhibit, 0-3.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct CollectableCount(u8);

impl CollectableCount {
    pub const MAX: u8 = 3;

    pub fn new(value: u32) -> Result<CollectableCount> {
        if value > u32::from(Self::MAX) {
            return Err(Error::InvalidCollectableCount { value });
        }
        Ok(CollectableCount(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Zero-evidence mode: only special kinds remain observable.
    pub fn is_zero_evidence(&self) -> bool {
        self.0 == 0
    }
}

impl Default for CollectableCount {
    fn default() -> Self {
        CollectableCount(Self::MAX)
    }
}

impl TryFrom<u32> for CollectableCount {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        CollectableCount::new(value)
    }
}

impl From<CollectableCount> for u32 {
    fn from(count: CollectableCount) -> u32 {
        u32::from(count.0)
    }
}

/// The five difficulty speed-multiplier settings.
///
/// Parsed from the percentage codes; anything else is a hard error, never a
/// silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum SpeedMultiplier {
    Pct50,
    Pct75,
    #[default]
    Pct100,
    Pct125,
    Pct150,
}

impl SpeedMultiplier {
    pub fn all() -> &'static [SpeedMultiplier] {
        &[
            SpeedMultiplier::Pct50,
            SpeedMultiplier::Pct75,
            SpeedMultiplier::Pct100,
            SpeedMultiplier::Pct125,
            SpeedMultiplier::Pct150,
        ]
    }

    /// The percentage code used in documents and on the CLI.
    pub fn code(&self) -> &'static str {
        match self {
            SpeedMultiplier::Pct50 => "50",
            SpeedMultiplier::Pct75 => "75",
            SpeedMultiplier::Pct100 => "100",
            SpeedMultiplier::Pct125 => "125",
            SpeedMultiplier::Pct150 => "150",
        }
    }

    pub fn from_code(code: &str) -> Result<SpeedMultiplier> {
        Self::all()
            .iter()
            .copied()
            .find(|m| m.code() == code)
            .ok_or_else(|| Error::InvalidSpeedMultiplier {
                code: code.to_string(),
            })
    }

    pub fn factor(&self) -> f64 {
        match self {
            SpeedMultiplier::Pct50 => 0.5,
            SpeedMultiplier::Pct75 => 0.75,
            SpeedMultiplier::Pct100 => 1.0,
            SpeedMultiplier::Pct125 => 1.25,
            SpeedMultiplier::Pct150 => 1.5,
        }
    }
}

impl TryFrom<String> for SpeedMultiplier {
    type Error = Error;

    fn try_from(code: String) -> Result<Self> {
        SpeedMultiplier::from_code(&code)
    }
}

impl From<SpeedMultiplier> for &'static str {
    fn from(multiplier: SpeedMultiplier) -> &'static str {
        multiplier.code()
    }
}

impl std::fmt::Display for SpeedMultiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.code())
    }
}

/// Optional situational inputs for speed profiling.
///
/// Absent means unknown; unknown factors expand profiles to the full range
/// of branches instead of erroring or picking one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SituationalFactors {
    /// Sustained line-of-sight duration, seconds. Zero means the target is
    /// out of sight; whether there is any line of sight at all is derived
    /// from this.
    pub line_of_sight_seconds: Option<f64>,
    /// Whether the site breaker is on.
    pub breaker_on: Option<bool>,
    /// Ambient temperature, degrees Celsius.
    pub temperature_celsius: Option<f64>,
    /// Average sanity as a fraction in `[0, 1]`.
    pub sanity_fraction: Option<f64>,
    /// Distance to the target, metres.
    pub distance_meters: Option<f64>,
    /// Total time spent near the candidate, seconds.
    pub proximity_seconds: Option<f64>,
    /// Whether the target is near active electronics.
    pub near_electronics: Option<bool>,
    /// Whether held active electronics have given the target's position away.
    pub detected_held_electronics: Option<bool>,
    /// Whether incense smoke is currently active on the target.
    pub incensed: Option<bool>,
}

/// Currently-asserted secondary observations.
///
/// The hunt sanity band always carries a value (band 0 filters nothing); the
/// discrete categories are tri-state or multi-option and contribute a tag
/// only once asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SecondaryObservations {
    pub hunt_sanity: SanityBand,
    pub salt_footprints: Option<bool>,
    pub handprint: Option<bool>,
    pub spirit_box_breathing: Option<bool>,
    pub dots_camera_only: Option<bool>,
    pub hunt_flicker: Option<FlickerPattern>,
}

impl SecondaryObservations {
    /// Every tag candidates currently must match, in category order.
    pub fn required_tags(&self) -> Vec<SecondaryTag> {
        let mut tags = vec![SecondaryTag::HuntSanity(self.hunt_sanity)];
        if let Some(yes) = self.salt_footprints {
            tags.push(SecondaryTag::SaltFootprints(yes));
        }
        if let Some(yes) = self.handprint {
            tags.push(SecondaryTag::Handprint(yes));
        }
        if let Some(yes) = self.spirit_box_breathing {
            tags.push(SecondaryTag::SpiritBoxBreathing(yes));
        }
        if let Some(yes) = self.dots_camera_only {
            tags.push(SecondaryTag::DotsCameraOnly(yes));
        }
        if let Some(pattern) = self.hunt_flicker {
            tags.push(SecondaryTag::HuntFlicker(pattern));
        }
        tags
    }

    /// The current tag of a category, if asserted.
    pub fn current_tag(&self, category: gt_catalog::SecondaryCategory) -> Option<SecondaryTag> {
        use gt_catalog::SecondaryCategory::*;
        match category {
            HuntSanity => Some(SecondaryTag::HuntSanity(self.hunt_sanity)),
            SaltFootprints => self.salt_footprints.map(SecondaryTag::SaltFootprints),
            Handprint => self.handprint.map(SecondaryTag::Handprint),
            SpiritBoxBreathing => self
                .spirit_box_breathing
                .map(SecondaryTag::SpiritBoxBreathing),
            DotsCameraOnly => self.dots_camera_only.map(SecondaryTag::DotsCameraOnly),
            HuntFlicker => self.hunt_flicker.map(SecondaryTag::HuntFlicker),
        }
    }

    /// Copy of these observations with one category re-asserted. Used for
    /// what-if probes.
    pub fn with_tag(&self, tag: SecondaryTag) -> SecondaryObservations {
        let mut probe = *self;
        match tag {
            SecondaryTag::HuntSanity(band) => probe.hunt_sanity = band,
            SecondaryTag::SaltFootprints(yes) => probe.salt_footprints = Some(yes),
            SecondaryTag::Handprint(yes) => probe.handprint = Some(yes),
            SecondaryTag::SpiritBoxBreathing(yes) => probe.spirit_box_breathing = Some(yes),
            SecondaryTag::DotsCameraOnly(yes) => probe.dots_camera_only = Some(yes),
            SecondaryTag::HuntFlicker(pattern) => probe.hunt_flicker = Some(pattern),
        }
        probe
    }
}

/// One complete observation snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Observations {
    pub collectable_count: CollectableCount,
    pub evidence: EvidenceState,
    pub secondary: SecondaryObservations,
    pub factors: SituationalFactors,
    pub speed_multiplier: SpeedMultiplier,
    /// Candidates the user has struck out by hand.
    pub manually_excluded: BTreeSet<GhostKind>,
    /// Candidates excluded by the last tempo narrowing.
    pub tempo_excluded: BTreeSet<GhostKind>,
    /// Seconds since incense was last used near the candidate, when timed.
    pub seconds_since_incense: Option<f64>,
}

impl Observations {
    /// Drop every tempo-based exclusion. The reverse of narrowing.
    pub fn clear_tempo_exclusions(&mut self) {
        self.tempo_excluded.clear();
    }

    /// Whether a candidate is excluded outside the rule system.
    pub fn is_externally_excluded(&self, kind: GhostKind) -> bool {
        self.manually_excluded.contains(&kind) || self.tempo_excluded.contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evidence_state_marks_are_exclusive() {
        let mut state = EvidenceState::unknown_all();
        state.confirm(Evidence::GhostOrb);
        assert_eq!(state.mark_of(Evidence::GhostOrb), EvidenceMark::Confirmed);

        state.rule_out(Evidence::GhostOrb);
        assert_eq!(state.mark_of(Evidence::GhostOrb), EvidenceMark::RuledOut);
        assert!(!state.confirmed().contains(Evidence::GhostOrb));

        state.mark(Evidence::GhostOrb, EvidenceMark::Unknown);
        assert_eq!(state.mark_of(Evidence::GhostOrb), EvidenceMark::Unknown);
    }

    #[test]
    fn test_evidence_state_unknown_partition() {
        let mut state = EvidenceState::unknown_all();
        assert_eq!(state.unknown().len(), 7);

        state.confirm(Evidence::Emf5);
        state.rule_out(Evidence::DotsProjector);
        assert_eq!(state.unknown().len(), 5);
        assert!(!state.unknown().contains(Evidence::Emf5));
        assert!(!state.unknown().contains(Evidence::DotsProjector));
    }

    #[test]
    fn test_evidence_state_rejects_overlapping_document() {
        let json = r#"{"confirmed":["emf5"],"ruled_out":["emf5"]}"#;
        let err = serde_json::from_str::<EvidenceState>(json).unwrap_err();
        assert!(err.to_string().contains("both confirmed and ruled out"));
    }

    #[test]
    fn test_evidence_state_document_round_trip() {
        let mut state = EvidenceState::unknown_all();
        state.confirm(Evidence::SpiritBox);
        state.rule_out(Evidence::GhostWriting);

        let json = serde_json::to_string(&state).unwrap();
        let back: EvidenceState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_collectable_count_bounds() {
        assert!(CollectableCount::new(0).is_ok());
        assert!(CollectableCount::new(3).is_ok());
        assert!(CollectableCount::new(4).is_err());
        assert_eq!(CollectableCount::default().value(), 3);
        assert!(CollectableCount::new(0).unwrap().is_zero_evidence());
    }

    #[test]
    fn test_speed_multiplier_codes() {
        assert_eq!(
            SpeedMultiplier::from_code("75").unwrap(),
            SpeedMultiplier::Pct75
        );
        assert_eq!(SpeedMultiplier::Pct150.factor(), 1.5);
        assert_eq!(SpeedMultiplier::default(), SpeedMultiplier::Pct100);
    }

    #[test]
    fn test_speed_multiplier_unknown_code_is_hard_error() {
        let err = SpeedMultiplier::from_code("110").unwrap_err();
        assert!(matches!(err, Error::InvalidSpeedMultiplier { .. }));

        let doc_err = serde_json::from_str::<SpeedMultiplier>("\"110\"").unwrap_err();
        assert!(doc_err.to_string().contains("110"));
    }

    #[test]
    fn test_required_tags_always_include_sanity_band() {
        let secondary = SecondaryObservations::default();
        let tags = secondary.required_tags();
        assert_eq!(tags.len(), 1);
        assert!(matches!(tags[0], SecondaryTag::HuntSanity(band) if band.value() == 0));
    }

    #[test]
    fn test_required_tags_include_asserted_categories() {
        let secondary = SecondaryObservations {
            salt_footprints: Some(false),
            hunt_flicker: Some(FlickerPattern::Constant),
            ..SecondaryObservations::default()
        };
        let tags = secondary.required_tags();
        assert_eq!(tags.len(), 3);
        assert!(tags.contains(&SecondaryTag::SaltFootprints(false)));
        assert!(tags.contains(&SecondaryTag::HuntFlicker(FlickerPattern::Constant)));
    }

    #[test]
    fn test_with_tag_replaces_only_its_category() {
        let secondary = SecondaryObservations {
            handprint: Some(true),
            ..SecondaryObservations::default()
        };
        let probe = secondary.with_tag(SecondaryTag::HuntSanity(SanityBand::new(40).unwrap()));
        assert_eq!(probe.hunt_sanity.value(), 40);
        assert_eq!(probe.handprint, Some(true));
        assert_eq!(secondary.hunt_sanity.value(), 0, "original is untouched");
    }

    #[test]
    fn test_observations_default_document() {
        let obs: Observations = serde_json::from_str("{}").unwrap();
        assert_eq!(obs.collectable_count.value(), 3);
        assert_eq!(obs.speed_multiplier, SpeedMultiplier::Pct100);
        assert!(obs.manually_excluded.is_empty());
        assert!(obs.factors.temperature_celsius.is_none());
    }

    #[test]
    fn test_observations_round_trip() {
        let mut obs = Observations::default();
        obs.evidence.confirm(Evidence::Emf5);
        obs.secondary.salt_footprints = Some(true);
        obs.factors.temperature_celsius = Some(4.0);
        obs.manually_excluded.insert(GhostKind::Shade);
        obs.seconds_since_incense = Some(42.0);

        let json = serde_json::to_string(&obs).unwrap();
        let back: Observations = serde_json::from_str(&json).unwrap();
        assert_eq!(back, obs);
    }

    #[test]
    fn test_clear_tempo_exclusions() {
        let mut obs = Observations::default();
        obs.tempo_excluded.insert(GhostKind::Revenant);
        obs.manually_excluded.insert(GhostKind::Mare);

        obs.clear_tempo_exclusions();
        assert!(obs.tempo_excluded.is_empty());
        assert!(obs.is_externally_excluded(GhostKind::Mare));
        assert!(!obs.is_externally_excluded(GhostKind::Revenant));
    }
}
