//! Candidate elimination rules.
//!
//! A candidate is ruled out when any rule produces a reason. Primary reasons
//! come from the evidence-count system; secondary reasons from asserted
//! secondary tags. The rules are pure set algebra over [`EvidenceSet`] and
//! re-evaluate from scratch on every call, so assessments never depend on
//! prior state.

use gt_catalog::{EvidenceSet, Ghost, SecondaryCategory, SecondaryTag};
use serde::{Deserialize, Serialize};

use crate::state::{CollectableCount, EvidenceState};

/// Why a candidate is impossible under the evidence-count system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryReason {
    /// A confirmed kind is neither normal nor special for the candidate.
    CannotExhibitConfirmed,
    /// A special kind was ruled out. Applies at every collectable count.
    SpecialRuledOut,
    /// A guaranteed kind was ruled out while evidence is collectable.
    GuaranteedRuledOut,
    /// Too few reachable normal kinds remain to hit the collectable count.
    CannotReachCount,
    /// More non-special kinds confirmed than the collectable count allows.
    TooMuchConfirmed,
}

impl std::fmt::Display for PrimaryReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            PrimaryReason::CannotExhibitConfirmed => {
                "it cannot exhibit at least one confirmed evidence type"
            }
            PrimaryReason::SpecialRuledOut => {
                "evidence it must exhibit regardless of the collectable count has been ruled out"
            }
            PrimaryReason::GuaranteedRuledOut => {
                "it has guaranteed evidence which has been ruled out"
            }
            PrimaryReason::CannotReachCount => {
                "it can no longer exhibit enough evidence to reach the collectable count"
            }
            PrimaryReason::TooMuchConfirmed => {
                "more evidence has been confirmed than it can exhibit"
            }
        };
        f.write_str(text)
    }
}

/// Why a candidate is impossible under the secondary observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryReason {
    TagMismatch { category: SecondaryCategory },
}

impl std::fmt::Display for SecondaryReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecondaryReason::TagMismatch { category } => {
                write!(f, "it does not match the observed {category}")
            }
        }
    }
}

/// Full assessment of one candidate against the current observations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Assessment {
    pub primary_reasons: Vec<PrimaryReason>,
    pub secondary_reasons: Vec<SecondaryReason>,
}

impl Assessment {
    pub fn is_ruled_out(&self) -> bool {
        self.primary_ruled_out() || self.secondary_ruled_out()
    }

    pub fn primary_ruled_out(&self) -> bool {
        !self.primary_reasons.is_empty()
    }

    pub fn secondary_ruled_out(&self) -> bool {
        !self.secondary_reasons.is_empty()
    }
}

/// Normal kinds the candidate could still end up showing: non-special
/// confirms plus its normal kinds not yet resolved.
fn reachable_kinds(ghost: &Ghost, evidence: &EvidenceState) -> EvidenceSet {
    let confirmed_minus_special = evidence.confirmed().difference(ghost.evidence.special);
    confirmed_minus_special.union(ghost.evidence.normal.intersection(evidence.unknown()))
}

/// Assess one candidate, collecting every reason that applies.
pub fn assess(
    ghost: &Ghost,
    count: CollectableCount,
    evidence: &EvidenceState,
    tags: &[SecondaryTag],
) -> Assessment {
    let n = usize::from(count.value());
    let confirmed = evidence.confirmed();
    let ruled_out = evidence.ruled_out();
    let confirmed_minus_special = confirmed.difference(ghost.evidence.special);

    let mut assessment = Assessment::default();

    if !confirmed.is_subset(ghost.evidence.exhibited()) {
        assessment
            .primary_reasons
            .push(PrimaryReason::CannotExhibitConfirmed);
    }
    if !ghost.evidence.special.intersection(ruled_out).is_empty() {
        assessment
            .primary_reasons
            .push(PrimaryReason::SpecialRuledOut);
    }
    if n > 0 && !ghost.evidence.guaranteed.intersection(ruled_out).is_empty() {
        assessment
            .primary_reasons
            .push(PrimaryReason::GuaranteedRuledOut);
    }
    if n > 0 && reachable_kinds(ghost, evidence).len() < n {
        assessment
            .primary_reasons
            .push(PrimaryReason::CannotReachCount);
    }
    if confirmed_minus_special.len() > n {
        assessment
            .primary_reasons
            .push(PrimaryReason::TooMuchConfirmed);
    }

    for tag in tags {
        if !ghost.matches_tag(tag) {
            assessment.secondary_reasons.push(SecondaryReason::TagMismatch {
                category: tag.category(),
            });
        }
    }

    assessment
}

/// Short-circuit variant of [`assess`] for bulk survivor counting.
pub fn is_ruled_out(
    ghost: &Ghost,
    count: CollectableCount,
    evidence: &EvidenceState,
    tags: &[SecondaryTag],
) -> bool {
    let n = usize::from(count.value());
    let confirmed = evidence.confirmed();
    let ruled_out = evidence.ruled_out();

    if !confirmed.is_subset(ghost.evidence.exhibited()) {
        return true;
    }
    if !ghost.evidence.special.intersection(ruled_out).is_empty() {
        return true;
    }
    if n > 0 && !ghost.evidence.guaranteed.intersection(ruled_out).is_empty() {
        return true;
    }
    if n > 0 && reachable_kinds(ghost, evidence).len() < n {
        return true;
    }
    if confirmed.difference(ghost.evidence.special).len() > n {
        return true;
    }
    tags.iter().any(|tag| !ghost.matches_tag(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gt_catalog::{Catalog, Evidence, FlickerPattern, GhostKind, SanityBand};

    fn catalog() -> Catalog {
        Catalog::standard()
    }

    fn count(n: u32) -> CollectableCount {
        CollectableCount::new(n).unwrap()
    }

    #[test]
    fn test_default_state_rules_nothing_out() {
        let catalog = catalog();
        let evidence = EvidenceState::unknown_all();
        for ghost in catalog.ghosts() {
            let assessment = assess(ghost, count(3), &evidence, &[]);
            assert!(
                !assessment.is_ruled_out(),
                "{} ruled out with no observations: {:?}",
                ghost.kind,
                assessment
            );
        }
    }

    #[test]
    fn test_confirmed_kind_outside_profile_rules_out() {
        let catalog = catalog();
        // Spirit exhibits EMF 5, Spirit Box, Ghost Writing.
        let spirit = catalog.get(GhostKind::Spirit);
        let mut evidence = EvidenceState::unknown_all();
        evidence.confirm(Evidence::FreezingTemperatures);

        let assessment = assess(spirit, count(3), &evidence, &[]);
        assert!(assessment
            .primary_reasons
            .contains(&PrimaryReason::CannotExhibitConfirmed));
    }

    #[test]
    fn test_special_ruled_out_applies_at_zero_count() {
        let catalog = catalog();
        let mimic = catalog.get(GhostKind::TheMimic);
        let mut evidence = EvidenceState::unknown_all();
        evidence.rule_out(Evidence::GhostOrb);

        let assessment = assess(mimic, count(0), &evidence, &[]);
        assert!(assessment
            .primary_reasons
            .contains(&PrimaryReason::SpecialRuledOut));
    }

    #[test]
    fn test_zero_count_confirmed_orb_leaves_only_the_mimic() {
        let catalog = catalog();
        let mut evidence = EvidenceState::unknown_all();
        evidence.confirm(Evidence::GhostOrb);

        let survivors: Vec<GhostKind> = catalog
            .ghosts()
            .iter()
            .filter(|g| !is_ruled_out(g, count(0), &evidence, &[]))
            .map(|g| g.kind)
            .collect();
        assert_eq!(survivors, vec![GhostKind::TheMimic]);
    }

    #[test]
    fn test_guaranteed_ruled_out() {
        let catalog = catalog();
        let hantu = catalog.get(GhostKind::Hantu);
        let mut evidence = EvidenceState::unknown_all();
        evidence.rule_out(Evidence::FreezingTemperatures);

        let assessment = assess(hantu, count(3), &evidence, &[]);
        assert!(assessment
            .primary_reasons
            .contains(&PrimaryReason::GuaranteedRuledOut));
        // With one of three normal kinds gone the count is unreachable too.
        assert!(assessment
            .primary_reasons
            .contains(&PrimaryReason::CannotReachCount));
    }

    #[test]
    fn test_guaranteed_kind_survives_rule_out_at_zero_count() {
        let catalog = catalog();
        let hantu = catalog.get(GhostKind::Hantu);
        let mut evidence = EvidenceState::unknown_all();
        evidence.rule_out(Evidence::FreezingTemperatures);

        let assessment = assess(hantu, count(0), &evidence, &[]);
        assert!(!assessment.is_ruled_out());
    }

    #[test]
    fn test_count_unreachable_after_rule_outs() {
        let catalog = catalog();
        // Wraith exhibits EMF 5, Spirit Box, D.O.T.S.
        let wraith = catalog.get(GhostKind::Wraith);
        let mut evidence = EvidenceState::unknown_all();
        evidence.rule_out(Evidence::SpiritBox);

        let at_three = assess(wraith, count(3), &evidence, &[]);
        assert!(at_three
            .primary_reasons
            .contains(&PrimaryReason::CannotReachCount));

        let at_two = assess(wraith, count(2), &evidence, &[]);
        assert!(!at_two.is_ruled_out());
    }

    #[test]
    fn test_too_much_confirmed_at_reduced_count() {
        let catalog = catalog();
        let spirit = catalog.get(GhostKind::Spirit);
        let mut evidence = EvidenceState::unknown_all();
        evidence.confirm(Evidence::Emf5);
        evidence.confirm(Evidence::SpiritBox);

        let assessment = assess(spirit, count(1), &evidence, &[]);
        assert!(assessment
            .primary_reasons
            .contains(&PrimaryReason::TooMuchConfirmed));
    }

    #[test]
    fn test_special_confirm_does_not_count_against_the_mimic() {
        let catalog = catalog();
        let mimic = catalog.get(GhostKind::TheMimic);
        let mut evidence = EvidenceState::unknown_all();
        evidence.confirm(Evidence::GhostOrb);
        evidence.confirm(Evidence::SpiritBox);
        evidence.confirm(Evidence::Ultraviolet);
        evidence.confirm(Evidence::FreezingTemperatures);

        // Four confirms, but the orb is special and uncounted.
        let assessment = assess(mimic, count(3), &evidence, &[]);
        assert!(!assessment.is_ruled_out());
    }

    #[test]
    fn test_secondary_tag_mismatch() {
        let catalog = catalog();
        // Wraith never steps in salt.
        let wraith = catalog.get(GhostKind::Wraith);
        let evidence = EvidenceState::unknown_all();
        let tags = [SecondaryTag::SaltFootprints(true)];

        let assessment = assess(wraith, count(3), &evidence, &tags);
        assert!(!assessment.primary_ruled_out());
        assert_eq!(
            assessment.secondary_reasons,
            vec![SecondaryReason::TagMismatch {
                category: SecondaryCategory::SaltFootprints
            }]
        );
    }

    #[test]
    fn test_sanity_band_tag_respects_thresholds() {
        let catalog = catalog();
        let mare = catalog.get(GhostKind::Mare);
        let shade = catalog.get(GhostKind::Shade);
        let evidence = EvidenceState::unknown_all();
        let tags = [SecondaryTag::HuntSanity(SanityBand::new(60).unwrap())];

        // A hunt at 60% sanity fits the Mare (threshold 60) but not the
        // Shade (threshold 35).
        assert!(!is_ruled_out(mare, count(3), &evidence, &tags));
        assert!(is_ruled_out(shade, count(3), &evidence, &tags));
    }

    #[test]
    fn test_flicker_tag_matches_exact_pattern() {
        let catalog = catalog();
        let oni = catalog.get(GhostKind::Oni);
        let evidence = EvidenceState::unknown_all();

        let constant = [SecondaryTag::HuntFlicker(FlickerPattern::Constant)];
        let typical = [SecondaryTag::HuntFlicker(FlickerPattern::Typical)];
        assert!(!is_ruled_out(oni, count(3), &evidence, &constant));
        assert!(is_ruled_out(oni, count(3), &evidence, &typical));
    }

    #[test]
    fn test_short_circuit_agrees_with_full_assessment() {
        let catalog = catalog();
        let mut evidence = EvidenceState::unknown_all();
        evidence.confirm(Evidence::Emf5);
        evidence.rule_out(Evidence::GhostOrb);
        let tags = [
            SecondaryTag::HuntSanity(SanityBand::new(55).unwrap()),
            SecondaryTag::Handprint(true),
        ];

        for n in 0..=3 {
            for ghost in catalog.ghosts() {
                let full = assess(ghost, count(n), &evidence, &tags);
                assert_eq!(
                    full.is_ruled_out(),
                    is_ruled_out(ghost, count(n), &evidence, &tags),
                    "disagreement for {} at count {}",
                    ghost.kind,
                    n
                );
            }
        }
    }
}
