//! The deduction engine and its report.
//!
//! [`Engine::assess`] is the single entry point: it takes one observation
//! snapshot and produces a complete fresh [`DeductionReport`]. Nothing is
//! cached between runs, so the same snapshot always yields the same report.

use std::collections::BTreeSet;

use gt_catalog::{Catalog, Ghost, GhostKind};
use gt_common::{Result, TemperatureUnit};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::elimination::{self, PrimaryReason, SecondaryReason};
use crate::interest::{self, PrimaryInsight, SecondaryInsight};
use crate::safety::{self, SafetyAssessment};
use crate::speed::narrow;
use crate::speed::profile::{self, GhostProfile};
use crate::speed::tempo::TempoRegression;
use crate::state::Observations;

/// Verdict on one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhostVerdict {
    pub ghost: GhostKind,
    pub primary_reasons: Vec<PrimaryReason>,
    pub secondary_reasons: Vec<SecondaryReason>,
    pub manually_excluded: bool,
    pub tempo_excluded: bool,
}

impl GhostVerdict {
    /// Whether the candidate is still in play.
    pub fn is_possible(&self) -> bool {
        self.primary_reasons.is_empty()
            && self.secondary_reasons.is_empty()
            && !self.manually_excluded
            && !self.tempo_excluded
    }

    /// Every exclusion reason, rendered for human output.
    pub fn reason_strings(&self) -> Vec<String> {
        let mut reasons: Vec<String> = self
            .primary_reasons
            .iter()
            .map(PrimaryReason::to_string)
            .chain(self.secondary_reasons.iter().map(SecondaryReason::to_string))
            .collect();
        if self.manually_excluded {
            reasons.push("it was ruled out by hand".to_string());
        }
        if self.tempo_excluded {
            reasons.push("its possible speeds do not match the measured tempo".to_string());
        }
        reasons
    }
}

/// Complete result of one recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionReport {
    /// One verdict per candidate, in catalog order.
    pub verdicts: Vec<GhostVerdict>,
    /// Candidates still in play.
    pub remaining: usize,
    pub primary_insights: Vec<PrimaryInsight>,
    pub secondary_insights: Vec<SecondaryInsight>,
    /// One speed profile per candidate, in catalog order.
    pub profiles: Vec<GhostProfile>,
    /// Present when the incense timer is running and candidates survive.
    pub safety: Option<SafetyAssessment>,
}

impl DeductionReport {
    pub fn survivors(&self) -> Vec<GhostKind> {
        self.verdicts
            .iter()
            .filter(|v| v.is_possible())
            .map(|v| v.ghost)
            .collect()
    }

    pub fn verdict(&self, kind: GhostKind) -> Option<&GhostVerdict> {
        self.verdicts.iter().find(|v| v.ghost == kind)
    }
}

/// The deduction engine: the catalog plus the fitted tempo regression.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Catalog,
    regression: TempoRegression,
}

impl Engine {
    pub fn new() -> Result<Engine> {
        Ok(Engine {
            catalog: Catalog::standard(),
            regression: TempoRegression::fit()?,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn regression(&self) -> &TempoRegression {
        &self.regression
    }

    /// Run a full recompute over one observation snapshot.
    pub fn assess(&self, observations: &Observations, unit: TemperatureUnit) -> DeductionReport {
        let tags = observations.secondary.required_tags();

        let verdicts: Vec<GhostVerdict> = self
            .catalog
            .ghosts()
            .iter()
            .map(|ghost| {
                let assessment = elimination::assess(
                    ghost,
                    observations.collectable_count,
                    &observations.evidence,
                    &tags,
                );
                GhostVerdict {
                    ghost: ghost.kind,
                    primary_reasons: assessment.primary_reasons,
                    secondary_reasons: assessment.secondary_reasons,
                    manually_excluded: observations.manually_excluded.contains(&ghost.kind),
                    tempo_excluded: observations.tempo_excluded.contains(&ghost.kind),
                }
            })
            .collect();

        let survivors: Vec<&Ghost> = self
            .catalog
            .ghosts()
            .iter()
            .zip(&verdicts)
            .filter(|(_, verdict)| verdict.is_possible())
            .map(|(ghost, _)| ghost)
            .collect();
        let remaining = survivors.len();

        let primary_insights = interest::analyze_primary(
            &survivors,
            observations.collectable_count,
            &observations.evidence,
            &tags,
        );
        let secondary_insights = interest::analyze_secondary(
            &survivors,
            observations.collectable_count,
            &observations.evidence,
            &observations.secondary,
            &primary_insights,
        );

        let profiles = profile::profiles(&self.catalog, &observations.factors, unit);
        let safety = observations
            .seconds_since_incense
            .and_then(|elapsed| safety::assess_safety(&survivors, elapsed));

        debug!(remaining, total = verdicts.len(), "recompute complete");
        DeductionReport {
            verdicts,
            remaining,
            primary_insights,
            secondary_insights,
            profiles,
            safety,
        }
    }

    /// Candidates an observed average tempo excludes, under the snapshot's
    /// situational factors and multiplier. The caller stores the result in
    /// the snapshot's tempo exclusions; clearing those reverses it.
    pub fn narrow_by_tempo(
        &self,
        observations: &Observations,
        average_bpm: f64,
    ) -> BTreeSet<GhostKind> {
        let profiles = profile::profiles(
            &self.catalog,
            &observations.factors,
            TemperatureUnit::Celsius,
        );
        let excluded = narrow::narrow_by_tempo(
            &profiles,
            &self.regression,
            average_bpm,
            observations.speed_multiplier,
        );
        debug!(average_bpm, excluded = excluded.len(), "tempo narrowing");
        excluded
    }
}
