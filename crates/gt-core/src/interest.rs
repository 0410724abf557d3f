//! What-if analysis over the current survivors.
//!
//! For every unknown primary kind and every secondary category, the analyzer
//! simulates each possible finding against the surviving candidates and
//! reports whether investigating it can still narrow the field. Probes run
//! the elimination rules against hypothetical states; the real observation
//! state is never touched.

use gt_catalog::{Evidence, Ghost, SanityBand, SecondaryCategory, SecondaryTag};
use serde::{Deserialize, Serialize};

use crate::elimination;
use crate::state::{CollectableCount, EvidenceMark, EvidenceState, SecondaryObservations};

/// Whether investigating something can still teach us anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    /// At least one finding would narrow the field without emptying it.
    Interesting,
    /// Already resolved, or no alternate finding changes the field.
    Investigated,
    /// No finding narrows the field; the outcome is forced or irrelevant.
    Uninteresting,
    /// Cannot be observed: its prerequisite primary kind is unavailable.
    Impossible,
}

/// Verdict on one selectable finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionMark {
    #[default]
    Neutral,
    /// Selecting this would rule out every surviving candidate.
    Impossible,
    /// Every other selection is impossible, so this one must be true.
    Inevitable,
}

/// Analysis of one primary evidence kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryInsight {
    pub evidence: Evidence,
    pub interest: Interest,
    pub confirm: OptionMark,
    pub rule_out: OptionMark,
    pub unknown: OptionMark,
}

/// Verdict on one secondary option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryOptionInsight {
    pub tag: SecondaryTag,
    pub mark: OptionMark,
}

/// Analysis of one secondary category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryInsight {
    pub category: SecondaryCategory,
    pub interest: Interest,
    /// Per-option verdicts. Empty for the banded category.
    pub options: Vec<SecondaryOptionInsight>,
    pub unknown: OptionMark,
}

fn count_survivors(
    survivors: &[&Ghost],
    count: CollectableCount,
    evidence: &EvidenceState,
    tags: &[SecondaryTag],
) -> usize {
    survivors
        .iter()
        .filter(|g| !elimination::is_ruled_out(g, count, evidence, tags))
        .count()
}

/// Analyze every primary kind, in canonical order.
pub fn analyze_primary(
    survivors: &[&Ghost],
    count: CollectableCount,
    evidence: &EvidenceState,
    tags: &[SecondaryTag],
) -> Vec<PrimaryInsight> {
    let total = survivors.len();
    Evidence::all()
        .iter()
        .map(|&kind| {
            if evidence.is_resolved(kind) {
                return PrimaryInsight {
                    evidence: kind,
                    interest: Interest::Investigated,
                    confirm: OptionMark::Neutral,
                    rule_out: OptionMark::Neutral,
                    unknown: OptionMark::Neutral,
                };
            }

            let confirmed_state = evidence.with_mark(kind, EvidenceMark::Confirmed);
            let after_confirm = count_survivors(survivors, count, &confirmed_state, tags);
            if after_confirm == 0 {
                // Confirming would empty the field, so a rule-out is certain.
                return PrimaryInsight {
                    evidence: kind,
                    interest: Interest::Uninteresting,
                    confirm: OptionMark::Impossible,
                    rule_out: OptionMark::Inevitable,
                    unknown: OptionMark::Impossible,
                };
            }

            let ruled_out_state = evidence.with_mark(kind, EvidenceMark::RuledOut);
            let after_rule_out = count_survivors(survivors, count, &ruled_out_state, tags);
            if after_rule_out == 0 {
                return PrimaryInsight {
                    evidence: kind,
                    interest: Interest::Uninteresting,
                    confirm: OptionMark::Inevitable,
                    rule_out: OptionMark::Impossible,
                    unknown: OptionMark::Impossible,
                };
            }

            // Both findings possible but neither eliminates anybody.
            let interest = if after_confirm == total && after_rule_out == total {
                Interest::Uninteresting
            } else {
                Interest::Interesting
            };
            PrimaryInsight {
                evidence: kind,
                interest,
                confirm: OptionMark::Neutral,
                rule_out: OptionMark::Neutral,
                unknown: OptionMark::Neutral,
            }
        })
        .collect()
}

/// Analyze every secondary category, in canonical order.
///
/// `primary` must be the insights for the same observation state; prerequisite
/// gating reads the confirm marks out of it.
pub fn analyze_secondary(
    survivors: &[&Ghost],
    count: CollectableCount,
    evidence: &EvidenceState,
    secondary: &SecondaryObservations,
    primary: &[PrimaryInsight],
) -> Vec<SecondaryInsight> {
    let total = survivors.len();
    SecondaryCategory::all()
        .iter()
        .map(|&category| {
            if category.is_banded() {
                return analyze_banded(survivors, count, evidence, secondary, total, category);
            }

            let neutral_options = || {
                category
                    .options()
                    .into_iter()
                    .map(|tag| SecondaryOptionInsight {
                        tag,
                        mark: OptionMark::Neutral,
                    })
                    .collect()
            };

            if secondary.current_tag(category).is_some() {
                return SecondaryInsight {
                    category,
                    interest: Interest::Investigated,
                    options: neutral_options(),
                    unknown: OptionMark::Neutral,
                };
            }

            if prerequisite_unavailable(category, evidence, primary) {
                return SecondaryInsight {
                    category,
                    interest: Interest::Impossible,
                    options: category
                        .options()
                        .into_iter()
                        .map(|tag| SecondaryOptionInsight {
                            tag,
                            mark: OptionMark::Impossible,
                        })
                        .collect(),
                    unknown: OptionMark::Neutral,
                };
            }

            analyze_discrete(survivors, count, evidence, secondary, total, category)
        })
        .collect()
}

/// A gated category is unobservable once its prerequisite kind is ruled out
/// or confirming that kind has become impossible.
fn prerequisite_unavailable(
    category: SecondaryCategory,
    evidence: &EvidenceState,
    primary: &[PrimaryInsight],
) -> bool {
    let Some(prereq) = category.prerequisite() else {
        return false;
    };
    if evidence.mark_of(prereq) == EvidenceMark::RuledOut {
        return true;
    }
    primary
        .iter()
        .any(|p| p.evidence == prereq && p.confirm == OptionMark::Impossible)
}

fn analyze_banded(
    survivors: &[&Ghost],
    count: CollectableCount,
    evidence: &EvidenceState,
    secondary: &SecondaryObservations,
    total: usize,
    category: SecondaryCategory,
) -> SecondaryInsight {
    let current = secondary.hunt_sanity;
    let mut interest = Interest::Investigated;
    for band in SanityBand::all() {
        if band == current {
            continue;
        }
        let probe = secondary.with_tag(SecondaryTag::HuntSanity(band));
        let remaining = count_survivors(survivors, count, evidence, &probe.required_tags());
        if remaining > 0 && remaining < total {
            interest = Interest::Interesting;
            break;
        }
    }
    SecondaryInsight {
        category,
        interest,
        options: Vec::new(),
        unknown: OptionMark::Neutral,
    }
}

fn analyze_discrete(
    survivors: &[&Ghost],
    count: CollectableCount,
    evidence: &EvidenceState,
    secondary: &SecondaryObservations,
    total: usize,
    category: SecondaryCategory,
) -> SecondaryInsight {
    let probed: Vec<(SecondaryTag, usize)> = category
        .options()
        .into_iter()
        .map(|tag| {
            let probe = secondary.with_tag(tag);
            let remaining = count_survivors(survivors, count, evidence, &probe.required_tags());
            (tag, remaining)
        })
        .collect();

    let all_zero_or_total = probed.iter().all(|&(_, m)| m == 0 || m == total);
    let nonzero = probed.iter().filter(|&&(_, m)| m > 0).count();
    let forced = all_zero_or_total && nonzero == 1;

    let options = probed
        .iter()
        .map(|&(tag, m)| {
            let mark = if m == 0 {
                OptionMark::Impossible
            } else if forced {
                OptionMark::Inevitable
            } else {
                OptionMark::Neutral
            };
            SecondaryOptionInsight { tag, mark }
        })
        .collect();

    SecondaryInsight {
        category,
        interest: if all_zero_or_total {
            Interest::Uninteresting
        } else {
            Interest::Interesting
        },
        options,
        unknown: if forced {
            OptionMark::Impossible
        } else {
            OptionMark::Neutral
        },
    }
}
