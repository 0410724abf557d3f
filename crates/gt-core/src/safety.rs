//! Hunt-safety classification while incense suppresses hunting.

use gt_catalog::{Ghost, IncenseSuspension};
use serde::{Deserialize, Serialize};

/// How safe the team is from a hunt right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HuntSafety {
    /// Inside every surviving candidate's suspension window.
    Safe,
    /// Past the shortest surviving window but not the longest.
    Caution,
    /// Past every surviving candidate's window.
    Danger,
}

impl std::fmt::Display for HuntSafety {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HuntSafety::Safe => write!(f, "safe"),
            HuntSafety::Caution => write!(f, "caution"),
            HuntSafety::Danger => write!(f, "danger"),
        }
    }
}

/// Safety classification with the thresholds that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyAssessment {
    pub classification: HuntSafety,
    /// Shortest suspension band among surviving candidates, seconds.
    pub min_safe_seconds: f64,
    /// Longest suspension band among surviving candidates, seconds.
    pub max_safe_seconds: f64,
    pub elapsed_seconds: f64,
}

/// Classify elapsed time since incense against the surviving candidates'
/// suspension bands. `None` when no candidate survives.
pub fn assess_safety(survivors: &[&Ghost], elapsed_seconds: f64) -> Option<SafetyAssessment> {
    let mut short = false;
    let mut normal = false;
    let mut long = false;
    for ghost in survivors {
        match ghost.suspension {
            IncenseSuspension::Short => short = true,
            IncenseSuspension::Normal => normal = true,
            IncenseSuspension::Long => long = true,
        }
    }
    if !short && !normal && !long {
        return None;
    }

    let min_safe = if short {
        IncenseSuspension::Short
    } else if normal {
        IncenseSuspension::Normal
    } else {
        IncenseSuspension::Long
    }
    .seconds();
    let max_safe = if long {
        IncenseSuspension::Long
    } else if normal {
        IncenseSuspension::Normal
    } else {
        IncenseSuspension::Short
    }
    .seconds();

    let classification = if elapsed_seconds < min_safe {
        HuntSafety::Safe
    } else if elapsed_seconds < max_safe {
        HuntSafety::Caution
    } else {
        HuntSafety::Danger
    };
    Some(SafetyAssessment {
        classification,
        min_safe_seconds: min_safe,
        max_safe_seconds: max_safe,
        elapsed_seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gt_catalog::{Catalog, GhostKind};

    fn survivors<'a>(catalog: &'a Catalog, kinds: &[GhostKind]) -> Vec<&'a Ghost> {
        kinds.iter().map(|&k| catalog.get(k)).collect()
    }

    #[test]
    fn test_full_catalog_spans_all_bands() {
        let catalog = Catalog::standard();
        let all: Vec<&Ghost> = catalog.ghosts().iter().collect();

        let assessment = assess_safety(&all, 30.0).unwrap();
        assert_eq!(assessment.classification, HuntSafety::Safe);
        assert_eq!(assessment.min_safe_seconds, 60.0);
        assert_eq!(assessment.max_safe_seconds, 180.0);

        assert_eq!(
            assess_safety(&all, 100.0).unwrap().classification,
            HuntSafety::Caution
        );
        assert_eq!(
            assess_safety(&all, 200.0).unwrap().classification,
            HuntSafety::Danger
        );
    }

    #[test]
    fn test_band_edges_are_exclusive() {
        let catalog = Catalog::standard();
        let all: Vec<&Ghost> = catalog.ghosts().iter().collect();
        assert_eq!(
            assess_safety(&all, 60.0).unwrap().classification,
            HuntSafety::Caution
        );
        assert_eq!(
            assess_safety(&all, 180.0).unwrap().classification,
            HuntSafety::Danger
        );
    }

    #[test]
    fn test_single_band_skips_caution() {
        let catalog = Catalog::standard();
        let only_spirit = survivors(&catalog, &[GhostKind::Spirit]);

        let assessment = assess_safety(&only_spirit, 100.0).unwrap();
        assert_eq!(assessment.classification, HuntSafety::Safe);
        assert_eq!(assessment.min_safe_seconds, 180.0);
        assert_eq!(assessment.max_safe_seconds, 180.0);

        assert_eq!(
            assess_safety(&only_spirit, 180.0).unwrap().classification,
            HuntSafety::Danger
        );
    }

    #[test]
    fn test_short_and_normal_bands() {
        let catalog = Catalog::standard();
        let pair = survivors(&catalog, &[GhostKind::Demon, GhostKind::Mare]);

        let assessment = assess_safety(&pair, 75.0).unwrap();
        assert_eq!(assessment.classification, HuntSafety::Caution);
        assert_eq!(assessment.min_safe_seconds, 60.0);
        assert_eq!(assessment.max_safe_seconds, 90.0);
    }

    #[test]
    fn test_no_survivors_has_no_classification() {
        assert_eq!(assess_safety(&[], 30.0), None);
    }
}
