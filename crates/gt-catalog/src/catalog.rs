//! The standard candidate catalog.
//!
//! One fixed table describes every candidate. The catalog is built once and
//! shared immutably; nothing in the engine mutates it.

use serde::{Deserialize, Serialize};

use crate::evidence::{Evidence, EvidenceSet};
use crate::ghost::{EvidenceProfile, Ghost, GhostKind, IncenseSuspension, SpeedRule};
use crate::secondary::FlickerPattern;

/// Hunt sanity threshold for candidates without a listed one.
const DEFAULT_HUNT_THRESHOLD: u8 = 50;

/// The immutable set of all candidates, in [`GhostKind::all`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    ghosts: Vec<Ghost>,
}

/// Baseline row: three normal kinds, no guarantees, default threshold,
/// normal suspension, typical flicker, standard speed.
fn row(kind: GhostKind, normal: [Evidence; 3]) -> Ghost {
    Ghost {
        kind,
        evidence: EvidenceProfile {
            normal: EvidenceSet::from_slice(&normal),
            guaranteed: EvidenceSet::empty(),
            special: EvidenceSet::empty(),
        },
        hunt_threshold: DEFAULT_HUNT_THRESHOLD,
        suspension: IncenseSuspension::Normal,
        flicker: FlickerPattern::Typical,
        leaves_salt_footprints: true,
        six_fingered_handprint: false,
        spirit_box_breathing: false,
        dots_camera_only: false,
        speed_rule: SpeedRule::Standard,
    }
}

fn guaranteed(mut ghost: Ghost, kind: Evidence) -> Ghost {
    ghost.evidence.guaranteed.insert(kind);
    ghost
}

impl Catalog {
    /// Build the standard twenty-four candidate catalog.
    pub fn standard() -> Catalog {
        use Evidence::*;
        use GhostKind::*;

        let ghosts = vec![
            Ghost {
                suspension: IncenseSuspension::Long,
                ..row(Spirit, [Emf5, SpiritBox, GhostWriting])
            },
            Ghost {
                leaves_salt_footprints: false,
                ..row(Wraith, [Emf5, SpiritBox, DotsProjector])
            },
            Ghost {
                flicker: FlickerPattern::LongVanish,
                ..row(Phantom, [SpiritBox, Ultraviolet, DotsProjector])
            },
            row(Poltergeist, [SpiritBox, Ultraviolet, GhostWriting]),
            row(Banshee, [Ultraviolet, GhostOrb, DotsProjector]),
            Ghost {
                speed_rule: SpeedRule::BreakerBoost,
                ..row(Jinn, [Emf5, Ultraviolet, FreezingTemperatures])
            },
            Ghost {
                hunt_threshold: 60,
                ..row(Mare, [SpiritBox, GhostOrb, GhostWriting])
            },
            Ghost {
                speed_rule: SpeedRule::DetectionToggle,
                ..row(Revenant, [GhostOrb, GhostWriting, FreezingTemperatures])
            },
            Ghost {
                hunt_threshold: 35,
                ..row(Shade, [Emf5, GhostWriting, FreezingTemperatures])
            },
            Ghost {
                hunt_threshold: 100,
                suspension: IncenseSuspension::Short,
                ..row(Demon, [Ultraviolet, GhostWriting, FreezingTemperatures])
            },
            row(Yurei, [GhostOrb, FreezingTemperatures, DotsProjector]),
            Ghost {
                flicker: FlickerPattern::Constant,
                ..row(Oni, [Emf5, FreezingTemperatures, DotsProjector])
            },
            Ghost {
                hunt_threshold: 80,
                ..row(Yokai, [SpiritBox, GhostOrb, DotsProjector])
            },
            Ghost {
                speed_rule: SpeedRule::TemperatureBands,
                ..guaranteed(
                    row(Hantu, [Ultraviolet, GhostOrb, FreezingTemperatures]),
                    FreezingTemperatures,
                )
            },
            Ghost {
                dots_camera_only: true,
                ..guaranteed(row(Goryo, [Emf5, Ultraviolet, DotsProjector]), DotsProjector)
            },
            row(Myling, [Emf5, Ultraviolet, GhostWriting]),
            Ghost {
                hunt_threshold: 100,
                ..row(Onryo, [SpiritBox, GhostOrb, FreezingTemperatures])
            },
            Ghost {
                speed_rule: SpeedRule::TwinPair,
                ..row(TheTwins, [Emf5, SpiritBox, FreezingTemperatures])
            },
            Ghost {
                hunt_threshold: 65,
                speed_rule: SpeedRule::ElectronicsBoost,
                ..row(Raiju, [Emf5, GhostOrb, DotsProjector])
            },
            Ghost {
                six_fingered_handprint: true,
                ..guaranteed(row(Obake, [Emf5, Ultraviolet, GhostOrb]), Ultraviolet)
            },
            {
                let mut mimic = row(TheMimic, [SpiritBox, Ultraviolet, FreezingTemperatures]);
                mimic.evidence.special.insert(GhostOrb);
                mimic.hunt_threshold = 100;
                mimic.speed_rule = SpeedRule::MimicAll;
                mimic
            },
            Ghost {
                speed_rule: SpeedRule::SanityScaling,
                ..guaranteed(
                    row(Moroi, [SpiritBox, GhostWriting, FreezingTemperatures]),
                    SpiritBox,
                )
            },
            Ghost {
                hunt_threshold: 40,
                flicker: FlickerPattern::Rapid,
                spirit_box_breathing: true,
                speed_rule: SpeedRule::DistanceRamp,
                ..guaranteed(
                    row(Deogen, [SpiritBox, GhostWriting, DotsProjector]),
                    SpiritBox,
                )
            },
            Ghost {
                hunt_threshold: 75,
                speed_rule: SpeedRule::Ageing,
                ..row(Thaye, [GhostOrb, GhostWriting, DotsProjector])
            },
        ];

        Catalog { ghosts }
    }

    /// All candidates in catalog order.
    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    /// Look up a candidate by kind.
    pub fn get(&self, kind: GhostKind) -> &Ghost {
        // The constructor lays entries out in GhostKind::all() order.
        &self.ghosts[kind.index()]
    }

    pub fn len(&self) -> usize {
        self.ghosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ghosts.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}
