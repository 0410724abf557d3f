//! Primary evidence taxonomy.
//!
//! The seven primary evidence kinds are the backbone of elimination: each
//! candidate exhibits exactly three of them normally, some candidates mark
//! one as guaranteed, and one candidate carries an extra special kind that
//! bypasses the collectable-count cap.
//!
//! [`EvidenceSet`] is a small bitset over the kinds. Set operations are what
//! the elimination rules are written in, so they are cheap by construction.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A primary evidence kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evidence {
    Emf5,
    SpiritBox,
    Ultraviolet,
    GhostOrb,
    GhostWriting,
    FreezingTemperatures,
    DotsProjector,
}

impl Evidence {
    /// All kinds in canonical order (matches bitset bit positions).
    pub fn all() -> &'static [Evidence] {
        &[
            Evidence::Emf5,
            Evidence::SpiritBox,
            Evidence::Ultraviolet,
            Evidence::GhostOrb,
            Evidence::GhostWriting,
            Evidence::FreezingTemperatures,
            Evidence::DotsProjector,
        ]
    }

    /// Bit position of this kind.
    pub fn index(&self) -> usize {
        match self {
            Evidence::Emf5 => 0,
            Evidence::SpiritBox => 1,
            Evidence::Ultraviolet => 2,
            Evidence::GhostOrb => 3,
            Evidence::GhostWriting => 4,
            Evidence::FreezingTemperatures => 5,
            Evidence::DotsProjector => 6,
        }
    }

    /// Kind from a bit position, if in range.
    pub fn from_index(idx: usize) -> Option<Evidence> {
        Evidence::all().get(idx).copied()
    }

    /// Stable machine-readable name (matches the serde encoding).
    pub fn name(&self) -> &'static str {
        match self {
            Evidence::Emf5 => "emf5",
            Evidence::SpiritBox => "spirit_box",
            Evidence::Ultraviolet => "ultraviolet",
            Evidence::GhostOrb => "ghost_orb",
            Evidence::GhostWriting => "ghost_writing",
            Evidence::FreezingTemperatures => "freezing_temperatures",
            Evidence::DotsProjector => "dots_projector",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Evidence::Emf5 => "EMF Level 5",
            Evidence::SpiritBox => "Spirit Box",
            Evidence::Ultraviolet => "Ultraviolet",
            Evidence::GhostOrb => "Ghost Orb",
            Evidence::GhostWriting => "Ghost Writing",
            Evidence::FreezingTemperatures => "Freezing Temperatures",
            Evidence::DotsProjector => "D.O.T.S. Projector",
        }
    }

    /// Parse a machine-readable name back into a kind.
    pub fn from_name(name: &str) -> Option<Evidence> {
        Evidence::all().iter().copied().find(|e| e.name() == name)
    }
}

impl std::fmt::Display for Evidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A set of primary evidence kinds, stored as a 7-bit mask.
///
/// Serializes as a list of kind names so observation documents stay
/// readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EvidenceSet {
    bits: u8,
}

impl EvidenceSet {
    const ALL_BITS: u8 = 0b0111_1111;

    /// The empty set.
    pub fn empty() -> EvidenceSet {
        EvidenceSet { bits: 0 }
    }

    /// The set of all seven kinds.
    pub fn all() -> EvidenceSet {
        EvidenceSet {
            bits: Self::ALL_BITS,
        }
    }

    /// Build a set from a slice of kinds.
    pub fn from_slice(kinds: &[Evidence]) -> EvidenceSet {
        kinds.iter().copied().collect()
    }

    pub fn contains(&self, kind: Evidence) -> bool {
        self.bits & (1 << kind.index()) != 0
    }

    pub fn insert(&mut self, kind: Evidence) {
        self.bits |= 1 << kind.index();
    }

    pub fn remove(&mut self, kind: Evidence) {
        self.bits &= !(1 << kind.index());
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Kinds present in the set, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Evidence> {
        let bits = self.bits;
        Evidence::all()
            .iter()
            .copied()
            .filter(move |e| bits & (1 << e.index()) != 0)
    }

    pub fn union(&self, other: EvidenceSet) -> EvidenceSet {
        EvidenceSet {
            bits: self.bits | other.bits,
        }
    }

    pub fn intersection(&self, other: EvidenceSet) -> EvidenceSet {
        EvidenceSet {
            bits: self.bits & other.bits,
        }
    }

    /// Kinds in `self` but not in `other`.
    pub fn difference(&self, other: EvidenceSet) -> EvidenceSet {
        EvidenceSet {
            bits: self.bits & !other.bits,
        }
    }

    pub fn is_subset(&self, other: EvidenceSet) -> bool {
        self.bits & other.bits == self.bits
    }
}

impl FromIterator<Evidence> for EvidenceSet {
    fn from_iter<I: IntoIterator<Item = Evidence>>(iter: I) -> Self {
        let mut set = EvidenceSet::empty();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

impl Serialize for EvidenceSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for EvidenceSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let kinds = Vec::<Evidence>::deserialize(deserializer)?;
        Ok(kinds.into_iter().collect())
    }
}
