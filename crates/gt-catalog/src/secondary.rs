//! Secondary observation categories.
//!
//! Secondary evidence sits outside the collectable-count system: salt
//! footprints, the six-fingered handprint, spirit-box breathing, camera-only
//! D.O.T.S., hunt flicker patterns, and the sanity band at which a hunt was
//! observed. Each category contributes at most one asserted tag at a time.
//!
//! Three categories are gated behind a prerequisite primary kind: there is no
//! handprint to inspect without Ultraviolet, no breathing without Spirit Box,
//! and no camera-only distinction without the D.O.T.S. Projector.

use gt_common::Error;
use serde::{Deserialize, Serialize};

use crate::evidence::Evidence;

/// Hunt sanity observation band: a multiple of 5 in `[0, 100]`.
///
/// Band 0 is the non-filtering default; every candidate's hunt threshold is
/// at or above it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct SanityBand(u8);

impl SanityBand {
    pub const STEP: u8 = 5;
    pub const MAX: u8 = 100;

    /// Validate and construct a band value.
    pub fn new(value: u32) -> Result<SanityBand, Error> {
        if value > u32::from(Self::MAX) || value % u32::from(Self::STEP) != 0 {
            return Err(Error::InvalidSanityBand { value });
        }
        Ok(SanityBand(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// All 21 band values in ascending order.
    pub fn all() -> impl Iterator<Item = SanityBand> {
        (0..=Self::MAX).step_by(Self::STEP as usize).map(SanityBand)
    }
}

impl TryFrom<u32> for SanityBand {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        SanityBand::new(value)
    }
}

impl From<SanityBand> for u32 {
    fn from(band: SanityBand) -> u32 {
        u32::from(band.0)
    }
}

impl std::fmt::Display for SanityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Observed light-flicker pattern during a hunt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlickerPattern {
    /// The common cadence shared by most candidates.
    Typical,
    /// Long invisible stretches between brief appearances.
    LongVanish,
    /// Visible nearly the whole time.
    Constant,
    /// Fast on/off cycling.
    Rapid,
}

impl FlickerPattern {
    pub fn all() -> &'static [FlickerPattern] {
        &[
            FlickerPattern::Typical,
            FlickerPattern::LongVanish,
            FlickerPattern::Constant,
            FlickerPattern::Rapid,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            FlickerPattern::Typical => "typical",
            FlickerPattern::LongVanish => "long_vanish",
            FlickerPattern::Constant => "constant",
            FlickerPattern::Rapid => "rapid",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FlickerPattern::Typical => "typical",
            FlickerPattern::LongVanish => "long vanish",
            FlickerPattern::Constant => "near-constant",
            FlickerPattern::Rapid => "rapid",
        }
    }
}

impl std::fmt::Display for FlickerPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A secondary observation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryCategory {
    HuntSanity,
    SaltFootprints,
    Handprint,
    SpiritBoxBreathing,
    DotsCameraOnly,
    HuntFlicker,
}

impl SecondaryCategory {
    pub fn all() -> &'static [SecondaryCategory] {
        &[
            SecondaryCategory::HuntSanity,
            SecondaryCategory::SaltFootprints,
            SecondaryCategory::Handprint,
            SecondaryCategory::SpiritBoxBreathing,
            SecondaryCategory::DotsCameraOnly,
            SecondaryCategory::HuntFlicker,
        ]
    }

    /// Stable machine-readable name (matches the serde encoding).
    pub fn name(&self) -> &'static str {
        match self {
            SecondaryCategory::HuntSanity => "hunt_sanity",
            SecondaryCategory::SaltFootprints => "salt_footprints",
            SecondaryCategory::Handprint => "handprint",
            SecondaryCategory::SpiritBoxBreathing => "spirit_box_breathing",
            SecondaryCategory::DotsCameraOnly => "dots_camera_only",
            SecondaryCategory::HuntFlicker => "hunt_flicker",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SecondaryCategory::HuntSanity => "hunt sanity",
            SecondaryCategory::SaltFootprints => "salt footprints",
            SecondaryCategory::Handprint => "six-fingered handprint",
            SecondaryCategory::SpiritBoxBreathing => "spirit box breathing",
            SecondaryCategory::DotsCameraOnly => "D.O.T.S. on camera only",
            SecondaryCategory::HuntFlicker => "hunt flicker",
        }
    }

    /// The primary kind that must not be ruled out for this category to be
    /// observable at all.
    pub fn prerequisite(&self) -> Option<Evidence> {
        match self {
            SecondaryCategory::Handprint => Some(Evidence::Ultraviolet),
            SecondaryCategory::SpiritBoxBreathing => Some(Evidence::SpiritBox),
            SecondaryCategory::DotsCameraOnly => Some(Evidence::DotsProjector),
            _ => None,
        }
    }

    /// Whether this category carries a banded numeric value rather than a
    /// discrete option.
    pub fn is_banded(&self) -> bool {
        matches!(self, SecondaryCategory::HuntSanity)
    }

    /// Every assertable tag for this category, in display order.
    pub fn options(&self) -> Vec<SecondaryTag> {
        match self {
            SecondaryCategory::HuntSanity => {
                SanityBand::all().map(SecondaryTag::HuntSanity).collect()
            }
            SecondaryCategory::SaltFootprints => vec![
                SecondaryTag::SaltFootprints(true),
                SecondaryTag::SaltFootprints(false),
            ],
            SecondaryCategory::Handprint => vec![
                SecondaryTag::Handprint(true),
                SecondaryTag::Handprint(false),
            ],
            SecondaryCategory::SpiritBoxBreathing => vec![
                SecondaryTag::SpiritBoxBreathing(true),
                SecondaryTag::SpiritBoxBreathing(false),
            ],
            SecondaryCategory::DotsCameraOnly => vec![
                SecondaryTag::DotsCameraOnly(true),
                SecondaryTag::DotsCameraOnly(false),
            ],
            SecondaryCategory::HuntFlicker => FlickerPattern::all()
                .iter()
                .copied()
                .map(SecondaryTag::HuntFlicker)
                .collect(),
        }
    }
}

impl std::fmt::Display for SecondaryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An asserted secondary observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", content = "value", rename_all = "snake_case")]
pub enum SecondaryTag {
    HuntSanity(SanityBand),
    SaltFootprints(bool),
    Handprint(bool),
    SpiritBoxBreathing(bool),
    DotsCameraOnly(bool),
    HuntFlicker(FlickerPattern),
}

impl SecondaryTag {
    pub fn category(&self) -> SecondaryCategory {
        match self {
            SecondaryTag::HuntSanity(_) => SecondaryCategory::HuntSanity,
            SecondaryTag::SaltFootprints(_) => SecondaryCategory::SaltFootprints,
            SecondaryTag::Handprint(_) => SecondaryCategory::Handprint,
            SecondaryTag::SpiritBoxBreathing(_) => SecondaryCategory::SpiritBoxBreathing,
            SecondaryTag::DotsCameraOnly(_) => SecondaryCategory::DotsCameraOnly,
            SecondaryTag::HuntFlicker(_) => SecondaryCategory::HuntFlicker,
        }
    }

    /// Short option label used in reports.
    pub fn option_label(&self) -> String {
        match self {
            SecondaryTag::HuntSanity(band) => band.to_string(),
            SecondaryTag::SaltFootprints(yes)
            | SecondaryTag::Handprint(yes)
            | SecondaryTag::SpiritBoxBreathing(yes)
            | SecondaryTag::DotsCameraOnly(yes) => {
                if *yes {
                    "yes".to_string()
                } else {
                    "no".to_string()
                }
            }
            SecondaryTag::HuntFlicker(pattern) => pattern.display_name().to_string(),
        }
    }
}

impl std::fmt::Display for SecondaryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category(), self.option_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanity_band_validation() {
        assert!(SanityBand::new(0).is_ok());
        assert!(SanityBand::new(55).is_ok());
        assert!(SanityBand::new(100).is_ok());

        assert!(SanityBand::new(37).is_err());
        assert!(SanityBand::new(105).is_err());
    }

    #[test]
    fn test_sanity_band_enumeration() {
        let bands: Vec<SanityBand> = SanityBand::all().collect();
        assert_eq!(bands.len(), 21);
        assert_eq!(bands[0].value(), 0);
        assert_eq!(bands[20].value(), 100);
        assert!(bands.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_prerequisites() {
        assert_eq!(
            SecondaryCategory::Handprint.prerequisite(),
            Some(Evidence::Ultraviolet)
        );
        assert_eq!(
            SecondaryCategory::SpiritBoxBreathing.prerequisite(),
            Some(Evidence::SpiritBox)
        );
        assert_eq!(
            SecondaryCategory::DotsCameraOnly.prerequisite(),
            Some(Evidence::DotsProjector)
        );
        assert_eq!(SecondaryCategory::SaltFootprints.prerequisite(), None);
        assert_eq!(SecondaryCategory::HuntFlicker.prerequisite(), None);
        assert_eq!(SecondaryCategory::HuntSanity.prerequisite(), None);
    }

    #[test]
    fn test_option_counts() {
        assert_eq!(SecondaryCategory::HuntSanity.options().len(), 21);
        assert_eq!(SecondaryCategory::SaltFootprints.options().len(), 2);
        assert_eq!(SecondaryCategory::HuntFlicker.options().len(), 4);
    }

    #[test]
    fn test_options_belong_to_their_category() {
        for &category in SecondaryCategory::all() {
            for tag in category.options() {
                assert_eq!(tag.category(), category);
            }
        }
    }

    #[test]
    fn test_tag_serde_shape() {
        let tag = SecondaryTag::SaltFootprints(false);
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, r#"{"category":"salt_footprints","value":false}"#);

        let back: SecondaryTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }

    #[test]
    fn test_band_tag_serde_rejects_invalid() {
        let json = r#"{"category":"hunt_sanity","value":37}"#;
        assert!(serde_json::from_str::<SecondaryTag>(json).is_err());
    }

    #[test]
    fn test_option_labels() {
        assert_eq!(
            SecondaryTag::HuntSanity(SanityBand::new(60).unwrap()).option_label(),
            "60%"
        );
        assert_eq!(SecondaryTag::Handprint(true).option_label(), "yes");
        assert_eq!(
            SecondaryTag::HuntFlicker(FlickerPattern::LongVanish).option_label(),
            "long vanish"
        );
    }
}
