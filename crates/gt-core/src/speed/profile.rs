//! Per-candidate speed profiles.
//!
//! A profile lists every speed a candidate could currently be moving at,
//! derived from the situational factors. Continuous mechanics (the
//! line-of-sight ramp, sanity scaling, the distance ramp) produce spans when
//! their factor is unknown; stepped mechanics (temperature bands, ageing,
//! detection toggles) produce one point per reachable step. Unknown factors
//! always widen the profile to every branch rather than picking one.

use gt_catalog::{Catalog, Ghost, GhostKind, SpeedRule};
use gt_common::{
    format_meters, format_minutes, format_percent, format_seconds, format_temperature,
    TemperatureUnit,
};
use gt_math::remap_clamped;
use serde::{Deserialize, Serialize};

use crate::state::SituationalFactors;

/// Base movement speed shared by most candidates, m/s.
pub const NORMAL_SPEED: f64 = 1.7;
/// Cap on the line-of-sight speed-up multiplier.
pub const LOS_MAX_MULTIPLIER: f64 = 1.65;
/// Sustained line of sight needed to reach the multiplier cap, seconds.
pub const LOS_MAX_PERIOD_S: f64 = 13.0;

const JINN_BOOST_SPEED: f64 = 2.5;
const JINN_BOOST_MIN_DISTANCE_M: f64 = 3.0;
const REVENANT_SLOW_SPEED: f64 = 1.0;
const REVENANT_FAST_SPEED: f64 = 3.0;
const TWIN_SLOW_SPEED: f64 = 1.5;
const TWIN_FAST_SPEED: f64 = 1.9;
const RAIJU_ELECTRONICS_SPEED: f64 = 2.5;
const MOROI_MAX_SPEED: f64 = 2.25;
const MOROI_MIN_SPEED: f64 = 1.5;
const MOROI_MAX_AT_SANITY: f64 = 0.0;
const MOROI_MIN_AT_SANITY: f64 = 0.5;
const DEOGEN_TARGETLESS_SPEED: f64 = 1.6;
const DEOGEN_MIN_SPEED: f64 = 0.4;
const DEOGEN_MAX_SPEED: f64 = 3.0;
const DEOGEN_MIN_DISTANCE_M: f64 = 2.5;
const DEOGEN_MAX_DISTANCE_M: f64 = 6.0;
const THAYE_START_SPEED: f64 = 2.75;
const THAYE_FLOOR_SPEED: f64 = 1.0;
const THAYE_AGE_MIN_S: f64 = 60.0;
const THAYE_AGE_MAX_S: f64 = 120.0;
const THAYE_NERF_PER_AGE: f64 = 0.175;
const THAYE_AGE_LIMIT: u32 = 10;

/// Hantu speed steps as (lower bound inclusive, upper bound exclusive,
/// speed), bounds in degrees Celsius, coldest last.
const HANTU_BANDS: [(f64, f64, f64); 7] = [
    (15.0, f64::INFINITY, 1.4),
    (12.0, 15.0, 1.75),
    (9.0, 12.0, 2.1),
    (6.0, 9.0, 2.3),
    (3.0, 6.0, 2.4),
    (0.0, 3.0, 2.5),
    (f64::NEG_INFINITY, 0.0, 2.7),
];

/// One entry in a candidate's profile: either a single speed or a
/// continuous span the candidate can fall anywhere within.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpeedMarker {
    Point {
        label: String,
        speed: f64,
    },
    Span {
        low_label: String,
        low: f64,
        high_label: String,
        high: f64,
    },
}

impl SpeedMarker {
    fn point(label: impl Into<String>, speed: f64) -> SpeedMarker {
        SpeedMarker::Point {
            label: label.into(),
            speed,
        }
    }

    fn span(
        low_label: impl Into<String>,
        low: f64,
        high_label: impl Into<String>,
        high: f64,
    ) -> SpeedMarker {
        SpeedMarker::Span {
            low_label: low_label.into(),
            low,
            high_label: high_label.into(),
            high,
        }
    }

    pub fn min_speed(&self) -> f64 {
        match self {
            SpeedMarker::Point { speed, .. } => *speed,
            SpeedMarker::Span { low, .. } => *low,
        }
    }

    pub fn max_speed(&self) -> f64 {
        match self {
            SpeedMarker::Point { speed, .. } => *speed,
            SpeedMarker::Span { high, .. } => *high,
        }
    }

    pub fn min_label(&self) -> &str {
        match self {
            SpeedMarker::Point { label, .. } => label,
            SpeedMarker::Span { low_label, .. } => low_label,
        }
    }

    pub fn max_label(&self) -> &str {
        match self {
            SpeedMarker::Point { label, .. } => label,
            SpeedMarker::Span { high_label, .. } => high_label,
        }
    }

    /// Whether any speed in this marker falls inside `[lo, hi]`.
    pub fn overlaps(&self, lo: f64, hi: f64) -> bool {
        self.min_speed() <= hi && self.max_speed() >= lo
    }
}

/// All speeds one candidate could currently be moving at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhostProfile {
    pub kind: GhostKind,
    /// Sorted ascending by slowest reachable speed.
    pub markers: Vec<SpeedMarker>,
}

impl GhostProfile {
    fn new(kind: GhostKind, mut markers: Vec<SpeedMarker>) -> GhostProfile {
        markers.sort_by(|a, b| a.min_speed().total_cmp(&b.min_speed()));
        GhostProfile { kind, markers }
    }

    pub fn min_speed(&self) -> Option<f64> {
        self.markers.iter().map(SpeedMarker::min_speed).reduce(f64::min)
    }

    pub fn max_speed(&self) -> Option<f64> {
        self.markers.iter().map(SpeedMarker::max_speed).reduce(f64::max)
    }

    fn slowest_marker(&self) -> Option<&SpeedMarker> {
        self.markers
            .iter()
            .min_by(|a, b| a.min_speed().total_cmp(&b.min_speed()))
    }

    fn fastest_marker(&self) -> Option<&SpeedMarker> {
        self.markers
            .iter()
            .max_by(|a, b| a.max_speed().total_cmp(&b.max_speed()))
    }
}

/// Profiles for the whole catalog, in catalog order.
pub fn profiles(
    catalog: &Catalog,
    factors: &SituationalFactors,
    unit: TemperatureUnit,
) -> Vec<GhostProfile> {
    let mut out: Vec<GhostProfile> = catalog
        .ghosts()
        .iter()
        .filter(|ghost| ghost.speed_rule != SpeedRule::MimicAll)
        .map(|ghost| GhostProfile::new(ghost.kind, rule_markers(ghost, factors, unit)))
        .collect();

    // The mimic mirrors everyone else, so its profile is computed last and
    // then slotted back into catalog position.
    for (index, ghost) in catalog.ghosts().iter().enumerate() {
        if ghost.speed_rule == SpeedRule::MimicAll {
            let profile = mimic_profile(ghost.kind, &out);
            out.insert(index.min(out.len()), profile);
        }
    }
    out
}

fn rule_markers(
    ghost: &Ghost,
    factors: &SituationalFactors,
    unit: TemperatureUnit,
) -> Vec<SpeedMarker> {
    match ghost.speed_rule {
        SpeedRule::Standard => los_ramp(NORMAL_SPEED, factors.line_of_sight_seconds, None, ""),
        SpeedRule::BreakerBoost => jinn_markers(factors),
        SpeedRule::DetectionToggle => revenant_markers(factors),
        SpeedRule::TemperatureBands => hantu_markers(factors, unit),
        SpeedRule::TwinPair => twins_markers(factors),
        SpeedRule::ElectronicsBoost => raiju_markers(factors),
        SpeedRule::SanityScaling => moroi_markers(factors),
        SpeedRule::DistanceRamp => deogen_markers(factors),
        SpeedRule::Ageing => thaye_markers(factors),
        SpeedRule::MimicAll => Vec::new(),
    }
}

/// Speed-up multiplier after `seconds` of sustained line of sight,
/// saturating at the cap.
fn los_multiplier(seconds: f64) -> f64 {
    remap_clamped(seconds, 0.0, LOS_MAX_PERIOD_S, 1.0, LOS_MAX_MULTIPLIER)
}

/// Phrase describing a known line-of-sight duration.
fn los_phrase(seconds: f64) -> String {
    if seconds >= LOS_MAX_PERIOD_S {
        format!(
            "after at least {} line of sight",
            format_seconds(LOS_MAX_PERIOD_S)
        )
    } else {
        format!("with {} line of sight", format_seconds(seconds))
    }
}

/// Markers for a base speed under the standard line-of-sight ramp.
///
/// `prefix` names the variant ("Slow twin"); `suffix` appends a qualifying
/// clause to every label.
fn los_ramp(
    base: f64,
    los_seconds: Option<f64>,
    prefix: Option<&str>,
    suffix: &str,
) -> Vec<SpeedMarker> {
    let max_seconds = format_seconds(LOS_MAX_PERIOD_S);
    match los_seconds {
        None => {
            let low_label = match prefix {
                None => format!("Base speed{suffix}"),
                Some(p) => format!("{p} base{suffix}"),
            };
            let high_label = match prefix {
                None => format!("Max, after at least {max_seconds} line of sight{suffix}"),
                Some(p) => format!("{p} max, after at least {max_seconds} line of sight{suffix}"),
            };
            vec![SpeedMarker::span(
                low_label,
                base,
                high_label,
                base * LOS_MAX_MULTIPLIER,
            )]
        }
        Some(t) if t >= LOS_MAX_PERIOD_S => {
            let label = match prefix {
                None => format!("After at least {max_seconds} line of sight{suffix}"),
                Some(p) => format!("{p} after at least {max_seconds} line of sight{suffix}"),
            };
            vec![SpeedMarker::point(label, base * LOS_MAX_MULTIPLIER)]
        }
        Some(t) => {
            let seconds = format_seconds(t);
            let label = match prefix {
                None => format!("With {seconds} line of sight{suffix}"),
                Some(p) => format!("{p} with {seconds} line of sight{suffix}"),
            };
            vec![SpeedMarker::point(label, base * los_multiplier(t))]
        }
    }
}

/// Boosted when the breaker is on, the target is at least 3 m away, and
/// there is line of sight; otherwise the normal ramp.
fn jinn_markers(factors: &SituationalFactors) -> Vec<SpeedMarker> {
    let breaker = factors.breaker_on;
    let far = factors
        .distance_meters
        .map(|d| d >= JINN_BOOST_MIN_DISTANCE_M);
    let some_los = factors.line_of_sight_seconds.map(|t| t > 0.0);

    let mut markers = Vec::new();
    if breaker != Some(false) && far != Some(false) && some_los != Some(false) {
        markers.push(SpeedMarker::point(
            format!(
                "Breaker on, {} or further, with line of sight",
                format_meters(JINN_BOOST_MIN_DISTANCE_M)
            ),
            JINN_BOOST_SPEED,
        ));
    }

    match factors.line_of_sight_seconds {
        None => markers.extend(los_ramp(NORMAL_SPEED, None, None, "")),
        Some(t) if t <= 0.0 => markers.push(SpeedMarker::point("Base speed", NORMAL_SPEED)),
        Some(t) => {
            // Once the boost conditions are certain, the normal ramp no
            // longer applies.
            let certainly_boosted = breaker == Some(true) && far == Some(true);
            if !certainly_boosted {
                markers.extend(los_ramp(NORMAL_SPEED, Some(t), None, ""));
            }
        }
    }
    markers
}

/// Fixed slow speed while undetected, fixed fast speed once any line of
/// sight or held electronics give the target away. No gradual ramp.
fn revenant_markers(factors: &SituationalFactors) -> Vec<SpeedMarker> {
    let some_los = factors.line_of_sight_seconds.map(|t| t > 0.0);
    let detected = factors.detected_held_electronics;

    let mut markers = Vec::new();
    if some_los != Some(true) && detected != Some(true) {
        markers.push(SpeedMarker::point(
            "When no target is detected",
            REVENANT_SLOW_SPEED,
        ));
    }
    if some_los != Some(false) || detected != Some(false) {
        markers.push(SpeedMarker::point(
            "When a target is detected",
            REVENANT_FAST_SPEED,
        ));
    }
    markers
}

fn hantu_markers(factors: &SituationalFactors, unit: TemperatureUnit) -> Vec<SpeedMarker> {
    HANTU_BANDS
        .iter()
        .filter(|&&(lower, upper, _)| match factors.temperature_celsius {
            None => true,
            Some(t) => t >= lower && t < upper,
        })
        .map(|&(lower, upper, speed)| {
            let label = if upper.is_infinite() {
                format!("At {} or warmer", format_temperature(lower, unit))
            } else if lower.is_infinite() {
                format!("Colder than {}", format_temperature(upper, unit))
            } else {
                format!(
                    "Between {} and {}",
                    format_temperature(lower, unit),
                    format_temperature(upper, unit)
                )
            };
            SpeedMarker::point(label, speed)
        })
        .collect()
}

fn twins_markers(factors: &SituationalFactors) -> Vec<SpeedMarker> {
    let mut markers = los_ramp(
        TWIN_SLOW_SPEED,
        factors.line_of_sight_seconds,
        Some("Slow twin"),
        "",
    );
    markers.extend(los_ramp(
        TWIN_FAST_SPEED,
        factors.line_of_sight_seconds,
        Some("Fast twin"),
        "",
    ));
    markers
}

fn raiju_markers(factors: &SituationalFactors) -> Vec<SpeedMarker> {
    let near = factors.near_electronics;

    let mut markers = Vec::new();
    if near != Some(false) {
        markers.push(SpeedMarker::point(
            "Near active electronics",
            RAIJU_ELECTRONICS_SPEED,
        ));
    }
    if near != Some(true) {
        markers.extend(los_ramp(
            NORMAL_SPEED,
            factors.line_of_sight_seconds,
            None,
            ", away from active electronics",
        ));
    }
    markers
}

/// Speed at a known sanity fraction: fastest at zero sanity, easing down to
/// the floor which holds from 50% sanity upward.
fn moroi_sanity_speed(sanity: f64) -> f64 {
    let slope = (MOROI_MIN_SPEED - MOROI_MAX_SPEED) / (MOROI_MIN_AT_SANITY - MOROI_MAX_AT_SANITY);
    (MOROI_MAX_SPEED + sanity * slope).max(MOROI_MIN_SPEED)
}

fn moroi_markers(factors: &SituationalFactors) -> Vec<SpeedMarker> {
    let floor_sanity = format_percent(MOROI_MIN_AT_SANITY);
    let zero_sanity = format_percent(MOROI_MAX_AT_SANITY);
    match (factors.sanity_fraction, factors.line_of_sight_seconds) {
        (None, None) => vec![SpeedMarker::span(
            format!("At {floor_sanity} or higher sanity, no line of sight"),
            MOROI_MIN_SPEED,
            format!(
                "At {zero_sanity} sanity, after at least {} line of sight",
                format_seconds(LOS_MAX_PERIOD_S)
            ),
            MOROI_MAX_SPEED * LOS_MAX_MULTIPLIER,
        )],
        (None, Some(t)) => {
            let phrase = los_phrase(t);
            vec![SpeedMarker::span(
                format!("At {floor_sanity} or higher sanity, {phrase}"),
                MOROI_MIN_SPEED * los_multiplier(t),
                format!("At {zero_sanity} sanity, {phrase}"),
                MOROI_MAX_SPEED * los_multiplier(t),
            )]
        }
        (Some(s), None) => {
            let at_sanity = format_percent(s);
            let speed = moroi_sanity_speed(s);
            vec![SpeedMarker::span(
                format!("At {at_sanity} sanity, no line of sight"),
                speed,
                format!(
                    "At {at_sanity} sanity, after at least {} line of sight",
                    format_seconds(LOS_MAX_PERIOD_S)
                ),
                speed * LOS_MAX_MULTIPLIER,
            )]
        }
        (Some(s), Some(t)) => vec![SpeedMarker::point(
            format!("At {} sanity, {}", format_percent(s), los_phrase(t)),
            moroi_sanity_speed(s) * los_multiplier(t),
        )],
    }
}

/// Fixed speed while targetless under incense; otherwise ramps with
/// distance to the target. No line-of-sight ramp.
fn deogen_markers(factors: &SituationalFactors) -> Vec<SpeedMarker> {
    let mut markers = Vec::new();
    if factors.incensed != Some(false) {
        markers.push(SpeedMarker::point(
            "When targetless under incense",
            DEOGEN_TARGETLESS_SPEED,
        ));
    }
    if factors.incensed != Some(true) {
        let near_label = format!(
            "Within {} of the target",
            format_meters(DEOGEN_MIN_DISTANCE_M)
        );
        let far_label = format!(
            "At {} or further from the target",
            format_meters(DEOGEN_MAX_DISTANCE_M)
        );
        match factors.distance_meters {
            None => markers.push(SpeedMarker::span(
                near_label,
                DEOGEN_MIN_SPEED,
                far_label,
                DEOGEN_MAX_SPEED,
            )),
            Some(d) if d <= DEOGEN_MIN_DISTANCE_M => {
                markers.push(SpeedMarker::point(near_label, DEOGEN_MIN_SPEED))
            }
            Some(d) if d >= DEOGEN_MAX_DISTANCE_M => {
                markers.push(SpeedMarker::point(far_label, DEOGEN_MAX_SPEED))
            }
            Some(d) => markers.push(SpeedMarker::point(
                format!("At {} from the target", format_meters(d)),
                remap_clamped(
                    d,
                    DEOGEN_MIN_DISTANCE_M,
                    DEOGEN_MAX_DISTANCE_M,
                    DEOGEN_MIN_SPEED,
                    DEOGEN_MAX_SPEED,
                ),
            )),
        }
    }
    markers
}

fn thaye_marker(ages: u32) -> SpeedMarker {
    if ages == 0 {
        return SpeedMarker::point("Before ageing", THAYE_START_SPEED);
    }
    if ages >= THAYE_AGE_LIMIT {
        return SpeedMarker::point(
            format!("After ageing {THAYE_AGE_LIMIT} times"),
            THAYE_FLOOR_SPEED,
        );
    }
    let speed = (THAYE_START_SPEED - f64::from(ages) * THAYE_NERF_PER_AGE).max(THAYE_FLOOR_SPEED);
    SpeedMarker::point(
        format!(
            "After ageing {} times (between {} and {} near the target)",
            ages,
            format_minutes(f64::from(ages) * THAYE_AGE_MIN_S / 60.0),
            format_minutes(f64::from(ages) * THAYE_AGE_MAX_S / 60.0),
        ),
        speed,
    )
}

/// Slows by a fixed step each time it ages; a step takes 60-120 s of
/// proximity, so elapsed time bounds how many steps have happened.
fn thaye_markers(factors: &SituationalFactors) -> Vec<SpeedMarker> {
    match factors.proximity_seconds {
        None => vec![SpeedMarker::span(
            format!("After ageing {THAYE_AGE_LIMIT} times"),
            THAYE_FLOOR_SPEED,
            "Before ageing",
            THAYE_START_SPEED,
        )],
        Some(t) => {
            let min_ages = ((t / THAYE_AGE_MAX_S).floor() as u32).min(THAYE_AGE_LIMIT);
            let max_ages = ((t / THAYE_AGE_MIN_S).floor() as u32).min(THAYE_AGE_LIMIT);
            let mut markers = vec![thaye_marker(min_ages)];
            if max_ages != min_ages {
                markers.push(thaye_marker(max_ages));
            }
            markers
        }
    }
}

/// A single span from the slowest to the fastest speed across every other
/// candidate's profile, labels naming the mimicked candidate and branch.
fn mimic_profile(kind: GhostKind, others: &[GhostProfile]) -> GhostProfile {
    let mut slowest: Option<(String, f64)> = None;
    let mut fastest: Option<(String, f64)> = None;

    for profile in others {
        if let Some(marker) = profile.slowest_marker() {
            let speed = marker.min_speed();
            if slowest.as_ref().map_or(true, |&(_, s)| speed < s) {
                slowest = Some((
                    format!("Mimic of {}, {}", profile.kind, marker.min_label()),
                    speed,
                ));
            }
        }
        if let Some(marker) = profile.fastest_marker() {
            let speed = marker.max_speed();
            if fastest.as_ref().map_or(true, |&(_, s)| speed > s) {
                fastest = Some((
                    format!("Mimic of {}, {}", profile.kind, marker.max_label()),
                    speed,
                ));
            }
        }
    }

    let markers = match (slowest, fastest) {
        (Some((low_label, low)), Some((high_label, high))) => {
            vec![SpeedMarker::span(low_label, low, high_label, high)]
        }
        _ => Vec::new(),
    };
    GhostProfile::new(kind, markers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gt_catalog::Catalog;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn profile_of(profiles: &[GhostProfile], kind: GhostKind) -> GhostProfile {
        profiles.iter().find(|p| p.kind == kind).unwrap().clone()
    }

    fn all_profiles(factors: &SituationalFactors) -> Vec<GhostProfile> {
        profiles(&Catalog::standard(), factors, TemperatureUnit::Celsius)
    }

    #[test]
    fn test_standard_unknown_los_is_one_span() {
        let out = all_profiles(&SituationalFactors::default());
        let spirit = profile_of(&out, GhostKind::Spirit);
        assert_eq!(spirit.markers.len(), 1);
        assert!(approx_eq(spirit.min_speed().unwrap(), NORMAL_SPEED));
        assert!(approx_eq(
            spirit.max_speed().unwrap(),
            NORMAL_SPEED * LOS_MAX_MULTIPLIER
        ));
    }

    #[test]
    fn test_standard_known_los_is_one_point() {
        let factors = SituationalFactors {
            line_of_sight_seconds: Some(5.0),
            ..SituationalFactors::default()
        };
        let out = all_profiles(&factors);
        let spirit = profile_of(&out, GhostKind::Spirit);
        assert_eq!(spirit.markers.len(), 1);
        // 5 of 13 seconds into the ramp: 1.7 * 1.25.
        assert!(approx_eq(spirit.min_speed().unwrap(), 2.125));
        assert_eq!(spirit.markers[0].min_label(), "With 5s line of sight");
    }

    #[test]
    fn test_los_multiplier_saturates() {
        let factors = SituationalFactors {
            line_of_sight_seconds: Some(40.0),
            ..SituationalFactors::default()
        };
        let out = all_profiles(&factors);
        let spirit = profile_of(&out, GhostKind::Spirit);
        assert!(approx_eq(
            spirit.min_speed().unwrap(),
            NORMAL_SPEED * LOS_MAX_MULTIPLIER
        ));
        assert_eq!(
            spirit.markers[0].min_label(),
            "After at least 13s line of sight"
        );
    }

    #[test]
    fn test_jinn_certain_boost_is_boost_only() {
        let factors = SituationalFactors {
            line_of_sight_seconds: Some(5.0),
            breaker_on: Some(true),
            distance_meters: Some(10.0),
            ..SituationalFactors::default()
        };
        let out = all_profiles(&factors);
        let jinn = profile_of(&out, GhostKind::Jinn);
        assert_eq!(jinn.markers.len(), 1);
        assert!(approx_eq(jinn.min_speed().unwrap(), 2.5));
    }

    #[test]
    fn test_jinn_unknown_factors_keep_all_branches() {
        let out = all_profiles(&SituationalFactors::default());
        let jinn = profile_of(&out, GhostKind::Jinn);
        // The boost point plus the base-to-max span.
        assert_eq!(jinn.markers.len(), 2);
        assert!(approx_eq(jinn.min_speed().unwrap(), NORMAL_SPEED));
        assert!(approx_eq(
            jinn.max_speed().unwrap(),
            NORMAL_SPEED * LOS_MAX_MULTIPLIER
        ));
    }

    #[test]
    fn test_jinn_no_line_of_sight_is_base_only() {
        let factors = SituationalFactors {
            line_of_sight_seconds: Some(0.0),
            breaker_on: Some(true),
            distance_meters: Some(10.0),
            ..SituationalFactors::default()
        };
        let out = all_profiles(&factors);
        let jinn = profile_of(&out, GhostKind::Jinn);
        assert_eq!(jinn.markers.len(), 1);
        assert!(approx_eq(jinn.min_speed().unwrap(), NORMAL_SPEED));
    }

    #[test]
    fn test_revenant_toggle() {
        let out = all_profiles(&SituationalFactors::default());
        let revenant = profile_of(&out, GhostKind::Revenant);
        assert_eq!(revenant.markers.len(), 2);
        assert!(approx_eq(revenant.min_speed().unwrap(), 1.0));
        assert!(approx_eq(revenant.max_speed().unwrap(), 3.0));

        let undetected = SituationalFactors {
            line_of_sight_seconds: Some(0.0),
            detected_held_electronics: Some(false),
            ..SituationalFactors::default()
        };
        let out = all_profiles(&undetected);
        let revenant = profile_of(&out, GhostKind::Revenant);
        assert_eq!(revenant.markers.len(), 1);
        assert!(approx_eq(revenant.min_speed().unwrap(), 1.0));

        let detected = SituationalFactors {
            line_of_sight_seconds: Some(0.0),
            detected_held_electronics: Some(true),
            ..SituationalFactors::default()
        };
        let out = all_profiles(&detected);
        let revenant = profile_of(&out, GhostKind::Revenant);
        assert_eq!(revenant.markers.len(), 1);
        assert!(approx_eq(revenant.min_speed().unwrap(), 3.0));
    }

    #[test]
    fn test_hantu_unknown_temperature_is_all_bands() {
        let out = all_profiles(&SituationalFactors::default());
        let hantu = profile_of(&out, GhostKind::Hantu);
        assert_eq!(hantu.markers.len(), 7);
        assert!(approx_eq(hantu.min_speed().unwrap(), 1.4));
        assert!(approx_eq(hantu.max_speed().unwrap(), 2.7));
    }

    #[test]
    fn test_hantu_known_temperature_is_one_band() {
        let factors = SituationalFactors {
            temperature_celsius: Some(10.0),
            ..SituationalFactors::default()
        };
        let out = all_profiles(&factors);
        let hantu = profile_of(&out, GhostKind::Hantu);
        assert_eq!(hantu.markers.len(), 1);
        assert!(approx_eq(hantu.min_speed().unwrap(), 2.1));
        assert_eq!(hantu.markers[0].min_label(), "Between 9°C and 12°C");

        let freezing = SituationalFactors {
            temperature_celsius: Some(-4.0),
            ..SituationalFactors::default()
        };
        let out = all_profiles(&freezing);
        let hantu = profile_of(&out, GhostKind::Hantu);
        assert_eq!(hantu.markers.len(), 1);
        assert!(approx_eq(hantu.min_speed().unwrap(), 2.7));
    }

    #[test]
    fn test_twins_have_two_spans() {
        let out = all_profiles(&SituationalFactors::default());
        let twins = profile_of(&out, GhostKind::TheTwins);
        assert_eq!(twins.markers.len(), 2);
        assert!(approx_eq(twins.min_speed().unwrap(), 1.5));
        assert!(approx_eq(twins.max_speed().unwrap(), 1.9 * LOS_MAX_MULTIPLIER));
    }

    #[test]
    fn test_raiju_near_electronics() {
        let near = SituationalFactors {
            near_electronics: Some(true),
            ..SituationalFactors::default()
        };
        let out = all_profiles(&near);
        let raiju = profile_of(&out, GhostKind::Raiju);
        assert_eq!(raiju.markers.len(), 1);
        assert!(approx_eq(raiju.min_speed().unwrap(), 2.5));

        let away = SituationalFactors {
            near_electronics: Some(false),
            ..SituationalFactors::default()
        };
        let out = all_profiles(&away);
        let raiju = profile_of(&out, GhostKind::Raiju);
        assert_eq!(raiju.markers.len(), 1);
        assert!(approx_eq(raiju.min_speed().unwrap(), NORMAL_SPEED));
    }

    #[test]
    fn test_moroi_sanity_scaling() {
        assert!(approx_eq(moroi_sanity_speed(0.0), 2.25));
        assert!(approx_eq(moroi_sanity_speed(0.25), 1.875));
        assert!(approx_eq(moroi_sanity_speed(0.5), 1.5));
        assert!(approx_eq(moroi_sanity_speed(0.9), 1.5), "floor holds above 50%");
    }

    #[test]
    fn test_moroi_known_sanity_unknown_los() {
        let factors = SituationalFactors {
            sanity_fraction: Some(0.25),
            ..SituationalFactors::default()
        };
        let out = all_profiles(&factors);
        let moroi = profile_of(&out, GhostKind::Moroi);
        assert_eq!(moroi.markers.len(), 1);
        assert!(approx_eq(moroi.min_speed().unwrap(), 1.875));
        assert!(approx_eq(moroi.max_speed().unwrap(), 1.875 * LOS_MAX_MULTIPLIER));
    }

    #[test]
    fn test_deogen_distance_ramp() {
        let factors = SituationalFactors {
            incensed: Some(false),
            distance_meters: Some(4.25),
            ..SituationalFactors::default()
        };
        let out = all_profiles(&factors);
        let deogen = profile_of(&out, GhostKind::Deogen);
        assert_eq!(deogen.markers.len(), 1);
        // Midway through the 2.5-6 m ramp.
        assert!(approx_eq(deogen.min_speed().unwrap(), 1.7));
    }

    #[test]
    fn test_deogen_incensed_is_targetless_point() {
        let factors = SituationalFactors {
            incensed: Some(true),
            ..SituationalFactors::default()
        };
        let out = all_profiles(&factors);
        let deogen = profile_of(&out, GhostKind::Deogen);
        assert_eq!(deogen.markers.len(), 1);
        assert!(approx_eq(deogen.min_speed().unwrap(), 1.6));
    }

    #[test]
    fn test_thaye_age_bounds_from_proximity() {
        let factors = SituationalFactors {
            proximity_seconds: Some(150.0),
            ..SituationalFactors::default()
        };
        let out = all_profiles(&factors);
        let thaye = profile_of(&out, GhostKind::Thaye);
        // Between one ageing (150/120) and two (150/60).
        assert_eq!(thaye.markers.len(), 2);
        assert!(approx_eq(thaye.min_speed().unwrap(), 2.75 - 2.0 * 0.175));
        assert!(approx_eq(thaye.max_speed().unwrap(), 2.75 - 0.175));
    }

    #[test]
    fn test_thaye_age_limit() {
        let factors = SituationalFactors {
            proximity_seconds: Some(100_000.0),
            ..SituationalFactors::default()
        };
        let out = all_profiles(&factors);
        let thaye = profile_of(&out, GhostKind::Thaye);
        assert_eq!(thaye.markers.len(), 1);
        assert!(approx_eq(thaye.min_speed().unwrap(), 1.0));
        assert_eq!(thaye.markers[0].min_label(), "After ageing 10 times");
    }

    #[test]
    fn test_mimic_spans_the_global_extremes() {
        let out = all_profiles(&SituationalFactors::default());
        let mimic = profile_of(&out, GhostKind::TheMimic);
        assert_eq!(mimic.markers.len(), 1);
        // Slowest: Deogen pressed against the target. Fastest: zero-sanity
        // Moroi at full line-of-sight ramp.
        assert!(approx_eq(mimic.min_speed().unwrap(), 0.4));
        assert!(approx_eq(mimic.max_speed().unwrap(), 2.25 * LOS_MAX_MULTIPLIER));
        assert!(mimic.markers[0].min_label().starts_with("Mimic of Deogen,"));
        assert!(mimic.markers[0].max_label().starts_with("Mimic of Moroi,"));
    }

    #[test]
    fn test_profiles_follow_catalog_order() {
        let out = all_profiles(&SituationalFactors::default());
        assert_eq!(out.len(), GhostKind::all().len());
        for (profile, &kind) in out.iter().zip(GhostKind::all()) {
            assert_eq!(profile.kind, kind);
        }
    }

    #[test]
    fn test_markers_sorted_ascending() {
        let out = all_profiles(&SituationalFactors::default());
        for profile in &out {
            let speeds: Vec<f64> = profile.markers.iter().map(SpeedMarker::min_speed).collect();
            assert!(
                speeds.windows(2).all(|w| w[0] <= w[1]),
                "{} markers out of order",
                profile.kind
            );
        }
    }
}
