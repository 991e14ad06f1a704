//! Effort model: user settings and per-segment statistics.

use serde::{Deserialize, Serialize};

use crate::elevation;
use crate::geometry;
use crate::track::TrackPoint;

// Domain calibration constants. These are fixed by the effort model and
// are not tunable beyond the two fields of [`EffortSettings`]; changing
// any of them changes every reported estimate.
const CLIMB_M_PER_EQUIV_KM: f64 = 80.0;
const DESCENT_M_PER_EQUIV_KM: f64 = 150.0;
const BACKPACK_NEUTRAL_KG: f64 = 75.0;
const FLAT_SPEED_KM_H: f64 = 4.0;
const CLIMB_M_PER_HOUR: f64 = 500.0;
const DESCENT_M_PER_HOUR: f64 = 2000.0;

/// User-tunable effort parameters.
///
/// Read by the statistics and difficulty computations on every
/// evaluation; persisted by [`crate::storage::SettingsStore`]. Changing
/// them re-derives every segment on the next observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffortSettings {
    /// 1 (untrained) to 5 (very fit). Tunes pace and the difficulty
    /// threshold table.
    #[serde(default = "default_fitness_level")]
    pub fitness_level: u8,
    /// Carried weight in kilograms.
    #[serde(default = "default_backpack_weight_kg")]
    pub backpack_weight_kg: f64,
}

fn default_fitness_level() -> u8 {
    2
}

fn default_backpack_weight_kg() -> f64 {
    15.0
}

impl Default for EffortSettings {
    fn default() -> Self {
        Self {
            fitness_level: default_fitness_level(),
            backpack_weight_kg: default_backpack_weight_kg(),
        }
    }
}

/// Derived statistics for one segment (or a whole track).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentStats {
    pub distance_km: f64,
    pub elevation_gain_m: f64,
    pub elevation_loss_m: f64,
    /// Normalized effort metric: distance plus weighted climb and
    /// descent, scaled by carried weight.
    pub equivalent_km: f64,
    /// Estimated walking time.
    pub hours: f64,
}

impl std::ops::Add for SegmentStats {
    type Output = SegmentStats;

    /// Field-wise sum, matching the additive semantics of progressive
    /// trip totals.
    fn add(self, other: SegmentStats) -> SegmentStats {
        SegmentStats {
            distance_km: self.distance_km + other.distance_km,
            elevation_gain_m: self.elevation_gain_m + other.elevation_gain_m,
            elevation_loss_m: self.elevation_loss_m + other.elevation_loss_m,
            equivalent_km: self.equivalent_km + other.equivalent_km,
            hours: self.hours + other.hours,
        }
    }
}

/// Pace multiplier for a fitness level; each level shifts pace by 10%.
fn pace_factor(fitness_level: u8) -> f64 {
    0.9 + (3.0 - f64::from(fitness_level)) * 0.1
}

/// Compute statistics for a run of consecutive track points.
///
/// Pure function of the points and settings; total over its domain.
/// Fewer than two points yields all-zero stats.
pub fn compute_stats(points: &[TrackPoint], settings: &EffortSettings) -> SegmentStats {
    let distance_km = geometry::path_distance_km(points);

    let elevations: Vec<f64> = points.iter().map(|p| p.ele).collect();
    let profile = elevation::gain_loss(&elevations);

    let backpack_multiplier = 1.0 + settings.backpack_weight_kg / BACKPACK_NEUTRAL_KG;
    let equivalent_km = (distance_km
        + profile.gain_m / CLIMB_M_PER_EQUIV_KM
        + profile.loss_m / DESCENT_M_PER_EQUIV_KM)
        * backpack_multiplier;

    let base_hours = distance_km / FLAT_SPEED_KM_H
        + profile.gain_m / CLIMB_M_PER_HOUR
        + profile.loss_m / DESCENT_M_PER_HOUR;
    let hours = base_hours * pace_factor(settings.fitness_level);

    SegmentStats {
        distance_km,
        elevation_gain_m: profile.gain_m,
        elevation_loss_m: profile.loss_m,
        equivalent_km,
        hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn settings(fitness_level: u8, backpack_weight_kg: f64) -> EffortSettings {
        EffortSettings {
            fitness_level,
            backpack_weight_kg,
        }
    }

    /// Track along a meridian; 0.001 degrees of latitude per step.
    fn meridian_track(elevations: &[f64]) -> Vec<TrackPoint> {
        elevations
            .iter()
            .enumerate()
            .map(|(i, &ele)| TrackPoint::new(i as f64 * 0.001, 0.0, ele))
            .collect()
    }

    #[test]
    fn defaults_match_documented_values() {
        let s = EffortSettings::default();
        assert_eq!(s.fitness_level, 2);
        assert_eq!(s.backpack_weight_kg, 15.0);
    }

    #[test]
    fn empty_and_single_point_yield_zero_stats() {
        let s = EffortSettings::default();
        assert_eq!(compute_stats(&[], &s), SegmentStats::default());
        let one = meridian_track(&[100.0]);
        assert_eq!(compute_stats(&one, &s), SegmentStats::default());
    }

    // Regression test pinning the literal model constants (1/80, 1/150,
    // 1/75, 1/4, 1/500, 1/2000 and the 0.9/0.1 pace curve).
    #[test]
    fn three_point_reference_values() {
        let points = meridian_track(&[100.0, 105.0, 95.0]);
        let stats = compute_stats(&points, &settings(3, 15.0));

        // Two legs of 0.001 degrees on a 6371 km sphere.
        let expected_distance = 2.0 * 6371.0 * 0.001_f64.to_radians();
        assert!((stats.distance_km - expected_distance).abs() < EPS);

        // Three samples smooth flat, so no gain or loss survives.
        assert_eq!(stats.elevation_gain_m, 0.0);
        assert_eq!(stats.elevation_loss_m, 0.0);

        // 15 kg backpack: 1 + 15/75 = 1.2x.
        let expected_equivalent = (stats.distance_km + 0.0 / 80.0 + 0.0 / 150.0) * 1.2;
        assert!((stats.equivalent_km - expected_equivalent).abs() < EPS);

        // Fitness 3: 0.9 + (3 - 3) * 0.1 = 0.9.
        let expected_hours = (stats.distance_km / 4.0 + 0.0 / 500.0 + 0.0 / 2000.0) * 0.9;
        assert!((stats.hours - expected_hours).abs() < EPS);
    }

    #[test]
    fn climb_contributes_to_equivalent_km_and_hours() {
        // Step profile with a known smoothed gain of exactly 100 m.
        let mut elevations = vec![100.0; 5];
        elevations.extend(std::iter::repeat(200.0).take(5));
        let points = meridian_track(&elevations);
        let stats = compute_stats(&points, &settings(3, 15.0));

        assert!((stats.elevation_gain_m - 100.0).abs() < EPS);
        assert_eq!(stats.elevation_loss_m, 0.0);

        let expected_equivalent = (stats.distance_km + 100.0 / 80.0) * 1.2;
        assert!((stats.equivalent_km - expected_equivalent).abs() < EPS);

        let expected_hours = (stats.distance_km / 4.0 + 100.0 / 500.0) * 0.9;
        assert!((stats.hours - expected_hours).abs() < EPS);
    }

    #[test]
    fn no_backpack_means_no_multiplier() {
        let points = meridian_track(&[100.0, 100.0, 100.0, 100.0]);
        let stats = compute_stats(&points, &settings(3, 0.0));
        assert!((stats.equivalent_km - stats.distance_km).abs() < EPS);
    }

    #[test]
    fn pace_factor_shifts_ten_percent_per_level() {
        let points = meridian_track(&[100.0, 100.0, 100.0]);
        let by_level: Vec<f64> = (1..=5)
            .map(|level| compute_stats(&points, &settings(level, 0.0)).hours)
            .collect();

        let base = points_base_hours(&points);
        let expected = [1.1, 1.0, 0.9, 0.8, 0.7];
        for (hours, factor) in by_level.iter().zip(expected) {
            assert!((hours - base * factor).abs() < EPS);
        }
        // Fitter never means slower.
        for pair in by_level.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    fn points_base_hours(points: &[TrackPoint]) -> f64 {
        geometry::path_distance_km(points) / 4.0
    }

    #[test]
    fn stats_sum_field_wise() {
        let a = SegmentStats {
            distance_km: 1.0,
            elevation_gain_m: 10.0,
            elevation_loss_m: 5.0,
            equivalent_km: 1.5,
            hours: 0.25,
        };
        let b = SegmentStats {
            distance_km: 2.0,
            elevation_gain_m: 20.0,
            elevation_loss_m: 15.0,
            equivalent_km: 3.0,
            hours: 0.75,
        };
        let sum = a + b;
        assert_eq!(sum.distance_km, 3.0);
        assert_eq!(sum.elevation_gain_m, 30.0);
        assert_eq!(sum.elevation_loss_m, 20.0);
        assert_eq!(sum.equivalent_km, 4.5);
        assert_eq!(sum.hours, 1.0);
    }
}
