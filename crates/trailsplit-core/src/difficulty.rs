//! Difficulty classification against fitness-adjusted thresholds.

use serde::Serialize;

/// Ordered difficulty tiers, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Comfortable,
    Moderate,
    Heavy,
    Severe,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Comfortable => "Comfortable",
            Tier::Moderate => "Moderate",
            Tier::Heavy => "Heavy",
            Tier::Severe => "Severe",
        }
    }

    /// Accent color used by the presentation layer.
    pub fn color(self) -> &'static str {
        match self {
            Tier::Comfortable => "#4CAF50",
            Tier::Moderate => "#FF9800",
            Tier::Heavy => "#FF5722",
            Tier::Severe => "#D32F2F",
        }
    }

    /// Matching background tint.
    pub fn bg_color(self) -> &'static str {
        match self {
            Tier::Comfortable => "#e8f5e9",
            Tier::Moderate => "#fff3e0",
            Tier::Heavy => "#fbe9e7",
            Tier::Severe => "#ffebee",
        }
    }
}

/// Classification result with presentation colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Difficulty {
    pub tier: Tier,
    pub color: &'static str,
    pub bg_color: &'static str,
}

/// Cut points for one fitness level, in equivalent km. A day below
/// `comfortable` is comfortable, below `moderate` moderate, below
/// `heavy` heavy, anything at or above is severe.
struct Thresholds {
    comfortable: f64,
    moderate: f64,
    heavy: f64,
}

/// Per-fitness-level cut tables, levels 1 through 5. Level 3 carries
/// the calibration values; the others scale the cuts roughly 20% per
/// level while keeping every cut monotone in fitness.
const THRESHOLDS: [Thresholds; 5] = [
    Thresholds { comfortable: 20.0, moderate: 26.0, heavy: 32.0 },
    Thresholds { comfortable: 25.0, moderate: 32.0, heavy: 38.0 },
    Thresholds { comfortable: 30.0, moderate: 38.0, heavy: 45.0 },
    Thresholds { comfortable: 36.0, moderate: 45.0, heavy: 53.0 },
    Thresholds { comfortable: 42.0, moderate: 52.0, heavy: 62.0 },
];

/// Classify an effort value for a fitness level.
///
/// Pure and total: every real number maps to exactly one tier, and an
/// out-of-range fitness level falls back to the level-3 table.
pub fn classify(equivalent_km: f64, fitness_level: u8) -> Difficulty {
    let table = match fitness_level {
        1..=5 => &THRESHOLDS[(fitness_level - 1) as usize],
        _ => &THRESHOLDS[2],
    };

    let tier = if equivalent_km < table.comfortable {
        Tier::Comfortable
    } else if equivalent_km < table.moderate {
        Tier::Moderate
    } else if equivalent_km < table.heavy {
        Tier::Heavy
    } else {
        Tier::Severe
    };

    Difficulty {
        tier,
        color: tier.color(),
        bg_color: tier.bg_color(),
    }
}
