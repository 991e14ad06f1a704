//! Elevation noise reduction.
//!
//! Raw GPS elevation wanders a few meters around the true profile. A
//! naive signed-delta walk double-counts that jitter as both gain and
//! loss, so the profile is first smoothed with a small moving average
//! and the deltas are then accumulated with a hysteresis threshold.

/// Samples on each side of the moving-average window (total window 5).
const HALF_WINDOW: usize = 2;

/// Accumulated delta must move past this magnitude (meters) before it
/// counts as real gain or loss.
const FLUSH_THRESHOLD_M: f64 = 0.5;

/// Accumulated climb and descent over an elevation profile, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GainLoss {
    pub gain_m: f64,
    pub loss_m: f64,
}

/// Moving average with the window clipped at the sequence ends.
fn smooth(elevations: &[f64]) -> Vec<f64> {
    let last = elevations.len() - 1;
    (0..elevations.len())
        .map(|i| {
            let lo = i.saturating_sub(HALF_WINDOW);
            let hi = (i + HALF_WINDOW).min(last);
            let window = &elevations[lo..=hi];
            window.iter().sum::<f64>() / window.len() as f64
        })
        .collect()
}

/// Total gain and loss over `elevations` after smoothing.
///
/// Signed deltas fold into a running value that only flushes into gain
/// (above +0.5 m) or loss (below -0.5 m), then resets. Small
/// back-and-forth movement never reaches the threshold in either
/// direction and is dropped. Fewer than two samples yields zeros.
pub fn gain_loss(elevations: &[f64]) -> GainLoss {
    if elevations.len() < 2 {
        return GainLoss::default();
    }

    let smoothed = smooth(elevations);
    let mut gain = 0.0;
    let mut loss = 0.0;
    let mut cumulative = 0.0;

    for w in smoothed.windows(2) {
        cumulative += w[1] - w[0];
        if cumulative > FLUSH_THRESHOLD_M {
            gain += cumulative;
            cumulative = 0.0;
        } else if cumulative < -FLUSH_THRESHOLD_M {
            loss += -cumulative;
            cumulative = 0.0;
        }
    }

    GainLoss {
        gain_m: gain,
        loss_m: loss,
    }
}
