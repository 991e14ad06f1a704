//! Text rendering helpers shared by the commands.

use trailsplit_core::SegmentStats;

/// Format fractional hours as `H:MM h`.
pub fn format_hours(hours: f64) -> String {
    let whole = hours.floor();
    let mut h = whole as u64;
    let mut m = ((hours - whole) * 60.0).round() as u64;
    if m == 60 {
        h += 1;
        m = 0;
    }
    format!("{h}:{m:02} h")
}

/// Print one statistics block, indented.
pub fn print_stats(stats: &SegmentStats) {
    println!("  distance:  {:.2} km", stats.distance_km);
    println!("  ascent:    {:.0} m", stats.elevation_gain_m);
    println!("  descent:   {:.0} m", stats.elevation_loss_m);
    println!("  equiv. km: {:.2} km", stats.equivalent_km);
    println!("  time:      {}", format_hours(stats.hours));
}
