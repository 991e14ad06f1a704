use serde_json::json;

use crate::{render, session};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let engine = session::load()?;

    if engine.points().is_empty() {
        println!("no track loaded");
        return Ok(());
    }

    let segments = engine.segments();
    let stats = engine.segment_stats();
    let total = engine.cumulative_stats();

    if json {
        let rows: Vec<serde_json::Value> = segments
            .iter()
            .zip(&stats)
            .map(|(segment, stats)| {
                json!({
                    "segment": segment,
                    "stats": stats,
                    "difficulty": engine.difficulty(stats.equivalent_km),
                })
            })
            .collect();
        let out = json!({ "segments": rows, "total": total });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (i, (segment, stats)) in segments.iter().zip(&stats).enumerate() {
        let difficulty = engine.difficulty(stats.equivalent_km);
        println!(
            "Segment {} ({}), points {}..={}",
            i + 1,
            difficulty.tier.label(),
            segment.start_index,
            segment.end_index
        );
        render::print_stats(stats);
    }

    println!("Total (cumulative)");
    render::print_stats(&total);
    Ok(())
}
