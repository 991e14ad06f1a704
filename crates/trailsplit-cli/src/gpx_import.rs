//! GPX track reading.
//!
//! Track points are collected across all tracks and segments in
//! document order. A missing elevation tag becomes 0.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use trailsplit_core::TrackPoint;

pub fn read_track_points(path: &Path) -> Result<Vec<TrackPoint>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let gpx = gpx::read(BufReader::new(file))?;

    let mut points = Vec::new();
    for track in &gpx.tracks {
        for segment in &track.segments {
            for waypoint in &segment.points {
                let position = waypoint.point();
                points.push(TrackPoint::new(
                    position.y(),
                    position.x(),
                    waypoint.elevation.unwrap_or(0.0),
                ));
            }
        }
    }
    Ok(points)
}
