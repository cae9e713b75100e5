//! Proximity primitives over latitude/longitude pairs.
//!
//! Distances are planar Euclidean in raw degree space, not great-circle. That
//! is only adequate for short-range grouping inside a single city; a degree of
//! longitude shrinks with latitude, so the effective radius is narrower east-west
//! than north-south. Swapping in a geodesic formula would change which issues
//! cluster together.

use crate::features::issues::models::Coordinates;
use crate::features::map::models::Bounds;

/// Euclidean distance in degrees. Callers must pass well-formed coordinates.
pub fn distance(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = a.lat - b.lat;
    let d_lng = a.lng - b.lng;
    (d_lat * d_lat + d_lng * d_lng).sqrt()
}

/// Strictly closer than `threshold`
pub fn within(a: Coordinates, b: Coordinates, threshold: f64) -> bool {
    distance(a, b) < threshold
}

impl Bounds {
    /// Smallest box holding every point; `None` for no points
    pub fn from_points(points: impl IntoIterator<Item = Coordinates>) -> Option<Bounds> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Bounds {
                    min_lat: p.lat,
                    min_lng: p.lng,
                    max_lat: p.lat,
                    max_lng: p.lng,
                },
                Some(b) => Bounds {
                    min_lat: b.min_lat.min(p.lat),
                    min_lng: b.min_lng.min(p.lng),
                    max_lat: b.max_lat.max(p.lat),
                    max_lng: b.max_lng.max(p.lng),
                },
            })
        })
    }
}
