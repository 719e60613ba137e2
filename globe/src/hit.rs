#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::consts::MARKER_HIT_RADIUS_PX;
use crate::locations::{self, LocationId};
use crate::projection::Projection;

/// The visible marker nearest to `point`, if one is within the hit radius.
///
/// Markers on the far hemisphere cannot be clicked.
#[must_use]
pub fn hit_marker(point: Point, projection: &Projection) -> Option<LocationId> {
    locations::all()
        .filter_map(|(id, loc)| {
            let projected = projection.project(loc.lat, loc.lng);
            if !projected.visible {
                return None;
            }
            let distance = projected.point.distance_to(point);
            (distance <= MARKER_HIT_RADIUS_PX).then_some((id, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}
