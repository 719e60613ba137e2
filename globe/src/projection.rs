//! Orthographic projection of the globe onto the canvas.
//!
//! The sphere is viewed from directly above the camera's lat/lng, so the
//! view center always maps to the canvas center. Points on the far
//! hemisphere are reported as hidden; their position is pushed out to the
//! limb so polygons that straddle the horizon still close cleanly.

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

use crate::camera::{Point, PointOfView};
use crate::consts::GLOBE_SCALE;

/// A projected geographic point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Screen position; clamped to the limb when hidden.
    pub point: Point,
    /// Whether the point faces the camera.
    pub visible: bool,
}

/// Screen-space projection for a single frame.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub center: Point,
    pub radius: f64,
    sin_lat0: f64,
    cos_lat0: f64,
    lng0: f64,
}

impl Projection {
    /// Build the projection for a `width` x `height` CSS-pixel viewport.
    #[must_use]
    pub fn new(pov: &PointOfView, width: f64, height: f64) -> Self {
        let lat0 = pov.lat.to_radians();
        let altitude = pov.altitude.max(f64::EPSILON);
        Self {
            center: Point::new(width * 0.5, height * 0.5),
            radius: (width.min(height) * 0.5 * GLOBE_SCALE / altitude).max(0.0),
            sin_lat0: lat0.sin(),
            cos_lat0: lat0.cos(),
            lng0: pov.lng.to_radians(),
        }
    }

    /// Project a latitude/longitude in degrees.
    #[must_use]
    pub fn project(&self, lat_deg: f64, lng_deg: f64) -> Projected {
        let lat = lat_deg.to_radians();
        let dlng = lng_deg.to_radians() - self.lng0;
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_dlng, cos_dlng) = dlng.sin_cos();

        let x = cos_lat * sin_dlng;
        let y = self.cos_lat0 * sin_lat - self.sin_lat0 * cos_lat * cos_dlng;
        let cos_c = self.sin_lat0 * sin_lat + self.cos_lat0 * cos_lat * cos_dlng;

        let visible = cos_c >= 0.0;
        let (x, y) = if visible {
            (x, y)
        } else {
            let len = x.hypot(y);
            if len > 0.0 { (x / len, y / len) } else { (0.0, 1.0) }
        };

        Projected {
            point: Point::new(self.center.x + x * self.radius, self.center.y - y * self.radius),
            visible,
        }
    }
}
