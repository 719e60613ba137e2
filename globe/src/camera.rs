#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{
    DESKTOP_ALTITUDE, DESKTOP_LABEL_PX, DRAG_DEG_PER_PX, INITIAL_LAT_DEG, INITIAL_LNG_DEG, MAX_CAMERA_LAT_DEG,
    MOBILE_ALTITUDE, MOBILE_BREAKPOINT_PX, MOBILE_LABEL_PX,
};

/// A point in screen space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Responsive camera preset chosen from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportPreset {
    #[default]
    Desktop,
    Mobile,
}

impl ViewportPreset {
    /// Pick the preset for a viewport `width_px` CSS pixels wide.
    #[must_use]
    pub fn for_width(width_px: f64) -> Self {
        if width_px < MOBILE_BREAKPOINT_PX { Self::Mobile } else { Self::Desktop }
    }

    /// Camera altitude in globe radii.
    #[must_use]
    pub fn altitude(self) -> f64 {
        match self {
            Self::Desktop => DESKTOP_ALTITUDE,
            Self::Mobile => MOBILE_ALTITUDE,
        }
    }

    /// Marker label font size in CSS pixels.
    #[must_use]
    pub fn label_font_px(self) -> f64 {
        match self {
            Self::Desktop => DESKTOP_LABEL_PX,
            Self::Mobile => MOBILE_LABEL_PX,
        }
    }
}

/// Camera point of view over the globe.
///
/// `lat` / `lng` are the geographic coordinates under the view center, in
/// degrees. `lng` is kept in `[0, 360)`. `altitude` is the camera distance
/// from the surface in globe radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointOfView {
    pub lat: f64,
    pub lng: f64,
    pub altitude: f64,
}

impl Default for PointOfView {
    fn default() -> Self {
        Self::initial(ViewportPreset::default())
    }
}

impl PointOfView {
    /// The point of view the globe settles on once the landmass is loaded.
    #[must_use]
    pub fn initial(preset: ViewportPreset) -> Self {
        Self { lat: INITIAL_LAT_DEG, lng: normalize_longitude(INITIAL_LNG_DEG), altitude: preset.altitude() }
    }

    /// Advance longitude by `delta_deg`, wrapping modulo 360.
    pub fn advance_longitude(&mut self, delta_deg: f64) {
        self.lng = normalize_longitude(self.lng + delta_deg);
    }

    /// Rotate the view as if the globe surface were dragged by `(dx, dy)` pixels.
    ///
    /// Dragging right brings western longitudes into view; dragging down
    /// brings northern latitudes into view. Sensitivity scales with altitude
    /// so a zoomed-out globe does not feel sluggish.
    pub fn drag_by(&mut self, dx: f64, dy: f64) {
        let k = DRAG_DEG_PER_PX * (self.altitude / DESKTOP_ALTITUDE);
        self.lng = normalize_longitude(self.lng - dx * k);
        self.lat = (self.lat + dy * k).clamp(-MAX_CAMERA_LAT_DEG, MAX_CAMERA_LAT_DEG);
    }
}

/// Wrap a longitude in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_longitude(lng: f64) -> f64 {
    let wrapped = lng.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
