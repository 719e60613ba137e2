//! Shared numeric constants for the globe crate.

// ── Timing (milliseconds) ───────────────────────────────────────

/// Delay between the landmass finishing loading and the first rotation.
pub const START_DELAY_MS: f64 = 2_000.0;

/// Delay between an interaction ending and auto-rotation resuming.
pub const RESUME_DELAY_MS: f64 = 2_000.0;

/// How long a marker click counts as an active interaction.
pub const CLICK_SETTLE_MS: f64 = 2_000.0;

/// Period of the auto-rotation tick.
pub const ROTATION_TICK_MS: f64 = 50.0;

/// Longitude advanced per rotation tick, in degrees.
pub const ROTATION_STEP_DEG: f64 = 0.25;

/// Most rotation ticks replayed by a single late frame (one second's worth).
/// A longer stall (hidden tab) restarts the tick from the current time.
pub const MAX_CATCH_UP_TICKS: u32 = 20;

// ── Camera ──────────────────────────────────────────────────────

/// Latitude of the initial point of view.
pub const INITIAL_LAT_DEG: f64 = 20.0;

/// Longitude of the initial point of view.
pub const INITIAL_LNG_DEG: f64 = 0.0;

/// Latitude is clamped to this magnitude while dragging.
pub const MAX_CAMERA_LAT_DEG: f64 = 85.0;

/// Degrees of rotation per dragged CSS pixel at the desktop altitude.
pub const DRAG_DEG_PER_PX: f64 = 0.25;

/// Viewport widths below this many CSS pixels use the mobile preset.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Camera altitude (in globe radii) for wide viewports.
pub const DESKTOP_ALTITUDE: f64 = 2.2;

/// Camera altitude for narrow viewports; further away so the globe fits.
pub const MOBILE_ALTITUDE: f64 = 3.2;

/// Marker label font size on wide viewports.
pub const DESKTOP_LABEL_PX: f64 = 10.0;

/// Marker label font size on narrow viewports.
pub const MOBILE_LABEL_PX: f64 = 8.0;

/// On-screen radius factor: `radius = min(w, h) / 2 * GLOBE_SCALE / altitude`.
pub const GLOBE_SCALE: f64 = 1.6;

// ── Input ───────────────────────────────────────────────────────

/// Pointer travel in CSS pixels before a press becomes a drag.
pub const DRAG_THRESHOLD_PX: f64 = 4.0;

/// Screen-space hit radius around a marker dot.
pub const MARKER_HIT_RADIUS_PX: f64 = 10.0;

// ── Rendering ───────────────────────────────────────────────────

pub const GLOBE_COLOR: &str = "#071026";
pub const ATMOSPHERE_COLOR: &str = "rgba(42, 90, 140, 0.35)";
pub const LAND_FILL: &str = "#304060";
pub const LAND_STROKE: &str = "#506080";
pub const MARKER_COLOR: &str = "#00ff88";
pub const LABEL_BACKGROUND: &str = "rgba(0, 0, 0, 0.9)";
pub const LABEL_BORDER: &str = "rgba(74, 222, 128, 0.3)";
pub const LABEL_TEXT: &str = "#ffffff";

/// Marker dot radius in CSS pixels.
pub const MARKER_RADIUS_PX: f64 = 3.5;

/// Atmosphere halo thickness as a fraction of the globe radius.
pub const ATMOSPHERE_ALTITUDE: f64 = 0.25;
