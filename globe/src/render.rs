//! Rendering: draws the globe scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the landmass, the projection and the
//! selection and produces pixels; it does not mutate any engine state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::{FRAC_PI_2, TAU};

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Point, ViewportPreset};
use crate::consts::{
    ATMOSPHERE_ALTITUDE, ATMOSPHERE_COLOR, GLOBE_COLOR, LABEL_BACKGROUND, LABEL_BORDER, LABEL_TEXT, LAND_FILL,
    LAND_STROKE, MARKER_COLOR, MARKER_RADIUS_PX,
};
use crate::locations::{self, LocationId};
use crate::projection::Projection;
use crate::topo::Polygon;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Horizontal padding inside a marker label, in CSS pixels.
const LABEL_PAD_X: f64 = 8.0;
/// Vertical padding inside a marker label, in CSS pixels.
const LABEL_PAD_Y: f64 = 4.0;
/// Gap between a marker dot and the bottom of its label.
const LABEL_GAP: f64 = 8.0;
/// Radius of the ring drawn around the selected marker.
const SELECTION_RING_PX: f64 = 8.0;

/// Everything [`draw`] needs for one frame.
pub struct Scene<'a> {
    pub projection: &'a Projection,
    pub land: &'a [Polygon],
    pub selected: Option<LocationId>,
    pub preset: ViewportPreset,
    pub viewport_w: f64,
    pub viewport_h: f64,
    pub dpr: f64,
}

/// Draw the full scene: atmosphere, globe, land, markers and labels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene<'_>) -> Result<(), JsValue> {
    ctx.set_transform(scene.dpr, 0.0, 0.0, scene.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, scene.viewport_w, scene.viewport_h);

    if scene.projection.radius <= 0.0 {
        return Ok(());
    }

    draw_sphere(ctx, scene.projection)?;

    // Land is clipped to the disc so limb-clamped edges never spill out.
    ctx.save();
    disc_path(ctx, scene.projection)?;
    ctx.clip();
    for polygon in scene.land {
        draw_polygon(ctx, scene.projection, polygon);
    }
    ctx.restore();

    draw_markers(ctx, scene)
}

// =============================================================
// Sphere
// =============================================================

fn disc_path(ctx: &CanvasRenderingContext2d, projection: &Projection) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(projection.center.x, projection.center.y, projection.radius, 0.0, TAU)
}

fn draw_sphere(ctx: &CanvasRenderingContext2d, projection: &Projection) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_shadow_color(ATMOSPHERE_COLOR);
    ctx.set_shadow_blur(projection.radius * ATMOSPHERE_ALTITUDE);
    disc_path(ctx, projection)?;
    ctx.set_fill_style_str(GLOBE_COLOR);
    ctx.fill();
    ctx.restore();
    Ok(())
}

// =============================================================
// Land
// =============================================================

fn draw_polygon(ctx: &CanvasRenderingContext2d, projection: &Projection, polygon: &Polygon) {
    let rings = polygon
        .rings
        .iter()
        .map(|ring| {
            ring.iter()
                .map(|ll| projection.project(ll.lat, ll.lng))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    // Entirely on the far side: nothing to draw.
    if !rings.iter().flatten().any(|p| p.visible) {
        return;
    }

    ctx.begin_path();
    for ring in &rings {
        let mut points = ring.iter().map(|p| p.point);
        let Some(first) = points.next() else {
            continue;
        };
        ctx.move_to(first.x, first.y);
        for point in points {
            ctx.line_to(point.x, point.y);
        }
        ctx.close_path();
    }
    ctx.set_fill_style_str(LAND_FILL);
    ctx.fill();
    ctx.set_stroke_style_str(LAND_STROKE);
    ctx.set_line_width(0.6);
    ctx.stroke();
}

// =============================================================
// Markers
// =============================================================

fn draw_markers(ctx: &CanvasRenderingContext2d, scene: &Scene<'_>) -> Result<(), JsValue> {
    ctx.set_font(&format!("{:.0}px sans-serif", scene.preset.label_font_px()));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    for (id, loc) in locations::all() {
        let projected = scene.projection.project(loc.lat, loc.lng);
        if !projected.visible {
            continue;
        }
        let at = projected.point;

        ctx.begin_path();
        ctx.arc(at.x, at.y, MARKER_RADIUS_PX, 0.0, TAU)?;
        ctx.set_fill_style_str(MARKER_COLOR);
        ctx.fill();

        if scene.selected == Some(id) {
            ctx.begin_path();
            ctx.arc(at.x, at.y, SELECTION_RING_PX, 0.0, TAU)?;
            ctx.set_stroke_style_str(MARKER_COLOR);
            ctx.set_line_width(1.5);
            ctx.stroke();
        }

        draw_label(ctx, at, loc.name, scene.preset.label_font_px())?;
    }
    Ok(())
}

/// Screen box of a marker label: a pill centred above its anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LabelPill {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl LabelPill {
    fn around(anchor: Point, text_w: f64, font_px: f64) -> Self {
        let w = text_w + LABEL_PAD_X * 2.0;
        let h = font_px + LABEL_PAD_Y * 2.0;
        Self { x: anchor.x - w * 0.5, y: anchor.y - LABEL_GAP - h, w, h }
    }

    /// Cap radius; fully rounded ends.
    fn radius(&self) -> f64 {
        (self.h * 0.5).min(self.w * 0.5)
    }

    /// Centres of the left and right end caps.
    fn cap_centers(&self) -> (Point, Point) {
        let r = self.radius();
        let cy = self.y + self.h * 0.5;
        (Point::new(self.x + r, cy), Point::new(self.x + self.w - r, cy))
    }

    fn trace(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let r = self.radius();
        let (left, right) = self.cap_centers();
        ctx.begin_path();
        ctx.arc(left.x, left.y, r, FRAC_PI_2, FRAC_PI_2 * 3.0)?;
        ctx.line_to(right.x, self.y);
        ctx.arc(right.x, right.y, r, -FRAC_PI_2, FRAC_PI_2)?;
        ctx.close_path();
        Ok(())
    }
}

fn draw_label(ctx: &CanvasRenderingContext2d, anchor: Point, text: &str, font_px: f64) -> Result<(), JsValue> {
    let pill = LabelPill::around(anchor, ctx.measure_text(text)?.width(), font_px);

    pill.trace(ctx)?;
    ctx.set_fill_style_str(LABEL_BACKGROUND);
    ctx.fill();
    ctx.set_stroke_style_str(LABEL_BORDER);
    ctx.set_line_width(1.0);
    ctx.stroke();

    ctx.set_fill_style_str(LABEL_TEXT);
    ctx.fill_text(text, anchor.x, pill.y + pill.h * 0.5)
}
