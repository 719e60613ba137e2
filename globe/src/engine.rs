use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Point, PointOfView, ViewportPreset};
use crate::controller::{Controller, Phase};
use crate::hit::hit_marker;
use crate::input::{Gesture, GestureTracker, PressState};
use crate::locations::LocationId;
use crate::projection::Projection;
use crate::render::{self, Scene};
use crate::topo::Polygon;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from engine calls for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The scene changed and should be redrawn.
    RenderNeeded,
    /// The selected marker changed; the host updates the details overlay.
    SelectionChanged(Option<LocationId>),
    /// The host should set the canvas CSS cursor.
    SetCursor(&'static str),
}

/// Core engine state: everything that does not touch the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub controller: Controller,
    pub land: Vec<Polygon>,
    pub gestures: GestureTracker,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(ViewportPreset::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(preset: ViewportPreset) -> Self {
        Self {
            controller: Controller::new(preset),
            land: Vec::new(),
            gestures: GestureTracker::new(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    // --- Data inputs ---

    /// Install the landmass (possibly empty after a failed fetch) and start
    /// the rotation countdown.
    pub fn load_land(&mut self, land: Vec<Polygon>, now: f64) -> Vec<Action> {
        self.land = land;
        self.controller.land_loaded_at(now);
        vec![Action::RenderNeeded]
    }

    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
    }

    pub fn set_preset(&mut self, preset: ViewportPreset) -> Vec<Action> {
        if self.controller.preset() == preset {
            return Vec::new();
        }
        self.controller.set_preset(preset);
        vec![Action::RenderNeeded]
    }

    // --- Time ---

    /// Advance timers to `now` (host milliseconds).
    pub fn tick(&mut self, now: f64) -> Vec<Action> {
        if self.controller.advance(now) { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    /// Cancel every timer; the engine is being torn down.
    pub fn shutdown(&mut self) {
        self.controller.shutdown();
        self.gestures = GestureTracker::new();
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, now: f64) -> Vec<Action> {
        let gestures = self.gestures.pointer_down(screen_pt);
        self.apply_gestures(gestures, now)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, now: f64) -> Vec<Action> {
        let gestures = self.gestures.pointer_move(screen_pt);
        let mut actions = self.apply_gestures(gestures, now);
        if self.gestures.state() == PressState::Idle {
            let cursor = if hit_marker(screen_pt, &self.projection()).is_some() { "pointer" } else { "grab" };
            actions.push(Action::SetCursor(cursor));
        }
        actions
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, now: f64) -> Vec<Action> {
        let gestures = self.gestures.pointer_up(screen_pt);
        self.apply_gestures(gestures, now)
    }

    pub fn on_pointer_leave(&mut self, now: f64) -> Vec<Action> {
        let gestures = self.gestures.pointer_leave();
        self.apply_gestures(gestures, now)
    }

    /// The host's close control on the details overlay.
    pub fn close_details(&mut self) -> Vec<Action> {
        if self.controller.selected().is_none() {
            return Vec::new();
        }
        self.controller.clear_selection();
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    }

    fn apply_gestures(&mut self, gestures: Vec<Gesture>, now: f64) -> Vec<Action> {
        let mut actions = Vec::new();
        for gesture in gestures {
            match gesture {
                Gesture::DragStart => {
                    self.controller.drag_start();
                    actions.push(Action::SetCursor("grabbing"));
                }
                Gesture::DragMove { dx, dy } => {
                    self.controller.drag_move(dx, dy);
                    actions.push(Action::RenderNeeded);
                }
                Gesture::DragEnd => {
                    self.controller.drag_end(now);
                    actions.push(Action::SetCursor("grab"));
                }
                Gesture::Click(point) => {
                    if let Some(id) = hit_marker(point, &self.projection()) {
                        self.controller.marker_click(id, now);
                        actions.push(Action::SelectionChanged(Some(id)));
                        actions.push(Action::RenderNeeded);
                    }
                }
            }
        }
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn projection(&self) -> Projection {
        Projection::new(&self.controller.point_of_view(), self.viewport_width, self.viewport_height)
    }

    #[must_use]
    pub fn point_of_view(&self) -> PointOfView {
        self.controller.point_of_view()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    #[must_use]
    pub fn selection(&self) -> Option<LocationId> {
        self.controller.selected()
    }
}

/// The full globe engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, preset: ViewportPreset) -> Self {
        Self { canvas, core: EngineCore::new(preset) }
    }

    // --- Viewport ---

    /// Update viewport dimensions and resize the canvas backing store.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        let backing_w = (self.core.viewport_width * self.core.dpr).round() as u32;
        let backing_h = (self.core.viewport_height * self.core.dpr).round() as u32;
        if self.canvas.width() != backing_w {
            self.canvas.set_width(backing_w);
        }
        if self.canvas.height() != backing_h {
            self.canvas.set_height(backing_h);
        }
    }

    // --- Delegated inputs ---

    pub fn load_land(&mut self, land: Vec<Polygon>, now: f64) -> Vec<Action> {
        self.core.load_land(land, now)
    }

    pub fn set_preset(&mut self, preset: ViewportPreset) -> Vec<Action> {
        self.core.set_preset(preset)
    }

    pub fn tick(&mut self, now: f64) -> Vec<Action> {
        self.core.tick(now)
    }

    pub fn shutdown(&mut self) {
        self.core.shutdown();
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point, now: f64) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, now)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, now: f64) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt, now)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, now: f64) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, now)
    }

    pub fn on_pointer_leave(&mut self, now: f64) -> Vec<Action> {
        self.core.on_pointer_leave(now)
    }

    pub fn close_details(&mut self) -> Vec<Action> {
        self.core.close_details()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let projection = self.core.projection();
        let scene = Scene {
            projection: &projection,
            land: &self.core.land,
            selected: self.core.selection(),
            preset: self.core.controller.preset(),
            viewport_w: self.core.viewport_width,
            viewport_h: self.core.viewport_height,
            dpr: self.core.dpr,
        };
        render::draw(&ctx, &scene)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<LocationId> {
        self.core.selection()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.core.phase()
    }
}
