//! Globe rotation / interaction state machine.
//!
//! DESIGN
//! ======
//! ```text
//!  Loading ──land loaded + 2s──▶ IdleRotating ◀──────── 2s ───────┐
//!     │                              │                             │
//!     └──── drag start / click ─────▶ UserInteracting ──drag end──▶ PausedPendingResume
//!                                    │        ▲                    ▲
//!                                    │        └─ drag / click ─────┤
//!                                    └────── click + 2s ───────────┘
//! ```
//!
//! Every interaction cancels all pending timers before doing anything else,
//! so there is never a queued resume behind a live drag. Timers fire from the
//! deadline they were scheduled for, not from the frame that noticed them,
//! which keeps "resume exactly 2 seconds later" exact under frame jitter.
//!
//! The responsive preset only changes camera altitude; it is applied from
//! outside the state machine and never changes the phase.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::camera::{PointOfView, ViewportPreset};
use crate::consts::{
    CLICK_SETTLE_MS, MAX_CATCH_UP_TICKS, RESUME_DELAY_MS, ROTATION_STEP_DEG, ROTATION_TICK_MS, START_DELAY_MS,
};
use crate::locations::LocationId;
use crate::scheduler::TimerQueue;

/// Current phase of the globe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the landmass, or for the start delay after it loaded.
    #[default]
    Loading,
    /// Auto-rotation is running.
    IdleRotating,
    /// A drag is in progress or a marker was just clicked.
    UserInteracting,
    /// The interaction ended; auto-rotation resumes when the resume timer fires.
    PausedPendingResume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Start,
    Rotate,
    Settle,
    Resume,
}

/// The globe's interaction controller.
#[derive(Debug, Clone)]
pub struct Controller {
    phase: Phase,
    pov: PointOfView,
    preset: ViewportPreset,
    timers: TimerQueue<TimerKind>,
    selected: Option<LocationId>,
    land_loaded: bool,
    dragging: bool,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ViewportPreset::default())
    }
}

impl Controller {
    #[must_use]
    pub fn new(preset: ViewportPreset) -> Self {
        Self {
            phase: Phase::Loading,
            pov: PointOfView::initial(preset),
            preset,
            timers: TimerQueue::new(),
            selected: None,
            land_loaded: false,
            dragging: false,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn point_of_view(&self) -> PointOfView {
        self.pov
    }

    #[must_use]
    pub fn preset(&self) -> ViewportPreset {
        self.preset
    }

    #[must_use]
    pub fn selected(&self) -> Option<LocationId> {
        self.selected
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[cfg(test)]
    #[must_use]
    pub fn land_loaded(&self) -> bool {
        self.land_loaded
    }

    /// Whether any timer is still pending.
    #[cfg(test)]
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    // --- Lifecycle ---

    /// The landmass finished loading (or failed and fell back to nothing).
    ///
    /// Snaps to the initial point of view and schedules the first rotation.
    /// If the user is already interacting, the interaction's own resume
    /// path starts rotation instead.
    pub fn land_loaded_at(&mut self, now: f64) {
        if self.land_loaded {
            return;
        }
        self.land_loaded = true;
        if self.phase == Phase::Loading {
            self.pov = PointOfView::initial(self.preset);
            self.timers.schedule_once(TimerKind::Start, now + START_DELAY_MS);
        }
    }

    /// Cancel every timer. Used on teardown.
    pub fn shutdown(&mut self) {
        self.timers.clear();
        self.dragging = false;
    }

    /// Apply a responsive preset. Only the altitude changes.
    pub fn set_preset(&mut self, preset: ViewportPreset) {
        self.preset = preset;
        self.pov.altitude = preset.altitude();
    }

    // --- Interaction ---

    pub fn drag_start(&mut self) {
        self.timers.clear();
        self.dragging = true;
        self.phase = Phase::UserInteracting;
    }

    /// Rotate the camera by a pointer delta. Ignored unless dragging.
    pub fn drag_move(&mut self, dx: f64, dy: f64) {
        if self.dragging {
            self.pov.drag_by(dx, dy);
        }
    }

    pub fn drag_end(&mut self, now: f64) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.interaction_ended(now);
    }

    /// A marker was clicked: select it and hold rotation for the settle time.
    pub fn marker_click(&mut self, id: LocationId, now: f64) {
        self.timers.clear();
        self.selected = Some(id);
        self.phase = Phase::UserInteracting;
        self.timers.schedule_once(TimerKind::Settle, now + CLICK_SETTLE_MS);
    }

    /// Close the details overlay.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // --- Time ---

    /// Fire every timer due at or before `now`.
    ///
    /// At most [`MAX_CATCH_UP_TICKS`] rotation ticks are replayed; past that
    /// the rotation tick is re-armed from `now` and the backlog dropped.
    /// Returns `true` when the point of view changed.
    pub fn advance(&mut self, now: f64) -> bool {
        let mut moved = false;
        let mut rotate_ticks = 0;
        while let Some(fired) = self.timers.pop_due(now) {
            match fired.key {
                TimerKind::Start | TimerKind::Resume => self.start_rotating(fired.deadline),
                TimerKind::Settle => self.interaction_ended(fired.deadline),
                TimerKind::Rotate => {
                    if rotate_ticks == MAX_CATCH_UP_TICKS {
                        self.timers.schedule_every(TimerKind::Rotate, now + ROTATION_TICK_MS, ROTATION_TICK_MS);
                        continue;
                    }
                    rotate_ticks += 1;
                    if self.phase == Phase::IdleRotating && !self.dragging {
                        self.pov.advance_longitude(ROTATION_STEP_DEG);
                        moved = true;
                    }
                }
            }
        }
        moved
    }

    fn interaction_ended(&mut self, at: f64) {
        if self.land_loaded {
            self.phase = Phase::PausedPendingResume;
            self.timers.schedule_once(TimerKind::Resume, at + RESUME_DELAY_MS);
        } else {
            // Rotation only starts once the landmass arrives.
            self.phase = Phase::Loading;
        }
    }

    fn start_rotating(&mut self, at: f64) {
        self.phase = Phase::IdleRotating;
        self.timers.schedule_every(TimerKind::Rotate, at + ROTATION_TICK_MS, ROTATION_TICK_MS);
    }
}
