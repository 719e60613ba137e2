//! Pointer gesture tracking.
//!
//! Raw pointer events are ambiguous until the pointer either travels far
//! enough to be a drag or is released in place as a click. [`GestureTracker`]
//! holds the press between pointer-down and pointer-up and emits the
//! resolved [`Gesture`]s the controller understands.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::consts::DRAG_THRESHOLD_PX;

/// A resolved pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// The press travelled past the drag threshold.
    DragStart,
    /// Pointer motion during a drag, in CSS pixels since the last event.
    DragMove { dx: f64, dy: f64 },
    /// The drag finished (release or pointer left the canvas).
    DragEnd,
    /// The press was released without dragging.
    Click(Point),
}

/// State between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PressState {
    /// No button held.
    #[default]
    Idle,
    /// Button held but still under the drag threshold.
    Pressed {
        /// Where the press began.
        origin: Point,
    },
    /// Button held and dragging.
    Dragging {
        /// Pointer position at the previous event.
        last: Point,
    },
}

/// Turns pointer events into gestures.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    state: PressState,
}

impl GestureTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> PressState {
        self.state
    }

    pub fn pointer_down(&mut self, point: Point) -> Vec<Gesture> {
        let mut out = Vec::new();
        if matches!(self.state, PressState::Dragging { .. }) {
            // A second button during a drag; close the first drag cleanly.
            out.push(Gesture::DragEnd);
        }
        self.state = PressState::Pressed { origin: point };
        out
    }

    pub fn pointer_move(&mut self, point: Point) -> Vec<Gesture> {
        match self.state {
            PressState::Idle => Vec::new(),
            PressState::Pressed { origin } => {
                if origin.distance_to(point) < DRAG_THRESHOLD_PX {
                    return Vec::new();
                }
                self.state = PressState::Dragging { last: point };
                vec![Gesture::DragStart, Gesture::DragMove { dx: point.x - origin.x, dy: point.y - origin.y }]
            }
            PressState::Dragging { last } => {
                self.state = PressState::Dragging { last: point };
                vec![Gesture::DragMove { dx: point.x - last.x, dy: point.y - last.y }]
            }
        }
    }

    pub fn pointer_up(&mut self, point: Point) -> Vec<Gesture> {
        let previous = std::mem::take(&mut self.state);
        match previous {
            PressState::Idle => Vec::new(),
            PressState::Pressed { .. } => vec![Gesture::Click(point)],
            PressState::Dragging { .. } => vec![Gesture::DragEnd],
        }
    }

    /// The pointer left the canvas: a drag ends, a pending click is dropped.
    pub fn pointer_leave(&mut self) -> Vec<Gesture> {
        let previous = std::mem::take(&mut self.state);
        match previous {
            PressState::Dragging { .. } => vec![Gesture::DragEnd],
            PressState::Idle | PressState::Pressed { .. } => Vec::new(),
        }
    }
}
