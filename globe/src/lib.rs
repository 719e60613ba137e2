//! Interactive globe engine for the MultiVA dashboard.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! globe panel end to end: decoding the landmass dataset, keeping the camera
//! point of view, running the rotate/pause/resume state machine on a
//! cooperative timer queue, turning raw pointer events into drags and marker
//! clicks, and drawing the scene onto a 2D canvas. The host UI layer only
//! wires DOM events and animation frames into the engine and renders the
//! location-details overlay from the [`engine::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`controller`] | Rotation / interaction state machine |
//! | [`scheduler`] | Single-threaded timer queue driven by the host clock |
//! | [`camera`] | Point of view, responsive presets, drag rotation |
//! | [`projection`] | Orthographic sphere projection to screen space |
//! | [`topo`] | TopoJSON landmass decoding |
//! | [`locations`] | The fixed marker locations and their datacenter data |
//! | [`input`] | Pointer gesture tracking (press, drag, click) |
//! | [`hit`] | Marker hit-testing |
//! | [`render`] | Scene rendering to `CanvasRenderingContext2d` |
//! | [`consts`] | Shared timings, presets and colors |

pub mod camera;
pub mod consts;
pub mod controller;
pub mod engine;
pub mod hit;
pub mod input;
pub mod locations;
pub mod projection;
pub mod render;
pub mod scheduler;
pub mod topo;
