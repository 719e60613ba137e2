//! Canvas viewport and clock helpers for the globe host.
//!
//! All helpers require a browser environment and no-op (or return defaults)
//! when compiled for SSR.

use globe::camera::ViewportPreset;
#[cfg(feature = "hydrate")]
use globe::engine::Engine;

/// Current time in milliseconds, the clock every engine call is stamped with.
#[cfg(feature = "hydrate")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Responsive preset for the current window width.
pub fn current_preset() -> ViewportPreset {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map_or_else(ViewportPreset::default, ViewportPreset::for_width)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ViewportPreset::default()
    }
}

/// Copy the canvas CSS size and device pixel ratio into the engine.
///
/// Returns `true` when the size changed since the last sync.
#[cfg(feature = "hydrate")]
pub fn sync_viewport(engine: &mut Engine, canvas_ref: &leptos::prelude::NodeRef<leptos::html::Canvas>) -> bool {
    use leptos::prelude::Get;

    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(canvas) = canvas_ref.get() else {
        return false;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);
    let core = &engine.core;
    #[allow(clippy::float_cmp)]
    let changed = core.viewport_width != width || core.viewport_height != height || core.dpr != dpr;
    if changed {
        engine.set_viewport(width, height, dpr);
    }
    changed
}
