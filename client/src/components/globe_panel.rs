//! Bridge component between Leptos and the imperative `globe::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The globe crate owns the timer queue, the state machine and the pixels.
//! This host feeds it time (one `requestAnimationFrame` loop), pointer events
//! and the landmass, and maps the returned actions onto two signals: the
//! selected marker and the canvas cursor.
//!
//! TEARDOWN
//! ========
//! `on_cleanup` only flips an atomic flag. The frame loop notices it on its
//! next frame, shuts the engine down (cancelling every timer) and drops
//! itself, so nothing outlives the component.

use leptos::prelude::*;

use globe::locations::LocationId;

use crate::components::location_details::LocationDetails;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use globe::camera::Point;
#[cfg(feature = "hydrate")]
use globe::engine::{Action, Engine};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::net::api::fetch_land_or_empty;
#[cfg(feature = "hydrate")]
use crate::util::viewport::{current_preset, now_ms, sync_viewport};

/// Number of decorative connection indicators in the panel corner.
const CONNECTION_INDICATORS: usize = 5;

#[cfg(feature = "hydrate")]
type EngineCell = Rc<RefCell<Option<Engine>>>;

#[cfg(feature = "hydrate")]
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[cfg(feature = "hydrate")]
fn render(engine: &Engine) {
    if let Err(err) = engine.render() {
        log::warn!("globe render failed: {err:?}");
    }
}

/// Apply engine actions to the host signals. Renders at most once.
#[cfg(feature = "hydrate")]
fn process_actions(
    actions: Vec<Action>,
    engine: &Engine,
    selected: RwSignal<Option<LocationId>>,
    cursor: RwSignal<&'static str>,
) {
    let mut needs_render = false;
    for action in actions {
        match action {
            Action::RenderNeeded => needs_render = true,
            Action::SelectionChanged(id) => selected.set(id),
            Action::SetCursor(c) => {
                if cursor.get_untracked() != c {
                    cursor.set(c);
                }
            }
        }
    }
    if needs_render {
        render(engine);
    }
}

#[cfg(feature = "hydrate")]
fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
fn request_frame(callback: &FrameCallback) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(cb) = callback.borrow().as_ref() {
        if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {err:?}");
        }
    }
}

/// Start the per-frame loop: sync viewport and preset, fire due timers, render.
#[cfg(feature = "hydrate")]
fn start_frame_loop(
    engine: EngineCell,
    canvas_ref: NodeRef<leptos::html::Canvas>,
    alive: Arc<AtomicBool>,
    selected: RwSignal<Option<LocationId>>,
    cursor: RwSignal<&'static str>,
) {
    let holder: FrameCallback = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if !alive.load(Ordering::Relaxed) {
            if let Some(mut engine) = engine.borrow_mut().take() {
                engine.shutdown();
            }
            holder_for_cb.borrow_mut().take();
            return;
        }
        if let Some(engine) = engine.borrow_mut().as_mut() {
            let mut actions = engine.set_preset(current_preset());
            if sync_viewport(engine, &canvas_ref) {
                actions.push(Action::RenderNeeded);
            }
            actions.extend(engine.tick(now_ms()));
            process_actions(actions, engine, selected, cursor);
        }
        request_frame(&holder_for_cb);
    }) as Box<dyn FnMut(f64)>);
    *holder.borrow_mut() = Some(cb);
    request_frame(&holder);
}

/// Globe panel: canvas, connection indicators and the details overlay.
///
/// On hydration this mounts `globe::engine::Engine`, starts the frame loop
/// and kicks off the landmass fetch.
#[component]
pub fn GlobePanel() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let selected = RwSignal::new(None::<LocationId>);
    let cursor = RwSignal::new("grab");

    #[cfg(feature = "hydrate")]
    let engine: EngineCell = Rc::new(RefCell::new(None));

    #[cfg(feature = "hydrate")]
    {
        let alive = Arc::new(AtomicBool::new(true));
        let alive_for_cleanup = Arc::clone(&alive);
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let mut instance = Engine::new(canvas, current_preset());
            sync_viewport(&mut instance, &canvas_ref);
            render(&instance);
            *engine.borrow_mut() = Some(instance);

            start_frame_loop(Rc::clone(&engine), canvas_ref, Arc::clone(&alive), selected, cursor);

            let engine_for_land = Rc::clone(&engine);
            let alive_for_land = Arc::clone(&alive);
            leptos::task::spawn_local(async move {
                let land = fetch_land_or_empty().await;
                if !alive_for_land.load(Ordering::Relaxed) {
                    return;
                }
                if let Some(engine) = engine_for_land.borrow_mut().as_mut() {
                    let actions = engine.load_land(land, now_ms());
                    process_actions(actions, engine, selected, cursor);
                }
            });
        });
        on_cleanup(move || alive_for_cleanup.store(false, Ordering::Relaxed));
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get() {
                    if let Err(err) = canvas.set_pointer_capture(ev.pointer_id()) {
                        log::debug!("pointer capture unavailable: {err:?}");
                    }
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_down(pointer_point(&ev), now_ms());
                    process_actions(actions, engine, selected, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_move(pointer_point(&ev), now_ms());
                    process_actions(actions, engine, selected, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get() {
                    if canvas.has_pointer_capture(ev.pointer_id()) {
                        if let Err(err) = canvas.release_pointer_capture(ev.pointer_id()) {
                            log::debug!("pointer release failed: {err:?}");
                        }
                    }
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_up(pointer_point(&ev), now_ms());
                    process_actions(actions, engine, selected, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_leave(now_ms());
                    process_actions(actions, engine, selected, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    // The overlay only clears the signal; mirror that into the engine so the
    // selection ring goes away with it.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            if selected.get().is_some() {
                return;
            }
            let Ok(mut slot) = engine.try_borrow_mut() else {
                return;
            };
            if let Some(engine) = slot.as_mut() {
                let actions = engine.close_details();
                process_actions(actions, engine, selected, cursor);
            }
        });
    }

    let on_close = Callback::new(move |()| selected.set(None));

    let canvas_style = move || format!("cursor: {}", cursor.get());

    view! {
        <div class="card globe-panel">
            <canvas
                class="globe-panel__canvas"
                node_ref=canvas_ref
                style=canvas_style
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
            >
                "Your browser does not support canvas."
            </canvas>
            <div class="globe-panel__connections">
                {(0..CONNECTION_INDICATORS)
                    .map(|i| {
                        view! {
                            <div class="globe-panel__connection">
                                <div class="pulse pulse--dot" style=connection_delay_style(i)></div>
                                <div class="globe-panel__link"></div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <LocationDetails selected=selected on_close=on_close/>
        </div>
    }
}

fn connection_delay_style(index: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let delay = index as f64 * 0.2;
    format!("animation-delay: {delay:.1}s")
}
