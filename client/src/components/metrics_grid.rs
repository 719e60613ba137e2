//! Random-walk stat grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `MetricsGrid` signal and one timer loop. The loop lives on the
//! local executor and stops at the first wake-up after unmount.

use leptos::prelude::*;

use metrics::format::{format_count, format_percent, format_seconds};
use metrics::grid::MetricsGrid as GridState;

use crate::components::stat_card::StatCard;

#[component]
pub fn MetricsGrid() -> impl IntoView {
    let grid = RwSignal::new(GridState::default());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let mut rng = crate::util::rng::browser_rng();
            let period = std::time::Duration::from_millis(u64::from(metrics::grid::GRID_TICK_MS));
            loop {
                gloo_timers::future::sleep(period).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                grid.update(|g| g.step(&mut rng));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let global_requests = Signal::derive(move || format_count(grid.get().global_requests));
    let latency = Signal::derive(move || format_seconds(grid.get().latency_s));
    let success_rate = Signal::derive(move || format_percent(grid.get().success_rate));
    let threats = Signal::derive(move || format_count(u64::from(grid.get().threats_blocked)));

    view! {
        <div class="metrics-grid">
            <StatCard title="Global Requests" value=global_requests/>
            <StatCard title="Avg. Latency" value=latency/>
            <StatCard title="Success Rate" value=success_rate/>
            <StatCard title="Threats Blocked" value=threats/>
        </div>
    }
}
