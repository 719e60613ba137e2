//! Transaction summary cards and the network status bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Seeds the ledger from the dashboard endpoint once (falling back to the
//! demo values on any failure), then runs two independent loops: one that
//! enqueues new requests and one that processes the queue. Each processed
//! batch is credited by a short-lived third task after the settle delay.

#[cfg(test)]
#[path = "transaction_cards_test.rs"]
mod transaction_cards_test;

use leptos::prelude::*;

use metrics::format::format_count;
use metrics::queue::TransactionLedger;

/// Card titles, in display order, paired with the ledger field they show.
const CARDS: [(&str, fn(&TransactionLedger) -> u64); 4] = [
    ("Total Request", |l| l.total),
    ("Requested in Queue", |l| l.queued),
    ("Rejected Request", |l| l.rejected),
    ("Certificate issued", |l| l.issued),
];

#[cfg(feature = "hydrate")]
fn spawn_enqueue_loop(ledger: RwSignal<TransactionLedger>, alive: std::sync::Arc<std::sync::atomic::AtomicBool>) {
    leptos::task::spawn_local(async move {
        let mut rng = crate::util::rng::browser_rng();
        let period = std::time::Duration::from_millis(u64::from(metrics::queue::enqueue_period_ms(&mut rng)));
        loop {
            gloo_timers::future::sleep(period).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            ledger.update(|l| {
                l.enqueue(&mut rng);
            });
        }
    });
}

#[cfg(feature = "hydrate")]
fn spawn_process_loop(ledger: RwSignal<TransactionLedger>, alive: std::sync::Arc<std::sync::atomic::AtomicBool>) {
    leptos::task::spawn_local(async move {
        let mut rng = crate::util::rng::browser_rng();
        let period = std::time::Duration::from_millis(u64::from(metrics::queue::process_period_ms(&mut rng)));
        let settle_delay = std::time::Duration::from_millis(u64::from(metrics::queue::SETTLE_DELAY_MS));
        loop {
            gloo_timers::future::sleep(period).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            let mut batch = None;
            ledger.update(|l| batch = l.take_batch(&mut rng));
            let Some(settlement) = batch else {
                continue;
            };
            let alive_settle = alive.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(settle_delay).await;
                if alive_settle.load(std::sync::atomic::Ordering::Relaxed) {
                    ledger.update(|l| l.settle(settlement));
                }
            });
        }
    });
}

#[component]
pub fn TransactionCards() -> impl IntoView {
    let ledger = RwSignal::new(TransactionLedger::default());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));

        let alive_fetch = alive.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_dashboard_summary().await;
            if let Err(e) = &result {
                log::error!("error fetching dashboard data: {e}");
            }
            if result.is_ok() && alive_fetch.load(std::sync::atomic::Ordering::Relaxed) {
                ledger.update(|l| {
                    metrics::summary::apply_summary(l, &result);
                });
            }
        });

        spawn_enqueue_loop(ledger, alive.clone());
        spawn_process_loop(ledger, alive.clone());
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="transactions">
            <div class="transactions__cards">
                {CARDS
                    .into_iter()
                    .map(|(title, field)| {
                        view! {
                            <div class="card transaction-card">
                                <div class="transaction-card__header">
                                    <h3>{title}</h3>
                                    <div class="transaction-card__hint">"?"</div>
                                </div>
                                <div class="transaction-card__value">
                                    {move || format_count(ledger.with(field))}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="card status-bar">
                <span class="status-bar__label">
                    "Global Network: " <span class="status-bar__state">"Operational"</span>
                </span>
                <button class="status-bar__button">"Live Metrics"</button>
            </div>
        </div>
    }
}
