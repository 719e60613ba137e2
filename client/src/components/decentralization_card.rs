//! "MultiVA in N Countries" card.
//!
//! The count and the labels come from the same static location table the
//! globe draws its markers from, so they cannot drift apart.

#[cfg(test)]
#[path = "decentralization_card_test.rs"]
mod decentralization_card_test;

use leptos::prelude::*;

use globe::locations;

/// Stagger between neighbouring pulse animations, in seconds.
const PULSE_STAGGER_S: f64 = 0.1;

fn countries_heading(count: usize) -> String {
    format!("MultiVA in {count} Countries")
}

fn pulse_style(index: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let delay = index as f64 * PULSE_STAGGER_S;
    format!("animation-delay: {delay:.1}s")
}

#[component]
pub fn DecentralizationCard() -> impl IntoView {
    let count = locations::country_count();
    let countries = locations::all().map(|(_, loc)| loc.country).collect::<Vec<_>>();

    view! {
        <div class="card decentralization-card">
            <div class="decentralization-card__header">
                <h2>"Decentralization"</h2>
            </div>
            <div class="decentralization-card__summary">
                <div class="decentralization-card__caption">
                    <span>{countries_heading(count)}</span>
                    <span class="decentralization-card__arrow">"→"</span>
                </div>
                <div class="decentralization-card__count">{count}</div>
            </div>
            <div class="decentralization-card__pulses">
                {countries
                    .into_iter()
                    .enumerate()
                    .map(|(i, name)| {
                        view! {
                            <div class="decentralization-card__country">
                                <div class="pulse pulse--square" style=pulse_style(i)></div>
                                <span>{name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
