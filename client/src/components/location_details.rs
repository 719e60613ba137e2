//! Details overlay for the selected globe marker.

#[cfg(test)]
#[path = "location_details_test.rs"]
mod location_details_test;

use leptos::prelude::*;

use globe::locations::{self, Datacenter, LocationId};

/// Label/value rows shown for a datacenter.
fn datacenter_rows(dc: &Datacenter) -> Vec<(&'static str, String)> {
    vec![
        ("Data center", dc.id.to_owned()),
        ("Owner", dc.owner.to_owned()),
        ("Replica nodes", dc.replica_nodes.to_string()),
        ("Boundary nodes", dc.boundary_nodes.to_string()),
        ("Total nodes", dc.total_nodes.to_string()),
        ("Node providers", dc.node_providers.to_string()),
        ("Subnets", dc.subnets.to_string()),
    ]
}

fn coordinates_label(lat: f64, lng: f64) -> String {
    let ns = if lat < 0.0 { 'S' } else { 'N' };
    let ew = if lng < 0.0 { 'W' } else { 'E' };
    format!("{:.4}°{ns}, {:.4}°{ew}", lat.abs(), lng.abs())
}

/// Overlay bound to the globe's selection. Renders nothing when unselected.
#[component]
pub fn LocationDetails(
    #[prop(into)] selected: Signal<Option<LocationId>>,
    on_close: Callback<()>,
) -> impl IntoView {
    move || {
        let loc = selected.get().and_then(locations::get)?;
        let rows = loc.datacenter.as_ref().map(datacenter_rows);
        Some(view! {
            <div class="location-details">
                <div class="location-details__header">
                    <h3>{loc.name}</h3>
                    <button
                        class="location-details__close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                </div>
                <div class="location-details__coords">{coordinates_label(loc.lat, loc.lng)}</div>
                {match rows {
                    Some(rows) => {
                        view! {
                            <dl class="location-details__rows">
                                {rows
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <dt>{label}</dt>
                                            <dd>{value}</dd>
                                        }
                                    })
                                    .collect_view()}
                            </dl>
                        }
                            .into_any()
                    }
                    None => {
                        view! { <p class="location-details__empty">"No datacenter at this location yet."</p> }
                            .into_any()
                    }
                }}
            </div>
        })
    }
}
