//! The dashboard's single view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure layout. Each card below mounts its own state and timers; the page
//! holds nothing and wires nothing between them.

use leptos::prelude::*;

use crate::components::decentralization_card::DecentralizationCard;
use crate::components::globe_panel::GlobePanel;
use crate::components::header::Header;
use crate::components::metrics_grid::MetricsGrid;
use crate::components::transaction_cards::TransactionCards;

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <div class="index-page">
            <Header/>
            <main class="index-page__grid">
                <section class="index-page__globe">
                    <GlobePanel/>
                </section>
                <section class="index-page__stats">
                    <DecentralizationCard/>
                    <MetricsGrid/>
                </section>
                <section class="index-page__transactions">
                    <TransactionCards/>
                </section>
            </main>
        </div>
    }
}
