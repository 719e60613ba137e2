use leptos::prelude::*;

/// One tile in the metrics grid: a title, a live value and a pulse dot.
#[component]
pub fn StatCard(title: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-card__header">
                <h3>{title}</h3>
                <div class="pulse pulse--dot"></div>
            </div>
            <div class="stat-card__value">{move || value.get()}</div>
        </div>
    }
}
