use leptos::prelude::*;

/// Static top bar: logo badge and product name.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header__brand">
                <div class="header__badge">
                    <span>"PKI"</span>
                </div>
                <span class="header__name">"MultiVA"</span>
            </div>
            <nav class="header__nav"></nav>
        </header>
    }
}
