//! Header with route navigation

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <h1>"URL Shortener"</h1>
                <p class="subtitle">"Rust WASM + Leptos"</p>
            </div>
            // A marks the active route with aria-current="page"
            <nav class="tabs">
                <A href="/" exact=true>"🔗 Shortener"</A>
                <A href="/stats">"📊 Statistics"</A>
            </nav>
        </header>
    }
}
