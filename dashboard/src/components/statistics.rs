//! Statistics page (placeholder until click data exists)

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn StatisticsPage() -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Statistics"</h2>
            <p style="color: var(--text-secondary); font-size: 0.875rem;">
                "Statistics coming soon..."
            </p>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Page not found"</h2>
            <p style="color: var(--text-secondary); font-size: 0.875rem;">
                <A href="/">"Back to the shortener"</A>
            </p>
        </div>
    }
}
