//! Shortened url results

use leptos::prelude::*;
use shared::SubmitState;

#[component]
pub fn ResultsList(state: RwSignal<SubmitState>) -> impl IntoView {
    view! {
        <Show when=move || state.with(|s| !s.results.is_empty())>
            <div class="card">
                <h2>"Shortened URLs"</h2>

                {move || state.with(|s| s.results.clone()).into_iter().map(|res| {
                    let short_url = res.short_url.clone();
                    let short_url_display = res.short_url;

                    view! {
                        <div class="result success">
                            <div class="result-label">"Original"</div>
                            <div class="result-value">{res.original_url}</div>

                            <div class="result-label">"Short"</div>
                            <div class="result-value">
                                <a
                                    href=short_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    style="color: var(--accent-primary);"
                                >
                                    {short_url_display}
                                </a>
                            </div>

                            <div class="stats-row" style="margin-top: 1rem;">
                                <div class="stat">
                                    <div class="stat-value">{res.expiry}</div>
                                    <div class="stat-label">"Expires in"</div>
                                </div>
                            </div>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </Show>
    }
}
