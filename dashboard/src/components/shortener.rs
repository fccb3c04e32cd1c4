//! URL Shortener page component

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use shared::{RowId, SubmitState, SubmitStep, UrlForm, MAX_ROWS, SIMULATED_LATENCY};

use super::results::ResultsList;
use super::url_row::UrlRow;
use crate::config::AppConfig;
use crate::logger::Logger;

/// package name reported with this page's log events
const PACKAGE: &str = "component";

#[component]
pub fn ShortenerPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let logger = use_context::<Logger>().unwrap_or_else(|| Logger::new(&config));

    let form = RwSignal::new(UrlForm::new());
    let state = RwSignal::new(SubmitState::default());

    // submit action
    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(step) = form
            .try_update(|f| state.try_update(|s| s.begin(f, config.short_base)))
            .flatten()
        else {
            return;
        };

        let (level, message) = step.log_event();
        logger.log(level, PACKAGE, message);

        // no backend yet: publish the snapshot after a fake round trip
        if let SubmitStep::Pending(results) = step {
            set_timeout(
                move || {
                    if let Some((level, message)) = state.try_update(|s| s.complete(results)) {
                        logger.log(level, PACKAGE, message);
                    }
                },
                SIMULATED_LATENCY,
            );
        }
    };

    view! {
        <div class="card">
            <h2>"🔗 URL Shortener"</h2>
            <p style="color: var(--text-secondary); margin-bottom: 1rem; font-size: 0.875rem;">
                {format!("Shorten up to {} URLs at once. Validity and shortcode are optional.", MAX_ROWS)}
            </p>

            <form on:submit=submit novalidate=true>
                <For
                    each=move || form.with(|f| f.ids())
                    key=|id| *id
                    children=move |id| view! { <UrlRow id=id form=form logger=logger /> }
                />

                <button type="submit" disabled=move || state.with(|s| s.submitting)>
                    {move || if state.with(|s| s.submitting) {
                        view! { <span class="spinner"></span> " Shortening..." }.into_any()
                    } else {
                        view! { "Shorten URLs" }.into_any()
                    }}
                </button>
            </form>
        </div>

        <ResultsList state=state />
    }
}

// ==============================================================================
// row actions
// ==============================================================================

pub(super) fn add_row(form: RwSignal<UrlForm>, logger: Logger) {
    if form.try_update(|f| f.add_row()).unwrap_or(false) {
        logger.info(PACKAGE, "Added new URL input field");
    }
}

pub(super) fn remove_row(form: RwSignal<UrlForm>, logger: Logger, id: RowId) {
    if form.try_update(|f| f.remove_row(id)).unwrap_or(false) {
        logger.info(PACKAGE, "Removed a URL input field");
    }
}
