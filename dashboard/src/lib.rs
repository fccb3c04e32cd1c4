//! ==============================================================================
//! lib.rs - Link Shortener Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front end for shortening urls. holds up to five url rows,
//!     validates them in the browser and shows placeholder short links after
//!     a simulated round trip. user-facing events are reported to a remote
//!     log collector.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - leptos_router for the two views ("/" and "/stats")
//!     - form rules and payload types live in the shared crate
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use wasm_bindgen::prelude::*;

mod components;
mod config;
mod logger;

use components::{Header, NotFound, ShortenerPage, StatisticsPage};
use config::AppConfig;
use logger::Logger;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // a second init (hot reload) is harmless
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("link shortener dashboard starting");
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    provide_context(config);
    provide_context(Logger::new(&config));

    view! {
        <Title text="URL Shortener" />
        <Router>
            <Header />
            <main class="container">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ShortenerPage />
                    <Route path=path!("/stats") view=StatisticsPage />
                </Routes>
            </main>
        </Router>
    }
}
