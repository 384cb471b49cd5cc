// IMED / Autinosis landing page, Leptos 0.8 CSR

use imed_landing::config;
use imed_landing::pages::{LandingPage, NotFound};
use imed_landing::telemetry;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

fn main() {
    console_error_panic_hook::set_once();
    telemetry::init(config::log_level(config::LOG_ENV));
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LandingPage />
            </Routes>
        </Router>
    }
}
