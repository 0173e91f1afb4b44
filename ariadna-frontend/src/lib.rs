use leptos::*;

use ariadna_core::MapConfig;
use ariadna_frontend_api::GeocoderApi;

mod components;
use components::*;

const DEFAULT_API_URL: &str = "/api";

/// Composition root of the widget.
#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let api = GeocoderApi::new(DEFAULT_API_URL.to_string());
    let config = MapConfig::default();
    view! { <MapWidget api config /> }
}
