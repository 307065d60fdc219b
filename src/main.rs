use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod config;
mod platform;
mod shared;
mod state;
mod utils;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[cfg(any(feature = "desktop", feature = "mobile"))]
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Ignored if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}

fn main() {
    #[cfg(any(feature = "desktop", feature = "mobile"))]
    {
        dotenvy::dotenv().ok();
        init_tracing();
        dioxus::logger::tracing::info!(
            "[portal] API base: {}",
            config::ApiConfig::from_env().base_url
        );
    }
    dioxus::launch(app::App);
}
