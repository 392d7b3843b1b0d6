pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod pages;
pub mod sections;
pub mod services;

// Re-export for convenience
pub use app::App;

/// Browser entry point: logging, panic hook, then the app.
#[cfg(feature = "csr")]
pub fn mount() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let config = match config::SiteConfig::bundled() {
        Ok(config) => {
            let _ = console_log::init_with_level(config.log_level());
            config
        }
        Err(e) => {
            let _ = console_log::init_with_level(log::Level::Info);
            log::warn!("Using default site config: {e}");
            config::SiteConfig::default()
        }
    };
    log::info!("Mounting storefront");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
}
