use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::MaterialIcon;
use crate::config::SiteConfig;
use crate::models::content::{Icon, BRAND, NAV_ITEMS};
use crate::models::{Elevation, HeaderStyle};

#[component]
pub fn Navbar() -> impl IntoView {
    let threshold = use_context::<SiteConfig>().unwrap_or_default().header.threshold;
    let (_, offset) = use_window_scroll();

    let header_style = Memo::new(move |_| HeaderStyle::for_offset(offset.get(), threshold));

    view! {
        <header
            class="app-bar"
            class:elevated=move || header_style.get().elevation == Elevation::Elevated
            style=move || header_style.get().to_css()
        >
            <div class="toolbar">
                <div class="brand">
                    <span class="avatar avatar-secondary">"F"</span>
                    <span class="brand-name">{BRAND}</span>
                </div>

                <nav class="nav-links">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| view! { <button class="btn btn-text">{item}</button> })
                        .collect_view()}
                </nav>

                <div class="nav-actions">
                    <button class="icon-button text-primary" aria-label="Cart">
                        <MaterialIcon icon=Icon::ShoppingCart/>
                    </button>
                    <button class="btn btn-contained">"Buy Now"</button>
                </div>
            </div>
        </header>
    }
}
