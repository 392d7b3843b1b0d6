use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::config::SiteConfig;
use crate::pages::LandingPage;
use crate::services::{NewsletterSignup, NoopSignup};

#[component]
pub fn App(#[prop(optional)] config: Option<SiteConfig>) -> impl IntoView {
    provide_meta_context();

    let config = config.unwrap_or_else(SiteConfig::load);
    let theme_css = config.theme.to_css();
    provide_context(config);
    provide_context::<Arc<dyn NewsletterSignup>>(Arc::new(NoopSignup));

    view! {
        <Style id="theme">{theme_css}</Style>
        <Title text="Furniture - Discover Our New Collection"/>
        <Meta name="description" content="Elegant, minimal furniture crafted to elevate your space"/>

        <Router>
            <Routes fallback=|| view! { <h1 class="not-found">"404 - Page Not Found"</h1> }>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}
