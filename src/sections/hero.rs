use leptos::prelude::*;

use crate::components::SplineScene;
use crate::config::SiteConfig;
use crate::models::content::{HERO_CHIP, HERO_SUBTITLE, HERO_TITLE};

#[component]
pub fn Hero() -> impl IntoView {
    let scene = use_context::<SiteConfig>().unwrap_or_default().hero.scene_url;

    view! {
        <section class="hero">
            <div class="hero-scene">
                <SplineScene scene=scene/>
            </div>
            <div class="container hero-content">
                <div class="hero-panel">
                    <span class="chip chip-secondary">{HERO_CHIP}</span>
                    <h1 class="display">{HERO_TITLE}</h1>
                    <p class="lead text-secondary">{HERO_SUBTITLE}</p>
                    <div class="stack-row">
                        <button class="btn btn-contained btn-large">"Shop Now"</button>
                        <button class="btn btn-outlined btn-large">"Explore"</button>
                    </div>
                </div>
            </div>
            // fades the scene into the page background
            <div class="hero-fade"></div>
        </section>
    }
}
