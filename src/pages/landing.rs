use leptos::prelude::*;

use crate::components::{use_smooth_scroll, Navbar};
use crate::config::SiteConfig;
use crate::sections::{
    BrowseRange, FeaturesRow, Footer, Hero, HowItWorks, InspirationGrid, Newsletter, SplitBeautify,
};

/// The single-page furniture storefront.
#[component]
pub fn LandingPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    use_smooth_scroll(&config.smooth_scroll);

    view! {
        <div class="landing-page">
            <Navbar/>
            <main>
                <Hero/>
                <FeaturesRow/>
                <InspirationGrid/>
                <SplitBeautify/>
                <BrowseRange/>
                <HowItWorks/>
                <Newsletter/>
            </main>
            <Footer/>
        </div>
    }
}
