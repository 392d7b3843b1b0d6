use leptos::prelude::*;

use crate::components::RevealSection;
use crate::models::content::{BEAUTIFY_EYEBROW, BEAUTIFY_IMAGE, BEAUTIFY_TEXT, BEAUTIFY_TITLE};
use crate::models::RevealSlot;

#[component]
pub fn SplitBeautify() -> impl IntoView {
    view! {
        <section class="container section-lg">
            <div class="grid grid-2 align-center gap-lg">
                <RevealSection target=RevealSlot::BeautifyCopy>
                    <span class="overline text-secondary-accent">{BEAUTIFY_EYEBROW}</span>
                    <h2 class="section-title heavy">{BEAUTIFY_TITLE}</h2>
                    <p class="body-lg text-secondary">{BEAUTIFY_TEXT}</p>
                    <div class="stack-row">
                        <button class="btn btn-contained">"Discover"</button>
                        <button class="btn btn-outlined">"Our Story"</button>
                    </div>
                </RevealSection>
                <RevealSection target=RevealSlot::BeautifyImage>
                    <div class="glow-frame">
                        <div class="glow"></div>
                        <div class="card card-round">
                            <img class="card-media beautify-image" src=BEAUTIFY_IMAGE alt="profile"/>
                        </div>
                    </div>
                </RevealSection>
            </div>
        </section>
    }
}
