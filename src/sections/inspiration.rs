use leptos::prelude::*;

use crate::components::RevealSection;
use crate::models::content::{INSPIRATION_CARDS, INSPIRATION_TITLE};
use crate::models::RevealSlot;

#[component]
pub fn InspirationGrid() -> impl IntoView {
    view! {
        <section class="container section">
            <RevealSection target=RevealSlot::InspirationHeading>
                <h2 class="section-title">{INSPIRATION_TITLE}</h2>
            </RevealSection>
            <div class="grid grid-3">
                {INSPIRATION_CARDS
                    .into_iter()
                    .enumerate()
                    .map(|(i, card)| {
                        view! {
                            <RevealSection target=RevealSlot::Inspiration(i)>
                                <a class="card card-lift" href="#">
                                    <img class="card-media" style="height: 240px" src=card.image alt=card.title/>
                                    <div class="card-content">
                                        <h3 class="card-title">{card.title}</h3>
                                        <p class="body text-secondary">{card.description}</p>
                                    </div>
                                </a>
                            </RevealSection>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
