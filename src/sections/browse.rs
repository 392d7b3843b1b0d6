use leptos::prelude::*;

use crate::components::{MaterialIcon, RevealSection};
use crate::models::content::{BROWSE_ITEMS, BROWSE_TITLE};
use crate::models::RevealSlot;

#[component]
pub fn BrowseRange() -> impl IntoView {
    view! {
        <section class="container section">
            <RevealSection target=RevealSlot::BrowseHeading>
                <h2 class="section-title">{BROWSE_TITLE}</h2>
            </RevealSection>
            <div class="grid grid-3">
                {BROWSE_ITEMS
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| {
                        view! {
                            <RevealSection target=RevealSlot::Browse(i)>
                                <div class="card card-lift">
                                    <img class="card-media" style="height: 220px" src=item.image alt=item.title/>
                                    <div class="card-content">
                                        <div class="stack-row align-center tight">
                                            {item.icon.map(|icon| view! { <MaterialIcon icon=icon class="text-primary"/> })}
                                            <h3 class="card-title">{item.title}</h3>
                                        </div>
                                        <p class="body text-secondary">{item.description}</p>
                                    </div>
                                </div>
                            </RevealSection>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
