use leptos::prelude::*;

use crate::components::{MaterialIcon, RevealSection};
use crate::models::content::FEATURES;
use crate::models::RevealSlot;

#[component]
pub fn FeaturesRow() -> impl IntoView {
    view! {
        <section class="container section-sm">
            <div class="grid grid-3">
                {FEATURES
                    .into_iter()
                    .enumerate()
                    .map(|(i, feature)| {
                        view! {
                            <RevealSection target=RevealSlot::Feature(i)>
                                <div class="card card-padded">
                                    <div class="stack-row align-center">
                                        <MaterialIcon icon=feature.icon class="text-primary"/>
                                        <div>
                                            <h3 class="subtitle">{feature.title}</h3>
                                            <p class="body text-secondary">{feature.text}</p>
                                        </div>
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
