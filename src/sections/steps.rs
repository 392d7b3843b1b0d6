use leptos::prelude::*;

use crate::components::{MaterialIcon, RevealSection};
use crate::models::content::{STEPS, STEPS_TITLE};
use crate::models::RevealSlot;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="container section">
            <RevealSection target=RevealSlot::StepsHeading>
                <h2 class="section-title">{STEPS_TITLE}</h2>
            </RevealSection>
            <div class="grid grid-3">
                {STEPS
                    .into_iter()
                    .enumerate()
                    .map(|(i, step)| {
                        view! {
                            <RevealSection target=RevealSlot::Step(i)>
                                <div class="card card-padded step">
                                    <span class="avatar avatar-primary avatar-sm">{step.number}</span>
                                    <div>
                                        <div class="stack-row align-center tight">
                                            <MaterialIcon icon=step.icon class="text-primary"/>
                                            <h3 class="subtitle">{step.title}</h3>
                                        </div>
                                        <p class="body text-secondary">{step.text}</p>
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
