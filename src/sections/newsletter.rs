use std::sync::Arc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::RevealSection;
use crate::models::content::{gallery, NEWSLETTER_TEXT, NEWSLETTER_TITLE};
use crate::models::RevealSlot;
use crate::services::newsletter::{self, SubmitOutcome};
use crate::services::{NewsletterSignup, NoopSignup};

#[component]
pub fn Newsletter() -> impl IntoView {
    let signup = use_context::<Arc<dyn NewsletterSignup>>()
        .unwrap_or_else(|| Arc::new(NoopSignup) as Arc<dyn NewsletterSignup>);
    let email = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if newsletter::submit(signup.as_ref(), &email.get_untracked()) == SubmitOutcome::Submitted {
            email.set(String::new());
        }
    };

    view! {
        <section class="container section">
            <RevealSection target=RevealSlot::Newsletter>
                <div class="card newsletter">
                    <div class="grid grid-2 align-center">
                        <div>
                            <h2 class="section-title">{NEWSLETTER_TITLE}</h2>
                            <p class="body text-secondary">{NEWSLETTER_TEXT}</p>
                            <form class="stack-row" on:submit=on_submit>
                                <input
                                    class="text-field"
                                    type="email"
                                    placeholder="Email address"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <button class="btn btn-contained" type="submit">"Subscribe"</button>
                            </form>
                        </div>
                        <div class="gallery">
                            {gallery("interior")
                                .into_iter()
                                .map(|src| view! { <img class="gallery-thumb" src=src alt="interior"/> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </RevealSection>
        </section>
    }
}
