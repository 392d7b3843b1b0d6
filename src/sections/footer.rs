use chrono::Datelike;
use leptos::prelude::*;

use crate::components::MaterialIcon;
use crate::models::content::{copyright, gallery, BRAND, FOOTER_BLURB, FOOTER_CONTACT, SOCIAL_ICONS};

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="grid grid-3">
                    <div>
                        <h3 class="footer-brand">{BRAND}</h3>
                        <p class="body footer-muted">{FOOTER_BLURB}</p>
                        <div class="stack-row tight">
                            {SOCIAL_ICONS
                                .into_iter()
                                .map(|icon| {
                                    view! {
                                        <button class="icon-button footer-icon" aria-label=icon.label()>
                                            <MaterialIcon icon=icon/>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="gallery">
                        {gallery("furniture")
                            .into_iter()
                            .map(|src| view! { <img class="gallery-thumb" src=src alt="furniture"/> })
                            .collect_view()}
                    </div>
                    <div>
                        <p class="body footer-muted">{FOOTER_CONTACT}</p>
                    </div>
                </div>
                <hr class="footer-divider"/>
                <p class="caption footer-muted">{copyright(year)}</p>
            </div>
        </footer>
    }
}
