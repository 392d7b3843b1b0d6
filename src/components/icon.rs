use leptos::prelude::*;

use crate::models::content::Icon;

#[component]
pub fn MaterialIcon(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <span class=format!("material-symbols-outlined {class}") role="img" aria-label=icon.label()>
            {icon.ligature()}
        </span>
    }
}
