use leptos::prelude::*;

/// Hosted Spline scene, rendered by the `<spline-viewer>` web component that
/// `index.html` loads.
#[component]
pub fn SplineScene(#[prop(into)] scene: String) -> impl IntoView {
    view! {
        <spline-viewer class="spline-scene" url=scene></spline-viewer>
    }
}
