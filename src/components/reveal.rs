use leptos::html::Div;
use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::models::{reveal_style, RevealSlot, RevealState};

/// Fades and slides its children in the first time they scroll into view.
#[component]
pub fn RevealSection(target: RevealSlot, children: Children) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let motion = config.reveal.motion();
    let state = RwSignal::new(RevealState::Hidden);
    let node = NodeRef::<Div>::new();

    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use send_wrapper::SendWrapper;

        use crate::services::browser::BrowserIntersections;
        use crate::services::RevealWatcher;

        let threshold = config.reveal.threshold;
        let watcher: Rc<RefCell<Option<RevealWatcher<BrowserIntersections>>>> = Rc::default();

        let attaching = SendWrapper::new(Rc::clone(&watcher));
        Effect::new(move |_| {
            let Some(div) = node.get() else {
                return;
            };
            let mut current = attaching.borrow_mut();
            if current.is_some() {
                return;
            }
            let element: &web_sys::Element = &div;
            let revealed = RevealWatcher::attach(&BrowserIntersections, element, threshold, move || {
                log::debug!("Revealed {target}");
                state.set(RevealState::Revealed);
            });
            match revealed {
                Ok(w) => *current = Some(w),
                Err(e) => {
                    log::warn!("Showing {target} without reveal: {e}");
                    state.set(RevealState::Revealed);
                }
            }
        });

        let detaching = SendWrapper::new(watcher);
        on_cleanup(move || {
            if let Some(mut w) = detaching.borrow_mut().take() {
                w.detach();
            }
        });
    }

    view! {
        <div
            node_ref=node
            class="reveal"
            data-reveal=target.to_string()
            style=move || reveal_style(state.get(), motion)
        >
            {children()}
        </div>
    }
}
