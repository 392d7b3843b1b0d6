use leptos::prelude::*;

use crate::config::SmoothScrollConfig;

/// Smooth scrolling for the lifetime of the calling component.
///
/// The session starts when the component mounts and is torn down by the
/// owner's cleanup, so navigating away never leaves a frame loop running.
pub fn use_smooth_scroll(config: &SmoothScrollConfig) {
    #[cfg(feature = "csr")]
    {
        use send_wrapper::SendWrapper;

        use crate::services::browser::SmoothScrollSession;

        match SmoothScrollSession::start(config) {
            Ok(session) => {
                let session = SendWrapper::new(session);
                on_cleanup(move || drop(session.take()));
            }
            Err(e) => log::warn!("Smooth scrolling disabled: {e}"),
        }
    }

    #[cfg(not(feature = "csr"))]
    let _ = config;
}
