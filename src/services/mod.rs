pub mod frames;
pub mod newsletter;
pub mod reveal;
pub mod smooth_scroll;

#[cfg(feature = "csr")]
pub mod browser;
#[cfg(test)]
pub(crate) mod manual;

pub use frames::{Detach, FrameSource};
pub use newsletter::{NewsletterError, NewsletterSignup, NoopSignup};
pub use reveal::{IntersectionSource, RevealWatcher};
pub use smooth_scroll::SmoothScrollDriver;

/// Errors raised by the browser bindings
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("Browser window is unavailable")]
    NoWindow,
    #[error("Document is unavailable")]
    NoDocument,
    #[error("JavaScript error: {0}")]
    Js(String),
}
