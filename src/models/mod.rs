pub mod content;
pub mod easing;
pub mod elevation;
pub mod layout;
pub mod reveal;
pub mod scroll;
pub mod theme;

pub use easing::ease_out_quad;
pub use elevation::{Elevation, HeaderStyle};
pub use layout::{reveal_slots, RevealSlot};
pub use reveal::{reveal_style, IntersectionEntry, Reveal, RevealMotion, RevealState};
pub use scroll::{ScrollOptions, SmoothScroll};
pub use theme::Theme;
