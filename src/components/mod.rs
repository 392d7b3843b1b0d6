mod icon;
mod nav;
mod reveal;
mod smooth_scroll;
mod spline;

pub use icon::MaterialIcon;
pub use nav::Navbar;
pub use reveal::RevealSection;
pub use smooth_scroll::use_smooth_scroll;
pub use spline::SplineScene;
