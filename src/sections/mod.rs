// Landing page sections, top to bottom

mod beautify;
mod browse;
mod features;
mod footer;
mod hero;
mod inspiration;
mod newsletter;
mod steps;

pub use beautify::SplitBeautify;
pub use browse::BrowseRange;
pub use features::FeaturesRow;
pub use footer::Footer;
pub use hero::Hero;
pub use inspiration::InspirationGrid;
pub use newsletter::Newsletter;
pub use steps::HowItWorks;
