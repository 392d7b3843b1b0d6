use std::fmt;

use super::content::{BROWSE_ITEMS, FEATURES, INSPIRATION_CARDS, STEPS};

/// A reveal-wrapped block on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealSlot {
    Feature(usize),
    InspirationHeading,
    Inspiration(usize),
    BeautifyCopy,
    BeautifyImage,
    BrowseHeading,
    Browse(usize),
    StepsHeading,
    Step(usize),
    Newsletter,
}

/// Every reveal slot in document order.
pub fn reveal_slots() -> Vec<RevealSlot> {
    let mut slots = Vec::new();
    slots.extend((0..FEATURES.len()).map(RevealSlot::Feature));
    slots.push(RevealSlot::InspirationHeading);
    slots.extend((0..INSPIRATION_CARDS.len()).map(RevealSlot::Inspiration));
    slots.push(RevealSlot::BeautifyCopy);
    slots.push(RevealSlot::BeautifyImage);
    slots.push(RevealSlot::BrowseHeading);
    slots.extend((0..BROWSE_ITEMS.len()).map(RevealSlot::Browse));
    slots.push(RevealSlot::StepsHeading);
    slots.extend((0..STEPS.len()).map(RevealSlot::Step));
    slots.push(RevealSlot::Newsletter);
    slots
}

impl fmt::Display for RevealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevealSlot::Feature(i) => write!(f, "feature-{i}"),
            RevealSlot::InspirationHeading => f.write_str("inspiration-heading"),
            RevealSlot::Inspiration(i) => write!(f, "inspiration-{i}"),
            RevealSlot::BeautifyCopy => f.write_str("beautify-copy"),
            RevealSlot::BeautifyImage => f.write_str("beautify-image"),
            RevealSlot::BrowseHeading => f.write_str("browse-heading"),
            RevealSlot::Browse(i) => write!(f, "browse-{i}"),
            RevealSlot::StepsHeading => f.write_str("steps-heading"),
            RevealSlot::Step(i) => write!(f, "step-{i}"),
            RevealSlot::Newsletter => f.write_str("newsletter"),
        }
    }
}
