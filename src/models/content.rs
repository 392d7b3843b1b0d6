//! Hard-coded page copy and imagery.

/// Material icon ligatures used on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    LocalShipping,
    HeadsetMic,
    Verified,
    ShoppingCart,
    Instagram,
    Facebook,
    Twitter,
    Bedroom,
    Living,
    Dining,
    Security,
    Warehouse,
    Style,
}

impl Icon {
    /// Ligature name in the Material Symbols font.
    pub fn ligature(self) -> &'static str {
        match self {
            Icon::LocalShipping => "local_shipping",
            Icon::HeadsetMic => "headset_mic",
            Icon::Verified => "verified",
            Icon::ShoppingCart => "shopping_cart",
            // the symbol font has no brand marks
            Icon::Instagram => "photo_camera",
            Icon::Facebook => "thumb_up",
            Icon::Twitter => "tag",
            Icon::Bedroom => "bedroom_parent",
            Icon::Living => "weekend",
            Icon::Dining => "restaurant",
            Icon::Security => "security",
            Icon::Warehouse => "warehouse",
            Icon::Style => "style",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Icon::LocalShipping => "Delivery",
            Icon::HeadsetMic => "Support",
            Icon::Verified => "Verified",
            Icon::ShoppingCart => "Cart",
            Icon::Instagram => "Instagram",
            Icon::Facebook => "Facebook",
            Icon::Twitter => "Twitter",
            Icon::Bedroom => "Bedroom",
            Icon::Living => "Living",
            Icon::Dining => "Dining",
            Icon::Security => "Security",
            Icon::Warehouse => "Warehouse",
            Icon::Style => "Style",
        }
    }
}

pub const BRAND: &str = "Furniture";

pub const NAV_ITEMS: [&str; 5] = ["Home", "Services", "Doctors", "Products", "Gallery"];

pub const HERO_CHIP: &str = "New Season";
pub const HERO_TITLE: &str = "Discover Our New Collection";
pub const HERO_SUBTITLE: &str =
    "Elegant, minimal, and crafted to elevate your space. Luxury pieces with timeless design.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::LocalShipping,
        title: "Free Delivery",
        text: "Complimentary shipping on all orders",
    },
    Feature {
        icon: Icon::HeadsetMic,
        title: "24/7 Support",
        text: "We are here whenever you need",
    },
    Feature {
        icon: Icon::Verified,
        title: "100% Authentic",
        text: "Quality guaranteed, always",
    },
];

/// Image card with an optional leading icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCard {
    pub title: &'static str,
    pub icon: Option<Icon>,
    pub image: &'static str,
    pub description: &'static str,
}

pub const INSPIRATION_TITLE: &str = "Inspiration Collection";

pub const INSPIRATION_CARDS: [ImageCard; 3] = [
    ImageCard {
        title: "Plants",
        icon: None,
        image: "https://images.unsplash.com/photo-1499951360447-b19be8fe80f5?q=80&w=1600&auto=format&fit=crop",
        description: "Greenery that brings life indoors.",
    },
    ImageCard {
        title: "Decor",
        icon: None,
        image: "https://images.unsplash.com/photo-1524758631624-e2822e304c36?q=80&w=1600&auto=format&fit=crop",
        description: "Thoughtful accents and art pieces.",
    },
    ImageCard {
        title: "Lighting",
        icon: None,
        image: "https://images.unsplash.com/photo-1484154218962-a197022b5858?q=80&w=1600&auto=format&fit=crop",
        description: "Warm light for cozy evenings.",
    },
];

pub const BEAUTIFY_EYEBROW: &str = "Elevate";
pub const BEAUTIFY_TITLE: &str = "Beautify Your Space";
pub const BEAUTIFY_TEXT: &str = "Curated pieces to transform your living areas. From textures to tones, \
     update your home with character and comfort.";
pub const BEAUTIFY_IMAGE: &str =
    "https://images.unsplash.com/photo-1493666438817-866a91353ca9?q=80&w=1600&auto=format&fit=crop";

pub const BROWSE_TITLE: &str = "Browse The Range";

pub const BROWSE_ITEMS: [ImageCard; 3] = [
    ImageCard {
        title: "Dining",
        icon: Some(Icon::Dining),
        image: "https://images.unsplash.com/photo-1519710164239-da123dc03ef4?q=80&w=1600&auto=format&fit=crop",
        description: "Tables and chairs for memorable meals.",
    },
    ImageCard {
        title: "Living",
        icon: Some(Icon::Living),
        image: "https://images.unsplash.com/photo-1493666438817-866a91353ca9?q=80&w=1600&auto=format&fit=crop",
        description: "Lounges that invite conversation.",
    },
    ImageCard {
        title: "Bedroom",
        icon: Some(Icon::Bedroom),
        image: "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?q=80&w=1600&auto=format&fit=crop",
        description: "Comfort that supports deep rest.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub number: u8,
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

pub const STEPS_TITLE: &str = "How It Works";

pub const STEPS: [Step; 3] = [
    Step {
        number: 1,
        icon: Icon::Security,
        title: "Purchase Securely",
        text: "Checkout with encrypted payments and peace of mind.",
    },
    Step {
        number: 2,
        icon: Icon::Warehouse,
        title: "Ships From Warehouse",
        text: "Fast dispatch from our local facilities.",
    },
    Step {
        number: 3,
        icon: Icon::Style,
        title: "Style Your Room",
        text: "Unbox and enjoy your elevated space.",
    },
];

pub const NEWSLETTER_TITLE: &str = "Join our newsletter";
pub const NEWSLETTER_TEXT: &str = "Exclusive offers, new arrivals, and interior tips.";

pub const FOOTER_BLURB: &str =
    "Classic design for modern living. Crafted with premium materials and attention to detail.";
pub const FOOTER_CONTACT: &str = "Contact: hello@example.com • +1 (555) 000-0000";
pub const SOCIAL_ICONS: [Icon; 3] = [Icon::Instagram, Icon::Facebook, Icon::Twitter];

/// Number of thumbnails in the newsletter and footer galleries.
pub const GALLERY_SIZE: usize = 6;

/// Random 200x200 thumbnails for `topic`, numbered from 1.
pub fn gallery(topic: &str) -> Vec<String> {
    (1..=GALLERY_SIZE)
        .map(|i| format!("https://source.unsplash.com/random/200x200?{topic},{i}"))
        .collect()
}

/// Copyright line for the footer.
pub fn copyright(year: i32) -> String {
    format!("© {year} {BRAND}. Replace with your company legal name.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_urls() {
        let urls = gallery("interior");
        assert_eq!(urls.len(), GALLERY_SIZE);
        assert_eq!(urls[0], "https://source.unsplash.com/random/200x200?interior,1");
        assert_eq!(urls[5], "https://source.unsplash.com/random/200x200?interior,6");
    }

    #[test]
    fn test_copyright() {
        assert_eq!(
            copyright(2026),
            "© 2026 Furniture. Replace with your company legal name."
        );
    }

    #[test]
    fn test_steps_are_numbered_in_order() {
        let numbers: Vec<u8> = STEPS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
