use serde::{Deserialize, Serialize};

/// Palette and typography, exposed to the stylesheet as CSS custom properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub font_family: String,
    pub background: String,
    pub paper: String,
    pub primary: String,
    pub secondary: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub footer: String,
    pub radius_px: u32,
}

impl Default for Theme {
    /// Desert white with deep blue and sand accents.
    fn default() -> Self {
        Self {
            font_family: "Inter, Roboto, -apple-system, BlinkMacSystemFont, Segoe UI, Arial, sans-serif"
                .into(),
            background: "#FAF7F2".into(),
            paper: "#FFFFFF".into(),
            primary: "#205b9e".into(),
            secondary: "#d2a679".into(),
            text_primary: "#2A2A2A".into(),
            text_secondary: "#5C5C5C".into(),
            footer: "#0e2a4b".into(),
            radius_px: 14,
        }
    }
}

impl Theme {
    /// `:root` rule declaring the theme variables.
    pub fn to_css(&self) -> String {
        format!(
            ":root {{ --font-family: {}; --bg: {}; --paper: {}; --primary: {}; --secondary: {}; \
             --text: {}; --text-secondary: {}; --footer: {}; --radius: {}px; }}",
            self.font_family,
            self.background,
            self.paper,
            self.primary,
            self.secondary,
            self.text_primary,
            self.text_secondary,
            self.footer,
            self.radius_px,
        )
    }
}
