/// Header treatment relative to the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elevation {
    Flat,
    Elevated,
}

impl Elevation {
    /// Elevated as soon as the offset passes `threshold`; no hysteresis.
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Elevation::Elevated
        } else {
            Elevation::Flat
        }
    }
}

const ELEVATION_4_SHADOW: &str = "0px 2px 4px -1px rgba(0,0,0,0.2), \
     0px 4px 5px 0px rgba(0,0,0,0.14), \
     0px 1px 10px 0px rgba(0,0,0,0.12)";

/// Computed style for the sticky header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    pub elevation: Elevation,
    pub box_shadow: &'static str,
    pub background: &'static str,
    pub backdrop_filter: &'static str,
}

impl HeaderStyle {
    pub fn for_elevation(elevation: Elevation) -> Self {
        match elevation {
            Elevation::Flat => Self {
                elevation,
                box_shadow: "none",
                background: "transparent",
                backdrop_filter: "none",
            },
            Elevation::Elevated => Self {
                elevation,
                box_shadow: ELEVATION_4_SHADOW,
                background: "rgba(255,255,255,0.9)",
                backdrop_filter: "saturate(180%) blur(8px)",
            },
        }
    }

    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        Self::for_elevation(Elevation::from_offset(offset, threshold))
    }

    pub fn to_css(&self) -> String {
        format!(
            "box-shadow: {}; background-color: {}; backdrop-filter: {}; -webkit-backdrop-filter: {}",
            self.box_shadow, self.background, self.backdrop_filter, self.backdrop_filter
        )
    }
}
