use std::fmt;

use serde::{Deserialize, Serialize};

/// Device class resolved from the viewport width, once per render pass.
///
/// Layout branching lives here as a lookup; the navigation and playback
/// controllers never see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

/// Presentation constants for one device class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSpec {
    /// Content columns for two-pane slides.
    pub columns: u8,
    /// Horizontal padding in pixels.
    pub padding: u32,
    /// Multiplier on the base font size.
    pub font_scale: f32,
}

impl DeviceClass {
    /// Width tiers: below 600 is mobile, below 1024 is tablet.
    pub fn from_width(width: u32) -> Self {
        if width < 600 {
            Self::Mobile
        } else if width < 1024 {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    pub fn layout(self) -> LayoutSpec {
        match self {
            Self::Mobile => LayoutSpec {
                columns: 1,
                padding: 16,
                font_scale: 0.85,
            },
            Self::Tablet => LayoutSpec {
                columns: 1,
                padding: 32,
                font_scale: 1.0,
            },
            Self::Desktop => LayoutSpec {
                columns: 2,
                padding: 64,
                font_scale: 1.0,
            },
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        };
        write!(f, "{name}")
    }
}
