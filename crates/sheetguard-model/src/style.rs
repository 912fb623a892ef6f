//! Header presentation bundles.
//!
//! These are opaque value objects the engine forwards to whatever renders the
//! header row. The engine only decides *which* style a column gets (required
//! or optional); interpreting the contents is the writer's job.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub name: String,
    pub size: u32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    /// ARGB color string, e.g. `00FFFFFF`.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub fill_type: String,
    pub start_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Side {
    pub border_style: Option<String>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub left: Side,
    pub right: Side,
    pub top: Side,
    pub bottom: Side,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alignment {
    pub horizontal: String,
    pub vertical: String,
    pub text_rotation: u32,
    pub wrap_text: bool,
    pub shrink_to_fit: bool,
    pub indent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Protection {
    pub locked: bool,
    pub hidden: bool,
}

/// Everything a writer needs to render one header cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub font: Font,
    pub fill: Fill,
    pub border: Border,
    pub alignment: Alignment,
    pub number_format: String,
    pub protection: Protection,
}

impl Style {
    /// Stock style for optional column headers: white text on green.
    pub fn header() -> Self {
        Self::with_fill("00339966")
    }

    /// Stock style for required column headers: white text on dark red.
    pub fn required_header() -> Self {
        Self::with_fill("00800000")
    }

    fn with_fill(start_color: &str) -> Self {
        Self {
            font: Font {
                name: "Calibri".to_string(),
                size: 11,
                bold: false,
                italic: false,
                underline: false,
                strike: false,
                color: "00FFFFFF".to_string(),
            },
            fill: Fill {
                fill_type: "solid".to_string(),
                start_color: start_color.to_string(),
            },
            border: Border {
                left: Side::none(),
                right: Side::none(),
                top: Side::none(),
                bottom: Side::none(),
            },
            alignment: Alignment {
                horizontal: "general".to_string(),
                vertical: "bottom".to_string(),
                text_rotation: 0,
                wrap_text: false,
                shrink_to_fit: false,
                indent: 0,
            },
            number_format: "General".to_string(),
            protection: Protection {
                locked: true,
                hidden: false,
            },
        }
    }
}

impl Side {
    fn none() -> Self {
        Self {
            border_style: None,
            color: "FF000000".to_string(),
        }
    }
}
