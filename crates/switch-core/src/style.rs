//! Box styles, presets and typed overrides
//!
//! A resolved [`BoxStyle`] is built in three layers, lowest first:
//!
//! 1. a preset (`OUTER_PRESET`, `INNER_PRESET`, `INNER_HOVER_PRESET`)
//! 2. the owner's [`StyleOverrides`], field by field
//! 3. computed geometry (size, padding, transform), which lives on the
//!    layout boxes and is never part of a style
//!
//! Overrides only ever replace a field when they carry `Some`.

use serde::{Deserialize, Serialize};

/// RGBA color with components in 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "Rgba::opaque")]
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same color with alpha multiplied by `opacity`
    pub fn faded(self, opacity: f32) -> Self {
        Self {
            a: self.a * opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    fn opaque() -> f32 {
        1.0
    }
}

/// How a box is placed inside its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Positioning {
    /// Establishes the coordinate space for absolutely placed children
    Relative,
    /// Placed at the parent's content origin, moved only by its transform
    Absolute,
}

/// Pointer shape shown while over a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

/// Fully resolved visual style of one box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle {
    pub background: Rgba,
    pub border_color: Rgba,
    pub border_width: f32,
    pub border_radius: f32,
    pub opacity: f32,
    pub positioning: Positioning,
    pub cursor: Cursor,
}

/// Outer container: relative, clickable
pub const OUTER_PRESET: BoxStyle = BoxStyle {
    background: Rgba::rgb(0.15, 0.15, 0.18),
    border_color: Rgba::rgb(0.3, 0.3, 0.35),
    border_width: 1.0,
    border_radius: 4.0,
    opacity: 1.0,
    positioning: Positioning::Relative,
    cursor: Cursor::Pointer,
};

/// Committed indicator
pub const INNER_PRESET: BoxStyle = BoxStyle {
    background: Rgba::rgb(0.3, 0.7, 0.9),
    border_color: Rgba::TRANSPARENT,
    border_width: 0.0,
    border_radius: 2.0,
    opacity: 1.0,
    positioning: Positioning::Absolute,
    cursor: Cursor::Default,
};

/// Hover preview indicator: the committed indicator at half opacity
pub const INNER_HOVER_PRESET: BoxStyle = BoxStyle {
    opacity: 0.5,
    ..INNER_PRESET
};

impl BoxStyle {
    /// Apply overrides field by field; a `Some` override always wins
    pub fn merged(&self, overrides: &StyleOverrides) -> BoxStyle {
        BoxStyle {
            background: overrides.background.unwrap_or(self.background),
            border_color: overrides.border_color.unwrap_or(self.border_color),
            border_width: overrides.border_width.unwrap_or(self.border_width),
            border_radius: overrides.border_radius.unwrap_or(self.border_radius),
            opacity: overrides.opacity.unwrap_or(self.opacity),
            positioning: overrides.positioning.unwrap_or(self.positioning),
            cursor: overrides.cursor.unwrap_or(self.cursor),
        }
    }

    /// Background with this box's opacity folded into the alpha channel
    pub fn effective_background(&self) -> Rgba {
        self.background.faded(self.opacity)
    }

    /// Border color with this box's opacity folded into the alpha channel
    pub fn effective_border(&self) -> Rgba {
        self.border_color.faded(self.opacity)
    }
}

/// Owner-supplied style overrides
///
/// Every field is optional; missing fields keep the preset value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positioning: Option<Positioning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
}

impl StyleOverrides {
    pub fn is_empty(&self) -> bool {
        *self == StyleOverrides::default()
    }

    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_border(mut self, color: Rgba, width: f32) -> Self {
        self.border_color = Some(color);
        self.border_width = Some(width);
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }
}
