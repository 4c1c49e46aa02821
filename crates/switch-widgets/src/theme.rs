//! Color conversion and display constants shared by switch widgets

use iced::Color;
use switch_core::Rgba;

/// Label color used next to switches
pub const LABEL_COLOR: Color = Color::from_rgb(0.7, 0.7, 0.7);

/// Convert a core color to an iced color
pub fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}
