//! Per-render switch configuration
//!
//! Serializable so switches can be declared in YAML config files.

use serde::{Deserialize, Serialize};

use crate::error::{SwitchError, SwitchResult};
use crate::orientation::Orientation;
use crate::style::StyleOverrides;

/// Immutable inputs for one switch
///
/// The commit callback is not stored here: the core takes it as a closure
/// in [`InteractionState::commit`](crate::InteractionState::commit) and the
/// widget takes it as the `on_change` argument of its view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchConfig {
    /// Committed position (0-indexed)
    pub position: usize,
    /// Track size across the long axis, in pixels
    pub thickness: f32,
    /// Track size along the long axis, in pixels
    pub length: f32,
    pub orientation: Orientation,
    /// Number of discrete positions (at least 2)
    pub num_positions: usize,
    /// Indicator size along the long axis, in pixels
    pub inner_thickness: f32,
    /// Inset from both ends and both sides of the track, in pixels
    #[serde(default)]
    pub padding: f32,
    #[serde(default, skip_serializing_if = "StyleOverrides::is_empty")]
    pub outer_style: StyleOverrides,
    /// Applied to both the committed and the hover indicator
    #[serde(default, skip_serializing_if = "StyleOverrides::is_empty")]
    pub inner_style: StyleOverrides,
}

impl SwitchConfig {
    /// Create a config with the default geometry for the given orientation
    pub fn new(orientation: Orientation, num_positions: usize) -> Self {
        Self {
            position: 0,
            thickness: DEFAULT_THICKNESS,
            length: DEFAULT_LENGTH,
            orientation,
            num_positions,
            inner_thickness: DEFAULT_INNER_THICKNESS,
            padding: DEFAULT_PADDING,
            outer_style: StyleOverrides::default(),
            inner_style: StyleOverrides::default(),
        }
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    pub fn with_track(mut self, length: f32, thickness: f32) -> Self {
        self.length = length;
        self.thickness = thickness;
        self
    }

    pub fn with_inner_thickness(mut self, inner_thickness: f32) -> Self {
        self.inner_thickness = inner_thickness;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_outer_style(mut self, style: StyleOverrides) -> Self {
        self.outer_style = style;
        self
    }

    pub fn with_inner_style(mut self, style: StyleOverrides) -> Self {
        self.inner_style = style;
        self
    }

    /// Check the geometry can be laid out
    pub fn validate(&self) -> SwitchResult<()> {
        if self.num_positions < 2 {
            return Err(SwitchError::TooFewPositions(self.num_positions));
        }
        Ok(())
    }

    /// Usable span between the paddings
    pub fn padded_length(&self) -> f32 {
        self.length - self.padding * 2.0
    }

    /// Parse a single switch from YAML and validate it
    pub fn from_yaml(yaml: &str) -> SwitchResult<Self> {
        let config: SwitchConfig =
            serde_yaml::from_str(yaml).map_err(|e| SwitchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Default track length in pixels
pub const DEFAULT_LENGTH: f32 = 120.0;
/// Default track thickness in pixels
pub const DEFAULT_THICKNESS: f32 = 24.0;
/// Default indicator thickness in pixels
pub const DEFAULT_INNER_THICKNESS: f32 = 16.0;
/// Default padding in pixels
pub const DEFAULT_PADDING: f32 = 0.0;
