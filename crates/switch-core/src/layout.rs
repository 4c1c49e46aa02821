//! Switch layout: config + interaction state to a positioned box tree
//!
//! ```text
//! OuterBox (length x thickness, padded, clickable)
//! ├── committed IndicatorBox  (translated by step * position, animated)
//! └── hover IndicatorBox      (translated by step * hover_position, live)
//! ```
//!
//! Pure; nothing is produced when the config cannot be laid out.

use std::fmt;

use crate::config::SwitchConfig;
use crate::error::SwitchResult;
use crate::orientation::Orientation;
use crate::state::InteractionState;
use crate::style::{BoxStyle, INNER_HOVER_PRESET, INNER_PRESET, OUTER_PRESET};
use crate::transition::Transition;

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Translation along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translate {
    pub axis: Orientation,
    pub offset: f32,
}

impl Translate {
    /// `(dx, dy)` in pixels
    pub fn vector(&self) -> (f32, f32) {
        match self.axis {
            Orientation::Horizontal => (self.offset, 0.0),
            Orientation::Vertical => (0.0, self.offset),
        }
    }

    /// Same axis, different offset
    pub fn with_offset(self, offset: f32) -> Self {
        Self { offset, ..self }
    }

    /// CSS transform notation, e.g. `translateX(45px)`
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Translate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = match self.axis {
            Orientation::Horizontal => "X",
            Orientation::Vertical => "Y",
        };
        write!(f, "translate{}({}px)", axis, self.offset)
    }
}

/// Clickable/hoverable track container
#[derive(Debug, Clone, PartialEq)]
pub struct OuterBox {
    pub size: Size,
    /// Inset applied on every side
    pub padding: f32,
    pub style: BoxStyle,
}

/// One indicator inside the track
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorBox {
    pub size: Size,
    pub transform: Translate,
    pub style: BoxStyle,
    /// Animation applied when `transform` changes
    pub transition: Option<Transition>,
}

impl IndicatorBox {
    /// Top-left corner relative to the outer box's top-left
    pub fn origin(&self, outer: &OuterBox) -> (f32, f32) {
        let (dx, dy) = self.transform.vector();
        (outer.padding + dx, outer.padding + dy)
    }
}

/// Complete view description of a switch
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchLayout {
    pub outer: OuterBox,
    pub committed: IndicatorBox,
    pub hover: IndicatorBox,
}

/// Pixel distance between two neighboring positions
///
/// Requires a validated config (`num_positions >= 2`).
pub fn position_step(config: &SwitchConfig) -> f32 {
    (config.length - config.padding * 2.0 - config.inner_thickness)
        / (config.num_positions - 1) as f32
}

/// Lay out a switch
///
/// Fails before computing any geometry if the config is invalid.
pub fn layout(config: &SwitchConfig, state: &InteractionState) -> SwitchResult<SwitchLayout> {
    config.validate()?;

    let step = position_step(config);
    let committed_offset = step * config.position as f32;
    let hover_offset = step * state.hover_position() as f32;

    let (outer_size, inner_size) = match config.orientation {
        Orientation::Vertical => (
            Size {
                width: config.thickness,
                height: config.length,
            },
            Size {
                width: config.thickness - config.padding * 2.0,
                height: config.inner_thickness,
            },
        ),
        Orientation::Horizontal => (
            Size {
                width: config.length,
                height: config.thickness,
            },
            Size {
                width: config.inner_thickness,
                height: config.thickness - config.padding * 2.0,
            },
        ),
    };

    let transform = Translate {
        axis: config.orientation,
        offset: committed_offset,
    };

    Ok(SwitchLayout {
        outer: OuterBox {
            size: outer_size,
            padding: config.padding,
            style: OUTER_PRESET.merged(&config.outer_style),
        },
        committed: IndicatorBox {
            size: inner_size,
            transform,
            style: INNER_PRESET.merged(&config.inner_style),
            transition: Some(Transition::STANDARD),
        },
        hover: IndicatorBox {
            size: inner_size,
            transform: transform.with_offset(hover_offset),
            style: INNER_HOVER_PRESET.merged(&config.inner_style),
            transition: None,
        },
    })
}
