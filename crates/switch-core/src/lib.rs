//! Core logic for the sound switch control
//!
//! A switch is a track with N discrete positions. Hovering previews the
//! position under the pointer, pressing reports it to the owner. This crate
//! holds everything that does not depend on a UI toolkit:
//!
//! - **Configuration**: `SwitchConfig`, `Orientation`, typed style overrides
//! - **Position mapping**: pointer coordinate to discrete index (`map_position`)
//! - **Interaction state**: hover start/move/end and commit (`InteractionState`)
//! - **Layout**: config + state to positioned boxes (`layout`)
//! - **Transition**: easing for the committed indicator
//!
//! Rendering lives in `switch-widgets`.

pub mod config;
pub mod error;
pub mod layout;
pub mod mapper;
pub mod orientation;
pub mod state;
pub mod style;
pub mod transition;

pub use config::SwitchConfig;
pub use error::{SwitchError, SwitchResult};
pub use layout::{layout, position_step, IndicatorBox, OuterBox, Size, SwitchLayout, Translate};
pub use mapper::{map_position, MapperInput};
pub use orientation::Orientation;
pub use state::{Anchor, InteractionPhase, InteractionState};
pub use style::{
    BoxStyle, Cursor, Positioning, Rgba, StyleOverrides, INNER_HOVER_PRESET, INNER_PRESET,
    OUTER_PRESET,
};
pub use transition::{CubicBezier, Transition};
