//! iced widgets for the sound switch control
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State**: `SoundSwitch` owns the config and interaction state from
//!   `switch-core`
//! - **View function**: `sound_switch` takes a layout + callback and returns
//!   an `Element<Message>`
//! - **Canvas Program**: `SwitchCanvas` draws the layout and turns mouse
//!   events into `SwitchEvent`s

pub mod sound_switch;
pub mod theme;

pub use sound_switch::{sound_switch, SoundSwitch, SwitchCanvas, SwitchEvent, SwitchPointer};
pub use theme::{to_color, LABEL_COLOR};
