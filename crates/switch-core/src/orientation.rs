//! Track orientation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SwitchError;

/// Which axis is the track's long axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const HORIZONTAL: &'static str = "horizontal";
    pub const VERTICAL: &'static str = "vertical";

    /// Pick the coordinate of `(x, y)` that runs along the track
    pub fn along(self, x: f32, y: f32) -> f32 {
        match self {
            Orientation::Horizontal => x,
            Orientation::Vertical => y,
        }
    }

    /// Name as used in config files
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => Self::HORIZONTAL,
            Orientation::Vertical => Self::VERTICAL,
        }
    }
}

impl FromStr for Orientation {
    type Err = SwitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::HORIZONTAL => Ok(Orientation::Horizontal),
            Self::VERTICAL => Ok(Orientation::Vertical),
            other => Err(SwitchError::InvalidOrientation(other.to_string())),
        }
    }
}

impl TryFrom<String> for Orientation {
    type Error = SwitchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Orientation> for String {
    fn from(orientation: Orientation) -> Self {
        orientation.as_str().to_string()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
