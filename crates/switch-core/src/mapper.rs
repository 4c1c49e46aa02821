//! Pointer coordinate to discrete position mapping
//!
//! The upper clamp bound is `padded_length - padding`, not `padded_length`.
//! With zero padding a pointer at the far end of the track therefore maps to
//! `num_positions` (one past the last index); with padding the last part of
//! the usable span is unreachable. Callers that need a strict index should
//! use [`MapperInput::map_clamped`].

/// Track geometry along the long axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapperInput {
    /// Track start along the long axis (left or top of the bounding box)
    pub anchor: f32,
    pub padding: f32,
    pub length: f32,
    pub num_positions: usize,
}

impl MapperInput {
    /// Map a pointer coordinate to a position index
    pub fn map(&self, pointer: f32) -> usize {
        map_position(
            pointer,
            self.anchor,
            self.padding,
            self.length,
            self.num_positions,
        )
    }

    /// Map and clamp to the last valid index
    pub fn map_clamped(&self, pointer: f32) -> usize {
        self.map(pointer).min(self.num_positions.saturating_sub(1))
    }
}

/// Map a pointer coordinate along the track to a discrete position
///
/// `relative = pointer - (anchor + padding)`, clamped to
/// `[0, (length - 2 * padding) - padding]`, then scaled to
/// `floor(relative / (length - 2 * padding) * num_positions)`.
pub fn map_position(
    pointer: f32,
    anchor: f32,
    padding: f32,
    length: f32,
    num_positions: usize,
) -> usize {
    let total_length = length - padding * 2.0;
    if total_length <= 0.0 {
        log::debug!(
            "map_position: degenerate track (length {}, padding {}), mapping to 0",
            length,
            padding
        );
        return 0;
    }

    let mut relative = pointer - (anchor + padding);
    if relative < 0.0 {
        relative = 0.0;
    }
    if relative > total_length - padding {
        relative = total_length - padding;
    }

    let scaled = (relative / total_length) * num_positions as f32;
    // Negative only when padding exceeds the padded length
    scaled.max(0.0).floor() as usize
}
