//! Transient hover/press state for one switch
//!
//! Pure data plus the three pointer transitions. The event source guarantees
//! ordering (start, then moves, then end), this type only relies on it.

use crate::config::SwitchConfig;
use crate::mapper::map_position;

/// Track origin in viewport coordinates, captured when hovering starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    Idle,
    Hovering,
}

/// Interaction state owned by a single switch instance
///
/// Invariant: `anchor.is_some() == hovering`.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    hovering: bool,
    /// Provisional position, equal to the committed one while idle
    hover_position: usize,
    anchor: Option<Anchor>,
}

impl InteractionState {
    /// Fresh idle state previewing the committed position
    pub fn new(committed: usize) -> Self {
        Self {
            hovering: false,
            hover_position: committed,
            anchor: None,
        }
    }

    pub fn phase(&self) -> InteractionPhase {
        if self.hovering {
            InteractionPhase::Hovering
        } else {
            InteractionPhase::Idle
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn hover_position(&self) -> usize {
        self.hover_position
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    /// Pointer entered the track whose top-left is at `(anchor_x, anchor_y)`
    pub fn hover_start(&mut self, anchor_x: f32, anchor_y: f32) {
        self.hovering = true;
        self.anchor = Some(Anchor {
            x: anchor_x,
            y: anchor_y,
        });
    }

    /// Pointer moved to `(pointer_x, pointer_y)` while over the track
    ///
    /// Ignored while idle.
    pub fn hover_move(&mut self, config: &SwitchConfig, pointer_x: f32, pointer_y: f32) {
        let Some(anchor) = self.anchor else {
            log::trace!("hover_move: ignored while idle");
            return;
        };

        let orientation = config.orientation;
        self.hover_position = map_position(
            orientation.along(pointer_x, pointer_y),
            orientation.along(anchor.x, anchor.y),
            config.padding,
            config.length,
            config.num_positions,
        );
    }

    /// Pointer left the track: back to idle, previewing `committed`
    pub fn hover_end(&mut self, committed: usize) {
        self.hovering = false;
        self.anchor = None;
        self.hover_position = committed;
    }

    /// Report the provisional position to the owner
    ///
    /// Does not change the state; the owner decides whether to adopt it.
    pub fn commit(&self, on_change: impl FnOnce(usize)) -> usize {
        on_change(self.hover_position);
        self.hover_position
    }

    /// Follow an external change of the committed position
    ///
    /// While hovering the preview keeps tracking the pointer.
    pub fn sync_committed(&mut self, committed: usize) {
        if !self.hovering {
            self.hover_position = committed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Orientation;

    fn horizontal() -> SwitchConfig {
        SwitchConfig::new(Orientation::Horizontal, 5)
            .with_track(100.0, 20.0)
            .with_inner_thickness(10.0)
            .with_position(2)
    }

    #[test]
    fn test_new_is_idle() {
        let state = InteractionState::new(2);
        assert_eq!(state.phase(), InteractionPhase::Idle);
        assert_eq!(state.hover_position(), 2);
        assert_eq!(state.anchor(), None);
    }

    #[test]
    fn test_hover_start_keeps_position() {
        let mut state = InteractionState::new(3);
        state.hover_start(200.0, 50.0);
        assert_eq!(state.phase(), InteractionPhase::Hovering);
        assert_eq!(state.hover_position(), 3);
        assert_eq!(state.anchor(), Some(Anchor { x: 200.0, y: 50.0 }));
    }

    #[test]
    fn test_hover_move_horizontal_uses_x() {
        let config = horizontal();
        let mut state = InteractionState::new(config.position);
        state.hover_start(200.0, 50.0);
        state.hover_move(&config, 205.0, 999.0);
        assert_eq!(state.hover_position(), 0);
        state.hover_move(&config, 265.0, -999.0);
        assert_eq!(state.hover_position(), 3);
    }

    #[test]
    fn test_hover_move_vertical_uses_y() {
        let config = SwitchConfig::new(Orientation::Vertical, 4).with_track(80.0, 20.0);
        let mut state = InteractionState::new(0);
        state.hover_start(10.0, 100.0);
        state.hover_move(&config, 10.0, 145.0);
        // 45 / 80 * 4 = 2.25
        assert_eq!(state.hover_position(), 2);
    }

    #[test]
    fn test_hover_move_while_idle_is_noop() {
        let config = horizontal();
        let mut state = InteractionState::new(2);
        state.hover_move(&config, 1000.0, 1000.0);
        assert_eq!(state, InteractionState::new(2));
    }

    #[test]
    fn test_hover_end_resets() {
        let config = horizontal();
        let mut state = InteractionState::new(2);
        state.hover_start(0.0, 0.0);
        state.hover_move(&config, 5.0, 0.0);
        assert_eq!(state.hover_position(), 0);

        state.hover_end(2);
        assert_eq!(state.phase(), InteractionPhase::Idle);
        assert_eq!(state.anchor(), None);
        assert_eq!(state.hover_position(), 2);
    }

    #[test]
    fn test_hover_end_idempotent() {
        let mut once = InteractionState::new(1);
        once.hover_start(0.0, 0.0);
        let mut twice = once.clone();

        once.hover_end(1);
        twice.hover_end(1);
        twice.hover_end(1);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_commit_uses_latest_move() {
        let config = horizontal();
        let mut state = InteractionState::new(2);
        state.hover_start(0.0, 0.0);
        for x in [5.0, 90.0, 30.0, 65.0] {
            state.hover_move(&config, x, 0.0);
        }

        let mut reported = None;
        let committed = state.commit(|p| reported = Some(p));
        assert_eq!(reported, Some(3));
        assert_eq!(committed, 3);
        // Commit does not mutate
        assert!(state.is_hovering());
        assert_eq!(state.hover_position(), 3);
    }

    #[test]
    fn test_commit_while_idle_reports_committed() {
        let state = InteractionState::new(4);
        let mut reported = None;
        state.commit(|p| reported = Some(p));
        assert_eq!(reported, Some(4));
    }

    #[test]
    fn test_anchor_invariant() {
        let config = horizontal();
        let mut state = InteractionState::new(0);
        assert_eq!(state.is_hovering(), state.anchor().is_some());
        state.hover_start(1.0, 2.0);
        assert_eq!(state.is_hovering(), state.anchor().is_some());
        state.hover_move(&config, 50.0, 2.0);
        assert_eq!(state.is_hovering(), state.anchor().is_some());
        state.hover_end(0);
        assert_eq!(state.is_hovering(), state.anchor().is_some());
    }

    #[test]
    fn test_sync_committed() {
        let mut state = InteractionState::new(0);
        state.sync_committed(3);
        assert_eq!(state.hover_position(), 3);

        state.hover_start(0.0, 0.0);
        state.sync_committed(1);
        assert_eq!(state.hover_position(), 3);
    }
}
