//! Discrete-position switch widget
//!
//! A track with N positions. Hovering shows a translucent preview of the
//! position under the pointer; pressing reports that position. The owner
//! stays authoritative for the committed position and feeds it back with
//! [`SoundSwitch::set_position`], which animates the committed indicator.
//!
//! # Usage
//!
//! ```rust,ignore
//! // Create once, e.g. in your app state
//! let mut switch = SoundSwitch::new(SwitchConfig::new(Orientation::Horizontal, 5))?;
//!
//! // In your view function
//! switch.view(|event| Message::Switch(event))
//!
//! // In your update function
//! if let Some(position) = switch.handle_event(event) {
//!     switch.set_position(position);
//! }
//! ```

mod canvas;
mod view;

use std::time::{Duration, Instant};

use iced::{Element, Point};
use switch_core::{
    layout, position_step, InteractionState, SwitchConfig, SwitchLayout, SwitchResult,
    Transition,
};

pub use canvas::{SwitchCanvas, SwitchPointer};
pub use view::sound_switch;

/// Pointer activity reported by a switch canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwitchEvent {
    /// Pointer entered the track at `pointer`; `anchor` is the track's
    /// top-left corner
    HoverStart { anchor: Point, pointer: Point },
    /// Pointer moved over the track (viewport coordinates)
    HoverMove(Point),
    /// Pointer left the track
    HoverEnd,
    /// Press completed on the track
    Press,
}

/// In-flight animation of the committed indicator
#[derive(Debug, Clone, Copy)]
struct Tween {
    from: f32,
    to: f32,
    started: Instant,
}

/// A stateful switch: configuration, interaction state and animation
#[derive(Debug, Clone)]
pub struct SoundSwitch {
    config: SwitchConfig,
    state: InteractionState,
    tween: Option<Tween>,
    /// Frame time used for drawing, advanced by `tick`
    now: Instant,
}

impl SoundSwitch {
    /// Create a switch, rejecting configs that cannot be laid out
    pub fn new(config: SwitchConfig) -> SwitchResult<Self> {
        config.validate()?;
        Ok(Self {
            state: InteractionState::new(config.position),
            config,
            tween: None,
            now: Instant::now(),
        })
    }

    pub fn config(&self) -> &SwitchConfig {
        &self.config
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Committed position
    pub fn position(&self) -> usize {
        self.config.position
    }

    /// Position currently previewed (committed position while idle)
    pub fn hover_position(&self) -> usize {
        self.state.hover_position()
    }

    /// Replace the configuration
    ///
    /// Interaction state is kept, so a hover in progress continues.
    pub fn set_config(&mut self, config: SwitchConfig) -> SwitchResult<()> {
        config.validate()?;
        self.state.sync_committed(config.position);
        self.config = config;
        self.tween = None;
        Ok(())
    }

    /// Adopt a new committed position and animate the indicator towards it
    pub fn set_position(&mut self, position: usize) {
        self.set_position_at(position, Instant::now());
    }

    /// Like `set_position`, with the animation starting at `now`
    ///
    /// The frame clock also moves to `now`, so the tween never starts in the
    /// past after a period without ticks.
    pub fn set_position_at(&mut self, position: usize, now: Instant) {
        if position == self.config.position {
            return;
        }

        self.now = self.now.max(now);
        let from = self.committed_offset();
        self.config.position = position;
        self.state.sync_committed(position);
        self.tween = Some(Tween {
            from,
            to: self.target_offset(),
            started: self.now,
        });
        log::debug!("SoundSwitch: committed position -> {}", position);
    }

    /// Apply a pointer event
    ///
    /// Returns `Some(position)` when a press selects a position. The committed
    /// position is not changed here; pass the value to `set_position` if the
    /// owner accepts it.
    pub fn handle_event(&mut self, event: SwitchEvent) -> Option<usize> {
        match event {
            SwitchEvent::HoverStart { anchor, pointer } => {
                // The entry point is already over a position
                self.state.hover_start(anchor.x, anchor.y);
                self.state.hover_move(&self.config, pointer.x, pointer.y);
                None
            }
            SwitchEvent::HoverMove(pointer) => {
                self.state.hover_move(&self.config, pointer.x, pointer.y);
                None
            }
            SwitchEvent::HoverEnd => {
                self.state.hover_end(self.config.position);
                None
            }
            SwitchEvent::Press => {
                let mut selected = None;
                self.state.commit(|position| selected = Some(position));
                selected
            }
        }
    }

    /// Advance the animation clock
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        if let Some(tween) = self.tween {
            if Transition::STANDARD.is_finished(now.saturating_duration_since(tween.started)) {
                self.tween = None;
            }
        }
    }

    /// Whether the committed indicator is still moving
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    fn target_offset(&self) -> f32 {
        position_step(&self.config) * self.config.position as f32
    }

    /// Committed indicator offset at the current frame time
    pub fn committed_offset(&self) -> f32 {
        match self.tween {
            Some(tween) => {
                let elapsed: Duration = self.now.saturating_duration_since(tween.started);
                Transition::STANDARD.interpolate(tween.from, tween.to, elapsed)
            }
            None => self.target_offset(),
        }
    }

    /// Lay out the switch for the current state
    pub fn layout(&self) -> SwitchResult<SwitchLayout> {
        layout(&self.config, &self.state)
    }

    /// Create the view Element for this switch
    ///
    /// The `on_event` callback receives `SwitchEvent`s that should be passed
    /// to `handle_event` in your update function.
    ///
    /// # Panics
    ///
    /// Never in practice: `new` and `set_config` reject every configuration
    /// that cannot be laid out, so the failure branch is unreachable.
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        on_event: impl Fn(SwitchEvent) -> Message + 'a,
    ) -> Element<'a, Message> {
        let layout = match self.layout() {
            Ok(layout) => layout,
            Err(e) => {
                log::error!("SoundSwitch: cannot render {:?}: {}", self.config, e);
                unreachable!("validated switch config failed to lay out: {}", e);
            }
        };

        sound_switch(layout, self.committed_offset(), on_event)
    }
}
