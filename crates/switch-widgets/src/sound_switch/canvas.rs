//! Canvas program for the sound switch
//!
//! Translates raw mouse events into [`SwitchEvent`]s and draws the layout.
//! Coordinates published in events are viewport coordinates, matching the
//! anchor taken from the canvas bounds.

use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program, Stroke};
use iced::{mouse, Point, Rectangle, Size, Theme};

use switch_core::{BoxStyle, Cursor, IndicatorBox, SwitchLayout};

use super::SwitchEvent;
use crate::theme::to_color;

/// Canvas state tracking the raw pointer
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchPointer {
    /// Cursor is inside the track bounds
    pub over: bool,
    /// Left button went down inside the track and has not been released
    pub pressed: bool,
}

/// Canvas program drawing one switch
pub struct SwitchCanvas<Message, F>
where
    F: Fn(SwitchEvent) -> Message,
{
    pub layout: SwitchLayout,
    /// Committed indicator offset as currently animated
    pub committed_offset: f32,
    pub on_event: F,
}

impl<Message, F> SwitchCanvas<Message, F>
where
    F: Fn(SwitchEvent) -> Message,
{
    fn publish(&self, event: SwitchEvent) -> Option<canvas::Action<Message>> {
        Some(canvas::Action::publish((self.on_event)(event)))
    }
}

impl<Message, F> Program<Message> for SwitchCanvas<Message, F>
where
    Message: Clone,
    F: Fn(SwitchEvent) -> Message,
{
    type State = SwitchPointer;

    fn update(
        &self,
        pointer: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let inside = cursor.is_over(bounds);
                match (pointer.over, inside) {
                    (false, true) => {
                        pointer.over = true;
                        let position = cursor.position()?;
                        self.publish(SwitchEvent::HoverStart {
                            anchor: bounds.position(),
                            pointer: position,
                        })
                    }
                    (true, true) => {
                        let position = cursor.position()?;
                        self.publish(SwitchEvent::HoverMove(position))
                    }
                    (true, false) => {
                        pointer.over = false;
                        pointer.pressed = false;
                        self.publish(SwitchEvent::HoverEnd)
                    }
                    (false, false) => None,
                }
            }
            Event::Mouse(mouse::Event::CursorLeft) if pointer.over => {
                pointer.over = false;
                pointer.pressed = false;
                self.publish(SwitchEvent::HoverEnd)
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
                if cursor.is_over(bounds) =>
            {
                pointer.pressed = true;
                Some(canvas::Action::capture())
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let was_pressed = std::mem::take(&mut pointer.pressed);
                if was_pressed && cursor.is_over(bounds) {
                    self.publish(SwitchEvent::Press)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn mouse_interaction(
        &self,
        _pointer: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) && self.layout.outer.style.cursor == Cursor::Pointer {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _pointer: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let outer = &self.layout.outer;

        draw_box(
            &mut frame,
            Point::ORIGIN,
            Size::new(outer.size.width, outer.size.height),
            &outer.style,
        );

        // Committed first so the preview is drawn on top of it
        let committed = IndicatorBox {
            transform: self.layout.committed.transform.with_offset(self.committed_offset),
            ..self.layout.committed.clone()
        };
        draw_indicator(&mut frame, &self.layout, &committed);
        draw_indicator(&mut frame, &self.layout, &self.layout.hover);

        vec![frame.into_geometry()]
    }
}

fn draw_indicator(frame: &mut Frame, layout: &SwitchLayout, indicator: &IndicatorBox) {
    let (x, y) = indicator.origin(&layout.outer);
    draw_box(
        frame,
        Point::new(x, y),
        Size::new(indicator.size.width, indicator.size.height),
        &indicator.style,
    );
}

fn draw_box(frame: &mut Frame, top_left: Point, size: Size, style: &BoxStyle) {
    if size.width <= 0.0 || size.height <= 0.0 {
        return;
    }

    let path = Path::rounded_rectangle(top_left, size, style.border_radius.into());
    frame.fill(&path, to_color(style.effective_background()));

    if style.border_width > 0.0 {
        frame.stroke(
            &path,
            Stroke::default()
                .with_color(to_color(style.effective_border()))
                .with_width(style.border_width),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound_switch::SoundSwitch;
    use switch_core::{layout, InteractionState, Orientation, SwitchConfig};

    /// 100x20 track with its top-left corner at (200, 50)
    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(200.0, 50.0), Size::new(100.0, 20.0))
    }

    fn config() -> SwitchConfig {
        SwitchConfig::new(Orientation::Horizontal, 5)
            .with_track(100.0, 20.0)
            .with_inner_thickness(10.0)
            .with_position(2)
    }

    fn program() -> SwitchCanvas<SwitchEvent, fn(SwitchEvent) -> SwitchEvent> {
        let config = config();
        let layout = layout(&config, &InteractionState::new(config.position)).unwrap();
        SwitchCanvas {
            committed_offset: layout.committed.transform.offset,
            layout,
            on_event: |event| event,
        }
    }

    /// Feed one event and return the published event, if any
    fn send(
        program: &SwitchCanvas<SwitchEvent, fn(SwitchEvent) -> SwitchEvent>,
        pointer: &mut SwitchPointer,
        event: mouse::Event,
        cursor: mouse::Cursor,
    ) -> Option<SwitchEvent> {
        program
            .update(pointer, &Event::Mouse(event), bounds(), cursor)
            .and_then(|action| action.into_inner().0)
    }

    fn move_to(
        program: &SwitchCanvas<SwitchEvent, fn(SwitchEvent) -> SwitchEvent>,
        pointer: &mut SwitchPointer,
        position: Point,
    ) -> Option<SwitchEvent> {
        send(
            program,
            pointer,
            mouse::Event::CursorMoved { position },
            mouse::Cursor::Available(position),
        )
    }

    fn button(
        program: &SwitchCanvas<SwitchEvent, fn(SwitchEvent) -> SwitchEvent>,
        pointer: &mut SwitchPointer,
        pressed: bool,
        position: Point,
    ) -> Option<SwitchEvent> {
        let event = if pressed {
            mouse::Event::ButtonPressed(mouse::Button::Left)
        } else {
            mouse::Event::ButtonReleased(mouse::Button::Left)
        };
        send(program, pointer, event, mouse::Cursor::Available(position))
    }

    #[test]
    fn test_enter_publishes_hover_start_with_entry_point() {
        let program = program();
        let mut pointer = SwitchPointer::default();

        assert_eq!(move_to(&program, &mut pointer, Point::new(150.0, 60.0)), None);
        assert_eq!(
            move_to(&program, &mut pointer, Point::new(295.0, 60.0)),
            Some(SwitchEvent::HoverStart {
                anchor: Point::new(200.0, 50.0),
                pointer: Point::new(295.0, 60.0),
            })
        );
        assert!(pointer.over);
    }

    #[test]
    fn test_move_over_track_publishes_hover_move() {
        let program = program();
        let mut pointer = SwitchPointer::default();
        move_to(&program, &mut pointer, Point::new(210.0, 60.0));

        assert_eq!(
            move_to(&program, &mut pointer, Point::new(240.0, 55.0)),
            Some(SwitchEvent::HoverMove(Point::new(240.0, 55.0)))
        );
    }

    #[test]
    fn test_leaving_track_publishes_hover_end() {
        let program = program();
        let mut pointer = SwitchPointer::default();
        move_to(&program, &mut pointer, Point::new(210.0, 60.0));

        assert_eq!(
            move_to(&program, &mut pointer, Point::new(210.0, 90.0)),
            Some(SwitchEvent::HoverEnd)
        );
        assert!(!pointer.over);
        // Already outside: nothing more to report
        assert_eq!(move_to(&program, &mut pointer, Point::new(210.0, 95.0)), None);
    }

    #[test]
    fn test_cursor_left_window_ends_hover() {
        let program = program();
        let mut pointer = SwitchPointer::default();
        move_to(&program, &mut pointer, Point::new(210.0, 60.0));

        assert_eq!(
            send(
                &program,
                &mut pointer,
                mouse::Event::CursorLeft,
                mouse::Cursor::Unavailable
            ),
            Some(SwitchEvent::HoverEnd)
        );
        assert_eq!(
            send(
                &program,
                &mut pointer,
                mouse::Event::CursorLeft,
                mouse::Cursor::Unavailable
            ),
            None
        );
    }

    #[test]
    fn test_release_after_press_on_track_publishes_press() {
        let program = program();
        let mut pointer = SwitchPointer::default();
        let at = Point::new(250.0, 60.0);
        move_to(&program, &mut pointer, at);

        assert_eq!(button(&program, &mut pointer, true, at), None);
        assert!(pointer.pressed);
        assert_eq!(button(&program, &mut pointer, false, at), Some(SwitchEvent::Press));
        assert!(!pointer.pressed);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let program = program();
        let mut pointer = SwitchPointer::default();
        let at = Point::new(250.0, 60.0);
        move_to(&program, &mut pointer, at);

        assert_eq!(button(&program, &mut pointer, false, at), None);
    }

    #[test]
    fn test_no_press_after_leaving_with_button_held() {
        let program = program();
        let mut pointer = SwitchPointer::default();
        let inside = Point::new(250.0, 60.0);
        let outside = Point::new(250.0, 120.0);
        move_to(&program, &mut pointer, inside);

        button(&program, &mut pointer, true, inside);
        assert_eq!(
            move_to(&program, &mut pointer, outside),
            Some(SwitchEvent::HoverEnd)
        );
        assert_eq!(button(&program, &mut pointer, false, outside), None);

        // Coming back and releasing does not complete the old press either
        move_to(&program, &mut pointer, inside);
        assert_eq!(button(&program, &mut pointer, false, inside), None);
    }

    #[test]
    fn test_enter_and_click_commits_position_under_cursor() {
        let program = program();
        let mut pointer = SwitchPointer::default();
        let mut switch = SoundSwitch::new(config()).unwrap();
        let at = Point::new(295.0, 60.0);

        let published: Vec<SwitchEvent> = [
            move_to(&program, &mut pointer, at),
            button(&program, &mut pointer, true, at),
            button(&program, &mut pointer, false, at),
        ]
        .into_iter()
        .flatten()
        .collect();
        assert_eq!(published.len(), 2);

        let selected: Vec<usize> = published
            .into_iter()
            .filter_map(|event| switch.handle_event(event))
            .collect();
        assert_eq!(selected, vec![4]);
    }
}
