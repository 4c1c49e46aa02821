//! View function for the sound switch

use iced::widget::Canvas;
use iced::{Element, Length};

use switch_core::SwitchLayout;

use super::canvas::SwitchCanvas;
use super::SwitchEvent;

/// Create a switch element from a computed layout
///
/// `committed_offset` is where the committed indicator is drawn this frame;
/// pass `layout.committed.transform.offset` for a static switch. Pointer
/// activity is reported through `on_event`.
pub fn sound_switch<'a, Message, F>(
    layout: SwitchLayout,
    committed_offset: f32,
    on_event: F,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: Fn(SwitchEvent) -> Message + 'a,
{
    let width = layout.outer.size.width;
    let height = layout.outer.size.height;

    Canvas::new(SwitchCanvas {
        layout,
        committed_offset,
        on_event,
    })
    .width(Length::Fixed(width))
    .height(Length::Fixed(height))
    .into()
}
