//! Demo application state, update and view

use std::time::{Duration, Instant};

use iced::widget::{column, container, row, text};
use iced::{time, Alignment, Element, Length, Subscription, Task};

use switch_widgets::{SoundSwitch, SwitchEvent, LABEL_COLOR};

use crate::config::DemoConfig;

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer activity on the switch at this index
    Switch(usize, SwitchEvent),
    /// Animation frame
    Tick(Instant),
}

/// A switch with its label
struct LabelledSwitch {
    label: String,
    switch: SoundSwitch,
}

/// Demo application
pub struct DemoApp {
    switches: Vec<LabelledSwitch>,
}

impl DemoApp {
    /// Build the app from a validated config
    pub fn new(config: DemoConfig) -> anyhow::Result<Self> {
        let switches = config
            .switches
            .into_iter()
            .map(|entry| {
                let switch = SoundSwitch::new(entry.switch)?;
                Ok(LabelledSwitch {
                    label: entry.label,
                    switch,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self { switches })
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Switch(index, event) => {
                let Some(entry) = self.switches.get_mut(index) else {
                    log::warn!("Switch event for unknown switch {}", index);
                    return Task::none();
                };

                if let Some(position) = entry.switch.handle_event(event) {
                    if position != entry.switch.position() {
                        log::info!(
                            "{}: position {} -> {}",
                            entry.label,
                            entry.switch.position(),
                            position
                        );
                    }
                    entry.switch.set_position(position);
                }
            }
            Message::Tick(now) => {
                for entry in &mut self.switches {
                    entry.switch.tick(now);
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let rows: Vec<Element<'_, Message>> = self
            .switches
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                row![
                    text(&entry.label)
                        .size(12)
                        .color(LABEL_COLOR)
                        .width(Length::Fixed(100.0)),
                    entry
                        .switch
                        .view(move |event| Message::Switch(index, event)),
                    text(format!("{}", entry.switch.position()))
                        .size(12)
                        .color(LABEL_COLOR),
                ]
                .spacing(12)
                .align_y(Alignment::Center)
                .into()
            })
            .collect();

        container(column(rows).spacing(20))
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Frame ticks while any committed indicator is animating
    pub fn subscription(&self) -> Subscription<Message> {
        if self.switches.iter().any(|entry| entry.switch.is_animating()) {
            time::every(Duration::from_millis(16)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}
