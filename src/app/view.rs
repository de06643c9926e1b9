//! Demo view: the widget preview above its control panel

use iced::widget::{Space, button, column, container, pick_list, row, slider, text, toggler};
use iced::{Alignment, Element, Fill};

use arc_progress::Easing;

use super::{App, Message};
use crate::theme;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let preview = container(self.widget.view())
            .width(320)
            .height(320);

        let readout = text(format!("{:.0}%", self.widget.progress() * 100.0))
            .size(32)
            .style(|iced_theme| text::Style {
                color: Some(theme::text_primary(iced_theme)),
            });

        let controls = column![
            control_row(
                "Start angle",
                format!("{:.0}\u{B0}", self.widget.start_angle()),
                slider(0.0..=360.0, self.widget.start_angle(), Message::StartAngleChanged)
                    .step(1.0)
                    .style(theme::control_slider)
                    .into(),
            ),
            control_row(
                "Sweep range",
                format!("{:.0}\u{B0}", self.widget.range()),
                slider(0.0..=360.0, self.widget.range(), Message::RangeChanged)
                    .step(1.0)
                    .style(theme::control_slider)
                    .into(),
            ),
            control_row(
                "Track width",
                format!("{:.0} px", self.widget.range_path_width()),
                slider(1.0..=40.0, self.widget.range_path_width(), Message::RangeWidthChanged)
                    .step(1.0)
                    .style(theme::control_slider)
                    .into(),
            ),
            control_row(
                "Progress width",
                format!("{:.0} px", self.widget.progress_path_width()),
                slider(
                    1.0..=40.0,
                    self.widget.progress_path_width(),
                    Message::ProgressWidthChanged
                )
                .step(1.0)
                .style(theme::control_slider)
                .into(),
            ),
            control_row(
                "Duration",
                format!("{} ms", self.widget.animation_duration()),
                slider(
                    0.0..=2000.0,
                    self.widget.animation_duration() as f32,
                    Message::DurationChanged
                )
                .step(50.0)
                .style(theme::control_slider)
                .into(),
            ),
            control_row(
                "Animate",
                String::new(),
                toggler(self.widget.is_animation_enabled())
                    .on_toggle(Message::AnimationToggled)
                    .size(24)
                    .into(),
            ),
            control_row(
                "Easing",
                String::new(),
                pick_list(Easing::ALL, Some(self.easing), Message::EasingSelected)
                    .style(theme::control_pick_list)
                    .menu_style(theme::control_pick_list_menu)
                    .width(Fill)
                    .into(),
            ),
        ]
        .spacing(12)
        .width(420);

        let buttons = row![
            button(text("+10%"))
                .on_press(Message::IncrementProgress)
                .style(theme::accent_button)
                .padding([8, 24]),
            button(text("Clear"))
                .on_press(Message::ClearProgress)
                .style(theme::plain_button)
                .padding([8, 24]),
        ]
        .spacing(12);

        let content = column![
            preview,
            readout,
            Space::new().height(12),
            controls,
            Space::new().height(8),
            buttons,
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        container(content)
            .width(Fill)
            .height(Fill)
            .center_x(Fill)
            .center_y(Fill)
            .into()
    }
}

/// A labelled control row: name on the left, value + control on the right
fn control_row<'a>(
    label: &'a str,
    value: String,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    row![
        text(label)
            .width(130)
            .style(|iced_theme| text::Style {
                color: Some(theme::text_secondary(iced_theme)),
            }),
        control,
        text(value)
            .width(60)
            .style(|iced_theme| text::Style {
                color: Some(theme::text_primary(iced_theme)),
            }),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}
