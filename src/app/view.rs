// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! Live preview on top, caption input and buttons below it, then a status
//! line for the last capture.

use crate::app::state::{AppModel, Message};
use crate::backends::camera::SurfaceStatus;
use crate::constants::{capture, ui};
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the main application view
    pub fn view(&self) -> Element<'_, Message> {
        let controls = widget::row()
            .push(
                widget::text_input("", self.caption.get())
                    .on_input(Message::CaptionEdited)
                    .width(Length::Fixed(ui::CAPTION_INPUT_WIDTH)),
            )
            .push(
                widget::button::standard(ui::KEYBOARD_BUTTON_LABEL)
                    .on_press(Message::ToggleKeyboard),
            )
            .push(
                widget::button::suggested(ui::CAPTURE_BUTTON_LABEL)
                    .on_press_maybe((!self.is_saving).then_some(Message::Capture)),
            )
            .spacing(5)
            .align_y(Alignment::Center);

        let mut content = widget::column()
            .push(self.build_camera_canvas())
            .push(controls)
            .spacing(ui::CONTENT_PADDING)
            .padding(ui::CONTENT_PADDING)
            .align_x(Alignment::Center);

        if let Some(status) = &self.status {
            let line = widget::text::caption(status.text().to_string());
            content = content.push(if status.is_error() {
                widget::container(line).style(|_theme| widget::container::Style {
                    text_color: Some(Color::from_rgb(0.9, 0.2, 0.2)),
                    ..Default::default()
                })
            } else {
                widget::container(line)
            });
        }

        widget::container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Fixed-size video canvas; shows a status message instead of video when
    /// the camera is not streaming
    fn build_camera_canvas(&self) -> Element<'_, Message> {
        let width = Length::Fixed(capture::FRAME_WIDTH as f32);
        let height = Length::Fixed(capture::FRAME_HEIGHT as f32);

        let inner: Element<'_, Message> = match (self.capture.status(), &self.preview) {
            (SurfaceStatus::Unavailable(err), _) => {
                widget::text::body(err.to_string()).into()
            }
            (_, Some(handle)) => widget::image::Image::new(handle.clone())
                .content_fit(cosmic::iced::ContentFit::None)
                .width(width)
                .height(height)
                .into(),
            (SurfaceStatus::Stopped, None) => widget::text::body("Camera stopped").into(),
            (_, None) => widget::text::body("Waiting for camera…").into(),
        };

        widget::container(inner)
            .width(width)
            .height(height)
            .align_x(Alignment::Start)
            .align_y(Alignment::Start)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::BLACK)),
                text_color: Some(Color::WHITE),
                ..Default::default()
            })
            .into()
    }
}
