use iced::widget::{
    scrollable, text_input, Button, Column, Container, Row, Scrollable, Space, Text, TextInput,
};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::app_state::FormState;
use crate::client::models::messages::Message;

// Color palette for the form card and output area
const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36); // Muted indigo for the card body
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26); // Input background
const OUTPUT_BG: Color = Color::from_rgb(0.10, 0.11, 0.22); // Output background
const ACCENT_COLOR: Color = Color::from_rgb(0.0, 0.7, 0.3); // Green accent
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const MONO_FONT: Font = Font {
    family: iced::font::Family::Monospace,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

// Custom container styles
fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn output_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(OUTPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

pub fn view(state: &FormState) -> Element<Message> {
    let loading = state.loading;
    let submit_enabled = state.can_submit();

    // Header
    let title = Text::new("Invio")
        .size(42)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let subtitle = Text::new("Send text to the server and view the response below")
        .size(16)
        .style(TEXT_SECONDARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    // A text input without on_input is disabled; that is the loading state.
    let mut input = TextInput::new("Type your text here…", &state.input_text)
        .id(text_input::Id::new("input-text"))
        .width(Length::Fill)
        .padding(12)
        .size(14);
    if !loading {
        input = input
            .on_input(Message::InputChanged)
            .on_submit(if submit_enabled {
                Message::Submit
            } else {
                Message::None
            });
    }

    let input_field = Column::new()
        .spacing(8)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("✏️").font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
                .push(Text::new("Input").size(14).style(TEXT_SECONDARY)),
        )
        .push(
            Container::new(input)
                .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    // Submit button with enabled/disabled variants
    let submit_button = if submit_enabled {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("📤").font(EMOJI_FONT).size(16))
                    .push(Text::new("Send").font(BOLD_FONT).size(16).style(TEXT_PRIMARY)),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .on_press(Message::Submit)
        .style(iced::theme::Button::Primary)
        .width(Length::Fill)
        .padding(16)
    } else {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("⏳").font(EMOJI_FONT).size(16))
                    .push(
                        Text::new(if loading { "Sending..." } else { "Send" })
                            .size(16)
                            .style(TEXT_SECONDARY),
                    ),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .style(iced::theme::Button::Secondary)
        .width(Length::Fill)
        .padding(16)
    };

    // Loading indicator
    let loading_element: Element<Message> = if loading {
        Container::new(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("⏳").font(EMOJI_FONT).size(16))
                .push(Text::new("Waiting for the server...").size(14).style(ACCENT_COLOR)),
        )
        .width(Length::Fill)
        .center_x()
        .padding(8)
        .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    // Read-only output area
    let output_body: Element<Message> = if state.output_text.is_empty() {
        Text::new("Server response will appear here…")
            .size(14)
            .style(TEXT_SECONDARY)
            .into()
    } else {
        Text::new(&state.output_text)
            .size(14)
            .font(MONO_FONT)
            .style(TEXT_PRIMARY)
            .into()
    };

    let output_area = Column::new()
        .spacing(8)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("📥").font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
                .push(Text::new("Output").size(14).style(TEXT_SECONDARY)),
        )
        .push(
            Container::new(
                Scrollable::new(Container::new(output_body).width(Length::Fill).padding(12))
                    .id(scrollable::Id::new("output-text"))
                    .height(Length::Fixed(260.0)),
            )
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(output_appearance))),
        );

    // Main card content
    let card_content = Column::new()
        .width(Length::Fixed(560.0))
        .spacing(24)
        .padding(32)
        .align_items(Alignment::Center)
        .push(
            Column::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(title)
                .push(subtitle),
        )
        .push(Space::new(Length::Fill, Length::Fixed(8.0)))
        .push(input_field)
        .push(submit_button)
        .push(loading_element)
        .push(output_area);

    let card = Container::new(card_content)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let main_content = Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y();

    Container::new(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
