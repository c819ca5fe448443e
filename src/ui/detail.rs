use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};

use crate::state::data::Movie;
use crate::Message;

/// Panel for the movie the user last selected on the shelf
pub fn detail(movie: &Movie, is_favorite: bool) -> Element<'_, Message> {
    let mut facts = vec![movie.category_label().to_string()];
    if movie.rating.is_some() {
        facts.push(format!("★ {}", movie.rating_label()));
    }
    if let Some(badge) = movie.badge() {
        facts.push(badge.label().to_string());
    }

    let favorite_label = if is_favorite { "Remove from favorites" } else { "Add to favorites" };

    let content = row![
        column![
            text(&movie.title).size(22),
            text(facts.join("  ·  ")).size(14).color(Color::from_rgb8(0x9c, 0xa3, 0xaf)),
        ]
        .spacing(6),
        horizontal_space(),
        button(favorite_label)
            .on_press(Message::ToggleFavorite(movie.id.clone()))
            .padding(10),
        button("Close").on_press(Message::CloseDetail).padding(10),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::from_rgb8(0x1a, 0x1a, 0x1a))),
            border: Border {
                color: Color::from_rgba(1.0, 1.0, 1.0, 0.08),
                width: 1.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        })
        .into()
}
