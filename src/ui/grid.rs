use iced::widget::{column, container, scrollable, text};
use iced::{Color, Element, Length};
use iced_aw::Wrap;

use super::tile::MovieTile;
use crate::poster::PosterState;
use crate::state::data::Movie;
use crate::state::favorites::Favorites;
use crate::Message;

const GAP: f32 = 12.0;

/// Lay out one tile per movie, wrapping to the window width
pub fn shelf<'a>(movies: &'a [Movie], posters: &'a [PosterState], favorites: &'a Favorites) -> Element<'a, Message> {
    if movies.is_empty() {
        let muted = Color::from_rgb8(0x9c, 0xa3, 0xaf);
        let hint = column![
            text("No movies yet. Open a catalog to fill the shelf.").color(muted),
            text("Posters are read from local files; web links show \"No Image\".").size(12).color(muted),
        ]
        .spacing(6);

        return container(hint)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let tiles: Vec<Element<'a, Message>> = movies
        .iter()
        .zip(posters)
        .map(|(movie, poster)| {
            MovieTile::new(
                movie,
                favorites.contains(&movie.id),
                poster,
                Message::ToggleFavorite,
                Message::Select,
            )
            .into()
        })
        .collect();

    scrollable(
        container(Wrap::with_elements(tiles).spacing(iced::Pixels::from(GAP)).line_spacing(iced::Pixels::from(GAP)))
            .padding(GAP)
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}
