//! Poster tile for a single movie
//!
//! The tile owns no state. Favorite status and load progress come in from
//! the application, and both interactions go back out as messages built by
//! the two callbacks it was given. The callbacks only run when the matching
//! part of the tile is actually pressed.

use std::borrow::Cow;
use std::rc::Rc;

use iced::widget::{button, column, container, horizontal_space, image, row, text, vertical_space, Stack};
use iced::{font, gradient, Background, Border, Color, ContentFit, Element, Font, Length, Radians, Shadow, Theme, Vector};

use crate::poster::{state::LoadState, PosterState};
use crate::state::data::{Badge, Movie};

/// Tile width in logical pixels
pub const TILE_WIDTH: f32 = 150.0;
/// Tile height in logical pixels, keeping the 2:3 poster ratio
pub const TILE_HEIGHT: f32 = 225.0;

/// Titles longer than this are cut with an ellipsis (about two footer lines)
const TITLE_MAX_CHARS: usize = 36;
/// Two lines of 13px bold text
const TITLE_MAX_HEIGHT: f32 = 36.0;

const RADIUS: f32 = 14.0;
const GOLD: Color = Color {
    r: 0.83,
    g: 0.69,
    b: 0.22,
    a: 1.0,
};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Where on the tile a press landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The heart button in the top-left corner
    Favorite,
    /// Anywhere else, including the bookmark indicator
    Body,
}

/// Bookmark indicator glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bookmark {
    Filled,
    Outline,
}

impl Bookmark {
    fn glyph(self) -> &'static str {
        match self {
            Bookmark::Filled => "✓",
            Bookmark::Outline => "+",
        }
    }
}

/// What fills the poster area behind the overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    /// Neutral gradient while the poster is still loading
    Skeleton,
    /// The decoded poster
    Poster,
    /// The fixed "No Image" poster
    Fallback,
}

/// Everything visible on a tile, resolved from its inputs
#[derive(Debug, Clone, PartialEq)]
pub struct Face<'a> {
    pub title: Cow<'a, str>,
    pub badge: Option<Badge>,
    pub category: &'a str,
    pub rating: String,
    pub favorite: bool,
    pub bookmark: Bookmark,
    pub image_source: &'a str,
    pub backdrop: Backdrop,
}

/// A movie poster card with favorite toggle, bookmark indicator,
/// badges and a category/rating footer.
pub struct MovieTile<'a, Message> {
    movie: &'a Movie,
    is_favorite: bool,
    poster: &'a PosterState,
    on_toggle_favorite: Box<dyn Fn(String) -> Message + 'a>,
    on_select: Box<dyn Fn(Movie) -> Message + 'a>,
}

impl<'a, Message> MovieTile<'a, Message> {
    pub fn new(
        movie: &'a Movie,
        is_favorite: bool,
        poster: &'a PosterState,
        on_toggle_favorite: impl Fn(String) -> Message + 'a,
        on_select: impl Fn(Movie) -> Message + 'a,
    ) -> Self {
        Self {
            movie,
            is_favorite,
            poster,
            on_toggle_favorite: Box::new(on_toggle_favorite),
            on_select: Box::new(on_select),
        }
    }

    /// Resolve what the tile shows
    pub fn face(&self) -> Face<'a> {
        let backdrop = match self.poster.load_state() {
            LoadState::Pending => Backdrop::Skeleton,
            LoadState::Loaded => Backdrop::Poster,
            LoadState::Errored => Backdrop::Fallback,
        };

        Face {
            title: clamp_title(&self.movie.title),
            badge: self.movie.badge(),
            category: self.movie.category_label(),
            rating: self.movie.rating_label(),
            favorite: self.is_favorite,
            bookmark: if self.is_favorite { Bookmark::Filled } else { Bookmark::Outline },
            image_source: self.poster.image_source(self.movie),
            backdrop,
        }
    }

    /// Message produced by a press on the given part of the tile.
    ///
    /// Calls exactly one of the two callbacks.
    pub fn press(&self, hit: Hit) -> Message {
        match hit {
            Hit::Favorite => (self.on_toggle_favorite)(self.movie.id.clone()),
            Hit::Body => (self.on_select)(self.movie.clone()),
        }
    }
}

impl<'a, Message: Clone + 'a> MovieTile<'a, Message> {
    pub fn view(self) -> Element<'a, Message> {
        let face = self.face();
        let poster = self.poster;

        // Shared by both press handlers; neither runs until its part is pressed
        let tile = Rc::new(self);

        let mut layers: Vec<Element<'a, Message>> = vec![backdrop(face.backdrop, poster), shade()];

        let favorite = face.favorite;
        let glyph = text(if favorite { "♥" } else { "♡" }).size(13).color(Color::WHITE);

        // The heart captures its press, so the card button below never sees it
        let on_heart = Rc::clone(&tile);
        let heart = button(container(glyph).center_x(Length::Fill).center_y(Length::Fill))
            .on_press_with(move || on_heart.press(Hit::Favorite))
            .padding(0)
            .width(28.0)
            .height(28.0)
            .style(move |_theme: &Theme, _status| button::Style {
                background: Some(Background::Color(if favorite {
                    Color::from_rgba8(239, 68, 68, 0.8)
                } else {
                    Color::from_rgba(0.0, 0.0, 0.0, 0.3)
                })),
                text_color: Color::WHITE,
                border: Border {
                    color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
                    width: 1.0,
                    radius: 14.0.into(),
                },
                shadow: Shadow::default(),
            });

        let bookmark = container(text(face.bookmark.glyph()).size(13).color(match face.bookmark {
            Bookmark::Filled => GOLD,
            Bookmark::Outline => Color::from_rgba(1.0, 1.0, 1.0, 0.7),
        }))
        .center_x(28.0)
        .center_y(28.0)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.3))),
            border: Border {
                color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
                width: 1.0,
                radius: 14.0.into(),
            },
            ..Default::default()
        });

        layers.push(container(row![heart, horizontal_space(), bookmark]).padding(8).into());

        let mut info = column![vertical_space()];
        if let Some(badge) = face.badge {
            info = info.push(badge_chip(badge));
        }
        info = info.push(footer(&face));
        layers.push(info.into());

        let card = container(
            Stack::with_children(layers)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(TILE_WIDTH)
        .height(TILE_HEIGHT)
        .clip(true)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::from_rgb8(0x11, 0x11, 0x11))),
            border: Border {
                color: Color::from_rgba(1.0, 1.0, 1.0, 0.05),
                width: 1.0,
                radius: RADIUS.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.6),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 18.0,
            },
            ..Default::default()
        });

        // The whole card is a bare button so the body press stays lazy too
        button(card)
            .on_press_with(move || tile.press(Hit::Body))
            .padding(0)
            .style(|_theme: &Theme, _status| button::Style::default())
            .into()
    }
}

impl<'a, Message: Clone + 'a> From<MovieTile<'a, Message>> for Element<'a, Message> {
    fn from(tile: MovieTile<'a, Message>) -> Self {
        tile.view()
    }
}

fn backdrop<'a, Message: 'a>(kind: Backdrop, poster: &'a PosterState) -> Element<'a, Message> {
    match (kind, poster.handle()) {
        (Backdrop::Poster, Some(handle)) => {
            let poster: image::Image<image::Handle> = image(handle.clone());
            poster
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        (Backdrop::Fallback, _) => container(text("No Image").size(14).color(Color::from_rgb8(0x55, 0x55, 0x55)))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(Color::from_rgb8(0x11, 0x11, 0x11))),
                ..Default::default()
            })
            .into(),
        _ => container(horizontal_space())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Gradient(
                    gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_4))
                        .add_stop(0.0, Color::from_rgb8(0x1a, 0x1a, 0x1a))
                        .add_stop(1.0, Color::from_rgb8(0x11, 0x11, 0x11))
                        .into(),
                )),
                ..Default::default()
            })
            .into(),
    }
}

/// Dark gradient over the bottom 65% so the footer stays readable
fn shade<'a, Message: 'a>() -> Element<'a, Message> {
    let gradient = container(horizontal_space())
        .width(Length::Fill)
        .height(Length::FillPortion(65))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Gradient(
                gradient::Linear::new(Radians(0.0))
                    .add_stop(0.0, Color::BLACK)
                    .add_stop(0.4, Color::from_rgba(0.0, 0.0, 0.0, 0.9))
                    .add_stop(1.0, Color::TRANSPARENT)
                    .into(),
            )),
            ..Default::default()
        });

    column![vertical_space().height(Length::FillPortion(35)), gradient].into()
}

fn badge_chip<'a, Message: 'a>(badge: Badge) -> Element<'a, Message> {
    let (from, to, ink) = match badge {
        Badge::Exclusive => (
            Color::from_rgb8(245, 158, 11),
            Color::from_rgb8(250, 204, 21),
            Color::BLACK,
        ),
        Badge::Upcoming => (
            Color::from_rgb8(147, 51, 234),
            Color::from_rgb8(139, 92, 246),
            Color::WHITE,
        ),
    };

    container(text(badge.label()).size(9).font(BOLD).color(ink))
        .padding([3, 10])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Gradient(
                gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_2))
                    .add_stop(0.0, from)
                    .add_stop(1.0, to)
                    .into(),
            )),
            border: Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Cut long titles so the footer never grows past two lines
fn clamp_title(title: &str) -> Cow<'_, str> {
    match title.char_indices().nth(TITLE_MAX_CHARS) {
        Some((end, _)) => Cow::Owned(format!("{}…", title[..end].trim_end())),
        None => Cow::Borrowed(title),
    }
}

fn footer<'a, Message: 'a>(face: &Face<'a>) -> Element<'a, Message> {
    let rating = container(row![
        text("★").size(10).color(GOLD),
        text(face.rating.clone()).size(10).font(BOLD).color(Color::WHITE),
    ]
    .spacing(2))
    .padding([2, 6])
    .style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.4))),
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    column![
        container(text(face.title.clone()).size(13).font(BOLD).color(Color::WHITE))
            .max_height(TITLE_MAX_HEIGHT)
            .clip(true),
        row![
            // Category keeps its full text; the frame cuts it at 70% of the tile
            container(text(face.category).size(10).color(Color::from_rgb8(0x9c, 0xa3, 0xaf)))
                .max_width(TILE_WIDTH * 0.7)
                .height(14.0)
                .clip(true),
            horizontal_space(),
            rating,
        ]
        .align_y(iced::Alignment::Center),
    ]
    .spacing(4)
    .padding(12)
    .into()
}
