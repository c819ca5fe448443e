use iced::widget::image::Handle;

use crate::state::data::Movie;

/// Poster shown when the movie's own thumbnail cannot be loaded
pub const FALLBACK_POSTER_URI: &str = "https://via.placeholder.com/300x450/111/555?text=No+Image";

/// Image loading progress of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
    Errored,
}

/// Per-tile poster state.
///
/// Created together with its tile and dropped with it. Moves out of
/// `Pending` at most once; `Loaded` and `Errored` are terminal.
#[derive(Debug, Clone, Default)]
pub struct PosterState {
    load: LoadState,
    handle: Option<Handle>,
}

impl PosterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn is_loaded(&self) -> bool {
        self.load == LoadState::Loaded
    }

    pub fn is_errored(&self) -> bool {
        self.load == LoadState::Errored
    }

    /// Decoded poster, present only once loaded
    pub fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    /// Record a successful load. Returns false if the state was already terminal.
    pub fn loaded(&mut self, handle: Handle) -> bool {
        if self.load != LoadState::Pending {
            return false;
        }
        self.load = LoadState::Loaded;
        self.handle = Some(handle);
        true
    }

    /// Record a failed load. Returns false if the state was already terminal.
    pub fn errored(&mut self) -> bool {
        if self.load != LoadState::Pending {
            return false;
        }
        self.load = LoadState::Errored;
        true
    }

    /// URI the tile is currently showing for this movie
    pub fn image_source<'a>(&self, movie: &'a Movie) -> &'a str {
        if self.is_errored() {
            FALLBACK_POSTER_URI
        } else {
            movie.thumbnail().unwrap_or_default()
        }
    }
}
