use iced::widget::image::Handle;
use iced::widget::{button, column, horizontal_space, row, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use tracing::{debug, info, warn};

mod config;
mod poster;
mod state;
mod ui;

use config::AppConfig;
use poster::loader::{self, PosterError};
use poster::PosterState;
use state::catalog::{Catalog, CatalogError};
use state::data::Movie;
use state::favorites::Favorites;

/// Main application state
struct MovieShelf {
    /// Movies currently on the shelf
    catalog: Catalog,
    /// Poster state for each movie, same order as the catalog
    posters: Vec<PosterState>,
    /// Bumped every time a catalog replaces the shelf
    generation: u64,
    favorites: Favorites,
    /// Movie shown in the detail panel
    selected: Option<Movie>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Open Catalog" button
    OpenCatalog,
    /// Background catalog load finished
    CatalogLoaded(Result<Catalog, CatalogError>),
    /// Background poster load finished for one tile
    PosterLoaded {
        generation: u64,
        index: usize,
        result: Result<Handle, PosterError>,
    },
    /// Heart pressed on a tile (or the detail panel)
    ToggleFavorite(String),
    /// Tile pressed anywhere outside the heart
    Select(Movie),
    CloseDetail,
}

impl MovieShelf {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        Self::with_config(AppConfig::from_env())
    }

    fn with_config(config: AppConfig) -> (Self, Task<Message>) {
        let mut shelf = MovieShelf {
            catalog: Catalog::default(),
            posters: Vec::new(),
            generation: 0,
            favorites: Favorites::new(),
            selected: None,
            status: "Ready. Open a catalog to get started.".to_string(),
        };

        let task = match config.catalog_path {
            Some(path) => shelf.open(path),
            None => Task::none(),
        };

        (shelf, task)
    }

    /// Start loading a catalog in the background
    fn open(&mut self, path: PathBuf) -> Task<Message> {
        info!(path = %path.display(), "opening catalog");
        self.status = format!("Loading {}...", path.display());
        Task::perform(Catalog::load(path), Message::CatalogLoaded)
    }

    /// Replace the shelf with a freshly loaded catalog.
    ///
    /// Every previous tile is dropped along with its poster state; a poster
    /// load is started for each new tile.
    fn replace_catalog(&mut self, catalog: Catalog) -> Task<Message> {
        self.generation += 1;
        self.posters = vec![PosterState::new(); catalog.movies.len()];
        self.selected = None;

        let generation = self.generation;
        let loads = catalog.movies.iter().enumerate().map(|(index, movie)| {
            Task::perform(
                loader::load(movie.thumbnail.clone(), catalog.base_dir.clone()),
                move |result| Message::PosterLoaded {
                    generation,
                    index,
                    result,
                },
            )
        });
        let task = Task::batch(loads.collect::<Vec<_>>());

        self.catalog = catalog;
        self.status = self.summary();
        task
    }

    /// Status line for the current shelf
    fn summary(&self) -> String {
        let mut summary = format!(
            "{} movies, {} favorites.",
            self.catalog.movies.len(),
            self.favorites.len()
        );
        if self.catalog.skipped > 0 {
            summary.push_str(&format!(" Skipped {} unreadable entries.", self.catalog.skipped));
        }

        // Remote posters fall back to "No Image"; say why
        let remote = self
            .catalog
            .movies
            .iter()
            .filter(|movie| movie.thumbnail().is_some_and(loader::is_remote))
            .count();
        if remote > 0 {
            summary.push_str(&format!(" {remote} web posters are not downloaded, only local files are shown."));
        }
        summary
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenCatalog => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Open Movie Catalog")
                    .add_filter("Movie catalog", &["json"])
                    .pick_file();

                // Cancelled dialogs leave the shelf as it is
                match file {
                    Some(path) => self.open(path),
                    None => Task::none(),
                }
            }
            Message::CatalogLoaded(Ok(catalog)) => self.replace_catalog(catalog),
            Message::CatalogLoaded(Err(e)) => {
                warn!(error = %e, "catalog load failed");
                self.status = format!("Could not open catalog: {e}");
                Task::none()
            }
            Message::PosterLoaded {
                generation,
                index,
                result,
            } => {
                // Results for tiles from a replaced catalog have nowhere to go
                if generation != self.generation {
                    debug!(generation, index, "dropping poster for a replaced shelf");
                    return Task::none();
                }

                // Each tile leaves Pending once; later results are ignored
                if let Some(poster) = self.posters.get_mut(index) {
                    match result {
                        Ok(handle) => {
                            poster.loaded(handle);
                        }
                        Err(e) => {
                            debug!(index, error = %e, "poster unavailable, using fallback");
                            poster.errored();
                        }
                    }
                }
                Task::none()
            }
            Message::ToggleFavorite(id) => {
                // Favorites live here; tiles only get a bool per render
                let favorite = self.favorites.toggle(&id);
                debug!(%id, favorite, "favorite toggled");
                self.status = self.summary();
                Task::none()
            }
            Message::Select(movie) => {
                debug!(id = %movie.id, "movie selected");
                self.selected = Some(movie);
                Task::none()
            }
            Message::CloseDetail => {
                self.selected = None;
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = row![
            text("Movie Shelf").size(28),
            horizontal_space(),
            text(&self.status).size(14),
            button("Open Catalog")
                .on_press(Message::OpenCatalog)
                .padding(10),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        let mut content: Column<Message> = column![header].spacing(16).padding(20);

        // Detail panel sits between the header and the shelf
        if let Some(movie) = &self.selected {
            content = content.push(ui::detail(movie, self.favorites.contains(&movie.id)));
        }

        content
            .push(ui::shelf(&self.catalog.movies, &self.posters, &self.favorites))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application("Movie Shelf", MovieShelf::update, MovieShelf::view)
        .theme(MovieShelf::theme)
        .centered()
        .run_with(MovieShelf::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::sample_movie;

    fn shelf_with(movies: Vec<Movie>) -> MovieShelf {
        let (mut shelf, _) = MovieShelf::with_config(AppConfig::default());
        let _ = shelf.replace_catalog(Catalog {
            movies,
            ..Catalog::default()
        });
        shelf
    }

    fn pixel() -> Handle {
        Handle::from_rgba(1, 1, vec![0u8, 0, 0, 255])
    }

    #[test]
    fn test_catalog_creates_pending_tiles() {
        let shelf = shelf_with(vec![sample_movie(), Movie { id: "m2".to_string(), ..sample_movie() }]);

        assert_eq!(shelf.generation, 1);
        assert_eq!(shelf.posters.len(), 2);
        assert!(shelf.posters.iter().all(|p| !p.is_loaded() && !p.is_errored()));
    }

    #[test]
    fn test_poster_results_drive_tile_state() {
        let mut shelf = shelf_with(vec![sample_movie(), Movie { id: "m2".to_string(), ..sample_movie() }]);

        let _ = shelf.update(Message::PosterLoaded {
            generation: 1,
            index: 0,
            result: Ok(pixel()),
        });
        let _ = shelf.update(Message::PosterLoaded {
            generation: 1,
            index: 1,
            result: Err(PosterError::Remote("http://x/ok.jpg".to_string())),
        });

        assert!(shelf.posters[0].is_loaded());
        assert!(shelf.posters[1].is_errored());
        assert_eq!(
            shelf.posters[1].image_source(&shelf.catalog.movies[1]),
            poster::FALLBACK_POSTER_URI
        );
    }

    #[test]
    fn test_stale_poster_results_are_dropped() {
        let mut shelf = shelf_with(vec![sample_movie()]);
        let _ = shelf.replace_catalog(Catalog {
            movies: vec![sample_movie()],
            ..Catalog::default()
        });

        let _ = shelf.update(Message::PosterLoaded {
            generation: 1,
            index: 0,
            result: Err(PosterError::MissingThumbnail),
        });

        assert_eq!(shelf.generation, 2);
        assert!(!shelf.posters[0].is_errored());
    }

    #[test]
    fn test_toggle_favorite_and_select() {
        let mut shelf = shelf_with(vec![sample_movie()]);

        let _ = shelf.update(Message::ToggleFavorite("m1".to_string()));
        assert!(shelf.favorites.contains("m1"));
        assert!(shelf.selected.is_none());

        let _ = shelf.update(Message::Select(sample_movie()));
        assert_eq!(shelf.selected, Some(sample_movie()));

        let _ = shelf.update(Message::CloseDetail);
        assert!(shelf.selected.is_none());
        assert!(shelf.favorites.contains("m1"));
    }

    #[test]
    fn test_status_explains_remote_posters() {
        let local = Movie {
            thumbnail: Some("posters/ok.jpg".to_string()),
            ..sample_movie()
        };
        let shelf = shelf_with(vec![local.clone()]);
        assert!(!shelf.status.contains("web posters"));

        let shelf = shelf_with(vec![sample_movie(), local]);
        assert!(shelf.status.contains("1 web posters are not downloaded"));
    }

    #[test]
    fn test_failed_catalog_keeps_shelf() {
        let mut shelf = shelf_with(vec![sample_movie()]);

        let _ = shelf.update(Message::CatalogLoaded(Err(CatalogError::NotAnArray)));

        assert_eq!(shelf.catalog.movies.len(), 1);
        assert_eq!(shelf.generation, 1);
        assert!(shelf.status.contains("Could not open catalog"));
    }
}
