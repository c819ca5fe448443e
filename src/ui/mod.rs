/// User interface module
///
/// - `tile.rs` - the movie poster tile
/// - `grid.rs` - wrapping shelf of tiles
/// - `detail.rs` - panel for the selected movie

pub mod detail;
pub mod grid;
pub mod tile;

pub use detail::detail;
pub use grid::shelf;
