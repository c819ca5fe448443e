/// Poster image module
///
/// This module handles:
/// - Resolving thumbnail URIs to local files
/// - Decoding and scaling posters off the UI thread
/// - Tracking per-tile load state and the fallback poster

pub mod loader;
pub mod state;

pub use state::{PosterState, FALLBACK_POSTER_URI};
