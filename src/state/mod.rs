/// State management module
///
/// This module handles all application state, including:
/// - The movie data model (data.rs)
/// - Catalog loading from JSON (catalog.rs)
/// - The in-memory favorites set (favorites.rs)

pub mod catalog;
pub mod data;
pub mod favorites;
