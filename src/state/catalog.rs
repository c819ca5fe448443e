use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::data::Movie;

/// Errors that can occur while loading a catalog file
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },
    #[error("catalog is not valid JSON: {0}")]
    Parse(String),
    #[error("catalog must be a JSON array of movies")]
    NotAnArray,
}

/// A loaded movie catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Movies in file order
    pub movies: Vec<Movie>,
    /// Directory relative thumbnail paths are resolved against
    pub base_dir: PathBuf,
    /// Number of rows that could not be read as movies
    pub skipped: usize,
}

impl Catalog {
    /// Load a catalog from disk
    /// Runs in the background so the UI stays responsive
    pub async fn load(path: PathBuf) -> Result<Self, CatalogError> {
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| CatalogError::Read {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let catalog = Self::from_json(&contents, base_dir)?;

        info!(
            path = %path.display(),
            movies = catalog.movies.len(),
            skipped = catalog.skipped,
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a catalog from JSON text.
    ///
    /// Malformed rows are skipped rather than failing the whole file.
    pub fn from_json(json: &str, base_dir: PathBuf) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        let Value::Array(rows) = value else {
            return Err(CatalogError::NotAnArray);
        };

        let mut movies = Vec::with_capacity(rows.len());
        let mut skipped = 0;
        for (index, row) in rows.into_iter().enumerate() {
            match serde_json::from_value::<Movie>(row) {
                Ok(movie) => movies.push(movie),
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed catalog row");
                    skipped += 1;
                }
            }
        }

        Ok(Catalog { movies, base_dir, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let json = r#"[
            {"id": "m1", "title": "Test", "thumbnail": "posters/ok.jpg", "category": "Action", "rating": 8.5},
            {"id": "m2", "title": "Seoul Nights", "category": "Korean Drama", "isExclusive": true}
        ]"#;

        let catalog = Catalog::from_json(json, PathBuf::from("/data")).unwrap();

        assert_eq!(catalog.movies.len(), 2);
        assert_eq!(catalog.skipped, 0);
        assert_eq!(catalog.movies[0].rating, Some(8.5));
        assert_eq!(catalog.movies[1].category_label(), "K-Drama");
        assert_eq!(catalog.base_dir, PathBuf::from("/data"));
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let json = r#"[
            {"id": "m1"},
            {"title": "No id"},
            "not a movie",
            {"id": "m3", "rating": "high"}
        ]"#;

        let catalog = Catalog::from_json(json, PathBuf::new()).unwrap();

        assert_eq!(catalog.movies.len(), 1);
        assert_eq!(catalog.movies[0].id, "m1");
        assert_eq!(catalog.skipped, 3);
    }

    #[test]
    fn test_non_array_is_rejected() {
        let err = Catalog::from_json(r#"{"movies": []}"#, PathBuf::new()).unwrap_err();
        assert!(matches!(err, CatalogError::NotAnArray));

        let err = Catalog::from_json("not json", PathBuf::new()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = std::env::temp_dir().join(format!("movie-shelf-catalog-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.json");
        std::fs::write(&path, r#"[{"id": "m1", "title": "Test"}]"#).unwrap();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let catalog = runtime.block_on(Catalog::load(path)).unwrap();

        assert_eq!(catalog.movies.len(), 1);
        assert_eq!(catalog.base_dir, dir);

        let missing = runtime.block_on(Catalog::load(dir.join("missing.json")));
        assert!(matches!(missing, Err(CatalogError::Read { .. })));

        std::fs::remove_dir_all(&dir).ok();
    }
}
