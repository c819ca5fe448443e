use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the catalog to open at startup
pub const CATALOG_ENV: &str = "MOVIE_SHELF_CATALOG";

/// Startup configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Catalog to load on startup, if any
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from the process arguments and environment
    pub fn from_env() -> Self {
        let default = Self::default_catalog_path().filter(|path| path.exists());
        Self::resolve(std::env::args().skip(1), std::env::var_os(CATALOG_ENV), default)
    }

    /// Pick the catalog path: first CLI argument, then the environment, then the default
    pub fn resolve(
        args: impl IntoIterator<Item = String>,
        env: Option<OsString>,
        default: Option<PathBuf>,
    ) -> Self {
        let catalog_path = args
            .into_iter()
            .find(|arg| !arg.is_empty())
            .map(PathBuf::from)
            .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
            .or(default);

        AppConfig { catalog_path }
    }

    /// Where the catalog lives when nothing else is configured:
    /// - Linux: ~/.local/share/movie-shelf/catalog.json
    /// - macOS: ~/Library/Application Support/movie-shelf/catalog.json
    /// - Windows: %APPDATA%\movie-shelf\catalog.json
    pub fn default_catalog_path() -> Option<PathBuf> {
        let mut path = dirs::data_dir().or_else(dirs::home_dir)?;
        path.push("movie-shelf");
        path.push("catalog.json");
        Some(path)
    }
}
