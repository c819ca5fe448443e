use iced::widget::image::Handle;
use image::imageops::FilterType;
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Size posters are scaled to (2:3, same as the fallback poster)
pub const POSTER_WIDTH: u32 = 300;
pub const POSTER_HEIGHT: u32 = 450;

/// Reasons a poster could not be loaded.
///
/// Never shown to the user; a failed poster is replaced by the fallback.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PosterError {
    #[error("movie has no thumbnail")]
    MissingThumbnail,
    #[error("remote thumbnails are not fetched: {0}")]
    Remote(String),
    #[error("failed to read {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },
    #[error("failed to decode poster: {0}")]
    Decode(String),
    #[error("decode task failed: {0}")]
    Task(String),
}

/// Whether a thumbnail points at the network (never fetched)
pub fn is_remote(uri: &str) -> bool {
    let lower = uri.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Turn a thumbnail URI into a local file path
pub fn resolve(thumbnail: Option<&str>, base_dir: &Path) -> Result<PathBuf, PosterError> {
    let uri = thumbnail
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(PosterError::MissingThumbnail)?;

    if is_remote(uri) {
        return Err(PosterError::Remote(uri.to_string()));
    }

    let path = Path::new(uri.strip_prefix("file://").unwrap_or(uri));
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(base_dir.join(path))
    }
}

/// Decode poster bytes and scale them to fill the poster frame
fn scale(bytes: &[u8]) -> Result<RgbaImage, PosterError> {
    let img = image::load_from_memory(bytes).map_err(|e| PosterError::Decode(e.to_string()))?;

    Ok(img
        .resize_to_fill(POSTER_WIDTH, POSTER_HEIGHT, FilterType::Lanczos3)
        .to_rgba8())
}

/// Decode poster bytes into an image handle ready for the tile
pub fn decode(bytes: &[u8]) -> Result<Handle, PosterError> {
    let poster = scale(bytes)?;
    let (width, height) = poster.dimensions();

    Ok(Handle::from_rgba(width, height, poster.into_raw()))
}

/// Load a movie poster in the background
pub async fn load(thumbnail: Option<String>, base_dir: PathBuf) -> Result<Handle, PosterError> {
    let path = resolve(thumbnail.as_deref(), &base_dir)?;

    let bytes = tokio::fs::read(&path).await.map_err(|e| PosterError::Read {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    // Lanczos resize is too slow for the executor threads
    tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|e| PosterError::Task(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        bytes
    }

    #[test]
    fn test_resolve_rejects_missing_and_remote() {
        let base = Path::new("/catalog");

        assert!(matches!(resolve(None, base), Err(PosterError::MissingThumbnail)));
        assert!(matches!(resolve(Some(""), base), Err(PosterError::MissingThumbnail)));
        assert!(matches!(resolve(Some("http://x/ok.jpg"), base), Err(PosterError::Remote(_))));
        assert!(matches!(resolve(Some("HTTPS://x/ok.jpg"), base), Err(PosterError::Remote(_))));

        assert!(is_remote(" https://x/ok.jpg"));
        assert!(!is_remote("posters/http-cover.jpg"));
    }

    #[test]
    fn test_resolve_local_paths() {
        let base = Path::new("/catalog");

        assert_eq!(
            resolve(Some("file:///posters/a.jpg"), base).unwrap(),
            PathBuf::from("/posters/a.jpg")
        );
        assert_eq!(
            resolve(Some("/posters/b.jpg"), base).unwrap(),
            PathBuf::from("/posters/b.jpg")
        );
        assert_eq!(
            resolve(Some("posters/c.jpg"), base).unwrap(),
            PathBuf::from("/catalog/posters/c.jpg")
        );
    }

    #[test]
    fn test_decode_scales_to_poster_size() {
        let poster = scale(&png_bytes(64, 64)).unwrap();
        assert_eq!(poster.dimensions(), (POSTER_WIDTH, POSTER_HEIGHT));
        assert!(decode(&png_bytes(64, 64)).is_ok());

        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, PosterError::Decode(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = std::env::temp_dir().join(format!("movie-shelf-poster-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("ok.png"), png_bytes(30, 45)).unwrap();
        std::fs::write(dir.join("broken.png"), b"garbage").unwrap();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let ok = runtime.block_on(load(Some("ok.png".to_string()), dir.clone()));
        assert!(ok.is_ok());

        let broken = runtime.block_on(load(Some("broken.png".to_string()), dir.clone()));
        assert!(matches!(broken, Err(PosterError::Decode(_))));

        let missing = runtime.block_on(load(Some("missing.png".to_string()), dir.clone()));
        assert!(matches!(missing, Err(PosterError::Read { .. })));

        std::fs::remove_dir_all(&dir).ok();
    }
}
