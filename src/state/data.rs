/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog layer and the UI layer.
use serde::Deserialize;

/// Category that gets a shorter label on the tile footer
pub const KOREAN_DRAMA: &str = "Korean Drama";

/// Category that counts as exclusive even without the flag
pub const EXCLUSIVE: &str = "Exclusive";

/// Represents a single movie in the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Unique catalog ID
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Poster URI (local path or file:// URI); None if the catalog has none
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Free-form category label (e.g., "Action", "Korean Drama")
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub is_exclusive: bool,
    #[serde(default)]
    pub is_upcoming: bool,
}

/// Promotional badge shown above the tile footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Exclusive,
    Upcoming,
}

impl Badge {
    /// Text printed inside the badge
    pub fn label(self) -> &'static str {
        match self {
            Badge::Exclusive => "✦ EXCL",
            Badge::Upcoming => "SOON",
        }
    }
}

impl Movie {
    /// Badge for this movie. Upcoming always wins over exclusive.
    pub fn badge(&self) -> Option<Badge> {
        if self.is_upcoming {
            Some(Badge::Upcoming)
        } else if self.is_exclusive || self.category == EXCLUSIVE {
            Some(Badge::Exclusive)
        } else {
            None
        }
    }

    /// Category as displayed on the tile
    pub fn category_label(&self) -> &str {
        if self.category == KOREAN_DRAMA {
            "K-Drama"
        } else {
            &self.category
        }
    }

    /// Rating as displayed on the tile, empty when absent
    pub fn rating_label(&self) -> String {
        self.rating.map(|r| r.to_string()).unwrap_or_default()
    }

    /// Thumbnail URI, treating an empty string as missing
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref().filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
pub(crate) fn sample_movie() -> Movie {
    Movie {
        id: "m1".to_string(),
        title: "Test".to_string(),
        thumbnail: Some("http://x/ok.jpg".to_string()),
        category: "Action".to_string(),
        rating: Some(8.5),
        is_exclusive: false,
        is_upcoming: false,
    }
}
