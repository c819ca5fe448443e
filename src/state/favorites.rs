use std::collections::HashSet;

/// The viewer's favorite movies, keyed by movie ID.
///
/// Owned by the application; tiles only ever see a `bool` per render.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    ids: HashSet<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip favorite status for a movie and return the new status
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
