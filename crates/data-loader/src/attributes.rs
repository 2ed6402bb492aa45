//! Per-movie attribute table.

use crate::types::{MovieAttributes, MovieId};
use std::collections::HashMap;

/// Maps a movie id to its (genre, director, year) attributes.
///
/// A movie without attributes is simply absent from the table.
#[derive(Debug, Clone, Default)]
pub struct AttributeTable {
    entries: HashMap<MovieId, MovieAttributes>,
}

impl AttributeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the attributes for `movie`, replacing any earlier entry
    pub fn set_attributes(&mut self, movie: impl Into<MovieId>, attrs: MovieAttributes) {
        self.entries.insert(movie.into(), attrs);
    }

    pub fn attributes_of(&self, movie: &str) -> Option<&MovieAttributes> {
        self.entries.get(movie)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut table = AttributeTable::new();
        table.set_attributes("Alien", MovieAttributes::new("horror", "Scott", "1979"));

        let attrs = table.attributes_of("Alien").unwrap();
        assert_eq!(attrs.genre, "horror");
        assert_eq!(attrs.director, "Scott");
        assert_eq!(attrs.year, "1979");
        assert!(table.attributes_of("Heat").is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let mut table = AttributeTable::new();
        table.set_attributes("Alien", MovieAttributes::new("horror", "Scott", "1979"));
        table.set_attributes("Alien", MovieAttributes::new("scifi", "Cameron", "1986"));

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.attributes_of("Alien"),
            Some(&MovieAttributes::new("scifi", "Cameron", "1986"))
        );
    }
}
