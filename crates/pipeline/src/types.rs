//! Output types of the scoring stage.

use data_loader::MovieAttributes;
use serde::{Deserialize, Serialize};
use sources::Candidate;

/// Which attribute positions matched the seed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub genre: bool,
    pub director: bool,
    pub year: bool,
}

impl MatchBreakdown {
    /// Compare `candidate` to `seed` position by position
    pub fn between(seed: &MovieAttributes, candidate: &MovieAttributes) -> Self {
        let [genre, director, year] = seed.matches(candidate);
        Self {
            genre,
            director,
            year,
        }
    }

    /// Number of matching positions (0..=3)
    pub fn count(&self) -> usize {
        [self.genre, self.director, self.year]
            .iter()
            .filter(|&&m| m)
            .count()
    }

    /// Matching positions as a fraction of all positions
    pub fn ratio(&self) -> f64 {
        self.count() as f64 / MovieAttributes::ARITY as f64
    }

    /// Names of the matching attributes, in positional order
    pub fn matched_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.genre {
            names.push("genre");
        }
        if self.director {
            names.push("director");
        }
        if self.year {
            names.push("year");
        }
        names
    }
}

/// A candidate together with its similarity to the seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    /// Similarity in [0.0, 1.0]
    pub score: f64,
    pub matched: MatchBreakdown,
}
