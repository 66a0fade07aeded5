//! Shared domain enums

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// Book genre classification
///
/// The wire format uses the human-readable labels ("Science Fiction"),
/// which is also how genres are stored in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Genre {
    Fantasy,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    Romance,
    Thriller,
    Mystery,
    Horror,
    Autobiography,
}

impl Genre {
    /// Every recognized genre, in declaration order
    pub const ALL: [Genre; 7] = [
        Genre::Fantasy,
        Genre::ScienceFiction,
        Genre::Romance,
        Genre::Thriller,
        Genre::Mystery,
        Genre::Horror,
        Genre::Autobiography,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fantasy => "Fantasy",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Romance => "Romance",
            Genre::Thriller => "Thriller",
            Genre::Mystery => "Mystery",
            Genre::Horror => "Horror",
            Genre::Autobiography => "Autobiography",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Genre {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_genre_parses() {
        for label in [
            "Fantasy",
            "Science Fiction",
            "Romance",
            "Thriller",
            "Mystery",
            "Horror",
            "Autobiography",
        ] {
            let genre: Genre = label.parse().unwrap();
            assert_eq!(genre.as_str(), label);
        }
    }

    #[test]
    fn unknown_genre_is_rejected() {
        assert!("invalid type".parse::<Genre>().is_err());
        assert!("".parse::<Genre>().is_err());
        assert!("fantasy".parse::<Genre>().is_err());
    }

    #[test]
    fn serde_uses_human_readable_labels() {
        let json = serde_json::to_string(&Genre::ScienceFiction).unwrap();
        assert_eq!(json, "\"Science Fiction\"");
        let genre: Genre = serde_json::from_str("\"Horror\"").unwrap();
        assert_eq!(genre, Genre::Horror);
    }
}
