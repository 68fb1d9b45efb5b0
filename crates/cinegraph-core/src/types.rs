//! Typed records for the movie graph.
//!
//! Store rows are decoded into these types at the gateway so nothing above
//! it depends on Neo4j record shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── Nodes ─────────────────────────────────────────────────────────

/// A movie as stored in the graph. `title` is the lookup key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: String,
    pub released: Option<i64>,
    pub tagline: Option<String>,
}

/// A person as stored in the graph. `name` is the lookup key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PersonRecord {
    pub name: String,
}

// ── Relationships ─────────────────────────────────────────────────

/// Person → Movie relationship types this tool reads and writes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipKind {
    ActedIn,
    Directed,
}

impl RelationshipKind {
    /// The Cypher relationship type.
    pub fn as_cypher(&self) -> &'static str {
        match self {
            Self::ActedIn => "ACTED_IN",
            Self::Directed => "DIRECTED",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_cypher())
    }
}

/// Returned when a store row carries a relationship type we do not model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown relationship type: {0}")]
pub struct UnknownRelationship(pub String);

impl FromStr for RelationshipKind {
    type Err = UnknownRelationship;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTED_IN" => Ok(Self::ActedIn),
            "DIRECTED" => Ok(Self::Directed),
            other => Err(UnknownRelationship(other.to_string())),
        }
    }
}

// ── Query Results ─────────────────────────────────────────────────

/// One search hit: enough to list and select a movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieSummary {
    pub title: String,
    pub released: Option<i64>,
}

/// Aggregated detail view of a single movie.
///
/// `actors` holds at most five distinct names in whatever order the store
/// produced them; `directors` is unbounded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieDetails {
    pub title: String,
    pub released: Option<i64>,
    pub tagline: Option<String>,
    pub actors: Vec<String>,
    pub directors: Vec<String>,
}

/// A person attached to a movie by one relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub person: PersonRecord,
    pub kind: RelationshipKind,
}

/// One row of the neighborhood query: the movie, plus the connected person
/// when the optional match found one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborhoodRow {
    pub movie: MovieRecord,
    pub connection: Option<Connection>,
}

// ── Writes ────────────────────────────────────────────────────────

/// Returned when the release year typed by the user is not an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Release year is not an integer: {0:?}")]
pub struct InvalidYear(pub String);

/// A validated request to create a movie with its director and cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub released: i64,
    /// Empty when the user left it blank.
    pub tagline: String,
    pub director: Option<String>,
    /// Trimmed, non-empty, distinct, in input order.
    pub actors: Vec<String>,
}

impl NewMovie {
    /// Build a movie from raw prompt answers.
    ///
    /// Fails before anything else is looked at if `year` does not parse.
    /// Any integer is accepted, including negative years.
    pub fn from_input(
        title: &str,
        year: &str,
        tagline: &str,
        director: &str,
        actors: &str,
    ) -> Result<Self, InvalidYear> {
        let released = parse_year(year)?;
        let director = director.trim();

        Ok(Self {
            title: title.trim().to_string(),
            released,
            tagline: tagline.trim().to_string(),
            director: (!director.is_empty()).then(|| director.to_string()),
            actors: split_names(actors),
        })
    }
}

/// Parse a release year. Any integer is accepted.
pub fn parse_year(raw: &str) -> Result<i64, InvalidYear> {
    let raw = raw.trim();
    raw.parse::<i64>().map_err(|_| InvalidYear(raw.to_string()))
}

/// Split a comma-separated name list, dropping blanks and repeats.
pub fn split_names(raw: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if !names.iter().any(|seen| seen == name) {
            names.push(name.to_string());
        }
    }
    names
}
