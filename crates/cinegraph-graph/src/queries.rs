//! Read operations against the movie graph.

use neo4rs::{query, Row};
use serde::de::DeserializeOwned;

use cinegraph_core::{
    Connection, MovieDetails, MovieRecord, MovieSummary, NeighborhoodRow, PersonRecord,
    RelationshipKind,
};

use crate::client::{GraphClient, GraphError};

/// Maximum number of actors returned by [`GraphClient::movie_details`].
pub const DETAIL_ACTOR_LIMIT: i64 = 5;

impl GraphClient {
    // ── Search ───────────────────────────────────────────────────

    /// Case-insensitive substring search over movie titles, ordered by title.
    pub async fn search_movies(&self, term: &str) -> Result<Vec<MovieSummary>, GraphError> {
        let q = query(
            "MATCH (m:Movie)
             WHERE toLower(m.title) CONTAINS toLower($term)
             RETURN m.title AS title, m.released AS released
             ORDER BY m.title",
        )
        .param("term", term.to_string());

        let rows = self.query_rows(q).await?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            results.push(MovieSummary {
                title: field(&row, "title")?,
                released: field(&row, "released")?,
            });
        }

        tracing::debug!(term, hits = results.len(), "Movie search");
        Ok(results)
    }

    // ── Details ──────────────────────────────────────────────────

    /// Directors and up to five actors of a movie. `None` if the title is gone.
    ///
    /// The actor sample is whatever five distinct names the store collects
    /// first; no ordering is imposed.
    pub async fn movie_details(&self, title: &str) -> Result<Option<MovieDetails>, GraphError> {
        let q = query(
            "MATCH (m:Movie {title: $title})
             OPTIONAL MATCH (p:Person)-[:ACTED_IN]->(m)
             OPTIONAL MATCH (d:Person)-[:DIRECTED]->(m)
             RETURN m.title AS title,
                    m.released AS released,
                    m.tagline AS tagline,
                    collect(DISTINCT p.name)[..$actor_limit] AS actors,
                    collect(DISTINCT d.name) AS directors",
        )
        .param("title", title.to_string())
        .param("actor_limit", DETAIL_ACTOR_LIMIT);

        match self.query_one(q).await? {
            Some(row) => Ok(Some(MovieDetails {
                title: field(&row, "title")?,
                released: field(&row, "released")?,
                tagline: field(&row, "tagline")?,
                actors: field(&row, "actors")?,
                directors: field(&row, "directors")?,
            })),
            None => Ok(None),
        }
    }

    // ── Neighborhood ─────────────────────────────────────────────

    /// One row per person attached to the movie by ACTED_IN or DIRECTED.
    ///
    /// A movie with no people still yields a single row with no connection.
    /// An unknown title yields no rows.
    pub async fn movie_neighborhood(
        &self,
        title: &str,
    ) -> Result<Vec<NeighborhoodRow>, GraphError> {
        let q = query(
            "MATCH (m:Movie {title: $title})
             OPTIONAL MATCH (p:Person)-[r:ACTED_IN|DIRECTED]->(m)
             RETURN m.title AS title,
                    m.released AS released,
                    m.tagline AS tagline,
                    p.name AS person,
                    type(r) AS rel_type",
        )
        .param("title", title.to_string());

        let rows = self.query_rows(q).await?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            results.push(decode_neighborhood_row(&row)?);
        }
        Ok(results)
    }
}

fn decode_neighborhood_row(row: &Row) -> Result<NeighborhoodRow, GraphError> {
    let movie = MovieRecord {
        title: field(row, "title")?,
        released: field(row, "released")?,
        tagline: field(row, "tagline")?,
    };

    let person: Option<String> = field(row, "person")?;
    let rel_type: Option<String> = field(row, "rel_type")?;

    let connection = match (person, rel_type) {
        (Some(name), Some(rel)) => Some(Connection {
            person: PersonRecord { name },
            kind: rel.parse::<RelationshipKind>().map_err(|e| GraphError::Decode {
                field: "rel_type",
                reason: e.to_string(),
            })?,
        }),
        (None, _) => None,
        (Some(_), None) => {
            return Err(GraphError::Decode {
                field: "rel_type",
                reason: "person present without a relationship type".to_string(),
            })
        }
    };

    Ok(NeighborhoodRow { movie, connection })
}

/// Read one named column, mapping decode failures to [`GraphError::Decode`].
fn field<T: DeserializeOwned>(row: &Row, name: &'static str) -> Result<T, GraphError> {
    row.get::<T>(name).map_err(|e| GraphError::Decode {
        field: name,
        reason: e.to_string(),
    })
}
