//! Write operations for the movie graph.
//!
//! People are merged by name so re-adding a director or actor reuses the
//! existing node, and relationships are merged so they are never doubled.

use neo4rs::query;

use cinegraph_core::NewMovie;

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    /// Create a movie and link its director and cast, in one transaction.
    ///
    /// The movie node itself is always created, even if another movie with
    /// the same title exists.
    pub async fn create_movie(&self, movie: &NewMovie) -> Result<(), GraphError> {
        let q = query(
            "CREATE (m:Movie {title: $title, released: $released, tagline: $tagline})
             WITH m
             FOREACH (name IN $directors |
               MERGE (d:Person {name: name})
               MERGE (d)-[:DIRECTED]->(m))
             FOREACH (name IN $actors |
               MERGE (p:Person {name: name})
               MERGE (p)-[:ACTED_IN]->(m))",
        )
        .param("title", movie.title.clone())
        .param("released", movie.released)
        .param("tagline", movie.tagline.clone())
        .param("directors", opt_list(&movie.director))
        .param("actors", movie.actors.clone());

        let mut txn = self.start_txn().await?;
        txn.run(q).await?;
        txn.commit().await?;

        tracing::info!(
            title = %movie.title,
            released = movie.released,
            actors = movie.actors.len(),
            "Created movie"
        );
        Ok(())
    }
}

// ── Helpers ──────────────────────────────────────────────────────

fn opt_list(opt: &Option<String>) -> Vec<String> {
    opt.iter().cloned().collect()
}
