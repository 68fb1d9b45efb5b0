//! The store seam the shell is written against.

use std::future::Future;

use cinegraph_core::{MovieDetails, MovieSummary, NeighborhoodRow, NewMovie};

use crate::client::{GraphClient, GraphError};

/// Parameterized reads and writes over the movie graph.
///
/// Implemented by [`GraphClient`] for Neo4j; tests supply in-memory fakes.
pub trait MovieStore {
    /// Movies whose title contains `term`, case-insensitively, ordered by title.
    fn search_movies(
        &self,
        term: &str,
    ) -> impl Future<Output = Result<Vec<MovieSummary>, GraphError>> + Send;

    /// Detail projection of one movie, or `None` if it no longer exists.
    fn movie_details(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<Option<MovieDetails>, GraphError>> + Send;

    /// Movie → person rows for the neighborhood export.
    fn movie_neighborhood(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<Vec<NeighborhoodRow>, GraphError>> + Send;

    /// Create a movie with its director and cast as one atomic write.
    fn create_movie(
        &self,
        movie: &NewMovie,
    ) -> impl Future<Output = Result<(), GraphError>> + Send;
}

impl MovieStore for GraphClient {
    async fn search_movies(&self, term: &str) -> Result<Vec<MovieSummary>, GraphError> {
        GraphClient::search_movies(self, term).await
    }

    async fn movie_details(&self, title: &str) -> Result<Option<MovieDetails>, GraphError> {
        GraphClient::movie_details(self, title).await
    }

    async fn movie_neighborhood(&self, title: &str) -> Result<Vec<NeighborhoodRow>, GraphError> {
        GraphClient::movie_neighborhood(self, title).await
    }

    async fn create_movie(&self, movie: &NewMovie) -> Result<(), GraphError> {
        GraphClient::create_movie(self, movie).await
    }
}
