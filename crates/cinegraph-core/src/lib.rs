//! cinegraph-core: Shared records, export, and configuration for cinegraph.
//!
//! This crate provides the pieces that do not talk to Neo4j directly:
//! - Typed movie, person, and relationship records decoded at the store boundary
//! - The neighborhood export fold and the `graph.json` writer
//! - Configuration loading
//! - Common error types

pub mod config;
pub mod error;
pub mod export;
pub mod types;

pub use error::CoreError;
pub use types::{
    Connection, MovieDetails, MovieRecord, MovieSummary, NeighborhoodRow, NewMovie, PersonRecord,
    RelationshipKind,
};
