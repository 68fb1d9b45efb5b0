//! cinegraph-graph — Neo4j gateway for the movie graph.
//!
//! Every read and write the shell performs goes through [`MovieStore`].
//! [`GraphClient`] is the Neo4j-backed implementation; rows are decoded
//! into `cinegraph_core` records here and nowhere else.

pub mod client;
pub mod mutations;
pub mod queries;
pub mod store;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use store::MovieStore;
