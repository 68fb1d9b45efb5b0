//! cinegraph-shell: Interactive browser for a Neo4j movie graph.
//!
//! Searches movies by title, keeps one selected movie per session, shows its
//! directors and cast, and exports its person neighborhood to `graph.json`
//! for force-directed rendering.

pub mod console;
pub mod error;
pub mod render;
pub mod session;
pub mod shell;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Precondition, ShellError};
pub use session::SessionState;
pub use shell::MovieShell;
