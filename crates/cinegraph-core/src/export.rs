//! Neighborhood export: fold store rows into a node/link document.
//!
//! The output is the node-link shape force-directed renderers consume:
//! a JSON object with a `nodes` array and a `links` array. Node ids are
//! assigned from 1 in first-seen order and every link points person → movie.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::CoreError;
use crate::types::{NeighborhoodRow, RelationshipKind};

/// Default location of the exported document.
pub const DEFAULT_EXPORT_PATH: &str = "exports/graph.json";

/// A node in the exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportNode {
    Movie {
        id: u32,
        title: String,
        released: Option<i64>,
    },
    Person {
        id: u32,
        name: String,
    },
}

impl ExportNode {
    pub fn id(&self) -> u32 {
        match self {
            Self::Movie { id, .. } | Self::Person { id, .. } => *id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Movie { .. } => "Movie",
            Self::Person { .. } => "Person",
        }
    }
}

// Field order is part of the file format: id, label, then label fields.
impl Serialize for ExportNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Movie { id, title, released } => {
                let mut s = serializer.serialize_struct("ExportNode", 4)?;
                s.serialize_field("id", id)?;
                s.serialize_field("label", self.label())?;
                s.serialize_field("title", title)?;
                s.serialize_field("releaseYear", released)?;
                s.end()
            }
            Self::Person { id, name } => {
                let mut s = serializer.serialize_struct("ExportNode", 3)?;
                s.serialize_field("id", id)?;
                s.serialize_field("label", self.label())?;
                s.serialize_field("name", name)?;
                s.end()
            }
        }
    }
}

/// A directed person → movie link.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ExportLink {
    pub source: u32,
    pub target: u32,
    #[serde(rename = "type")]
    pub kind: RelationshipKind,
}

/// The full exported document.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ExportGraph {
    pub nodes: Vec<ExportNode>,
    pub links: Vec<ExportLink>,
}

/// What an export wrote, reported back to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub nodes: usize,
    pub links: usize,
    pub path: PathBuf,
}

/// Assigns one id per `Label:key`, counting up from 1.
#[derive(Debug, Default)]
struct NodeIds {
    by_key: HashMap<String, u32>,
    counter: u32,
}

impl NodeIds {
    /// Returns the id for `key` and whether it was newly allocated.
    fn get_or_assign(&mut self, key: String) -> (u32, bool) {
        if let Some(&id) = self.by_key.get(&key) {
            return (id, false);
        }
        self.counter += 1;
        self.by_key.insert(key, self.counter);
        (self.counter, true)
    }
}

/// Fold neighborhood rows, in store order, into deduplicated nodes and links.
pub fn fold_neighborhood<'a, I>(rows: I) -> ExportGraph
where
    I: IntoIterator<Item = &'a NeighborhoodRow>,
{
    let mut ids = NodeIds::default();
    let mut graph = ExportGraph::default();

    for row in rows {
        let (movie_id, is_new) = ids.get_or_assign(format!("Movie:{}", row.movie.title));
        if is_new {
            graph.nodes.push(ExportNode::Movie {
                id: movie_id,
                title: row.movie.title.clone(),
                released: row.movie.released,
            });
        }

        let Some(conn) = &row.connection else {
            continue;
        };

        let (person_id, is_new) = ids.get_or_assign(format!("Person:{}", conn.person.name));
        if is_new {
            graph.nodes.push(ExportNode::Person {
                id: person_id,
                name: conn.person.name.clone(),
            });
        }

        graph.links.push(ExportLink {
            source: person_id,
            target: movie_id,
            kind: conn.kind,
        });
    }

    graph
}

/// Render the document as UTF-8 JSON with four-space indentation.
pub fn to_pretty_json(graph: &ExportGraph) -> Result<Vec<u8>, CoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    graph.serialize(&mut ser)?;
    Ok(buf)
}

/// Write the document to `path`, creating parent directories on demand.
///
/// The bytes go to a sibling temporary file first and are renamed into
/// place, so an interrupted write never leaves a truncated document.
pub fn write_graph_file(graph: &ExportGraph, path: &Path) -> Result<ExportSummary, CoreError> {
    let bytes = to_pretty_json(graph)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, &bytes).map_err(|e| io_error(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| io_error(path, e))?;

    tracing::debug!(
        path = %path.display(),
        nodes = graph.nodes.len(),
        links = graph.links.len(),
        "Wrote graph export"
    );

    Ok(ExportSummary {
        nodes: graph.nodes.len(),
        links: graph.links.len(),
        path: path.to_path_buf(),
    })
}

fn io_error(path: &Path, source: std::io::Error) -> CoreError {
    CoreError::Io {
        path: path.display().to_string(),
        source,
    }
}
