//! In-memory store and scripted console for shell tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use cinegraph_core::{MovieDetails, MovieSummary, NeighborhoodRow, NewMovie};
use cinegraph_graph::{GraphError, MovieStore};

use crate::console::Console;
use crate::error::{Result, ShellError};

/// A `MovieStore` backed by fixed data. Counts every call it receives.
#[derive(Default)]
pub struct FakeStore {
    pub movies: Vec<MovieSummary>,
    pub details: HashMap<String, MovieDetails>,
    pub neighborhoods: HashMap<String, Vec<NeighborhoodRow>>,
    /// Fail every call with a connection error.
    pub broken: bool,
    pub created: Mutex<Vec<NewMovie>>,
    pub call_count: AtomicUsize,
}

impl FakeStore {
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn created(&self) -> Vec<NewMovie> {
        self.created.lock().unwrap().clone()
    }

    fn enter(&self) -> std::result::Result<(), GraphError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(GraphError::Connection("connection reset".to_string()));
        }
        Ok(())
    }
}

impl MovieStore for FakeStore {
    async fn search_movies(&self, term: &str) -> std::result::Result<Vec<MovieSummary>, GraphError> {
        self.enter()?;
        let needle = term.to_lowercase();
        let mut hits: Vec<MovieSummary> = self
            .movies
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        hits.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(hits)
    }

    async fn movie_details(
        &self,
        title: &str,
    ) -> std::result::Result<Option<MovieDetails>, GraphError> {
        self.enter()?;
        Ok(self.details.get(title).cloned())
    }

    async fn movie_neighborhood(
        &self,
        title: &str,
    ) -> std::result::Result<Vec<NeighborhoodRow>, GraphError> {
        self.enter()?;
        Ok(self.neighborhoods.get(title).cloned().unwrap_or_default())
    }

    async fn create_movie(&self, movie: &NewMovie) -> std::result::Result<(), GraphError> {
        self.enter()?;
        self.created.lock().unwrap().push(movie.clone());
        Ok(())
    }
}

/// A console that answers prompts from a fixed script and records output.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub prompts: Vec<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Everything said so far, one block per line.
    pub fn printed(&self) -> String {
        self.output.join("\n")
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().ok_or(ShellError::InputClosed)
    }

    fn say(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}
