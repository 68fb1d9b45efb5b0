//! The interactive shell: menu loop, search and selection, details, export.

use std::path::PathBuf;

use cinegraph_core::export::{fold_neighborhood, write_graph_file, ExportSummary};
use cinegraph_core::types::parse_year;
use cinegraph_core::{MovieDetails, MovieSummary, NewMovie};
use cinegraph_graph::MovieStore;

use crate::console::Console;
use crate::error::{Precondition, Result, ShellError};
use crate::render;
use crate::session::SessionState;

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Search,
    Details,
    Export,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> std::result::Result<Self, Precondition> {
        match input.trim() {
            "1" => Ok(Self::Search),
            "2" => Ok(Self::Details),
            "3" => Ok(Self::Export),
            "4" => Ok(Self::Exit),
            other => Err(Precondition::InvalidMenuChoice(other.to_string())),
        }
    }
}

/// One interactive session over an optional store.
///
/// `store` is `None` when the startup connection failed; every operation
/// that needs data then reports `ConnectionUnavailable`.
pub struct MovieShell<S, C> {
    store: Option<S>,
    console: C,
    session: SessionState,
    export_path: PathBuf,
}

impl<S: MovieStore, C: Console> MovieShell<S, C> {
    pub fn new(store: Option<S>, console: C, export_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            console,
            session: SessionState::default(),
            export_path: export_path.into(),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    fn store(&self) -> Result<&S> {
        self.store.as_ref().ok_or(ShellError::ConnectionUnavailable)
    }

    // ── Menu Loop ────────────────────────────────────────────────

    /// Run the menu until the user exits or input closes.
    ///
    /// Operation failures are reported and the loop continues.
    pub async fn run(&mut self) {
        loop {
            self.console.say(&render::menu(self.session.selected()));

            let input = match self.console.read_line("Choice") {
                Ok(input) => input,
                Err(_) => break,
            };

            let outcome = match MenuChoice::parse(&input) {
                Ok(MenuChoice::Exit) => break,
                Ok(MenuChoice::Search) => self.search().await,
                Ok(MenuChoice::Details) => match self.show_details().await {
                    Ok(details) => {
                        self.console.say(&render::details(&details));
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
                Ok(MenuChoice::Export) => match self.export_neighborhood().await {
                    Ok(summary) => {
                        self.console.say(&render::export_summary(&summary));
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
                Err(e) => Err(e.into()),
            };

            match outcome {
                Ok(()) => {}
                Err(ShellError::InputClosed) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "Operation failed");
                    self.console.say(&render::warning(&e));
                }
            }
        }

        self.console.say(&render::goodbye());
    }

    // ── Search & Selection ───────────────────────────────────────

    /// Prompt for a term, then select from the hits or offer to add the movie.
    pub async fn search(&mut self) -> Result<()> {
        self.store()?;
        let term = self.console.read_line("Movie title to search")?;
        let hits = self.search_movies(&term).await?;

        if hits.is_empty() {
            self.console.say(&render::no_results());
            let answer = self
                .console
                .read_line("Add this movie to the database? (y/n)")?;
            if answer.trim().eq_ignore_ascii_case("y") {
                self.prompt_new_movie(term.trim()).await?;
            }
            return Ok(());
        }

        self.console.say(&render::candidates(&hits));
        self.select_from_list(&hits)?;
        Ok(())
    }

    /// Movies whose title contains `term`, ordered by title.
    ///
    /// A blank term is rejected before the store is touched.
    pub async fn search_movies(&self, term: &str) -> Result<Vec<MovieSummary>> {
        let store = self.store()?;
        let term = term.trim();
        if term.is_empty() {
            return Err(Precondition::EmptySearchTerm.into());
        }

        let hits = store.search_movies(term).await?;
        tracing::info!(term, hits = hits.len(), "Searched movies");
        Ok(hits)
    }

    /// Prompt for a 1-based index until a valid one or `0` is entered.
    ///
    /// Returns the selected title, or `None` when the user cancels; the
    /// session is only touched on a valid choice. Callers pass a non-empty
    /// list.
    pub fn select_from_list(&mut self, candidates: &[MovieSummary]) -> Result<Option<String>> {
        loop {
            let input = self
                .console
                .read_line("Number of the movie to select (0 to cancel)")?;

            let Ok(choice) = input.trim().parse::<usize>() else {
                self.console.say(&render::retry("Please enter a number."));
                continue;
            };

            if choice == 0 {
                return Ok(None);
            }

            match candidates.get(choice - 1) {
                Some(movie) => {
                    self.session.select(movie.title.clone());
                    self.console.say(&render::selected(&movie.title));
                    tracing::info!(title = %movie.title, "Selected movie");
                    return Ok(Some(movie.title.clone()));
                }
                None => self.console.say(&render::retry("No such entry, try again.")),
            }
        }
    }

    // ── Create ───────────────────────────────────────────────────

    /// Ask for the new movie's fields and create it.
    ///
    /// An invalid year ends the flow before the remaining questions.
    async fn prompt_new_movie(&mut self, title: &str) -> Result<()> {
        let year = self.console.read_line("Release year")?;
        parse_year(&year).map_err(Precondition::from)?;

        let tagline = self.console.read_line("Tagline (optional)")?;
        let director = self.console.read_line("Director")?;
        let actors = self.console.read_line("Actors (comma-separated)")?;

        let created = self
            .create_movie(title, &year, &tagline, &director, &actors)
            .await?;
        self.console.say(&render::movie_created(&created.title));
        Ok(())
    }

    /// Create a movie, merging its director and each distinct actor.
    ///
    /// A non-integer year aborts before anything is written.
    pub async fn create_movie(
        &self,
        title: &str,
        year: &str,
        tagline: &str,
        director: &str,
        actors: &str,
    ) -> Result<NewMovie> {
        let store = self.store()?;
        let movie = NewMovie::from_input(title, year, tagline, director, actors)
            .map_err(Precondition::from)?;

        store.create_movie(&movie).await?;
        Ok(movie)
    }

    // ── Details ──────────────────────────────────────────────────

    /// Directors and up to five actors of the selected movie.
    pub async fn show_details(&self) -> Result<MovieDetails> {
        let store = self.store()?;
        let title = self.session.require_selection()?;

        let details = store
            .movie_details(title)
            .await?
            .ok_or_else(|| ShellError::NotFound {
                title: title.to_string(),
            })?;

        tracing::info!(
            title,
            directors = details.directors.len(),
            actors = details.actors.len(),
            "Loaded movie details"
        );
        Ok(details)
    }

    // ── Export ───────────────────────────────────────────────────

    /// Export the selected movie and its directly connected people.
    ///
    /// The file is written only after every row has been folded.
    pub async fn export_neighborhood(&self) -> Result<ExportSummary> {
        let store = self.store()?;
        let title = self.session.require_selection()?;

        let rows = store.movie_neighborhood(title).await?;
        if rows.is_empty() {
            return Err(ShellError::NotFound {
                title: title.to_string(),
            });
        }

        let graph = fold_neighborhood(&rows);
        let summary = write_graph_file(&graph, &self.export_path)?;

        tracing::info!(
            title,
            nodes = summary.nodes,
            links = summary.links,
            path = %summary.path.display(),
            "Exported neighborhood"
        );
        Ok(summary)
    }
}
