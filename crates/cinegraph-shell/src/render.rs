//! Terminal output formatting.

use colored::Colorize;

use cinegraph_core::export::ExportSummary;
use cinegraph_core::{MovieDetails, MovieSummary};

use crate::error::ShellError;

/// Shown for a missing tagline or year.
pub const UNKNOWN: &str = "unknown";
/// Shown for an empty director or actor list.
pub const NO_INFORMATION: &str = "no information";

/// Header plus the four menu options.
pub fn menu(selected: Option<&str>) -> String {
    let rule = "=".repeat(30);
    let current = match selected {
        Some(title) => title.cyan().bold().to_string(),
        None => "none".dimmed().to_string(),
    };
    format!(
        "\n{rule}\n{}: {current}\n{rule}\n1) Search movies\n2) Show movie details\n3) Export graph.json for selected movie\n4) Exit",
        "Selected movie".bold()
    )
}

/// Numbered search results, starting at 1.
pub fn candidates(movies: &[MovieSummary]) -> String {
    let mut out = format!("\n{}", "--- Search results ---".bold());
    for (i, movie) in movies.iter().enumerate() {
        out.push_str(&format!("\n{}) {} ({})", i + 1, movie.title, year(movie.released)));
    }
    out
}

pub fn selected(title: &str) -> String {
    format!("{} {}", "Selected:".green().bold(), title)
}

pub fn details(d: &MovieDetails) -> String {
    let tagline = d
        .tagline
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(UNKNOWN);

    let mut out = format!(
        "\n{}\nTitle: {}\nYear: {}\nTagline: {}",
        "MOVIE DETAILS".cyan().bold(),
        d.title,
        year(d.released),
        tagline
    );

    out.push_str(&format!("\n\n{}", "Director(s):".bold()));
    push_names(&mut out, &d.directors);

    out.push_str(&format!("\n\n{}", "Actors (first 5):".bold()));
    push_names(&mut out, &d.actors);

    out
}

pub fn export_summary(s: &ExportSummary) -> String {
    format!(
        "{} {}\n{} nodes, {} links written.",
        "Created".green().bold(),
        s.path.display(),
        s.nodes,
        s.links
    )
}

pub fn movie_created(title: &str) -> String {
    format!(
        "{} '{}' was added with its director and cast. You can search for it now.",
        "Added".green().bold(),
        title
    )
}

pub fn no_results() -> String {
    "No movies found.".yellow().to_string()
}

pub fn connected(uri: &str) -> String {
    format!("{} {}", "Connected to".green(), uri)
}

pub fn connection_failed(reason: &str) -> String {
    format!(
        "{} {}\nContinuing without a database; searches, details and exports are unavailable.",
        "Could not connect to Neo4j:".red().bold(),
        reason
    )
}

pub fn warning(err: &ShellError) -> String {
    format!("{} {}", "warning:".yellow().bold(), err)
}

pub fn retry(message: &str) -> String {
    format!("{} {}", "warning:".yellow().bold(), message)
}

pub fn goodbye() -> String {
    "Goodbye.".dimmed().to_string()
}

fn year(released: Option<i64>) -> String {
    released.map_or_else(|| UNKNOWN.to_string(), |y| y.to_string())
}

fn push_names(out: &mut String, names: &[String]) {
    if names.is_empty() {
        out.push_str(&format!("\n - {NO_INFORMATION}"));
    }
    for name in names {
        out.push_str(&format!("\n - {name}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> MovieDetails {
        MovieDetails {
            title: "The Matrix".to_string(),
            released: Some(1999),
            tagline: Some("Welcome to the Real World".to_string()),
            actors: vec!["Keanu Reeves".to_string(), "Carrie-Anne Moss".to_string()],
            directors: vec!["Lana Wachowski".to_string(), "Lilly Wachowski".to_string()],
        }
    }

    #[test]
    fn test_details_lists_people() {
        let text = details(&matrix());
        assert!(text.contains("Title: The Matrix"));
        assert!(text.contains("Year: 1999"));
        assert!(text.contains("Tagline: Welcome to the Real World"));
        assert!(text.contains(" - Lilly Wachowski"));
        assert!(text.contains(" - Carrie-Anne Moss"));
        assert!(!text.contains(NO_INFORMATION));
    }

    #[test]
    fn test_details_markers_for_missing_data() {
        let bare = MovieDetails {
            tagline: Some(String::new()),
            actors: vec![],
            directors: vec![],
            ..matrix()
        };
        let text = details(&bare);
        assert!(text.contains("Tagline: unknown"));
        assert_eq!(text.matches(" - no information").count(), 2);

        let no_tagline = MovieDetails {
            tagline: None,
            released: None,
            ..matrix()
        };
        let text = details(&no_tagline);
        assert!(text.contains("Tagline: unknown"));
        assert!(text.contains("Year: unknown"));
    }

    #[test]
    fn test_candidates_are_one_indexed() {
        let movies = vec![
            MovieSummary {
                title: "The Matrix".to_string(),
                released: Some(1999),
            },
            MovieSummary {
                title: "The Matrix Reloaded".to_string(),
                released: Some(2003),
            },
        ];
        let text = candidates(&movies);
        assert!(text.contains("1) The Matrix (1999)"));
        assert!(text.contains("2) The Matrix Reloaded (2003)"));
    }

    #[test]
    fn test_menu_shows_selection() {
        assert!(menu(Some("Heat")).contains("Heat"));
        assert!(menu(None).contains("none"));
        assert!(menu(None).contains("4) Exit"));
    }
}
