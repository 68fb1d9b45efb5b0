//! CLI entry point for the cinegraph movie browser.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use cinegraph_core::config::AppConfig;
use cinegraph_graph::{GraphClient, GraphConfig};
use cinegraph_shell::console::{Console, TerminalConsole};
use cinegraph_shell::{render, MovieShell};

#[derive(Parser)]
#[command(name = "cinegraph")]
#[command(about = "Search a Neo4j movie graph, inspect movies, and export their neighborhood")]
struct Cli {
    /// Config file prefix (default: cinegraph).
    #[arg(short, long, default_value = "cinegraph")]
    config: String,

    /// Neo4j URI, e.g. neo4j://localhost:7687.
    #[arg(long)]
    uri: Option<String>,

    /// Neo4j user.
    #[arg(long)]
    user: Option<String>,

    /// Neo4j password.
    #[arg(long)]
    password: Option<String>,

    /// Where to write the neighborhood export.
    #[arg(long)]
    export_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with prompts on stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let mut console = TerminalConsole;

    // A failed connection leaves the shell usable in degraded mode.
    let graph_config = GraphConfig::from(config.neo4j.clone());
    let store = match GraphClient::connect(&graph_config).await {
        Ok(client) => {
            console.say(&render::connected(&graph_config.uri));
            Some(client)
        }
        Err(e) => {
            tracing::warn!(uri = %graph_config.uri, error = %e, "Starting without Neo4j");
            console.say(&render::connection_failed(&e.to_string()));
            None
        }
    };

    let mut shell = MovieShell::new(store, console, config.export.path);
    shell.run().await;

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load(&cli.config)?;

    if let Some(uri) = &cli.uri {
        config.neo4j.uri = uri.clone();
    }
    if let Some(user) = &cli.user {
        config.neo4j.user = user.clone();
    }
    if let Some(password) = &cli.password {
        config.neo4j.password = password.clone();
    }
    if let Some(path) = &cli.export_path {
        config.export.path = path.clone();
    }

    Ok(config)
}
