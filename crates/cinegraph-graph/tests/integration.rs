//! Integration tests for cinegraph-graph against a live Neo4j instance.
//!
//! These tests require a reachable Neo4j (see `GraphConfig::default()`).
//! Run with: cargo test --package cinegraph-graph --test integration -- --ignored
//!
//! Skipped automatically if Neo4j is not available.

use std::time::{SystemTime, UNIX_EPOCH};

use cinegraph_core::{NewMovie, RelationshipKind};
use cinegraph_graph::{GraphClient, GraphConfig};

async fn connect_or_skip() -> Option<GraphClient> {
    let config = GraphConfig::default();
    match GraphClient::connect(&config).await {
        Ok(client) => Some(client),
        Err(e) => {
            eprintln!("Skipping integration test (Neo4j not available): {e}");
            None
        }
    }
}

/// A title no other test run will collide with.
fn unique_title(base: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{base} {nanos}")
}

async fn cleanup(client: &GraphClient, title: &str, people: &[&str]) {
    let q = neo4rs::query("MATCH (m:Movie {title: $title}) DETACH DELETE m")
        .param("title", title.to_string());
    let _ = client.run(q).await;

    let names: Vec<String> = people.iter().map(|p| p.to_string()).collect();
    let q = neo4rs::query("MATCH (p:Person) WHERE p.name IN $names DETACH DELETE p")
        .param("names", names);
    let _ = client.run(q).await;
}

fn make_movie(title: &str, director: &str, actors: &str) -> NewMovie {
    NewMovie::from_input(title, "1999", "Welcome to the real world", director, actors).unwrap()
}

#[tokio::test]
#[ignore = "requires live Neo4j — run with: cargo test --package cinegraph-graph --test integration -- --ignored"]
async fn test_create_and_search_movie() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let title = unique_title("Cinegraph Search");
    let director = unique_title("Director");
    let actor = unique_title("Actor");

    client
        .create_movie(&make_movie(&title, &director, &actor))
        .await
        .unwrap();

    let hits = client
        .search_movies(&title.to_uppercase())
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, title);
    assert_eq!(hits[0].released, Some(1999));

    cleanup(&client, &title, &[director.as_str(), actor.as_str()]).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_movie_details_aggregates_people() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let title = unique_title("Cinegraph Details");
    let director = unique_title("Director");
    let actors: Vec<String> = (0..7).map(|i| unique_title(&format!("Actor {i}"))).collect();

    client
        .create_movie(&make_movie(&title, &director, &actors.join(",")))
        .await
        .unwrap();

    let details = client.movie_details(&title).await.unwrap().unwrap();
    assert_eq!(details.directors, vec![director.clone()]);
    assert_eq!(details.actors.len(), 5);
    assert_eq!(details.tagline.as_deref(), Some("Welcome to the real world"));

    let mut people: Vec<&str> = actors.iter().map(String::as_str).collect();
    people.push(director.as_str());
    cleanup(&client, &title, &people).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_movie_details_missing_title() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let details = client
        .movie_details(&unique_title("Never Created"))
        .await
        .unwrap();
    assert!(details.is_none());
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_people_are_merged_not_duplicated() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let first = unique_title("Cinegraph First");
    let second = unique_title("Cinegraph Second");
    let shared = unique_title("Shared Person");

    client
        .create_movie(&make_movie(&first, &shared, &shared))
        .await
        .unwrap();
    client
        .create_movie(&make_movie(&second, "", &shared))
        .await
        .unwrap();

    let q = neo4rs::query("MATCH (p:Person {name: $name}) RETURN count(p) AS cnt")
        .param("name", shared.clone());
    let row = client.query_one(q).await.unwrap().unwrap();
    assert_eq!(row.get::<i64>("cnt").unwrap(), 1);

    let rows = client.movie_neighborhood(&second).await.unwrap();
    assert_eq!(rows.len(), 1);
    let conn = rows[0].connection.as_ref().unwrap();
    assert_eq!(conn.person.name, shared);
    assert_eq!(conn.kind, RelationshipKind::ActedIn);

    cleanup(&client, &first, &[shared.as_str()]).await;
    cleanup(&client, &second, &[]).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_neighborhood_of_isolated_movie() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let title = unique_title("Cinegraph Isolated");

    client.create_movie(&make_movie(&title, "", "")).await.unwrap();

    let rows = client.movie_neighborhood(&title).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].movie.title, title);
    assert!(rows[0].connection.is_none());

    cleanup(&client, &title, &[]).await;
}
