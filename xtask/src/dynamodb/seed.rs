//! Seed command implementation.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use moviedrop_core::Movie;

use super::error::{DynamodbError, Result};

/// Demo catalog with release years.
const CATALOG: &[(&str, &str)] = &[
    ("Ant-Man", "2015"),
    ("The Matrix", "1999"),
    ("Arrival", "2016"),
    ("Blade Runner 2049", "2017"),
    ("Interstellar", "2014"),
    ("Inception", "2010"),
    ("Alien", "1979"),
    ("Gattaca", "1997"),
    ("Looper", "2012"),
    ("Dune", "2021"),
];

/// Generate demo movie records.
///
/// The first record is the service's fixed fallback movie; the rest
/// cycle through the demo catalog. Every record gets a fresh id.
pub fn generate_seed_movies(count: u32) -> Vec<Movie> {
    let mut movies = Vec::with_capacity(count as usize);

    for i in 0..count {
        let movie = if i == 0 {
            Movie::fallback(Uuid::new_v4().to_string())
        } else {
            let (title, year) = CATALOG[(i as usize - 1) % CATALOG.len()];
            Movie::new(Uuid::new_v4().to_string(), year, title)
        };
        movies.push(movie);
    }

    movies
}

/// Insert movies into the table, one write per record.
pub async fn insert_movies(client: &Client, table_name: &str, movies: &[Movie]) -> Result<()> {
    for movie in movies {
        client
            .put_item()
            .table_name(table_name)
            .set_item(Some(movie_item(movie)))
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
    }

    Ok(())
}

// Same attribute shape the service writes: id (S), year (N), title (S).
fn movie_item(movie: &Movie) -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("id".to_string(), AttributeValue::S(movie.id.clone())),
        ("year".to_string(), AttributeValue::N(movie.year.clone())),
        ("title".to_string(), AttributeValue::S(movie.title.clone())),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seed_record_is_the_fallback() {
        let movies = generate_seed_movies(3);

        assert_eq!(movies.len(), 3);
        assert_eq!(movies[0].year, "2012");
        assert_eq!(movies[0].title, "The Amazing Spider-Man 2");
        assert_eq!(movies[1].title, "Ant-Man");
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let movies = generate_seed_movies(12);

        let mut ids: Vec<_> = movies.iter().map(|m| m.id.clone()).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), movies.len());
    }

    #[test]
    fn test_seed_item_shape() {
        let item = movie_item(&Movie::new("7", "2015", "Ant-Man"));

        assert_eq!(item["id"], AttributeValue::S("7".to_string()));
        assert_eq!(item["year"], AttributeValue::N("2015".to_string()));
        assert_eq!(item["title"], AttributeValue::S("Ant-Man".to_string()));
    }
}
