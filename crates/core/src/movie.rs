//! The movie record and its ingestion rules.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Year written when a request arrives without a payload.
pub const DEFAULT_YEAR: &str = "2012";

/// Title written when a request arrives without a payload.
pub const DEFAULT_TITLE: &str = "The Amazing Spider-Man 2";

/// Error raised when an ingest payload lacks a required field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MovieFieldError {
    #[error("missing required field: {0}")]
    Missing(&'static str),
}

/// A single stored record.
///
/// All three fields are held as text: inbound JSON scalars are coerced
/// on ingest, and `year` keeps its numeric payload only at the storage
/// layer (it is written as a DynamoDB number attribute).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique key; the partition key of the table.
    pub id: String,
    pub year: String,
    pub title: String,
}

impl Movie {
    /// Creates a movie from already-coerced text fields.
    pub fn new(
        id: impl Into<String>,
        year: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            year: year.into(),
            title: title.into(),
        }
    }

    /// The fixed record written when a request carries no payload.
    pub fn fallback(id: impl Into<String>) -> Self {
        Self::new(id, DEFAULT_YEAR, DEFAULT_TITLE)
    }

    /// Extracts a movie from an ingest payload.
    ///
    /// `id`, `year`, and `title` must all be present; each is coerced to
    /// text (strings keep their content, other scalars render in JSON's
    /// canonical form). A missing field is an error for the caller to
    /// surface however it sees fit.
    pub fn from_value(payload: &Value) -> Result<Self, MovieFieldError> {
        Ok(Self {
            id: field_text(payload, "id")?,
            year: field_text(payload, "year")?,
            title: field_text(payload, "title")?,
        })
    }
}

fn field_text(payload: &Value, field: &'static str) -> Result<String, MovieFieldError> {
    let value = payload
        .get(field)
        .ok_or(MovieFieldError::Missing(field))?;
    Ok(match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_coerces_numeric_year() {
        let payload = json!({"id": "7", "year": 2015, "title": "Ant-Man"});

        let movie = Movie::from_value(&payload).unwrap();

        assert_eq!(movie.id, "7");
        assert_eq!(movie.year, "2015");
        assert_eq!(movie.title, "Ant-Man");
    }

    #[test]
    fn test_from_value_keeps_string_year() {
        let payload = json!({"id": "42", "year": "1999", "title": "The Matrix"});

        let movie = Movie::from_value(&payload).unwrap();

        assert_eq!(movie.year, "1999");
    }

    #[test]
    fn test_from_value_missing_id_is_an_error() {
        let payload = json!({"year": 2015, "title": "Ant-Man"});

        let result = Movie::from_value(&payload);

        assert_eq!(result, Err(MovieFieldError::Missing("id")));
    }

    #[test]
    fn test_from_value_missing_year_is_an_error() {
        let payload = json!({"id": "7", "title": "Ant-Man"});

        assert_eq!(Movie::from_value(&payload), Err(MovieFieldError::Missing("year")));
    }

    #[test]
    fn test_from_value_non_object_payload_is_an_error() {
        let payload = json!(["7", 2015, "Ant-Man"]);

        assert!(Movie::from_value(&payload).is_err());
    }

    #[test]
    fn test_fallback_record() {
        let movie = Movie::fallback("abc-123");

        assert_eq!(movie.id, "abc-123");
        assert_eq!(movie.year, DEFAULT_YEAR);
        assert_eq!(movie.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_missing_field_error_display() {
        assert_eq!(
            MovieFieldError::Missing("title").to_string(),
            "missing required field: title"
        );
    }
}
