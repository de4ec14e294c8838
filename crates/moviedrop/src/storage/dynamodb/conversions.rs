//! Conversion from `Movie` to a DynamoDB item.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use moviedrop_core::Movie;

pub const ATTR_ID: &str = "id";
pub const ATTR_YEAR: &str = "year";
pub const ATTR_TITLE: &str = "title";

/// Builds the item written per ingest.
///
/// `year` goes out as a number attribute carrying the already-coerced
/// text; `id` and `title` are plain strings.
pub fn movie_to_item(movie: &Movie) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (ATTR_ID.to_string(), AttributeValue::S(movie.id.clone())),
        (ATTR_YEAR.to_string(), AttributeValue::N(movie.year.clone())),
        (
            ATTR_TITLE.to_string(),
            AttributeValue::S(movie.title.clone()),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_to_item_attribute_types() {
        let movie = Movie::new("7", "2015", "Ant-Man");

        let item = movie_to_item(&movie);

        assert_eq!(item[ATTR_ID], AttributeValue::S("7".to_string()));
        assert_eq!(item[ATTR_YEAR], AttributeValue::N("2015".to_string()));
        assert_eq!(item[ATTR_TITLE], AttributeValue::S("Ant-Man".to_string()));
        assert_eq!(item.len(), 3);
    }
}
