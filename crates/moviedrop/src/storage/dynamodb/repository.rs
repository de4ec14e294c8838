//! DynamoDB movie store implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use moviedrop_core::storage::{MovieStore, Result};
use moviedrop_core::Movie;

use super::conversions::movie_to_item;
use super::error::map_put_item_error;

/// DynamoDB-backed movie store.
pub struct DynamoDbMovieStore {
    client: Client,
    table_name: String,
}

impl DynamoDbMovieStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a store from environment configuration.
    ///
    /// Uses the AWS SDK default credential chain; `AWS_ENDPOINT_URL`
    /// points it at a local DynamoDB when set.
    pub async fn from_env(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table_name)
    }
}

#[async_trait]
impl MovieStore for DynamoDbMovieStore {
    async fn put_movie(&self, movie: &Movie) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(movie_to_item(movie)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }
}
