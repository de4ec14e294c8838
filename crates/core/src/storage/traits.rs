use async_trait::async_trait;

use crate::movie::Movie;

use super::Result;

/// Write access to the movie table.
///
/// The only operation the service performs is a single-record write;
/// handlers receive this as a trait object so tests can substitute an
/// in-memory fake.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Writes one record, overwriting any record with the same id.
    async fn put_movie(&self, movie: &Movie) -> Result<()>;
}
