//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `moviedrop_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;

use moviedrop_core::storage::RepositoryError;

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if matches!(
        err,
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_)
    ) {
        return RepositoryError::ConnectionFailed(err.to_string());
    }

    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::WriteFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::WriteFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::WriteFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::WriteFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::WriteFailed(format!("PutItem failed: {:?}", err)),
    }
}
