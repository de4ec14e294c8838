//! Correlation identifier extraction.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use lambda_http::request::RequestContext;
use uuid::Uuid;

/// The correlation identifier for one invocation.
///
/// Behind the API front door this is the gateway's request id, taken
/// from the context the Lambda adapter stashes in request extensions.
/// Local requests fall back to an `x-request-id` header, then to a
/// freshly generated id, so every log line carries something to grep.
pub struct RequestId(pub String);

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(ctx) = parts.extensions.get::<RequestContext>() {
            let id = match ctx {
                RequestContext::ApiGatewayV1(ctx) => ctx.request_id.clone(),
                RequestContext::ApiGatewayV2(ctx) => ctx.request_id.clone(),
                _ => None,
            };
            if let Some(id) = id {
                return Ok(RequestId(id));
            }
        }

        if let Some(id) = parts
            .headers
            .get("x-request-id")
            .and_then(|value| value.to_str().ok())
        {
            return Ok(RequestId(id.to_string()));
        }

        Ok(RequestId(Uuid::new_v4().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn test_request_id_from_header() {
        let (mut parts, _) = Request::builder()
            .header("x-request-id", "req-abc")
            .body(())
            .unwrap()
            .into_parts();

        let RequestId(id) = RequestId::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(id, "req-abc");
    }

    #[tokio::test]
    async fn test_request_id_generated_when_absent() {
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();

        let RequestId(id) = RequestId::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert!(Uuid::parse_str(&id).is_ok());
    }
}
