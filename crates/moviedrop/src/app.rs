use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{health::livez, ingest::ingest_movie},
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// The API front door proxies every request to the function, so the
/// surface is one POST on the root path plus a liveness probe.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", post(ingest_movie))
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    use moviedrop_core::movie::{DEFAULT_TITLE, DEFAULT_YEAR};

    fn post_root(body: Body) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .body(body)
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_insert_well_formed_body() {
        let (state, store) = AppState::in_memory();
        let app = create_app(state);

        let response = app
            .oneshot(post_root(Body::from(
                r#"{"id":"7","year":2015,"title":"Ant-Man"}"#,
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            r#"{"message":"Successfully inserted data!"}"#
        );

        let stored = store.get("7").await.unwrap();
        assert_eq!(stored.id, "7");
        assert_eq!(stored.year, "2015");
        assert_eq!(stored.title, "Ant-Man");
    }

    #[tokio::test]
    async fn test_insert_keeps_string_year_verbatim() {
        let (state, store) = AppState::in_memory();
        let app = create_app(state);

        let response = app
            .oneshot(post_root(Body::from(
                r#"{"id":"42","year":"1999","title":"The Matrix"}"#,
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.get("42").await.unwrap().year, "1999");
    }

    #[tokio::test]
    async fn test_empty_body_inserts_default_record() {
        let (state, store) = AppState::in_memory();
        let app = create_app(state);

        let response = app.oneshot(post_root(Body::empty())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            r#"{"message":"Successfully inserted data!"}"#
        );

        let movies = store.movies().await;
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].year, DEFAULT_YEAR);
        assert_eq!(movies[0].title, DEFAULT_TITLE);
        assert!(Uuid::parse_str(&movies[0].id).is_ok());
    }

    #[tokio::test]
    async fn test_generated_ids_are_unique() {
        let (state, store) = AppState::in_memory();
        let app = create_app(state);

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(post_root(Body::empty()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let movies = store.movies().await;
        assert_eq!(movies.len(), 2);
        assert_ne!(movies[0].id, movies[1].id);
    }

    #[tokio::test]
    async fn test_missing_field_is_a_fault() {
        let (state, store) = AppState::in_memory();
        let app = create_app(state);

        let response = app
            .oneshot(post_root(Body::from(r#"{"year":2015,"title":"Ant-Man"}"#)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_fault() {
        let (state, store) = AppState::in_memory();
        let app = create_app(state);

        let response = app
            .oneshot(post_root(Body::from("definitely not json")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_livez() {
        let (state, _store) = AppState::in_memory();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
