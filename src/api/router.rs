use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;
use super::status;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status::server_status))
        // Liveness endpoints (no state needed)
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Session endpoints
        .merge(auth::create_auth_router())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use chrono::{Duration, Utc};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppInfoConfig;
    use crate::domain::session::SecretKey;
    use crate::infrastructure::auth::{JwtConfig, JwtService, SessionTokens};

    fn test_service() -> Arc<JwtService> {
        Arc::new(JwtService::new(JwtConfig::new(
            SecretKey::from_bytes(&[42u8; 32]),
            60,
        )))
    }

    fn test_router(service: Arc<JwtService>) -> Router {
        create_router(AppState::new(service, AppInfoConfig::default()))
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value, Option<String>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let www_authenticate = response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body, www_authenticate)
    }

    fn login_request(body: &str) -> Request<Body> {
        Request::post("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn protected_request(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::get("/protected");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_server_status() {
        let request = Request::get("/").body(Body::empty()).unwrap();
        let (status, body, _) = send(test_router(test_service()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "Server is running",
                "status": "success",
                "data": {
                    "app_name": "Session Token API",
                    "version": env!("CARGO_PKG_VERSION"),
                    "description": "A simple HTTP service with JWT authentication"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_login_then_protected() {
        let router = test_router(test_service());

        let (status, body, _) =
            send(router.clone(), login_request(r#"{"username":"alice"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token_type"], "bearer");

        let token = body["access_token"].as_str().unwrap();
        let authorization = format!("Bearer {}", token);
        let (status, body, _) = send(router, protected_request(Some(&authorization))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "message": "Hello alice, here is your secure data!" })
        );
    }

    #[tokio::test]
    async fn test_login_accepts_empty_username() {
        let router = test_router(test_service());

        let (status, body, _) = send(router.clone(), login_request(r#"{"username":""}"#)).await;
        assert_eq!(status, StatusCode::OK);

        let authorization = format!("Bearer {}", body["access_token"].as_str().unwrap());
        let (status, body, _) = send(router, protected_request(Some(&authorization))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Hello , here is your secure data!");
    }

    #[tokio::test]
    async fn test_protected_without_token() {
        let (status, body, www_authenticate) =
            send(test_router(test_service()), protected_request(None)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "detail": "Not authenticated" }));
        assert_eq!(www_authenticate.as_deref(), Some("Bearer"));
    }

    #[tokio::test]
    async fn test_protected_with_invalid_token() {
        let request = protected_request(Some("Bearer not-a-token"));
        let (status, body, _) = send(test_router(test_service()), request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "detail": "Invalid token" }));
    }

    #[tokio::test]
    async fn test_protected_with_expired_token() {
        let service = test_service();
        let token = service
            .create_at("alice", Utc::now() - Duration::minutes(61))
            .unwrap();

        let authorization = format!("Bearer {}", token);
        let (status, body, _) =
            send(test_router(service), protected_request(Some(&authorization))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "detail": "Token expired" }));
    }

    #[tokio::test]
    async fn test_protected_rejects_token_from_other_process() {
        let other = JwtService::with_default_config();
        let token = other.create("alice").unwrap();

        let authorization = format!("Bearer {}", token);
        let (status, body, _) =
            send(test_router(test_service()), protected_request(Some(&authorization))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "detail": "Invalid token" }));
    }

    #[tokio::test]
    async fn test_login_missing_username() {
        let (status, body, _) = send(test_router(test_service()), login_request("{}")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().starts_with("Invalid JSON data"));
    }

    #[tokio::test]
    async fn test_login_malformed_json() {
        let (status, body, _) = send(test_router(test_service()), login_request("{")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().starts_with("Invalid JSON syntax"));
    }

    #[tokio::test]
    async fn test_login_without_content_type() {
        let request = Request::post("/login")
            .body(Body::from(r#"{"username":"alice"}"#))
            .unwrap();
        let (status, _, _) = send(test_router(test_service()), request).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let router = test_router(test_service());

        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body, _) = send(router.clone(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let request = Request::get("/live").body(Body::empty()).unwrap();
        let (status, body, _) = send(router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);
    }
}
