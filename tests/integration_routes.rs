mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware;
use axum::routing::{get, post};
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use common::{make_expired_token, make_token, test_app_state};
use quizbank::middleware::auth::AuthUser;
use quizbank::middleware::role::{require_admin, require_member, require_user};
use quizbank::modules::accounts::model::AccountRole;
use quizbank::router::init_router;
use quizbank::state::AppState;

async fn whoami(auth_user: AuthUser) -> Json<serde_json::Value> {
    Json(json!({ "username": auth_user.0.username }))
}

/// Routes mirroring the production gate wiring, with handlers that do not
/// touch the database so gate behavior can be observed end to end.
fn gated_test_app(state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/user-only", post(whoami))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_user));
    let member_routes = Router::new()
        .route("/member-only", get(whoami))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_member));
    let admin_routes = Router::new()
        .route("/admin-only", get(whoami))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(user_routes)
        .merge(member_routes)
        .merge(admin_routes)
        .with_state(state)
}

fn request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_user_token_passes_user_gate() {
    let state = test_app_state();
    let token = make_token(AccountRole::User, false, &state.jwt_config);
    let app = gated_test_app(state);

    let response = app
        .oneshot(request("POST", "/user-only", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["username"], "test-account");
}

#[tokio::test]
async fn test_user_token_rejected_by_admin_gate() {
    let state = test_app_state();
    let token = make_token(AccountRole::User, false, &state.jwt_config);
    let app = gated_test_app(state);

    let response = app
        .oneshot(request("GET", "/admin-only", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_token_passes_admin_and_member_gates() {
    let state = test_app_state();
    let token = make_token(AccountRole::Admin, false, &state.jwt_config);
    let app = gated_test_app(state.clone());

    let response = app
        .oneshot(request("GET", "/admin-only", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let app = gated_test_app(state);
    let response = app
        .oneshot(request("GET", "/member-only", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_admin_token_rejected_by_user_gate() {
    let state = test_app_state();
    let token = make_token(AccountRole::Admin, false, &state.jwt_config);
    let app = gated_test_app(state);

    let response = app
        .oneshot(request("POST", "/user-only", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_banned_user_rejected_by_member_and_user_gates() {
    let state = test_app_state();
    let token = make_token(AccountRole::User, true, &state.jwt_config);
    let app = gated_test_app(state.clone());

    let response = app
        .oneshot(request("GET", "/member-only", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = gated_test_app(state);
    let response = app
        .oneshot(request("POST", "/user-only", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_missing_header_is_unauthorized() {
    let state = test_app_state();
    let app = gated_test_app(state);

    let response = app
        .oneshot(request("GET", "/member-only", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let state = test_app_state();
    let token = make_expired_token(&state.jwt_config);
    let app = gated_test_app(state);

    let response = app
        .oneshot(request("GET", "/member-only", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_decode_failures_share_one_generic_message() {
    let state = test_app_state();
    let expired = make_expired_token(&state.jwt_config);

    let mut messages = Vec::new();
    for token in ["garbage.token.here", expired.as_str()] {
        let app = gated_test_app(state.clone());
        let response = app
            .oneshot(request("GET", "/member-only", Some(token)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["code"], "401");
        messages.push(body["message"].as_str().unwrap().to_string());
    }

    // An expired token and a garbage token must be indistinguishable.
    assert_eq!(messages[0], messages[1]);
    assert_eq!(messages[0], "Invalid or expired token");
}

#[tokio::test]
async fn test_full_router_profile_round_trip() {
    let state = test_app_state();
    let token = make_token(AccountRole::User, false, &state.jwt_config);
    let app = init_router(state);

    let response = app
        .oneshot(request("GET", "/api/auth/profile", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["username"], "test-account");
    assert_eq!(body["role"], "user");
    assert_eq!(body["banned"], false);
}

#[tokio::test]
async fn test_full_router_gates_protected_subtrees() {
    let state = test_app_state();
    let user_token = make_token(AccountRole::User, false, &state.jwt_config);
    let banned_token = make_token(AccountRole::User, true, &state.jwt_config);

    // User on the admin subtree -> 403.
    let app = init_router(state.clone());
    let response = app
        .oneshot(request("GET", "/api/accounts", Some(&user_token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Banned user on the member subtree -> 403.
    let app = init_router(state.clone());
    let response = app
        .oneshot(request("GET", "/api/questions", Some(&banned_token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // No token anywhere protected -> 401.
    let app = init_router(state);
    let response = app
        .oneshot(request("GET", "/api/questions", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
