//! End-to-end session flows against a mock platform API

use std::sync::{Arc, Mutex};

use axum::routing::post;
use axum::{Json, Router};
use chrono::Duration;

use newsdesk_api::{ApiClient, Credentials};
use newsdesk_app::state::{Domain, SessionStore};
use newsdesk_core::session::AuthPhase;
use newsdesk_core::storage::Database;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn login_router(role: &'static str) -> Router {
    Router::new().route(
        "/auth/login",
        post(move |Json(body): Json<serde_json::Value>| async move {
            assert_eq!(body["email"], "a@b.com");
            Json(serde_json::json!({
                "data": {
                    "id": 1,
                    "name": "A",
                    "email": "a@b.com",
                    "role": role,
                    "token": "tok-1"
                }
            }))
        }),
    )
}

fn credentials() -> Credentials {
    Credentials {
        email: "a@b.com".to_string(),
        password: "secret".to_string(),
    }
}

fn store_against(base: &str) -> (SessionStore, Arc<Mutex<Database>>) {
    let client = Arc::new(ApiClient::new(base).unwrap());
    let db = Arc::new(Mutex::new(Database::open_in_memory().unwrap()));
    let store = SessionStore::new(client, db.clone(), Duration::minutes(30));
    (store, db)
}

#[tokio::test]
async fn login_authenticates_and_persists_the_user() {
    init_tracing();
    let base = serve(login_router("user")).await;
    let (store, db) = store_against(&base);

    assert_eq!(store.phase(), AuthPhase::Anonymous);

    let user = store.login(credentials()).await.unwrap();
    assert_eq!(user.id, 1);
    assert!(store.is_authenticated());
    assert!(!store.is_loading(Domain::Auth));
    assert!(store.error(Domain::Auth).is_none());

    // The returned user is written through to durable storage
    let persisted = db.lock().unwrap().session().load_user().unwrap().unwrap();
    assert_eq!(persisted.id, 1);
    assert_eq!(persisted.token.as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn login_recovers_from_a_prior_failure() {
    init_tracing();
    use axum::response::IntoResponse;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // First attempt is rejected, second succeeds
    let calls = Arc::new(AtomicUsize::new(0));
    let router = Router::new().route(
        "/auth/login",
        post(move || {
            let calls = calls.clone();
            async move {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    (
                        axum::http::StatusCode::UNAUTHORIZED,
                        Json(serde_json::json!({ "message": "Invalid credentials" })),
                    )
                        .into_response()
                } else {
                    Json(serde_json::json!({
                        "data": { "id": 1, "name": "A", "email": "a@b.com", "role": "user", "token": "tok-1" }
                    }))
                    .into_response()
                }
            }
        }),
    );
    let base = serve(router).await;
    let (store, _db) = store_against(&base);

    assert!(store.login(credentials()).await.is_err());
    assert_eq!(store.phase(), AuthPhase::AuthenticationFailed);
    assert_eq!(
        store.error(Domain::Auth).as_deref(),
        Some("Invalid credentials")
    );

    // Same store: failed -> authenticated, error slot cleared
    store.login(credentials()).await.unwrap();
    assert!(store.is_authenticated());
    assert!(store.error(Domain::Auth).is_none());
}

#[tokio::test]
async fn failed_login_records_the_server_message() {
    init_tracing();
    let router = Router::new().route(
        "/auth/login",
        post(|| async {
            (
                axum::http::StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "message": "Invalid credentials" })),
            )
        }),
    );
    let base = serve(router).await;
    let (store, db) = store_against(&base);

    let err = store.login(credentials()).await.unwrap_err();
    assert_eq!(err.user_message(), "Invalid credentials");
    assert_eq!(store.phase(), AuthPhase::AuthenticationFailed);
    assert_eq!(
        store.error(Domain::Auth).as_deref(),
        Some("Invalid credentials")
    );
    assert!(db.lock().unwrap().session().load_user().unwrap().is_none());
}

#[tokio::test]
async fn landing_route_follows_the_returned_role() {
    init_tracing();
    for (role, route) in [
        ("reporter", "/reporter/dashboard"),
        ("admin", "/admin"),
        ("user", "/"),
        ("moderator", "/"),
    ] {
        let base = serve(login_router(role)).await;
        let (store, _db) = store_against(&base);

        store.login(credentials()).await.unwrap();
        assert_eq!(store.landing_route(), route, "role {role}");
    }
}

#[tokio::test]
async fn restore_adopts_the_persisted_user_and_token() {
    init_tracing();
    let base = serve(login_router("reporter")).await;
    let (store, db) = store_against(&base);
    store.login(credentials()).await.unwrap();

    // A fresh store over the same database: presence in storage is enough
    let client = Arc::new(ApiClient::new(&base).unwrap());
    let fresh = SessionStore::new(client.clone(), db, Duration::minutes(30));
    assert!(fresh.restore().unwrap());
    assert!(fresh.is_authenticated());
    assert_eq!(client.token().as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn logout_clears_storage_and_state() {
    init_tracing();
    let base = serve(login_router("user")).await;
    let (store, db) = store_against(&base);
    store.login(credentials()).await.unwrap();

    store.logout();
    assert_eq!(store.phase(), AuthPhase::Anonymous);
    assert!(db.lock().unwrap().session().load_user().unwrap().is_none());

    // Restore finds nothing afterwards
    assert!(!store.restore().unwrap());
}
