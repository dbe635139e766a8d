use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use duv_api::{AppState, HandlerSettings};
use duv_store::seed::fallback_store;

/// Ids of the fallback dataset records
#[allow(dead_code)]
pub struct SeedIds {
    pub alice: String,
    pub bob: String,
    pub sea_princess: String,
    pub duv001: String,
}

/// App over the fallback dataset (Alice, Bob, Sea Princess, DUV001)
#[allow(dead_code)]
pub fn seeded_app(settings: HandlerSettings) -> (Router, SeedIds) {
    let store = fallback_store().unwrap();
    let ids = SeedIds {
        alice: store.people()[0].id.to_string(),
        bob: store.people()[1].id.to_string(),
        sea_princess: store.ships()[0].id.to_string(),
        duv001: store.declarations()[0].id.to_string(),
    };
    let app = duv_api::app(AppState::with_settings(store, settings));
    (app, ids)
}

#[allow(dead_code)]
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}
