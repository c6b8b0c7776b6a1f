//! In-memory stand-in for the club backend, served over real HTTP.
#![allow(clippy::unwrap_used, dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

type Reply = (StatusCode, Json<Value>);

#[derive(Default)]
struct Store {
    events: Vec<Value>,
    participants: Vec<Value>,
    next_id: u64,
}

type Shared = Arc<Mutex<Store>>;

fn ok(body: Value) -> Reply {
    (StatusCode::OK, Json(body))
}

fn not_found(what: &str) -> Reply {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"success": false, "error": format!("{what} not found")})),
    )
}

async fn health() -> Json<Value> {
    Json(json!({"message": "IEEE Club API is running"}))
}

async fn list_events(State(store): State<Shared>, Query(params): Query<HashMap<String, String>>) -> Reply {
    let store = store.lock().unwrap();
    let mut events: Vec<Value> = store.events.clone();
    if params.get("active").is_some_and(|v| v == "true") {
        events.retain(|e| e["is_active"] == json!(true));
    }
    if let Some(limit) = params.get("limit").and_then(|v| v.parse::<usize>().ok()) {
        events.truncate(limit);
    }
    ok(json!({"success": true, "events": events}))
}

async fn create_event(State(store): State<Shared>, Json(body): Json<Value>) -> Reply {
    if body.get("title").and_then(Value::as_str).is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": "title is required"})),
        );
    }
    let mut store = store.lock().unwrap();
    store.next_id += 1;
    let mut event = body;
    event["id"] = json!(format!("evt-{}", store.next_id));
    store.events.push(event.clone());
    ok(json!({"success": true, "event": event}))
}

async fn get_event(State(store): State<Shared>, Path(id): Path<String>) -> Reply {
    let store = store.lock().unwrap();
    match store.events.iter().find(|e| e["id"] == id.as_str()) {
        Some(event) => ok(json!({"success": true, "event": event})),
        None => not_found("Event"),
    }
}

async fn update_event(State(store): State<Shared>, Path(id): Path<String>, Json(body): Json<Value>) -> Reply {
    let mut store = store.lock().unwrap();
    let Some(event) = store.events.iter_mut().find(|e| e["id"] == id.as_str()) else {
        return not_found("Event");
    };
    if let Value::Object(fields) = body {
        for (key, value) in fields {
            event[key] = value;
        }
    }
    ok(json!({"success": true, "event": event}))
}

async fn delete_event(State(store): State<Shared>, Path(id): Path<String>) -> Reply {
    let mut store = store.lock().unwrap();
    let before = store.events.len();
    store.events.retain(|e| e["id"] != id.as_str());
    if store.events.len() == before {
        return not_found("Event");
    }
    ok(json!({"success": true, "message": "Event deleted"}))
}

async fn create_participant(State(store): State<Shared>, Json(body): Json<Value>) -> Reply {
    let mut store = store.lock().unwrap();
    if !store.events.iter().any(|e| e["id"] == body["event_id"]) {
        return not_found("Event");
    }
    store.next_id += 1;
    let mut participant = body;
    participant["id"] = json!(format!("p-{}", store.next_id));
    store.participants.push(participant.clone());
    ok(json!({"success": true, "participant": participant}))
}

async fn count_participants(State(store): State<Shared>) -> Reply {
    let store = store.lock().unwrap();
    ok(json!({"success": true, "count": store.participants.len()}))
}

async fn list_participants(State(store): State<Shared>, Path(event_id): Path<String>) -> Reply {
    let store = store.lock().unwrap();
    let participants: Vec<&Value> = store
        .participants
        .iter()
        .filter(|p| p["event_id"] == event_id.as_str())
        .collect();
    ok(json!({"success": true, "participants": participants}))
}

async fn contact(Json(body): Json<Value>) -> Reply {
    let mut submission = body;
    submission["id"] = json!("c-1");
    ok(json!({"success": true, "submission": submission}))
}

fn router() -> Router {
    Router::new()
        .route("/api", get(health))
        .route("/api/", get(health))
        .route("/api/events", get(list_events).post(create_event))
        .route(
            "/api/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/api/participants", post(create_participant))
        .route("/api/participants/count", get(count_participants))
        .route("/api/participants/{event_id}", get(list_participants))
        .route("/api/contact", post(contact))
        .with_state(Shared::default())
}

/// Serves the stub on an ephemeral port; returns its API base URL.
pub async fn spawn_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });
    format!("http://{addr}/api")
}

/// A base URL on a port nothing listens on.
pub fn closed_base_url() -> String {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    format!("http://127.0.0.1:{port}/api")
}

/// Accepts connections and never answers; returns its API base URL.
pub async fn spawn_silent_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{addr}/api")
}
