//! Shared test fixtures for the catalog SDK integration tests.
//!
//! Provides a `StubUpstream` that serves canned JSON over a local `tiny_http`
//! server, plus sample payloads and card constructors.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tcgdex_catalog::CardSummary;
use tiny_http::{Header, Response, Server};

// ---------------------------------------------------------------------------
// StubUpstream
// ---------------------------------------------------------------------------

/// One canned response, matched against the request path including query.
#[derive(Clone)]
pub struct Route {
    pub url: String,
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl Route {
    pub fn ok(url: &str, body: impl Into<String>) -> Self {
        Self::status(url, 200, body)
    }

    pub fn status(url: &str, status: u16, body: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            status,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Local HTTP server answering from a fixed route table.
///
/// Unknown paths get a 404. Every requested URL is recorded in `hits()`.
/// The server stops when the stub is dropped.
pub struct StubUpstream {
    pub base_url: String,
    server: Arc<Server>,
    hits: Arc<Mutex<Vec<String>>>,
    handle: Option<JoinHandle<()>>,
}

impl StubUpstream {
    pub fn start(routes: Vec<Route>) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").unwrap());
        let addr = server.server_addr().to_ip().unwrap();
        let hits = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let hits = Arc::clone(&hits);
            thread::spawn(move || {
                for request in server.incoming_requests() {
                    let url = request.url().to_string();
                    hits.lock().unwrap().push(url.clone());

                    let route = routes.iter().find(|r| r.url == url).cloned();
                    let (status, body, delay) = match route {
                        Some(r) => (r.status, r.body, r.delay),
                        None => (404, r#"{"error":"not found"}"#.to_string(), Duration::ZERO),
                    };
                    if !delay.is_zero() {
                        thread::sleep(delay);
                    }

                    let header =
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
                    let response = Response::from_string(body)
                        .with_status_code(status)
                        .with_header(header);
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            base_url: format!("http://{addr}"),
            server,
            hits,
            handle: Some(handle),
        }
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

impl Drop for StubUpstream {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

// ---------------------------------------------------------------------------
// Sample payloads
// ---------------------------------------------------------------------------

/// Card listing mixing every upstream encoding seen in the wild, plus rows
/// that must be dropped.
pub fn sample_cards_json() -> String {
    serde_json::json!([
        {
            "id": "base1-4",
            "localId": "4",
            "name": "Charizard",
            "image": "https://assets.tcgdex.net/en/base/base1/4"
        },
        {
            "id": "base1-58",
            "localId": "58",
            "name": "Pikachu",
            "set": { "id": "base1", "name": "Base Set" }
        },
        {
            "id": "swsh-promo-1",
            "localId": "1",
            "name": "Eevee",
            "set": "swsh-promo"
        },
        {
            "id": "sv01-001",
            "name": "Sprigatito",
            "serie": { "id": "sv", "name": "Scarlet & Violet" }
        },
        {
            "id": "base1-PIKA-promo",
            "name": "Promo Mouse"
        },
        { "id": "", "name": "" },
        { "image": "https://example.invalid/orphan.png" },
        42,
        { "id": 7, "name": "Numeric id" },
        {
            "id": "xy1-1",
            "localId": "1",
            "name": "Venusaur-EX",
            "set": "xy1",
            "serie": "xy"
        }
    ])
    .to_string()
}

pub fn sample_fire_cards_json() -> String {
    serde_json::json!([
        { "id": "base1-4", "localId": "4", "name": "Charizard", "set": "base1" },
        { "id": "xy1-12", "localId": "12", "name": "Charmander", "set": "xy1" }
    ])
    .to_string()
}

pub fn sample_detail_json() -> String {
    serde_json::json!({
        "id": "base1-4",
        "localId": "4",
        "name": "Charizard",
        "image": "https://assets.tcgdex.net/en/base/base1/4",
        "hp": 120,
        "rarity": "Rare",
        "types": ["Fire"],
        "set": { "id": "base1", "name": "Base Set" }
    })
    .to_string()
}

// ---------------------------------------------------------------------------
// Card constructors
// ---------------------------------------------------------------------------

pub fn card(id: &str, name: &str, series_id: &str) -> CardSummary {
    let (set_id, local_id) = id.split_once('-').unwrap_or((id, ""));
    CardSummary {
        id: id.to_string(),
        name: name.to_string(),
        image: String::new(),
        set_id: set_id.to_string(),
        local_id: local_id.to_string(),
        series_id: series_id.to_string(),
    }
}

/// `count` cards named `Card 0`, `Card 1`, ... in series `base`.
pub fn numbered_cards(count: usize) -> Vec<CardSummary> {
    (0..count)
        .map(|i| card(&format!("base1-{i}"), &format!("Card {i}"), "base"))
        .collect()
}
