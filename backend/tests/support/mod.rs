//! Fake search index and pro API used by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use backend::index_utils::search_index_client::{IndexQueryParams, SearchIndex, SearchIndexClient, SearchIndexConfig};
use serde_json::{Value, json};

pub const APP_ID: &str = "TESTAPP";
pub const API_KEY: &str = "test-search-key";
pub const INDEX_NAME: &str = "collective-offers-test";

#[derive(Clone, Default)]
pub struct Recorded {
    pub bodies: Arc<Mutex<Vec<Value>>>,
}

impl Recorded {
    pub fn last_body(&self) -> Value {
        self.bodies.lock().unwrap().last().cloned().expect("no request recorded")
    }
}

#[derive(Clone)]
struct FakeIndexState {
    recorded: Recorded,
    hits: Vec<Value>,
}

pub fn offer_hit(id: u64, name: &str, venue_name: &str, public_name: Option<&str>) -> Value {
    json!({
        "objectID": id.to_string(),
        "offer": { "name": name, "dates": [1_700_000_000.0], "thumbUrl": null },
        "venue": { "name": venue_name, "publicName": public_name },
        "isTemplate": false,
    })
}

/// Serves `hits` in pages of `hitsPerPage`, the way the real index does.
async fn fake_index_query(
    State(state): State<FakeIndexState>,
    Path(index_name): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, String)> {
    if headers.get("X-Algolia-Application-Id").and_then(|v| v.to_str().ok()) != Some(APP_ID)
        || headers.get("X-Algolia-API-Key").and_then(|v| v.to_str().ok()) != Some(API_KEY)
    {
        return Err((StatusCode::FORBIDDEN, r#"{"message":"Invalid Application-ID or API key"}"#.to_string()));
    }
    if index_name != INDEX_NAME {
        return Err((StatusCode::NOT_FOUND, r#"{"message":"Index does not exist"}"#.to_string()));
    }
    state.recorded.bodies.lock().unwrap().push(body.clone());

    let hits_per_page = body["hitsPerPage"].as_u64().unwrap_or(20);
    let page = body["page"].as_u64().unwrap_or(0);
    let nb_hits = state.hits.len() as u64;
    let nb_pages = if hits_per_page == 0 { 0 } else { nb_hits.div_ceil(hits_per_page) };
    let start = (page * hits_per_page) as usize;
    let page_hits = state.hits.iter().skip(start).take(hits_per_page as usize).cloned().collect::<Vec<_>>();

    Ok(Json(json!({
        "hits": page_hits,
        "nbHits": nb_hits,
        "page": page,
        "nbPages": nb_pages,
        "hitsPerPage": hits_per_page,
        "processingTimeMS": 1,
        "query": body["query"],
    })))
}

pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn spawn_fake_index(hits: Vec<Value>) -> (String, Recorded) {
    let recorded = Recorded::default();
    let state = FakeIndexState { recorded: recorded.clone(), hits };
    let router = Router::new().route("/1/indexes/{index_name}/query", post(fake_index_query)).with_state(state);
    (serve(router).await, recorded)
}

pub fn index_client(base_url: &str, api_key: &str) -> SearchIndexClient {
    SearchIndexClient::new(
        SearchIndexConfig {
            app_id: APP_ID.to_string(),
            api_key: api_key.to_string(),
            index_name: INDEX_NAME.to_string(),
            base_url: base_url.to_string(),
        },
        reqwest::Client::new(),
    )
}

pub async fn spawn_fake_pro_api() -> String {
    let router = Router::new()
        .route(
            "/adage-iframe/collective/categories",
            get(|| async {
                Json(json!({
                    "categories": [
                        {"id": "MUSIQUE_LIVE", "proLabel": "Musique live"},
                        {"id": "CINEMA", "proLabel": "Cinéma"},
                        {"id": "JEU", "proLabel": "Jeux"}
                    ],
                    "subcategories": [
                        {"id": "CONCERT", "categoryId": "MUSIQUE_LIVE"},
                        {"id": "CINE_PLEIN_AIR", "categoryId": "CINEMA"},
                        {"id": "SEANCE_CINE", "categoryId": "CINEMA"},
                        {"id": "FESTIVAL_MUSIQUE", "categoryId": "MUSIQUE_LIVE"}
                    ]
                }))
            }),
        )
        .route(
            "/adage-iframe/venues/{venue_id}",
            get(|Path(venue_id): Path<u64>| async move {
                if venue_id == 404 {
                    return Err((StatusCode::NOT_FOUND, r#"{"global":["Lieu introuvable"]}"#.to_string()));
                }
                Ok(Json(json!({
                    "id": venue_id,
                    "name": "Théâtre municipal SAS",
                    "publicName": "Le Petit Théâtre",
                })))
            }),
        );
    serve(router).await
}

/// Index answering every query with the same body, recording what it was asked.
#[derive(Clone, Default)]
pub struct CannedIndex {
    pub response: String,
    pub asked: Arc<Mutex<Vec<IndexQueryParams>>>,
}

impl SearchIndex for CannedIndex {
    async fn query(&self, params: &IndexQueryParams) -> anyhow::Result<String> {
        self.asked.lock().unwrap().push(params.clone());
        if self.response.is_empty() {
            anyhow::bail!("Error: 503 Service Unavailable: index unreachable");
        }
        Ok(self.response.clone())
    }
}
