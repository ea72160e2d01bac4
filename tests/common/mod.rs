//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use async_trait::async_trait;
use cinedex::catalog::{
    CastMember, CatalogGateway, Credits, GatewayError, GatewayResult, Genre, Movie, MovieDetail,
    MovieListResponse,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::Semaphore;

// -- Fixtures -----------------------------------------------------------------

pub fn movie(id: i64) -> Movie {
    Movie {
        id,
        title: format!("Movie {}", id),
        poster_path: Some(format!("/poster{}.jpg", id)),
        backdrop_path: None,
        overview: format!("Overview of movie {}", id),
        release_date: "2024-01-01".to_string(),
        vote_average: 7.0,
        vote_count: 100,
        popularity: 10.0,
        genre_ids: vec![28],
    }
}

/// Page `page` of `total_pages`, holding movies with the given ids.
pub fn page_of(
    page: u32,
    total_pages: u32,
    ids: impl IntoIterator<Item = i64>,
) -> MovieListResponse {
    let results: Vec<Movie> = ids.into_iter().map(movie).collect();
    MovieListResponse {
        page,
        total_results: u64::from(total_pages) * results.len() as u64,
        results,
        total_pages,
    }
}

pub fn detail(id: i64) -> MovieDetail {
    MovieDetail {
        movie: movie(id),
        genres: vec![Genre {
            id: 28,
            name: "Action".to_string(),
        }],
        runtime: Some(120),
        status: "Released".to_string(),
        tagline: format!("Tagline {}", id),
        budget: 1_000_000,
        revenue: 5_000_000,
    }
}

pub fn credits(id: i64, cast: usize) -> Credits {
    Credits {
        id,
        cast: (0..cast)
            .map(|n| CastMember {
                id: n as i64 + 1,
                name: format!("Actor {}", n),
                character: format!("Role {}", n),
                profile_path: None,
                order: n as u32,
            })
            .collect(),
    }
}

pub fn ids(movies: &[Movie]) -> Vec<i64> {
    movies.iter().map(|m| m.id).collect()
}

// -- FakeGateway --------------------------------------------------------------

/// One recorded gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Popular(u32),
    Search(String, u32),
    Detail(i64),
    Credits(i64),
}

/// Scripted in-process catalog.
///
/// Unscripted requests fail with `NotFound`. While [`hold`](Self::hold) is
/// in effect every call is recorded and then parked until
/// [`release`](Self::release).
pub struct FakeGateway {
    popular: Mutex<HashMap<u32, GatewayResult<MovieListResponse>>>,
    search: Mutex<HashMap<(String, u32), GatewayResult<MovieListResponse>>>,
    details: Mutex<HashMap<i64, GatewayResult<MovieDetail>>>,
    credits: Mutex<HashMap<i64, GatewayResult<Credits>>>,
    calls: Mutex<Vec<Call>>,
    held: AtomicBool,
    gate: Semaphore,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            popular: Mutex::new(HashMap::new()),
            search: Mutex::new(HashMap::new()),
            details: Mutex::new(HashMap::new()),
            credits: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            held: AtomicBool::new(false),
            gate: Semaphore::new(0),
        }
    }

    pub fn set_popular(&self, page: u32, result: GatewayResult<MovieListResponse>) {
        self.popular.lock().insert(page, result);
    }

    pub fn set_search(&self, query: &str, page: u32, result: GatewayResult<MovieListResponse>) {
        self.search.lock().insert((query.to_string(), page), result);
    }

    pub fn set_detail(&self, id: i64, result: GatewayResult<MovieDetail>) {
        self.details.lock().insert(id, result);
    }

    pub fn set_credits(&self, id: i64, result: GatewayResult<Credits>) {
        self.credits.lock().insert(id, result);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Park every following call until `release`.
    pub fn hold(&self) {
        self.held.store(true, Ordering::SeqCst);
    }

    /// Let parked and future calls through. A closed gate never blocks.
    pub fn release(&self) {
        self.held.store(false, Ordering::SeqCst);
        self.gate.close();
    }

    /// Wait until `count` calls have been recorded.
    pub async fn wait_for_calls(&self, count: usize) {
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while self.call_count() < count {
            assert!(
                std::time::Instant::now() < deadline,
                "expected {} gateway calls, saw {:?}",
                count,
                self.calls()
            );
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    async fn enter(&self, call: Call) {
        self.calls.lock().push(call);
        if self.held.load(Ordering::SeqCst) {
            let _ = self.gate.acquire().await;
        }
    }
}

fn scripted<K: std::hash::Hash + Eq, T: Clone>(
    map: &Mutex<HashMap<K, GatewayResult<T>>>,
    key: &K,
) -> GatewayResult<T> {
    map.lock()
        .get(key)
        .cloned()
        .unwrap_or(Err(GatewayError::NotFound))
}

#[async_trait]
impl CatalogGateway for FakeGateway {
    async fn get_popular(&self, page: u32) -> GatewayResult<MovieListResponse> {
        self.enter(Call::Popular(page)).await;
        scripted(&self.popular, &page)
    }

    async fn search(&self, query: &str, page: u32) -> GatewayResult<MovieListResponse> {
        if query.trim().is_empty() {
            return Ok(MovieListResponse::empty());
        }
        self.enter(Call::Search(query.to_string(), page)).await;
        scripted(&self.search, &(query.to_string(), page))
    }

    async fn get_detail(&self, id: i64) -> GatewayResult<MovieDetail> {
        self.enter(Call::Detail(id)).await;
        scripted(&self.details, &id)
    }

    async fn get_credits(&self, id: i64) -> GatewayResult<Credits> {
        self.enter(Call::Credits(id)).await;
        scripted(&self.credits, &id)
    }
}

// -- Config helpers -----------------------------------------------------------

/// Write a config file pointing at `base_url`, with favorites kept inside
/// the returned temp dir.
pub fn temp_config(base_url: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    let favorites_path = temp_dir.path().join("favorites.json");

    let content = format!(
        r#"[api]
base_url = "{}"
api_key = "test-key"
timeout_seconds = 5

[storage]
favorites_path = "{}"
"#,
        base_url,
        favorites_path.display()
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
