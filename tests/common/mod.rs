//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use shopdesk::api::{RequestError, StoreClient};
use shopdesk::config::Config;
use shopdesk::fetch::{ListFetcher, PageQuery};
use shopdesk::model::Page;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Client pointed at `base_url` with default endpoints.
pub fn client_for(base_url: &str) -> StoreClient {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.timeout_seconds = 5;
    StoreClient::new(&config).expect("client should build")
}

/// Create a temporary config file with the given TOML body.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// In-memory list source.
///
/// Serves queued outcomes in order (falling back to an empty page) and
/// records every query it was asked for.
#[derive(Default)]
pub struct ScriptedFetcher {
    outcomes: Mutex<VecDeque<Result<Page<String>, RequestError>>>,
    queries: Mutex<Vec<PageQuery>>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_page(&self, items: &[&str], current_page: u32, total_pages: u32) {
        self.outcomes.lock().push_back(Ok(page(items, current_page, total_pages)));
    }

    pub fn push_error(&self, status: u16, message: &str) {
        self.outcomes.lock().push_back(Err(RequestError::Status {
            status,
            message: Some(message.to_string()),
        }));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<PageQuery> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl ListFetcher for ScriptedFetcher {
    type Item = String;

    async fn fetch(&self, query: &PageQuery) -> Result<Page<String>, RequestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().push(query.clone());
        let next = self.outcomes.lock().pop_front();
        next.unwrap_or_else(|| Ok(page(&[], query.page, 1)))
    }
}

pub fn page(items: &[&str], current_page: u32, total_pages: u32) -> Page<String> {
    Page {
        items: items.iter().map(|s| s.to_string()).collect(),
        current_page,
        total_pages,
    }
}
