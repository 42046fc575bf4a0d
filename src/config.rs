// src/config.rs

use crate::domain::state::SearchPaging;
use log::warn;
use std::env;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DATA_PATH: &str = "properties.json";
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Runtime settings, resolved once at startup from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Local JSON dataset, used when no `DATA_URL` is set.
    pub data_path: String,
    /// Optional remote JSON dataset; takes precedence over `data_path`.
    pub data_url: Option<String>,
    pub page_size: usize,
    /// How pagination behaves while a search query is active.
    pub search_paging: SearchPaging,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            data_path: DEFAULT_DATA_PATH.to_string(),
            data_url: None,
            page_size: DEFAULT_PAGE_SIZE,
            search_paging: SearchPaging::SinglePage,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = env::var("BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(path) = env::var("DATA_PATH") {
            config.data_path = path;
        }
        if let Ok(url) = env::var("DATA_URL") {
            if !url.trim().is_empty() {
                config.data_url = Some(url);
            }
        }
        if let Ok(raw) = env::var("PAGE_SIZE") {
            match raw.parse::<usize>() {
                Ok(n) if n > 0 => config.page_size = n,
                _ => warn!("ignoring invalid PAGE_SIZE {raw:?}"),
            }
        }
        if let Ok(raw) = env::var("SEARCH_PAGING") {
            match raw.as_str() {
                "single" => config.search_paging = SearchPaging::SinglePage,
                "paged" => config.search_paging = SearchPaging::Paged,
                _ => warn!("ignoring invalid SEARCH_PAGING {raw:?} (expected \"single\" or \"paged\")"),
            }
        }

        config
    }

    /// Human-readable name of wherever the dataset is supposed to come from.
    pub fn data_source_label(&self) -> &str {
        self.data_url.as_deref().unwrap_or(&self.data_path)
    }
}
