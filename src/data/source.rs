// src/data/source.rs

use crate::config::Config;
use crate::data::sample::sample_properties;
use crate::domain::property::PropertyRecord;
use crate::errors::AppError;
use log::{info, warn};
use reqwest::blocking::Client;
use std::fs;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// The record set the board serves, plus whether it is the baked-in sample
/// because the real source could not be loaded.
#[derive(Debug, Clone)]
pub struct LoadedProperties {
    pub records: Vec<PropertyRecord>,
    pub fallback: bool,
}

/// Load the dataset named by `config`, substituting the fixed sample set on
/// any failure. Loading is never fatal; a failure only flips the fallback
/// flag so the page can say so.
pub fn load_or_sample(config: &Config) -> LoadedProperties {
    match load_properties(config) {
        Ok(records) => {
            info!(
                "loaded {} properties from {}",
                records.len(),
                config.data_source_label()
            );
            LoadedProperties {
                records,
                fallback: false,
            }
        }
        Err(e) => {
            warn!("{e}; falling back to the built-in sample set");
            LoadedProperties {
                records: sample_properties(),
                fallback: true,
            }
        }
    }
}

fn load_properties(config: &Config) -> Result<Vec<PropertyRecord>, AppError> {
    let records = match &config.data_url {
        Some(url) => fetch_remote(url)?,
        None => read_file(&config.data_path)?,
    };

    // An empty array is a failed load: the board must always have rows.
    if records.is_empty() {
        return Err(AppError::DataError(format!(
            "{} is an empty array",
            config.data_source_label()
        )));
    }
    Ok(records)
}

fn read_file(path: &str) -> Result<Vec<PropertyRecord>, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::DataError(format!("Read {path} failed: {e}")))?;
    parse_records(&raw)
}

fn parse_records(raw: &str) -> Result<Vec<PropertyRecord>, AppError> {
    serde_json::from_str(raw).map_err(|e| AppError::DataError(format!("JSON parse failed: {e}")))
}

fn fetch_remote(url: &str) -> Result<Vec<PropertyRecord>, AppError> {
    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| AppError::DataError(format!("HTTP client init failed: {e}")))?;

    client
        .get(url)
        .send()
        .and_then(|resp| resp.error_for_status())
        .map_err(|e| AppError::DataError(format!("Fetch {url} failed: {e}")))?
        .json()
        .map_err(|e| AppError::DataError(format!("Fetch {url} returned invalid JSON: {e}")))
}
