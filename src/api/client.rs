//! HTTP client for the PokeAPI REST endpoints.
//!
//! One client is built per run and reused for every request, so the
//! underlying connection pool carries across the whole download.

use crate::models::{MoveResponse, PokemonResponse};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Client for fetching pokemon and move records.
pub struct PokeClient {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl PokeClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("pokefetch/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// URL of the pokemon record for a numeric ID.
    pub fn pokemon_url(&self, id: u32) -> String {
        format!("{}/pokemon/{}/", self.config.base_url.trim_end_matches('/'), id)
    }

    /// Fetch one pokemon record by ID.
    pub async fn fetch_pokemon(&self, id: u32) -> Result<PokemonResponse> {
        let url = self.pokemon_url(id);
        self.get_json(&url)
            .await
            .with_context(|| format!("Failed to fetch pokemon {}", id))
    }

    /// Fetch one move record by its detail URL (as referenced from a
    /// pokemon's move list).
    pub async fn fetch_move(&self, url: &str) -> Result<MoveResponse> {
        self.get_json(url)
            .await
            .with_context(|| format!("Failed to fetch move from {}", url))
    }

    /// GET a URL and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self.http_client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                anyhow::anyhow!(
                    "Request timed out after {}s: {}",
                    self.config.timeout_seconds,
                    url
                )
            } else if e.is_connect() {
                anyhow::anyhow!("Cannot connect to {}", url)
            } else {
                anyhow::anyhow!("Failed to send request: {}", e)
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("API error {} for {}: {}", status, url, body));
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }
}
