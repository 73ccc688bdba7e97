//! HTTP client for the embedding service

use super::{EmbeddingClient, EntityRecord};
use crate::config::EmbeddingConfig;
use crate::error::{ConfigError, EnrichmentError};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Wire request: `{"ir_entities": [{"id": ..., "code_snippet": ...}, ...]}`
#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    ir_entities: &'a [EntityRecord],
}

/// Wire response: `{"embeddings": {id: [f32, ...], ...}}`.
/// A body without the `embeddings` key fails deserialization, which is
/// treated the same as any other malformed body.
#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    embeddings: HashMap<String, Vec<f32>>,
}

/// Reqwest-backed [`EmbeddingClient`].
///
/// Construction validates the configuration and fails fast, before any
/// batch is scheduled. A configured timeout surfaces as the same fatal
/// error as any other batch failure.
pub struct HttpEmbeddingClient {
    http: reqwest::Client,
    endpoint_url: String,
    timeout_secs: u64,
}

impl HttpEmbeddingClient {
    pub fn new(config: &EmbeddingConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                key: "embedding".to_string(),
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            endpoint_url: config.endpoint_url.clone(),
            timeout_secs: config.timeout_secs,
        })
    }
}

#[async_trait]
impl EmbeddingClient for HttpEmbeddingClient {
    async fn embed_batch(&self, records: &[EntityRecord]) -> Result<HashMap<String, Vec<f32>>> {
        tracing::debug!("Embedding batch of {} records", records.len());

        let response = self
            .http
            .post(&self.endpoint_url)
            .json(&EmbeddingRequest {
                ir_entities: records,
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EnrichmentError::Timeout(self.timeout_secs)
                } else {
                    EnrichmentError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EnrichmentError::BadStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| EnrichmentError::InvalidResponse(e.to_string()))?;

        Ok(parsed.embeddings)
    }
}
