//! Embedding enrichment of the extracted IR
//!
//! Pools one record per class/field/method, submits fixed-size batches
//! concurrently to the embedding service, joins every batch, then rewrites
//! the IR with the returned vectors. Unlike per-file parsing this stage is
//! all-or-nothing: one failing batch aborts the whole call and no entity is
//! rewritten.

pub mod http;
pub mod records;

pub use http::HttpEmbeddingClient;
pub use records::EntityRecord;

use crate::ir::{Embedding, IRClassEntity};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Client for the external embedding service
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Embed one batch of records, returning an id-to-vector map
    async fn embed_batch(&self, records: &[EntityRecord]) -> Result<HashMap<String, Vec<f32>>>;
}

/// Attaches embeddings to every class, field, and method in the IR.
pub struct EmbeddingEnricher {
    client: Arc<dyn EmbeddingClient>,
    batch_size: usize,
}

impl EmbeddingEnricher {
    pub fn new(client: Arc<dyn EmbeddingClient>, batch_size: usize) -> Self {
        Self { client, batch_size }
    }

    /// Enrich the IR with embeddings, consuming and returning the class list.
    ///
    /// All batches are awaited before any merging happens; identity fields
    /// are never changed, and an entity whose id is missing from the merged
    /// response gets an empty vector rather than an error.
    pub async fn enrich(&self, classes: Vec<IRClassEntity>) -> Result<Vec<IRClassEntity>> {
        let records = records::build_records(&classes);
        if records.is_empty() {
            return Ok(classes);
        }

        let batches: Vec<&[EntityRecord]> = records.chunks(self.batch_size).collect();
        tracing::info!(
            "Embedding {} records in {} batches",
            records.len(),
            batches.len()
        );

        let pending = batches.iter().map(|batch| self.client.embed_batch(batch));
        let results = futures::future::join_all(pending).await;

        // Full join first; the first failure aborts before any rewrite
        let mut embeddings = HashMap::new();
        for result in results {
            embeddings.extend(result?);
        }

        Ok(classes
            .into_iter()
            .map(|class| rewrite_class(class, &embeddings))
            .collect())
    }
}

fn rewrite_class(mut class: IRClassEntity, embeddings: &HashMap<String, Vec<f32>>) -> IRClassEntity {
    let lookup = |id: String| Embedding::new(embeddings.get(&id).cloned().unwrap_or_default());

    for field in &mut class.fields {
        field.embedding = Some(lookup(records::field_id(&class.name, &field.name)));
    }
    for method in &mut class.methods {
        method.embedding = Some(lookup(records::method_id(&class.name, &method.name)));
    }
    class.embedding = Some(lookup(records::class_id(&class.name)));
    class
}
