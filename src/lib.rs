//! # CodeFathom - Java Static Analysis with Embedding Enrichment
//!
//! A Rust pipeline that parses a Java source tree into a normalized
//! intermediate representation (IR) and enriches every extracted entity
//! with an embedding vector from an external embedding service.
//!
//! ## Overview
//!
//! CodeFathom walks a project directory, parses each Java file into an
//! AST with tree-sitter, and extracts a structured IR: classes with
//! their fields, methods, annotations, inheritance relations, and
//! complexity metrics. Annotations carrying feature or concept-mapping
//! markers are classified into first-class feature and mapping entities.
//! The resulting IR is then sent, in concurrent batches, to an HTTP
//! embedding service, and the returned vectors are attached to every
//! class, field, and method.
//!
//! ## Key Features
//!
//! - **AST Extraction**: Tree-sitter parsing of Java classes and interfaces
//! - **Annotation Classification**: Feature/mapping markers become typed entities
//! - **Complexity Metrics**: Cyclomatic complexity, branch count, nesting depth
//! - **Concurrent Parsing**: One blocking task per file, failures isolated
//! - **Batched Enrichment**: Concurrent HTTP batches with all-or-nothing semantics
//!
//! ## Architecture
//!
//! ```text
//! source tree ──▶ SourceLocator ──▶ ProjectAnalyzer (per-file tasks)
//!                                        │
//!                                        ▼
//!                               extract::* (IR entities)
//!                                        │
//!                                        ▼
//!                          EmbeddingEnricher ──▶ HTTP service
//!                                        │
//!                                        ▼
//!                              Vec<IRClassEntity> with vectors
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: Project-level orchestration and the Java AST adapter
//! - [`extract`]: Entity extractors for classes, fields, methods, and annotations
//! - [`enrich`]: Embedding service client and IR enrichment
//! - [`locator`]: Source file discovery
//! - [`ir`]: The intermediate representation data model
//! - [`config`]: Pipeline configuration
//! - [`error`]: Error types
//!
//! ## Usage Example
//!
//! ```no_run
//! use codefathom::analyzer::ProjectAnalyzer;
//! use codefathom::config::Config;
//! use codefathom::enrich::{EmbeddingEnricher, HttpEmbeddingClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!
//!     let analyzer = ProjectAnalyzer::new("path/to/project", config.source.clone());
//!     let classes = analyzer.analyze().await?;
//!
//!     let client = HttpEmbeddingClient::new(&config.embedding)?;
//!     let enricher = EmbeddingEnricher::new(Arc::new(client), config.embedding.batch_size);
//!     let enriched = enricher.enrich(classes).await?;
//!
//!     println!("Analyzed {} classes", enriched.len());
//!     Ok(())
//! }
//! ```

/// Project-level analysis orchestration and the Java AST adapter
pub mod analyzer;

/// Pipeline configuration
pub mod config;

/// Embedding enrichment of the extracted IR
pub mod enrich;

/// Error types for parsing, enrichment, and configuration
pub mod error;

/// Entity extractors turning AST nodes into IR entities
pub mod extract;

/// The intermediate representation data model
pub mod ir;

/// Source file discovery
pub mod locator;
