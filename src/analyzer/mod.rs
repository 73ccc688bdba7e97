//! Per-file parse orchestration
//!
//! Fans out one task per source file over the shared worker pool, joins them
//! all, and concatenates per-file results. A failing file contributes an
//! empty list and a warning, never an error: missing classes beat a crashed
//! run.

pub mod java_ast;

use crate::config::SourceConfig;
use crate::error::ParseError;
use crate::extract::class::extract_class;
use crate::ir::IRClassEntity;
use crate::locator::SourceLocator;
use anyhow::Result;
use java_ast::{collect_type_declarations, package_name, AstOptions, JavaAst};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;

/// Orchestrates IR extraction for a whole source tree.
pub struct ProjectAnalyzer {
    root: PathBuf,
    config: SourceConfig,
    options: AstOptions,
}

impl ProjectAnalyzer {
    pub fn new(root: impl AsRef<Path>, config: SourceConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
            options: AstOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AstOptions) -> Self {
        self.options = options;
        self
    }

    /// Analyze every source file under the root concurrently.
    ///
    /// One blocking task is scheduled per file; all tasks are joined before
    /// this returns, so no task outlives the call. Results concatenate in
    /// task-completion order, so cross-file ordering is unspecified.
    pub async fn analyze(&self) -> Result<Vec<IRClassEntity>> {
        let files = SourceLocator::new(&self.root, &self.config.extension).locate();
        tracing::info!("Analyzing {} source files under {:?}", files.len(), self.root);

        let mut tasks = JoinSet::new();
        for path in files {
            let options = self.options.clone();
            let max_file_size = self.config.max_file_size;
            tasks.spawn_blocking(move || {
                let result = analyze_single_file(&path, &options, max_file_size);
                (path, result)
            });
        }

        let mut classes = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((_, Ok(mut list))) => classes.append(&mut list),
                Ok((path, Err(e))) => {
                    tracing::warn!("Skipping {:?}: {}", path, e);
                }
                Err(e) => {
                    tracing::warn!("File analysis task failed: {}", e);
                }
            }
        }

        tracing::info!("Extracted {} classes", classes.len());
        Ok(classes)
    }
}

/// Analyze one file in isolation: read, build the AST best-effort, extract
/// every class and interface declaration. A class whose extraction fails is
/// skipped with a warning; the rest of the file still contributes.
fn analyze_single_file(
    path: &Path,
    options: &AstOptions,
    max_file_size: usize,
) -> Result<Vec<IRClassEntity>, ParseError> {
    let file = path.to_string_lossy().to_string();

    if let Ok(metadata) = fs::metadata(path) {
        if metadata.len() > max_file_size as u64 {
            tracing::debug!("Skipping large file: {:?}", path);
            return Ok(Vec::new());
        }
    }

    let source = fs::read_to_string(path).map_err(|e| ParseError::FileRead {
        file: file.clone(),
        reason: e.to_string(),
    })?;

    let mut ast = JavaAst::new(options.clone()).map_err(|e| ParseError::AstBuild {
        file: file.clone(),
        reason: format!("{:#}", e),
    })?;
    let tree = ast.parse(&source).map_err(|e| ParseError::AstBuild {
        file: file.clone(),
        reason: format!("{:#}", e),
    })?;

    let package = package_name(tree.root_node(), &source);

    let mut classes = Vec::new();
    for declaration in collect_type_declarations(tree.root_node()) {
        match extract_class(declaration, &source, &file, &package) {
            Ok(class) => classes.push(class),
            Err(e) => {
                tracing::warn!("Skipping unextractable class in {:?}: {:#}", path, e);
            }
        }
    }

    Ok(classes)
}
