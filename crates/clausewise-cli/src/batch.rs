//! Batch pipeline: reads text files, analyzes them concurrently, collects results.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use anyhow::Context;
use futures::future::try_join_all;
use tracing::debug;

use clausewise_core::AnalysisResult;
use clausewise_nlp::Analyzer;

pub struct BatchStats {
    pub total_files: usize,
    pub total_clauses: usize,
    pub elapsed_secs: f64,
}

/// Analyze every file in `paths`, one blocking task per file.
///
/// Results come back in input order. The first unreadable or non-UTF-8 file
/// fails the whole batch.
pub async fn analyze_files(
    analyzer: Arc<Analyzer>,
    paths: &[PathBuf],
) -> anyhow::Result<(Vec<AnalysisResult>, BatchStats)> {
    let start = Instant::now();
    let total_files = paths.len();
    let done = Arc::new(AtomicUsize::new(0));

    let tasks = paths.iter().map(|path| {
        let analyzer = Arc::clone(&analyzer);
        let done = Arc::clone(&done);
        async move {
            let result = analyze_file(analyzer, path).await?;
            let n = done.fetch_add(1, Ordering::Relaxed) + 1;
            eprint!("\r  Analyzed {n}/{total_files}");
            Ok::<_, anyhow::Error>(result)
        }
    });
    let results = try_join_all(tasks).await;
    if total_files > 0 {
        eprintln!();
    }
    let results = results?;

    let total_clauses = results.iter().map(|r| r.clauses.len()).sum();
    Ok((
        results,
        BatchStats {
            total_files,
            total_clauses,
            elapsed_secs: start.elapsed().as_secs_f64(),
        },
    ))
}

/// Read and analyze one file.
pub async fn analyze_file(analyzer: Arc<Analyzer>, path: &Path) -> anyhow::Result<AnalysisResult> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read document");

    let filename = display_name(path);
    let result = tokio::task::spawn_blocking(move || analyzer.analyze_bytes(&filename, &bytes))
        .await
        .context("analysis task failed")?
        .with_context(|| format!("analyzing {}", path.display()))?;
    Ok(result)
}

/// Read a file as UTF-8 text.
pub async fn read_text(path: &Path) -> anyhow::Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let text = clausewise_core::decode_text(&bytes)
        .with_context(|| format!("decoding {}", path.display()))?;
    Ok(text.to_string())
}

/// File name without its directories, falling back to the path as given.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
