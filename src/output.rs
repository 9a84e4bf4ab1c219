//! Output sinks for retrieved tweets
//!
//! Accepted tweets are fanned out to every registered [`RawDataOutput`] in
//! registration order, one batch per page, before the next page is requested.
//! A sink error aborts the whole run, so sinks that want to survive transient
//! failures must handle them internally.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::types::RawTweet;

/// Pluggable destination for accepted tweet batches
#[async_trait]
pub trait RawDataOutput: Send + Sync {
    /// Export one batch of accepted tweets (possibly empty)
    async fn export_raw_data(&self, batch: &[RawTweet]) -> Result<()>;
}

/// Sink that writes each raw tweet payload to stdout, one per line
#[derive(Clone, Copy, Debug, Default)]
pub struct PrintRawOutput;

#[async_trait]
impl RawDataOutput for PrintRawOutput {
    async fn export_raw_data(&self, batch: &[RawTweet]) -> Result<()> {
        for tweet in batch {
            println!("{}", tweet.raw_json);
        }
        Ok(())
    }
}

/// Sink that accumulates tweets in memory
///
/// Useful for tests and for embedders that want the run's records as a value
/// afterwards. Clones share the same backing store.
#[derive(Clone, Debug, Default)]
pub struct CollectorRawOutput {
    collected: Arc<Mutex<Vec<RawTweet>>>,
}

impl CollectorRawOutput {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything collected so far
    pub fn collected(&self) -> Vec<RawTweet> {
        self.collected.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl RawDataOutput for CollectorRawOutput {
    async fn export_raw_data(&self, batch: &[RawTweet]) -> Result<()> {
        let mut guard = self
            .collected
            .lock()
            .map_err(|_| Error::Output("collector mutex poisoned".to_string()))?;
        guard.extend_from_slice(batch);
        Ok(())
    }
}

/// Sink that appends one serialized [`RawTweet`] JSON object per line to a file
///
/// The file is created on first export and opened in append mode, so several
/// runs may share one file.
#[derive(Clone, Debug)]
pub struct JsonLineFileRawOutput {
    path: PathBuf,
}

impl JsonLineFileRawOutput {
    /// Create a sink writing to the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RawDataOutput for JsonLineFileRawOutput {
    async fn export_raw_data(&self, batch: &[RawTweet]) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut lines = String::new();
        for tweet in batch {
            lines.push_str(&serde_json::to_string(tweet)?);
            lines.push('\n');
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(lines.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
