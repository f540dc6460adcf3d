//! Streaming ingestion of objects into a shared trie.
//!
//! [`stream_to_trie`] returns the trie immediately and indexes items in a
//! background tokio task as they arrive. Readers see the trie grow in place;
//! [`IngestionHandle::wait`] resolves once the source is exhausted or the
//! worker is cancelled.
//!
//! # Examples
//!
//! ```
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> synotrie::error::Result<()> {
//! use futures::stream;
//! use serde_json::json;
//! use synotrie::document::object_ref::ObjectRef;
//! use synotrie::stream::stream_to_trie;
//! use synotrie::trie::{MatchType, TrieOptions};
//!
//! let objects = vec![
//!     ObjectRef::new(json!({"field1": "some"})),
//!     ObjectRef::new(json!({"field1": 1})),
//!     ObjectRef::new(json!({"field1": "thing"})),
//! ];
//!
//! let (trie, handle) =
//!     stream_to_trie(stream::iter(objects), Vec::<Vec<String>>::new(), TrieOptions::default())?;
//! let summary = handle.wait().await?;
//!
//! assert_eq!(summary.indexed, 3);
//! assert_eq!(trie.read().lookup("thing"), MatchType::Perfect);
//! # Ok(())
//! # }
//! ```

use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use futures::{Stream, StreamExt};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::document::object_tokens;
use crate::document::walker::StringLeaves;
use crate::error::{Result, SynotrieError};
use crate::trie::{Trie, TrieOptions};

/// A trie shared between a streaming worker and its readers.
pub type SharedTrie<V> = Arc<RwLock<Trie<V>>>;

/// Outcome of a finished ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionSummary {
    /// Items taken from the source and indexed.
    pub indexed: usize,
    /// Tokens inserted.
    pub tokens: usize,
    /// Items that failed at the source or during analysis.
    pub failed: usize,
    /// Whether the worker stopped on request before the source ended.
    pub cancelled: bool,
}

/// Control over a running ingestion worker.
///
/// Dropping the handle detaches the worker; it keeps indexing until the
/// source ends.
pub struct IngestionHandle {
    cancel: Option<oneshot::Sender<()>>,
    errors: mpsc::UnboundedReceiver<SynotrieError>,
    task: JoinHandle<IngestionSummary>,
}

impl IngestionHandle {
    /// Ask the worker to stop before the next item.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            // The worker may already be gone.
            let _ = cancel.send(());
        }
    }

    /// Stop the worker at its next await point, dropping the source.
    ///
    /// [`IngestionHandle::wait`] then fails with
    /// [`SynotrieError::OperationCancelled`].
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Receive the next error reported by the worker.
    ///
    /// Returns `None` once the worker has finished and every error was read.
    pub async fn next_error(&mut self) -> Option<SynotrieError> {
        self.errors.recv().await
    }

    /// Check whether the worker has finished.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the worker to finish.
    pub async fn wait(self) -> Result<IngestionSummary> {
        self.task.await.map_err(|e| {
            if e.is_cancelled() {
                SynotrieError::cancelled("ingestion worker aborted")
            } else {
                SynotrieError::ingestion(format!("ingestion worker failed: {e}"))
            }
        })
    }
}

impl fmt::Debug for IngestionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionHandle")
            .field("cancellable", &self.cancel.is_some())
            .field("finished", &self.task.is_finished())
            .finish()
    }
}

/// Index the items of `source` into a new trie in the background.
///
/// Must be called from within a tokio runtime.
pub fn stream_to_trie<V, St, G, I, S>(
    source: St,
    synonyms: G,
    options: TrieOptions,
) -> Result<(SharedTrie<V>, IngestionHandle)>
where
    V: StringLeaves + Clone + Eq + Hash + Send + Sync + 'static,
    St: Stream<Item = V> + Send + 'static,
    G: IntoIterator<Item = I>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    try_stream_to_trie(source.map(Ok::<V, Infallible>), synonyms, options)
}

/// Index the items of a fallible `source` into a new trie in the background.
///
/// Source errors are logged, reported through
/// [`IngestionHandle::next_error`] and skipped.
pub fn try_stream_to_trie<V, E, St, G, I, S>(
    source: St,
    synonyms: G,
    options: TrieOptions,
) -> Result<(SharedTrie<V>, IngestionHandle)>
where
    V: StringLeaves + Clone + Eq + Hash + Send + Sync + 'static,
    E: fmt::Display + Send + 'static,
    St: Stream<Item = std::result::Result<V, E>> + Send + 'static,
    G: IntoIterator<Item = I>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let trie: SharedTrie<V> = Arc::new(RwLock::new(Trie::with_config(synonyms, options)?));
    let (cancel_tx, cancel_rx) = oneshot::channel();
    let (error_tx, error_rx) = mpsc::unbounded_channel();

    let task = tokio::spawn(ingest(Arc::clone(&trie), source, cancel_rx, error_tx));

    Ok((
        trie,
        IngestionHandle {
            cancel: Some(cancel_tx),
            errors: error_rx,
            task,
        },
    ))
}

async fn ingest<V, E, St>(
    trie: SharedTrie<V>,
    source: St,
    mut cancel: oneshot::Receiver<()>,
    errors: mpsc::UnboundedSender<SynotrieError>,
) -> IngestionSummary
where
    V: StringLeaves + Clone + Eq + Hash + Send + Sync,
    E: fmt::Display,
    St: Stream<Item = std::result::Result<V, E>>,
{
    let analyzer = trie.read().analyzer().clone();
    let mut source = std::pin::pin!(source);
    let mut summary = IngestionSummary::default();
    let mut detached = false;

    log::info!("streaming ingestion started");
    loop {
        tokio::select! {
            biased;

            signal = &mut cancel, if !detached => match signal {
                Ok(()) => {
                    summary.cancelled = true;
                    break;
                }
                // The handle was dropped: keep going until the source ends.
                Err(_) => detached = true,
            },

            item = source.next() => match item {
                Some(Ok(object)) => match object_tokens(&object, &analyzer) {
                    Ok(tokens) => {
                        summary.tokens += trie.write().insert_tokens(&tokens, object);
                        summary.indexed += 1;
                    }
                    Err(e) => {
                        log::warn!("failed to analyze a streamed object: {e}");
                        summary.failed += 1;
                        let _ = errors.send(e);
                    }
                },
                Some(Err(e)) => {
                    log::warn!("streaming source reported an error: {e}");
                    summary.failed += 1;
                    let _ = errors.send(SynotrieError::ingestion(e.to_string()));
                }
                None => break,
            },
        }
    }

    log::info!(
        "streaming ingestion {}: {} items, {} tokens, {} failures",
        if summary.cancelled { "cancelled" } else { "finished" },
        summary.indexed,
        summary.tokens,
        summary.failed
    );
    summary
}
