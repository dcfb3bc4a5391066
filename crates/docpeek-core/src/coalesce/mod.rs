//! Request coalescing
//!
//! Editors emit bursts of cursor moves and keystrokes far faster than a
//! compile can finish. The coalescer sits in front of a [`PreviewSession`]
//! and collapses each burst into a single compile-and-render pass: while
//! requests keep arriving within the quiet window only the latest one is
//! kept, and every caller in the burst receives that one result. A cap
//! bounds how long a continuous stream can postpone the pass.
//!
//! Content and cursor requests debounce independently, with different
//! windows, but share one session so a content recompile invalidates the
//! fragments cursor requests read.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::time::{sleep_until, Instant};

use crate::compiler::Compiler;
use crate::error::PreviewError;
use crate::extract::ExtractOptions;
use crate::session::{PreviewSession, RequestMode};

#[cfg(test)]
mod tests;

/// Debounce windows for one request stream.
#[derive(Debug, Clone, Copy)]
pub struct DebounceConfig {
    /// How long the stream must stay quiet before the pass runs.
    pub quiet: Duration,
    /// Upper bound on postponement under a continuous stream.
    pub max_wait: Duration,
}

impl DebounceConfig {
    /// Window for text edits; compiles are expensive, wait longer.
    #[must_use]
    pub fn content() -> Self {
        DebounceConfig {
            quiet: Duration::from_millis(500),
            max_wait: Duration::from_millis(1000),
        }
    }

    /// Window for caret moves; usually served from cache, keep it snappy.
    #[must_use]
    pub fn cursor() -> Self {
        DebounceConfig {
            quiet: Duration::from_millis(100),
            max_wait: Duration::from_millis(1000),
        }
    }
}

/// One queued preview request plus the channel its caller waits on.
struct Pending {
    source: String,
    origin_file: PathBuf,
    line: u32,
    reply: oneshot::Sender<String>,
}

/// Debouncing front door to a shared [`PreviewSession`].
///
/// Cheap to clone; all clones feed the same pair of worker tasks. The
/// workers stop once every clone has been dropped.
#[derive(Clone)]
pub struct QueryCoalescer {
    content_tx: mpsc::UnboundedSender<Pending>,
    cursor_tx: mpsc::UnboundedSender<Pending>,
}

impl QueryCoalescer {
    #[must_use]
    pub fn new(compiler: Arc<dyn Compiler>, options: ExtractOptions) -> Self {
        Self::with_configs(
            compiler,
            options,
            DebounceConfig::content(),
            DebounceConfig::cursor(),
        )
    }

    #[must_use]
    pub fn with_configs(
        compiler: Arc<dyn Compiler>,
        options: ExtractOptions,
        content: DebounceConfig,
        cursor: DebounceConfig,
    ) -> Self {
        let session = Arc::new(Mutex::new(PreviewSession::new(options)));

        let (content_tx, content_rx) = mpsc::unbounded_channel();
        let (cursor_tx, cursor_rx) = mpsc::unbounded_channel();

        tokio::spawn(run_worker(
            content_rx,
            Arc::clone(&session),
            Arc::clone(&compiler),
            RequestMode::Content,
            content,
        ));
        tokio::spawn(run_worker(
            cursor_rx,
            session,
            compiler,
            RequestMode::Cursor,
            cursor,
        ));

        QueryCoalescer {
            content_tx,
            cursor_tx,
        }
    }

    /// Queue a content change and wait for the fragment of its burst.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::ChannelClosed`] when the worker task has
    /// stopped.
    pub async fn content_changed(
        &self,
        source: &str,
        origin_file: &Path,
        line: u32,
    ) -> Result<String, PreviewError> {
        submit(&self.content_tx, source, origin_file, line).await
    }

    /// Queue a cursor move and wait for the fragment of its burst.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::ChannelClosed`] when the worker task has
    /// stopped.
    pub async fn cursor_moved(
        &self,
        source: &str,
        origin_file: &Path,
        line: u32,
    ) -> Result<String, PreviewError> {
        submit(&self.cursor_tx, source, origin_file, line).await
    }
}

async fn submit(
    tx: &mpsc::UnboundedSender<Pending>,
    source: &str,
    origin_file: &Path,
    line: u32,
) -> Result<String, PreviewError> {
    let (reply_tx, reply_rx) = oneshot::channel();
    tx.send(Pending {
        source: source.to_string(),
        origin_file: origin_file.to_path_buf(),
        line,
        reply: reply_tx,
    })
    .map_err(|_| PreviewError::ChannelClosed)?;

    reply_rx.await.map_err(|_| PreviewError::ChannelClosed)
}

/// Collapses bursts on one channel into single session passes.
async fn run_worker(
    mut rx: mpsc::UnboundedReceiver<Pending>,
    session: Arc<Mutex<PreviewSession>>,
    compiler: Arc<dyn Compiler>,
    mode: RequestMode,
    config: DebounceConfig,
) {
    while let Some(first) = rx.recv().await {
        let burst_start = Instant::now();
        let cap = burst_start + config.max_wait;
        let mut deadline = burst_start + config.quiet;
        let mut latest = first;
        let mut waiters = vec![];

        // collect the burst until the stream goes quiet or the cap hits
        loop {
            tokio::select! {
                () = sleep_until(deadline.min(cap)) => break,
                next = rx.recv() => match next {
                    Some(pending) => {
                        waiters.push(std::mem::replace(&mut latest, pending).reply);
                        deadline = Instant::now() + config.quiet;
                    }
                    // senders gone; run what we have, then stop
                    None => break,
                },
            }
        }

        let markdown = {
            let mut session = session.lock().await;
            session
                .fragment(
                    compiler.as_ref(),
                    &latest.source,
                    &latest.origin_file,
                    latest.line,
                    mode,
                )
                .await
        };

        waiters.push(latest.reply);
        for waiter in waiters {
            // a caller that gave up waiting is not an error
            let _ = waiter.send(markdown.clone());
        }
    }

    tracing::debug!("Coalescer worker for {mode:?} requests stopped");
}
