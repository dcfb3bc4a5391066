//! Watch command: serve fragments for events read from stdin
//!
//! Line protocol, one event per line: `cursor N`, `content N` or `quit`.
//! Each event is dispatched as its own task, so events arriving while an
//! earlier request is still debouncing join its burst and the coalescer
//! collapses them into a single pass. Replies print in submission order.
//! The source file is re-read per event and the declaration tree per
//! compile, picking up files an editor or external compiler rewrites
//! while we run.
//!
//! Fragments are printed to stdout, each terminated by a `\x04` line so a
//! consumer can split the stream. Empty fragments print as an empty block.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use docpeek_core::extract::ExtractOptions;
use docpeek_core::{Compiler, JsonCompiler, PreviewError, QueryCoalescer, RequestMode};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::preview::{origin_of, read_source};
use super::types::WatchEvent;

/// Run the watch loop until `quit` or end of input
///
/// # Errors
/// Returns an error if stdin or the tree file cannot be read.
pub async fn run(tree: &Path, source: &Path, show_empty_signatures: bool) -> Result<()> {
    let origin = origin_of(tree).await?;
    let options = ExtractOptions {
        hide_empty_signatures: !show_empty_signatures,
    };
    let compiler: Arc<dyn Compiler> = Arc::new(JsonCompiler::new(tree));
    let coalescer = QueryCoalescer::new(compiler, options);

    info!("Watching '{}' (tree '{}')", source.display(), tree.display());

    serve(
        BufReader::new(tokio::io::stdin()),
        coalescer,
        source,
        &origin,
    )
    .await?;

    info!("Watch loop stopped");
    Ok(())
}

type Reply = JoinHandle<Result<String, PreviewError>>;

/// Dispatch events from `input` through the coalescer until `quit`.
///
/// Dispatch never waits for a reply: the request future is spawned and its
/// handle queued, so the next event can join the same debounce burst. A
/// printer task awaits the handles in queue order, keeping output ordered
/// even when replies resolve together.
pub(crate) async fn serve<R>(
    input: R,
    coalescer: QueryCoalescer,
    source: &Path,
    origin: &Path,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel::<Reply>();
    let printer = tokio::spawn(async move {
        while let Some(reply) = reply_rx.recv().await {
            match reply.await {
                Ok(Ok(markdown)) => {
                    println!("{markdown}");
                    println!("\x04");
                }
                Ok(Err(err)) => warn!("Preview request failed: {err}"),
                Err(err) => warn!("Preview task stopped unexpectedly: {err}"),
            }
        }
    });

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.context("Failed to read events")? {
        if line.trim().is_empty() {
            continue;
        }
        let Some(event) = WatchEvent::parse(&line) else {
            warn!("Ignoring malformed event: '{line}'");
            continue;
        };
        let (mode, line_no) = match event {
            WatchEvent::Quit => break,
            WatchEvent::Cursor(n) => (RequestMode::Cursor, n),
            WatchEvent::Content(n) => (RequestMode::Content, n),
        };

        // a transient read failure skips the event; the preview just stays
        // unchanged until the next one
        let text = match read_source(source).await {
            Ok(text) => text,
            Err(err) => {
                warn!("Skipping event '{line}': {err:#}");
                continue;
            }
        };

        let coalescer = coalescer.clone();
        let origin: PathBuf = origin.to_path_buf();
        let reply = tokio::spawn(async move {
            match mode {
                RequestMode::Cursor => coalescer.cursor_moved(&text, &origin, line_no).await,
                RequestMode::Content => coalescer.content_changed(&text, &origin, line_no).await,
            }
        });
        // send fails only once the printer is gone; nothing left to print to
        let _ = reply_tx.send(reply);
    }

    drop(reply_tx);
    let _ = printer.await;
    Ok(())
}
