//! Debounced query pipeline
//!
//! Converts search-box keystrokes into rate-limited, cancellable product
//! lookups. Trailing-edge only: a lookup is issued after a quiescent period,
//! never on the first keystroke.
//!
//! # Cancellation
//!
//! Every keystroke (and teardown) bumps a generation counter under the state
//! lock and aborts the armed timer task. The timer re-checks the generation
//! after its sleep, so a fire racing teardown is a structural no-op rather
//! than a cleared handle that might still run.
//!
//! # Staleness
//!
//! Lookup completions are not ordered relative to issuance. Each lookup
//! captures the query text it was issued for and applies its result only if
//! the committed query still equals that text at resolution time.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::SearchClient;
use crate::config::SearchConfig;
use crate::product::Product;

/// Emitted whenever a fresh result set is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchUpdate {
    /// Query the results belong to.
    pub query: String,
    /// Matching products, ordered by relevance.
    pub products: Vec<Product>,
}

/// Point-in-time view of the pipeline for the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSnapshot {
    /// Latest unfiltered input text.
    pub raw_text: String,
    /// Text that actually triggered a lookup; `None` means no active query.
    pub committed_query: Option<String>,
    /// Freshest resolved result set, `None` until a lookup has resolved.
    pub results: Option<Vec<Product>>,
}

/// State shared between the pipeline handle and its timer/lookup tasks.
struct PipelineState {
    raw_text: String,
    committed_query: Option<String>,
    results: Option<Vec<Product>>,
    /// Bumped on every keystroke and on cancel; an armed timer is valid only
    /// for the generation it was created under.
    generation: u64,
}

/// Debounced search pipeline driving a [`SearchClient`].
///
/// Each instance owns its timer and query state exclusively; the lock is
/// never held across an await.
pub struct SearchPipeline<C: SearchClient> {
    client: Arc<C>,
    debounce: Duration,
    state: Arc<Mutex<PipelineState>>,
    /// At most one armed debounce timer.
    timer: Option<JoinHandle<()>>,
    update_tx: mpsc::UnboundedSender<SearchUpdate>,
}

impl<C: SearchClient> SearchPipeline<C> {
    /// Create a pipeline and the channel on which fresh results arrive.
    pub fn new(client: C, config: SearchConfig) -> (Self, mpsc::UnboundedReceiver<SearchUpdate>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let pipeline = Self {
            client: Arc::new(client),
            debounce: config.debounce(),
            state: Arc::new(Mutex::new(PipelineState {
                raw_text: String::new(),
                committed_query: None,
                results: None,
                generation: 0,
            })),
            timer: None,
            update_tx,
        };
        (pipeline, update_rx)
    }

    /// Record a keystroke.
    ///
    /// Cancels any pending timer. Empty text drops back to idle immediately
    /// (no lookup, committed query cleared); non-empty text arms a fresh
    /// trailing-edge timer for the configured window.
    pub fn on_input_change(&mut self, text: &str) {
        let generation = {
            let mut state = self.state.lock();
            state.raw_text = text.to_string();
            state.generation += 1;
            if text.is_empty() {
                state.committed_query = None;
            }
            state.generation
        };

        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        if text.is_empty() {
            debug!("search input cleared, pipeline idle");
            return;
        }

        let state = Arc::clone(&self.state);
        let client = Arc::clone(&self.client);
        let update_tx = self.update_tx.clone();
        let query = text.to_string();
        let delay = self.debounce;

        debug!(%query, delay_ms = delay.as_millis() as u64, "debounce timer armed");
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            {
                let mut state = state.lock();
                if state.generation != generation {
                    // Superseded or torn down while the fire was in flight.
                    return;
                }
                state.committed_query = Some(query.clone());
            }

            debug!(%query, "debounce fired, issuing lookup");
            // The lookup runs detached: cancelling the timer handle must never
            // kill an in-flight lookup, whose result is judged for staleness
            // at resolution instead.
            tokio::spawn(async move {
                let products = match client.search(&query).await {
                    Ok(products) => products,
                    Err(error) => {
                        warn!(%query, %error, "lookup failed, treating as no results");
                        Vec::new()
                    }
                };

                let mut state = state.lock();
                if state.committed_query.as_deref() != Some(query.as_str()) {
                    debug!(%query, "discarding stale lookup result");
                    return;
                }
                state.results = Some(products.clone());
                let _ = update_tx.send(SearchUpdate { query, products });
            });
        }));
    }

    /// Clear any pending timer. Idempotent; also invoked from `Drop`.
    pub fn cancel(&mut self) {
        self.state.lock().generation += 1;
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    /// Snapshot of the pipeline for rendering.
    pub fn snapshot(&self) -> SearchSnapshot {
        let state = self.state.lock();
        SearchSnapshot {
            raw_text: state.raw_text.clone(),
            committed_query: state.committed_query.clone(),
            results: state.results.clone(),
        }
    }
}

impl<C: SearchClient> Drop for SearchPipeline<C> {
    fn drop(&mut self) {
        self.cancel();
    }
}
