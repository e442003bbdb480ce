//! Live product search for the storefront header
//!
//! This crate turns a stream of search-box keystrokes into rate-limited,
//! cancellable product lookups:
//! - Trailing-edge debounce (500ms default, configurable)
//! - At most one armed timer per pipeline, cancelled on every keystroke
//! - Staleness guard so out-of-order lookup completions never clobber the
//!   freshest result set
//! - Lookup failures degrade to an empty result set, never a crash

pub mod catalog;
pub mod client;
pub mod config;
pub mod pipeline;
pub mod product;

pub use catalog::InMemoryCatalog;
pub use client::{SearchClient, SearchError};
pub use config::SearchConfig;
pub use pipeline::{SearchPipeline, SearchSnapshot, SearchUpdate};
pub use product::Product;
