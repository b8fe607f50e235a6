//! Searchpad - Minimal web search launcher
//!
//! A desktop widget with one search box and two buttons: "Search" opens
//! a Google results page for whatever is typed, "Feeling Lucky" jumps
//! straight to the top result. The heavy lifting is done by the user's
//! default browser; Searchpad only builds the URL and hands it off.
//!
//! # Example
//!
//! ```no_run
//! use searchpad::{build_search_url, dispatch, SearchMode};
//!
//! // Build without dispatching
//! let url = build_search_url("rust egui tutorial");
//! assert_eq!(url, "https://www.google.com/search?q=rust%20egui%20tutorial");
//!
//! // Build and open the default browser (no-op on an empty query)
//! dispatch("rust egui tutorial", SearchMode::Standard);
//! ```

pub mod error;
pub mod gui;
pub mod logging;
pub mod query;

// Re-export main types
pub use error::{Result, SearchpadError};
pub use query::{
    build_lucky_url, build_search_url, build_url, dispatch, dispatch_via, encode_query,
    SearchMode,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
