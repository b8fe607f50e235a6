//! Search box state management

use crate::query::SearchMode;

/// Search box state
pub struct SearchState {
    /// Current search box contents
    pub query: String,
    /// Activation requested this frame (button click or Enter)
    pub pending: Option<SearchMode>,
    /// First frame flag (for auto-focus)
    pub first_frame: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            pending: None,
            first_frame: true,
        }
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }
}
