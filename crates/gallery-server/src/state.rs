//! Application state.
//!
//! Shared state for all request handlers. The renderer is read-only after
//! startup; each request performs its own directory scan and file reads.

use gallery_render::PageRenderer;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Page rendering pipeline.
    pub(crate) renderer: PageRenderer,
    /// Enable verbose output.
    pub(crate) verbose: bool,
    /// Application version.
    pub(crate) version: String,
}
