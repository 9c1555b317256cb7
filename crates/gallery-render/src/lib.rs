//! Page rendering pipeline for the gallery showcase.
//!
//! Turns a route segment into a complete component page: resolve the
//! segment against the components directory, read the source, derive the
//! description and usage snippet, apply per-component source rewrites,
//! highlight (or fall back to an escaped code block), and emit the
//! fixed-shape page. The sidebar builder lives here too, sharing the same
//! scanner.
//!
//! Every failure is logged once and collapses to a not-found outcome for
//! the caller; nothing in this crate retries or caches.

pub mod html;
mod highlight;
mod page;
mod preview;
mod rewrite;
pub mod sandbox;
pub mod sidebar;

pub use highlight::{Highlight, HighlightError, escape_html, fallback_code_block};
pub use page::{PageRenderer, PreviewMode, RenderError, RenderPayload};
pub use preview::{ComponentPreview, PreviewRegistry};
pub use rewrite::{SourceRewrites, ensure_default_export};
