//! Component discovery for the gallery showcase.
//!
//! This crate owns the scan phase: listing a components directory,
//! filtering by recognized source extensions, and deriving route keys.
//! Everything downstream (page rendering, the sidebar, the route listing)
//! consumes the descriptors produced here.

mod scanner;

pub use scanner::{COMPONENT_EXTENSIONS, ComponentDescriptor, ComponentScanner};
