//! Preview registry.
//!
//! Preview markup cannot be derived from a component's source at run
//! time, so the renderable side of each component is an explicit registry
//! entry: a stable route key mapped to something that can produce preview
//! markup. The registry is built once at process start; source text is
//! still read fresh on every request.
//!
//! A component present on disk but absent from the registry is treated as
//! a load failure in inline-preview mode.

use std::collections::HashMap;

/// A renderable unit: produces the preview markup for one component.
pub trait ComponentPreview: Send + Sync {
    /// Render the preview HTML fragment.
    fn html(&self) -> String;
}

impl<F> ComponentPreview for F
where
    F: Fn() -> String + Send + Sync,
{
    fn html(&self) -> String {
        self()
    }
}

/// Route-key-indexed registry of component previews.
#[derive(Default)]
pub struct PreviewRegistry {
    entries: HashMap<String, Box<dyn ComponentPreview>>,
}

impl PreviewRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with previews for the shipped demo
    /// components.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("demobutton", || {
            r#"<button class="demo-button" type="button">Demo Button</button>"#.to_owned()
        });
        registry.register("header", || {
            concat!(
                r#"<header class="demo-header"><nav>"#,
                r##"<a href="#home">Home</a>"##,
                r##"<a href="#about">About</a>"##,
                r##"<a href="#skills">Skills</a>"##,
                r##"<a href="#projects">Projects</a>"##,
                r##"<a href="#contact">Contact</a>"##,
                "</nav></header>"
            )
            .to_owned()
        });
        registry
    }

    /// Register a preview under a route key, replacing any existing entry.
    pub fn register(
        &mut self,
        route_key: impl Into<String>,
        preview: impl ComponentPreview + 'static,
    ) {
        self.entries.insert(route_key.into(), Box::new(preview));
    }

    /// Look up the preview for a route key.
    #[must_use]
    pub fn get(&self, route_key: &str) -> Option<&dyn ComponentPreview> {
        self.entries.get(route_key).map(Box::as_ref)
    }

    /// Number of registered previews.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let registry = PreviewRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("demobutton").is_none());
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = PreviewRegistry::new();
        registry.register("widget", || "<div>widget</div>".to_owned());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("widget").unwrap().html(), "<div>widget</div>");
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = PreviewRegistry::new();
        registry.register("widget", || "old".to_owned());
        registry.register("widget", || "new".to_owned());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("widget").unwrap().html(), "new");
    }

    #[test]
    fn test_builtins_cover_demo_components() {
        let registry = PreviewRegistry::with_builtins();
        assert!(registry.get("demobutton").is_some());
        assert!(registry.get("header").is_some());
        assert!(registry.get("demobutton").unwrap().html().contains("<button"));
    }
}
