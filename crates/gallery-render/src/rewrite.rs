//! Per-component source text rewrites.
//!
//! Some components import framework modules that make no sense in a
//! standalone code listing or sandbox (router links, animation runtimes).
//! Rewrites are a closed set of name-keyed (pattern, replacement) rule
//! lists, applied in order; adding a rule for a new component is an
//! addition, not an edit to shared logic.

use std::sync::LazyLock;

use regex::Regex;

/// Matches any explicit default-export statement, including one we
/// synthesized on a previous pass.
static DEFAULT_EXPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*export\s+default\b").expect("valid regex"));

/// Name-keyed source replacement rules.
#[derive(Debug, Default)]
pub struct SourceRewrites {
    rules: Vec<(String, Vec<(String, String)>)>,
}

impl SourceRewrites {
    /// Create an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in rule set for the shipped demo components.
    ///
    /// `Header` imports a router link and an animation runtime that are
    /// unavailable in the standalone listing: the link tag is rewritten to
    /// a plain anchor and the animation import path to its standalone
    /// package.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut rewrites = Self::new();
        rewrites.add("Header", "import Link from \"next/link\";\n", "");
        rewrites.add("Header", "<Link", "<a");
        rewrites.add("Header", "</Link>", "</a>");
        rewrites.add("Header", "\"motion/react\"", "\"framer-motion\"");
        rewrites
    }

    /// Register a replacement for a component: all occurrences of
    /// `pattern` are replaced with `replacement`, in registration order.
    pub fn add(
        &mut self,
        component: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) {
        let component = component.into();
        let rule = (pattern.into(), replacement.into());
        if let Some((_, rules)) = self.rules.iter_mut().find(|(name, _)| *name == component) {
            rules.push(rule);
        } else {
            self.rules.push((component, vec![rule]));
        }
    }

    /// Apply the rules registered for `component`, if any.
    pub fn apply(&self, component: &str, source: &mut String) {
        let Some((_, rules)) = self.rules.iter().find(|(name, _)| name == component) else {
            return;
        };
        for (pattern, replacement) in rules {
            if source.contains(pattern.as_str()) {
                *source = source.replace(pattern, replacement);
            }
        }
    }

    /// Number of components with registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Append `export default <name>;` when the source has no explicit
/// default-export statement, so the displayed snippet is self-contained.
///
/// Idempotent: the appended line itself matches the check, so a second
/// pass leaves the text unchanged.
pub fn ensure_default_export(display_name: &str, source: &mut String) {
    if DEFAULT_EXPORT_RE.is_match(source) {
        return;
    }
    if !source.is_empty() && !source.ends_with('\n') {
        source.push('\n');
    }
    source.push_str("\nexport default ");
    source.push_str(display_name);
    source.push_str(";\n");
}
