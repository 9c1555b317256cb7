//! Component page pipeline.
//!
//! One render is a single sequential pass: resolve the route segment,
//! read the source, derive display data, apply rewrites and default-export
//! synthesis, highlight, and assemble the page. Nothing is shared between
//! renders and nothing is cached; repeated requests redo the same work.

use gallery_scan::{ComponentDescriptor, ComponentScanner};

use crate::highlight::Highlight;
use crate::preview::PreviewRegistry;
use crate::rewrite::{SourceRewrites, ensure_default_export};
use crate::{html, sandbox, sidebar};

/// How the Preview section is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    /// Server-rendered preview from the registry; components without a
    /// registered preview are load failures.
    Inline,
    /// Embedded editable sandbox pre-populated with the processed source.
    #[default]
    Sandbox,
}

/// Display data assembled for one page render.
///
/// Owned solely by that render; discarded when the response is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPayload {
    /// Case-preserved component name.
    pub display_name: String,
    /// Templated description boilerplate.
    pub description: String,
    /// Synthesized import-and-render usage snippet.
    pub usage_snippet: String,
    /// Raw source text as read from disk.
    pub source_text: String,
    /// Source text after rewrites and default-export synthesis.
    pub processed_source_text: String,
    /// Highlighter output, `None` when unavailable or failed.
    pub highlighted_html: Option<String>,
    /// Language tag derived from the source extension.
    pub language: String,
}

/// Error produced by the page pipeline.
///
/// Both variants beyond `NotFound` are load failures; the distinction only
/// survives in the log message, never in user-visible behavior.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// No component matches the route segment (or the scan failed).
    #[error("Component not found: {0}")]
    NotFound(String),
    /// The component's source could not be read.
    #[error("Failed to load component {name}: {source}")]
    Load {
        /// Resolved display name.
        name: String,
        /// Underlying read error.
        #[source]
        source: std::io::Error,
    },
    /// No preview is registered for the component (inline mode only).
    #[error("No preview registered for component: {0}")]
    PreviewMissing(String),
}

/// Renders component pages against a scanner and a preview registry.
pub struct PageRenderer {
    scanner: ComponentScanner,
    registry: PreviewRegistry,
    rewrites: SourceRewrites,
    highlighter: Option<Box<dyn Highlight>>,
    preview_mode: PreviewMode,
    theme: String,
}

impl PageRenderer {
    /// Create a renderer with the built-in rewrite rules, sandbox
    /// previews, and no highlighter.
    #[must_use]
    pub fn new(scanner: ComponentScanner, registry: PreviewRegistry) -> Self {
        Self {
            scanner,
            registry,
            rewrites: SourceRewrites::with_defaults(),
            highlighter: None,
            preview_mode: PreviewMode::default(),
            theme: "auto".to_owned(),
        }
    }

    /// Use the given highlighting capability.
    #[must_use]
    pub fn with_highlighter(mut self, highlighter: Box<dyn Highlight>) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    /// Select how previews are produced.
    #[must_use]
    pub fn with_preview_mode(mut self, mode: PreviewMode) -> Self {
        self.preview_mode = mode;
        self
    }

    /// Theme name passed to the highlighter and the sandbox embed.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Replace the rewrite rule set.
    #[must_use]
    pub fn with_rewrites(mut self, rewrites: SourceRewrites) -> Self {
        self.rewrites = rewrites;
        self
    }

    /// The scanner backing this renderer.
    #[must_use]
    pub fn scanner(&self) -> &ComponentScanner {
        &self.scanner
    }

    /// All valid route segments (empty on scan failure).
    #[must_use]
    pub fn route_keys(&self) -> Vec<String> {
        self.scanner.route_keys()
    }

    /// Build the display payload for a route segment.
    pub fn payload(&self, segment: &str) -> Result<RenderPayload, RenderError> {
        self.build(segment).map(|(_, payload)| payload)
    }

    /// Render the complete component page for a route segment.
    pub fn render_page(&self, segment: &str) -> Result<String, RenderError> {
        let (descriptor, payload) = self.build(segment)?;

        let preview_html = match self.preview_mode {
            PreviewMode::Inline => self
                .registry
                .get(&descriptor.route_key)
                .ok_or_else(|| {
                    tracing::warn!(
                        component = %descriptor.display_name,
                        "No preview registered for component"
                    );
                    RenderError::PreviewMissing(descriptor.display_name.clone())
                })?
                .html(),
            PreviewMode::Sandbox => sandbox::sandbox_embed(
                &payload.display_name,
                &payload.processed_source_text,
                &self.theme,
            ),
        };

        let sidebar = sidebar::sidebar_html(&self.scanner);
        Ok(html::component_page(&sidebar, &payload, &preview_html))
    }

    /// Render the welcome page.
    #[must_use]
    pub fn home_page(&self) -> String {
        html::home_page(&sidebar::sidebar_html(&self.scanner))
    }

    /// Render the uniform not-found page.
    #[must_use]
    pub fn not_found_page(&self) -> String {
        html::not_found_page(&sidebar::sidebar_html(&self.scanner))
    }

    fn build(&self, segment: &str) -> Result<(ComponentDescriptor, RenderPayload), RenderError> {
        let descriptor = self
            .scanner
            .resolve(segment)
            .ok_or_else(|| RenderError::NotFound(segment.to_owned()))?;

        let source_text = self.scanner.read_source(&descriptor).map_err(|e| {
            tracing::warn!(
                component = %descriptor.display_name,
                error = %e,
                "Failed to load component source"
            );
            RenderError::Load {
                name: descriptor.display_name.clone(),
                source: e,
            }
        })?;

        let mut processed = source_text.clone();
        self.rewrites.apply(&descriptor.display_name, &mut processed);
        ensure_default_export(&descriptor.display_name, &mut processed);

        let language = language_for(&descriptor);
        let highlighted_html = self.highlighter.as_deref().and_then(|highlighter| {
            match highlighter.highlight(&processed, language, &self.theme) {
                Ok(markup) => Some(markup),
                Err(e) => {
                    tracing::warn!(
                        component = %descriptor.display_name,
                        error = %e,
                        "Highlighting failed, using escaped fallback"
                    );
                    None
                }
            }
        });

        let payload = RenderPayload {
            description: description_for(&descriptor.display_name),
            usage_snippet: usage_snippet_for(&descriptor.display_name),
            display_name: descriptor.display_name.clone(),
            source_text,
            processed_source_text: processed,
            highlighted_html,
            language: language.to_owned(),
        };
        Ok((descriptor, payload))
    }
}

/// Language tag for the highlighter, derived from the source extension.
fn language_for(descriptor: &ComponentDescriptor) -> &'static str {
    match descriptor.file_path.extension().and_then(|e| e.to_str()) {
        Some("jsx") => "jsx",
        _ => "tsx",
    }
}

fn description_for(display_name: &str) -> String {
    format!(
        "This is a brief description for the {display_name} component. \
         It showcases its basic functionality and usage."
    )
}

fn usage_snippet_for(display_name: &str) -> String {
    format!(
        "import {display_name} from '@/components/design/{display_name}';\n\
         \n\
         export default function MyPage() {{\n\
         \x20 return (\n\
         \x20   <{display_name} />\n\
         \x20 );\n\
         }}"
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gallery_scan::ComponentScanner;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::highlight::HighlightError;

    const DEMO_BUTTON_SRC: &str = concat!(
        "import React from \"react\";\n",
        "\n",
        "const DemoButton = () => <button>Demo Button</button>;\n",
        "\n",
        "export default DemoButton;\n"
    );

    const HEADER_SRC: &str = concat!(
        "import Link from \"next/link\";\n",
        "import { motion } from \"motion/react\";\n",
        "\n",
        "export function Header() {\n",
        "  return <Link href=\"/\">home</Link>;\n",
        "}\n"
    );

    fn demo_renderer(temp_dir: &tempfile::TempDir) -> PageRenderer {
        fs::write(temp_dir.path().join("DemoButton.tsx"), DEMO_BUTTON_SRC).unwrap();
        fs::write(temp_dir.path().join("Header.tsx"), HEADER_SRC).unwrap();
        let scanner = ComponentScanner::new(temp_dir.path().to_path_buf());
        PageRenderer::new(scanner, PreviewRegistry::with_builtins())
    }

    #[test]
    fn test_render_demo_button_page() {
        let temp_dir = tempfile::tempdir().unwrap();
        let renderer = demo_renderer(&temp_dir).with_preview_mode(PreviewMode::Inline);

        let page = renderer.render_page("demobutton").unwrap();

        assert!(page.contains("<h1>DemoButton</h1>"));
        assert!(page.contains("Description"));
        assert!(page.contains("Preview"));
        assert!(page.contains("<button"));
        assert!(page.contains("Component Code"));
        assert!(page.contains("const DemoButton"));
    }

    #[test]
    fn test_render_is_case_insensitive() {
        let temp_dir = tempfile::tempdir().unwrap();
        let renderer = demo_renderer(&temp_dir);

        for segment in ["DemoButton", "demobutton", "DEMOBUTTON"] {
            let payload = renderer.payload(segment).unwrap();
            assert_eq!(payload.display_name, "DemoButton");
        }
    }

    #[test]
    fn test_render_unknown_segment_is_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let renderer = demo_renderer(&temp_dir);

        let result = renderer.render_page("doesnotexist");
        assert!(matches!(result, Err(RenderError::NotFound(_))));
    }

    #[test]
    fn test_scan_failure_is_not_found() {
        let scanner = ComponentScanner::new("/nonexistent/components".into());
        let renderer = PageRenderer::new(scanner, PreviewRegistry::new());

        assert!(matches!(
            renderer.render_page("demobutton"),
            Err(RenderError::NotFound(_))
        ));
        assert!(renderer.route_keys().is_empty());
    }

    #[test]
    fn test_header_rewrites_applied() {
        let temp_dir = tempfile::tempdir().unwrap();
        let renderer = demo_renderer(&temp_dir);

        let payload = renderer.payload("header").unwrap();

        assert!(payload.source_text.contains("import Link from \"next/link\";"));
        assert!(!payload.processed_source_text.contains("import Link from \"next/link\";"));
        assert!(!payload.processed_source_text.contains("\"motion/react\""));
        assert!(payload.processed_source_text.contains("<a href=\"/\">home</a>"));
    }

    #[test]
    fn test_header_gets_synthesized_default_export() {
        let temp_dir = tempfile::tempdir().unwrap();
        let renderer = demo_renderer(&temp_dir);

        let payload = renderer.payload("header").unwrap();
        assert!(payload.processed_source_text.contains("export default Header;"));
    }

    #[test]
    fn test_demo_button_keeps_existing_default_export() {
        let temp_dir = tempfile::tempdir().unwrap();
        let renderer = demo_renderer(&temp_dir);

        let payload = renderer.payload("demobutton").unwrap();
        assert_eq!(
            payload.processed_source_text.matches("export default").count(),
            1
        );
    }

    #[test]
    fn test_description_and_usage_templates() {
        let temp_dir = tempfile::tempdir().unwrap();
        let renderer = demo_renderer(&temp_dir);

        let payload = renderer.payload("demobutton").unwrap();

        assert_eq!(
            payload.description,
            "This is a brief description for the DemoButton component. \
             It showcases its basic functionality and usage."
        );
        assert!(payload
            .usage_snippet
            .contains("import DemoButton from '@/components/design/DemoButton';"));
        assert!(payload.usage_snippet.contains("<DemoButton />"));
    }

    #[test]
    fn test_missing_preview_is_load_failure_in_inline_mode() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("Unregistered.tsx"), "const X = 1;").unwrap();

        let scanner = ComponentScanner::new(temp_dir.path().to_path_buf());
        let renderer = PageRenderer::new(scanner, PreviewRegistry::new())
            .with_preview_mode(PreviewMode::Inline);

        assert!(matches!(
            renderer.render_page("unregistered"),
            Err(RenderError::PreviewMissing(name)) if name == "Unregistered"
        ));
    }

    #[test]
    fn test_sandbox_mode_needs_no_registered_preview() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("Unregistered.tsx"), "const X = 1;").unwrap();

        let scanner = ComponentScanner::new(temp_dir.path().to_path_buf());
        let renderer = PageRenderer::new(scanner, PreviewRegistry::new());

        let page = renderer.render_page("unregistered").unwrap();
        assert!(page.contains(r#"class="sandbox-embed""#));
        assert!(page.contains(r#"data-template="react-ts""#));
    }

    #[test]
    fn test_failed_highlighter_falls_back_to_escaped_block() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join("Evil.tsx"),
            "const s = \"<script>alert(1)</script>\";\nexport default 1;\n",
        )
        .unwrap();

        let scanner = ComponentScanner::new(temp_dir.path().to_path_buf());
        let failing = |_: &str, _: &str, _: &str| -> Result<String, HighlightError> {
            Err(HighlightError("no grammar".to_owned()))
        };
        let renderer =
            PageRenderer::new(scanner, PreviewRegistry::new()).with_highlighter(Box::new(failing));

        let payload = renderer.payload("evil").unwrap();
        assert!(payload.highlighted_html.is_none());

        let page = renderer.render_page("evil").unwrap();
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_successful_highlighter_output_is_used() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("Plain.tsx"), "export default 1;\n").unwrap();

        let scanner = ComponentScanner::new(temp_dir.path().to_path_buf());
        let marking = |_: &str, lang: &str, theme: &str| -> Result<String, HighlightError> {
            Ok(format!("<pre data-lang=\"{lang}\" data-theme=\"{theme}\"></pre>"))
        };
        let renderer = PageRenderer::new(scanner, PreviewRegistry::new())
            .with_highlighter(Box::new(marking))
            .with_theme("dark");

        let payload = renderer.payload("plain").unwrap();
        assert_eq!(
            payload.highlighted_html.as_deref(),
            Some("<pre data-lang=\"tsx\" data-theme=\"dark\"></pre>")
        );
    }

    #[test]
    fn test_language_follows_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("Old.jsx"), "export default 1;\n").unwrap();

        let scanner = ComponentScanner::new(temp_dir.path().to_path_buf());
        let renderer = PageRenderer::new(scanner, PreviewRegistry::new());

        assert_eq!(renderer.payload("old").unwrap().language, "jsx");
    }
}
