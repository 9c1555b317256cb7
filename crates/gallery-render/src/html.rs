//! Page assembly.
//!
//! Every page shares one layout: the sidebar plus a main column. The
//! component page has a fixed shape in a fixed order: title, Description,
//! Preview, Usage, Component Code.

use std::fmt::Write;

use crate::highlight::{escape_html, fallback_code_block};
use crate::page::RenderPayload;

const STYLE: &str = "\
body{margin:0;display:flex;font-family:system-ui,sans-serif;color:#2c2a25}\
.sidebar{width:220px;min-height:100vh;border-right:1px solid #eee;padding:16px}\
.sidebar-label{font-size:.75em;text-transform:uppercase;color:#888;margin:12px 0 4px}\
.sidebar-menu{list-style:none;margin:0;padding:0}\
.sidebar-menu a{display:flex;align-items:center;gap:8px;padding:6px 8px;text-decoration:none;color:inherit;border-radius:5px}\
.sidebar-menu a:hover{background:#f5f5f5}\
main{flex:1;padding:20px}\
h1{font-size:2em;margin-bottom:20px}\
h2{font-size:1.5em;margin-bottom:10px}\
section{margin-bottom:30px}\
.preview-frame{border:1px solid #eee;padding:20px;border-radius:5px}\
pre{background:#f5f5f5;padding:15px;border-radius:5px;overflow-x:auto}";

/// Render the component page: title, description, preview, usage, code.
#[must_use]
pub fn component_page(sidebar: &str, payload: &RenderPayload, preview_html: &str) -> String {
    let code_html = payload
        .highlighted_html
        .clone()
        .unwrap_or_else(|| fallback_code_block(&payload.language, &payload.processed_source_text));

    let mut main = String::new();
    write!(main, "<h1>{}</h1>", escape_html(&payload.display_name)).unwrap();
    write!(
        main,
        r#"<section class="description"><h2>Description</h2><p>{}</p></section>"#,
        escape_html(&payload.description)
    )
    .unwrap();
    write!(
        main,
        r#"<section class="preview"><h2>Preview</h2><div class="preview-frame">{preview_html}</div></section>"#
    )
    .unwrap();
    write!(
        main,
        r#"<section class="usage"><h2>Usage</h2>{}</section>"#,
        fallback_code_block(&payload.language, &payload.usage_snippet)
    )
    .unwrap();
    write!(
        main,
        r#"<section class="code"><h2>Component Code</h2>{code_html}</section>"#
    )
    .unwrap();

    layout(&payload.display_name, sidebar, &main)
}

/// Render the welcome page.
#[must_use]
pub fn home_page(sidebar: &str) -> String {
    let main = concat!(
        "<h1>Welcome to Your UI Component Showcase</h1>",
        "<p>This is a place to browse, test, and understand the custom UI \
         components you&#x27;ve designed.</p>",
        "<p>Please select a component from the sidebar to see its preview \
         and usage details.</p>"
    );
    layout("Component Showcase", sidebar, main)
}

/// Render the uniform not-found page.
#[must_use]
pub fn not_found_page(sidebar: &str) -> String {
    let main = concat!(
        "<h1>404</h1>",
        "<p>This component could not be found.</p>",
        r#"<p><a href="/">Back to the showcase</a></p>"#
    );
    layout("Not Found", sidebar, main)
}

fn layout(title: &str, sidebar: &str, main: &str) -> String {
    let mut out = String::new();
    write!(
        out,
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{}</title><style>{}</style></head>",
            "<body>{}<main>{}</main></body></html>"
        ),
        escape_html(title),
        STYLE,
        sidebar,
        main
    )
    .unwrap();
    out
}
