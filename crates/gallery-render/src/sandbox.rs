//! Embedded sandbox file maps.
//!
//! The sandbox widget consumes a mapping of virtual file path to
//! `{code, readOnly, active, hidden}` plus a template identifier. This
//! module builds that mapping for one component: a read-only entry file
//! that imports and renders it, and the component's own file carrying the
//! processed source as the active editor tab. The map is embedded in the
//! page as JSON for the client-side widget to pick up.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

use crate::highlight::escape_html;

/// Sandbox template identifier.
pub const SANDBOX_TEMPLATE: &str = "react-ts";

/// One virtual file in the sandbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SandboxFile {
    /// File contents.
    pub code: String,
    /// Whether the editor tab is read-only.
    pub read_only: bool,
    /// Whether this file is the active editor tab.
    pub active: bool,
    /// Whether the file is hidden from the tab bar.
    pub hidden: bool,
}

/// Build the virtual file map for a component.
///
/// `/App.tsx` imports and renders the component (read-only); the
/// component's own file holds the processed source and is the active tab.
#[must_use]
pub fn sandbox_files(display_name: &str, processed_source: &str) -> BTreeMap<String, SandboxFile> {
    let entry = format!(
        "import React from \"react\";\n\
         import {display_name} from \"./{display_name}\";\n\
         \n\
         export default function App() {{\n\
         \x20 return <{display_name} />;\n\
         }}\n"
    );

    let mut files = BTreeMap::new();
    files.insert(
        "/App.tsx".to_owned(),
        SandboxFile {
            code: entry,
            read_only: true,
            active: false,
            hidden: false,
        },
    );
    files.insert(
        format!("/{display_name}.tsx"),
        SandboxFile {
            code: processed_source.to_owned(),
            read_only: false,
            active: true,
            hidden: false,
        },
    );
    files
}

/// Render the embed element the client-side sandbox widget mounts on.
#[must_use]
pub fn sandbox_embed(display_name: &str, processed_source: &str, theme: &str) -> String {
    let files = sandbox_files(display_name, processed_source);
    let json = serde_json::to_string(&files).unwrap_or_default();
    // "</" would terminate the surrounding script element early
    let json = json.replace("</", "<\\/");

    let mut out = String::new();
    write!(
        out,
        r#"<div class="sandbox-embed" data-template="{}" data-theme="{}"><script type="application/json" class="sandbox-files">{json}</script></div>"#,
        escape_html(SANDBOX_TEMPLATE),
        escape_html(theme),
    )
    .unwrap();
    out
}
