//! Sidebar navigation builder.
//!
//! The sidebar is a fixed static entry set followed by one dynamic entry
//! per discovered component. It shares the component scanner with the page
//! pipeline, so both always agree on what exists. A scan failure renders
//! the static set alone; the failure is logged by the scanner.

use std::fmt::Write;

use gallery_scan::ComponentScanner;

use crate::highlight::escape_html;

// 16x16 stroke icons, one per entry kind
const SVG_HOME: &str = r#"<svg class="nav-icon" viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M3 10.5 12 3l9 7.5"/><path d="M5 9.5V21h14V9.5"/></svg>"#;
const SVG_INBOX: &str = r#"<svg class="nav-icon" viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M22 12h-6l-2 3h-4l-2-3H2"/><path d="M5 5h14l3 7v7H2v-7Z"/></svg>"#;
const SVG_CALENDAR: &str = r#"<svg class="nav-icon" viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><rect x="3" y="5" width="18" height="16" rx="2"/><path d="M8 3v4M16 3v4M3 11h18"/></svg>"#;
const SVG_SEARCH: &str = r#"<svg class="nav-icon" viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><circle cx="11" cy="11" r="7"/><path d="m21 21-4.3-4.3"/></svg>"#;
const SVG_SETTINGS: &str = r#"<svg class="nav-icon" viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><circle cx="12" cy="12" r="3"/><path d="M19.4 15a7.9 7.9 0 0 0 .1-6l2-1.6-2-3.4-2.4 1a8 8 0 0 0-5.2-3L11.5 0h-4L7 2a8 8 0 0 0-5.2 3l-2.4-1-2 3.4 2 1.6a7.9 7.9 0 0 0 .1 6"/></svg>"#;
const SVG_PACKAGE: &str = r#"<svg class="nav-icon" viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="m12 2 9 5v10l-9 5-9-5V7Z"/><path d="m3 7 9 5 9-5M12 12v10"/></svg>"#;

/// Opaque icon handle for a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Inbox,
    Calendar,
    Search,
    Settings,
    /// Generic icon shared by all component entries.
    Package,
}

impl Icon {
    /// Inline SVG markup for this icon.
    #[must_use]
    pub fn svg(self) -> &'static str {
        match self {
            Self::Home => SVG_HOME,
            Self::Inbox => SVG_INBOX,
            Self::Calendar => SVG_CALENDAR,
            Self::Search => SVG_SEARCH,
            Self::Settings => SVG_SETTINGS,
            Self::Package => SVG_PACKAGE,
        }
    }
}

/// One sidebar link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    /// Display title.
    pub title: String,
    /// Link target.
    pub url: String,
    /// Icon handle.
    pub icon: Icon,
}

impl NavigationEntry {
    fn new(title: &str, url: &str, icon: Icon) -> Self {
        Self {
            title: title.to_owned(),
            url: url.to_owned(),
            icon,
        }
    }
}

/// The fixed application entry set.
#[must_use]
pub fn static_entries() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::new("Home", "/", Icon::Home),
        NavigationEntry::new("Inbox", "#", Icon::Inbox),
        NavigationEntry::new("Calendar", "#", Icon::Calendar),
        NavigationEntry::new("Search", "#", Icon::Search),
        NavigationEntry::new("Settings", "#", Icon::Settings),
    ]
}

/// One entry per discovered component, linking to `/design/{route_key}`.
///
/// Empty when the components directory is empty or unreadable.
#[must_use]
pub fn component_entries(scanner: &ComponentScanner) -> Vec<NavigationEntry> {
    scanner
        .scan()
        .into_iter()
        .map(|descriptor| NavigationEntry {
            title: descriptor.display_name,
            url: format!("/design/{}", descriptor.route_key),
            icon: Icon::Package,
        })
        .collect()
}

/// Render the full sidebar: the static group, then a "Design Components"
/// group when any components were discovered.
#[must_use]
pub fn sidebar_html(scanner: &ComponentScanner) -> String {
    let mut out = String::new();
    out.push_str(r#"<aside class="sidebar">"#);
    write_group(&mut out, "Application", &static_entries());

    let components = component_entries(scanner);
    if !components.is_empty() {
        write_group(&mut out, "Design Components", &components);
    }

    out.push_str("</aside>");
    out
}

fn write_group(out: &mut String, label: &str, entries: &[NavigationEntry]) {
    write!(
        out,
        r#"<div class="sidebar-group"><div class="sidebar-label">{}</div><ul class="sidebar-menu">"#,
        escape_html(label)
    )
    .unwrap();
    for entry in entries {
        write!(
            out,
            r#"<li><a href="{}">{}<span>{}</span></a></li>"#,
            escape_html(&entry.url),
            entry.icon.svg(),
            escape_html(&entry.title),
        )
        .unwrap();
    }
    out.push_str("</ul></div>");
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gallery_scan::ComponentScanner;
    use pretty_assertions::assert_eq;

    use super::*;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_static_entries_fixed_set() {
        let titles: Vec<_> = static_entries().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Home", "Inbox", "Calendar", "Search", "Settings"]);
    }

    #[test]
    fn test_component_entries_link_to_design_routes() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("DemoButton.tsx"), "").unwrap();

        let scanner = ComponentScanner::new(temp_dir.path().to_path_buf());
        let entries = component_entries(&scanner);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "DemoButton");
        assert_eq!(entries[0].url, "/design/demobutton");
        assert_eq!(entries[0].icon, Icon::Package);
    }

    #[test]
    fn test_sidebar_unreadable_dir_shows_static_only() {
        let scanner = ComponentScanner::new("/nonexistent/components".into());

        assert!(component_entries(&scanner).is_empty());

        let html = sidebar_html(&scanner);
        assert!(html.contains("Application"));
        assert!(!html.contains("Design Components"));
    }

    #[test]
    fn test_sidebar_includes_component_group() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("Header.tsx"), "").unwrap();

        let scanner = ComponentScanner::new(temp_dir.path().to_path_buf());
        let html = sidebar_html(&scanner);

        assert!(html.contains("Design Components"));
        assert!(html.contains(r#"href="/design/header""#));
        assert!(html.contains("Header"));
    }

    #[test]
    fn test_sidebar_escapes_titles() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("A<B.tsx"), "").unwrap();

        let scanner = ComponentScanner::new(temp_dir.path().to_path_buf());
        let html = sidebar_html(&scanner);

        assert!(!html.contains("A<B"));
        assert!(html.contains("A&lt;B"));
    }
}
