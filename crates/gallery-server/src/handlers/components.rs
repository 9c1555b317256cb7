//! Components listing endpoint.
//!
//! Returns the pre-generated set of valid route segments. A scan failure
//! yields an empty listing, never an error response.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/components.
#[derive(Serialize)]
pub(crate) struct ComponentsResponse {
    /// Application version.
    version: String,
    /// Route keys of all discovered components.
    components: Vec<String>,
}

/// Handle GET /api/components.
pub(crate) async fn get_components(
    State(state): State<Arc<AppState>>,
) -> Json<ComponentsResponse> {
    Json(ComponentsResponse {
        version: state.version.clone(),
        components: state.renderer.route_keys(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gallery_render::{PageRenderer, PreviewRegistry};
    use gallery_scan::ComponentScanner;
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_state(source_dir: std::path::PathBuf) -> Arc<AppState> {
        let scanner = ComponentScanner::new(source_dir);
        Arc::new(AppState {
            renderer: PageRenderer::new(scanner, PreviewRegistry::new()),
            verbose: false,
            version: "1.2.3".to_owned(),
        })
    }

    #[test]
    fn test_components_response_serialization() {
        let response = ComponentsResponse {
            version: "1.2.3".to_owned(),
            components: vec!["demobutton".to_owned()],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["version"], "1.2.3");
        assert_eq!(json["components"][0], "demobutton");
    }

    #[test]
    fn test_get_components_lists_route_keys() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("DemoButton.tsx"), "").unwrap();
        fs::write(temp_dir.path().join("Header.tsx"), "").unwrap();

        let state = test_state(temp_dir.path().to_path_buf());
        let Json(response) = tokio_test::block_on(get_components(State(state)));

        let mut components = response.components;
        components.sort();
        assert_eq!(components, vec!["demobutton", "header"]);
    }

    #[test]
    fn test_get_components_empty_on_unreadable_dir() {
        let state = test_state("/nonexistent/components".into());
        let Json(response) = tokio_test::block_on(get_components(State(state)));

        assert!(response.components.is_empty());
    }
}
