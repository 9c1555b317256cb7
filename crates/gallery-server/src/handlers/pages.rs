//! Page endpoints.
//!
//! Serves the welcome page and one server-rendered page per component.
//! Resolution and load failures have already been logged by the renderer;
//! here they all collapse to the uniform not-found response.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::state::AppState;

/// Handle GET /.
pub(crate) async fn get_home(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.renderer.home_page())
}

/// Handle GET /design/{component}.
pub(crate) async fn get_design_page(
    Path(component): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.renderer.render_page(&component) {
        Ok(page) => {
            if state.verbose {
                tracing::info!(segment = %component, "Rendered component page");
            }
            Html(page).into_response()
        }
        Err(_) => not_found_response(&state),
    }
}

/// Fallback for unmatched routes.
pub(crate) async fn fallback(State(state): State<Arc<AppState>>) -> Response {
    not_found_response(&state)
}

/// The uniform not-found response.
fn not_found_response(state: &AppState) -> Response {
    (StatusCode::NOT_FOUND, Html(state.renderer.not_found_page())).into_response()
}
