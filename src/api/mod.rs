//! Axum handlers and the router that wires them together.

pub mod assistant;
pub mod dashboard;

use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use once_cell::sync::Lazy;

use crate::render::panel::PanelState;
use crate::state::AppState;

/// Dashboard shell with the empty and processing panels rendered in.
static INDEX: Lazy<String> = Lazy::new(|| {
    let processing = PanelState::Processing {
        query: String::new(),
    };
    include_str!("../../static/index.html")
        .replace("{{IDLE_PANEL}}", &PanelState::Idle.render())
        .replace("{{PROCESSING_PANEL}}", &processing.render())
});

pub fn router(state: AppState) -> Router {
    Router::new()
        // Dashboard shell
        .route("/", get(serve_index))
        // Assistant panel
        .route("/assistant/query", post(assistant::submit_query))
        .route("/assistant/clear", post(assistant::clear_panel))
        .route("/assistant/style", post(assistant::style))
        // Dashboard data
        .route("/dashboard/kpis", get(dashboard::kpis))
        .route("/dashboard/charts", get(dashboard::charts))
        .route("/dashboard/map", get(dashboard::map))
        .route("/dashboard/priority", get(dashboard::priority))
        .route("/dashboard/roles", get(dashboard::roles))
        .route("/dashboard/roles/{role}", get(dashboard::role_view))
        .route("/dashboard/view", get(dashboard::default_view))
        .with_state(state)
}

async fn serve_index() -> Html<&'static str> {
    Html(INDEX.as_str())
}
