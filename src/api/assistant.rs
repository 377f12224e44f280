use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;

use crate::models::{AssistantQueryRequest, FragmentResponse, StyleRequest};
use crate::render::answer_query;
use crate::render::panel::PanelState;
use crate::render::styler::style_fragment;
use crate::state::AppState;

fn fragment(state: &PanelState) -> FragmentResponse {
    let sources = match state {
        PanelState::Ready { sources, .. } => sources.clone(),
        _ => Vec::new(),
    };
    FragmentResponse {
        status: state.status().to_string(),
        html: state.render(),
        sources,
    }
}

/// POST /assistant/query - Dispatch a free-text query and return the styled panel.
///
/// Blank queries are rejected before anything goes out. Backend and network
/// failures still return the rendered error panel, with a 502. Nothing is
/// kept server-side: the caller shows whichever response it receives last.
pub async fn submit_query(
    State(state): State<AppState>,
    Json(req): Json<AssistantQueryRequest>,
) -> Result<(StatusCode, Json<FragmentResponse>), (StatusCode, String)> {
    if req.query.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Query is required".to_string()));
    }

    tracing::info!("Assistant query submitted ({} chars)", req.query.len());
    let outcome = answer_query(&state.backend, &req.query).await;
    let resolved = PanelState::resolved(&req.query, outcome);

    let code = match &resolved {
        PanelState::Failed { message, .. } => {
            tracing::warn!("Assistant query failed: {message}");
            StatusCode::BAD_GATEWAY
        }
        _ => StatusCode::OK,
    };

    Ok((code, Json(fragment(&resolved))))
}

/// POST /assistant/clear - Empty panel ("Start New Query").
pub async fn clear_panel() -> Json<FragmentResponse> {
    Json(fragment(&PanelState::Idle))
}

/// POST /assistant/style - Run a fragment through the styler only.
pub async fn style(Json(req): Json<StyleRequest>) -> Html<String> {
    Html(style_fragment(&req.html))
}
