//! Turning backend payloads into what the dashboard draws.
//!
//! - [`styler`] - ordered tag-rewrite table for assistant HTML fragments
//! - [`panel`] - assistant panel states and their fragments
//! - [`metrics`] - KPI, map and priority view models

pub mod metrics;
pub mod panel;
pub mod styler;

use crate::backend::{BackendClient, BackendError};

/// Styled answer to one assistant query
#[derive(Debug, Clone)]
pub struct StyledAnswer {
    pub html: String,
    pub sources: Vec<String>,
}

/// The assistant pipeline: dispatch, then style.
pub async fn answer_query(
    client: &BackendClient,
    query: &str,
) -> Result<StyledAnswer, BackendError> {
    let resp = client.process_query(query).await?;
    Ok(StyledAnswer {
        html: styler::style_fragment(&resp.result),
        sources: resp.sources.unwrap_or_default(),
    })
}
