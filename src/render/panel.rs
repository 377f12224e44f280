use chrono::{DateTime, Utc};
use serde::Serialize;

use super::StyledAnswer;
use crate::backend::BackendError;

/// What an assistant panel shows.
///
/// The server keeps none of this between requests. Each browser owns the
/// panel it displays and swaps in whichever fragment resolves last.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PanelState {
    Idle,
    Processing {
        query: String,
    },
    Ready {
        query: String,
        /// Styled fragment, ready for injection
        html: String,
        sources: Vec<String>,
        resolved_at: DateTime<Utc>,
    },
    #[serde(rename = "error")]
    Failed {
        query: String,
        message: String,
        resolved_at: DateTime<Utc>,
    },
}

impl PanelState {
    pub fn status(&self) -> &'static str {
        match self {
            PanelState::Idle => "idle",
            PanelState::Processing { .. } => "processing",
            PanelState::Ready { .. } => "ready",
            PanelState::Failed { .. } => "error",
        }
    }

    /// Panel state for a query that has resolved, one way or the other.
    /// Nothing from an earlier answer survives into a failure.
    pub fn resolved(query: &str, outcome: Result<StyledAnswer, BackendError>) -> Self {
        match outcome {
            Ok(answer) => PanelState::Ready {
                query: query.to_string(),
                html: answer.html,
                sources: answer.sources,
                resolved_at: Utc::now(),
            },
            Err(e) => PanelState::Failed {
                query: query.to_string(),
                message: e.user_message(),
                resolved_at: Utc::now(),
            },
        }
    }

    pub fn render(&self) -> String {
        render_state(self)
    }
}

pub fn render_state(state: &PanelState) -> String {
    let status = state.status();
    let body = match state {
        PanelState::Idle => String::new(),
        PanelState::Processing { .. } => {
            r#"<p class="text-center text-slate-400 animate-pulse">Processing your query...</p>"#
                .to_string()
        }
        PanelState::Ready { html, .. } => format!(
            r#"<div class="w-full min-h-[12rem] max-h-96 bg-slate-950/70 border border-slate-700 rounded-lg p-4 overflow-y-auto"><div class="prose prose-invert max-w-none" style="line-height: 1.6;">{html}</div></div>"#
        ),
        PanelState::Failed { message, .. } => format!(
            r#"<div class="p-4 bg-red-900/20 border border-red-500/50 rounded-lg"><p class="text-red-400 text-sm">{}</p></div>"#,
            escape_text(message)
        ),
    };
    format!(r#"<div class="assistant-panel mt-6" data-status="{status}">{body}</div>"#)
}

/// Escape text for use inside element content. Only our own chrome goes through
/// here; backend fragments are trusted and injected as-is.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
