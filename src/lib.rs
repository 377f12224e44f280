//! # intellia-dashboard
//!
//! Server-rendered front end for the INTELLIA supply-chain monitoring
//! backend. The browser talks to this service; this service talks to the
//! backend API and hands back view models and styled HTML fragments.
//!
//! ## Assistant pipeline
//!
//! ```text
//!          ┌──────────────────┐
//!          │  Free-text query │
//!          └────────┬─────────┘
//!                   │ blank? → rejected, nothing sent
//!                   ▼
//!       ┌───────────────────────┐
//!       │   Query Dispatcher    │   POST /api/query {query}
//!       │  one request, no retry│   NetworkError | BackendError
//!       └───────────┬───────────┘
//!                   │ {result: "<h3>…</h3><p>…</p>"}
//!                   ▼
//!       ┌───────────────────────┐
//!       │    Fragment Styler    │   ordered (matcher, replacement) table
//!       │  exact-tag rewrites   │   colour divs before generic <div>
//!       └───────────┬───────────┘
//!                   │
//!                   ▼
//!       ┌───────────────────────┐
//!       │    Assistant Panel    │   idle / processing / ready / error
//!       │  owned by the browser │   last resolved wins
//!       └───────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for the server and backend client
//! - [`models`] - Backend wire types, roles and request/response types
//! - [`backend`] - Typed reqwest client for the backend API and its error kinds
//! - [`render::styler`] - Tag-rewrite table applied to assistant HTML fragments
//! - [`render::panel`] - Assistant panel states and their fragments
//! - [`render::metrics`] - KPI cards, map colour scale, priority and SLA views
//! - [`api`] - Axum handlers and router
//! - [`state`] - Shared, read-only application state

pub mod api;
pub mod backend;
pub mod config;
pub mod models;
pub mod render;
pub mod state;
