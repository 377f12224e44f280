use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::backend::BackendError;
use crate::models::{
    CarrierDelay, ChartData, DashboardSection, ReturnReason, Role, RoleInfo, StockItem, Supplier,
    UnknownRole,
};
use crate::render::metrics::{
    priority_view, region_views, summarize_kpis, KpiSummary, PriorityFilter, PriorityView,
    RegionView,
};
use crate::state::AppState;

/// Rows shown per list on a role dashboard
const ROLE_LIST_LIMIT: usize = 5;

type ApiError = (StatusCode, String);

fn backend_failure(err: BackendError) -> ApiError {
    let code = match &err {
        BackendError::EmptyQuery => StatusCode::BAD_REQUEST,
        BackendError::Network(_) => StatusCode::SERVICE_UNAVAILABLE,
        BackendError::Backend { .. } | BackendError::InvalidBody(_) => StatusCode::BAD_GATEWAY,
    };
    (code, err.user_message())
}

/// GET /dashboard/kpis - KPI cards with derived rates, notes and trends.
pub async fn kpis(State(state): State<AppState>) -> Result<Json<KpiSummary>, ApiError> {
    let kpis = state.backend.get_kpis().await.map_err(backend_failure)?;
    Ok(Json(summarize_kpis(&kpis)))
}

/// GET /dashboard/charts
pub async fn charts(State(state): State<AppState>) -> Result<Json<ChartData>, ApiError> {
    let data = state.backend.get_chart_data().await.map_err(backend_failure)?;
    Ok(Json(data))
}

/// GET /dashboard/map - Regions recoloured on the delay scale.
pub async fn map(State(state): State<AppState>) -> Result<Json<Vec<RegionView>>, ApiError> {
    let data = state.backend.get_map_data().await.map_err(backend_failure)?;
    Ok(Json(region_views(&data)))
}

#[derive(Debug, Deserialize)]
pub struct PriorityQuery {
    #[serde(default)]
    pub filter: PriorityFilter,
}

/// GET /dashboard/priority?filter=all|high|medium
pub async fn priority(
    State(state): State<AppState>,
    Query(params): Query<PriorityQuery>,
) -> Result<Json<PriorityView>, ApiError> {
    let data = state
        .backend
        .get_priority_data()
        .await
        .map_err(backend_failure)?;
    Ok(Json(priority_view(data, params.filter)))
}

/// GET /dashboard/roles - Role catalogue.
pub async fn roles() -> Json<Vec<RoleInfo>> {
    Json(Role::ALL.into_iter().map(RoleInfo::from).collect())
}

/// Everything one role's dashboard shows
#[derive(Debug, Clone, Serialize, Default)]
pub struct RoleView {
    pub role: Option<RoleInfo>,
    pub kpis: Option<KpiSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logistics: Option<Vec<CarrierDelay>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<Vec<ReturnReason>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_stock: Option<Vec<StockItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppliers: Option<Vec<Supplier>>,
}

/// GET /dashboard/roles/{role}
pub async fn role_view(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Json<RoleView>, ApiError> {
    let role: Role = role
        .parse()
        .map_err(|e: UnknownRole| (StatusCode::NOT_FOUND, e.to_string()))?;
    build_role_view(&state, role).await.map(Json)
}

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub role: Option<String>,
}

/// GET /dashboard/view?role=... - Role dashboard; falls back to the configured role.
pub async fn default_view(
    State(state): State<AppState>,
    Query(params): Query<ViewQuery>,
) -> Result<Json<RoleView>, ApiError> {
    let role = match params.role.as_deref() {
        Some(name) => name
            .parse()
            .map_err(|e: UnknownRole| (StatusCode::BAD_REQUEST, e.to_string()))?,
        None => state.config.default_role,
    };
    build_role_view(&state, role).await.map(Json)
}

async fn build_role_view(state: &AppState, role: Role) -> Result<RoleView, ApiError> {
    let mut view = RoleView {
        role: Some(role.into()),
        ..RoleView::default()
    };

    for section in role.sections() {
        let fetched = match section {
            DashboardSection::Kpis => state
                .backend
                .get_kpis()
                .await
                .map(|k| view.kpis = Some(summarize_kpis(&k))),
            DashboardSection::Logistics => state.backend.get_logistics_data().await.map(|d| {
                view.logistics = Some(d.delays.into_iter().take(ROLE_LIST_LIMIT).collect())
            }),
            DashboardSection::Returns => state.backend.get_returns_data().await.map(|d| {
                view.returns = Some(d.returns.into_iter().take(ROLE_LIST_LIMIT).collect())
            }),
            DashboardSection::Inventory => state.backend.get_inventory_data().await.map(|d| {
                view.low_stock = Some(
                    d.low_stock_items
                        .into_iter()
                        .take(ROLE_LIST_LIMIT)
                        .collect(),
                )
            }),
            DashboardSection::Suppliers => state.backend.get_suppliers_data().await.map(|d| {
                view.suppliers = Some(d.suppliers.into_iter().take(ROLE_LIST_LIMIT).collect())
            }),
        };

        if let Err(e) = fetched {
            tracing::warn!("Role dashboard for {role}: {section:?} failed: {e}");
            let (code, message) = backend_failure(e);
            return Err((code, format!("Failed to load role-specific data: {message}")));
        }
    }

    Ok(view)
}
