use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ─── Backend wire types ──────────────────────────────────

/// Body of `POST /api/query`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Response of `POST /api/query`; `result` is an HTML fragment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub result: String,
    #[serde(default)]
    pub sources: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KpiResponse {
    pub total_shipments: u64,
    pub delayed_shipments: u64,
    pub low_stock_items: u64,
    pub return_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub carrier_performance: Vec<CarrierPerformance>,
    pub return_reasons: Vec<ReturnReasonMonth>,
    pub trends_data: Vec<CarrierTrend>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierPerformance {
    pub name: String,
    pub performance: f64,
    pub fill: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnReasonMonth {
    pub month: String,
    pub damaged: u64,
    pub wrong_item: u64,
    pub unwanted: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierTrend {
    pub carrier: String,
    pub total: u64,
    pub delayed: u64,
    pub delay_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapData {
    pub regions: Vec<MapRegion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapRegion {
    pub name: String,
    pub delay: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryData {
    pub low_stock_items: Vec<StockItem>,
    pub high_demand_items: Vec<StockItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItem {
    pub name: String,
    pub stock: u64,
    pub demand: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuppliersData {
    pub suppliers: Vec<Supplier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub on_time_rate: f64,
    pub return_rate: f64,
    pub item_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticsData {
    pub delays: Vec<CarrierDelay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierDelay {
    pub carrier: String,
    pub delay_count: u64,
    #[serde(default)]
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnsData {
    pub returns: Vec<ReturnReason>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnReason {
    pub reason: String,
    pub count: u64,
}

/// A shipment as reported by `GET /api/priority`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentData {
    pub shipment_id: String,
    pub shipment_type: String,
    pub created_at: String,
    pub status: String,
    pub priority: String,
    pub sla_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla_hours_remaining: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritySummary {
    pub total_shipments: u64,
    pub high_priority: u64,
    pub medium_priority: u64,
    pub sla_breached: u64,
    pub sla_nearing: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityResponse {
    pub shipments: Vec<ShipmentData>,
    pub summary: PrioritySummary,
}

// ─── Roles ───────────────────────────────────────────────

/// Dashboard persona. Selected explicitly per request; never stored globally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    LogisticsManager,
    ReturnsManager,
    InventoryAnalyst,
    General,
}

/// A block of the role dashboard backed by one backend resource
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DashboardSection {
    Kpis,
    Logistics,
    Returns,
    Inventory,
    Suppliers,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::LogisticsManager,
        Role::ReturnsManager,
        Role::InventoryAnalyst,
        Role::General,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Role::LogisticsManager => "Logistics Manager",
            Role::ReturnsManager => "Returns Manager",
            Role::InventoryAnalyst => "Inventory Analyst",
            Role::General => "General Dashboard",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Role::LogisticsManager => "Forward shipments & carrier performance",
            Role::ReturnsManager => "Returns processing & SLA tracking",
            Role::InventoryAnalyst => "Stock levels & supplier performance",
            Role::General => "All data & comprehensive view",
        }
    }

    pub fn accent_class(self) -> &'static str {
        match self {
            Role::LogisticsManager => "text-blue-400",
            Role::ReturnsManager => "text-orange-400",
            Role::InventoryAnalyst => "text-green-400",
            Role::General => "text-purple-400",
        }
    }

    pub fn permissions(self) -> &'static [&'static str] {
        match self {
            Role::LogisticsManager => &["forward_shipments", "carrier_performance", "delays"],
            Role::ReturnsManager => &["returns", "sla_tracking", "customer_service"],
            Role::InventoryAnalyst => &["inventory", "suppliers", "demand_forecasting"],
            Role::General => &["all"],
        }
    }

    /// Sections shown for this role, in display order. KPIs always come first.
    pub fn sections(self) -> &'static [DashboardSection] {
        match self {
            Role::LogisticsManager => &[DashboardSection::Kpis, DashboardSection::Logistics],
            Role::ReturnsManager => &[DashboardSection::Kpis, DashboardSection::Returns],
            Role::InventoryAnalyst => &[
                DashboardSection::Kpis,
                DashboardSection::Inventory,
                DashboardSection::Suppliers,
            ],
            Role::General => &[DashboardSection::Kpis],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::LogisticsManager => "LogisticsManager",
            Role::ReturnsManager => "ReturnsManager",
            Role::InventoryAnalyst => "InventoryAnalyst",
            Role::General => "General",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Role catalogue entry returned by `GET /dashboard/roles`
#[derive(Debug, Clone, Serialize)]
pub struct RoleInfo {
    pub role: Role,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub permissions: &'static [&'static str],
    pub sections: &'static [DashboardSection],
}

impl From<Role> for RoleInfo {
    fn from(role: Role) -> Self {
        Self {
            role,
            name: role.display_name(),
            description: role.description(),
            color: role.accent_class(),
            permissions: role.permissions(),
            sections: role.sections(),
        }
    }
}

// ─── Dashboard request/response types ────────────────────

/// Assistant submission from the browser
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantQueryRequest {
    pub query: String,
}

/// Raw fragment to run through the styler
#[derive(Debug, Clone, Deserialize)]
pub struct StyleRequest {
    pub html: String,
}

/// Rendered fragment plus the panel status it reflects
#[derive(Debug, Clone, Serialize)]
pub struct FragmentResponse {
    pub status: String,
    pub html: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parses_case_insensitively() {
        assert_eq!("logisticsmanager".parse::<Role>().unwrap(), Role::LogisticsManager);
        assert_eq!(" General ".parse::<Role>().unwrap(), Role::General);
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serializes_as_variant_name() {
        let json = serde_json::to_value(Role::InventoryAnalyst).unwrap();
        assert_eq!(json, "InventoryAnalyst");
    }

    #[test]
    fn test_every_role_starts_with_kpis() {
        for role in Role::ALL {
            assert_eq!(role.sections()[0], DashboardSection::Kpis);
        }
    }

    #[test]
    fn test_query_response_sources_optional() {
        let resp: QueryResponse = serde_json::from_str(r#"{"result":"<p>ok</p>"}"#).unwrap();
        assert_eq!(resp.result, "<p>ok</p>");
        assert!(resp.sources.is_none());
    }

    #[test]
    fn test_shipment_without_sla_hours() {
        let json = r#"{
            "shipment_id": "S-1",
            "shipment_type": "forward",
            "created_at": "2024-05-01T10:00:00",
            "status": "in-transit",
            "priority": "high",
            "sla_status": "nearing"
        }"#;
        let shipment: ShipmentData = serde_json::from_str(json).unwrap();
        assert_eq!(shipment.sla_hours_remaining, None);
        let back = serde_json::to_value(&shipment).unwrap();
        assert!(back.get("sla_hours_remaining").is_none());
    }
}
