//! Derived dashboard metrics and the view models built from them.
//!
//! All arithmetic here is single-pass over backend payloads. Thresholds drive
//! the colour-coding of KPI cards, map markers and SLA badges.

use serde::{Deserialize, Serialize};

use crate::models::{KpiResponse, MapData, PriorityResponse, PrioritySummary, ShipmentData};

/// Share of low-stock items treated as critical.
const CRITICAL_STOCK_SHARE: f64 = 0.3;
const HIGH_DELAY_RATE: f64 = 50.0;
const WARNING_DELAY_RATE: f64 = 20.0;
const HIGH_RISK_LOW_STOCK: u64 = 100;
const RETURN_RATE_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn text_class(self) -> &'static str {
        match self {
            Trend::Up => "text-green-400",
            Trend::Down => "text-red-400",
            Trend::Neutral => "text-slate-400",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Glow {
    Cyan,
    Red,
    Yellow,
    Orange,
    Purple,
}

/// One KPI card as the dashboard draws it
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
    pub subtext: Option<String>,
    pub note: Option<&'static str>,
    pub glow: Glow,
    pub trend: Trend,
    pub trend_class: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KpiSummary {
    pub delay_rate: f64,
    pub on_time_shipments: u64,
    pub critical_items: u64,
    pub cards: Vec<KpiCard>,
}

/// Delayed shipments as a percentage of the total; 0 when there are none.
pub fn delay_rate(total: u64, delayed: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    delayed as f64 / total as f64 * 100.0
}

pub fn critical_items(low_stock_items: u64) -> u64 {
    (low_stock_items as f64 * CRITICAL_STOCK_SHARE).floor() as u64
}

pub fn on_time_shipments(total: u64, delayed: u64) -> u64 {
    total.saturating_sub(delayed)
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn summarize_kpis(kpis: &KpiResponse) -> KpiSummary {
    let rate = delay_rate(kpis.total_shipments, kpis.delayed_shipments);
    let on_time = on_time_shipments(kpis.total_shipments, kpis.delayed_shipments);
    let critical = critical_items(kpis.low_stock_items);
    let high_delay = rate > HIGH_DELAY_RATE;
    let low_stock_risk = kpis.low_stock_items > HIGH_RISK_LOW_STOCK;
    let returns_high = kpis.return_rate > RETURN_RATE_THRESHOLD;
    let returned = (kpis.total_shipments as f64 * kpis.return_rate / 100.0).round() as u64;

    let delayed_note = if high_delay {
        Some("Critical")
    } else if rate > WARNING_DELAY_RATE {
        Some("Warning")
    } else {
        None
    };

    let cards = vec![
        card(
            "Total Shipments",
            group_thousands(kpis.total_shipments),
            Some(format!("{} on time", group_thousands(on_time))),
            high_delay.then_some("High delay rate"),
            Glow::Cyan,
            if high_delay { Trend::Down } else { Trend::Neutral },
        ),
        card(
            "Delayed Shipments",
            group_thousands(kpis.delayed_shipments),
            Some(format!("{rate:.1}% of total")),
            delayed_note,
            Glow::Red,
            Trend::Down,
        ),
        card(
            "Low Stock Items",
            group_thousands(kpis.low_stock_items),
            Some(format!("{critical} critical")),
            low_stock_risk.then_some("High risk"),
            Glow::Yellow,
            if low_stock_risk { Trend::Down } else { Trend::Neutral },
        ),
        card(
            "Return Rate",
            format!("{:.1}%", kpis.return_rate),
            Some(format!(
                "{} returns out of {} shipments",
                group_thousands(returned),
                group_thousands(kpis.total_shipments)
            )),
            returns_high.then_some("Above threshold"),
            Glow::Orange,
            if returns_high { Trend::Down } else { Trend::Neutral },
        ),
    ];

    KpiSummary {
        delay_rate: rate,
        on_time_shipments: on_time,
        critical_items: critical,
        cards,
    }
}

fn card(
    title: &'static str,
    value: String,
    subtext: Option<String>,
    note: Option<&'static str>,
    glow: Glow,
    trend: Trend,
) -> KpiCard {
    KpiCard {
        title,
        value,
        subtext,
        note,
        glow,
        trend,
        trend_class: trend.text_class(),
    }
}

// ─── Map ─────────────────────────────────────────────────

/// Diverging red-to-green scale: high delay rates are red.
pub fn delay_colour(delay_rate: f64) -> &'static str {
    match delay_rate {
        r if r > 80.0 => "#a50026",
        r if r > 60.0 => "#f46d43",
        r if r > 40.0 => "#fee08b",
        r if r > 30.0 => "#ffffbf",
        r if r > 20.0 => "#d9ef8b",
        r if r > 10.0 => "#66bd63",
        _ => "#1a9850",
    }
}

/// Marker radius between 6 and 16.
pub fn marker_size(delays: f64) -> f64 {
    6.0 + (delays / 4.0).clamp(0.0, 10.0)
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionView {
    pub name: String,
    pub delay: f64,
    pub color: &'static str,
    pub backend_color: String,
    pub marker_size: f64,
}

pub fn region_views(map: &MapData) -> Vec<RegionView> {
    map.regions
        .iter()
        .map(|r| RegionView {
            name: r.name.clone(),
            delay: r.delay,
            color: delay_colour(r.delay),
            backend_color: r.color.clone(),
            marker_size: marker_size(r.delay),
        })
        .collect()
}

// ─── Priority ────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    #[default]
    All,
    High,
    Medium,
}

impl PriorityFilter {
    pub fn accepts(self, priority: &str) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::High => priority == "high",
            PriorityFilter::Medium => priority == "medium",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlaBadge {
    Breached,
    Nearing,
    Normal,
}

impl SlaBadge {
    pub fn from_status(sla_status: &str) -> Self {
        match sla_status {
            "breached" => SlaBadge::Breached,
            "nearing" => SlaBadge::Nearing,
            _ => SlaBadge::Normal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SlaBadge::Breached => "🔴 SLA Breach",
            SlaBadge::Nearing => "🟠 Nearing SLA",
            SlaBadge::Normal => "✅ Normal",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShipmentView {
    #[serde(flatten)]
    pub shipment: ShipmentData,
    pub sla_badge: SlaBadge,
    pub sla_label: &'static str,
    pub hours_remaining_label: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriorityView {
    pub filter: PriorityFilter,
    pub summary: PrioritySummary,
    pub shipments: Vec<ShipmentView>,
}

pub fn priority_view(data: PriorityResponse, filter: PriorityFilter) -> PriorityView {
    let shipments = data
        .shipments
        .into_iter()
        .filter(|s| filter.accepts(&s.priority))
        .map(|s| {
            let badge = SlaBadge::from_status(&s.sla_status);
            ShipmentView {
                hours_remaining_label: s.sla_hours_remaining.map(|h| format!("{h:.1}h remaining")),
                sla_badge: badge,
                sla_label: badge.label(),
                shipment: s,
            }
        })
        .collect();

    PriorityView {
        filter,
        summary: data.summary,
        shipments,
    }
}
