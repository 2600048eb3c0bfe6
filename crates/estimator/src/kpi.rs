//! KPI estimator: weighted CTR/CPA projection from a budget and channel mix.

use serde::{Deserialize, Serialize};

use planner_core::ChannelMix;

/// Per-channel unit click-through rates (%), with a fallback for channels
/// missing from the table.
const UNIT_CTR: &[(&str, f64)] = &[
    ("FB_動態", 1.2),
    ("IG_限時", 1.6),
    ("Google_搜尋", 2.2),
    ("YouTube_展示", 0.9),
];
const DEFAULT_CTR: f64 = 1.0;

/// Per-channel unit cost-per-acquisition (TWD).
const UNIT_CPA: &[(&str, f64)] = &[
    ("FB_動態", 130.0),
    ("IG_限時", 140.0),
    ("Google_搜尋", 110.0),
    ("YouTube_展示", 160.0),
];
const DEFAULT_CPA: f64 = 150.0;

/// Assumed revenue per conversion when projecting ROAS.
const VALUE_PER_CONVERSION: f64 = 300.0;

/// Projected campaign KPIs for a budget spread across a channel mix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiEstimate {
    /// Weighted click-through rate, percent, rounded to two decimals.
    pub ctr: f64,
    /// Weighted cost per acquisition, TWD, rounded to two decimals.
    pub cpa: f64,
    pub conversions: u64,
    /// Return on ad spend, rounded to two decimals.
    pub roas: f64,
    /// Echo of the budget, TWD.
    pub cost: u64,
}

impl KpiEstimate {
    /// The defined result for degenerate input (zero budget or zero weight).
    pub fn zero() -> Self {
        Self {
            ctr: 0.0,
            cpa: 0.0,
            conversions: 0,
            roas: 0.0,
            cost: 0,
        }
    }
}

fn table_rate(table: &[(&str, f64)], channel: &str, default: f64) -> f64 {
    table
        .iter()
        .find(|(name, _)| *name == channel)
        .map(|(_, rate)| *rate)
        .unwrap_or(default)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Projects CTR, CPA, conversions, and ROAS for the given budget and mix.
///
/// Weights are normalized to sum to one; they do not need to sum to 100.
/// A mix with zero total weight yields the all-zero estimate, and a zero
/// budget yields zero conversions and ROAS — never a division fault.
pub fn estimate_kpi(budget: u64, mix: &ChannelMix) -> KpiEstimate {
    let total_weight = mix.total_weight();
    if total_weight == 0 {
        return KpiEstimate::zero();
    }

    let mut ctr = 0.0;
    let mut cpa = 0.0;
    for (channel, percent) in mix.iter() {
        let w = percent as f64 / total_weight as f64;
        ctr += table_rate(UNIT_CTR, channel, DEFAULT_CTR) * w;
        cpa += table_rate(UNIT_CPA, channel, DEFAULT_CPA) * w;
    }

    let conversions = if cpa > 0.0 && budget > 0 {
        (budget as f64 / cpa).floor() as u64
    } else {
        0
    };
    let roas = if budget > 0 {
        round2(conversions as f64 * VALUE_PER_CONVERSION / budget as f64)
    } else {
        0.0
    };

    let estimate = KpiEstimate {
        ctr: round2(ctr),
        cpa: round2(cpa),
        conversions,
        roas,
        cost: budget,
    };
    tracing::debug!(budget, ctr = estimate.ctr, cpa = estimate.cpa, "KPI estimate computed");
    estimate
}
