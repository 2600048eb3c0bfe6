//! Day-rate quote estimator: prices a flight from its length and channel mix.

use serde::{Deserialize, Serialize};

use planner_core::ChannelMix;

/// Media day rates (TWD per day at 100% weight). Channels missing from the
/// table are priced at the default rate.
const DAY_RATE: &[(&str, f64)] = &[
    ("FB_動態", 28_000.0),
    ("IG_限時", 24_000.0),
    ("Google_搜尋", 32_000.0),
    ("YouTube_展示", 18_000.0),
];
const DEFAULT_DAY_RATE: f64 = 20_000.0;

/// One channel's share of the quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelQuote {
    pub channel: String,
    /// TWD, rounded per channel before summation.
    pub amount: u64,
}

/// A priced proposal: total and per-channel breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Exact integer sum of the breakdown amounts.
    pub total: u64,
    pub breakdown: Vec<ChannelQuote>,
    /// Flight length actually priced, after clamping.
    pub days: i64,
}

/// Prices `days * day_rate[channel] * weight/100` per channel.
///
/// `days` below one is clamped to one. Weights are taken as given — an
/// unbalanced mix prices exactly what it says. The reported total is the
/// integer sum of the per-channel amounts, so the breakdown always adds up
/// to the total with no rounding drift.
pub fn quote_by_days(days: i64, mix: &ChannelMix) -> Quote {
    let days = days.max(1);

    let breakdown: Vec<ChannelQuote> = mix
        .iter()
        .map(|(channel, percent)| {
            let rate = DAY_RATE
                .iter()
                .find(|(name, _)| *name == channel)
                .map(|(_, r)| *r)
                .unwrap_or(DEFAULT_DAY_RATE);
            ChannelQuote {
                channel: channel.to_string(),
                amount: (days as f64 * rate * percent as f64 / 100.0).round() as u64,
            }
        })
        .collect();

    let total = breakdown.iter().map(|c| c.amount).sum();
    tracing::debug!(days, total, channels = breakdown.len(), "quote computed");

    Quote {
        total,
        breakdown,
        days,
    }
}
