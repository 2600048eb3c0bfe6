//! Seeded sample generators backing the reporting views.

use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use planner_core::ChannelMix;
use planner_creative::FrameType;

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Headline KPI card values for the performance overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSample {
    pub impressions: u64,
    pub clicks: u64,
    pub ctr: f64,
    pub conversions: u64,
    pub cpa: f64,
    pub roas: f64,
}

/// Generates the KPI overview card values. Same seed, same cards.
pub fn kpi_sample(seed: u64) -> KpiSample {
    let mut rng = StdRng::seed_from_u64(seed);
    KpiSample {
        impressions: rng.gen_range(200_000..800_000),
        clicks: rng.gen_range(5_000..30_000),
        ctr: round2(rng.gen_range(0.5..3.5)),
        conversions: rng.gen_range(200..2_000),
        cpa: round2(rng.gen_range(50.0..300.0)),
        roas: round2(rng.gen_range(1.2..6.0)),
    }
}

/// One cell of the channel × copy × frame performance matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub channel: String,
    pub copy: String,
    pub frame: String,
    pub ctr: f64,
    pub cpa: f64,
}

/// Generates the full channel × 文案_1..5 × frame matrix, rows in grid
/// order, values drawn per cell from a seeded RNG.
pub fn matrix_sample(channels: &[&str], seed: u64) -> Vec<MatrixRow> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::with_capacity(channels.len() * 5 * FrameType::all().len());
    for channel in channels {
        for copy_idx in 1..=5 {
            for frame in FrameType::all() {
                rows.push(MatrixRow {
                    channel: channel.to_string(),
                    copy: format!("文案_{}", copy_idx),
                    frame: frame.short_label().to_string(),
                    ctr: round2(rng.gen_range(0.3..4.0)),
                    cpa: round2(rng.gen_range(40.0..350.0)),
                });
            }
        }
    }
    rows
}

/// One channel-day of the illustrative daily trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPerf {
    pub date: NaiveDate,
    pub channel: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: u64,
}

/// Generates `days` days of per-channel trend data ending today. Channels
/// with a heavier mix weight trend proportionally higher.
pub fn daily_series(days: u32, mix: &ChannelMix, seed: u64) -> Vec<DailyPerf> {
    let days = days.max(1);
    let mut rng = StdRng::seed_from_u64(seed);
    let total = mix.total_weight().max(1) as f64;
    let start = Utc::now().date_naive() - Duration::days(days as i64 - 1);

    let mut rows = Vec::new();
    for day in 0..days {
        let date = start + Duration::days(day as i64);
        for (channel, percent) in mix.iter() {
            let weight = percent as f64 / total;
            let boost = 0.7 + 0.6 * weight;
            let impressions = (rng.gen_range(10_000..60_000) as f64 * boost) as u64;
            let clicks = (impressions as f64 * rng.gen_range(0.005..0.03) * boost) as u64;
            let conversions = (clicks as f64 * rng.gen_range(0.02..0.2)) as u64;
            let spend = (conversions as f64 * rng.gen_range(80.0..220.0)) as u64;
            rows.push(DailyPerf {
                date,
                channel: channel.to_string(),
                impressions,
                clicks,
                conversions,
                spend,
            });
        }
    }
    tracing::debug!(rows = rows.len(), days, "daily sample series generated");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::ChannelMix;

    fn mix() -> ChannelMix {
        ChannelMix::from_pairs([("FB_動態", 60), ("IG_限時", 40)])
    }

    #[test]
    fn test_kpi_sample_is_deterministic_per_seed() {
        assert_eq!(kpi_sample(42), kpi_sample(42));
        assert_ne!(kpi_sample(42), kpi_sample(43));
    }

    #[test]
    fn test_kpi_sample_ranges() {
        let kpi = kpi_sample(42);
        assert!((200_000..800_000).contains(&kpi.impressions));
        assert!((0.5..=3.5).contains(&kpi.ctr));
        assert!((1.2..=6.0).contains(&kpi.roas));
    }

    #[test]
    fn test_matrix_covers_the_full_grid() {
        let channels = ["FB_動態", "IG_限時", "Google_搜尋"];
        let rows = matrix_sample(&channels, 7);
        assert_eq!(rows.len(), 3 * 5 * 3);
        assert_eq!(rows[0].channel, "FB_動態");
        assert_eq!(rows[0].copy, "文案_1");
        assert_eq!(rows[0].frame, "A_情境");
        for row in &rows {
            assert!((0.3..=4.0).contains(&row.ctr));
            assert!((40.0..=350.0).contains(&row.cpa));
        }
    }

    #[test]
    fn test_daily_series_shape_and_determinism() {
        let a = daily_series(14, &mix(), 123);
        let b = daily_series(14, &mix(), 123);
        assert_eq!(a, b);
        assert_eq!(a.len(), 14 * 2);
        assert_eq!(a.first().map(|r| r.channel.as_str()), Some("FB_動態"));
        let span = a.last().unwrap().date - a.first().unwrap().date;
        assert_eq!(span.num_days(), 13);
    }

    #[test]
    fn test_daily_series_clamps_to_one_day() {
        let rows = daily_series(0, &mix(), 5);
        assert_eq!(rows.len(), 2);
    }
}
