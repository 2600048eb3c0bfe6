//! Market-research survey quote: per-sample pricing by questionnaire format.

use serde::{Deserialize, Serialize};

/// Base cost per collected sample, TWD.
const BASE_COST_PER_SAMPLE: f64 = 25.0;

/// Questionnaire format offered on the research proposal tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyFormat {
    /// 封閉題為主
    ClosedEnded,
    /// 開放題為主 — open coding makes this the most expensive format.
    OpenEnded,
    /// 混合題（建議）
    Mixed,
}

impl SurveyFormat {
    fn unit_cost(&self) -> u64 {
        match self {
            SurveyFormat::ClosedEnded => BASE_COST_PER_SAMPLE as u64,
            SurveyFormat::OpenEnded => (BASE_COST_PER_SAMPLE * 2.2) as u64,
            SurveyFormat::Mixed => (BASE_COST_PER_SAMPLE * 1.6) as u64,
        }
    }

    /// Expected turnaround in days (low, high).
    fn eta_days(&self) -> (u32, u32) {
        match self {
            SurveyFormat::ClosedEnded => (5, 7),
            SurveyFormat::OpenEnded => (10, 14),
            SurveyFormat::Mixed => (7, 10),
        }
    }
}

/// A priced survey proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyQuote {
    pub samples: u64,
    pub cost: u64,
    pub eta_days: (u32, u32),
}

/// Prices a survey of `samples` respondents in the given format.
pub fn survey_quote(samples: u64, format: SurveyFormat) -> SurveyQuote {
    SurveyQuote {
        samples,
        cost: samples * format.unit_cost(),
        eta_days: format.eta_days(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_ended_baseline() {
        let quote = survey_quote(200, SurveyFormat::ClosedEnded);
        assert_eq!(quote.cost, 5_000);
        assert_eq!(quote.eta_days, (5, 7));
    }

    #[test]
    fn test_open_ended_costs_most() {
        let closed = survey_quote(200, SurveyFormat::ClosedEnded);
        let mixed = survey_quote(200, SurveyFormat::Mixed);
        let open = survey_quote(200, SurveyFormat::OpenEnded);
        assert!(open.cost > mixed.cost && mixed.cost > closed.cost);
        assert_eq!(open.cost, 200 * 55);
        assert_eq!(mixed.cost, 200 * 40);
    }
}
