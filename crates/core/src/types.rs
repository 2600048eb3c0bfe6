//! Campaign brief intake types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

/// Industry vertical of the advertiser, as offered on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Wellness,
    Fitness,
    Pet,
    HomeAppliance,
    Fmcg,
    Beauty,
    Other,
}

impl Industry {
    /// Display label as shown on the intake form.
    pub fn label(&self) -> &'static str {
        match self {
            Industry::Wellness => "保健",
            Industry::Fitness => "運動/健身",
            Industry::Pet => "寵物",
            Industry::HomeAppliance => "家電",
            Industry::Fmcg => "FMCG",
            Industry::Beauty => "美妝",
            Industry::Other => "其他",
        }
    }

    pub fn all() -> &'static [Industry] {
        &[
            Industry::Wellness,
            Industry::Fitness,
            Industry::Pet,
            Industry::HomeAppliance,
            Industry::Fmcg,
            Industry::Beauty,
            Industry::Other,
        ]
    }
}

/// Marketing objective of the proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// 曝光 — maximize reach and impressions.
    Awareness,
    /// 名單 — collect leads.
    Leads,
    /// 購買 — drive purchases.
    Purchase,
}

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Awareness => "曝光",
            Goal::Leads => "名單",
            Goal::Purchase => "購買",
        }
    }
}

/// The campaign intake collected on the proposal stage. Immutable once a
/// tracking code has been issued for the proposal version it belongs to;
/// finalizing a new brief invalidates the downstream audience lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignBrief {
    pub brand: String,
    pub industry: Industry,
    pub goal: Goal,
    /// Budget in TWD.
    pub budget: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Free-text forbidden language / tone note, e.g. "無療效宣稱".
    pub forbidden_language: Option<String>,
}

impl CampaignBrief {
    /// Validates the schedule (end must not precede start) and returns the
    /// brief. The budget is unsigned and therefore always non-negative.
    pub fn new(
        brand: impl Into<String>,
        industry: Industry,
        goal: Goal,
        budget: u64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        forbidden_language: Option<String>,
    ) -> PlannerResult<Self> {
        if end_date < start_date {
            return Err(PlannerError::InvalidBrief(format!(
                "end date {} precedes start date {}",
                end_date, start_date
            )));
        }
        Ok(Self {
            brand: brand.into(),
            industry,
            goal,
            budget,
            start_date,
            end_date,
            forbidden_language,
        })
    }

    /// Inclusive flight length in days, clamped to at least one day.
    pub fn flight_days(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(1)
    }
}
