//! Channel-mix estimation: KPI projections from a budget, day-rate price
//! quotes from a flight length, survey quotes, and goal-based mix templates.
//!
//! Every estimator here is a pure function of its inputs.

pub mod kpi;
pub mod quote;
pub mod survey;
pub mod templates;

pub use kpi::{estimate_kpi, KpiEstimate};
pub use quote::{quote_by_days, ChannelQuote, Quote};
pub use survey::{survey_quote, SurveyFormat, SurveyQuote};
pub use templates::{default_proposal_mix, lifecycle_mix_for_goal};
