//! Shared types for the CampaignPilot planning workflow: campaign briefs,
//! channel mixes, audience selections, errors, and configuration.

pub mod audience;
pub mod config;
pub mod error;
pub mod mix;
pub mod types;

pub use audience::{AudienceMember, AudienceSelection};
pub use error::{PlannerError, PlannerResult};
pub use mix::ChannelMix;
pub use types::{CampaignBrief, Goal, Industry};
