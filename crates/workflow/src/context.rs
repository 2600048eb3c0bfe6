//! The per-session campaign context accumulated across stages.

use serde::{Deserialize, Serialize};

use planner_core::{AudienceSelection, CampaignBrief, ChannelMix};
use planner_estimator::default_proposal_mix;
use planner_personas::ShopperInsight;

use crate::stage::Stage;
use crate::tracking::TrackingCode;

/// Everything a session has accumulated: the current stage plus the brief,
/// channel mix, audience lock, tracking code, and stage-scoped flags.
///
/// The context is owned exclusively by its session and passed explicitly
/// into each component — nothing reads ambient global state. Logout destroys
/// it outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowContext {
    pub current_stage: Stage,
    pub brief: Option<CampaignBrief>,
    pub channel_mix: ChannelMix,
    pub audience: AudienceSelection,
    pub tracking_code: Option<TrackingCode>,
    pub survey_sent: bool,
    pub remarketing_flagged: bool,
    pub shopper_insight: Option<ShopperInsight>,
}

impl WorkflowContext {
    /// Fresh context at the brief stage with the default proposal mix.
    pub fn new() -> Self {
        Self {
            current_stage: Stage::Brief,
            brief: None,
            channel_mix: default_proposal_mix(),
            audience: AudienceSelection::new(),
            tracking_code: None,
            survey_sent: false,
            remarketing_flagged: false,
            shopper_insight: None,
        }
    }

    /// Restores the active stage from an externally persisted reference
    /// (e.g. a shareable link parameter). Unknown names are ignored and the
    /// current stage is kept. Returns whether the stage changed.
    ///
    /// Note this bypasses no guards on purpose only for stages that carry
    /// none; a link into the gated audience stage without a tracking code
    /// falls back to the current stage.
    pub fn restore_stage(&mut self, name: &str) -> bool {
        let Some(stage) = Stage::parse(name) else {
            tracing::debug!(name, "ignoring unknown navigation target");
            return false;
        };
        if stage == Stage::AudienceSelection && self.tracking_code.is_none() {
            tracing::debug!("ignoring link into gated audience stage without tracking code");
            return false;
        }
        let changed = self.current_stage != stage;
        self.current_stage = stage;
        changed
    }
}

impl Default for WorkflowContext {
    fn default() -> Self {
        Self::new()
    }
}
