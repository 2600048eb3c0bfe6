//! Planning stages: the nodes of the workflow state machine.

use serde::{Deserialize, Serialize};

/// One planning phase. The workflow is cyclic — there is no terminal stage,
/// and several stages route explicitly back to [`Stage::Brief`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// 提案目標與報價 — brief intake and quoting.
    #[default]
    Brief,
    /// TA 預測與圈選 — audience recommendation and selection.
    AudienceSelection,
    /// 渠道與文案製作 — channel plan and creative generation.
    ChannelAndCreative,
    /// 成效與顧客洞察 — performance reporting.
    Performance,
    /// 會員忠誠與再行銷 — retention planning.
    Loyalty,
    /// 產業與市場洞察 — market insight.
    MarketInsight,
    /// Order / Billing (peripheral).
    Billing,
    /// Account (peripheral).
    Account,
}

impl Stage {
    /// Stable name used in shareable links and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Brief => "brief",
            Stage::AudienceSelection => "audience_selection",
            Stage::ChannelAndCreative => "channel_and_creative",
            Stage::Performance => "performance",
            Stage::Loyalty => "loyalty",
            Stage::MarketInsight => "market_insight",
            Stage::Billing => "billing",
            Stage::Account => "account",
        }
    }

    /// Parses an externally supplied stage name. Unknown names yield `None`
    /// so a stale or mistyped link never breaks navigation.
    pub fn parse(name: &str) -> Option<Stage> {
        Stage::all().iter().copied().find(|s| s.as_str() == name)
    }

    pub fn all() -> &'static [Stage] {
        &[
            Stage::Brief,
            Stage::AudienceSelection,
            Stage::ChannelAndCreative,
            Stage::Performance,
            Stage::Loyalty,
            Stage::MarketInsight,
            Stage::Billing,
            Stage::Account,
        ]
    }

    /// Display label matching the navigation sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Brief => "提案目標與報價",
            Stage::AudienceSelection => "TA 預測與圈選",
            Stage::ChannelAndCreative => "渠道與文案製作",
            Stage::Performance => "成效與顧客洞察",
            Stage::Loyalty => "會員忠誠與再行銷",
            Stage::MarketInsight => "產業與市場洞察",
            Stage::Billing => "Order / Billing",
            Stage::Account => "Account",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_stage() {
        for stage in Stage::all() {
            assert_eq!(Stage::parse(stage.as_str()), Some(*stage));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(Stage::parse("checkout"), None);
        assert_eq!(Stage::parse(""), None);
        assert_eq!(Stage::parse("Brief"), None);
    }

    #[test]
    fn test_initial_stage_is_brief() {
        assert_eq!(Stage::default(), Stage::Brief);
    }
}
