//! Goal-based channel-mix templates.

use planner_core::{ChannelMix, Goal};

/// The default four-channel proposal mix shown on the brief stage.
pub fn default_proposal_mix() -> ChannelMix {
    ChannelMix::from_pairs([
        ("FB_動態", 35),
        ("IG_限時", 25),
        ("Google_搜尋", 25),
        ("YouTube_展示", 15),
    ])
}

/// Default lifecycle-channel weights for the creative stage, keyed by the
/// brief's marketing goal.
pub fn lifecycle_mix_for_goal(goal: Goal) -> ChannelMix {
    let pairs: &[(&str, u32)] = match goal {
        Goal::Awareness => &[
            ("FB", 25),
            ("Google", 25),
            ("APP廣告", 20),
            ("APP Push", 10),
            ("Line", 10),
            ("EDM", 5),
            ("SMS", 3),
            ("APP任務", 2),
        ],
        Goal::Leads => &[
            ("Google", 30),
            ("FB", 25),
            ("EDM", 15),
            ("Line", 10),
            ("SMS", 10),
            ("APP任務", 5),
            ("APP Push", 3),
            ("APP廣告", 2),
        ],
        Goal::Purchase => &[
            ("Google", 35),
            ("FB", 20),
            ("EDM", 15),
            ("Line", 10),
            ("APP Push", 8),
            ("SMS", 5),
            ("APP廣告", 5),
            ("APP任務", 2),
        ],
    };
    ChannelMix::from_pairs(pairs.iter().map(|(c, w)| (*c, *w)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_proposal_mix_is_balanced() {
        assert!(default_proposal_mix().is_balanced());
    }

    #[test]
    fn test_lifecycle_templates_are_balanced() {
        for goal in [Goal::Awareness, Goal::Leads, Goal::Purchase] {
            let mix = lifecycle_mix_for_goal(goal);
            assert!(mix.is_balanced(), "{:?} template off 100%", goal);
            assert_eq!(mix.len(), 8);
        }
    }

    #[test]
    fn test_goal_shifts_lead_channel() {
        assert_eq!(lifecycle_mix_for_goal(Goal::Leads).iter().next().unwrap().0, "Google");
        assert_eq!(lifecycle_mix_for_goal(Goal::Awareness).iter().next().unwrap().0, "FB");
    }
}
