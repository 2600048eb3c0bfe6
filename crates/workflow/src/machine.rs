//! The stage-transition machine.
//!
//! All transition rules live in one table rather than being scattered per
//! view: [`RULES`] maps each user action to its destination, and
//! [`STAGE_GUARDS`] lists what must already exist in the context before a
//! stage may be entered. [`apply`] consults both, mutates a scratch copy of
//! the context, and commits only on success, so a rejected or failed action
//! can never leave the context half-updated.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use planner_core::{AudienceSelection, CampaignBrief};

use crate::context::WorkflowContext;
use crate::stage::Stage;
use crate::tracking::TrackingCode;

/// An explicit user action (a button press in the surrounding UI).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Finalize the proposal: store the brief, issue a fresh tracking code,
    /// and drop any existing audience lock (a new brief invalidates it).
    /// Advances into the audience stage when `advance` is set; some calling
    /// surfaces finalize in place.
    FinalizeBrief { brief: CampaignBrief, advance: bool },
    /// Navigate to a stage directly.
    OpenStage(Stage),
    /// Commit the circled personas and move on to channel/creative work.
    /// An empty selection is valid — downstream creative generation simply
    /// produces nothing for it.
    LockAudience(AudienceSelection),
    /// Send the survey and move to the performance stage.
    SendSurvey,
    /// Flag the campaign for remarketing and return to the brief stage.
    AddToRemarketing,
    /// Start a new proposal from a retention-stage suggestion.
    NewProposal,
}

/// Action discriminant used by the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    FinalizeBrief,
    OpenStage,
    LockAudience,
    SendSurvey,
    AddToRemarketing,
    NewProposal,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::FinalizeBrief { .. } => ActionKind::FinalizeBrief,
            Action::OpenStage(_) => ActionKind::OpenStage,
            Action::LockAudience(_) => ActionKind::LockAudience,
            Action::SendSurvey => ActionKind::SendSurvey,
            Action::AddToRemarketing => ActionKind::AddToRemarketing,
            Action::NewProposal => ActionKind::NewProposal,
        }
    }
}

/// Where an action lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The stage named in the action payload.
    Requested,
    /// A fixed destination.
    Fixed(Stage),
    /// Destination depends on the action's own flag (finalize-in-place).
    FixedOrStay(Stage),
}

/// What a stage requires of the context before it may become current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// A tracking code must have been issued.
    TrackingCode,
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy)]
pub struct TransitionRule {
    pub action: ActionKind,
    pub target: Target,
}

/// The complete action → destination table.
pub const RULES: &[TransitionRule] = &[
    TransitionRule {
        action: ActionKind::FinalizeBrief,
        target: Target::FixedOrStay(Stage::AudienceSelection),
    },
    TransitionRule {
        action: ActionKind::OpenStage,
        target: Target::Requested,
    },
    TransitionRule {
        action: ActionKind::LockAudience,
        target: Target::Fixed(Stage::ChannelAndCreative),
    },
    TransitionRule {
        action: ActionKind::SendSurvey,
        target: Target::Fixed(Stage::Performance),
    },
    TransitionRule {
        action: ActionKind::AddToRemarketing,
        target: Target::Fixed(Stage::Brief),
    },
    TransitionRule {
        action: ActionKind::NewProposal,
        target: Target::Fixed(Stage::Brief),
    },
];

/// Entry guards per stage. Stages not listed are always enterable.
pub const STAGE_GUARDS: &[(Stage, Guard)] = &[(Stage::AudienceSelection, Guard::TrackingCode)];

/// A committed transition.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionOutcome {
    pub from: Stage,
    pub to: Stage,
    /// Set when the action issued a fresh tracking code.
    pub issued_code: Option<TrackingCode>,
}

/// Recoverable, user-correctable rejections. The context is untouched when
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    #[error("stage {} requires a tracking code; finalize the brief first", attempted.label())]
    TrackingCodeRequired {
        attempted: Stage,
        /// Where the user can correct the situation.
        redirect: Stage,
    },
}

fn rule_for(kind: ActionKind) -> &'static TransitionRule {
    // RULES is total over ActionKind; the fallback is unreachable but keeps
    // this free of panics.
    RULES
        .iter()
        .find(|r| r.action == kind)
        .unwrap_or(&RULES[0])
}

fn check_stage_guard(ctx: &WorkflowContext, stage: Stage) -> Result<(), WorkflowError> {
    for (guarded, guard) in STAGE_GUARDS {
        if *guarded != stage {
            continue;
        }
        match guard {
            Guard::TrackingCode => {
                if ctx.tracking_code.is_none() {
                    return Err(WorkflowError::TrackingCodeRequired {
                        attempted: stage,
                        redirect: Stage::Brief,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Applies one user action to the context as a single atomic update.
///
/// On success the context holds both the new stage and whatever fields the
/// action set; on rejection it is exactly as before the call.
pub fn apply(
    ctx: &mut WorkflowContext,
    action: Action,
    rng: &mut impl Rng,
) -> Result<TransitionOutcome, WorkflowError> {
    let from = ctx.current_stage;
    let rule = rule_for(action.kind());
    let mut next = ctx.clone();
    let mut issued_code = None;

    let destination = match (action, rule.target) {
        (Action::FinalizeBrief { brief, advance }, Target::FixedOrStay(stage)) => {
            let code = TrackingCode::generate(rng);
            tracing::info!(code = %code, brand = %brief.brand, "proposal finalized");
            next.brief = Some(brief);
            next.tracking_code = Some(code.clone());
            // A new proposal version invalidates the previous audience lock.
            next.audience = AudienceSelection::new();
            issued_code = Some(code);
            if advance {
                stage
            } else {
                from
            }
        }
        (Action::OpenStage(stage), Target::Requested) => stage,
        (Action::LockAudience(selection), Target::Fixed(stage)) => {
            tracing::info!(personas = selection.len(), "audience locked");
            next.audience = selection;
            stage
        }
        (Action::SendSurvey, Target::Fixed(stage)) => {
            next.survey_sent = true;
            stage
        }
        (Action::AddToRemarketing, Target::Fixed(stage)) => {
            next.remarketing_flagged = true;
            stage
        }
        (Action::NewProposal, Target::Fixed(stage)) => stage,
        // The rule table pairs every action with its target shape above.
        (_, _) => from,
    };

    check_stage_guard(&next, destination)?;
    next.current_stage = destination;
    *ctx = next;

    tracing::debug!(from = from.as_str(), to = destination.as_str(), "stage transition");
    Ok(TransitionOutcome {
        from,
        to: destination,
        issued_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use planner_core::{Goal, Industry};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn brief() -> CampaignBrief {
        CampaignBrief::new(
            "Acme",
            Industry::Beauty,
            Goal::Awareness,
            200_000,
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 14).unwrap(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_audience_stage_gated_without_code() {
        let mut ctx = WorkflowContext::new();
        let err = apply(&mut ctx, Action::OpenStage(Stage::AudienceSelection), &mut rng())
            .unwrap_err();

        assert_eq!(
            err,
            WorkflowError::TrackingCodeRequired {
                attempted: Stage::AudienceSelection,
                redirect: Stage::Brief,
            }
        );
        // The rejected transition never changes the current stage.
        assert_eq!(ctx.current_stage, Stage::Brief);
        assert_eq!(ctx, WorkflowContext::new());
    }

    #[test]
    fn test_finalize_issues_code_and_unlocks_audience_stage() {
        let mut ctx = WorkflowContext::new();
        let mut rng = rng();

        let outcome = apply(
            &mut ctx,
            Action::FinalizeBrief {
                brief: brief(),
                advance: false,
            },
            &mut rng,
        )
        .unwrap();

        assert_eq!(outcome.to, Stage::Brief);
        let code = outcome.issued_code.unwrap();
        assert!(TrackingCode::is_well_formed(code.as_str()));
        assert_eq!(ctx.tracking_code, Some(code));

        let outcome = apply(&mut ctx, Action::OpenStage(Stage::AudienceSelection), &mut rng).unwrap();
        assert_eq!(outcome.to, Stage::AudienceSelection);
        assert_eq!(ctx.current_stage, Stage::AudienceSelection);
    }

    #[test]
    fn test_finalize_can_advance_in_the_same_action() {
        let mut ctx = WorkflowContext::new();
        let outcome = apply(
            &mut ctx,
            Action::FinalizeBrief {
                brief: brief(),
                advance: true,
            },
            &mut rng(),
        )
        .unwrap();

        assert_eq!(outcome.from, Stage::Brief);
        assert_eq!(outcome.to, Stage::AudienceSelection);
        assert!(ctx.tracking_code.is_some());
    }

    #[test]
    fn test_refinalizing_invalidates_audience_lock() {
        let mut ctx = WorkflowContext::new();
        let mut rng = rng();
        apply(
            &mut ctx,
            Action::FinalizeBrief {
                brief: brief(),
                advance: true,
            },
            &mut rng,
        )
        .unwrap();

        let mut selection = AudienceSelection::new();
        selection.select("年輕都會女性", 180_000);
        apply(&mut ctx, Action::LockAudience(selection), &mut rng).unwrap();
        assert_eq!(ctx.audience.len(), 1);
        let first_code = ctx.tracking_code.clone();

        apply(
            &mut ctx,
            Action::FinalizeBrief {
                brief: brief(),
                advance: false,
            },
            &mut rng,
        )
        .unwrap();
        assert!(ctx.audience.is_empty());
        assert_ne!(ctx.tracking_code, first_code);
    }

    #[test]
    fn test_locking_empty_audience_is_valid() {
        let mut ctx = WorkflowContext::new();
        let mut rng = rng();
        apply(
            &mut ctx,
            Action::FinalizeBrief {
                brief: brief(),
                advance: true,
            },
            &mut rng,
        )
        .unwrap();

        let outcome = apply(&mut ctx, Action::LockAudience(AudienceSelection::new()), &mut rng);
        assert!(outcome.is_ok());
        assert_eq!(ctx.current_stage, Stage::ChannelAndCreative);
        assert!(ctx.audience.is_empty());
    }

    #[test]
    fn test_survey_and_remarketing_flags() {
        let mut ctx = WorkflowContext::new();
        let mut rng = rng();

        apply(&mut ctx, Action::SendSurvey, &mut rng).unwrap();
        assert!(ctx.survey_sent);
        assert_eq!(ctx.current_stage, Stage::Performance);

        apply(&mut ctx, Action::AddToRemarketing, &mut rng).unwrap();
        assert!(ctx.remarketing_flagged);
        assert_eq!(ctx.current_stage, Stage::Brief);
    }

    #[test]
    fn test_workflow_is_cyclic() {
        let mut ctx = WorkflowContext::new();
        let mut rng = rng();
        apply(&mut ctx, Action::OpenStage(Stage::Loyalty), &mut rng).unwrap();
        apply(&mut ctx, Action::NewProposal, &mut rng).unwrap();
        assert_eq!(ctx.current_stage, Stage::Brief);
    }

    #[test]
    fn test_rule_table_covers_every_action_kind() {
        for kind in [
            ActionKind::FinalizeBrief,
            ActionKind::OpenStage,
            ActionKind::LockAudience,
            ActionKind::SendSurvey,
            ActionKind::AddToRemarketing,
            ActionKind::NewProposal,
        ] {
            assert!(RULES.iter().any(|r| r.action == kind), "{:?} unruled", kind);
        }
    }
}
