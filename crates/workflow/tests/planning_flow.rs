//! End-to-end walk through the guided planning flow against the session
//! store, exercising the gating, finalize, audience lock, and quote steps
//! the way the surrounding UI drives them.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use planner_core::{AudienceSelection, CampaignBrief, Goal, Industry};
use planner_estimator::{estimate_kpi, quote_by_days};
use planner_personas::{recommend, sample_personas};
use planner_workflow::{apply, Action, SessionStore, Stage, TrackingCode, WorkflowError};

fn brief() -> CampaignBrief {
    CampaignBrief::new(
        "好好生活",
        Industry::Pet,
        Goal::Purchase,
        200_000,
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 8, 14).unwrap(),
        Some("無療效宣稱".into()),
    )
    .unwrap()
}

#[test]
fn full_planning_flow() {
    let store = SessionStore::new();
    let mut rng = StdRng::seed_from_u64(2025);

    let session = store.login("planner@agency.tw", "好好生活").unwrap();
    assert_eq!(session.context.current_stage, Stage::Brief);

    // Audience work is gated until the proposal is finalized.
    let mut ctx = session.context;
    let err = apply(&mut ctx, Action::OpenStage(Stage::AudienceSelection), &mut rng).unwrap_err();
    assert!(matches!(
        err,
        WorkflowError::TrackingCodeRequired {
            attempted: Stage::AudienceSelection,
            redirect: Stage::Brief,
        }
    ));
    assert_eq!(ctx.current_stage, Stage::Brief);

    // Quote and KPI preview on the brief stage are pure functions of the
    // inputs, so re-running them cannot drift.
    let brief = brief();
    let quote_a = quote_by_days(brief.flight_days(), &ctx.channel_mix);
    let quote_b = quote_by_days(brief.flight_days(), &ctx.channel_mix);
    assert_eq!(quote_a, quote_b);
    assert_eq!(quote_a.total, 371_000);
    let kpi = estimate_kpi(brief.budget, &ctx.channel_mix);
    assert!(kpi.conversions > 0);

    // Finalize: a code is issued and the audience stage opens up.
    let outcome = apply(
        &mut ctx,
        Action::FinalizeBrief {
            brief,
            advance: true,
        },
        &mut rng,
    )
    .unwrap();
    let code = outcome.issued_code.unwrap();
    assert!(TrackingCode::is_well_formed(code.as_str()));
    assert_eq!(ctx.current_stage, Stage::AudienceSelection);

    // Circle the top recommended personas and lock them in.
    let personas = sample_personas();
    let recommendation = recommend(Industry::Pet, Goal::Purchase, &personas, 3);
    let mut selection = AudienceSelection::new();
    for persona in &recommendation.top {
        selection.select(&persona.name, persona.size);
    }
    apply(&mut ctx, Action::LockAudience(selection), &mut rng).unwrap();
    assert_eq!(ctx.current_stage, Stage::ChannelAndCreative);
    assert_eq!(ctx.audience.len(), 3);
    assert!(ctx.audience.contains("有毛孩家庭"));

    // Later stages cycle back to the brief.
    apply(&mut ctx, Action::SendSurvey, &mut rng).unwrap();
    assert_eq!(ctx.current_stage, Stage::Performance);
    apply(&mut ctx, Action::AddToRemarketing, &mut rng).unwrap();
    assert_eq!(ctx.current_stage, Stage::Brief);
    assert!(ctx.survey_sent);
    assert!(ctx.remarketing_flagged);

    // Persist back into the store and confirm logout wipes everything.
    store
        .update("planner@agency.tw", |stored| *stored = ctx.clone())
        .unwrap();
    assert!(store.logout("planner@agency.tw"));
    let fresh = store.login("planner@agency.tw", "好好生活").unwrap();
    assert!(fresh.context.tracking_code.is_none());
}

#[test]
fn locking_an_empty_audience_still_advances() {
    let store = SessionStore::new();
    let mut rng = StdRng::seed_from_u64(7);
    let session = store.login("planner@agency.tw", "Acme").unwrap();
    let mut ctx = session.context;

    apply(
        &mut ctx,
        Action::FinalizeBrief {
            brief: brief(),
            advance: true,
        },
        &mut rng,
    )
    .unwrap();
    apply(&mut ctx, Action::LockAudience(AudienceSelection::new()), &mut rng).unwrap();

    assert_eq!(ctx.current_stage, Stage::ChannelAndCreative);
    assert!(ctx.audience.is_empty());
}
