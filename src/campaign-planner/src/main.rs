//! Campaign Planner — guided campaign planning from brief to creative export.
//!
//! Drives one full planning session on the command line: login, brief intake
//! with a quote and KPI preview, proposal finalization, audience
//! recommendation and lock, copy/layout generation, and CSV exports.

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use planner_core::config::AppConfig;
use planner_core::{AudienceSelection, CampaignBrief, Goal, Industry};
use planner_creative::{build_image_prompt, copy_csv, copy_suggestions, layout_spec_text, FrameType};
use planner_estimator::{
    estimate_kpi, lifecycle_mix_for_goal, quote_by_days, survey_quote, SurveyFormat,
};
use planner_personas::{analyze_shopper_list, normalize, sample_personas, recommend, PersonaTable};
use planner_reporting::{daily_series, kpi_sample, matrix_sample, performance_csv};
use planner_workflow::{apply, Action, SessionStore, Stage};

#[derive(Parser, Debug)]
#[command(name = "campaign-planner")]
#[command(about = "Guided campaign planning from brief to creative export")]
#[command(version)]
struct Cli {
    /// Login email for the planning session
    #[arg(long, env = "CAMPAIGN_PILOT__EMAIL")]
    email: String,

    /// Brand or company name (overrides config)
    #[arg(long, env = "CAMPAIGN_PILOT__COMPANY")]
    company: Option<String>,

    /// Industry: wellness, fitness, pet, home-appliance, fmcg, beauty, other
    #[arg(long, default_value = "beauty")]
    industry: String,

    /// Campaign goal: awareness, leads, purchase
    #[arg(long, default_value = "awareness")]
    goal: String,

    /// Budget in TWD
    #[arg(long, default_value_t = 200_000)]
    budget: u64,

    /// Flight start date (YYYY-MM-DD)
    #[arg(long)]
    start: NaiveDate,

    /// Flight end date (YYYY-MM-DD)
    #[arg(long)]
    end: NaiveDate,

    /// Forbidden-language note carried on the brief
    #[arg(long)]
    forbidden: Option<String>,

    /// Persona source CSV (overrides config; bundled samples when absent)
    #[arg(long, env = "CAMPAIGN_PILOT__PERSONAS__FILE")]
    personas: Option<String>,

    /// Shopper list CSV to analyze on the insight stage
    #[arg(long)]
    shopper_list: Option<String>,

    /// Resume at a stage from a shared link, e.g. "performance"
    #[arg(long)]
    stage: Option<String>,

    /// Survey sample count quoted on the market-research step
    #[arg(long, default_value_t = 800)]
    survey_samples: u64,

    /// Assumed audience growth percentage applied to the locked selection
    #[arg(long, default_value_t = 0)]
    growth: u32,

    /// RNG seed for tracking codes, copy picks, and display samples
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Export directory (overrides config)
    #[arg(long, env = "CAMPAIGN_PILOT__EXPORT__OUT_DIR")]
    out_dir: Option<String>,
}

fn parse_industry(s: &str) -> anyhow::Result<Industry> {
    match s {
        "wellness" => Ok(Industry::Wellness),
        "fitness" => Ok(Industry::Fitness),
        "pet" => Ok(Industry::Pet),
        "home-appliance" => Ok(Industry::HomeAppliance),
        "fmcg" => Ok(Industry::Fmcg),
        "beauty" => Ok(Industry::Beauty),
        "other" => Ok(Industry::Other),
        _ => anyhow::bail!("unknown industry: {s}"),
    }
}

fn parse_goal(s: &str) -> anyhow::Result<Goal> {
    match s {
        "awareness" => Ok(Goal::Awareness),
        "leads" => Ok(Goal::Leads),
        "purchase" => Ok(Goal::Purchase),
        _ => anyhow::bail!("unknown goal: {s}"),
    }
}

fn load_personas(path: &str) -> Vec<planner_personas::PersonaRecord> {
    match PersonaTable::from_path(path) {
        Ok(table) => {
            let records = normalize(&table);
            if records.is_empty() {
                warn!(path, "persona source has no rows, using bundled samples");
                sample_personas()
            } else {
                info!(path, personas = records.len(), "persona source loaded");
                records
            }
        }
        Err(e) => {
            warn!(path, error = %e, "persona source unavailable, using bundled samples");
            sample_personas()
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_planner=info,planner=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });
    if let Some(company) = cli.company {
        config.company = company;
    }
    if let Some(personas) = cli.personas {
        config.personas.file = personas;
    }
    if let Some(out_dir) = cli.out_dir {
        config.export.out_dir = out_dir;
    }

    let industry = parse_industry(&cli.industry)?;
    let goal = parse_goal(&cli.goal)?;
    let mut rng = StdRng::seed_from_u64(cli.seed);

    // ─── Login ──────────────────────────────────────────────────────────
    let store = SessionStore::new();
    let session = store.login(&cli.email, &config.company)?;
    info!(session_id = %session.id, email = %session.email, "session started");
    let mut ctx = session.context;

    if let Some(stage) = &cli.stage {
        if ctx.restore_stage(stage) {
            info!(stage = ctx.current_stage.as_str(), "resumed from shared link");
        }
    }

    // ─── Brief intake, quote, and KPI preview ───────────────────────────
    let brief = CampaignBrief::new(
        config.company.clone(),
        industry,
        goal,
        cli.budget,
        cli.start,
        cli.end,
        cli.forbidden.clone(),
    )?;

    if !ctx.channel_mix.is_balanced() {
        warn!(deviation = ctx.channel_mix.deviation(), "channel mix does not sum to 100%");
    }
    let quote = quote_by_days(brief.flight_days(), &ctx.channel_mix);
    println!("\n== 提案報價（{} 天） ==", quote.days);
    for item in &quote.breakdown {
        println!("  {:<12} {:>10} TWD", item.channel, item.amount);
    }
    println!("  {:<12} {:>10} TWD", "合計", quote.total);

    let kpi = estimate_kpi(brief.budget, &ctx.channel_mix);
    println!("\n== 成效預估（預算 {} TWD） ==", kpi.cost);
    println!("  CTR {:.2}%  CPA {:.2}  轉換 {}  ROAS {:.2}", kpi.ctr, kpi.cpa, kpi.conversions, kpi.roas);

    let survey = survey_quote(cli.survey_samples, SurveyFormat::Mixed);
    println!(
        "\n== 市調報價 ==\n  樣本 {}  費用 {} TWD  時程 {}–{} 天",
        survey.samples, survey.cost, survey.eta_days.0, survey.eta_days.1
    );

    // ─── Finalize and pick the audience ─────────────────────────────────
    let outcome = apply(
        &mut ctx,
        Action::FinalizeBrief {
            brief: brief.clone(),
            advance: true,
        },
        &mut rng,
    )?;
    if let Some(code) = &outcome.issued_code {
        println!("\n追蹤碼：{code}");
    }

    let personas = load_personas(&config.personas.file);
    let recommendation = recommend(industry, goal, &personas, config.scoring.top_k);
    println!("\n== 推薦受眾（前 {} 名） ==", recommendation.top.len());
    let mut selection = AudienceSelection::new();
    for persona in &recommendation.top {
        println!("  {:<14} 規模 {:>8}  痛點：{}", persona.name, persona.size, persona.pain_point);
        selection.select(&persona.name, persona.size);
    }
    apply(&mut ctx, Action::LockAudience(selection), &mut rng)?;
    println!(
        "  合計觸及 {}（成長 {}% 後 {}）",
        ctx.audience.total_size(),
        cli.growth,
        ctx.audience.scaled_total(cli.growth)
    );

    // ─── Creative: lifecycle channels, copy, prompts, layout guidance ───
    let lifecycle = lifecycle_mix_for_goal(goal);
    println!("\n== 生命週期渠道建議（{}） ==", goal.label());
    for (channel, percent) in lifecycle.iter() {
        println!("  {:<8} {:>3}%", channel, percent);
    }

    let blocks = copy_suggestions(&ctx.audience, &mut rng);
    println!("\n== 文案建議（每個 TA 五則） ==");
    for block in &blocks {
        println!("{}", block.audience);
        for line in &block.lines {
            println!("  {}：{}", line.label, line.text);
        }
    }

    println!("\n== 圖片 Prompt（B 產品特寫） ==");
    for name in ctx.audience.names() {
        for (channel, _) in ctx.channel_mix.iter() {
            println!("{}\n", build_image_prompt(name, FrameType::ProductCloseup, channel));
        }
    }

    // ─── Exports ────────────────────────────────────────────────────────
    let out_dir = Path::new(&config.export.out_dir);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating export directory {}", out_dir.display()))?;

    let copy_path = out_dir.join("copy_suggestions.csv");
    fs::write(&copy_path, copy_csv(&blocks)?)?;
    info!(path = %copy_path.display(), "copy table exported");

    let spec_path = out_dir.join("image_spec.txt");
    let channels: Vec<String> = ctx.channel_mix.iter().map(|(c, _)| c.to_string()).collect();
    fs::write(&spec_path, layout_spec_text(channels.iter().map(String::as_str)))?;
    info!(path = %spec_path.display(), "layout guidance exported");

    // ─── Performance stage samples ──────────────────────────────────────
    apply(&mut ctx, Action::OpenStage(Stage::Performance), &mut rng)?;
    let overview = kpi_sample(cli.seed);
    println!(
        "\n== 投放成效（示意） ==\n  曝光 {}  點擊 {}  CTR {:.2}%  轉換 {}  CPA {:.2}  ROAS {:.2}",
        overview.impressions, overview.clicks, overview.ctr, overview.conversions, overview.cpa, overview.roas
    );
    let channel_names: Vec<&str> = channels.iter().map(String::as_str).collect();
    let matrix = matrix_sample(&channel_names, cli.seed);
    let perf_path = out_dir.join("performance.csv");
    fs::write(&perf_path, performance_csv(&matrix)?)?;
    info!(path = %perf_path.display(), rows = matrix.len(), "performance table exported");

    let series = daily_series(brief.flight_days() as u32, &ctx.channel_mix, cli.seed);
    let spend: u64 = series.iter().map(|d| d.spend).sum();
    println!("  每日趨勢 {} 筆，累計花費 {} TWD", series.len(), spend);

    // ─── Shopper insight ────────────────────────────────────────────────
    if let Some(path) = &cli.shopper_list {
        apply(&mut ctx, Action::OpenStage(Stage::MarketInsight), &mut rng)?;
        // A broken upload is reported and the session keeps its prior state.
        match PersonaTable::from_path(path) {
            Ok(table) => {
                let insight = analyze_shopper_list(&table);
                println!("\n== 買客名單洞察 ==\n  {}", insight.note);
                ctx.shopper_insight = Some(insight);
            }
            Err(e) => eprintln!("買客名單無法解析：{e}"),
        }
    }

    store.update(&cli.email, |stored| *stored = ctx.clone())?;
    info!(stage = ctx.current_stage.as_str(), "session saved");
    Ok(())
}
