use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dashboard::catalog;
use dashboard::{ExportPaths, ReportSummary, ReportsView, StatusTab};
use factcheck_core::{
    CheckSession, ClassifierPolicy, ClassifyError, ContentKind, KeywordClassifier, ReportRecord,
    Submission, Verdict,
};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "factcheck")]
#[command(about = "Fact-check dashboard CLI", long_about = None)]
struct Cli {
    /// Directory holding policy.toml, keywords.yaml and sources.yaml
    #[arg(long, global = true, env = "FACTCHECK_POLICY_DIR")]
    policy_dir: Option<PathBuf>,

    /// Override the simulated analysis delay
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fact-check text, a URL or an image
    Check(CheckArgs),
    /// Browse the fact-check history
    Reports {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Show misinformation trends
    Trends,
    /// Show the dashboard overview
    Dashboard,
    /// Education center material
    Learn {
        #[arg(value_enum, default_value_t = LearnTopic::All)]
        topic: LearnTopic,
    },
    /// Export canonical JSON Schemas to the ./schemas directory
    Schema {
        #[command(subcommand)]
        command: SchemaCommands,
    },
}

#[derive(clap::Args)]
struct CheckArgs {
    /// Text or URL to verify
    #[arg(required_unless_present = "image", conflicts_with = "image")]
    content: Option<String>,

    /// How to treat CONTENT; not used with --image
    #[arg(long, value_enum, default_value_t = KindArg::Text, conflicts_with = "image")]
    kind: KindArg,

    /// File name of an uploaded image (JPEG, PNG or GIF)
    #[arg(long)]
    image: Option<String>,

    /// Print the verdict as JSON
    #[arg(long)]
    json: bool,

    /// Also write the result as a report note under this directory
    #[arg(long)]
    record: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Text,
    Url,
}

impl From<KindArg> for ContentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Text => ContentKind::Text,
            KindArg::Url => ContentKind::Url,
        }
    }
}

#[derive(Subcommand)]
enum ReportCommands {
    /// List reports, filtered by status tab and search term
    List {
        #[arg(long, default_value = "all")]
        status: StatusTab,

        /// Case-insensitive match against content or category
        #[arg(long, default_value = "")]
        search: String,

        #[arg(long)]
        json: bool,
    },
    /// Write every report as a markdown note plus an index
    Export {
        #[arg(long)]
        out_dir: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LearnTopic {
    All,
    Signs,
    Steps,
    Myths,
}

#[derive(Subcommand)]
enum SchemaCommands {
    /// Export JSON Schema files for canonical types
    Export {
        /// Output directory (default: ./schemas)
        #[arg(long, default_value = "schemas")]
        out_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => {
            let policy = load_policy(cli.policy_dir, cli.delay_ms)?;
            check(policy, args).await
        }
        Commands::Reports { command } => match command {
            ReportCommands::List {
                status,
                search,
                json,
            } => reports_list(ReportsView::new(status, search), json),
            ReportCommands::Export { out_dir } => reports_export(out_dir),
        },
        Commands::Trends => {
            trends();
            Ok(())
        }
        Commands::Dashboard => {
            overview();
            Ok(())
        }
        Commands::Learn { topic } => {
            learn(topic);
            Ok(())
        }
        Commands::Schema { command } => match command {
            SchemaCommands::Export { out_dir } => schema_export(out_dir),
        },
    }
}

fn load_policy(policy_dir: Option<PathBuf>, delay_ms: Option<u64>) -> Result<ClassifierPolicy> {
    let policy = match policy_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "loading classifier policy");
            ClassifierPolicy::load_from_dir(&dir)
                .with_context(|| format!("loading policy from {}", dir.display()))?
        }
        None => ClassifierPolicy::default(),
    };
    Ok(match delay_ms {
        Some(ms) => policy.with_delay(Duration::from_millis(ms)),
        None => policy,
    })
}

async fn check(policy: ClassifierPolicy, args: CheckArgs) -> Result<()> {
    let submission = match &args.image {
        Some(file_name) => Submission::image(file_name)?,
        None => Submission::new(args.content.unwrap_or_default(), args.kind.into()),
    };

    let session = CheckSession::new(KeywordClassifier::new(policy)?);
    if !submission.is_blank() {
        eprintln!("Analyzing content... (Ctrl-C to cancel)");
    }

    let outcome = {
        let submit = session.submit(&submission);
        tokio::pin!(submit);
        tokio::select! {
            result = &mut submit => result,
            _ = tokio::signal::ctrl_c() => {
                session.cancel();
                submit.await
            }
        }
    };

    let verdict = match outcome {
        Ok(verdict) => verdict,
        Err(err @ ClassifyError::EmptyInput) => {
            eprintln!("warning: {err}");
            std::process::exit(2);
        }
        Err(ClassifyError::Cancelled) => {
            eprintln!("Fact-check cancelled.");
            std::process::exit(130);
        }
        Err(err) => return Err(err.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        print_verdict(&verdict);
    }

    if let Some(dir) = args.record {
        let checked_at = OffsetDateTime::now_utc();
        let record =
            ReportRecord::from_verdict(record_id(checked_at), &submission, &verdict, checked_at.format(&Rfc3339)?);
        let paths = ExportPaths::new(dir);
        paths.ensure()?;
        let note = dashboard::write_report_note(&paths, &record)?;
        eprintln!("Recorded report at {}", note.display());
    }
    Ok(())
}

/// Nanosecond resolution so back-to-back checks recorded into one
/// directory do not overwrite each other's notes.
fn record_id(checked_at: OffsetDateTime) -> String {
    format!("check-{}", checked_at.unix_timestamp_nanos())
}

fn print_verdict(verdict: &Verdict) {
    println!("Truth score: {}% ({})", verdict.truth_score, verdict.band());
    println!("{}", verdict.confidence_label);
    println!("Category: {}", verdict.category);
    println!();
    println!("Analysis:");
    println!("{}", verdict.explanation);
    println!();
    println!("Verified sources:");
    for source in &verdict.sources {
        println!(
            "- {} (Reliability: {}) {}",
            source.title, source.reliability, source.url
        );
    }
}

fn reports_list(view: ReportsView, json: bool) -> Result<()> {
    let records = catalog::report_history();
    let visible = view.visible(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    let summary = ReportSummary::from_records(&records);
    println!(
        "Total reports: {} | Verified: {} | False: {} | Avg. truth score: {}%",
        summary.total, summary.verified, summary.false_count, summary.average_truth_score
    );
    let tabs: Vec<String> = [
        StatusTab::All,
        StatusTab::Verified,
        StatusTab::False,
        StatusTab::Uncertain,
    ]
    .into_iter()
    .map(|tab| {
        let marker = if tab == view.tab { "*" } else { "" };
        format!("{marker}{tab} ({})", summary.tab_count(tab))
    })
    .collect();
    println!("{}", tabs.join(" | "));
    println!();

    if visible.is_empty() {
        println!("No reports found matching your criteria.");
        return Ok(());
    }
    for record in visible {
        let when = dashboard::format_timestamp(&record.timestamp)?;
        println!(
            "[{}] {:>3}%  {:<9} {:<5} {}  ({} sources)",
            record.status, record.truth_score, record.category, record.kind, when, record.source_count
        );
        println!("      {}", record.content);
    }
    Ok(())
}

fn reports_export(out_dir: PathBuf) -> Result<()> {
    let records = catalog::report_history();
    let written = dashboard::export_reports(&records, &out_dir)?;
    println!("Exported {written} reports to {}", out_dir.display());
    Ok(())
}

fn trends() {
    println!("Misinformation Trends");
    for tile in catalog::trend_headlines() {
        println!("  {}: {}", tile.label, tile.value);
    }

    println!();
    println!("Weekly Detection Trends (misinformation / verified)");
    for point in catalog::weekly_detections() {
        println!("  {}  {:>3} / {:>3}", point.day, point.misinformation, point.verified);
    }

    println!();
    println!("Category Breakdown");
    for share in catalog::category_breakdown() {
        println!("  {:<11} {:>3}%  ({} checks)", share.name, share.percent, share.count);
    }

    println!();
    println!("Top Misinformation Trends");
    for claim in catalog::trending_claims() {
        println!("  {}. {}", claim.id, claim.claim);
        println!(
            "     {} | {} checks | {:+}% | false confidence {}% | {}",
            claim.category,
            claim.checks,
            claim.trend_value,
            claim.false_probability,
            claim.regions.join(", ")
        );
    }
}

fn overview() {
    println!("Dashboard");
    for tile in catalog::dashboard_stats() {
        println!("  {}: {}", tile.label, tile.value);
    }

    println!();
    println!("Recent Checks");
    for check in catalog::recent_checks() {
        println!(
            "  {:>3}% {:<5} {} ({}, {})",
            check.score, check.status, check.content, check.category, check.time
        );
    }

    println!();
    println!("Trending Misinformation");
    for claim in catalog::dashboard_trending() {
        let arrow = match claim.direction {
            catalog::TrendDirection::Up => "up",
            catalog::TrendDirection::Down => "down",
        };
        println!("  {} ({} checks, trending {arrow})", claim.claim, claim.checks);
    }
}

fn learn(topic: LearnTopic) {
    if matches!(topic, LearnTopic::All | LearnTopic::Signs) {
        println!("Misinformation Warning Signs");
        for sign in catalog::warning_signs() {
            println!("  {} [{:?}]", sign.title, sign.severity);
            println!("    {}", sign.description);
            println!("    e.g. \"{}\"", sign.example);
        }
        println!();
    }
    if matches!(topic, LearnTopic::All | LearnTopic::Steps) {
        println!("Verification Steps");
        for step in catalog::verification_steps() {
            println!("  {}. {}: {}", step.step, step.title, step.description);
        }
        println!();
    }
    if matches!(topic, LearnTopic::All | LearnTopic::Myths) {
        println!("Common Myths");
        for myth in catalog::misconceptions() {
            println!("  Myth: {}", myth.misconception);
            println!("  Reality: {}", myth.reality);
        }
    }
}

fn schema_export(out_dir: PathBuf) -> Result<()> {
    fs::create_dir_all(&out_dir)?;

    let submission_schema = schema_for!(factcheck_core::Submission);
    let submission_json = serde_json::to_string_pretty(&submission_schema)?;
    fs::write(out_dir.join("Submission.schema.json"), submission_json)?;

    let verdict_schema = schema_for!(factcheck_core::Verdict);
    let verdict_json = serde_json::to_string_pretty(&verdict_schema)?;
    fs::write(out_dir.join("Verdict.schema.json"), verdict_json)?;

    let report_schema = schema_for!(factcheck_core::ReportRecord);
    let report_json = serde_json::to_string_pretty(&report_schema)?;
    fs::write(out_dir.join("ReportRecord.schema.json"), report_json)?;

    println!("Exported schemas to {}", out_dir.display());
    Ok(())
}
