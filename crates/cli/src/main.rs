use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fmt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use optifinops_core::config::Settings;
use optifinops_core::domain::contract::{AssessmentSubmission, SavingsRequest};
use optifinops_core::domain::savings::{Provider, ResourceType};
use optifinops_core::error::{IncompleteAnswersError, ValidationError};
use optifinops_core::maturity::questionnaire;
use optifinops_core::savings::Level;
use optifinops_core::time::projection_calendar;

#[derive(Debug, Parser)]
#[command(name = "optifinops", about = "Cloud savings estimates and FinOps maturity scoring")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project monthly and annual savings for a cloud bill.
    Estimate {
        /// Current monthly spend.
        #[arg(long)]
        spend: String,

        #[arg(long, default_value_t = Provider::Aws)]
        provider: Provider,

        #[arg(long, default_value_t = ResourceType::Compute)]
        resource_type: ResourceType,

        /// Average utilization percentage (0-100). Defaults to 50.
        #[arg(long)]
        utilization: Option<String>,

        /// First projection month (YYYY-MM or YYYY-MM-DD). Defaults to PROJECTION_ANCHOR, then today.
        #[arg(long)]
        anchor: Option<String>,
    },

    /// Score a FinOps maturity assessment.
    Assess {
        /// Answer as question_id=value (1-4). Repeat for each question.
        #[arg(long = "answer", value_name = "ID=VALUE")]
        answers: Vec<String>,

        /// Score even if some questions are unanswered (they count as 0).
        #[arg(long)]
        allow_partial: bool,
    },

    /// Print the assessment questionnaire.
    Questions,

    /// Print the best practices guide, optionally filtered by impact and effort.
    BestPractices {
        /// Only practices with at least this impact (low, medium, high).
        #[arg(long)]
        min_impact: Option<Level>,

        /// Only practices with at most this effort (low, medium, high).
        #[arg(long)]
        max_effort: Option<Level>,
    },

    /// Print provider-specific savings levers for a resource type.
    Tips {
        #[arg(long, default_value_t = Provider::Aws)]
        provider: Provider,

        #[arg(long, default_value_t = ResourceType::Compute)]
        resource_type: ResourceType,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    match run(args.command, &settings) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            if !is_usage_error(&err) {
                sentry_anyhow::capture_anyhow(&err);
                tracing::error!(error = %err, "command failed");
            }
            Err(err)
        }
    }
}

fn run(command: Command, settings: &Settings) -> anyhow::Result<String> {
    let output = match command {
        Command::Estimate {
            spend,
            provider,
            resource_type,
            utilization,
            anchor,
        } => {
            let input = SavingsRequest {
                current_spend: Some(serde_json::Value::String(spend)),
                provider,
                resource_type,
                utilization_rate: utilization.map(serde_json::Value::String),
            }
            .validate_and_into_input()?;

            let anchor = match anchor.as_deref() {
                Some(s) => projection_calendar::parse_anchor(s)
                    .map_err(|e| UsageError(format!("{e:#}")))?,
                None => match settings.projection_anchor {
                    Some(d) => d,
                    None => projection_calendar::resolve_anchor(None, chrono::Utc::now())?,
                },
            };

            let result = optifinops_core::savings::estimate_at(&input, anchor)?;
            tracing::info!(%provider, %resource_type, %anchor, "savings estimated");
            serde_json::to_string_pretty(&result)?
        }
        Command::Assess {
            answers,
            allow_partial,
        } => {
            let submission = AssessmentSubmission {
                answers: parse_answer_args(&answers)?,
            };
            let dimensions = questionnaire::dimensions();
            let answers = submission.validate_and_into_answers(&dimensions)?;
            let report = optifinops_core::maturity::assess(
                &answers,
                &dimensions,
                allow_partial || settings.assessment_allow_partial,
            )?;
            tracing::info!(
                maturity_level = %report.result.maturity_level,
                "assessment scored"
            );
            serde_json::to_string_pretty(&report)?
        }
        Command::Questions => serde_json::to_string_pretty(questionnaire::questionnaire())?,
        Command::Tips {
            provider,
            resource_type,
        } => serde_json::to_string_pretty(&optifinops_core::savings::optimization_tips(
            provider,
            resource_type,
        ))?,
        Command::BestPractices {
            min_impact,
            max_effort,
        } => match (min_impact, max_effort) {
            (None, None) => serde_json::to_string_pretty(optifinops_core::savings::best_practices())?,
            (min_impact, max_effort) => {
                serde_json::to_string_pretty(&optifinops_core::savings::filter_practices(
                    min_impact.unwrap_or(Level::Low),
                    max_effort.unwrap_or(Level::High),
                ))?
            }
        },
    };
    Ok(output)
}

/// Bad command line input. Reported to the user but not to Sentry.
#[derive(Debug)]
struct UsageError(String);

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for UsageError {}

fn is_usage_error(err: &anyhow::Error) -> bool {
    err.is::<UsageError>() || err.is::<ValidationError>() || err.is::<IncompleteAnswersError>()
}

fn parse_answer_args(args: &[String]) -> anyhow::Result<BTreeMap<String, i64>> {
    let mut out = BTreeMap::new();
    for arg in args {
        let (id, value) = arg.split_once('=').ok_or_else(|| {
            UsageError(format!("answer must look like question_id=value (got {arg:?})"))
        })?;
        let value = value.trim().parse::<i64>().map_err(|_| {
            UsageError(format!("answer value must be a whole number (got {arg:?})"))
        })?;
        out.insert(id.trim().to_string(), value);
    }
    Ok(out)
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
