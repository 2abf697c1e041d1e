//! `seqlims` command line front end
//!
//! Runs the quality engine over a JSON array of records and prints findings,
//! scores or a batch report as text or JSON. Logs go to stderr (`RUST_LOG`,
//! default `info`).

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use seqlims_model::{records_from_json_str, ExperimentType, Record, ValidationResult};
use seqlims_quality::{DataValidator, ScoringConfig};
use seqlims_rules::standards_for;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let matches = cli().get_matches();
    let output = match matches.subcommand() {
        Some(("validate", args)) => run_validate(args)?,
        Some(("score", args)) => run_score(args)?,
        Some(("report", args)) => run_report(args)?,
        Some(("standards", args)) => run_standards(args)?,
        Some(("check", args)) => run_check(args)?,
        _ => {
            cli().print_help()?;
            return Ok(());
        }
    };
    print!("{output}");
    Ok(())
}

fn cli() -> Command {
    let experiment = Arg::new("type")
        .long("type")
        .short('t')
        .required(true)
        .value_parser(|s: &str| s.parse::<ExperimentType>())
        .help("Experiment type: nucleic_extraction, pcr_amplification or library_construction");
    let input = Arg::new("input")
        .long("input")
        .short('i')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON file holding an array of records");
    let config = Arg::new("config")
        .long("config")
        .short('c')
        .value_parser(value_parser!(PathBuf))
        .help("TOML scoring configuration");
    let json = Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON");

    Command::new("seqlims")
        .version(seqlims_quality::VERSION)
        .about("Sequencing LIMS data-quality validation and scoring")
        .subcommand(
            Command::new("validate")
                .about("List findings per record")
                .arg(experiment.clone())
                .arg(input.clone())
                .arg(json.clone()),
        )
        .subcommand(
            Command::new("score")
                .about("Score every record")
                .arg(experiment.clone())
                .arg(input.clone())
                .arg(config.clone())
                .arg(json.clone()),
        )
        .subcommand(
            Command::new("report")
                .about("Generate a batch quality report")
                .arg(experiment.clone())
                .arg(input)
                .arg(config)
                .arg(json.clone()),
        )
        .subcommand(
            Command::new("standards")
                .about("Print the quality standards of an experiment type")
                .arg(experiment.clone())
                .arg(json.clone()),
        )
        .subcommand(
            Command::new("check")
                .about("Check one value against its quality standard")
                .arg(experiment)
                .arg(
                    Arg::new("parameter")
                        .long("parameter")
                        .short('p')
                        .required(true)
                        .help("Standard parameter, e.g. dnaConcentration"),
                )
                .arg(
                    Arg::new("value")
                        .long("value")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64))
                        .help("Measured value"),
                )
                .arg(json),
        )
}

fn experiment_type(args: &ArgMatches) -> Result<ExperimentType> {
    args.get_one::<ExperimentType>("type")
        .copied()
        .context("missing --type")
}

fn load_records(args: &ArgMatches) -> Result<Vec<Record>> {
    let path = args
        .get_one::<PathBuf>("input")
        .context("missing --input")?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read records from {}", path.display()))?;
    let records = records_from_json_str(&text)
        .with_context(|| format!("failed to parse records in {}", path.display()))?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

fn load_config(path: Option<&PathBuf>) -> Result<ScoringConfig> {
    let Some(path) = path else {
        return Ok(ScoringConfig::default());
    };
    read_config(path)
}

fn read_config(path: &Path) -> Result<ScoringConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    ScoringConfig::from_toml_str(&text)
        .with_context(|| format!("invalid scoring config {}", path.display()))
}

fn validator(args: &ArgMatches) -> Result<DataValidator> {
    let config = match args.try_get_one::<PathBuf>("config") {
        Ok(path) => load_config(path)?,
        Err(_) => ScoringConfig::default(),
    };
    DataValidator::with_config(experiment_type(args)?, config)
        .context("unusable scoring config")
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    out.push('\n');
    Ok(out)
}

fn run_validate(args: &ArgMatches) -> Result<String> {
    let validator = validator(args)?;
    let by_id = validator.validate_records(&load_records(args)?);
    if args.get_flag("json") {
        return to_json(&by_id);
    }

    let mut out = String::new();
    for (id, results) in &by_id {
        if results.is_empty() {
            writeln!(out, "{id}: ok")?;
            continue;
        }
        writeln!(out, "{id}: {} 项问题", results.len())?;
        for result in results {
            writeln!(out, "  {}", describe(result))?;
        }
    }
    Ok(out)
}

fn describe(result: &ValidationResult) -> String {
    let mut line = format!("[{}] {}: {}", result.level, result.field, result.message);
    if let Some(suggestion) = &result.suggestion {
        let _ = write!(line, " ({suggestion})");
    }
    line
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoredRecord {
    record_id: String,
    #[serde(flatten)]
    score: seqlims_model::QualityScore,
}

fn run_score(args: &ArgMatches) -> Result<String> {
    let validator = validator(args)?;
    let scored: Vec<ScoredRecord> = load_records(args)?
        .iter()
        .map(|record| ScoredRecord {
            record_id: record.resolve_id(),
            score: validator.calculate_quality_score(record),
        })
        .collect();
    if args.get_flag("json") {
        return to_json(&scored);
    }

    let mut out = String::new();
    for s in &scored {
        writeln!(
            out,
            "{} {:.1}/{} [{}]",
            s.record_id, s.score.total_score, s.score.max_score, s.score.grade
        )?;
        for improvement in &s.score.improvements {
            writeln!(out, "  - {improvement}")?;
        }
    }
    Ok(out)
}

fn run_report(args: &ArgMatches) -> Result<String> {
    let report = validator(args)?.generate_quality_report(&load_records(args)?);
    if args.get_flag("json") {
        let mut out = report.to_json_pretty()?;
        out.push('\n');
        return Ok(out);
    }
    Ok(report.generate_text())
}

fn run_standards(args: &ArgMatches) -> Result<String> {
    let ty = experiment_type(args)?;
    let standards = standards_for(ty);
    if args.get_flag("json") {
        return to_json(standards);
    }

    let mut out = String::new();
    writeln!(out, "{} ({ty})", ty.label())?;
    for standard in standards {
        writeln!(
            out,
            "  {:<24} {}  {}",
            standard.parameter,
            standard.name,
            standard.range_text()
        )?;
    }
    Ok(out)
}

fn run_check(args: &ArgMatches) -> Result<String> {
    let validator = DataValidator::new(experiment_type(args)?);
    let parameter = args
        .get_one::<String>("parameter")
        .context("missing --parameter")?;
    let value = *args.get_one::<f64>("value").context("missing --value")?;

    let check = validator.check_value_against_standard(parameter, value);
    if args.get_flag("json") {
        return to_json(&check);
    }
    let verdict = if check.is_valid { "valid" } else { "invalid" };
    Ok(format!("[{}] {verdict}: {}\n", check.level, check.message))
}
