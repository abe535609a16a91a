use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use labcheck_registry::{supported_categories, Category};
use labcheck_report::{confidence_percent, Assessor, LabValidationError, TierCutoffs};
use labcheck_validate::{load_config_from_file, ParsedValues, ScoringConfig, ValidationResult};
use log::{info, LevelFilter};
use serde_json::json;

pub const EXIT_VALID: i32 = 0;
pub const EXIT_REJECTED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "labcheck",
    version,
    about = "Check that a lab report matches the lab type it was uploaded as",
    long_about = "labcheck scores OCR text or extracted values from a lab report against\n\
        a declared category (cbc, urinalysis, lipid) and explains any rejection.\n\n\
        EXAMPLES:\n\
        \n  labcheck text --category cbc report.txt          Check OCR text\n\
        \n  labcheck values --category lipid values.json     Check extracted values\n\
        \n  ocr scan.png | labcheck text -c urinalysis --json Read stdin, print JSON\n\
        \n  labcheck categories                              List lab types\n\n\
        Exit status is 0 when the report is accepted, 1 when it is rejected\n\
        and 2 on usage, input or configuration errors."
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate raw report text (OCR output)
    Text(CheckArgs),

    /// Validate a JSON object of extracted field names and values
    Values(CheckArgs),

    /// List the supported lab types
    Categories(CategoriesArgs),
}

#[derive(Debug, Args, Clone)]
pub struct CheckArgs {
    /// Lab type the report was uploaded as
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Category,

    /// Input file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// JSON file overriding scoring weights and thresholds
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the result or error payload as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone, Default)]
pub struct CategoriesArgs {
    /// Print as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// What to print on stdout and the status to exit with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub exit_code: i32,
}

/// Install the logger. `RUST_LOG` still wins over `-v`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

/// Run one subcommand. `Err` carries a usage, input or configuration error.
pub fn execute(command: &Command) -> Result<Outcome, String> {
    match command {
        Command::Text(args) => {
            let config = load_config(args.config.as_deref())?;
            let source = read_source_from_input(&args.input)?;
            info!("checking {} bytes of text as {}", source.len(), args.category);
            let verdict = Assessor::new(&config).assess_text(&source, args.category);
            render_verdict(args, verdict)
        }
        Command::Values(args) => {
            let config = load_config(args.config.as_deref())?;
            let source = read_source_from_input(&args.input)?;
            let values: ParsedValues = serde_json::from_str(&source)
                .map_err(|e| format!("expected a JSON object of parsed values: {e}"))?;
            info!("checking {} parsed values as {}", values.len(), args.category);
            let verdict = Assessor::new(&config).assess_parsed_values(&values, args.category);
            render_verdict(args, verdict)
        }
        Command::Categories(args) => {
            let output = if args.json {
                let list: Vec<_> = supported_categories()
                    .iter()
                    .map(|c| json!({ "id": c.id(), "displayName": c.display_name() }))
                    .collect();
                to_json(&list)?
            } else {
                supported_categories()
                    .iter()
                    .map(|c| format!("{}\t{}\n", c.id(), c.display_name()))
                    .collect()
            };
            Ok(Outcome {
                output,
                exit_code: EXIT_VALID,
            })
        }
    }
}

pub fn read_source_from_input(input: &Option<PathBuf>) -> Result<String, String> {
    if let Some(path) = input {
        fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {e}", path.display()))
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read from stdin: {e}"))?;
        Ok(buf)
    }
}

fn load_config(path: Option<&Path>) -> Result<ScoringConfig, String> {
    match path {
        Some(p) => load_config_from_file(p).map_err(|e| format!("invalid config: {e}")),
        None => Ok(ScoringConfig::default()),
    }
}

fn render_verdict(
    args: &CheckArgs,
    verdict: Result<ValidationResult, LabValidationError>,
) -> Result<Outcome, String> {
    let exit_code = if verdict.is_ok() {
        EXIT_VALID
    } else {
        EXIT_REJECTED
    };
    let output = match (&verdict, args.json) {
        (Ok(result), true) => to_json(result)?,
        (Err(err), true) => to_json(err)?,
        (Ok(result), false) => render_accepted(args.category, result),
        (Err(err), false) => render_rejected(err),
    };
    Ok(Outcome { output, exit_code })
}

fn render_accepted(category: Category, result: &ValidationResult) -> String {
    let tier = TierCutoffs::default().tier(result.confidence);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "accepted as {} (confidence {}%, {tier:?})",
        category.display_name(),
        confidence_percent(result.confidence)
    );
    let _ = writeln!(out, "keywords: {}", list_or_none(&result.matched_keywords));
    let _ = writeln!(out, "parameters: {}", list_or_none(&result.matched_parameters));
    out
}

fn render_rejected(err: &LabValidationError) -> String {
    let d = &err.details;
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", err.code, err.message);
    let _ = writeln!(
        out,
        "selected: {} (confidence {}%, {:?})",
        d.selected_lab_type, d.confidence, d.confidence_tier
    );
    for reason in &d.reasons {
        let _ = writeln!(out, "reason: {reason}");
    }
    for suggestion in &d.suggestions {
        let _ = writeln!(out, "suggestion: {suggestion}");
    }
    out
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| format!("failed to serialize JSON: {e}"))
}
