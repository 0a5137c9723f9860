//! Command-line interface for bqc
//! This binary parses, validates and inspects BQC quiz files.
//!
//! Usage:
//!   bqc parse `<path>` [--format json|bqc|treeviz] [--repair] [--compact]  - Print the parsed topic
//!   bqc check `<path>` [--repair]                                          - Validate a file
//!   bqc stats `<path>` [--json]                                            - Section/question/blank totals
//!   bqc answer `<path>` `<blank-id>` `<input>`                             - Check an answer
//!
//! Every command accepts `--config <file>` to layer a TOML file over the built-in defaults.
//! Logging goes to stderr and is controlled with `RUST_LOG` (e.g. `RUST_LOG=bqc_parser=debug`).

use bqc_config::{BqcConfig, BqcConfigError, Loader};
use bqc_parser::bqc::answers::{check_blank, UnknownBlank};
use bqc_parser::bqc::formats::{FormatError, FormatRegistry};
use bqc_parser::bqc::loader::{DocumentLoader, LoaderError};
use bqc_parser::bqc::parsing::ParsedDocument;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fmt;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Errors reported on stderr before exiting with status 1
#[derive(Debug)]
enum CliError {
    Config(BqcConfigError),
    Load(LoaderError),
    Format(FormatError),
    Answer(UnknownBlank),
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(err) => write!(f, "Configuration error: {}", err),
            CliError::Load(err) => write!(f, "{}", err),
            CliError::Format(err) => write!(f, "{}", err),
            CliError::Answer(err) => write!(f, "{}", err),
            CliError::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl From<BqcConfigError> for CliError {
    fn from(err: BqcConfigError) -> Self {
        CliError::Config(err)
    }
}

impl From<LoaderError> for CliError {
    fn from(err: LoaderError) -> Self {
        CliError::Load(err)
    }
}

impl From<FormatError> for CliError {
    fn from(err: FormatError) -> Self {
        CliError::Format(err)
    }
}

impl From<UnknownBlank> for CliError {
    fn from(err: UnknownBlank) -> Self {
        CliError::Answer(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err)
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the bqc file")
        .required(true)
        .index(1)
}

fn repair_arg() -> Arg {
    Arg::new("repair")
        .long("repair")
        .help("Rebuild missing or broken frontmatter before parsing")
        .action(ArgAction::SetTrue)
}

fn build_cli() -> Command {
    Command::new("bqc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and checking BQC quiz files")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults")
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a file and print the topic")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["json", "bqc", "treeviz"])
                        .default_value("json"),
                )
                .arg(repair_arg())
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Single-line JSON output")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a file, exiting non-zero on parse errors")
                .arg(path_arg())
                .arg(repair_arg()),
        )
        .subcommand(
            Command::new("stats")
                .about("Print section, question and blank totals")
                .arg(path_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the totals as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("answer")
                .about("Check an answer against a blank")
                .arg(path_arg())
                .arg(
                    Arg::new("blank-id")
                        .help("Blank id, e.g. q1-blank-0")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("input")
                        .help("The answer to check")
                        .required(true)
                        .index(3),
                ),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some(("parse", sub)) => handle_parse_command(sub),
        Some(("check", sub)) => handle_check_command(sub),
        Some(("stats", sub)) => handle_stats_command(sub),
        Some(("answer", sub)) => handle_answer_command(sub),
        _ => unreachable!("clap requires a subcommand"),
    }
}

/// Defaults, then `--config`, then flag overrides
fn load_config(matches: &ArgMatches) -> Result<BqcConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.try_get_one::<bool>("compact").ok().flatten() == Some(&true) {
        loader = loader.set_override("output.pretty", false)?;
    }
    Ok(loader.build()?)
}

fn load_document(matches: &ArgMatches, config: &BqcConfig) -> Result<ParsedDocument, CliError> {
    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");

    let mut loader = DocumentLoader::from_path(path)?.with_options(config.parse_options());
    if matches.try_get_one::<bool>("repair").ok().flatten() == Some(&true) {
        let file_name = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        loader = loader.repaired(&file_name, &config.repair_options());
    }

    Ok(loader.parse_document()?)
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let doc = load_document(matches, &config)?;
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default value");

    let registry = FormatRegistry::with_json_style(config.output.pretty);
    let output = registry.serialize(&doc, format)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let doc = load_document(matches, &config)?;
    println!("ok: {} ({})", doc.topic.slug, doc.topic.stats());
    Ok(())
}

/// Handle the stats command
fn handle_stats_command(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let doc = load_document(matches, &config)?;
    let stats = doc.topic.stats();

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("sections:  {}", stats.total_sections);
        println!("questions: {}", stats.total_questions);
        println!("blanks:    {}", stats.total_blanks);
    }
    Ok(())
}

/// Handle the answer command
fn handle_answer_command(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let doc = load_document(matches, &config)?;
    let blank_id = matches
        .get_one::<String>("blank-id")
        .expect("blank-id is a required argument");
    let input = matches
        .get_one::<String>("input")
        .expect("input is a required argument");

    let correct = check_blank(&doc.topic, blank_id, input)?;
    println!("{}", if correct { "correct" } else { "incorrect" });
    Ok(())
}
