//! Command-line interface for proto-examples
//!
//! # Usage Examples
//!
//! ```bash
//! # List every service and method
//! proto-examples --proto protos/shop.proto --list
//!
//! # Generate examples for one method
//! proto-examples --proto protos/shop.proto \
//!   --overrides overrides.yaml \
//!   --method OrderService/GetOrder
//!
//! # Same method by its listing number, compact output
//! proto-examples --proto protos/shop.proto --method 1/1 --uglify
//! ```
//!
//! ## Override File
//! ```yaml
//! overrides:
//!   - service: "*"
//!     method: "*"
//!     fields:
//!       "^id$": uuid
//!       "email": email
//!   - service: OrderService
//!     method: GetOrder
//!     fields:
//!       "^count$": "12"
//! ```

use anyhow::Context;
use clap::builder::FalseyValueParser;
use clap::Parser;
use example_core::OverrideConfig;
use example_generator::{ExampleSynthesizer, DEFAULT_MAX_DEPTH, DEFAULT_MAX_RECURSION};
use proto_examples::{JsonStyle, MethodIndex, Report};
use proto_schema::ProtoParser;
use std::io::BufRead;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "proto-examples")]
#[command(about = "Generate example gRPC request/response payloads from .proto files")]
#[command(long_about = None)]
struct Cli {
    /// Path to a protobuf schema definition file (repeatable)
    #[arg(long = "proto", value_name = "PATH", required = true)]
    protos: Vec<PathBuf>,

    /// Additional import search directory (repeatable)
    #[arg(long = "include", value_name = "DIR")]
    includes: Vec<PathBuf>,

    /// Field override rules
    #[arg(
        long,
        value_name = "PATH",
        default_value = "overrides.yaml",
        env = "PROTO_EXAMPLES_OVERRIDES"
    )]
    overrides: PathBuf,

    /// Method to generate examples for (Service/Method or N/M); prompts when absent
    #[arg(long)]
    method: Option<String>,

    /// Show detailed field information
    #[arg(long, env = "DEBUG", value_parser = FalseyValueParser::new())]
    debug: bool,

    /// Compact JSON output everywhere
    #[arg(long, env = "UGLIFY", value_parser = FalseyValueParser::new())]
    uglify: bool,

    /// Maximum message nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// How many times one message type may repeat along a nesting path
    #[arg(long, default_value_t = DEFAULT_MAX_RECURSION)]
    max_recursion: usize,

    /// Seed for random generators (OS entropy when absent)
    #[arg(long)]
    seed: Option<u64>,

    /// List services and methods, then exit
    #[arg(long)]
    list: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let overrides = OverrideConfig::from_file(&cli.overrides)
        .with_context(|| format!("Failed to load overrides from {:?}", cli.overrides))?;
    tracing::debug!(rules = overrides.rules().len(), "Loaded override rules");

    let parser = cli
        .includes
        .iter()
        .fold(ProtoParser::new(), |parser, dir| parser.include(dir));
    let schema = parser
        .parse_files(cli.protos.as_slice())
        .with_context(|| format!("Failed to parse .proto files {:?}", cli.protos))?;

    let index = MethodIndex::new(&schema);
    if cli.list {
        print!("{}", index.listing());
        return Ok(());
    }
    if index.is_empty() {
        anyhow::bail!("No services found in {:?}", cli.protos);
    }

    let input = match cli.method {
        Some(method) => method,
        None => prompt_for_method(&index)?,
    };
    let selection = index.resolve(&input)?;
    tracing::info!(
        service = %selection.service,
        method = %selection.method,
        "Generating examples"
    );

    let mut synthesizer = ExampleSynthesizer::new(&schema, &overrides)
        .with_max_depth(cli.max_depth)
        .with_max_recursion(cli.max_recursion);
    if let Some(seed) = cli.seed {
        synthesizer = synthesizer.with_seed(seed);
    }

    let examples = match synthesizer.synthesize_method(&selection.service, &selection.method) {
        Ok(examples) => examples,
        Err(e) if e.is_not_found() => {
            return Err(anyhow::Error::new(e).context("FAIL: Service or Method does not exist."))
        }
        Err(e) => return Err(anyhow::Error::new(e).context("Failed to generate examples")),
    };
    let service = schema
        .get_service(&selection.service)
        .context("FAIL: Service or Method does not exist.")?;

    let report = Report::assemble(
        service,
        &selection.method,
        &examples,
        JsonStyle::from_uglify(cli.uglify),
    )
    .context("Failed to render examples")?;
    print!("{report}");

    Ok(())
}

/// Print the method listing and read one selection line from stdin.
fn prompt_for_method(index: &MethodIndex) -> anyhow::Result<String> {
    print!("{}", index.listing());
    println!("Select a method to generate examples for (e.g., 1/1 or Service/Method):");

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read method selection from stdin")?;
    Ok(line.trim().to_string())
}
