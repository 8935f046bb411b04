//! nifv command-line interface
//!
//! Validates national identifiers from the command line.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use nifv::{
    validate_aadhaar, validate_cnpj, validate_cpf, validate_detailed,
    validate_national_insurance_number, validate_npwp, validate_pan, validate_pan_lite,
    validate_pan_with_name, validate_pan_with_name_lite, validate_ssn, IdentifierKind,
    ValidationResult,
};

#[derive(Parser)]
#[command(name = "nifv", version, about = "National identifier format validation")]
struct Cli {
    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Raise log verbosity to debug; RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate one or more identifiers of the same kind
    Check {
        /// Identifier kind (pan, aadhaar, ssn, cpf, cnpj, npwp, ni)
        kind: IdentifierKind,
        /// Values to validate
        #[arg(required = true)]
        values: Vec<String>,
        /// Print status code and message for failures
        #[arg(long)]
        detailed: bool,
    },
    /// Validate a PAN against the holder's registered name
    PanName {
        pan: String,
        name: String,
    },
    /// List supported identifier kinds
    Kinds,
    /// Run a set of sample validations
    Demo,
}

#[derive(Serialize)]
struct Report<'a> {
    kind: IdentifierKind,
    input: &'a str,
    #[serde(flatten)]
    result: ValidationResult,
}

#[derive(Serialize)]
struct KindInfo {
    kind: IdentifierKind,
    name: &'static str,
    display_name: &'static str,
    country: &'static str,
}

fn init_logging(verbose: u8) {
    let default = if verbose > 0 { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(json: bool, detailed: bool, report: &Report) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else if report.result.is_valid {
        println!("{}", report.result.message);
    } else if detailed {
        println!("{}: {}", report.input, report.result);
    } else {
        println!("{}: invalid {}", report.input, report.kind.display_name());
    }
    Ok(())
}

fn run_demo() {
    println!("{:?}", validate_pan("ABCP M0 00    1N"));
    println!("{:?}", validate_pan_lite("ABCP M0 00    1N"));
    println!("{:?}", validate_pan_with_name("AHHCM8632N", "Mevopam Dittra"));
    println!("{:?}", validate_pan_with_name_lite("AHHCM8632N", "Mevopam Dittra"));
    println!("{:?}", validate_national_insurance_number("AA 11 22 33 D"));
    println!("{:?}", validate_ssn("625-47-3316"));
    println!("{:?}", validate_aadhaar("8284 0242-15  50"));
    println!("{:?}", validate_npwp("013000666091000"));
    println!("{:?}", validate_cpf("390  533  44705   "));
    println!("{:?}", validate_cnpj("16.   727.230/0001-97  "));
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut all_valid = true;
    match cli.command {
        Command::Check {
            kind,
            values,
            detailed,
        } => {
            for value in &values {
                let report = Report {
                    kind,
                    input: value,
                    result: validate_detailed(kind, value),
                };
                tracing::info!(%kind, valid = report.result.is_valid, "checked {}", value);
                all_valid &= report.result.is_valid;
                print_report(cli.json, detailed, &report)?;
            }
        }
        Command::PanName { pan, name } => {
            let report = Report {
                kind: IdentifierKind::Pan,
                input: &pan,
                result: validate_pan_with_name(&pan, &name),
            };
            all_valid = report.result.is_valid;
            print_report(cli.json, true, &report)?;
        }
        Command::Kinds => {
            let kinds: Vec<KindInfo> = IdentifierKind::all()
                .iter()
                .map(|&kind| KindInfo {
                    kind,
                    name: kind.name(),
                    display_name: kind.display_name(),
                    country: kind.country(),
                })
                .collect();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&kinds)?);
            } else {
                for info in kinds {
                    println!("{:<8} {:<4} {}", info.name, info.country, info.display_name);
                }
            }
        }
        Command::Demo => run_demo(),
    }

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
