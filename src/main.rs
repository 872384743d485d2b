use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tiibntick_dto::config::Config;
use tiibntick_dto::error::AppError;
use tiibntick_dto::logging;
use tiibntick_dto::record::{Record, RecordKind};

#[derive(Parser, Debug)]
#[command(name = "dto-check")]
#[command(about = "Decode, validate and re-emit a delivery platform record as JSON", long_about = None)]
struct Cli {
    /// Record kind: address, address-input, packet, dashboard-stats, location, location-update
    kind: RecordKind,

    /// JSON file to read; stdin when omitted or "-"
    file: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,

    /// Skip field constraints
    #[arg(long)]
    no_validate: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config);

    let result = run(&cli, &config, std::io::stdin());
    match &result {
        Ok(output) => println!("{output}"),
        Err(err) => eprintln!("{err}"),
    }
    exit_code(&result)
}

fn run<R: Read>(cli: &Cli, config: &Config, stdin: R) -> Result<String, AppError> {
    let input = read_input(cli.file.as_ref(), stdin)?;
    let record = Record::decode(cli.kind, &input)?;

    if !cli.no_validate {
        record.validate()?;
    }

    tracing::debug!(kind = %cli.kind, "record accepted");
    record.to_json(cli.pretty || config.pretty)
}

fn exit_code<T>(result: &Result<T, AppError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn read_input<R: Read>(file: Option<&PathBuf>, mut stdin: R) -> Result<String, AppError> {
    match file {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            stdin.read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
