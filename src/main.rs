use clap::Parser;
use simdump::{DumpError, DumpReport, ReaderConfig, Reduction, read_dump_with_config};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Collects attribute time series from a simulation interval dump and prints
/// them as JSON.
#[derive(Parser, Debug)]
#[command(name = "simdump", version, about)]
struct Cli {
    /// Path to the interval dump (edge or lane data XML).
    dump: PathBuf,

    /// Attribute to collect. Repeat for several attributes.
    #[arg(short = 'a', long = "attribute", value_name = "NAME")]
    attributes: Vec<String>,

    /// Collapse every collected series into one snapshot (`sum` or `average`).
    #[arg(short, long, value_name = "HOW")]
    join: Option<Reduction>,

    /// Reader configuration as JSON. `--attribute` values are added to it.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), DumpError> {
    let mut config = match &cli.config {
        Some(path) => {
            log::debug!("Loading reader configuration from {}", path.display());
            serde_json::from_str::<ReaderConfig>(&fs::read_to_string(path)?)?
        }
        None => ReaderConfig::default(),
    };
    config.attributes.extend(cli.attributes);

    if config.attributes.is_empty() {
        return Err(DumpError::Config(
            "no attributes requested; pass --attribute or a config file".to_string(),
        ));
    }

    let mut reader = read_dump_with_config(&cli.dump, config)?;

    if let Some(how) = cli.join {
        let names: Vec<String> = reader.attributes().map(str::to_string).collect();
        reader.join(&names, how)?;
    }

    let report = DumpReport::from_reader(&reader);
    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);
    Ok(())
}
