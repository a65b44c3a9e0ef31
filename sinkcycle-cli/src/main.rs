//! sinkcycle - rotate the default audio output sink
//!
//! Meant to run from a keyboard shortcut: each invocation switches the
//! default sink to the next one the server enumerates, wrapping at the
//! end of the list. Diagnostics go to a per-pid log file; the exit code
//! is the signal consumed by the invoking script.

use std::io::IsTerminal;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};

use sinkcycle_cli::config::Config;
use sinkcycle_cli::cycler::{CycleOutcome, SinkCycler};
use sinkcycle_cli::error::CycleError;
use sinkcycle_cli::logging;
use sinkcycle_pactl::PactlClient;

#[derive(Parser, Debug)]
#[command(name = "sinkcycle", version, about = "Cycle the default audio output sink")]
struct Cli {
    /// Print the current default sink identifier and exit without switching
    #[arg(short, long)]
    current: bool,

    /// List the enumerated sinks (default marked with *) and exit without switching
    #[arg(short, long, conflicts_with = "current")]
    list: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        error!("{err:#}");
        eprintln!("sinkcycle: {err:#}");

        let code = err
            .downcast_ref::<CycleError>()
            .map(CycleError::exit_code)
            .unwrap_or(1);
        process::exit(code);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let log_path =
        logging::init(&config.log_dir).context("Failed to set up diagnostic log")?;

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config.config_path.display(),
        log = %log_path.display(),
        "sinkcycle starting"
    );

    let cycler = SinkCycler::with_client(PactlClient::new().binary(&config.pactl_bin));

    if cli.current {
        if let Some(name) = cycler.current()? {
            println!("{name}");
        }
        return Ok(());
    }

    if cli.list {
        let current = cycler.current()?;
        for sink in cycler.sinks()? {
            let marker = if current.as_deref() == Some(sink.name.as_str()) {
                '*'
            } else {
                ' '
            };
            match &sink.serial {
                Some(serial) => println!(
                    "{marker} {}\t{}\t{}\t{}",
                    sink.index,
                    sink.name,
                    sink.display_name(),
                    serial
                ),
                None => println!(
                    "{marker} {}\t{}\t{}",
                    sink.index,
                    sink.name,
                    sink.display_name()
                ),
            }
        }
        return Ok(());
    }

    match cycler.cycle()? {
        CycleOutcome::Switched(sink) => {
            info!(sink = %sink.name, "switch complete");
            if std::io::stdout().is_terminal() {
                println!("Current output device: {}", sink.display_name());
            }
        }
        CycleOutcome::NoDefaultSink => {}
    }

    Ok(())
}
