use clap::Parser;
use log::LevelFilter;
use std::io;
use synthtuner::{logging, midi::DefaultSubsystem, run, Args, Outcome, TunerConfig, TunerError};

fn main() {
    let args = parse_command_line_arguments();
    initialize_logging(args.log_level());

    let config = match TunerConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    match run_with_sequencer(&config) {
        Ok(outcome) => log::info!("Finished: {:?}", outcome),
        Err(e) => exit_with(e),
    }
}

fn parse_command_line_arguments() -> Args {
    Args::parse()
}

fn initialize_logging(level: LevelFilter) {
    if let Err(e) = logging::init_logger(level) {
        eprintln!("Warning: logging disabled: {}", e);
        return;
    }
    log::info!("synthtuner {} starting", env!("CARGO_PKG_VERSION"));
}

fn run_with_sequencer(config: &TunerConfig) -> Result<Outcome, TunerError> {
    let mut sequencer = DefaultSubsystem::open(&config.session_name)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(config, &mut sequencer, &mut out)
}

fn exit_with(error: TunerError) -> ! {
    let error_msg = format!("Error: {}", error);
    log::error!("{}", error_msg);
    eprintln!("{}", error_msg);
    std::process::exit(error.exit_code());
}
