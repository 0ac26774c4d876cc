use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Simple tool for tuning synths that support MTS octave tuning messages (e.g. fluidsynth)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// MIDI client name (wildcards allowed)
    #[arg(long, num_args = 1.., value_name = "NAME")]
    pub client: Vec<String>,

    /// MIDI port name (wildcards allowed) [default: *]
    #[arg(long, num_args = 1.., value_name = "NAME")]
    pub port: Vec<String>,

    /// Tuning for each note starting with C, 12 floats between -1 and 1 (semitone)
    #[arg(
        long,
        num_args = 12,
        value_name = "SEMITONES",
        allow_negative_numbers = true
    )]
    pub tuning: Option<Vec<f64>>,

    /// List clients and ports and exit
    #[arg(long)]
    pub list: bool,

    /// Log more detail (repeat for trace output)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Client pattern, words joined with spaces.
    pub fn client_pattern(&self) -> String {
        self.client.join(" ")
    }

    /// Port pattern, words joined with spaces; `*` when none were given.
    pub fn port_pattern(&self) -> String {
        if self.port.is_empty() {
            "*".to_string()
        } else {
            self.port.join(" ")
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
