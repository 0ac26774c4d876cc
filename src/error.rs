use crate::midi::MidiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TunerError {
    /// A `--client` or `--port` value is not a valid shell pattern
    #[error("invalid --{flag} pattern '{pattern}': {source}")]
    InvalidPattern {
        flag: &'static str,
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// `--tuning` needs one offset per pitch class
    #[error("--tuning takes exactly 12 values, got {0}")]
    TuningCount(usize),

    #[error(transparent)]
    Midi(#[from] MidiError),

    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
}

impl TunerError {
    /// Process exit status for this error: 2 for bad arguments, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            TunerError::InvalidPattern { .. } | TunerError::TuningCount(_) => 2,
            TunerError::Midi(_) | TunerError::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, TunerError>;
