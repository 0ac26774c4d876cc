pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod midi;
pub mod mts;
pub mod sender;

pub use app::{run, Outcome};
pub use cli::Args;
pub use config::TunerConfig;
pub use error::{Result, TunerError};
pub use matcher::{MatchCriteria, PortDescriptor};
pub use mts::{SysexMessage, TuningRequest};
