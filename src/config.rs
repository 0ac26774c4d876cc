// config.rs

use crate::cli::Args;
use crate::error::{Result, TunerError};
use crate::matcher::MatchCriteria;
use crate::mts::TuningRequest;
use log::{debug, info};

pub const SESSION_NAME: &str = "synthtuner";
pub const OUTPUT_PORT_NAME: &str = "out";

/// Everything one run needs, resolved from the command line
#[derive(Debug, Clone)]
pub struct TunerConfig {
    pub criteria: MatchCriteria,
    pub tuning: TuningRequest,
    pub list_only: bool,
    pub session_name: String,
    pub output_port_name: String,
}

impl TunerConfig {
    // Absent means twelve zeros; any other count than twelve is an argument error
    fn resolve_tuning(values: Option<&[f64]>) -> Result<TuningRequest> {
        let tuning = match values {
            Some(values) => TuningRequest::try_from(values).map_err(TunerError::TuningCount)?,
            None => TuningRequest::default(),
        };

        debug!("Parsed tuning: {:?}", tuning.offsets());
        if let Some(offset) = tuning.offsets().iter().find(|o| !(-1.0..=1.0).contains(*o)) {
            info!(
                "Tuning offset {} is outside [-1, 1]; it is encoded unclamped",
                offset
            );
        }
        Ok(tuning)
    }

    pub fn from_args(args: &Args) -> Result<Self> {
        let client = args.client_pattern();
        debug!("Client pattern: {:?}", client);
        let port = args.port_pattern();
        debug!("Port pattern: {:?}", port);

        let criteria = MatchCriteria::from_globs(&client, &port)?;
        let tuning = Self::resolve_tuning(args.tuning.as_deref())?;

        if args.list {
            info!("List flag enabled - will list ports and exit");
        }

        Ok(TunerConfig {
            criteria,
            tuning,
            list_only: args.list,
            session_name: SESSION_NAME.to_string(),
            output_port_name: OUTPUT_PORT_NAME.to_string(),
        })
    }
}
