//! The run pipeline: encode, enumerate, then list or match and send.

use crate::config::TunerConfig;
use crate::error::Result;
use crate::matcher::{eligible_listing, find_targets, write_listing, PortDescriptor};
use crate::midi::{MidiSubsystem, PortAddr};
use crate::mts::SysexMessage;
use crate::sender::{send_tuning, SendOutcome};
use log::{debug, info};
use std::io::Write;

/// How a run finished. Every variant is a normal exit.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Listed,
    Sent { connected: Vec<PortDescriptor> },
    NoMatch,
}

pub fn run<S, W>(config: &TunerConfig, subsystem: &mut S, out: &mut W) -> Result<Outcome>
where
    S: MidiSubsystem + ?Sized,
    W: Write,
{
    let message = SysexMessage::octave_tuning(&config.tuning);
    debug!("Encoded tuning message: {}", message);

    let output = PortAddr {
        client: subsystem.client_id(),
        port: subsystem.create_output_port(&config.output_port_name)?,
    };
    debug!("Output port {}:{}", output.client, output.port);

    let clients = subsystem.enumerate()?;

    if config.list_only {
        write_listing(out, &eligible_listing(&clients))?;
        return Ok(Outcome::Listed);
    }

    let targets = find_targets(&clients, &config.criteria);
    info!(
        "{} port(s) match client '{}' / port '{}'",
        targets.len(),
        config.criteria.client,
        config.criteria.port
    );

    match send_tuning(subsystem, output, &message, &targets, out)? {
        SendOutcome::Sent { connected } => Ok(Outcome::Sent { connected }),
        SendOutcome::NoMatch => {
            write_listing(out, &eligible_listing(&clients))?;
            Ok(Outcome::NoMatch)
        }
    }
}
