use crate::error::Result;
use crate::matcher::PortDescriptor;
use crate::midi::{MidiSubsystem, PortAddr};
use crate::mts::SysexMessage;
use log::{debug, info, warn};
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// The message went out to these ports
    Sent { connected: Vec<PortDescriptor> },
    /// No destination accepted a connection; nothing was sent
    NoMatch,
}

/// Connects `output` to every target it can and sends `message` once.
///
/// A destination that refuses the subscription is skipped. Failing to send or
/// flush is returned as an error.
pub fn send_tuning<S, W>(
    subsystem: &mut S,
    output: PortAddr,
    message: &SysexMessage,
    targets: &[PortDescriptor],
    out: &mut W,
) -> Result<SendOutcome>
where
    S: MidiSubsystem + ?Sized,
    W: Write,
{
    let mut connected = Vec::with_capacity(targets.len());

    for target in targets {
        match subsystem.connect(output, target.addr) {
            Ok(()) => {
                info!("Connected to {}:{}", target.client_name, target.port_name);
                writeln!(out, "Connected to {}:{}", target.client_name, target.port_name)?;
                connected.push(target.clone());
            }
            Err(e) => warn!("Skipping {}:{}: {}", target.client_name, target.port_name, e),
        }
    }

    if connected.is_empty() {
        info!("No matching port to connect to");
        writeln!(out, "No matching port to connect to.")?;
        return Ok(SendOutcome::NoMatch);
    }

    debug!("Sending sysex: {}", message);
    subsystem.send_sysex(output, message.as_bytes())?;
    subsystem.flush()?;

    info!("Tuning sent to {} port(s)", connected.len());
    writeln!(out, "Tuning sent.")?;
    Ok(SendOutcome::Sent { connected })
}
