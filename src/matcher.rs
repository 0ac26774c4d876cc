//! Destination port selection and the port listing.

use crate::error::{Result, TunerError};
use crate::midi::{ClientEntry, PortAddr};
use glob::Pattern;
use log::{debug, trace};
use std::io::{self, Write};

/// Clients never targeted by a match, whatever the patterns say
pub const DENIED_CLIENTS: [&str; 2] = ["System", "jack_midi"];

#[derive(Debug, Clone)]
pub struct MatchCriteria {
    pub client: Pattern,
    pub port: Pattern,
    pub deny_list: Vec<String>,
}

impl MatchCriteria {
    pub fn new(client: Pattern, port: Pattern) -> Self {
        MatchCriteria {
            client,
            port,
            deny_list: DENIED_CLIENTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Compiles both shell-style patterns.
    pub fn from_globs(client: &str, port: &str) -> Result<Self> {
        Ok(Self::new(
            shell_pattern("client", client)?,
            shell_pattern("port", port)?,
        ))
    }

    fn is_denied(&self, client_name: &str) -> bool {
        self.deny_list.iter().any(|denied| denied == client_name)
    }
}

/// Compiles a shell wildcard for the `--<flag>` option.
///
/// Runs of `*` collapse to one so `glob` never reads them as a recursive path wildcard.
fn shell_pattern(flag: &'static str, pattern: &str) -> Result<Pattern> {
    let mut collapsed = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if c == '*' && collapsed.ends_with('*') {
            continue;
        }
        collapsed.push(c);
    }

    Pattern::new(&collapsed).map_err(|source| TunerError::InvalidPattern {
        flag,
        pattern: pattern.to_string(),
        source,
    })
}

/// A matched destination port
#[derive(Debug, Clone, PartialEq)]
pub struct PortDescriptor {
    pub client_name: String,
    pub port_name: String,
    pub addr: PortAddr,
}

/// Selects the ports to connect to, keeping enumeration order.
pub fn find_targets(clients: &[ClientEntry], criteria: &MatchCriteria) -> Vec<PortDescriptor> {
    let mut targets = Vec::new();

    for client in clients {
        if criteria.is_denied(&client.name) {
            trace!("Skipping denied client '{}'", client.name);
            continue;
        }
        if !criteria.client.matches(&client.name) {
            continue;
        }

        for port in &client.ports {
            if !port.caps.is_eligible_destination() || !criteria.port.matches(&port.name) {
                continue;
            }
            debug!("Matched {}:{} ({}:{})", client.name, port.name, client.id, port.id);
            targets.push(PortDescriptor {
                client_name: client.name.clone(),
                port_name: port.name.clone(),
                addr: client.port_addr(port),
            });
        }
    }

    targets
}

/// Eligible ports of one client, for display
#[derive(Debug, Clone, PartialEq)]
pub struct ClientListing {
    pub client_name: String,
    pub port_names: Vec<String>,
}

/// Groups every eligible destination port by client, ignoring patterns and deny-list.
pub fn eligible_listing(clients: &[ClientEntry]) -> Vec<ClientListing> {
    clients
        .iter()
        .filter_map(|client| {
            let port_names: Vec<String> = client
                .ports
                .iter()
                .filter(|port| port.caps.is_eligible_destination())
                .map(|port| port.name.clone())
                .collect();

            if port_names.is_empty() {
                None
            } else {
                Some(ClientListing {
                    client_name: client.name.clone(),
                    port_names,
                })
            }
        })
        .collect()
}

pub fn write_listing<W: Write>(out: &mut W, listing: &[ClientListing]) -> io::Result<()> {
    writeln!(out, "Available clients / ports:")?;
    writeln!(out)?;
    for client in listing {
        writeln!(out, "{}", client.client_name)?;
        for port in &client.port_names {
            writeln!(out, "  {}", port)?;
        }
    }
    writeln!(out)?;
    Ok(())
}
