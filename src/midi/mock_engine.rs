use crate::midi::{ClientEntry, MidiError, MidiSubsystem, PortAddr, PortCaps, PortEntry, Result};
use std::collections::HashSet;

/// In-memory sequencer graph.
///
/// Records every subscription and every sysex payload so callers can assert on
/// what would have reached the wire.
#[derive(Debug, Default)]
pub struct MockSubsystem {
    client_id: i32,
    clients: Vec<ClientEntry>,
    next_port: i32,
    rejected: HashSet<PortAddr>,
    fail_send: bool,
    pub connections: Vec<(PortAddr, PortAddr)>,
    pub sent: Vec<(PortAddr, Vec<u8>)>,
    pub flushes: usize,
}

impl MockSubsystem {
    pub fn new(client_id: i32) -> Self {
        MockSubsystem {
            client_id,
            ..Default::default()
        }
    }

    /// Adds a client with the given `(port name, caps)` pairs, numbering ports from 0.
    pub fn with_client(mut self, name: &str, id: i32, ports: &[(&str, PortCaps)]) -> Self {
        self.clients.push(ClientEntry {
            name: name.to_string(),
            id,
            ports: ports
                .iter()
                .enumerate()
                .map(|(port_id, (port_name, caps))| PortEntry {
                    name: port_name.to_string(),
                    id: port_id as i32,
                    caps: *caps,
                })
                .collect(),
        });
        self
    }

    /// Makes subscriptions to `dest` fail, as for a port that vanished after enumeration.
    pub fn reject(mut self, dest: PortAddr) -> Self {
        self.rejected.insert(dest);
        self
    }

    pub fn failing_sends(mut self) -> Self {
        self.fail_send = true;
        self
    }
}

impl MidiSubsystem for MockSubsystem {
    fn client_id(&self) -> i32 {
        self.client_id
    }

    fn create_output_port(&mut self, _name: &str) -> Result<i32> {
        let port = self.next_port;
        self.next_port += 1;
        Ok(port)
    }

    fn enumerate(&self) -> Result<Vec<ClientEntry>> {
        Ok(self.clients.clone())
    }

    fn connect(&mut self, source: PortAddr, dest: PortAddr) -> Result<()> {
        if self.rejected.contains(&dest) {
            return Err(MidiError::Connection(format!(
                "port {}:{} rejected the subscription",
                dest.client, dest.port
            )));
        }
        self.connections.push((source, dest));
        Ok(())
    }

    fn send_sysex(&mut self, source: PortAddr, bytes: &[u8]) -> Result<()> {
        if self.fail_send {
            return Err(MidiError::Send("mock output is closed".to_string()));
        }
        self.sent.push((source, bytes.to_vec()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
