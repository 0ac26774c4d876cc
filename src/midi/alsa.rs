//! ALSA sequencer backend

use crate::midi::engine::{
    ClientEntry, MidiError, MidiSubsystem, PortAddr, PortCaps, PortEntry, Result,
};
use alsa::seq::{Addr, ClientIter, Event, EventType, PortCap, PortIter, PortSubscribe, PortType};
use log::{debug, trace};
use std::ffi::CString;

pub struct AlsaSubsystem {
    seq: alsa::Seq,
    client_id: i32,
}

fn c_name(name: &str) -> Result<CString> {
    CString::new(name).map_err(|e| MidiError::Port(format!("invalid name '{}': {}", name, e)))
}

impl AlsaSubsystem {
    /// Opens a sequencer session registered under `client_name`.
    pub fn open(client_name: &str) -> Result<Self> {
        let seq = alsa::Seq::open(None, None, false)
            .map_err(|e| MidiError::Session(format!("cannot open sequencer: {}", e)))?;

        let name = CString::new(client_name)
            .map_err(|e| MidiError::Session(format!("invalid client name: {}", e)))?;
        seq.set_client_name(&name)
            .map_err(|e| MidiError::Session(format!("cannot set client name: {}", e)))?;

        let client_id = seq
            .client_id()
            .map_err(|e| MidiError::Session(format!("cannot query client id: {}", e)))?;

        debug!(
            "Opened ALSA sequencer session '{}' as client {}",
            client_name, client_id
        );
        Ok(AlsaSubsystem { seq, client_id })
    }

    fn ports_of(&self, client: i32) -> Vec<PortEntry> {
        PortIter::new(&self.seq, client)
            .filter_map(|port_info| {
                let name = match port_info.get_name() {
                    Ok(name) => name.to_string(),
                    Err(e) => {
                        trace!(
                            "Skipping unnamed port {}:{}: {}",
                            client,
                            port_info.get_port(),
                            e
                        );
                        return None;
                    }
                };
                Some(PortEntry {
                    name,
                    id: port_info.get_port(),
                    caps: PortCaps::from_bits_truncate(port_info.get_capability().bits()),
                })
            })
            .collect()
    }
}

impl MidiSubsystem for AlsaSubsystem {
    fn client_id(&self) -> i32 {
        self.client_id
    }

    fn create_output_port(&mut self, name: &str) -> Result<i32> {
        self.seq
            .create_simple_port(
                &c_name(name)?,
                PortCap::READ | PortCap::SUBS_READ,
                PortType::MIDI_GENERIC | PortType::APPLICATION,
            )
            .map_err(|e| MidiError::Port(format!("cannot create port '{}': {}", name, e)))
    }

    fn enumerate(&self) -> Result<Vec<ClientEntry>> {
        let clients = ClientIter::new(&self.seq)
            .map(|client_info| {
                let id = client_info.get_client();
                ClientEntry {
                    name: client_info.get_name().unwrap_or_default().to_string(),
                    id,
                    ports: self.ports_of(id),
                }
            })
            .collect::<Vec<_>>();

        debug!("Enumerated {} sequencer clients", clients.len());
        Ok(clients)
    }

    fn connect(&mut self, source: PortAddr, dest: PortAddr) -> Result<()> {
        let subscription = PortSubscribe::empty()
            .map_err(|e| MidiError::Connection(format!("cannot allocate subscription: {}", e)))?;
        subscription.set_sender(Addr {
            client: source.client,
            port: source.port,
        });
        subscription.set_dest(Addr {
            client: dest.client,
            port: dest.port,
        });

        self.seq.subscribe_port(&subscription).map_err(|e| {
            MidiError::Connection(format!(
                "cannot connect {}:{} to {}:{}: {}",
                source.client, source.port, dest.client, dest.port, e
            ))
        })
    }

    fn send_sysex(&mut self, source: PortAddr, bytes: &[u8]) -> Result<()> {
        let mut event = Event::new_ext(EventType::Sysex, bytes);
        event.set_source(source.port);
        event.set_subs();
        event.set_direct();

        self.seq
            .event_output(&mut event)
            .map_err(|e| MidiError::Send(format!("cannot queue sysex event: {}", e)))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.seq
            .drain_output()
            .map_err(|e| MidiError::Send(format!("cannot drain output: {}", e)))?;
        Ok(())
    }
}
