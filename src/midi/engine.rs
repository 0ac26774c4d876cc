use bitflags::bitflags;
use thiserror::Error;

/// Errors raised by a MIDI subsystem backend
#[derive(Debug, Error)]
pub enum MidiError {
    /// Opening or configuring the sequencer session failed
    #[error("MIDI session error: {0}")]
    Session(String),
    /// Creating or querying a port failed
    #[error("MIDI port error: {0}")]
    Port(String),
    /// Subscribing to a destination port failed
    #[error("MIDI connection error: {0}")]
    Connection(String),
    /// Emitting or draining an event failed
    #[error("MIDI send error: {0}")]
    Send(String),
}

/// Result type for MIDI operations
pub type Result<T> = std::result::Result<T, MidiError>;

bitflags! {
    /// Port capabilities, bit-compatible with the ALSA sequencer's `SND_SEQ_PORT_CAP_*`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PortCaps: u32 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
        const SYNC_READ = 1 << 2;
        const SYNC_WRITE = 1 << 3;
        const DUPLEX = 1 << 4;
        const SUBS_READ = 1 << 5;
        const SUBS_WRITE = 1 << 6;
        const NO_EXPORT = 1 << 7;
    }
}

impl PortCaps {
    pub fn accepts_write(self) -> bool {
        self.contains(PortCaps::WRITE)
    }

    pub fn allows_subscription(self) -> bool {
        self.contains(PortCaps::SUBS_WRITE)
    }

    pub fn is_exported(self) -> bool {
        !self.contains(PortCaps::NO_EXPORT)
    }

    /// True when another client may subscribe to this port and write to it.
    pub fn is_eligible_destination(self) -> bool {
        self.accepts_write() && self.allows_subscription() && self.is_exported()
    }
}

/// Address of a port on the sequencer graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortAddr {
    pub client: i32,
    pub port: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortEntry {
    pub name: String,
    pub id: i32,
    pub caps: PortCaps,
}

/// A client and its ports, as reported by one enumeration pass
#[derive(Debug, Clone, PartialEq)]
pub struct ClientEntry {
    pub name: String,
    pub id: i32,
    pub ports: Vec<PortEntry>,
}

impl ClientEntry {
    pub fn port_addr(&self, port: &PortEntry) -> PortAddr {
        PortAddr {
            client: self.id,
            port: port.id,
        }
    }
}

/// The system-wide MIDI routing service a tuning message is delivered through.
///
/// A backend value is one open session; dropping it releases the session.
pub trait MidiSubsystem {
    /// Client id of this session
    fn client_id(&self) -> i32;

    /// Creates a port other clients can subscribe to for reading, returning its port id
    fn create_output_port(&mut self, name: &str) -> Result<i32>;

    /// Lists every client and its ports in the subsystem's native order
    fn enumerate(&self) -> Result<Vec<ClientEntry>>;

    /// Subscribes `dest` to events emitted from `source`
    fn connect(&mut self, source: PortAddr, dest: PortAddr) -> Result<()>;

    /// Emits one system exclusive event to all subscribers of `source`
    fn send_sysex(&mut self, source: PortAddr, bytes: &[u8]) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}
