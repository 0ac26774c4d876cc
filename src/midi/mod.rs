//! MIDI subsystem access for synthtuner
//!
//! This module provides:
//! - The [`MidiSubsystem`] trait, the seam to the system-wide sequencer graph
//! - Port capability flags and the client/port records an enumeration returns
//! - [`AlsaSubsystem`] for the real ALSA sequencer
//! - [`MockSubsystem`] for testing
//!
pub mod alsa;
mod engine;
pub mod mock_engine;

pub use engine::{
    ClientEntry, MidiError, MidiSubsystem, PortAddr, PortCaps, PortEntry, Result,
};

pub use self::alsa::AlsaSubsystem;
pub use mock_engine::MockSubsystem;

// Set default backend type
pub type DefaultSubsystem = AlsaSubsystem;
