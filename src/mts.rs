//! MIDI Tuning Standard octave tuning messages.
//!
//! The only message built here is the real-time "scale/octave tuning, 2 byte
//! format" sysex: one 14-bit offset per pitch class, C first.

use std::fmt;

const SYSEX_START: u8 = 0xF0;
const SYSEX_END: u8 = 0xF7;
const SYSEX_RT: u8 = 0x7F;
const DEVICE_ID_BROADCAST: u8 = 0x7F;
const MIDI_TUNING_STANDARD: u8 = 0x08;
const SCALE_OCTAVE_TUNING_2_BYTE_FORMAT: u8 = 0x09;
const ALL_CHANNELS: u8 = 0x7F;

const HEADER: [u8; 8] = [
    SYSEX_START,
    SYSEX_RT,
    DEVICE_ID_BROADCAST,
    MIDI_TUNING_STANDARD,
    SCALE_OCTAVE_TUNING_2_BYTE_FORMAT,
    ALL_CHANNELS, // channel bitmap, bits 14-15
    ALL_CHANNELS, // channels 8-14
    ALL_CHANNELS, // channels 1-7
];

const U7_MASK: i64 = 0x7F;
const U14_MAX: f64 = 16383.0;

pub const NOTES_PER_OCTAVE: usize = 12;
pub const MESSAGE_LEN: usize = HEADER.len() + NOTES_PER_OCTAVE * 2 + 1;

/// Per pitch class offsets in semitones, nominally within `[-1.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TuningRequest([f64; NOTES_PER_OCTAVE]);

impl TuningRequest {
    pub fn new(offsets: [f64; NOTES_PER_OCTAVE]) -> Self {
        Self(offsets)
    }

    pub fn offsets(&self) -> &[f64; NOTES_PER_OCTAVE] {
        &self.0
    }
}

impl TryFrom<&[f64]> for TuningRequest {
    type Error = usize;

    /// Fails with the number of values given when it is not twelve.
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let offsets: [f64; NOTES_PER_OCTAVE] = values.try_into().map_err(|_| values.len())?;
        Ok(Self(offsets))
    }
}

/// Maps a semitone offset onto the 14-bit tuning range.
///
/// Values outside `[-1.0, 1.0]` are not clamped and may fall outside `0..=16383`.
pub fn offset_to_u14(offset: f64) -> i64 {
    ((offset + 1.0) / 2.0 * U14_MAX).round() as i64
}

/// A complete octave tuning sysex message. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysexMessage([u8; MESSAGE_LEN]);

impl SysexMessage {
    pub fn octave_tuning(request: &TuningRequest) -> Self {
        let mut bytes = [0u8; MESSAGE_LEN];
        bytes[..HEADER.len()].copy_from_slice(&HEADER);

        for (note, offset) in request.offsets().iter().enumerate() {
            let value = offset_to_u14(*offset);
            let at = HEADER.len() + note * 2;
            bytes[at] = ((value >> 7) & U7_MASK) as u8;
            bytes[at + 1] = (value & U7_MASK) as u8;
        }

        bytes[MESSAGE_LEN - 1] = SYSEX_END;
        SysexMessage(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The 24 tuning bytes between header and terminator.
    pub fn data(&self) -> &[u8] {
        &self.0[HEADER.len()..MESSAGE_LEN - 1]
    }

    /// Reassembles the 14-bit word of each note.
    pub fn note_values(&self) -> [u16; NOTES_PER_OCTAVE] {
        let mut values = [0u16; NOTES_PER_OCTAVE];
        for (value, pair) in values.iter_mut().zip(self.data().chunks_exact(2)) {
            *value = (u16::from(pair[0]) << 7) | u16::from(pair[1]);
        }
        values
    }
}

impl fmt::Display for SysexMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl From<&TuningRequest> for SysexMessage {
    fn from(request: &TuningRequest) -> Self {
        SysexMessage::octave_tuning(request)
    }
}
