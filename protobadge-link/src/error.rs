//! Decode failures.
//!
//! Every stage fails closed: the first violated precondition aborts the
//! whole attempt and surfaces here. All variants are recoverable by asking
//! the user to redo the physical gesture.

use core::fmt;

/// Why a decode attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// The hold trigger released before enough samples were collected.
    InsufficientSamples { got: usize },
    /// Not enough spread between the darkest and brightest samples.
    WeakSignal { contrast: u16 },
    /// The synchronizer recovered fewer than one byte's worth of bits.
    InsufficientBits { got: usize },
    /// Packed frame is too short to hold a payload and a checksum.
    FrameTooShort { len: usize },
    /// Trailing CRC-8 byte does not match the recomputed value.
    ChecksumMismatch { received: u8, computed: u8 },
    /// Validated payload is not UTF-8 text.
    InvalidEncoding,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientSamples { got } => {
                write!(f, "not enough samples collected: {got}")
            }
            Self::WeakSignal { contrast } => {
                write!(f, "signal too weak: contrast {contrast}")
            }
            Self::InsufficientBits { got } => {
                write!(f, "not enough bits decoded: {got}")
            }
            Self::FrameTooShort { len } => {
                write!(f, "frame too short: {len} bytes")
            }
            Self::ChecksumMismatch { received, computed } => {
                write!(
                    f,
                    "crc mismatch: received 0x{received:02x}, calculated 0x{computed:02x}"
                )
            }
            Self::InvalidEncoding => write!(f, "payload is not valid UTF-8"),
        }
    }
}

impl core::error::Error for DecodeError {}
