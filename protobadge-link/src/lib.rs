//! # protobadge-link
//!
//! Decoder for the prototype badge's optical provisioning link.
//!
//! Instead of a cable or an app, the badge learns its owner's name, handle
//! and pronouns from a blinking light source (the "web flasher"): the user
//! holds the badge's photodiode against the screen while a button is held,
//! and the firmware samples the light intensity for the duration of the
//! gesture. This crate turns that raw capture back into text.
//!
//! ## Wire convention
//!
//! - Each bit is a sustained light level held for `bit_hold_ms` (120 ms by
//!   default), optionally followed by a `bit_gap_ms` (50 ms) return to a
//!   neutral level.
//! - Bits are packed MSB first into bytes: `[payload][1 CRC-8 byte]` with
//!   polynomial 0x07 and init 0x00.
//! - The payload is UTF-8 text: `name NUL handle NUL pronouns`.
//!
//! ## Pipeline
//!
//! Decoding runs after the acquisition window closes, in five strictly
//! forward stages: sample-count precondition, level classification
//! ([`levels`]), bit synchronization ([`sync`]), byte packing and checksum
//! verification ([`frame`]), payload parsing ([`config`]). Any violated
//! precondition aborts the whole attempt with a [`DecodeError`]; there is
//! no partial recovery, the user simply repeats the gesture.
//!
//! The whole decoder is a pure function of the sample sequence and a
//! [`LinkParams`], with no state carried between acquisitions:
//!
//! ```
//! use protobadge_link::{decode, DecodeError, LinkParams};
//!
//! let too_short = [0_u16; 10];
//! assert_eq!(
//!     decode(&too_short, &LinkParams::default()),
//!     Err(DecodeError::InsufficientSamples { got: 10 }),
//! );
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod error;
pub mod frame;
pub mod levels;
pub mod params;
pub mod sync;

pub use config::BadgeConfig;
pub use error::DecodeError;
pub use frame::{
    Frame,
    checksum,
};
pub use levels::Level;
pub use params::LinkParams;

/// Decode one complete acquisition into a [`BadgeConfig`].
///
/// `samples` is the full ordered capture from the photodiode, one reading
/// per `params.sample_interval_ms` for as long as the hold trigger was
/// asserted.
pub fn decode(samples: &[u16], params: &LinkParams) -> Result<BadgeConfig, DecodeError> {
    if samples.len() < params.min_samples {
        return Err(DecodeError::InsufficientSamples { got: samples.len() });
    }

    let levels = levels::classify(samples, params)?;
    let bits = sync::recover_bits(&levels, params)?;
    let frame = Frame::pack(&bits)?;
    let payload = frame.validate()?;
    BadgeConfig::from_payload(payload)
}
