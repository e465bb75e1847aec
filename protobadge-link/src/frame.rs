//! Frame packing and integrity checking.
//!
//! Wire layout is `[payload bytes][1 CRC-8 byte]`. The checksum is
//! CRC-8/SMBUS (polynomial 0x07, init 0x00, MSB first, no reflection),
//! matching the web flasher bit for bit.

use alloc::vec::Vec;

use crc::{
    CRC_8_SMBUS,
    Crc,
};

use crate::error::DecodeError;

const CRC8: Crc<u8> = Crc::<u8>::new(&CRC_8_SMBUS);

/// CRC-8 over `data` with the link's parameters.
pub fn checksum(data: &[u8]) -> u8 {
    CRC8.checksum(data)
}

/// One acquisition's packed byte sequence, payload plus checksum trailer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    bytes: Vec<u8>,
}

impl Frame {
    /// Pack decoded bits into bytes, most significant bit first.
    ///
    /// Trailing bits that do not fill a byte are discarded, not padded.
    /// Fails with [`DecodeError::FrameTooShort`] when fewer than two bytes
    /// result - the smallest valid frame is one payload byte plus the
    /// checksum.
    pub fn pack(bits: &[bool]) -> Result<Self, DecodeError> {
        let mut bytes = Vec::with_capacity(bits.len() / 8);
        for chunk in bits.chunks_exact(8) {
            let mut byte = 0_u8;
            for &bit in chunk {
                byte = (byte << 1) | u8::from(bit);
            }
            bytes.push(byte);
        }

        if bytes.len() < 2 {
            return Err(DecodeError::FrameTooShort { len: bytes.len() });
        }
        Ok(Self { bytes })
    }

    /// Build a frame around a payload by appending its checksum.
    ///
    /// This is the transmit-side operation; the badge only uses it in
    /// tests, the web flasher performs the equivalent before blinking.
    pub fn seal(payload: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(payload.len() + 1);
        bytes.extend_from_slice(payload);
        bytes.push(checksum(payload));
        Self { bytes }
    }

    /// Verify the checksum trailer and return the payload.
    ///
    /// A mismatch discards the frame in its entirety - there is no partial
    /// acceptance.
    pub fn validate(&self) -> Result<&[u8], DecodeError> {
        let (payload, trailer) = self.bytes.split_at(self.bytes.len() - 1);
        let received = trailer[0];
        let computed = checksum(payload);
        if received != computed {
            return Err(DecodeError::ChecksumMismatch { received, computed });
        }
        Ok(payload)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Serialize the frame to bits, most significant bit first.
    pub fn to_bits(&self) -> Vec<bool> {
        self.bytes
            .iter()
            .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn crc_of_empty_is_zero() {
        assert_eq!(checksum(&[]), 0x00);
    }

    #[test]
    fn crc_is_order_sensitive() {
        assert_ne!(checksum(&[0x12, 0x34]), checksum(&[0x34, 0x12]));
    }

    #[test]
    fn crc_is_deterministic() {
        let data = b"prototype badge";
        assert_eq!(checksum(data), checksum(data));
    }

    #[test]
    fn pack_is_msb_first() {
        let bits = [
            true, false, false, false, false, false, false, true, // 0x81
            false, true, false, true, false, true, false, true, // 0x55
        ];
        let frame = Frame::pack(&bits).unwrap();
        assert_eq!(frame.as_bytes(), [0x81, 0x55]);
    }

    #[test]
    fn pack_truncates_partial_byte() {
        let mut bits = vec![false; 16];
        bits.extend([true; 7]); // leftover, must be dropped
        let frame = Frame::pack(&bits).unwrap();
        assert_eq!(frame.as_bytes(), [0x00, 0x00]);
    }

    #[test]
    fn pack_rejects_single_byte() {
        assert_eq!(
            Frame::pack(&[true; 8]),
            Err(DecodeError::FrameTooShort { len: 1 })
        );
    }

    #[test]
    fn seal_then_validate_round_trips() {
        let frame = Frame::seal(b"Ada\0@ada\0she/her");
        assert_eq!(frame.validate().unwrap(), b"Ada\0@ada\0she/her");
    }

    #[test]
    fn flipped_payload_bit_is_detected() {
        // Payload "A" sealed with a fresh checksum, then one payload bit
        // flipped with the trailer left untouched.
        let sealed = Frame::seal(b"A");
        let mut bits = sealed.to_bits();
        bits[1] = !bits[1];
        let tampered = Frame::pack(&bits).unwrap();
        let err = tampered.validate().unwrap_err();
        assert!(matches!(err, DecodeError::ChecksumMismatch { .. }));
    }

    #[test]
    fn mismatch_reports_both_values() {
        let frame = Frame::pack(&Frame::seal(b"hi").to_bits()).unwrap();
        let good = *frame.as_bytes().last().unwrap();
        let mut bad_bits = frame.to_bits();
        let n = bad_bits.len();
        bad_bits[n - 1] = !bad_bits[n - 1]; // corrupt the trailer itself
        let tampered = Frame::pack(&bad_bits).unwrap();
        assert_eq!(
            tampered.validate(),
            Err(DecodeError::ChecksumMismatch {
                received: good ^ 0x01,
                computed: good,
            })
        );
    }

    #[test]
    fn round_trip_through_bits() {
        let frame = Frame::seal(b"bits");
        assert_eq!(Frame::pack(&frame.to_bits()).unwrap(), frame);
    }
}
