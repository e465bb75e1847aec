//! Badge owner configuration — the link's end product.

use alloc::{
    string::{
        String,
        ToString,
    },
    vec::Vec,
};

use crate::error::DecodeError;

/// Separator between payload fields on the wire.
const FIELD_SEPARATOR: char = '\0';

/// Name, handle and pronouns shown on the badge.
///
/// Only ever constructed from a checksum-validated frame. Fields the
/// transmission omitted default to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BadgeConfig {
    pub name: String,
    pub handle: String,
    pub pronouns: String,
}

impl BadgeConfig {
    /// Parse a validated payload: UTF-8 text, fields separated by NUL, in
    /// order name, handle, pronouns. Segments past the third are ignored.
    pub fn from_payload(payload: &[u8]) -> Result<Self, DecodeError> {
        let text = core::str::from_utf8(payload).map_err(|_| DecodeError::InvalidEncoding)?;
        let mut fields = text.split(FIELD_SEPARATOR);
        Ok(Self {
            name: fields.next().unwrap_or_default().to_string(),
            handle: fields.next().unwrap_or_default().to_string(),
            pronouns: fields.next().unwrap_or_default().to_string(),
        })
    }

    /// Serialize in the transmit order. Fields must not contain NUL.
    pub fn to_payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(self.name.len() + self.handle.len() + self.pronouns.len() + 2);
        payload.extend_from_slice(self.name.as_bytes());
        payload.push(0);
        payload.extend_from_slice(self.handle.as_bytes());
        payload.push(0);
        payload.extend_from_slice(self.pronouns.as_bytes());
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_fields() {
        let config = BadgeConfig::from_payload(b"Ada\0@ada\0she/her").unwrap();
        assert_eq!(config.name, "Ada");
        assert_eq!(config.handle, "@ada");
        assert_eq!(config.pronouns, "she/her");
    }

    #[test]
    fn name_only() {
        let config = BadgeConfig::from_payload(b"Ada").unwrap();
        assert_eq!(config.name, "Ada");
        assert_eq!(config.handle, "");
        assert_eq!(config.pronouns, "");
    }

    #[test]
    fn empty_trailing_segments() {
        let config = BadgeConfig::from_payload(b"Ada\0\0").unwrap();
        assert_eq!(config.name, "Ada");
        assert_eq!(config.handle, "");
        assert_eq!(config.pronouns, "");
    }

    #[test]
    fn extra_segments_are_ignored() {
        let config = BadgeConfig::from_payload(b"Ada\0@ada\0she/her\0junk").unwrap();
        assert_eq!(config.pronouns, "she/her");
    }

    #[test]
    fn non_utf8_is_rejected() {
        assert_eq!(
            BadgeConfig::from_payload(&[0x41, 0xff, 0xfe]),
            Err(DecodeError::InvalidEncoding)
        );
    }

    #[test]
    fn payload_round_trip() {
        let config = BadgeConfig {
            name: "Riley".into(),
            handle: "@riley".into(),
            pronouns: "they/them".into(),
        };
        assert_eq!(
            BadgeConfig::from_payload(&config.to_payload()).unwrap(),
            config
        );
    }
}
