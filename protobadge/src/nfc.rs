//! NFC tag bus wiring — NT3H2111 over I2C.
//!
//! The tag's data path (NDEF pages, session registers) is independent of
//! the provisioning link and handled by external code; this module only
//! wires the bus and the field-detect line.

use esp_hal::{
    Blocking,
    gpio::{
        Input,
        InputConfig,
        Pull,
    },
    i2c::master::I2c,
    time::Rate,
};

use crate::NfcResources;

/// NT3H2111 I2C address.
pub const NT3H_ADDR: u8 = 0x55;

/// The wired NFC tag bus.
pub struct NfcBus<'a> {
    pub i2c: I2c<'a, Blocking>,
    /// Driven low by the tag while an RF field is present.
    pub field_detect: Input<'a>,
}

impl<'a> From<NfcResources<'a>> for NfcBus<'a> {
    fn from(res: NfcResources<'a>) -> Self {
        let i2c = I2c::new(
            res.i2c,
            esp_hal::i2c::master::Config::default().with_frequency(Rate::from_khz(100)),
        )
        .unwrap()
        .with_sda(res.sda)
        .with_scl(res.scl);

        // FD is open drain, active low.
        let field_detect = Input::new(res.fd, InputConfig::default().with_pull(Pull::Up));

        Self { i2c, field_detect }
    }
}

impl NfcBus<'_> {
    pub fn field_present(&self) -> bool {
        self.field_detect.is_low()
    }
}
