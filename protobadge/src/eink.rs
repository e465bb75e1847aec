//! E-paper bus wiring — 200×200 panel over SPI.
//!
//! Panel driving (command sequencing, waveform tables, refresh timing) is
//! the job of an external driver crate. This module only brings up the bus
//! and control pins and hands them over.

use embedded_hal::spi::SpiDevice;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    Blocking,
    delay::Delay,
    gpio::{
        Input,
        InputConfig,
        Level,
        Output,
        OutputConfig,
    },
    spi::master::Spi,
    time::Rate,
};

use crate::EinkResources;

/// Panel resolution in pixels.
pub const EPD_WIDTH: u16 = 200;
pub const EPD_HEIGHT: u16 = 200;

type EinkSpi<'a> = ExclusiveDevice<Spi<'a, Blocking>, Output<'a>, Delay>;

/// The wired e-paper bus: SPI device plus data/command, reset and busy
/// lines, ready for a panel driver.
pub struct EinkBus<'a> {
    spi: EinkSpi<'a>,
    pub dc: Output<'a>,
    pub rst: Output<'a>,
    pub busy: Input<'a>,
}

impl<'a> From<EinkResources<'a>> for EinkBus<'a> {
    fn from(res: EinkResources<'a>) -> Self {
        let spi = Spi::new(
            res.spi,
            esp_hal::spi::master::Config::default().with_frequency(Rate::from_mhz(4)),
        )
        .unwrap()
        .with_sck(res.sck)
        .with_mosi(res.mosi);

        let cs = Output::new(res.cs, Level::High, OutputConfig::default());
        let spi = ExclusiveDevice::new(spi, cs, Delay::new()).unwrap();

        let dc = Output::new(res.dc, Level::Low, OutputConfig::default());
        // Hold the panel out of reset; the driver pulses it as needed.
        let rst = Output::new(res.rst, Level::High, OutputConfig::default());
        let busy = Input::new(res.busy, InputConfig::default());

        Self { spi, dc, rst, busy }
    }
}

impl EinkBus<'_> {
    /// The panel's SPI connection, for driver crates that consume an
    /// [`embedded_hal::spi::SpiDevice`].
    pub fn device(&mut self) -> &mut impl SpiDevice<u8> {
        &mut self.spi
    }

    /// The panel drives busy high while a refresh is in progress.
    pub fn is_busy(&self) -> bool {
        self.busy.is_high()
    }
}
