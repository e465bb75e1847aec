//! # protobadge
//!
//! Hardware support library for the prototype conference badge.
//!
//! Onboard peripherals:
//! - **E-paper**: 200×200 panel over SPI — bus wiring only, the panel
//!   driver is external
//! - **NFC**: NT3H2111 tag over I2C with field detect — bus wiring only
//! - **Flasher link**: photodiode (TIA on an ADC pin) plus read button,
//!   the receiver for the optical provisioning link decoded by
//!   `protobadge-link`
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let peripherals = protobadge::init();
//! let resources = protobadge::split_resources!(peripherals);
//!
//! let mut flasher: protobadge::FlasherLink = resources.flasher.into();
//! flasher.wait_for_hold().await;
//! let config = flasher.read_config().await?;
//! ```

#![no_std]

mod eink;
mod flasher;
mod nfc;
pub mod store;

pub use eink::{
    EPD_HEIGHT,
    EPD_WIDTH,
    EinkBus,
};
use esp_hal::{
    assign_resources,
    clock::CpuClock,
};
pub use flasher::FlasherLink;
pub use nfc::{
    NT3H_ADDR,
    NfcBus,
};
pub use protobadge_link::{
    BadgeConfig,
    DecodeError,
    LinkParams,
};

/// StaticCell helper — allocates a value into a `static` exactly once.
#[macro_export]
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write($val);
        x
    }};
}

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        eink: EinkResources<'d> {
            dc: GPIO15,
            rst: GPIO7,
            busy: GPIO16,
            sck: GPIO4,
            cs: GPIO6,
            mosi: GPIO5,
            spi: SPI2,
        },
        nfc: NfcResources<'d> {
            sda: GPIO8,
            scl: GPIO9,
            fd: GPIO10,
            i2c: I2C0,
        },
        flasher: FlasherResources<'d> {
            button: GPIO13,
            photodiode: GPIO2,
            adc: ADC1,
        },
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// Initialise the badge hardware and return the raw peripheral set.
///
/// Call this once at the top of your `main`, then use [`split_resources!`]
/// to break the peripherals into typed resource groups. The CPU runs at
/// 80 MHz: the badge is battery powered and nothing here is CPU bound.
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::_80MHz);
    esp_hal::init(config)
}

// ── Resource → peripheral conversions ───────────────────────────────────────

impl From<esp_hal::peripherals::Peripherals> for Resources<'_> {
    fn from(peripherals: esp_hal::peripherals::Peripherals) -> Self {
        split_resources!(peripherals)
    }
}
