//! Optical provisioning link receiver — photodiode plus read button.
//!
//! The photodiode sits behind a transimpedance amplifier on an ADC pin.
//! While the read button is held the ADC is polled on a fixed cadence; the
//! capture is handed to `protobadge-link` for decoding once the button is
//! released. The decoder itself never sees pins, only the sample sequence.

extern crate alloc;

use alloc::vec::Vec;

use defmt::{
    info,
    warn,
};
use embassy_time::{
    Duration,
    Ticker,
    Timer,
};
use esp_hal::{
    Blocking,
    analog::adc::{
        Adc,
        AdcConfig,
        AdcPin,
        Attenuation,
    },
    gpio::{
        Input,
        InputConfig,
        Pull,
    },
    peripherals::{
        ADC1,
        GPIO2,
    },
};
use protobadge_link::{
    BadgeConfig,
    DecodeError,
    LinkParams,
    decode,
};

use crate::FlasherResources;

const DEBOUNCE_MS: u64 = 50;

/// Receiver side of the web flasher's blinking-screen link.
pub struct FlasherLink<'a> {
    button: Input<'a>,
    adc: Adc<'a, ADC1<'a>, Blocking>,
    photodiode: AdcPin<GPIO2<'a>, ADC1<'a>>,
    params: LinkParams,
}

impl<'a> From<FlasherResources<'a>> for FlasherLink<'a> {
    fn from(res: FlasherResources<'a>) -> Self {
        let mut config = AdcConfig::new();
        // The TIA output swings most of the rail; full-range attenuation.
        let photodiode = config.enable_pin(res.photodiode, Attenuation::_11dB);
        let adc = Adc::new(res.adc, config);

        // Read button is active low with the internal pull-up.
        let button = Input::new(res.button, InputConfig::default().with_pull(Pull::Up));

        Self {
            button,
            adc,
            photodiode,
            params: LinkParams::default(),
        }
    }
}

impl FlasherLink<'_> {
    /// Override the default link timing, e.g. for bench captures.
    #[must_use]
    pub fn with_params(mut self, params: LinkParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &LinkParams {
        &self.params
    }

    /// Whether the read button is currently held.
    pub fn is_held(&self) -> bool {
        self.button.is_low()
    }

    /// Wait for a debounced press of the read button.
    pub async fn wait_for_hold(&mut self) {
        loop {
            self.button.wait_for_falling_edge().await;
            Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;
            if self.button.is_low() {
                return;
            }
        }
    }

    /// Sample the photodiode at the link cadence until the button releases.
    ///
    /// Returns the full ordered capture. Nothing else should be scheduled
    /// on this executor during acquisition; a delayed poll skews the
    /// window alignment the decoder searches for.
    pub async fn acquire(&mut self) -> Vec<u16> {
        let interval = Duration::from_millis(u64::from(self.params.sample_interval_ms));
        let mut ticker = Ticker::every(interval);
        let mut samples = Vec::new();

        while self.button.is_low() {
            samples.push(self.adc.read_blocking(&mut self.photodiode));
            ticker.next().await;
        }
        samples
    }

    /// One full acquire-and-decode cycle.
    ///
    /// Call after [`wait_for_hold`](Self::wait_for_hold). Every failure is
    /// recoverable by repeating the gesture.
    pub async fn read_config(&mut self) -> Result<BadgeConfig, DecodeError> {
        info!("button held - starting photodiode read");
        let samples = self.acquire().await;
        info!("collected {} samples", samples.len());

        match decode(&samples, &self.params) {
            Ok(config) => {
                info!(
                    "decoded config: name={} handle={} pronouns={}",
                    config.name.as_str(),
                    config.handle.as_str(),
                    config.pronouns.as_str()
                );
                Ok(config)
            }
            Err(err) => {
                warn!("photodiode read failed: {}", err);
                Err(err)
            }
        }
    }
}
