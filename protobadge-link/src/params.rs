//! Link timing and threshold parameters.
//!
//! The defaults mirror the web flasher's transmit settings; both ends must
//! agree on the hold/gap durations for the decoder to find bit boundaries.

/// Timing and classification parameters for one decode attempt.
///
/// The decoder is a pure function of a sample sequence plus these values,
/// so alternative timings (or field-tuned thresholds) can be tried against
/// the same capture without touching the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkParams {
    /// How long the transmitter holds each bit's light level, in ms.
    pub bit_hold_ms: u32,
    /// Neutral gap between bits, in ms. Zero disables gap checking.
    pub bit_gap_ms: u32,
    /// ADC sampling cadence, in ms. Must be non-zero.
    pub sample_interval_ms: u32,
    /// Minimum number of samples for a transmission to be considered at all.
    pub min_samples: usize,
    /// Minimum `max - min` raw spread needed to classify reliably.
    pub min_contrast: u16,
    /// Bright threshold as a percentage of the observed span (default 70).
    pub high_percent: u32,
    /// Dark threshold as a percentage of the observed span (default 30).
    ///
    /// The 30/70 split leaves a dead zone in the middle so transitional
    /// samples land on `Ambiguous` instead of skewing majority votes.
    pub low_percent: u32,
}

impl Default for LinkParams {
    fn default() -> Self {
        Self {
            bit_hold_ms: 120,
            bit_gap_ms: 50,
            sample_interval_ms: 10,
            min_samples: 50,
            min_contrast: 1000,
            high_percent: 70,
            low_percent: 30,
        }
    }
}

impl LinkParams {
    /// Samples covered by one bit hold (floor division, at least 1).
    pub fn hold_samples(&self) -> usize {
        ((self.bit_hold_ms / self.sample_interval_ms) as usize).max(1)
    }

    /// Samples covered by one inter-bit gap (floor division, may be 0).
    pub fn gap_samples(&self) -> usize {
        (self.bit_gap_ms / self.sample_interval_ms) as usize
    }
}
