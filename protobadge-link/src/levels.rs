//! Level classification — raw intensities to symbolic light levels.
//!
//! Thresholds are derived from the observed range of each acquisition, so
//! the link works across ambient light conditions and screen brightnesses
//! without calibration.

use alloc::vec::Vec;

use crate::{
    error::DecodeError,
    params::LinkParams,
};

/// Symbolic light level of one sample. Derived only, never transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Dark,
    Bright,
    /// Between the dark and bright thresholds; excluded from majority votes.
    Ambiguous,
}

/// Classification thresholds for one acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds {
    pub low: u16,
    pub high: u16,
}

impl Thresholds {
    /// Derive thresholds from the observed sample range.
    ///
    /// Fails with [`DecodeError::WeakSignal`] when the spread between the
    /// darkest and brightest samples is below the contrast floor.
    pub fn from_samples(samples: &[u16], params: &LinkParams) -> Result<Self, DecodeError> {
        let min = samples.iter().copied().min().unwrap_or(0);
        let max = samples.iter().copied().max().unwrap_or(0);
        let contrast = max - min;
        if contrast < params.min_contrast {
            return Err(DecodeError::WeakSignal { contrast });
        }

        let span = u32::from(contrast);
        let high = u32::from(min) + span * params.high_percent / 100;
        let low = u32::from(min) + span * params.low_percent / 100;
        Ok(Self {
            low: low as u16,
            high: high as u16,
        })
    }

    pub fn classify_one(&self, sample: u16) -> Level {
        if sample >= self.high {
            Level::Bright
        } else if sample <= self.low {
            Level::Dark
        } else {
            Level::Ambiguous
        }
    }
}

/// Map every sample to a [`Level`] using thresholds derived from the
/// sequence itself.
pub fn classify(samples: &[u16], params: &LinkParams) -> Result<Vec<Level>, DecodeError> {
    let thresholds = Thresholds::from_samples(samples, params)?;
    Ok(samples
        .iter()
        .map(|&s| thresholds.classify_one(s))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weak_signal_is_rejected() {
        let params = LinkParams::default();
        let samples = [2000_u16, 2500, 2999];
        assert_eq!(
            classify(&samples, &params),
            Err(DecodeError::WeakSignal { contrast: 999 })
        );
    }

    #[test]
    fn empty_input_counts_as_weak() {
        let params = LinkParams::default();
        assert_eq!(
            classify(&[], &params),
            Err(DecodeError::WeakSignal { contrast: 0 })
        );
    }

    #[test]
    fn thirty_seventy_split() {
        // min 0, max 1000: low = 300, high = 700
        let params = LinkParams::default();
        let t = Thresholds::from_samples(&[0, 1000], &params).unwrap();
        assert_eq!(t, Thresholds { low: 300, high: 700 });

        assert_eq!(t.classify_one(0), Level::Dark);
        assert_eq!(t.classify_one(300), Level::Dark);
        assert_eq!(t.classify_one(301), Level::Ambiguous);
        assert_eq!(t.classify_one(699), Level::Ambiguous);
        assert_eq!(t.classify_one(700), Level::Bright);
        assert_eq!(t.classify_one(1000), Level::Bright);
    }

    #[test]
    fn classify_maps_every_sample() {
        let params = LinkParams::default();
        let levels = classify(&[100, 3000, 1500, 100], &params).unwrap();
        assert_eq!(
            levels,
            [Level::Dark, Level::Bright, Level::Ambiguous, Level::Dark]
        );
    }
}
