//! Bit synchronization — aligned window search over classified levels.
//!
//! There is no shared clock with the transmitter, so alignment is found by
//! scanning: each candidate hold window is resolved by majority vote, and a
//! rejected alignment advances the cursor by a single sample rather than a
//! full window. Small timing drift therefore costs one sample of search per
//! slip instead of a lost bit.

use alloc::vec::Vec;

use crate::{
    error::DecodeError,
    levels::Level,
    params::LinkParams,
};

fn count(window: &[Level], level: Level) -> usize {
    window.iter().filter(|&&l| l == level).count()
}

/// Scan the level sequence for hold(+gap) windows and vote out bit values.
fn scan_windows(levels: &[Level], hold: usize, gap: usize) -> Vec<bool> {
    let mut bits = Vec::new();
    let mut i = 0;

    while i + hold <= levels.len() {
        let window = &levels[i..i + hold];
        let bright = count(window, Level::Bright);
        let dark = count(window, Level::Dark);

        // Entirely ambiguous window: no hold here, resynchronize.
        if bright + dark == 0 {
            i += 1;
            continue;
        }

        // Strict majority; ties resolve to 0.
        let bit = bright > dark;
        let hold_level = if bit { Level::Bright } else { Level::Dark };

        let mut aligned = true;
        if gap > 0 && i + hold + gap <= levels.len() {
            let gap_window = &levels[i + hold..i + hold + gap];
            let neutrals = count(gap_window, Level::Ambiguous);
            if neutrals * 2 < gap_window.len() {
                // Gap did not return to neutral. If it continues the hold's
                // own level we are likely mid-bit, so reject this alignment.
                if count(gap_window, hold_level) > gap_window.len() / 2 {
                    aligned = false;
                }
            }
        }

        if aligned {
            bits.push(bit);
            i += hold + gap;
        } else {
            i += 1;
        }
    }

    bits
}

/// Recover the transmitted bit sequence from classified levels.
///
/// Fails with [`DecodeError::InsufficientBits`] when fewer than one byte's
/// worth of bits could be aligned.
pub fn recover_bits(levels: &[Level], params: &LinkParams) -> Result<Vec<bool>, DecodeError> {
    let bits = scan_windows(levels, params.hold_samples(), params.gap_samples());
    if bits.len() < 8 {
        return Err(DecodeError::InsufficientBits { got: bits.len() });
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::levels::Level::{
        Ambiguous as A,
        Bright as B,
        Dark as D,
    };

    fn repeated(level: Level, n: usize) -> Vec<Level> {
        vec![level; n]
    }

    #[test]
    fn clean_two_bit_transmission() {
        let mut levels = Vec::new();
        levels.extend(repeated(B, 12));
        levels.extend(repeated(A, 5));
        levels.extend(repeated(D, 12));
        levels.extend(repeated(A, 5));
        assert_eq!(scan_windows(&levels, 12, 5), [true, false]);
    }

    #[test]
    fn ambiguous_prefix_is_skipped() {
        // Windows inside the neutral lead-in carry no vote at all and are
        // stepped over one sample at a time.
        let mut levels = repeated(A, 20);
        levels.extend(repeated(B, 12));
        levels.extend(repeated(A, 5));
        assert_eq!(scan_windows(&levels, 12, 5), [true]);
    }

    #[test]
    fn tie_votes_resolve_to_zero() {
        // 2 bright, 2 dark: strict majority fails, dark wins.
        let levels = [B, B, D, D];
        assert_eq!(scan_windows(&levels, 4, 0), [false]);
    }

    #[test]
    fn gap_matching_hold_forces_rescan() {
        // The candidate windows at i = 0 and i = 1 vote bright but are
        // followed by more bright, so both alignments are rejected. The
        // scan lands on i = 2, whose gap has reached neutral.
        let levels = [B, B, B, B, B, A, A];
        assert_eq!(scan_windows(&levels, 2, 2), [true]);
    }

    #[test]
    fn no_gap_configured_packs_back_to_back() {
        let mut levels = Vec::new();
        levels.extend(repeated(B, 12));
        levels.extend(repeated(D, 12));
        levels.extend(repeated(B, 12));
        assert_eq!(scan_windows(&levels, 12, 0), [true, false, true]);
    }

    #[test]
    fn trailing_partial_window_is_ignored() {
        let mut levels = repeated(B, 12);
        levels.extend(repeated(A, 5));
        levels.extend(repeated(D, 7)); // not a full hold window
        assert_eq!(scan_windows(&levels, 12, 5), [true]);
    }

    #[test]
    fn fewer_than_eight_bits_is_an_error() {
        let mut levels = Vec::new();
        levels.extend(repeated(B, 12));
        levels.extend(repeated(A, 5));
        levels.extend(repeated(D, 12));
        levels.extend(repeated(A, 5));
        assert_eq!(
            recover_bits(&levels, &LinkParams::default()),
            Err(DecodeError::InsufficientBits { got: 2 })
        );
    }
}
