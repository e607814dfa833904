// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use core::f64::consts::PI;

///
/// Waveform parameters for one gradient run.
///
/// All three channels are sine waves of the sample index, staggered by the
/// phase offsets so they peak at different points of the cycle. That stagger
/// is what makes the emitted table read as a rainbow.
///
/// Reference: <http://krazydad.com/tutorials/makecolors.php>
///
#[derive(Debug, Clone, PartialEq)]
pub struct GradientParams {
    /// Angular step per index, drives the red and green channels.
    pub freq1: f64,
    /// Angular step per index, drives the blue channel.
    pub freq2: f64,
    /// Accepted but unused by the sampling formula. See the note on
    /// [`sample_gradient`](crate::gradient_sampler::sample_gradient).
    pub freq3: f64,
    /// Phase offset of the red channel, in radians.
    pub phase1: f64,
    /// Phase offset of the green channel, in radians.
    pub phase2: f64,
    /// Phase offset of the blue channel, in radians.
    pub phase3: f64,
    /// Midpoint of the raw channel range.
    pub center: f64,
    /// Amplitude around the center.
    pub width: f64,
    /// Number of samples in the run.
    pub len: usize,
}

impl Default for GradientParams {
    /// The classic three-wave setup: equal frequencies, channels a third of
    /// a cycle apart, raw range [1, 255].
    fn default() -> Self {
        Self {
            freq1: 0.3,
            freq2: 0.3,
            freq3: 0.3,
            phase1: 0.0,
            phase2: 2.0 * PI / 3.0,
            phase3: 4.0 * PI / 3.0,
            center: 128.0,
            width: 127.0,
            len: 50,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_raw_range() {
        let params = GradientParams::default();
        assert_eq!(params.center - params.width, 1.0);
        assert_eq!(params.center + params.width, 255.0);
        assert_eq!(params.len, 50);
    }
}
