// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use crate::gradient_params::GradientParams;

/// One quantized color table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSample {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

///
/// Sample one gradient run.
///
/// Per index `i`, each raw channel is `sin(freq * i + phase) * width + center`,
/// then truncated toward zero and integer-divided by 4. With the default
/// center/width pair that maps the sine range onto [0, 63], dim enough to
/// look good on the LED rings the tables are pasted into.
///
/// Note that the green channel runs on `freq1`, same as red, and blue runs on
/// `freq2`, so `freq3` never enters the formula. The tables produced this way
/// are already burned into consumer source, so the formula is kept exactly
/// rather than giving each channel its own frequency.
///
pub fn sample_gradient(params: &GradientParams) -> Vec<ColorSample> {
    (0..params.len)
        .map(|i| {
            let tick = i as f64;
            ColorSample {
                red: quantize((params.freq1 * tick + params.phase1).sin(), params),
                green: quantize((params.freq1 * tick + params.phase2).sin(), params),
                blue: quantize((params.freq2 * tick + params.phase3).sin(), params),
            }
        })
        .collect()
}

/// Scale a sine value into the raw range, truncate toward zero, divide by 4.
/// Raws outside [0, 1023] saturate into the u8 channel.
fn quantize(sine: f64, params: &GradientParams) -> u8 {
    let raw = sine * params.width + params.center;
    ((raw as i64) / 4).clamp(0, u8::MAX as i64) as u8
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sample_count() {
        let mut params = GradientParams::default();
        assert_eq!(sample_gradient(&params).len(), 50);

        params.len = 18;
        assert_eq!(sample_gradient(&params).len(), 18);

        params.len = 0;
        assert!(sample_gradient(&params).is_empty());
    }

    #[test]
    fn test_first_sample() {
        // sin(0) = 0 -> 128 -> 0x20
        // sin(2pi/3) * 127 + 128 = 237.98... -> 237 / 4 = 0x3b
        // sin(4pi/3) * 127 + 128 = 18.01... -> 18 / 4 = 0x4
        let params = GradientParams {
            len: 1,
            ..Default::default()
        };
        assert_eq!(
            sample_gradient(&params),
            vec![ColorSample {
                red: 0x20,
                green: 0x3b,
                blue: 0x4,
            }]
        );
    }

    #[test]
    fn test_channel_bound() {
        // Every channel stays within floor((center + width) / 4).
        let params = GradientParams::default();
        let bound = ((params.center + params.width) / 4.0).floor() as u8;
        for sample in sample_gradient(&params) {
            assert!(sample.red <= bound);
            assert!(sample.green <= bound);
            assert!(sample.blue <= bound);
        }
    }

    #[test]
    fn test_deterministic() {
        let params = GradientParams::default();
        assert_eq!(sample_gradient(&params), sample_gradient(&params));
    }
}
