// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! HSV color representation and its conversion to RGB.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/HSL_and_HSV#HSV_to_RGB>

use crate::{RgbColor, TermFxError};

/// Represents a color in HSV (hue, saturation, value) format.
///
/// - `hue` is an integer in degrees, `[0, 360)`.
/// - `saturation` and `value` are integer percentages, `[0, 100]`.
///
/// The only way to construct one is [`Self::try_new`], which bounds-checks all three
/// components. This makes [`Self::to_rgb`] infallible: a value that exists is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HsvColor {
    pub hue: u16,
    pub saturation: u8,
    pub value: u8,
}

/// Converts an HSV triple to RGB.
///
/// Saturation and value are percentages; passing `100, 100` gives the fully saturated,
/// fully bright color for a hue.
///
/// ```rust
/// use r3bl_term_fx::{RgbColor, hsv_to_rgb};
///
/// assert_eq!(hsv_to_rgb(0, 100, 100).unwrap(), RgbColor::from((255, 0, 0)));
/// assert_eq!(hsv_to_rgb(120, 100, 100).unwrap(), RgbColor::from((0, 255, 0)));
/// ```
///
/// # Errors
///
/// - [`TermFxError::InvalidHue`] when `hue` is outside `[0, 360)`.
/// - [`TermFxError::InvalidSaturationOrValue`] when `saturation` or `value` is outside
///   `[0, 100]`.
pub fn hsv_to_rgb(hue: i32, saturation: i32, value: i32) -> Result<RgbColor, TermFxError> {
    Ok(HsvColor::try_new(hue, saturation, value)?.to_rgb())
}

mod hsv_color_impl {
    use super::{HsvColor, RgbColor, TermFxError, convert_channel};

    impl HsvColor {
        /// Validates and constructs an HSV color. The `i32` parameters exist so that
        /// out-of-range input (including negatives) is representable and can be
        /// reported back in the error.
        ///
        /// # Errors
        ///
        /// - [`TermFxError::InvalidHue`] when `hue` is outside `[0, 360)`.
        /// - [`TermFxError::InvalidSaturationOrValue`] when `saturation` or `value` is
        ///   outside `[0, 100]`.
        pub fn try_new(hue: i32, saturation: i32, value: i32) -> Result<Self, TermFxError> {
            if !(0..360).contains(&hue) {
                return Err(TermFxError::InvalidHue { hue });
            }
            if !(0..=100).contains(&saturation) || !(0..=100).contains(&value) {
                return Err(TermFxError::InvalidSaturationOrValue { saturation, value });
            }
            Ok(Self {
                hue: hue as u16,
                saturation: saturation as u8,
                value: value as u8,
            })
        }

        /// Standard six-sector HSV to RGB conversion.
        ///
        /// The hue circle is split into six 60 degree sectors. Within a sector the
        /// channels take the values `v`, `p`, `q`, `t` where `p` is the floor set by
        /// saturation, and `q`/`t` are the falling/rising ramps at the sector's
        /// fractional position.
        #[must_use]
        pub fn to_rgb(&self) -> RgbColor {
            let s = f64::from(self.saturation) / 100.0;
            let v = f64::from(self.value) / 100.0;

            let sector = self.hue / 60; // 0..=5
            let fractional = f64::from(self.hue) / 60.0 - f64::from(sector);

            let p = v * (1.0 - s);
            let q = v * (1.0 - fractional * s);
            let t = v * (1.0 - (1.0 - fractional) * s);

            #[rustfmt::skip]
            let (r, g, b) = match sector {
                0 => (v, t, p),
                1 => (q, v, p),
                2 => (p, v, t),
                3 => (p, q, v),
                4 => (t, p, v),
                _ => (v, p, q), // Sector 5; hue < 360 is guaranteed by try_new.
            };

            RgbColor {
                red: convert_channel(r),
                green: convert_channel(g),
                blue: convert_channel(b),
            }
        }
    }
}

/// Scales a fractional channel in `[0, 1]` to `[0, 255]` and rounds it. All three
/// channel conversions go through this one function so they share the same rounding
/// policy: round half away from zero, which is what [`f64::round`] does.
fn convert_channel(channel: f64) -> u8 { (channel * 255.0).round() as u8 }

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{HsvColor, convert_channel, hsv_to_rgb};
    use crate::{RgbColor, TermFxError};

    #[test_case(0, RgbColor { red: 255, green: 0, blue: 0 }; "red")]
    #[test_case(60, RgbColor { red: 255, green: 255, blue: 0 }; "yellow")]
    #[test_case(120, RgbColor { red: 0, green: 255, blue: 0 }; "green")]
    #[test_case(180, RgbColor { red: 0, green: 255, blue: 255 }; "cyan")]
    #[test_case(240, RgbColor { red: 0, green: 0, blue: 255 }; "blue")]
    #[test_case(300, RgbColor { red: 255, green: 0, blue: 255 }; "magenta")]
    fn test_fully_saturated_primaries(hue: i32, expected: RgbColor) {
        assert_eq!(hsv_to_rgb(hue, 100, 100).unwrap(), expected);
    }

    /// Zero saturation collapses the hue dependence: every hue becomes the same gray,
    /// and at full value that gray is white.
    #[test_case(0)]
    #[test_case(17)]
    #[test_case(100)]
    #[test_case(222)]
    #[test_case(359)]
    fn test_zero_saturation_is_grayscale(hue: i32) {
        assert_eq!(
            hsv_to_rgb(hue, 0, 100).unwrap(),
            RgbColor::from_u8(255, 255, 255)
        );
    }

    #[test_case(197, 43, 92, RgbColor { red: 134, green: 206, blue: 235 }; "sky blue")]
    #[test_case(30, 100, 50, RgbColor { red: 128, green: 64, blue: 0 }; "dark orange")]
    #[test_case(359, 100, 100, RgbColor { red: 255, green: 0, blue: 4 }; "last hue degree")]
    fn test_mixed_colors(hue: i32, saturation: i32, value: i32, expected: RgbColor) {
        assert_eq!(hsv_to_rgb(hue, saturation, value).unwrap(), expected);
    }

    #[test]
    fn test_all_sectors_stay_in_range() {
        for hue in (0..360).step_by(15) {
            for (saturation, value) in [(100, 100), (50, 50), (25, 75), (0, 0)] {
                // The u8 channels of the result are the range proof; this must simply
                // not fail for any valid input.
                hsv_to_rgb(hue, saturation, value).unwrap();
            }
        }
    }

    #[test_case(360)]
    #[test_case(361)]
    #[test_case(-1)]
    #[test_case(i32::MIN)]
    fn test_invalid_hue(hue: i32) {
        let result = hsv_to_rgb(hue, 100, 100);
        assert!(matches!(result, Err(TermFxError::InvalidHue { .. })));
    }

    #[test_case(101, 100)]
    #[test_case(100, 101)]
    #[test_case(-1, 50)]
    #[test_case(50, -1)]
    fn test_invalid_saturation_or_value(saturation: i32, value: i32) {
        let result = hsv_to_rgb(0, saturation, value);
        assert!(matches!(
            result,
            Err(TermFxError::InvalidSaturationOrValue { .. })
        ));
    }

    #[test]
    fn test_try_new_stores_validated_components() {
        let color = HsvColor::try_new(359, 0, 100).unwrap();
        assert_eq!(
            (color.hue, color.saturation, color.value),
            (359, 0, 100)
        );
    }

    #[test_case(0.0, 0; "zero")]
    #[test_case(1.0, 255; "one")]
    #[test_case(0.5, 128; "exact half rounds away from zero")]
    #[test_case(0.998, 254; "just below half step")]
    fn test_convert_channel_rounding(channel: f64, expected: u8) {
        assert_eq!(convert_channel(channel), expected);
    }
}
