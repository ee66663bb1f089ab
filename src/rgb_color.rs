// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.

use std::str::FromStr;

use crate::TermFxError;

/// Represents a color in RGB (24-bit truecolor) format.
///
/// The `u8` channel type is the range guarantee: every constructed value is a valid
/// 24-bit color, so the conversion and encoding functions in this crate never have to
/// re-validate their color inputs.
///
/// Construct it from channel values or parse it from a `"r,g,b"` string:
///
/// ```rust
/// use r3bl_term_fx::RgbColor;
///
/// let from_tuple = RgbColor::from((135, 206, 235));
/// let from_str: RgbColor = "135, 206, 235".parse().unwrap();
/// assert_eq!(from_tuple, from_str);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

mod rgb_color_impl {
    use super::{FromStr, RgbColor, TermFxError};

    impl RgbColor {
        #[must_use]
        pub fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }
    }

    impl From<(u8, u8, u8)> for RgbColor {
        fn from((red, green, blue): (u8, u8, u8)) -> Self {
            Self::from_u8(red, green, blue)
        }
    }

    /// Parses a `"r,g,b"` string. Each channel must be a base 10 integer in `0-255`;
    /// whitespace around a channel is ignored. Exactly three channels are required.
    impl TryFrom<&str> for RgbColor {
        type Error = TermFxError;

        fn try_from(input: &str) -> Result<Self, Self::Error> {
            let invalid = || TermFxError::InvalidColorFormat {
                input: input.to_string(),
            };
            let mut channels = input.split(',');
            let (Some(red), Some(green), Some(blue), None) = (
                channels.next(),
                channels.next(),
                channels.next(),
                channels.next(),
            ) else {
                return Err(invalid());
            };
            let parse_channel =
                |channel: &str| channel.trim().parse::<u8>().map_err(|_| invalid());
            Ok(Self {
                red: parse_channel(red)?,
                green: parse_channel(green)?,
                blue: parse_channel(blue)?,
            })
        }
    }

    impl FromStr for RgbColor {
        type Err = TermFxError;

        fn from_str(input: &str) -> Result<Self, Self::Err> { Self::try_from(input) }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::RgbColor;
    use crate::TermFxError;

    #[test]
    fn test_from_tuple() {
        let color = RgbColor::from((1, 2, 3));
        assert_eq!((color.red, color.green, color.blue), (1, 2, 3));
    }

    #[test_case("0,0,0", RgbColor { red: 0, green: 0, blue: 0 })]
    #[test_case("255,128,0", RgbColor { red: 255, green: 128, blue: 0 })]
    #[test_case(" 135 , 206 , 235 ", RgbColor { red: 135, green: 206, blue: 235 })]
    fn test_parse_valid(input: &str, expected: RgbColor) {
        assert_eq!(RgbColor::try_from(input).unwrap(), expected);
    }

    #[test_case(""; "empty")]
    #[test_case("1,2"; "two channels")]
    #[test_case("1,2,3,4"; "four channels")]
    #[test_case("256,0,0"; "channel out of range")]
    #[test_case("-1,0,0"; "negative channel")]
    #[test_case("a,b,c"; "not numeric")]
    #[test_case("1;2;3"; "wrong separator")]
    fn test_parse_invalid(input: &str) {
        let result = RgbColor::try_from(input);
        assert!(matches!(
            result,
            Err(TermFxError::InvalidColorFormat { .. })
        ));
    }

    #[test]
    fn test_from_str_round_trip() {
        let color: RgbColor = "95,0,255".parse().unwrap();
        assert_eq!(color, RgbColor::from_u8(95, 0, 255));
    }
}
