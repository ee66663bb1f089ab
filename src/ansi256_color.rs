// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! 256-color (8-bit) palette index representation.

use crate::{RgbColor, convert::rgb_to_8bit};

/// Index into the 256-color ANSI palette.
///
/// The quantizer in this crate only ever produces cube indices (`16-231`); the type
/// admits the full `u8` range so palette indices obtained elsewhere can flow through
/// the same escape-code machinery.
///
/// More info: <https://www.ditig.com/256-colors-cheat-sheet>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ansi256Color {
    pub index: u8,
}

mod ansi256_color_impl {
    use super::{Ansi256Color, RgbColor, rgb_to_8bit};

    impl Ansi256Color {
        #[must_use]
        pub fn new(index: u8) -> Self { Self { index } }
    }

    impl From<u8> for Ansi256Color {
        fn from(index: u8) -> Self { Self::new(index) }
    }

    impl From<RgbColor> for Ansi256Color {
        fn from(color: RgbColor) -> Self { rgb_to_8bit(color) }
    }
}
