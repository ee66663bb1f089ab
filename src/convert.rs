// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Quantization of 24-bit RGB onto the 6x6x6 color cube of the 256-color palette.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>

use crate::{Ansi256Color, RgbColor};

/// Maps an RGB color to its 6x6x6 cube index in the 256-color palette.
///
/// Each channel is quantized to one of six levels with `channel * 5 / 255` (truncating
/// integer division), then the levels are combined as
/// `16 + 36 * level_red + 6 * level_green + level_blue`, which always lands in the
/// cube range `16-231`. The mapping is lossy and many-to-one; there is no inverse.
///
/// ```rust
/// use r3bl_term_fx::{RgbColor, rgb_to_8bit};
///
/// let sky_blue = RgbColor::from((135, 206, 235));
/// assert_eq!(rgb_to_8bit(sky_blue).index, 116);
/// ```
#[must_use]
pub fn rgb_to_8bit(color: RgbColor) -> Ansi256Color {
    let level = |channel: u8| u16::from(channel) * 5 / 255;
    let index = 16 + 36 * level(color.red) + 6 * level(color.green) + level(color.blue);
    // Max index is 16 + 180 + 30 + 5 = 231, always a valid u8.
    Ansi256Color::new(index as u8)
}
