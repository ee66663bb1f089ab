// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Nearest-color matching against the basic 8-entry ANSI palette.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>

use crate::RgbColor;

/// One entry of the basic ANSI palette: the SGR parameter that selects the color, and
/// the reference RGB value used for distance matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiPaletteEntry {
    pub code: u8,
    pub rgb: RgbColor,
}

/// Foreground selection codes `30-37` paired with the standard ANSI palette colors.
///
/// Entries are sorted by code. [`nearest_ansi`] relies on this ordering to resolve
/// exact distance ties toward the lowest code.
#[rustfmt::skip]
pub const FG_PALETTE: [AnsiPaletteEntry; 8] = [
    AnsiPaletteEntry { code: 30, rgb: RgbColor { red: 0,   green: 0,   blue: 0   } }, // Black
    AnsiPaletteEntry { code: 31, rgb: RgbColor { red: 255, green: 0,   blue: 0   } }, // Red
    AnsiPaletteEntry { code: 32, rgb: RgbColor { red: 0,   green: 255, blue: 0   } }, // Green
    AnsiPaletteEntry { code: 33, rgb: RgbColor { red: 255, green: 255, blue: 0   } }, // Yellow
    AnsiPaletteEntry { code: 34, rgb: RgbColor { red: 0,   green: 0,   blue: 255 } }, // Blue
    AnsiPaletteEntry { code: 35, rgb: RgbColor { red: 255, green: 0,   blue: 255 } }, // Magenta
    AnsiPaletteEntry { code: 36, rgb: RgbColor { red: 0,   green: 255, blue: 255 } }, // Cyan
    AnsiPaletteEntry { code: 37, rgb: RgbColor { red: 255, green: 255, blue: 255 } }, // White
];

/// Background selection codes `40-47`. The reference colors are identical to
/// [`FG_PALETTE`], so a given RGB color always degrades to the same palette slot
/// regardless of which ground it is applied to.
#[rustfmt::skip]
pub const BG_PALETTE: [AnsiPaletteEntry; 8] = [
    AnsiPaletteEntry { code: 40, rgb: RgbColor { red: 0,   green: 0,   blue: 0   } }, // Black
    AnsiPaletteEntry { code: 41, rgb: RgbColor { red: 255, green: 0,   blue: 0   } }, // Red
    AnsiPaletteEntry { code: 42, rgb: RgbColor { red: 0,   green: 255, blue: 0   } }, // Green
    AnsiPaletteEntry { code: 43, rgb: RgbColor { red: 255, green: 255, blue: 0   } }, // Yellow
    AnsiPaletteEntry { code: 44, rgb: RgbColor { red: 0,   green: 0,   blue: 255 } }, // Blue
    AnsiPaletteEntry { code: 45, rgb: RgbColor { red: 255, green: 0,   blue: 255 } }, // Magenta
    AnsiPaletteEntry { code: 46, rgb: RgbColor { red: 0,   green: 255, blue: 255 } }, // Cyan
    AnsiPaletteEntry { code: 47, rgb: RgbColor { red: 255, green: 255, blue: 255 } }, // White
];

/// Scans `palette` and returns the selection code of the entry nearest to `color` in
/// Euclidean RGB distance.
///
/// ```rust
/// use r3bl_term_fx::{FG_PALETTE, RgbColor, nearest_ansi};
///
/// let near_black = RgbColor::from((20, 20, 20));
/// assert_eq!(nearest_ansi(near_black, &FG_PALETTE), 30);
/// ```
#[must_use]
pub fn nearest_ansi(color: RgbColor, palette: &[AnsiPaletteEntry; 8]) -> u8 {
    let mut best = &palette[0];
    let mut best_distance = squared_distance(color, best.rgb);
    // Strict comparison keeps the lowest code on exact distance ties.
    for entry in &palette[1..] {
        let distance = squared_distance(color, entry.rgb);
        if distance < best_distance {
            best = entry;
            best_distance = distance;
        }
    }
    best.code
}

/// Squared Euclidean distance in RGB space. Squaring is monotonic, so comparing squared
/// distances picks the same winner and the square root is never needed.
fn squared_distance(lhs: RgbColor, rhs: RgbColor) -> u32 {
    let delta = |a: u8, b: u8| {
        let diff = i32::from(a) - i32::from(b);
        (diff * diff) as u32
    };
    delta(lhs.red, rhs.red) + delta(lhs.green, rhs.green) + delta(lhs.blue, rhs.blue)
}
