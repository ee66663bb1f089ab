// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (select graphic rendition) escape code generation.
//!
//! ## Lookup table instead of `write!`
//!
//! Escape sequences are assembled with a pre-computed lookup table for all possible u8
//! values rather than the `write!` macro. Even when writing to an in-memory buffer,
//! `write!` expands to `format_args!`, dispatches through the `Display` machinery, and
//! builds each number digit by digit at runtime. The table reduces all of that to an
//! array lookup plus a memcpy, and it keeps [`SgrCode::write_params`] infallible, so
//! sequence assembly needs no error plumbing.
//!
//! ## One sequence, many codes
//!
//! A single SGR sequence can carry several codes separated by `;`, eg:
//! `\x1b[38;2;255;0;0;1;4m` sets a truecolor foreground, bold, and underline in one
//! shot. [`SgrCode`] therefore splits rendering in two:
//!
//! - [`SgrCode::write_params`] appends just the parameter bytes of one code.
//! - [`Display`] wraps one code in `\x1b[` and `m` as a standalone sequence.
//!
//! Combining codes (the `;` separators, the framing) is the caller's job, see
//! [`crate::set_fx`].
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;
use smallvec::SmallVec;
use strum_macros::EnumCount;

/// One SGR code: either a text attribute or a color selection in one of the three
/// supported color forms.
///
/// The `u8` payload of [`Self::ForegroundAnsi16`] and [`Self::BackgroundAnsi16`] is the
/// bare palette selection code itself (`30-37` foreground, `40-47` background), as
/// produced by [`crate::nearest_ansi`].
#[derive(Copy, Clone, Debug, PartialEq, EnumCount)]
pub enum SgrCode {
    Reset,
    Bold,
    Italic,
    Underline,
    Blink,
    Strikethrough,
    Overline,
    ForegroundAnsi16(u8),
    BackgroundAnsi16(u8),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// A complete escape sequence, stack allocated up to
/// [`sizing::MAX_ESCAPE_SEQUENCE_SIZE`] bytes.
pub type EscapeSequence = sizing::InlineStringEscSeq;

pub mod sizing {
    use super::{SgrCode, SmallString, SmallVec};

    /// The longest combined sequence is a truecolor foreground and background plus all
    /// six text attributes, which is 49 bytes.
    pub const MAX_ESCAPE_SEQUENCE_SIZE: usize = 64;
    pub type InlineStringEscSeq = SmallString<[u8; MAX_ESCAPE_SEQUENCE_SIZE]>;

    /// A combined sequence holds at most a foreground color, a background color, and
    /// the six text attributes.
    pub const MAX_SGR_CODES_PER_SEQUENCE: usize = 8;
    pub type InlineVecSgrCodes = SmallVec<[SgrCode; MAX_SGR_CODES_PER_SEQUENCE]>;
}

/// Lookup table for u8 to string conversion to avoid runtime formatting overhead.
/// Pre-computed at compile time for all possible u8 values (0-255).
const U8_STRINGS: [&str; 256] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15",
    "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29",
    "30", "31", "32", "33", "34", "35", "36", "37", "38", "39", "40", "41", "42", "43",
    "44", "45", "46", "47", "48", "49", "50", "51", "52", "53", "54", "55", "56", "57",
    "58", "59", "60", "61", "62", "63", "64", "65", "66", "67", "68", "69", "70", "71",
    "72", "73", "74", "75", "76", "77", "78", "79", "80", "81", "82", "83", "84", "85",
    "86", "87", "88", "89", "90", "91", "92", "93", "94", "95", "96", "97", "98", "99",
    "100", "101", "102", "103", "104", "105", "106", "107", "108", "109", "110", "111",
    "112", "113", "114", "115", "116", "117", "118", "119", "120", "121", "122", "123",
    "124", "125", "126", "127", "128", "129", "130", "131", "132", "133", "134", "135",
    "136", "137", "138", "139", "140", "141", "142", "143", "144", "145", "146", "147",
    "148", "149", "150", "151", "152", "153", "154", "155", "156", "157", "158", "159",
    "160", "161", "162", "163", "164", "165", "166", "167", "168", "169", "170", "171",
    "172", "173", "174", "175", "176", "177", "178", "179", "180", "181", "182", "183",
    "184", "185", "186", "187", "188", "189", "190", "191", "192", "193", "194", "195",
    "196", "197", "198", "199", "200", "201", "202", "203", "204", "205", "206", "207",
    "208", "209", "210", "211", "212", "213", "214", "215", "216", "217", "218", "219",
    "220", "221", "222", "223", "224", "225", "226", "227", "228", "229", "230", "231",
    "232", "233", "234", "235", "236", "237", "238", "239", "240", "241", "242", "243",
    "244", "245", "246", "247", "248", "249", "250", "251", "252", "253", "254", "255",
];

impl SgrCode {
    /// Appends the parameter bytes of this code (no `\x1b[` prefix, no `m` suffix) to
    /// `acc`. Uses direct string concatenation and the lookup table to avoid formatting
    /// overhead, which also makes this infallible.
    pub fn write_params(&self, acc: &mut EscapeSequence) {
        match *self {
            SgrCode::Reset => acc.push('0'),
            SgrCode::Bold => acc.push('1'),
            SgrCode::Italic => acc.push('3'),
            SgrCode::Underline => acc.push('4'),
            SgrCode::Blink => acc.push('5'),
            SgrCode::Strikethrough => acc.push('9'),
            SgrCode::Overline => acc.push_str("53"),
            SgrCode::ForegroundAnsi16(code) => {
                acc.push_str(U8_STRINGS[code as usize]);
            }
            SgrCode::BackgroundAnsi16(code) => {
                acc.push_str(U8_STRINGS[code as usize]);
            }
            SgrCode::ForegroundAnsi256(index) => {
                acc.push_str("38;5;");
                acc.push_str(U8_STRINGS[index as usize]);
            }
            SgrCode::BackgroundAnsi256(index) => {
                acc.push_str("48;5;");
                acc.push_str(U8_STRINGS[index as usize]);
            }
            SgrCode::ForegroundRGB(r, g, b) => {
                acc.push_str("38;2;");
                acc.push_str(U8_STRINGS[r as usize]);
                acc.push(';');
                acc.push_str(U8_STRINGS[g as usize]);
                acc.push(';');
                acc.push_str(U8_STRINGS[b as usize]);
            }
            SgrCode::BackgroundRGB(r, g, b) => {
                acc.push_str("48;2;");
                acc.push_str(U8_STRINGS[r as usize]);
                acc.push(';');
                acc.push_str(U8_STRINGS[g as usize]);
                acc.push(';');
                acc.push_str(U8_STRINGS[b as usize]);
            }
        }
    }
}

impl Display for SgrCode {
    /// Renders this one code as a complete, standalone SGR sequence.
    /// More info:
    /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
    /// - <https://www.asciitable.com/>
    /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut acc = EscapeSequence::new();
        acc.push_str(CSI);
        self.write_params(&mut acc);
        acc.push_str(SGR);
        f.write_str(&acc)
    }
}
