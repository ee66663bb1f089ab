// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Builds combined SGR sequences for a style, degraded to a terminal capability tier.
//!
//! This is the policy layer on top of [`crate::SgrCode`]: it decides which codes a
//! [`StyleSpec`] turns into for a given [`CapabilityTier`], joins them into one
//! sequence, and reports lossy color degradation on the tracing side channel (the
//! emitted bytes are never altered by diagnostics).

use crate::{BG_PALETTE, CSI, CapabilityTier, EscapeSequence, FG_PALETTE, RgbColor, SGR,
            SgrCode, nearest_ansi, rgb_to_8bit, sizing::InlineVecSgrCodes};

/// A declarative text style: optional foreground and background colors plus six
/// boolean attributes.
///
/// Build one with the chainable methods, then pass it to [`set_fx`]:
///
/// ```rust
/// use r3bl_term_fx::{CapabilityTier, RgbColor, StyleSpec, set_fx};
///
/// let spec = StyleSpec::new()
///     .fg(RgbColor::from((255, 0, 0)))
///     .bold()
///     .underline();
/// let seq = set_fx(spec, CapabilityTier::TrueColor);
/// assert_eq!(seq.as_str(), "\x1b[38;2;255;0;0;1;4m");
/// ```
///
/// The struct is plain data with public fields, so literal construction works too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleSpec {
    pub color_fg: Option<RgbColor>,
    pub color_bg: Option<RgbColor>,
    pub blink: bool,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub overline: bool,
}

mod style_spec_impl {
    use super::{RgbColor, StyleSpec};

    impl StyleSpec {
        #[must_use]
        pub fn new() -> Self { Self::default() }

        #[must_use]
        pub fn fg(mut self, arg_color: impl Into<RgbColor>) -> Self {
            self.color_fg = Some(arg_color.into());
            self
        }

        #[must_use]
        pub fn bg(mut self, arg_color: impl Into<RgbColor>) -> Self {
            self.color_bg = Some(arg_color.into());
            self
        }

        #[must_use]
        pub fn blink(mut self) -> Self {
            self.blink = true;
            self
        }

        #[must_use]
        pub fn bold(mut self) -> Self {
            self.bold = true;
            self
        }

        #[must_use]
        pub fn italic(mut self) -> Self {
            self.italic = true;
            self
        }

        #[must_use]
        pub fn underline(mut self) -> Self {
            self.underline = true;
            self
        }

        #[must_use]
        pub fn strikethrough(mut self) -> Self {
            self.strikethrough = true;
            self
        }

        #[must_use]
        pub fn overline(mut self) -> Self {
            self.overline = true;
            self
        }
    }
}

/// Renders `spec` as one combined SGR sequence for the given capability tier.
///
/// Colors are emitted first (foreground then background), then the attributes in the
/// fixed order blink, bold, italic, underline, strikethrough, overline. The order the
/// builder methods were called in never changes the output. A spec with nothing set
/// renders as `\x1b[m`.
///
/// On [`CapabilityTier::Indexed256`] and [`CapabilityTier::Ansi16`] the colors are
/// degraded, see [`crate::rgb_to_8bit`] and [`crate::nearest_ansi`]:
///
/// ```rust
/// use r3bl_term_fx::{CapabilityTier, RgbColor, StyleSpec, set_fx};
///
/// let sky_blue = StyleSpec::new().fg(RgbColor::from((135, 206, 235)));
/// let seq = set_fx(sky_blue, CapabilityTier::Indexed256);
/// assert_eq!(seq.as_str(), "\x1b[38;5;116m");
/// ```
#[must_use]
pub fn set_fx(spec: StyleSpec, tier: CapabilityTier) -> EscapeSequence {
    let mut codes = InlineVecSgrCodes::new();

    if let Some(color) = spec.color_fg {
        codes.push(encode_color(color, ColorKind::Foreground, tier));
    }
    if let Some(color) = spec.color_bg {
        codes.push(encode_color(color, ColorKind::Background, tier));
    }
    if spec.blink {
        codes.push(SgrCode::Blink);
    }
    if spec.bold {
        codes.push(SgrCode::Bold);
    }
    if spec.italic {
        codes.push(SgrCode::Italic);
    }
    if spec.underline {
        codes.push(SgrCode::Underline);
    }
    if spec.strikethrough {
        codes.push(SgrCode::Strikethrough);
    }
    if spec.overline {
        codes.push(SgrCode::Overline);
    }

    let mut acc = EscapeSequence::new();
    acc.push_str(CSI);
    for (index, code) in codes.iter().enumerate() {
        if index > 0 {
            acc.push(';');
        }
        code.write_params(&mut acc);
    }
    acc.push_str(SGR);
    acc
}

/// Renders the sequence that resets all styling, `\x1b[0m`. The explicit `0` parameter
/// is emitted on every tier.
#[must_use]
pub fn clear_fx() -> EscapeSequence {
    let mut acc = EscapeSequence::new();
    acc.push_str(CSI);
    SgrCode::Reset.write_params(&mut acc);
    acc.push_str(SGR);
    acc
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorKind {
    Foreground,
    Background,
}

/// Picks the SGR color form for one color slot. Degradation on the two lower tiers is
/// reported via [`tracing::debug!`] so callers can observe fidelity loss without the
/// sequence bytes changing.
fn encode_color(color: RgbColor, kind: ColorKind, tier: CapabilityTier) -> SgrCode {
    match tier {
        CapabilityTier::TrueColor => match kind {
            ColorKind::Foreground => {
                SgrCode::ForegroundRGB(color.red, color.green, color.blue)
            }
            ColorKind::Background => {
                SgrCode::BackgroundRGB(color.red, color.green, color.blue)
            }
        },
        CapabilityTier::Indexed256 => {
            let ansi = rgb_to_8bit(color);
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "degrading truecolor to 256-color cube",
                kind = ?kind,
                color = ?color,
                index = %ansi.index
            );
            match kind {
                ColorKind::Foreground => SgrCode::ForegroundAnsi256(ansi.index),
                ColorKind::Background => SgrCode::BackgroundAnsi256(ansi.index),
            }
        }
        CapabilityTier::Ansi16 => {
            let code = match kind {
                ColorKind::Foreground => nearest_ansi(color, &FG_PALETTE),
                ColorKind::Background => nearest_ansi(color, &BG_PALETTE),
            };
            tracing::debug!(
                message = "degrading truecolor to basic ANSI palette",
                kind = ?kind,
                color = ?color,
                code = %code
            );
            match kind {
                ColorKind::Foreground => SgrCode::ForegroundAnsi16(code),
                ColorKind::Background => SgrCode::BackgroundAnsi16(code),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(CapabilityTier::TrueColor)]
    #[test_case(CapabilityTier::Indexed256)]
    #[test_case(CapabilityTier::Ansi16)]
    fn test_empty_spec_renders_bare_sequence(tier: CapabilityTier) {
        let seq = set_fx(StyleSpec::new(), tier);
        assert_eq!(seq.as_str(), "\x1b[m");
    }

    #[test]
    fn test_clear_fx_is_explicit_reset() {
        assert_eq!(clear_fx().as_str(), "\x1b[0m");
        assert_eq!(clear_fx().as_str(), SgrCode::Reset.to_string());
    }

    /// Everything set on the truecolor tier: colors first, then the six attributes in
    /// their fixed order.
    #[test]
    fn test_full_spec_truecolor_ordering() {
        let spec = StyleSpec::new()
            .fg(RgbColor::from((1, 2, 3)))
            .bg(RgbColor::from((4, 5, 6)))
            .blink()
            .bold()
            .italic()
            .underline()
            .strikethrough()
            .overline();
        let seq = set_fx(spec, CapabilityTier::TrueColor);
        assert_eq!(seq.as_str(), "\x1b[38;2;1;2;3;48;2;4;5;6;5;1;3;4;9;53m");
    }

    #[test]
    fn test_builder_call_order_does_not_matter() {
        let first = StyleSpec::new().underline().bold().fg(RgbColor::from((9, 9, 9)));
        let second = StyleSpec::new().fg(RgbColor::from((9, 9, 9))).bold().underline();
        assert_eq!(
            set_fx(first, CapabilityTier::TrueColor).as_str(),
            set_fx(second, CapabilityTier::TrueColor).as_str()
        );
    }

    #[test]
    fn test_attributes_only() {
        let spec = StyleSpec::new().bold().underline();
        let seq = set_fx(spec, CapabilityTier::TrueColor);
        assert_eq!(seq.as_str(), "\x1b[1;4m");
    }

    #[test]
    fn test_truecolor_foreground_and_background() {
        let spec = StyleSpec::new()
            .fg(RgbColor::from((255, 128, 0)))
            .bg(RgbColor::from((0, 0, 0)));
        let seq = set_fx(spec, CapabilityTier::TrueColor);
        assert_eq!(seq.as_str(), "\x1b[38;2;255;128;0;48;2;0;0;0m");
    }

    /// Sky blue lands on cube index 116 for both grounds on the 256-color tier.
    #[test]
    fn test_indexed256_degradation() {
        let sky_blue = RgbColor::from((135, 206, 235));

        let fg = set_fx(StyleSpec::new().fg(sky_blue), CapabilityTier::Indexed256);
        assert_eq!(fg.as_str(), "\x1b[38;5;116m");

        let bg = set_fx(StyleSpec::new().bg(sky_blue), CapabilityTier::Indexed256);
        assert_eq!(bg.as_str(), "\x1b[48;5;116m");
    }

    /// On the basic tier the palette code itself is the whole parameter; there is no
    /// `38;`/`48;` introducer.
    #[test]
    fn test_ansi16_degradation() {
        let near_black = RgbColor::from((20, 20, 20));

        let fg = set_fx(StyleSpec::new().fg(near_black), CapabilityTier::Ansi16);
        assert_eq!(fg.as_str(), "\x1b[30m");

        let bg = set_fx(StyleSpec::new().bg(near_black), CapabilityTier::Ansi16);
        assert_eq!(bg.as_str(), "\x1b[40m");
    }

    #[test]
    fn test_ansi16_color_with_attributes() {
        let spec = StyleSpec::new()
            .fg(RgbColor::from((135, 206, 235)))
            .bold()
            .strikethrough();
        let seq = set_fx(spec, CapabilityTier::Ansi16);
        assert_eq!(seq.as_str(), "\x1b[37;1;9m");
    }

    /// Attribute codes are tier independent; only colors degrade.
    #[test_case(CapabilityTier::TrueColor)]
    #[test_case(CapabilityTier::Indexed256)]
    #[test_case(CapabilityTier::Ansi16)]
    fn test_attributes_identical_across_tiers(tier: CapabilityTier) {
        let spec = StyleSpec::new().italic().overline();
        assert_eq!(set_fx(spec, tier).as_str(), "\x1b[3;53m");
    }
}
