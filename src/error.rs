// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Typed failures for color parsing and HSV validation. See [`TermFxError`].

/// Errors returned by the fallible operations in this crate.
///
/// Each variant is a distinct failure mode with a dedicated [diagnostic code] and
/// actionable help text. Every operation here is pure and deterministic, so retrying
/// with the same input yields the same failure; callers are expected to surface the
/// error, not loop on it.
///
/// | Variant                      | Raised by                                |
/// | :--------------------------- | :--------------------------------------- |
/// | [`InvalidColorFormat`]       | `"r,g,b"` string parsing                 |
/// | [`InvalidHue`]               | [`HsvColor::try_new`], [`hsv_to_rgb`]    |
/// | [`InvalidSaturationOrValue`] | [`HsvColor::try_new`], [`hsv_to_rgb`]    |
///
/// [`InvalidColorFormat`]: Self::InvalidColorFormat
/// [`InvalidHue`]: Self::InvalidHue
/// [`InvalidSaturationOrValue`]: Self::InvalidSaturationOrValue
/// [`HsvColor::try_new`]: crate::HsvColor::try_new
/// [`hsv_to_rgb`]: crate::hsv_to_rgb
/// [diagnostic code]: miette::Diagnostic::code
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TermFxError {
    /// The supplied color string could not be parsed into three integer channels.
    #[error("invalid color string {input:?}, expected \"r,g,b\" with each channel in 0-255")]
    #[diagnostic(
        code(r3bl_term_fx::invalid_color_format),
        help("Pass three comma separated integers, eg: \"255,128,0\".")
    )]
    InvalidColorFormat {
        /// The string as received, before any trimming.
        input: String,
    },

    /// Hue must be an integer in `[0, 360)`.
    #[error("invalid hue {hue}, expected an integer in 0-359")]
    #[diagnostic(
        code(r3bl_term_fx::invalid_hue),
        help(
            "Hue is measured in degrees on the color wheel and wraps at 360. \
             Reduce the input with `hue.rem_euclid(360)` first if it can be out of range."
        )
    )]
    InvalidHue {
        /// The hue as received.
        hue: i32,
    },

    /// Saturation and value are integer percentages in `[0, 100]`.
    #[error("invalid saturation {saturation} or value {value}, expected integers in 0-100")]
    #[diagnostic(
        code(r3bl_term_fx::invalid_saturation_or_value),
        help("Saturation and value are percentages, eg: `hsv_to_rgb(200, 100, 50)`.")
    )]
    InvalidSaturationOrValue {
        /// The saturation as received.
        saturation: i32,
        /// The value as received.
        value: i32,
    },
}
