// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Why R3BL?
//!
//! <img src="https://raw.githubusercontent.com/r3bl-org/r3bl-open-core/main/r3bl-term.svg?raw=true" height="256px">
//!
//! We are working on building command line apps in Rust which have rich text user
//! interfaces (TUI). We want to lean into the terminal as a place of productivity, and
//! build all kinds of awesome apps for it.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//!
//! - [Why R3BL?](#why-r3bl)
//! - [Introduction](#introduction)
//! - [Usage examples](#usage-examples)
//! - [Capability tiers and degradation](#capability-tiers-and-degradation)
//! - [Changelog](#changelog)
//! - [Learn how these crates are built, provide
//!   feedback](#learn-how-these-crates-are-built-provide-feedback)
//!
//! <!-- /TOC -->
//!
//! # Introduction
//!
//! This crate generates SGR (select graphic rendition) escape sequences for styled
//! terminal text. It is pure computation: every function takes values in and returns
//! an escape sequence (or a color) out, without writing to the terminal or holding
//! per-call state. That makes the whole API trivially testable by comparing strings.
//!
//! The pieces:
//!
//! 1. Color values and conversions: [`RgbColor`] (with `"r,g,b"` parsing),
//!    [`HsvColor`] / [`hsv_to_rgb`], the 256-color cube mapping [`rgb_to_8bit`], and
//!    nearest-match lookup into the basic ANSI palette via [`nearest_ansi`].
//! 2. Sequence assembly: [`SgrCode`] renders individual codes, and [`set_fx`] /
//!    [`clear_fx`] combine a whole [`StyleSpec`] into one sequence for a given
//!    [`CapabilityTier`].
//! 3. Detection: [`global_capability::detect`] figures out (once, cached) which tier
//!    the attached terminal can handle.
//!
//! # Usage examples
//!
//! Style a chunk of text, then reset:
//!
//! ```rust
//! use r3bl_term_fx::{CapabilityTier, RgbColor, StyleSpec, clear_fx, set_fx};
//!
//! let style = StyleSpec::new()
//!     .fg(RgbColor::from((135, 206, 235)))
//!     .bold();
//! let on = set_fx(style, CapabilityTier::TrueColor);
//! let off = clear_fx();
//! println!("{on}Hello{off}");
//!
//! assert_eq!(on.as_str(), "\x1b[38;2;135;206;235;1m");
//! assert_eq!(off.as_str(), "\x1b[0m");
//! ```
//!
//! Colors can come from HSV or from a `"r,g,b"` string; invalid input is reported as a
//! typed [`TermFxError`], never a panic:
//!
//! ```rust
//! use r3bl_term_fx::{RgbColor, hsv_to_rgb};
//!
//! let teal = hsv_to_rgb(180, 100, 50)?;
//! assert_eq!(teal, RgbColor::from((0, 128, 128)));
//!
//! let parsed: RgbColor = "255, 128, 0".parse()?;
//! assert_eq!(parsed, RgbColor::from((255, 128, 0)));
//! # Ok::<(), r3bl_term_fx::TermFxError>(())
//! ```
//!
//! In a real program the tier comes from detection rather than being hard coded:
//!
//! ```rust
//! use r3bl_term_fx::{RgbColor, StyleSpec, clear_fx, global_capability, set_fx};
//!
//! let tier = global_capability::detect();
//! let seq = set_fx(StyleSpec::new().fg(RgbColor::from((95, 0, 255))), tier);
//! print!("{seq}vivid{}", clear_fx());
//! ```
//!
//! # Capability tiers and degradation
//!
//! The same [`StyleSpec`] renders differently depending on the [`CapabilityTier`]:
//!
//! | Tier                            | Foreground form | Example for `(135, 206, 235)` |
//! |---------------------------------|-----------------|-------------------------------|
//! | [`CapabilityTier::TrueColor`]   | `38;2;R;G;B`    | `\x1b[38;2;135;206;235m`      |
//! | [`CapabilityTier::Indexed256`]  | `38;5;N`        | `\x1b[38;5;116m`              |
//! | [`CapabilityTier::Ansi16`]      | bare `30-37`    | `\x1b[37m`                    |
//!
//! Backgrounds use `48;2`, `48;5`, and `40-47` respectively. Attribute codes (bold,
//! underline, etc.) are identical on every tier. Lossy degradation is reported on the
//! [`tracing`] debug channel; the emitted bytes are never altered by diagnostics.
//!
//! # Changelog
//!
//! Please check out the
//! [changelog](https://github.com/r3bl-org/r3bl-open-core/blob/main/CHANGELOG.md)
//! to see how the library has evolved over time.
//!
//! # Learn how these crates are built, provide feedback
//!
//! To learn how we built this crate, please take a look at the following resources.
//! - If you like consuming video content, here's our [YT channel](https://www.youtube.com/@developerlifecom).
//!   Please consider [subscribing](https://www.youtube.com/channel/CHANNEL_ID?sub_confirmation=1).
//! - If you like consuming written content, here's our developer [site](https://developerlife.com/).
//! - If you have questions, please join our [discord server](https://discord.gg/8M2ePAevaM).

// Attach.
pub mod ansi256_color;
pub mod ansi_escape_codes;
pub mod convert;
pub mod detect_capability;
pub mod error;
pub mod hsv_color;
pub mod palette;
pub mod rgb_color;
pub mod style_fx;

// Re-export.
pub use ansi256_color::*;
pub use ansi_escape_codes::*;
pub use convert::*;
pub use detect_capability::*;
pub use error::*;
pub use hsv_color::*;
pub use palette::*;
pub use rgb_color::*;
pub use style_fx::*;
