// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

/// The color fidelity a terminal can render. Every color in a [`crate::StyleSpec`] is
/// stored as truecolor RGB; the tier decides how much of that fidelity survives in the
/// emitted escape sequence, see [`crate::set_fx`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityTier {
    /// 24-bit RGB, `38;2;R;G;B` / `48;2;R;G;B` parameters.
    TrueColor,
    /// The 256-entry palette, `38;5;N` / `48;5;N` parameters.
    Indexed256,
    /// The basic 8-color palette, bare `30-37` / `40-47` parameters. Also the floor
    /// for terminals that want no color at all (`NO_COLOR`, `TERM=dumb`, not a tty).
    Ansi16,
}

/// The stream to check for terminal capability.
#[derive(Clone, Copy, Debug)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// # Capability tier detection with caching
///
/// Environment examination is expensive (several `env::var` system calls plus a tty
/// check), and callers tend to ask for the tier once per styled chunk. This module
/// memoizes the answer: detection runs once per process and the result is cached in an
/// atomic.
///
/// Two global atomics manage the state:
/// - An explicit override (highest priority), for tests and user preference flags.
/// - The memoized detection result.
///
/// ```rust
/// use r3bl_term_fx::{CapabilityTier, global_capability};
///
/// // Normal use: cached detection.
/// let tier = global_capability::detect();
///
/// // Tests and "--color=never" style flags: override, use, restore.
/// global_capability::set_override(CapabilityTier::Ansi16);
/// assert_eq!(global_capability::detect(), CapabilityTier::Ansi16);
/// global_capability::clear_override();
/// ```
pub mod global_capability {
    use super::{AtomicI8, CapabilityTier, Ordering, Stream,
                examine_env_vars_to_determine_capability};

    /// Explicit override for capability detection. Takes precedence over both the
    /// cache and fresh detection.
    static CAPABILITY_TIER_GLOBAL: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    /// Memoized result of [`examine_env_vars_to_determine_capability`]. Populated on
    /// the first [`detect`] call with no override set, valid until [`clear_cache`].
    static CAPABILITY_TIER_CACHED: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    const NOT_SET_VALUE: i8 = -1;

    /// Returns the capability tier of the terminal attached to stdout.
    ///
    /// Resolution order:
    /// 1. The override, if [`set_override`] was called.
    /// 2. The cached result of a previous detection.
    /// 3. Fresh detection via [`examine_env_vars_to_determine_capability`], which is
    ///    then cached.
    #[must_use]
    pub fn detect() -> CapabilityTier {
        // Check for explicit override first.
        if let Ok(override_value) = try_get_override() {
            return override_value;
        }

        // Check for cached value.
        if let Ok(cached_value) = try_get_cached() {
            return cached_value;
        }

        // Perform detection and cache result.
        let detected = examine_env_vars_to_determine_capability(Stream::Stdout);
        set_cached(detected);
        detected
    }

    /// Override the capability tier. Regardless of the environment, the value set here
    /// is returned by [`detect`] until [`clear_override`] is called.
    ///
    /// # Testing support
    ///
    /// The [serial_test](https://crates.io/crates/serial_test) crate is used to test
    /// this function. In any test in which this function is called, please use the
    /// `#[serial]` attribute to annotate that test. Otherwise there will be flakiness
    /// in the test results (tests are run in parallel using many threads).
    pub fn set_override(value: CapabilityTier) {
        let it = i8::from(value);
        CAPABILITY_TIER_GLOBAL.store(it, Ordering::Release);
    }

    /// Clears the override, returning to automatic detection.
    pub fn clear_override() {
        CAPABILITY_TIER_GLOBAL.store(NOT_SET_VALUE, Ordering::Release);
    }

    /// Clears the cached detection result, forcing re-detection on the next [`detect`]
    /// call. Useful when the environment might have changed.
    pub fn clear_cache() {
        CAPABILITY_TIER_CACHED.store(NOT_SET_VALUE, Ordering::Release);
    }

    /// Get the cached detection result, if detection has run since the last
    /// [`clear_cache`].
    ///
    /// # Errors
    ///
    /// Returns `Err(())` if no cached value has been set yet.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_cached() -> Result<CapabilityTier, ()> {
        let it = CAPABILITY_TIER_CACHED.load(Ordering::Acquire);
        CapabilityTier::try_from(it)
    }

    /// Set the cached detection result.
    fn set_cached(value: CapabilityTier) {
        let it = i8::from(value);
        CAPABILITY_TIER_CACHED.store(it, Ordering::Release);
    }

    /// Get the override value, if [`set_override`] has been called since the last
    /// [`clear_override`].
    ///
    /// # Errors
    ///
    /// Returns `Err(())` if no override value has been set.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<CapabilityTier, ()> {
        let it = CAPABILITY_TIER_GLOBAL.load(Ordering::Acquire);
        CapabilityTier::try_from(it)
    }
}

/// Determine the capability tier heuristically from environment variables.
///
/// **Expensive, do not call repeatedly.** Each call performs several `env::var`
/// lookups and a tty check. Use [`global_capability::detect`], which memoizes, unless
/// the environment is known to have changed.
///
/// ## Detection logic
///
/// 1. `NO_COLOR`, `TERM=dumb`, or a non-tty stream (unless `IGNORE_IS_TERMINAL` is
///    set) floor the tier to [`CapabilityTier::Ansi16`]. The basic palette is always
///    safe to emit, so there is no separate "no color" level.
/// 2. Platform specific checks: `Apple_Terminal` tops out at 256 colors, `iTerm.app`
///    and modern Windows consoles do truecolor, and on Linux `COLORTERM=truecolor`
///    means what it says.
/// 3. `COLORTERM` set to anything, or running under CI, indicates truecolor.
/// 4. A `TERM` value ending in `256` / `256color` indicates the 256-entry palette.
/// 5. Anything else gets the basic palette.
#[must_use]
pub fn examine_env_vars_to_determine_capability(stream: Stream) -> CapabilityTier {
    if helpers::env_no_color()
        || env::var("TERM").is_ok_and(|v| v == "dumb")
        || !(helpers::is_a_tty(stream)
            || env::var("IGNORE_IS_TERMINAL").is_ok_and(|v| v != "0"))
    {
        return CapabilityTier::Ansi16;
    }

    if env::consts::OS == "macos" {
        if env::var("TERM_PROGRAM").is_ok_and(|v| v == "Apple_Terminal")
            && env::var("TERM").is_ok_and(|term| helpers::check_256_color(&term))
        {
            return CapabilityTier::Indexed256;
        }

        if env::var("TERM_PROGRAM").is_ok_and(|v| v == "iTerm.app")
            || env::var("COLORTERM").is_ok_and(|v| v == "truecolor")
        {
            return CapabilityTier::TrueColor;
        }
    }

    if env::consts::OS == "linux" && env::var("COLORTERM").is_ok_and(|v| v == "truecolor")
    {
        return CapabilityTier::TrueColor;
    }

    if env::consts::OS == "windows" {
        return CapabilityTier::TrueColor;
    }

    if env::var("COLORTERM").is_ok() || is_ci::uncached() {
        return CapabilityTier::TrueColor;
    }

    if env::var("TERM").is_ok_and(|term| helpers::check_256_color(&term)) {
        return CapabilityTier::Indexed256;
    }

    CapabilityTier::Ansi16
}

/// These trait implementations allow us to use `CapabilityTier` and `i8`
/// interchangeably, which is how the tier is stored in the atomics.
mod convert_between_tier_and_i8 {
    impl TryFrom<i8> for super::CapabilityTier {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(super::CapabilityTier::TrueColor),
                2 => Ok(super::CapabilityTier::Indexed256),
                3 => Ok(super::CapabilityTier::Ansi16),
                _ => Err(()),
            }
        }
    }

    impl From<super::CapabilityTier> for i8 {
        #[rustfmt::skip]
        fn from(value: super::CapabilityTier) -> Self {
            match value {
                super::CapabilityTier::TrueColor  => 1,
                super::CapabilityTier::Indexed256 => 2,
                super::CapabilityTier::Ansi16     => 3,
            }
        }
    }
}

mod helpers {
    use super::{Stream, as_str, env};

    #[must_use]
    pub fn is_a_tty(stream: Stream) -> bool {
        use std::io::IsTerminal;
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    #[must_use]
    pub fn check_256_color(term: &str) -> bool {
        term.ends_with("256") || term.ends_with("256color")
    }

    #[must_use]
    pub fn env_no_color() -> bool {
        match as_str(&env::var("NO_COLOR")) {
            Ok("0") | Err(_) => false,
            Ok(_) => true,
        }
    }
}

fn as_str<E>(option: &Result<String, E>) -> Result<&str, &E> {
    match option {
        Ok(inner) => Ok(inner),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    //! Tests for the override and cache plumbing. Environment examination itself is
    //! deliberately untested here: its result depends on the OS and the environment of
    //! the test runner. The `#[serial]` annotations ensure thread-safe testing of the
    //! global state.
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn cycle_1() {
        global_capability::set_override(CapabilityTier::TrueColor);
        assert_eq!(
            global_capability::try_get_override(),
            Ok(CapabilityTier::TrueColor)
        );
        global_capability::clear_override();
    }

    #[test]
    #[serial]
    fn cycle_2() {
        global_capability::set_override(CapabilityTier::Indexed256);
        assert_eq!(
            global_capability::try_get_override(),
            Ok(CapabilityTier::Indexed256)
        );
        global_capability::clear_override();
    }

    #[test]
    #[serial]
    fn cycle_3() {
        global_capability::set_override(CapabilityTier::Ansi16);
        assert_eq!(
            global_capability::try_get_override(),
            Ok(CapabilityTier::Ansi16)
        );
        global_capability::clear_override();
    }

    #[test]
    #[serial]
    fn cycle_4() {
        global_capability::clear_override();
        assert_eq!(global_capability::try_get_override(), Err(()));
    }

    #[test]
    #[serial]
    fn test_override_wins_over_cache() {
        global_capability::clear_override();
        global_capability::clear_cache();

        global_capability::set_override(CapabilityTier::Ansi16);
        assert_eq!(global_capability::detect(), CapabilityTier::Ansi16);

        // The override short circuits detection, so nothing was cached.
        assert!(global_capability::try_get_cached().is_err());

        global_capability::clear_override();
    }

    #[test]
    #[serial]
    fn test_caching_behavior() {
        // Clear any existing state.
        global_capability::clear_override();
        global_capability::clear_cache();

        // First call should detect and cache.
        let first_result = global_capability::detect();

        // Verify that cache now has a value.
        assert_eq!(global_capability::try_get_cached(), Ok(first_result));

        // Second call should return the same cached result.
        let second_result = global_capability::detect();
        assert_eq!(first_result, second_result);

        // Clear cache and verify it's cleared.
        global_capability::clear_cache();
        assert!(global_capability::try_get_cached().is_err());
    }

    #[test]
    fn test_tier_conversion() {
        // i8 to CapabilityTier.
        assert_eq!(CapabilityTier::try_from(1), Ok(CapabilityTier::TrueColor));
        assert_eq!(CapabilityTier::try_from(2), Ok(CapabilityTier::Indexed256));
        assert_eq!(CapabilityTier::try_from(3), Ok(CapabilityTier::Ansi16));
        assert_eq!(CapabilityTier::try_from(0), Err(()));
        assert_eq!(CapabilityTier::try_from(-1), Err(()));
        assert_eq!(CapabilityTier::try_from(4), Err(()));

        // CapabilityTier to i8, round trip.
        for tier in [
            CapabilityTier::TrueColor,
            CapabilityTier::Indexed256,
            CapabilityTier::Ansi16,
        ] {
            assert_eq!(CapabilityTier::try_from(i8::from(tier)), Ok(tier));
        }
    }

    #[test]
    fn test_check_256_color() {
        assert!(helpers::check_256_color("xterm-256color"));
        assert!(helpers::check_256_color("screen-256color"));
        assert!(helpers::check_256_color("vte-256"));
        assert!(!helpers::check_256_color("xterm"));
        assert!(!helpers::check_256_color("dumb"));
    }
}
