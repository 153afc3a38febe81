// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decide whether a real stdout / stderr accepts escape sequences.
//!
//! The answer is computed on every call, since the process may redirect its streams at
//! any point. An application can force the answer with
//! [`global_styling_policy::set_override`], eg: for a `--color=never` flag.

use crate::{Destination, TTYResult};
use std::{env, io::IsTerminal};

/// - [`StylingPolicy::Auto`]: style only if the stream is a terminal, `NO_COLOR` is not
///   set (or is `"0"`), and `TERM` is not `"dumb"`.
/// - [`StylingPolicy::Always`]: treat the stream as interactive.
/// - [`StylingPolicy::Never`]: treat the stream as not interactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StylingPolicy {
    #[default]
    Auto,
    Always,
    Never,
}

pub mod global_styling_policy {
    use super::StylingPolicy;
    use std::sync::atomic::{AtomicI8, Ordering};

    static STYLING_POLICY_GLOBAL: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    const NOT_SET_VALUE: i8 = -1;

    /// The policy in effect. [`StylingPolicy::Auto`] unless overridden.
    #[must_use]
    pub fn get() -> StylingPolicy {
        StylingPolicy::try_from(STYLING_POLICY_GLOBAL.load(Ordering::Acquire))
            .unwrap_or_default()
    }

    /// Force a policy for the whole process, regardless of the environment.
    ///
    /// # Testing support
    ///
    /// Any test that calls this must be annotated with `#[serial]` from the
    /// [serial_test](https://crates.io/crates/serial_test) crate, since tests run in
    /// parallel threads.
    pub fn set_override(value: StylingPolicy) {
        STYLING_POLICY_GLOBAL.store(i8::from(value), Ordering::Release);
    }

    pub fn clear_override() { STYLING_POLICY_GLOBAL.store(NOT_SET_VALUE, Ordering::Release); }
}

/// Probe a real stream, honoring [`global_styling_policy`].
#[must_use]
pub fn detect_interactivity(destination: Destination) -> TTYResult {
    match global_styling_policy::get() {
        StylingPolicy::Always => TTYResult::IsInteractive,
        StylingPolicy::Never => TTYResult::IsNotInteractive,
        StylingPolicy::Auto => examine_env_to_determine_interactivity(destination),
    }
}

/// The [`StylingPolicy::Auto`] rules. Prefer [`detect_interactivity`], which also takes
/// the override into account.
#[must_use]
pub fn examine_env_to_determine_interactivity(destination: Destination) -> TTYResult {
    if helpers::env_no_color() || helpers::env_term_is_dumb() {
        return TTYResult::IsNotInteractive;
    }
    TTYResult::from(helpers::is_a_tty(destination))
}

mod helpers {
    use super::{Destination, IsTerminal, env};

    pub fn is_a_tty(destination: Destination) -> bool {
        match destination {
            Destination::Standard => std::io::stdout().is_terminal(),
            Destination::Error => std::io::stderr().is_terminal(),
        }
    }

    /// <https://no-color.org/>
    pub fn env_no_color() -> bool {
        match env::var("NO_COLOR").as_deref() {
            Ok("0") | Err(_) => false,
            Ok(_) => true,
        }
    }

    pub fn env_term_is_dumb() -> bool { env::var("TERM").is_ok_and(|term| term == "dumb") }
}

mod convert_styling_policy_to_and_from_i8 {
    use super::StylingPolicy;

    impl TryFrom<i8> for StylingPolicy {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                0 => Ok(StylingPolicy::Auto),
                1 => Ok(StylingPolicy::Always),
                2 => Ok(StylingPolicy::Never),
                _ => Err(()),
            }
        }
    }

    impl From<StylingPolicy> for i8 {
        #[rustfmt::skip]
        fn from(value: StylingPolicy) -> Self {
            match value {
                StylingPolicy::Auto   => 0,
                StylingPolicy::Always => 1,
                StylingPolicy::Never  => 2,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    #[test]
    #[serial]
    fn override_wins_over_environment() {
        global_styling_policy::set_override(StylingPolicy::Always);
        assert_eq!(global_styling_policy::get(), StylingPolicy::Always);
        assert_eq!(
            detect_interactivity(Destination::Standard),
            TTYResult::IsInteractive
        );
        assert_eq!(detect_interactivity(Destination::Error), TTYResult::IsInteractive);

        global_styling_policy::set_override(StylingPolicy::Never);
        assert_eq!(
            detect_interactivity(Destination::Standard),
            TTYResult::IsNotInteractive
        );

        global_styling_policy::clear_override();
        assert_eq!(global_styling_policy::get(), StylingPolicy::Auto);
    }

    #[test]
    #[serial]
    fn auto_matches_env_rules() {
        global_styling_policy::clear_override();
        for destination in [Destination::Standard, Destination::Error] {
            assert_eq!(
                detect_interactivity(destination),
                examine_env_to_determine_interactivity(destination)
            );
        }
    }

    #[test]
    fn i8_conversion() {
        for policy in [StylingPolicy::Auto, StylingPolicy::Always, StylingPolicy::Never] {
            assert_eq!(StylingPolicy::try_from(i8::from(policy)), Ok(policy));
        }
        assert_eq!(StylingPolicy::try_from(-1), Err(()));
    }
}
