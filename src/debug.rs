//! Debug printer control for udoc.
//!
//! Provides a thread-safe atomic flag gating all trace output and a function
//! to enable it programmatically (runs automatically at load, reading
//! `UDOC_DEBUG`; defaults to enabled when compiled in `cfg(test)`).

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

/// Atomic flag indicating whether trace output is enabled.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Initialise the debug atomic from the `UDOC_DEBUG` environment variable.
///
/// - Treats `"0"`, `"false"`, `"no"`, `"off"` as false.
/// - Any other value is true.
/// - If the variable is unset, defaults to true for tests, false otherwise.
pub fn init_from_env() {
    let enabled = match env::var("UDOC_DEBUG") {
        Ok(val) => {
            let val = val.trim();
            !(val == "0"
                || val.eq_ignore_ascii_case("false")
                || val.eq_ignore_ascii_case("no")
                || val.eq_ignore_ascii_case("off"))
        }
        Err(_) => cfg!(test),
    };
    set_debug(enabled);
}

/// Enable or disable trace output programmatically.
///
/// Intended for startup wiring (a host CLI mapping its own verbosity switch)
/// and for tests; trace points treat the flag as read-only once a run begins.
pub fn set_debug(enabled: bool) {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check whether trace output is enabled.
pub fn is_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Print one trace line to stdout when the global flag is enabled.
///
/// Format-style arguments, same as `println!`. Compiles to a flag check and
/// nothing else when disabled.
#[macro_export]
macro_rules! udoc_debug {
    ($($arg:tt)*) => {
        if $crate::debug::is_enabled() {
            println!($($arg)*);
        }
    };
}

/// Automatically initialise the flag at load time, respecting the env var.
#[ctor::ctor]
fn init_debug() {
    init_from_env();
}
