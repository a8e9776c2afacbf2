//! Opt-in diagnostic output.
//!
//! The CLI flips this on with `--verbose`; stages then report timing and
//! request details on stderr through the `verbose!` macro.

use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Turn diagnostic output on or off for the whole process
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::SeqCst);
}

/// Whether diagnostic output is currently enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a formatted diagnostic line to stderr when verbose mode is on
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::verbose::is_verbose() {
            eprintln!("[voxchat] {}", format!($($arg)*));
        }
    };
}
