//! Tracing support for structural mutations and search visits.
//!
//! With the `tracing` feature enabled the `trace!` and `debug!` macros used
//! throughout the crate are the ones from `tracing`; without it they expand
//! to nothing.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    pub(crate) use tracing::{debug, trace};

    /// Installs a formatting subscriber that writes every event through the
    /// test writer. Safe to call more than once.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::TRACE)
                .with_test_writer()
                .try_init();
        });
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    macro_rules! trace {
        ($($arg:tt)*) => {{}};
    }

    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }

    pub(crate) use {debug, trace};
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
