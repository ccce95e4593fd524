//! Logging hooks.
//!
//! Events are forwarded to `tracing` when the `tracing` feature is enabled and
//! compile to nothing otherwise, so the default build carries no logging
//! dependency.

/// Emits a `tracing` event at the given level (`trace`, `debug`, ...).
///
/// Arguments are forwarded verbatim to the matching `tracing` macro.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)+);
        }
    }};
}

pub(crate) use trace_event;
