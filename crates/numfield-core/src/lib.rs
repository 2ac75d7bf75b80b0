#![forbid(unsafe_code)]

//! Core: field options, symbol configuration, error taxonomy and edit events.

pub mod config;
pub mod error;
pub mod event;
pub mod logging;

pub use config::{ConfigError, NumFieldOptions, NumericMode, RangePolicy, Symbols};
pub use error::FieldError;
pub use event::RawChange;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};
