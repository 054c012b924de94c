//! # Utilities Module
//!
//! Integration glue that sits beside the core logger.

pub(crate) mod tracing_bridge;

pub use tracing_bridge::{console_layer, setup_logger, setup_logger_with_level, PrefixFormatter};
