//! System utilities
//!
//! Platform-independent startup plumbing: logging initialization.

pub mod logging;

pub use logging::init_logging;
