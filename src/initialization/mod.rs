//! Host-facing initialization.
//!
//! The batch processor itself is stateless, but embedding hosts need a
//! configured logger before invoking it. This module provides that setup.

mod logger;

pub use logger::init_logger_with;
