//! System-level modules: logging setup.

pub mod logging;
