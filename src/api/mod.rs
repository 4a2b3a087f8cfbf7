//! HTTP surface: scan redirects, the service root and the health probe.

pub mod services;
