//! dynqr - dynamic QR code redirect service
//!
//! A printed QR code encodes a stable scan URL (`/r/<slug>`); the target it
//! redirects to lives in the database and can be changed at any time.
//!
//! # Architecture
//! - `api`: HTTP routes (scan redirects, service root, health probe)
//! - `services`: slug resolution and slug administration
//! - `storage`: sea-orm backed slug store
//! - `analytics`: fire-and-forget visit counting
//! - `interfaces`: command-line administration
//! - `config`: configuration management
//! - `runtime`: application lifecycle and execution modes
//! - `system`: logging setup

pub mod analytics;
pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
