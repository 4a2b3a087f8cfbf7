//! Service layer
//!
//! Business logic shared by the HTTP handlers and the CLI.

pub mod resolver;
mod slug_service;

pub use resolver::{FallbackReason, RedirectResolver, Resolution};
pub use slug_service::*;
