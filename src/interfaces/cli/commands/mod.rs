//! CLI command implementations

mod config_gen;
mod slug_management;

pub use config_gen::config_generate;
pub use slug_management::*;
