//! bcc-core: look up one setting in a Burp Suite user configuration file
//!
//! This crate keeps a small surface:
//! - Dotted key paths (`project_options.connections.proxy.enabled`)
//! - A resolver over `serde_json::Value` where arrays are transparent
//! - A locator that reads, parses and resolves, with an approximate line hint
//! - Platform default-path detection, isolated from everything else
//!
pub mod defaults;
pub mod error;
pub mod keypath;
pub mod locate;
pub mod resolve;

pub use defaults::{
    Environment, Platform, SystemEnvironment, default_config_path, default_config_path_for,
};
pub use error::{Error, Result};
pub use keypath::KeyPath;
pub use locate::{Finding, Locator, display_value, line_hint};
pub use resolve::{resolve, resolve_path};
pub use serde_json::Value;
