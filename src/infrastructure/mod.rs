//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, so paths
//! coming from user configuration are rewritten before use.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
