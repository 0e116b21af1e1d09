//! Configuration Module
//!
//! Client options and where they are loaded from.

pub mod loader;
pub mod options;

pub use loader::ConfigLoader;
pub use options::ClientConfig;
