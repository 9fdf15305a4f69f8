//! Monocle provides validated connection profiles for Cosmos SDK chain clients,
//! along with the registry of protocol module basics a client needs in order to
//! bootstrap its encoding layer.
pub use error::ConfigError;

pub mod chain;
pub mod error;
pub mod modules;
