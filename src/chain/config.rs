//! The connection profile consumed by chain clients, and parse types for its
//! enum-like string fields. Profiles are plain data; transport and signing
//! layers read them after [`ChainClientConfig::validate()`] has passed.
use std::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{error::ConfigError, modules::ModuleRegistry};

/// Connection and signing parameters for one chain.
///
/// Profiles round-trip through TOML, JSON and YAML with kebab-case field
/// tags. The attached [`ModuleRegistry`] is never serialized and must be
/// re-attached after deserialization.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ChainClientConfig {
    /// Name of the keyring entry used for signing
    pub key: String,
    pub chain_id: String,
    #[serde(rename = "rpc-addr")]
    pub rpc_address: String,
    #[serde(rename = "grpc-addr")]
    pub grpc_address: String,
    /// The bech32 prefix of the chain's account addresses
    pub account_prefix: String,
    /// One of the [`KeyringBackend`] values
    pub keyring_backend: String,
    /// Multiplier applied to the simulated gas estimate
    pub gas_adjustment: f64,
    /// An `<amount><denom>` price string, e.g. `0.01uatom`
    pub gas_prices: String,
    pub key_directory: String,
    pub debug: bool,
    /// Per-request timeout, e.g. `20s`. Required.
    pub timeout: String,
    /// Block-wait timeout. Optional; an empty string means unset.
    pub block_timeout: String,
    /// One of the [`OutputFormat`] values
    pub output_format: String,
    /// One of the [`SignMode`] values
    pub sign_mode: String,
    #[serde(skip)]
    pub modules: ModuleRegistry,
}

impl ChainClientConfig {
    /// Checks that the profile's duration fields parse. `block-timeout` may
    /// be empty; `timeout` may not. Callers must not hand a profile to the
    /// transport layer before this has passed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_duration("timeout", &self.timeout)?;
        if !self.block_timeout.is_empty() {
            parse_duration("block-timeout", &self.block_timeout)?;
        }

        Ok(())
    }

    /// The parsed `timeout` field
    pub fn timeout_duration(&self) -> Result<Duration, ConfigError> {
        parse_duration("timeout", &self.timeout)
    }

    /// The parsed `block-timeout` field, or `None` when unset
    pub fn block_timeout_duration(&self) -> Result<Option<Duration>, ConfigError> {
        if self.block_timeout.is_empty() {
            return Ok(None);
        }

        parse_duration("block-timeout", &self.block_timeout).map(Some)
    }

    /// The RPC endpoint as a parsed [`Url`]
    pub fn rpc_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.rpc_address).map_err(|e| e.into())
    }

    /// The gRPC endpoint as a parsed [`Url`]
    pub fn grpc_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.grpc_address).map_err(|e| e.into())
    }
}

fn parse_duration(field: &'static str, value: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(value).map_err(|_| ConfigError::InvalidDurationFormat {
        field,
        value: value.to_string(),
    })
}

/// Secret storage backend selector
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyringBackend {
    Test,
    File,
    Os,
    Memory,
}

impl FromStr for KeyringBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "test" => Ok(KeyringBackend::Test),
            "file" => Ok(KeyringBackend::File),
            "os" => Ok(KeyringBackend::Os),
            "memory" => Ok(KeyringBackend::Memory),
            _ => Err(ConfigError::UnrecognizedOption {
                field: "keyring-backend",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for KeyringBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            KeyringBackend::Test => "test",
            KeyringBackend::File => "file",
            KeyringBackend::Os => "os",
            KeyringBackend::Memory => "memory",
        };

        write!(f, "{}", value)
    }
}

/// Client output rendering selector
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            _ => Err(ConfigError::UnrecognizedOption {
                field: "output-format",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        };

        write!(f, "{}", value)
    }
}

/// Transaction signing mode selector
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignMode {
    Direct,
    AminoJson,
}

impl FromStr for SignMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "direct" => Ok(SignMode::Direct),
            "amino-json" => Ok(SignMode::AminoJson),
            _ => Err(ConfigError::UnrecognizedOption {
                field: "sign-mode",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for SignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SignMode::Direct => "direct",
            SignMode::AminoJson => "amino-json",
        };

        write!(f, "{}", value)
    }
}

/// A gas price parsed from an `<amount><denom>` string such as `0.01uatom`
#[derive(Clone, Debug, PartialEq)]
pub struct GasPrice {
    pub amount: f64,
    pub denom: String,
}

impl FromStr for GasPrice {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let denom_start = value
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| ConfigError::InvalidGasPrice(format!("missing denom in '{}'", value)))?;
        let (amount, denom) = value.split_at(denom_start);
        let amount = amount
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidGasPrice(format!("unparseable amount in '{}'", value)))?;

        Ok(GasPrice {
            amount,
            denom: denom.to_string(),
        })
    }
}

impl fmt::Display for GasPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}
