// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{collections::BTreeMap, fs, io, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigurationError, ConfigurationResult};

/// A trait for importing and exporting configuration objects.
pub trait ImportExport: Serialize + DeserializeOwned {
    /// Load the configuration object from a file in YAML format.
    fn load<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        let content = fs::read_to_string(&path)?;
        let object =
            serde_yaml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        Ok(object)
    }

    /// Print the configuration object to a file in YAML format.
    fn print<P: AsRef<Path>>(&self, path: P) -> Result<(), io::Error> {
        let content =
            serde_yaml::to_string(self).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        fs::write(&path, content)
    }
}

/// The user-provided arguments of a benchmark round.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct RoundArguments(BTreeMap<String, Value>);

impl RoundArguments {
    /// The key of the target contract identifier.
    pub const CONTRACT_ID: &'static str = "contractId";

    pub fn new() -> Self {
        Self::default()
    }

    /// Set an argument, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The target contract identifier. It must be present as a non-empty string.
    pub fn contract_id(&self) -> ConfigurationResult<&str> {
        match self.0.get(Self::CONTRACT_ID) {
            None | Some(Value::Null) => {
                Err(ConfigurationError::MissingArgument(Self::CONTRACT_ID))
            }
            Some(Value::String(id)) if !id.is_empty() => Ok(id.as_str()),
            Some(_) => Err(ConfigurationError::InvalidArgument(Self::CONTRACT_ID)),
        }
    }
}

/// Identifies a workload instance within a benchmark round.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct WorkerContext {
    /// The 0-based index of the worker running the workload.
    pub worker_index: u64,
    /// The number of workers participating in the round.
    pub total_workers: u64,
    /// The 0-based index of the current round.
    pub round_index: u64,
}

impl WorkerContext {
    pub fn new(worker_index: u64, total_workers: u64, round_index: u64) -> Self {
        Self {
            worker_index,
            total_workers,
            round_index,
        }
    }
}

impl Default for WorkerContext {
    fn default() -> Self {
        Self::new(0, 1, 0)
    }
}

/// The configuration of the standalone transaction generator.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GeneratorConfig {
    /// The identity of the generator within the round.
    #[serde(flatten)]
    pub worker: WorkerContext,
    /// The number of transactions to generate and submit.
    #[serde(default = "default_generator_config::default_transactions")]
    pub transactions: u64,
    /// Seed for the random source. Fresh entropy is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// The arguments of the round.
    #[serde(default)]
    pub round_arguments: RoundArguments,
}

impl GeneratorConfig {
    /// Create a new generator configuration for tests.
    pub fn new_for_tests() -> Self {
        GeneratorConfig {
            worker: WorkerContext::default(),
            transactions: 20,
            seed: Some(0),
            round_arguments: RoundArguments::new()
                .with(RoundArguments::CONTRACT_ID, "medicinecontract"),
        }
    }
}

mod default_generator_config {
    pub fn default_transactions() -> u64 {
        1_000
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            worker: WorkerContext::default(),
            transactions: default_generator_config::default_transactions(),
            seed: None,
            round_arguments: RoundArguments::default(),
        }
    }
}

impl ImportExport for GeneratorConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_id_lookup() {
        let args = RoundArguments::new().with("contractId", "abc123");
        assert_eq!(args.contract_id(), Ok("abc123"));

        let args = RoundArguments::new().with("txNumber", 10);
        assert_eq!(
            args.contract_id(),
            Err(ConfigurationError::MissingArgument("contractId"))
        );

        let args = RoundArguments::new().with("contractId", "");
        assert_eq!(
            args.contract_id(),
            Err(ConfigurationError::InvalidArgument("contractId"))
        );

        let args = RoundArguments::new().with("contractId", 42);
        assert_eq!(
            args.contract_id(),
            Err(ConfigurationError::InvalidArgument("contractId"))
        );
    }

    #[test]
    fn load_generator_config() {
        let yaml = "
worker_index: 2
total_workers: 4
round_index: 1
transactions: 50
round_arguments:
  contractId: abc123
  txNumber: 50
";
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), yaml).unwrap();

        let config = GeneratorConfig::load(file.path()).unwrap();
        assert_eq!(config.worker, WorkerContext::new(2, 4, 1));
        assert_eq!(config.transactions, 50);
        assert_eq!(config.seed, None);
        assert_eq!(config.round_arguments.contract_id(), Ok("abc123"));
        assert_eq!(config.round_arguments.get("txNumber"), Some(&Value::from(50)));
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "seed: 9\n").unwrap();

        let config = GeneratorConfig::load(file.path()).unwrap();
        assert_eq!(config.worker, WorkerContext::default());
        assert_eq!(config.transactions, 1_000);
        assert_eq!(config.seed, Some(9));
        assert!(config.round_arguments.contract_id().is_err());
    }

    #[test]
    fn print_then_load() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = GeneratorConfig::new_for_tests();
        config.print(file.path()).unwrap();

        let loaded = GeneratorConfig::load(file.path()).unwrap();
        assert_eq!(loaded.worker, config.worker);
        assert_eq!(loaded.round_arguments, config.round_arguments);
    }
}
