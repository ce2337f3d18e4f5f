// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

/// Errors raised while configuring a workload module for a round.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Missing required round argument '{0}'")]
    MissingArgument(&'static str),
    #[error("Round argument '{0}' must be a non-empty string")]
    InvalidArgument(&'static str),
    #[error("Workload module used before initialization")]
    Uninitialized,
}

/// The error returned when generating and submitting a transaction. Failures of the
/// submission adapter are carried untouched in the `Submission` variant.
#[derive(thiserror::Error, Debug)]
pub enum WorkloadError<E> {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Submission(E),
}

impl<E> WorkloadError<E> {
    /// Return the adapter error, if this is a submission failure.
    pub fn into_submission(self) -> Option<E> {
        match self {
            WorkloadError::Submission(e) => Some(e),
            WorkloadError::Configuration(_) => None,
        }
    }
}
