// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::future::Future;

use crate::transaction::ContractRequest;

pub mod recording;
pub mod tcp;

pub use recording::RecordingAdapter;
pub use tcp::{TcpAdapter, TcpAdapterError};

/// The adapter of the system under test. It is responsible for delivering requests to the
/// ledger; connection management and any retry policy belong here, not to the workload.
pub trait SutAdapter: Send + Sync {
    /// What the system under test returns for a submitted request.
    type Receipt;
    /// The error returned when a request cannot be submitted.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Submit a request to the system under test.
    fn send_request(
        &self,
        request: ContractRequest,
    ) -> impl Future<Output = Result<Self::Receipt, Self::Error>> + Send;
}
