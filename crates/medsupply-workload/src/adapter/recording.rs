// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{
    convert::Infallible,
    sync::{Arc, Mutex, PoisonError},
};

use super::SutAdapter;
use crate::transaction::ContractRequest;

/// An in-memory adapter that keeps every request it receives. Submissions never fail and
/// return the position of the request in the recording.
#[derive(Clone, Default)]
pub struct RecordingAdapter {
    requests: Arc<Mutex<Vec<ContractRequest>>>,
    /// Whether to log every request as it is received.
    log_requests: bool,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter that logs every request (as JSON) on top of recording it.
    pub fn dry_run() -> Self {
        Self {
            log_requests: true,
            ..Self::default()
        }
    }

    /// A copy of the requests received so far, in submission order.
    pub fn requests(&self) -> Vec<ContractRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SutAdapter for RecordingAdapter {
    type Receipt = usize;
    type Error = Infallible;

    async fn send_request(&self, request: ContractRequest) -> Result<usize, Infallible> {
        if self.log_requests {
            match serde_json::to_string(&request) {
                Ok(json) => tracing::info!("{json}"),
                Err(e) => tracing::warn!("Cannot serialize request for logging: {e}"),
            }
        }

        let mut requests = self.requests.lock().unwrap_or_else(PoisonError::into_inner);
        requests.push(request);
        Ok(requests.len() - 1)
    }
}
