// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::future::Future;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    adapter::SutAdapter,
    catalog,
    clock::{Clock, SystemClock},
    config::{RoundArguments, WorkerContext},
    error::{ConfigurationError, ConfigurationResult, WorkloadError},
    transaction::{ContractRequest, IssueDate, TransactionRecord},
};

/// The lifecycle hooks a benchmark harness drives on every worker.
pub trait WorkloadModule {
    /// Prepare the module for a new round.
    fn initialize(
        &mut self,
        context: WorkerContext,
        arguments: &RoundArguments,
    ) -> ConfigurationResult<()>;

    /// Generate one transaction and submit it through the adapter.
    fn submit_transaction<A: SutAdapter>(
        &mut self,
        adapter: &A,
    ) -> impl Future<Output = Result<A::Receipt, WorkloadError<A::Error>>> + Send;
}

/// The state a workload receives when a round starts.
#[derive(Clone, Debug)]
struct RoundState {
    context: WorkerContext,
    contract_id: String,
}

/// Generates synthetic `Issue` transactions, one medicine record per call. Each worker owns its
/// own instance; the transaction index is never shared nor reset, even across rounds.
pub struct IssueWorkload<C = SystemClock, R = StdRng> {
    /// The clock stamped into serial numbers.
    clock: C,
    /// The source of issue dates and prices.
    rng: R,
    /// The index of the last generated transaction, if any.
    last_tx_index: Option<u64>,
    /// Set by `initialize`.
    round: Option<RoundState>,
}

impl IssueWorkload {
    /// Create a workload using the system clock and a randomly seeded generator.
    pub fn new() -> Self {
        Self::with_sources(SystemClock, StdRng::from_entropy())
    }

    /// Create a workload whose random draws are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_sources(SystemClock, StdRng::seed_from_u64(seed))
    }
}

impl Default for IssueWorkload {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, R: Rng> IssueWorkload<C, R> {
    /// Create a workload with the given clock and random source.
    pub fn with_sources(clock: C, rng: R) -> Self {
        Self {
            clock,
            rng,
            last_tx_index: None,
            round: None,
        }
    }

    /// Store the round configuration. Calling it again replaces the round state but keeps the
    /// transaction index. Nothing is stored if the arguments are invalid.
    pub fn initialize(
        &mut self,
        context: WorkerContext,
        arguments: &RoundArguments,
    ) -> ConfigurationResult<()> {
        let contract_id = arguments.contract_id()?.to_string();
        tracing::debug!(
            "Worker {}/{} initialized for round {} on contract {contract_id}",
            context.worker_index,
            context.total_workers,
            context.round_index,
        );
        self.round = Some(RoundState {
            context,
            contract_id,
        });
        Ok(())
    }

    /// The index of the last generated transaction.
    pub fn last_tx_index(&self) -> Option<u64> {
        self.last_tx_index
    }

    /// The round configuration, if initialized.
    pub fn context(&self) -> Option<WorkerContext> {
        self.round.as_ref().map(|round| round.context)
    }

    pub fn contract_id(&self) -> Option<&str> {
        self.round.as_ref().map(|round| round.contract_id.as_str())
    }

    /// Generate the next transaction record.
    pub fn generate_transaction(&mut self) -> ConfigurationResult<TransactionRecord> {
        let context = self
            .round
            .as_ref()
            .map(|round| round.context)
            .ok_or(ConfigurationError::Uninitialized)?;

        let tx_index = self.last_tx_index.map_or(0, |i| i + 1);
        self.last_tx_index = Some(tx_index);

        let serial_number = TransactionRecord::serial_number(
            context.round_index,
            context.worker_index,
            tx_index,
            self.clock.now_millis(),
        );
        let issue_date = IssueDate::random(&mut self.rng);
        let price = self.rng.gen_range(0..=TransactionRecord::MAX_PRICE);

        Ok(TransactionRecord {
            tx_index,
            medicine_name: catalog::medicine_for(tx_index),
            serial_number,
            disease_name: catalog::disease_for(tx_index),
            issue_date,
            price,
        })
    }

    /// Build the request of a record against the round's contract.
    pub fn request(&self, record: &TransactionRecord) -> ConfigurationResult<ContractRequest> {
        let round = self.round.as_ref().ok_or(ConfigurationError::Uninitialized)?;
        Ok(ContractRequest::issue(&round.contract_id, record))
    }

    /// Submit a record through the adapter. The adapter's outcome is returned unmodified.
    pub async fn submit<A: SutAdapter>(
        &self,
        adapter: &A,
        record: &TransactionRecord,
    ) -> Result<A::Receipt, WorkloadError<A::Error>> {
        let request = self.request(record)?;
        adapter
            .send_request(request)
            .await
            .map_err(WorkloadError::Submission)
    }

    /// Generate the next transaction and submit it.
    pub async fn generate_and_submit<A: SutAdapter>(
        &mut self,
        adapter: &A,
    ) -> Result<A::Receipt, WorkloadError<A::Error>> {
        let record = self.generate_transaction()?;
        let request = self.request(&record)?;
        adapter
            .send_request(request)
            .await
            .map_err(WorkloadError::Submission)
    }
}

impl<C: Clock + Send, R: Rng + Send> WorkloadModule for IssueWorkload<C, R> {
    fn initialize(
        &mut self,
        context: WorkerContext,
        arguments: &RoundArguments,
    ) -> ConfigurationResult<()> {
        Self::initialize(self, context, arguments)
    }

    async fn submit_transaction<A: SutAdapter>(
        &mut self,
        adapter: &A,
    ) -> Result<A::Receipt, WorkloadError<A::Error>> {
        self.generate_and_submit(adapter).await
    }
}
