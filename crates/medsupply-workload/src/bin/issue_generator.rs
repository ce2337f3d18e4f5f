// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use medsupply_workload::{
    adapter::{RecordingAdapter, SutAdapter, TcpAdapter},
    config::{GeneratorConfig, ImportExport, RoundArguments},
    workload::{IssueWorkload, WorkloadModule},
};

#[derive(Parser, Debug)]
#[clap(rename_all = "kebab-case")]
#[command(author, version, about = "Medical-supply issue transaction generator", long_about = None)]
struct Args {
    /// The configuration of the generator.
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// The address of the ledger gateway. Requests are only logged when absent.
    #[clap(long, value_name = "ADDRESS")]
    target: Option<SocketAddr>,
    /// The contract to issue transactions against (overrides the configuration).
    #[clap(long, value_name = "ID")]
    contract_id: Option<String>,
    /// The number of transactions to submit (overrides the configuration).
    #[clap(long, value_name = "INT")]
    transactions: Option<u64>,
}

/// Initialize the workload and submit the configured number of transactions, one at a time.
async fn run<W: WorkloadModule, A: SutAdapter>(
    mut workload: W,
    adapter: A,
    config: &GeneratorConfig,
) -> anyhow::Result<()> {
    workload
        .initialize(config.worker, &config.round_arguments)
        .context("Failed to initialize workload")?;

    tracing::info!("Submitting {} transactions...", config.transactions);
    for i in 0..config.transactions {
        if i % 1000 == 0 && i != 0 {
            tracing::debug!("Submitted {i} txs");
        }
        workload
            .submit_transaction(&adapter)
            .await
            .with_context(|| format!("Failed to submit transaction {i}"))?;
    }
    tracing::info!("Submitted {} transactions", config.transactions);
    Ok(())
}

/// The main function for the issue transaction generator.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = match args.config {
        Some(path) => GeneratorConfig::load(path).context("Failed to load generator config")?,
        None => GeneratorConfig::default(),
    };
    if let Some(contract_id) = args.contract_id {
        config.round_arguments = config
            .round_arguments
            .with(RoundArguments::CONTRACT_ID, contract_id);
    }
    if let Some(transactions) = args.transactions {
        config.transactions = transactions;
    }

    let _ = tracing_subscriber::fmt::try_init();

    let workload = match config.seed {
        Some(seed) => IssueWorkload::seeded(seed),
        None => IssueWorkload::new(),
    };

    match args.target {
        Some(address) => {
            let adapter = TcpAdapter::connect(address)
                .await
                .context("Failed to connect to the ledger gateway")?;
            run(workload, adapter, &config).await
        }
        None => {
            tracing::info!("No target provided, logging requests only");
            run(workload, RecordingAdapter::dry_run(), &config).await
        }
    }
}
