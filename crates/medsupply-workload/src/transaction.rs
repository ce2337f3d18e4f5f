// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The contract function invoked by every generated transaction.
pub const ISSUE_FUNCTION: &str = "Issue";
/// The identity submitting the generated transactions.
pub const INVOKER_IDENTITY: &str = "alice";

/// An issue date in the `YYYY.MM.DD` format expected by the contract. The day is never
/// checked against the month, so dates such as `2023.02.31` can be produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IssueDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl IssueDate {
    pub const YEARS: std::ops::RangeInclusive<u16> = 2020..=2029;
    pub const MONTHS: std::ops::RangeInclusive<u8> = 1..=12;
    pub const DAYS: std::ops::RangeInclusive<u8> = 1..=31;

    /// Draw a date uniformly from the supported ranges.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            year: rng.gen_range(Self::YEARS),
            month: rng.gen_range(Self::MONTHS),
            day: rng.gen_range(Self::DAYS),
        }
    }
}

impl Display for IssueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}.{:02}", self.year, self.month, self.day)
    }
}

/// One synthetic medicine record, built fresh for every submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionRecord {
    /// The index of the transaction within its workload instance.
    pub tx_index: u64,
    pub medicine_name: &'static str,
    /// `{round}_{worker}_{tx_index}_{unix_millis}`.
    pub serial_number: String,
    pub disease_name: &'static str,
    pub issue_date: IssueDate,
    pub price: u16,
}

impl TransactionRecord {
    /// The upper bound (inclusive) of generated prices.
    pub const MAX_PRICE: u16 = 999;

    /// Compose the serial number of a transaction.
    pub fn serial_number(
        round_index: u64,
        worker_index: u64,
        tx_index: u64,
        millis: u64,
    ) -> String {
        format!("{round_index}_{worker_index}_{tx_index}_{millis}")
    }

    /// The positional arguments of the `Issue` contract function.
    pub fn contract_arguments(&self) -> Vec<String> {
        vec![
            self.medicine_name.to_string(),
            self.serial_number.clone(),
            self.disease_name.to_string(),
            self.issue_date.to_string(),
            self.price.to_string(),
        ]
    }
}

/// A request handed to the system-under-test adapter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRequest {
    pub contract_id: String,
    pub contract_function: String,
    pub invoker_identity: String,
    pub contract_arguments: Vec<String>,
    pub read_only: bool,
}

impl ContractRequest {
    /// Build the `Issue` request for a record against the given contract.
    pub fn issue(contract_id: &str, record: &TransactionRecord) -> Self {
        Self {
            contract_id: contract_id.to_string(),
            contract_function: ISSUE_FUNCTION.to_string(),
            invoker_identity: INVOKER_IDENTITY.to_string(),
            contract_arguments: record.contract_arguments(),
            read_only: false,
        }
    }
}
