// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Fixed lookup tables the workload cycles through.

/// The medicine names issued by the workload, in issue order.
pub const MEDICINE_NAMES: [&str; 11] = [
    "aspirin",
    "vicodin",
    "synthroid",
    "delasone",
    "amoxil",
    "neurontin",
    "zestril",
    "lipitor",
    "glucophage",
    "zofran",
    "ibuprofen",
];

/// The diseases attached to issued medicines, in issue order.
pub const DISEASE_NAMES: [&str; 9] = [
    "Pain management",
    "Thyroid deficiency",
    "Arthritis",
    "Bacterial infections",
    "Seizures",
    "Blood pressure",
    "High cholesterol",
    "Type 2 diabetes",
    "Fever",
];

/// The medicine issued by the transaction with the given index.
pub fn medicine_for(tx_index: u64) -> &'static str {
    MEDICINE_NAMES[(tx_index % MEDICINE_NAMES.len() as u64) as usize]
}

/// The disease attached to the transaction with the given index.
pub fn disease_for(tx_index: u64) -> &'static str {
    DISEASE_NAMES[(tx_index % DISEASE_NAMES.len() as u64) as usize]
}
