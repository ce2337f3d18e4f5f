// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

pub mod adapter;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod transaction;
pub mod workload;
