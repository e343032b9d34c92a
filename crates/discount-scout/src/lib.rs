// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Discount scout library: one-shot discount code reconnaissance.
//!
//! This library crate exposes the scan stages and report for integration
//! testing; the binary in `main.rs` is a thin CLI over [`scan::run_scan`].

pub mod acquisition;
pub mod candidate;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod probes;
pub mod report;
pub mod scan;
