// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI subcommand implementations for the discount-scout binary.

pub mod doctor;
pub mod scan_cmd;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise only warnings from this crate are
/// shown, or debug output with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "discount_scout=debug"
    } else {
        "discount_scout=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
