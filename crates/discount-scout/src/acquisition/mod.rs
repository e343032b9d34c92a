// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Fetching pages and pulling text out of them.

pub mod http_client;
pub mod pattern_engine;
