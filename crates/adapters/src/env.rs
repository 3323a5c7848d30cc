// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

fn parse_flag(var: &str) -> Option<bool> {
    std::env::var(var)
        .ok()
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

/// Include `Debug`-formatted results in traced listener logs (default: off).
pub fn trace_payloads() -> bool {
    parse_flag("RELAY_TRACE_PAYLOADS").unwrap_or(false)
}
