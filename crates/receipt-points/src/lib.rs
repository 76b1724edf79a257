//! Building blocks for the receipt reward-points service: the receipt domain
//! model, the rule-based scoring engine, storage abstraction, and the HTTP
//! router, plus the configuration and telemetry glue the binaries share.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
