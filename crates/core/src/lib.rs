//! Core for tally: the breakdown configuration model and the table
//! provisioning planner.
//!
//! Everything here is either pure (config parsing, planning, formatting) or
//! talks to storage through the [`storage::TableBackend`] trait, so the binary
//! decides which backend is used.

pub mod config;
pub mod planning;
pub mod storage;
