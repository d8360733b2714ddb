//! Bonus allocation engine for two-region annual profit sharing.
//!
//! This crate computes annual bonus payouts for employees split across two
//! fixed regions: eligibility filtering, pool derivation, and proportional
//! allocation across qualifying employees, plus the thin collaborators
//! around the core (JSON/CSV import-export, snapshot persistence, default
//! configuration, and an HTTP endpoint).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
