//! Core data models for the bonus allocation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allocation_result;
mod employee;
mod settings;

pub use allocation_result::{CalcResult, EmployeeResult, RegionResult, RegionResults};
pub use employee::{Employee, Level, Region};
pub use settings::{LevelFactors, Settings, SeniorityBand, Shares};
