//! Calculation logic for the bonus allocation engine.
//!
//! This module contains the three stages of an allocation run: the
//! qualification predicate, the seniority factor lookup, and the
//! allocator that derives per-region pools and distributes them across
//! qualifying employees.

mod allocator;
mod qualification;
mod seniority;
mod tenure;

pub use allocator::{calculate_bonuses, calculate_bonuses_today, region_pool};
pub use qualification::qualifies;
pub use seniority::{DEFAULT_SENIORITY_FACTOR, seniority_factor};
pub use tenure::tenure_years;
