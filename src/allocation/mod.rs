//! Percentage allocation of models across periods.

pub mod distribute;
pub mod matrix;

pub use distribute::{absorb_drift, proportional_split};
pub use matrix::{parse_percent_input, AllocationMatrix};
