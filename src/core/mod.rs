//! Core types and utilities for mediaplan.

pub mod config;
pub mod error;
pub mod types;

pub use config::{PlanConfig, BASELINE_INDEX};
pub use error::{PlanError, Result};
pub use types::*;
