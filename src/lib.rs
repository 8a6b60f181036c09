//! mediaplan - media-plan budget grid and percentage allocation engine.
//!
//! This crate provides:
//! - A model × period allocation matrix whose period columns always sum to 100
//! - Proportional rebalancing of a column after a single-cell edit
//! - A channel × period budget grid with spend, locks and price/seasonal indices
//! - Draft editing of locks and indices with save/reset
//! - Cursor navigation and input parsing for grid editors
//!
//! Everything is in-memory and synchronous. Logging goes through the `log`
//! facade; install a logger in the host application to see it.

pub mod allocation;
pub mod core;
pub mod plan;

pub use allocation::{parse_percent_input, AllocationMatrix};
pub use crate::core::{
    Channel, ChannelId, ModelId, Percent, Period, PeriodId, PlanConfig, PlanError, Result, Spend,
};
pub use plan::{AdvancedSettings, GridNavigator, MediaPlan, PlanCell};
