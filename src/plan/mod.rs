//! Media plan budget grid and its editing helpers.

pub mod grid;
pub mod input;
pub mod navigation;
pub mod settings;

pub use grid::{MediaPlan, PlanCell};
pub use input::{parse_index, parse_spend};
pub use navigation::{Direction, GridNavigator, GridPosition};
pub use settings::{AdvancedSettings, IndexKind};
