//! Plan configuration.
//!
//! Defaults reproduce the standard dashboard setup: twelve calendar months,
//! six media channels, price and seasonal indices based on 100.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{PlanError, Result};
use super::types::{Channel, ModelId, Period};

/// Baseline value of price and seasonal indices.
pub const BASELINE_INDEX: u32 = 100;

const STANDARD_MONTHS: [(&str, &str); 12] = [
    ("jan", "Jan"),
    ("feb", "Feb"),
    ("mar", "Mar"),
    ("apr", "Apr"),
    ("may", "May"),
    ("jun", "Jun"),
    ("jul", "Jul"),
    ("aug", "Aug"),
    ("sep", "Sep"),
    ("oct", "Oct"),
    ("nov", "Nov"),
    ("dec", "Dec"),
];

const STANDARD_CHANNELS: [(&str, &str); 6] = [
    ("tv", "TV"),
    ("radio", "Radio"),
    ("social", "Social Media"),
    ("search", "Search"),
    ("display", "Display"),
    ("print", "Print"),
];

const STANDARD_MODELS: [(&str, &str); 5] = [
    ("predictify_roi", "Predictify ROI Model"),
    ("predictify_mmm", "Predictify MMM"),
    ("custom_model", "Custom Model"),
    ("attribution_model", "Attribution Model"),
    ("regression_model", "Regression Model"),
];

/// Media plan configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Price index given to new cells and to blank index input.
    pub default_price_index: u32,
    /// Seasonal index given to new cells and to blank index input.
    pub default_seasonal_index: u32,
    /// Column axis of the budget and allocation grids.
    pub periods: Vec<Period>,
    /// Row axis of the budget grid.
    pub channels: Vec<Channel>,
    /// Display names for known models.
    pub model_names: BTreeMap<ModelId, String>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            default_price_index: BASELINE_INDEX,
            default_seasonal_index: BASELINE_INDEX,
            periods: Self::standard_months(),
            channels: Self::standard_channels(),
            model_names: STANDARD_MODELS
                .iter()
                .map(|(id, name)| (ModelId::from(*id), name.to_string()))
                .collect(),
        }
    }
}

impl PlanConfig {
    /// Twelve calendar months, `jan` through `dec`.
    pub fn standard_months() -> Vec<Period> {
        STANDARD_MONTHS
            .iter()
            .map(|(id, label)| Period::new(*id, *label))
            .collect()
    }

    /// TV, radio, social, search, display and print.
    pub fn standard_channels() -> Vec<Channel> {
        STANDARD_CHANNELS
            .iter()
            .map(|(id, name)| Channel::new(*id, *name))
            .collect()
    }

    /// Set the period axis.
    pub fn with_periods(mut self, periods: Vec<Period>) -> Self {
        self.periods = periods;
        self
    }

    /// Set the channel axis.
    pub fn with_channels(mut self, channels: Vec<Channel>) -> Self {
        self.channels = channels;
        self
    }

    /// Set the default price index.
    pub fn with_default_price_index(mut self, index: u32) -> Self {
        self.default_price_index = index;
        self
    }

    /// Set the default seasonal index.
    pub fn with_default_seasonal_index(mut self, index: u32) -> Self {
        self.default_seasonal_index = index;
        self
    }

    /// Register a display name for a model.
    pub fn with_model_name(mut self, model: impl Into<ModelId>, name: impl Into<String>) -> Self {
        self.model_names.insert(model.into(), name.into());
        self
    }

    /// Display name of a model, falling back to the raw identifier.
    pub fn display_name<'a>(&'a self, model: &'a ModelId) -> &'a str {
        self.model_names
            .get(model)
            .map(String::as_str)
            .unwrap_or_else(|| model.as_str())
    }

    /// Check the configuration for values the grids cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.default_price_index == 0 {
            return Err(PlanError::invalid_config(
                "default_price_index must be positive",
            ));
        }
        if self.default_seasonal_index == 0 {
            return Err(PlanError::invalid_config(
                "default_seasonal_index must be positive",
            ));
        }
        check_unique_axes(&self.channels, &self.periods)
    }
}

/// Reject channel or period lists that repeat an id.
pub(crate) fn check_unique_axes(channels: &[Channel], periods: &[Period]) -> Result<()> {
    if let Some(dup) = first_duplicate(periods.iter().map(|p| p.id.as_str())) {
        return Err(PlanError::invalid_config(format!("duplicate period `{dup}`")));
    }
    if let Some(dup) = first_duplicate(channels.iter().map(|c| c.id.as_str())) {
        return Err(PlanError::invalid_config(format!("duplicate channel `{dup}`")));
    }
    Ok(())
}

fn first_duplicate<'a>(ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlanConfig::default();
        assert_eq!(config.periods.len(), 12);
        assert_eq!(config.periods[0].id.as_str(), "jan");
        assert_eq!(config.periods[11].label, "Dec");
        assert_eq!(config.channels.len(), 6);
        assert_eq!(config.default_price_index, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_display_name_fallback() {
        let config = PlanConfig::default();
        assert_eq!(
            config.display_name(&ModelId::from("predictify_mmm")),
            "Predictify MMM"
        );
        assert_eq!(config.display_name(&ModelId::from("in_house")), "in_house");
    }

    #[test]
    fn test_validate_rejects_zero_index() {
        let config = PlanConfig::default().with_default_price_index(0);
        assert!(matches!(
            config.validate(),
            Err(PlanError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_period() {
        let config = PlanConfig::default()
            .with_periods(vec![Period::new("jan", "Jan"), Period::new("jan", "January")]);
        assert!(config.validate().is_err());
    }
}
