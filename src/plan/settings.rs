//! Draft editing of cell locks and price/seasonal indices.
//!
//! Edits go to a local copy of the plan's cells and only reach the plan on
//! [`AdvancedSettings::save`]. [`AdvancedSettings::reset`] throws the draft
//! away and copies the plan again. Spend is never part of the draft: saving
//! writes locks and indices only, so spend edited meanwhile survives.

use log::{debug, info};

use super::grid::{MediaPlan, PlanCell};
use super::input::parse_index;
use crate::core::config::PlanConfig;
use crate::core::types::{ChannelId, PeriodId};

/// Which index table an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Price,
    Seasonal,
}

/// Pending lock and index edits over a media plan.
#[derive(Debug, Clone)]
pub struct AdvancedSettings {
    draft: Vec<PlanCell>,
    default_price_index: u32,
    default_seasonal_index: u32,
}

impl AdvancedSettings {
    /// Start a draft from the plan's current cells.
    pub fn new(plan: &MediaPlan, config: &PlanConfig) -> Self {
        Self {
            draft: plan.cells().to_vec(),
            default_price_index: config.default_price_index,
            default_seasonal_index: config.default_seasonal_index,
        }
    }

    /// Toggle the lock of one draft cell.
    pub fn set_locked(&mut self, channel: &ChannelId, period: &PeriodId, locked: bool) {
        if let Some(cell) = self.cell_mut(channel, period) {
            cell.locked = locked;
        }
    }

    /// Set the price index of one draft cell from field input.
    pub fn set_price_index(&mut self, channel: &ChannelId, period: &PeriodId, input: &str) {
        self.set_index(IndexKind::Price, channel, period, input);
    }

    /// Set the seasonal index of one draft cell from field input.
    pub fn set_seasonal_index(&mut self, channel: &ChannelId, period: &PeriodId, input: &str) {
        self.set_index(IndexKind::Seasonal, channel, period, input);
    }

    /// Set either index from field input; unparsable input becomes the default.
    pub fn set_index(&mut self, kind: IndexKind, channel: &ChannelId, period: &PeriodId, input: &str) {
        let default = match kind {
            IndexKind::Price => self.default_price_index,
            IndexKind::Seasonal => self.default_seasonal_index,
        };
        let value = parse_index(input, default);
        if let Some(cell) = self.cell_mut(channel, period) {
            match kind {
                IndexKind::Price => cell.price_index = value,
                IndexKind::Seasonal => cell.seasonal_index = value,
            }
        }
    }

    /// Draft cell at `(channel, period)`.
    pub fn cell(&self, channel: &ChannelId, period: &PeriodId) -> Option<&PlanCell> {
        self.draft
            .iter()
            .find(|c| &c.channel_id == channel && &c.period_id == period)
    }

    /// True when a lock or index in the draft differs from the plan.
    pub fn is_dirty(&self, plan: &MediaPlan) -> bool {
        self.draft.len() != plan.cells().len()
            || self
                .draft
                .iter()
                .zip(plan.cells())
                .any(|(draft, cell)| !same_settings(draft, cell))
    }

    /// Write draft locks and indices into the plan.
    pub fn save(&self, plan: &mut MediaPlan) {
        plan.apply_settings(&self.draft);
        info!(
            "event=advanced_settings_save module=plan status=ok cells={}",
            self.draft.len()
        );
    }

    /// Discard draft edits and copy the plan's current cells.
    pub fn reset(&mut self, plan: &MediaPlan) {
        self.draft = plan.cells().to_vec();
        info!("event=advanced_settings_reset module=plan status=ok");
    }

    fn cell_mut(&mut self, channel: &ChannelId, period: &PeriodId) -> Option<&mut PlanCell> {
        let cell = self
            .draft
            .iter_mut()
            .find(|c| &c.channel_id == channel && &c.period_id == period);
        if cell.is_none() {
            debug!(
                "event=advanced_settings_edit module=plan status=rejected channel={} period={} reason=unknown_cell",
                channel, period
            );
        }
        cell
    }
}

fn same_settings(a: &PlanCell, b: &PlanCell) -> bool {
    a.channel_id == b.channel_id
        && a.period_id == b.period_id
        && a.locked == b.locked
        && a.price_index == b.price_index
        && a.seasonal_index == b.seasonal_index
}
