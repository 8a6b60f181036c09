//! Channel × period budget grid.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::config::{check_unique_axes, PlanConfig};
use crate::core::error::{PlanError, Result};
use crate::core::types::{Channel, ChannelId, Period, PeriodId, Spend};

/// One cell of the budget grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCell {
    pub channel_id: ChannelId,
    pub period_id: PeriodId,
    /// Planned spend in whole currency units.
    pub spend: Spend,
    /// Locked cells are kept fixed by planners.
    pub locked: bool,
    /// Relative media price, 100 = baseline.
    pub price_index: u32,
    /// Relative seasonal impact, 100 = baseline.
    pub seasonal_index: u32,
}

/// In-memory media plan: channels, periods and one cell per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPlan {
    channels: Vec<Channel>,
    periods: Vec<Period>,
    /// Channel-major: `cells[channel * periods.len() + period]`.
    cells: Vec<PlanCell>,
}

impl MediaPlan {
    /// Create a plan with zero spend and baseline indices everywhere.
    ///
    /// # Errors
    /// Returns `InvalidConfig` when a channel or period id repeats.
    pub fn new(channels: Vec<Channel>, periods: Vec<Period>, config: &PlanConfig) -> Result<Self> {
        check_unique_axes(&channels, &periods)?;
        let cells = channels
            .iter()
            .flat_map(|channel| {
                periods.iter().map(move |period| PlanCell {
                    channel_id: channel.id.clone(),
                    period_id: period.id.clone(),
                    spend: 0,
                    locked: false,
                    price_index: config.default_price_index,
                    seasonal_index: config.default_seasonal_index,
                })
            })
            .collect();

        Ok(Self {
            channels,
            periods,
            cells,
        })
    }

    /// Create a plan over the configured channels and periods.
    pub fn from_config(config: &PlanConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.channels.clone(), config.periods.clone(), config)
    }

    /// Seed spend values, e.g. from a mock data generator.
    pub fn with_spend<F>(mut self, mut spend: F) -> Self
    where
        F: FnMut(&ChannelId, &PeriodId) -> Spend,
    {
        for cell in &mut self.cells {
            cell.spend = spend(&cell.channel_id, &cell.period_id);
        }
        self
    }

    /// Cell at `(channel, period)`.
    pub fn cell(&self, channel: &ChannelId, period: &PeriodId) -> Option<&PlanCell> {
        self.index_of(channel, period).ok().map(|i| &self.cells[i])
    }

    /// Set the spend of one cell.
    pub fn set_spend(&mut self, channel: &ChannelId, period: &PeriodId, spend: Spend) -> Result<()> {
        let index = self.index_of(channel, period)?;
        self.cells[index].spend = spend;
        debug!(
            "event=spend_update module=plan status=ok channel={} period={} spend={}",
            channel, period, spend
        );
        Ok(())
    }

    /// Set the lock flag of one cell.
    pub fn set_locked(&mut self, channel: &ChannelId, period: &PeriodId, locked: bool) -> Result<()> {
        let index = self.index_of(channel, period)?;
        self.cells[index].locked = locked;
        Ok(())
    }

    /// Lock or unlock a whole channel row.
    pub fn set_channel_locked(&mut self, channel: &ChannelId, locked: bool) -> Result<()> {
        let row = self
            .channels
            .iter_mut()
            .find(|c| &c.id == channel)
            .ok_or_else(|| PlanError::unknown_channel(channel.as_str()))?;
        row.locked = locked;
        debug!(
            "event=channel_lock module=plan status=ok channel={} locked={}",
            channel, locked
        );
        Ok(())
    }

    /// Whether a cell is locked, either on its own or through its channel.
    pub fn is_locked(&self, channel: &ChannelId, period: &PeriodId) -> Result<bool> {
        let index = self.index_of(channel, period)?;
        let channel_locked = self.channels[index / self.periods.len()].locked;
        Ok(channel_locked || self.cells[index].locked)
    }

    /// Copy lock flags and price/seasonal indices from edited cells.
    ///
    /// Spend is left as it is in the plan. Cells whose `(channel, period)` is
    /// not part of the plan are ignored.
    pub fn apply_settings(&mut self, cells: &[PlanCell]) {
        let mut applied = 0usize;
        for cell in cells {
            if let Ok(index) = self.index_of(&cell.channel_id, &cell.period_id) {
                let target = &mut self.cells[index];
                target.locked = cell.locked;
                target.price_index = cell.price_index;
                target.seasonal_index = cell.seasonal_index;
                applied += 1;
            }
        }
        info!(
            "event=plan_settings_applied module=plan status=ok applied={} ignored={}",
            applied,
            cells.len() - applied
        );
    }

    /// Overwrite cells with edited copies, matched by `(channel, period)`.
    ///
    /// Cells whose `(channel, period)` is not part of the plan are ignored.
    pub fn replace_cells(&mut self, cells: &[PlanCell]) {
        let mut applied = 0usize;
        for cell in cells {
            if let Ok(index) = self.index_of(&cell.channel_id, &cell.period_id) {
                self.cells[index] = cell.clone();
                applied += 1;
            }
        }
        info!(
            "event=plan_cells_replaced module=plan status=ok applied={} ignored={}",
            applied,
            cells.len() - applied
        );
    }

    /// Total spend of one period across channels.
    pub fn period_total(&self, period: &PeriodId) -> Spend {
        self.cells
            .iter()
            .filter(|c| &c.period_id == period)
            .map(|c| c.spend)
            .sum()
    }

    /// Total spend of one channel across periods.
    pub fn channel_total(&self, channel: &ChannelId) -> Spend {
        self.cells
            .iter()
            .filter(|c| &c.channel_id == channel)
            .map(|c| c.spend)
            .sum()
    }

    /// Total spend of the plan.
    pub fn grand_total(&self) -> Spend {
        self.cells.iter().map(|c| c.spend).sum()
    }

    /// All cells, channel-major.
    #[inline]
    pub fn cells(&self) -> &[PlanCell] {
        &self.cells
    }

    #[inline]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    #[inline]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    fn index_of(&self, channel: &ChannelId, period: &PeriodId) -> Result<usize> {
        let row = self
            .channels
            .iter()
            .position(|c| &c.id == channel)
            .ok_or_else(|| PlanError::unknown_channel(channel.as_str()))?;
        let col = self
            .periods
            .iter()
            .position(|p| &p.id == period)
            .ok_or_else(|| PlanError::unknown_period(period.as_str()))?;
        Ok(row * self.periods.len() + col)
    }
}
