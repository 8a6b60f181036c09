//! Keyboard-style cursor movement over the budget grid.

use serde::{Deserialize, Serialize};

use super::grid::MediaPlan;
use crate::core::types::{ChannelId, PeriodId};

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A cell address in the budget grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub channel_id: ChannelId,
    pub period_id: PeriodId,
}

/// Cursor, selection and copy buffer over a grid's row/column axes.
#[derive(Debug, Clone, Default)]
pub struct GridNavigator {
    channels: Vec<ChannelId>,
    periods: Vec<PeriodId>,
    current: Option<(usize, usize)>,
    selection: Vec<(usize, usize)>,
    copy_buffer: Option<String>,
}

impl GridNavigator {
    /// Navigator over the plan's channels (rows) and periods (columns).
    pub fn new(plan: &MediaPlan) -> Self {
        Self::with_axes(
            plan.channels().iter().map(|c| c.id.clone()).collect(),
            plan.periods().iter().map(|p| p.id.clone()).collect(),
        )
    }

    /// Navigator over explicit axes.
    pub fn with_axes(channels: Vec<ChannelId>, periods: Vec<PeriodId>) -> Self {
        Self {
            channels,
            periods,
            ..Self::default()
        }
    }

    /// Put the cursor on a cell and select only it. Returns `false` for
    /// cells outside the grid.
    pub fn focus(&mut self, channel: &ChannelId, period: &PeriodId) -> bool {
        let row = self.channels.iter().position(|c| c == channel);
        let col = self.periods.iter().position(|p| p == period);
        match (row, col) {
            (Some(row), Some(col)) => {
                self.current = Some((row, col));
                self.selection = vec![(row, col)];
                true
            }
            _ => false,
        }
    }

    /// Add a cell to the selection without moving the cursor.
    pub fn extend_selection(&mut self, channel: &ChannelId, period: &PeriodId) -> bool {
        let row = self.channels.iter().position(|c| c == channel);
        let col = self.periods.iter().position(|p| p == period);
        match (row, col) {
            (Some(row), Some(col)) => {
                if !self.selection.contains(&(row, col)) {
                    self.selection.push((row, col));
                }
                true
            }
            _ => false,
        }
    }

    /// Move the cursor one cell, stopping at the grid edges.
    ///
    /// Without a focused cell this does nothing. Moving collapses the
    /// selection to the new position.
    pub fn move_cursor(&mut self, direction: Direction) -> Option<GridPosition> {
        let (row, col) = self.current?;
        let (row, col) = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(self.channels.len() - 1), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(self.periods.len() - 1)),
        };
        self.current = Some((row, col));
        self.selection = vec![(row, col)];
        Some(self.position(row, col))
    }

    /// Current cursor position.
    pub fn current(&self) -> Option<GridPosition> {
        self.current.map(|(row, col)| self.position(row, col))
    }

    /// Selected cells in selection order.
    pub fn selection(&self) -> Vec<GridPosition> {
        self.selection
            .iter()
            .map(|&(row, col)| self.position(row, col))
            .collect()
    }

    /// Copy the selected addresses as `period,channel;period,channel`.
    pub fn copy_selection(&mut self) -> Option<&str> {
        if self.selection.is_empty() {
            return None;
        }
        let text = self
            .selection
            .iter()
            .map(|&(row, col)| format!("{},{}", self.periods[col], self.channels[row]))
            .collect::<Vec<_>>()
            .join(";");
        self.copy_buffer = Some(text);
        self.copy_buffer.as_deref()
    }

    /// Last copied selection.
    pub fn copy_buffer(&self) -> Option<&str> {
        self.copy_buffer.as_deref()
    }

    fn position(&self, row: usize, col: usize) -> GridPosition {
        GridPosition {
            channel_id: self.channels[row].clone(),
            period_id: self.periods[col].clone(),
        }
    }
}
