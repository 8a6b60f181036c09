//! Model × period percentage allocation matrix.
//!
//! Every period column of a non-empty matrix sums to exactly 100. Single-cell
//! edits re-divide the remainder among the other models of that column in
//! proportion to their current shares; rounding drift lands on the first
//! other model in caller order.

use log::debug;
use serde::{Deserialize, Serialize};

use super::distribute::{absorb_drift, proportional_split};
use crate::core::error::{PlanError, Result};
use crate::core::types::{div_round, ModelId, Percent, Period, PeriodId, FULL_ALLOCATION};

/// Percentage grid over selected models (rows) and periods (columns).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationMatrix {
    models: Vec<ModelId>,
    periods: Vec<Period>,
    /// `values[model][period]`.
    values: Vec<Vec<Percent>>,
}

impl AllocationMatrix {
    /// Build a matrix giving every model an equal share of each period.
    ///
    /// The default share is `100 / models` rounded half up. Where that leaves
    /// a column off 100, the first model absorbs the difference. With no
    /// models the matrix is empty but keeps the period axis.
    pub fn initialize(models: Vec<ModelId>, periods: Vec<Period>) -> Self {
        let models = dedup_models(models);
        let mut matrix = Self {
            values: vec![vec![0; periods.len()]; models.len()],
            models,
            periods,
        };
        matrix.fill_defaults();
        matrix
    }

    /// Replace the model selection and reset every column to equal shares.
    pub fn set_models(&mut self, models: Vec<ModelId>) {
        self.models = dedup_models(models);
        self.values = vec![vec![0; self.periods.len()]; self.models.len()];
        self.fill_defaults();
    }

    fn fill_defaults(&mut self) {
        let count = self.models.len();
        debug!(
            "event=allocation_init module=allocation status=ok models={} periods={}",
            count,
            self.periods.len()
        );
        if count == 0 {
            return;
        }

        let default_share = div_round(u64::from(FULL_ALLOCATION), count as u64) as Percent;
        for period in 0..self.periods.len() {
            let mut column = vec![default_share; count];
            absorb_drift(&mut column, FULL_ALLOCATION);
            self.write_column(period, &column);
        }
    }

    /// Set one cell and rebalance the rest of its column.
    ///
    /// Invalid edits leave the matrix untouched and return `false`.
    pub fn set_cell(&mut self, model: &ModelId, period: &PeriodId, value: i64) -> bool {
        self.try_set_cell(model, period, value).is_ok()
    }

    /// Set one cell and rebalance the rest of its column, reporting why an
    /// edit was rejected.
    ///
    /// # Errors
    /// - `InvalidAllocationInput` when `value` is outside `0..=100` or the
    ///   model is the only one selected.
    /// - `UnknownModel` / `UnknownPeriod` when the cell does not exist.
    ///
    /// On error the matrix is unchanged.
    pub fn try_set_cell(&mut self, model: &ModelId, period: &PeriodId, value: i64) -> Result<()> {
        let result = self.apply_edit(model, period, value);
        if let Err(err) = &result {
            debug!(
                "event=allocation_edit module=allocation status=rejected model={} period={} value={} reason=\"{}\"",
                model, period, value, err
            );
        }
        result
    }

    fn apply_edit(&mut self, model: &ModelId, period: &PeriodId, value: i64) -> Result<()> {
        if !(0..=i64::from(FULL_ALLOCATION)).contains(&value) {
            return Err(PlanError::invalid_allocation(format!(
                "{value} is outside 0..={FULL_ALLOCATION}"
            )));
        }
        let value = value as Percent;
        let row = self
            .model_index(model)
            .ok_or_else(|| PlanError::unknown_model(model.as_str()))?;
        let col = self
            .period_index(period)
            .ok_or_else(|| PlanError::unknown_period(period.as_str()))?;

        let others: Vec<usize> = (0..self.models.len()).filter(|&i| i != row).collect();
        if others.is_empty() {
            return Err(PlanError::invalid_allocation(format!(
                "no other model to absorb the remainder of `{model}`"
            )));
        }

        let remaining = FULL_ALLOCATION - value;
        let current: Vec<Percent> = others.iter().map(|&i| self.values[i][col]).collect();
        let mut shares = proportional_split(remaining, &current);
        absorb_drift(&mut shares, remaining);

        self.values[row][col] = value;
        for (&i, &share) in others.iter().zip(shares.iter()) {
            self.values[i][col] = share;
        }
        Ok(())
    }

    /// Mean of a model's row over all periods, rounded half up.
    ///
    /// Unknown models and matrices without periods report 0.
    pub fn column_average(&self, model: &ModelId) -> Percent {
        let Some(row) = self.model_index(model) else {
            return 0;
        };
        let cells = &self.values[row];
        if cells.is_empty() {
            return 0;
        }
        let total: u64 = cells.iter().map(|&v| u64::from(v)).sum();
        div_round(total, cells.len() as u64) as Percent
    }

    /// Value of one cell.
    pub fn get(&self, model: &ModelId, period: &PeriodId) -> Option<Percent> {
        let row = self.model_index(model)?;
        let col = self.period_index(period)?;
        Some(self.values[row][col])
    }

    /// Values of one period across models, in model order.
    pub fn column(&self, period: &PeriodId) -> Option<Vec<Percent>> {
        let col = self.period_index(period)?;
        Some(self.values.iter().map(|row| row[col]).collect())
    }

    /// Sum of a period column. Zero for an empty matrix.
    pub fn period_total(&self, period: &PeriodId) -> Option<Percent> {
        self.column(period).map(|column| column.iter().sum())
    }

    /// Rows in model order, each with its per-period values.
    pub fn rows(&self) -> impl Iterator<Item = (&ModelId, &[Percent])> {
        self.models
            .iter()
            .zip(self.values.iter().map(Vec::as_slice))
    }

    /// Selected models in caller order.
    #[inline]
    pub fn models(&self) -> &[ModelId] {
        &self.models
    }

    /// Periods in caller order.
    #[inline]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// True when no model is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    fn model_index(&self, model: &ModelId) -> Option<usize> {
        self.models.iter().position(|m| m == model)
    }

    fn period_index(&self, period: &PeriodId) -> Option<usize> {
        self.periods.iter().position(|p| &p.id == period)
    }

    fn write_column(&mut self, col: usize, column: &[Percent]) {
        for (row, &value) in self.values.iter_mut().zip(column) {
            row[col] = value;
        }
    }
}

/// Parse a percentage typed into a grid cell.
///
/// Accepts surrounding whitespace and an optional sign. Range checks are left
/// to [`AllocationMatrix::try_set_cell`].
pub fn parse_percent_input(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| PlanError::invalid_allocation(format!("`{trimmed}` is not a whole number")))
}

fn dedup_models(models: Vec<ModelId>) -> Vec<ModelId> {
    let mut unique: Vec<ModelId> = Vec::with_capacity(models.len());
    for model in models {
        if unique.contains(&model) {
            debug!(
                "event=allocation_init module=allocation status=skipped duplicate_model={}",
                model
            );
            continue;
        }
        unique.push(model);
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<ModelId> {
        names.iter().map(|n| ModelId::from(*n)).collect()
    }

    fn months(names: &[&str]) -> Vec<Period> {
        names.iter().map(|n| Period::new(*n, *n)).collect()
    }

    /// Matrix with a single period holding the given values.
    fn single_period(values: &[(&str, i64)]) -> AllocationMatrix {
        let models: Vec<&str> = values.iter().map(|(m, _)| *m).collect();
        let mut matrix = AllocationMatrix::initialize(ids(&models), months(&["Jan"]));
        let jan = PeriodId::from("Jan");
        for row in 0..values.len() {
            matrix.values[row][0] = values[row].1 as Percent;
        }
        assert_eq!(matrix.period_total(&jan), Some(100));
        matrix
    }

    #[test]
    fn test_initialize_three_models() {
        let matrix = AllocationMatrix::initialize(ids(&["A", "B", "C"]), months(&["Jan"]));
        assert_eq!(matrix.column(&"Jan".into()), Some(vec![34, 33, 33]));
    }

    #[test]
    fn test_initialize_single_model() {
        let matrix = AllocationMatrix::initialize(ids(&["A"]), months(&["Jan"]));
        assert_eq!(matrix.get(&"A".into(), &"Jan".into()), Some(100));
    }

    #[test]
    fn test_initialize_six_models_rounds_down_first() {
        // 100 / 6 rounds to 17, six of them overshoot by 2.
        let matrix =
            AllocationMatrix::initialize(ids(&["A", "B", "C", "D", "E", "F"]), months(&["Jan"]));
        assert_eq!(matrix.column(&"Jan".into()), Some(vec![15, 17, 17, 17, 17, 17]));
    }

    #[test]
    fn test_initialize_empty() {
        let matrix = AllocationMatrix::initialize(Vec::new(), months(&["Jan", "Feb"]));
        assert!(matrix.is_empty());
        assert_eq!(matrix.periods().len(), 2);
        assert_eq!(matrix.period_total(&"Jan".into()), Some(0));
        assert_eq!(matrix.get(&"A".into(), &"Jan".into()), None);
    }

    #[test]
    fn test_initialize_drops_duplicate_models() {
        let matrix = AllocationMatrix::initialize(ids(&["A", "B", "A"]), months(&["Jan"]));
        assert_eq!(matrix.models(), ids(&["A", "B"]).as_slice());
        assert_eq!(matrix.column(&"Jan".into()), Some(vec![50, 50]));
    }

    #[test]
    fn test_set_cell_proportional() {
        let mut matrix = single_period(&[("A", 40), ("B", 30), ("C", 30)]);
        assert!(matrix.set_cell(&"A".into(), &"Jan".into(), 70));
        assert_eq!(matrix.column(&"Jan".into()), Some(vec![70, 15, 15]));
    }

    #[test]
    fn test_set_cell_zero_others_split_equally() {
        let mut matrix = single_period(&[("A", 100), ("B", 0), ("C", 0)]);
        assert!(matrix.set_cell(&"A".into(), &"Jan".into(), 60));
        assert_eq!(matrix.column(&"Jan".into()), Some(vec![60, 20, 20]));
    }

    #[test]
    fn test_set_cell_drift_to_first_other() {
        // Remaining 67 split over 33/33: 33.5 each rounds to 34, overshoot 1.
        let mut matrix = single_period(&[("A", 34), ("B", 33), ("C", 33)]);
        assert!(matrix.set_cell(&"A".into(), &"Jan".into(), 33));
        assert_eq!(matrix.column(&"Jan".into()), Some(vec![33, 33, 34]));
    }

    #[test]
    fn test_set_cell_rejects_out_of_range() {
        let mut matrix = single_period(&[("A", 40), ("B", 60)]);
        let before = matrix.clone();
        assert!(!matrix.set_cell(&"A".into(), &"Jan".into(), -5));
        assert!(!matrix.set_cell(&"A".into(), &"Jan".into(), 150));
        assert_eq!(matrix, before);
    }

    #[test]
    fn test_try_set_cell_errors() {
        let mut matrix = AllocationMatrix::initialize(ids(&["A"]), months(&["Jan"]));
        assert!(matches!(
            matrix.try_set_cell(&"A".into(), &"Jan".into(), 50),
            Err(PlanError::InvalidAllocationInput { .. })
        ));
        assert!(matches!(
            matrix.try_set_cell(&"Z".into(), &"Jan".into(), 50),
            Err(PlanError::UnknownModel { .. })
        ));
        assert!(matches!(
            matrix.try_set_cell(&"A".into(), &"Dec".into(), 50),
            Err(PlanError::UnknownPeriod { .. })
        ));
        assert_eq!(matrix.get(&"A".into(), &"Jan".into()), Some(100));
    }

    #[test]
    fn test_set_cell_same_value_is_stable() {
        let mut matrix = single_period(&[("A", 34), ("B", 33), ("C", 33)]);
        let before = matrix.clone();
        for _ in 0..5 {
            assert!(matrix.set_cell(&"B".into(), &"Jan".into(), 33));
        }
        assert_eq!(matrix, before);
    }

    #[test]
    fn test_set_cell_leaves_other_periods() {
        let mut matrix = AllocationMatrix::initialize(ids(&["A", "B"]), months(&["Jan", "Feb"]));
        assert!(matrix.set_cell(&"B".into(), &"Feb".into(), 90));
        assert_eq!(matrix.column(&"Jan".into()), Some(vec![50, 50]));
        assert_eq!(matrix.column(&"Feb".into()), Some(vec![10, 90]));
    }

    #[test]
    fn test_column_average() {
        let mut matrix = AllocationMatrix::initialize(ids(&["A", "B"]), months(&["Jan", "Feb"]));
        assert!(matrix.set_cell(&"A".into(), &"Jan".into(), 40));
        assert!(matrix.set_cell(&"A".into(), &"Feb".into(), 60));
        assert_eq!(matrix.column_average(&"A".into()), 50);
        assert_eq!(matrix.column_average(&"B".into()), 50);
        assert_eq!(matrix.column_average(&"Z".into()), 0);
    }

    #[test]
    fn test_set_models_resets_shares() {
        let mut matrix = AllocationMatrix::initialize(ids(&["A", "B"]), months(&["Jan"]));
        assert!(matrix.set_cell(&"A".into(), &"Jan".into(), 80));
        matrix.set_models(ids(&["A", "B", "C", "D"]));
        assert_eq!(matrix.column(&"Jan".into()), Some(vec![25, 25, 25, 25]));
    }

    #[test]
    fn test_parse_percent_input() {
        assert_eq!(parse_percent_input(" 42 "), Ok(42));
        assert_eq!(parse_percent_input("-5"), Ok(-5));
        assert!(matches!(
            parse_percent_input("abc"),
            Err(PlanError::InvalidAllocationInput { .. })
        ));
        assert!(parse_percent_input("").is_err());
    }
}
