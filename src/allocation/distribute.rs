//! Column arithmetic shared by matrix initialization and cell edits.

use crate::core::types::{div_round, Percent};

/// Split `amount` across `weights` proportionally, rounding each share
/// half up. Falls back to an equal split when all weights are zero.
///
/// Shares are rounded independently, so their sum may drift from `amount`
/// by up to half the number of weights. Callers fix the drift with
/// [`absorb_drift`].
pub fn proportional_split(amount: Percent, weights: &[Percent]) -> Vec<Percent> {
    if weights.is_empty() {
        return Vec::new();
    }

    let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if total == 0 {
        let share = div_round(u64::from(amount), weights.len() as u64) as Percent;
        return vec![share; weights.len()];
    }

    weights
        .iter()
        .map(|&w| div_round(u64::from(amount) * u64::from(w), total) as Percent)
        .collect()
}

/// Move `target - sum(values)` into `values`, starting at the first entry.
///
/// A surplus is added to the first entry. A deficit is taken from the first
/// entry and, once it reaches zero, from the following entries in order, so
/// no value goes negative. The deficit never exceeds the current sum, so the
/// column always lands exactly on `target`.
pub fn absorb_drift(values: &mut [Percent], target: Percent) {
    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    let target = u64::from(target);

    if sum < target {
        if let Some(first) = values.first_mut() {
            *first += (target - sum) as Percent;
        }
        return;
    }

    let mut deficit = sum - target;
    for value in values.iter_mut() {
        if deficit == 0 {
            break;
        }
        let taken = deficit.min(u64::from(*value));
        *value -= taken as Percent;
        deficit -= taken;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proportional_split_even() {
        assert_eq!(proportional_split(30, &[30, 30]), vec![15, 15]);
    }

    #[test]
    fn test_proportional_split_uneven() {
        // 50 * 20/60 = 16.67, 50 * 40/60 = 33.33
        assert_eq!(proportional_split(50, &[20, 40]), vec![17, 33]);
    }

    #[test]
    fn test_proportional_split_zero_weights() {
        assert_eq!(proportional_split(40, &[0, 0]), vec![20, 20]);
        assert_eq!(proportional_split(10, &[0, 0, 0]), vec![3, 3, 3]);
    }

    #[test]
    fn test_proportional_split_empty() {
        assert!(proportional_split(40, &[]).is_empty());
    }

    #[test]
    fn test_absorb_surplus_goes_to_first() {
        let mut values = vec![33, 33, 33];
        absorb_drift(&mut values, 100);
        assert_eq!(values, vec![34, 33, 33]);
    }

    #[test]
    fn test_absorb_deficit_from_first() {
        let mut values = vec![17, 17, 17, 17, 17, 17];
        absorb_drift(&mut values, 100);
        assert_eq!(values, vec![15, 17, 17, 17, 17, 17]);
    }

    #[test]
    fn test_absorb_deficit_spills_over() {
        let mut values = vec![1, 1, 1, 1];
        absorb_drift(&mut values, 2);
        assert_eq!(values, vec![0, 0, 1, 1]);
    }
}
