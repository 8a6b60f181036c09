//! Core data types for mediaplan.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer percentage share (0..=100).
pub type Percent = u32;

/// Whole-currency spend amount.
pub type Spend = u64;

/// Total every allocation column must sum to.
pub const FULL_ALLOCATION: Percent = 100;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw identifier.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Identifier of an allocation participant.
    ModelId
);

string_id!(
    /// Identifier of a time bucket (usually a month key such as `jan`).
    PeriodId
);

string_id!(
    /// Identifier of a media channel (`tv`, `search`, ...).
    ChannelId
);

/// A period with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub id: PeriodId,
    pub label: String,
}

impl Period {
    /// Create a new period.
    pub fn new(id: impl Into<PeriodId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A media channel row of the budget grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    #[serde(default)]
    pub locked: bool,
}

impl Channel {
    /// Create a new unlocked channel.
    pub fn new(id: impl Into<ChannelId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            locked: false,
        }
    }
}

/// Integer division rounded half away from zero, for non-negative operands.
///
/// Matches how a number field displays `a / b` rounded to a whole number.
#[inline]
pub(crate) fn div_round(numerator: u64, denominator: u64) -> u64 {
    debug_assert!(denominator > 0);
    (2 * numerator + denominator) / (2 * denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_round_half_up() {
        assert_eq!(div_round(100, 3), 33);
        assert_eq!(div_round(100, 6), 17);
        assert_eq!(div_round(1, 2), 1);
        assert_eq!(div_round(5, 2), 3);
        assert_eq!(div_round(100, 200), 1);
        assert_eq!(div_round(100, 201), 0);
    }

    #[test]
    fn test_ids_display_and_compare() {
        let a = ModelId::new("predictify_roi");
        assert_eq!(a.to_string(), "predictify_roi");
        assert_eq!(a, ModelId::from("predictify_roi"));
        assert_eq!(PeriodId::from("jan").as_str(), "jan");
    }
}
