//! Expected amount per address.

use std::collections::HashMap;

use crate::config::ValidatorConfig;

/// Immutable address → expected amount lookup.
///
/// Built once at startup and shared read-only between request tasks, so no
/// locking is needed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpectedAmountTable {
    amounts: HashMap<String, f64>,
}

impl ExpectedAmountTable {
    pub fn from_config(config: &ValidatorConfig) -> Self {
        config
            .expected_amounts
            .iter()
            .map(|(address, amount)| (address.clone(), *amount))
            .collect()
    }

    /// Expected amount for `address`, if the address is known.
    pub fn expected(&self, address: &str) -> Option<f64> {
        self.amounts.get(address).copied()
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ExpectedAmountTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            amounts: iter.into_iter().map(|(a, v)| (a.into(), v)).collect(),
        }
    }
}
