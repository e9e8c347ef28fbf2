//! Currency code to display-label mapping for amount-in-words output

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::VoucherResult;
use crate::words::amount_in_words;

/// Immutable lookup table from ISO currency codes to the display
/// labels printed on checks. Passed into callers as configuration
/// rather than held as process-wide state, so unrecognized deployments
/// can carry their own table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyTable {
    labels: HashMap<String, String>,
}

impl Default for CurrencyTable {
    /// The standard deployment table
    fn default() -> Self {
        let mut labels = HashMap::new();
        for (code, label) in [
            ("USD", "US Dollars"),
            ("PHP", "Pesos"),
            ("CAD", "Canadian Dollars"),
            ("EUR", "Euros"),
            ("SGD", "Singapore Dollars"),
        ] {
            labels.insert(code.to_string(), label.to_string());
        }
        Self { labels }
    }
}

impl CurrencyTable {
    /// An empty table; every lookup falls back to the raw code
    pub fn empty() -> Self {
        Self {
            labels: HashMap::new(),
        }
    }

    /// Add or replace a label for a currency code
    pub fn with_label(mut self, code: &str, label: &str) -> Self {
        self.labels.insert(code.to_string(), label.to_string());
        self
    }

    /// Display label for a code, falling back to the code itself when
    /// it is not in the table
    pub fn label<'a>(&'a self, code: &'a str) -> &'a str {
        self.labels.get(code).map(String::as_str).unwrap_or(code)
    }

    /// Render an amount in words using this table's label for `code`
    pub fn words_for(&self, amount: &BigDecimal, code: &str) -> VoucherResult<String> {
        amount_in_words(amount, self.label(code))
    }
}
