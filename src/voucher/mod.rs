//! Voucher data assembly
//!
//! The orchestration between a loaded document and the rendering
//! layer: reconcile GL rows against source lines, total the row set,
//! and render the check amount in words. Record loading, ledger
//! queries, and PDF templating stay with the host.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyTable;
use crate::reconciliation::reconcile;
use crate::types::{CostCenter, GlRow, LineItem, MatchedRow, Totals, VoucherKind, VoucherResult};

/// Account title fragment identifying the bank rows whose credits make
/// up the printed check amount
pub const CASH_IN_BANK: &str = "Cash In Bank";

/// Document header fields, extracted by the host from the loaded record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoucherHeader {
    /// Document number (check number, adjustment reference)
    pub tran_id: String,
    /// Transaction date
    pub tran_date: NaiveDate,
    /// Free-text memo / particulars
    pub memo: String,
    /// ISO currency code, resolved to a label via [`CurrencyTable`]
    pub currency_code: String,
    /// Payee, for check vouchers
    pub payee: Option<String>,
    /// Issuing location, for check vouchers
    pub location: Option<String>,
    /// Header-level cost center; inventory adjustments classify the
    /// whole document rather than individual lines
    pub cost_center: Option<CostCenter>,
}

/// Everything the rendering layer needs to lay out one voucher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoucherSummary {
    pub kind: VoucherKind,
    pub header: VoucherHeader,
    /// Reconciled GL rows, full set in posting order
    pub rows: Vec<MatchedRow>,
    /// Credit/debit totals over the full row set
    pub totals: Totals,
    /// Check amount in words; only check vouchers print one
    pub amount_in_words: Option<String>,
}

impl VoucherSummary {
    /// Rows worth printing; zero-credit zero-debit rows are dropped
    /// here at the presentation boundary, never inside reconciliation
    pub fn printable_rows(&self) -> Vec<&MatchedRow> {
        self.rows.iter().filter(|r| r.is_printable()).collect()
    }

    /// Cost center to display on a row. Inventory adjustments show the
    /// header's classification on every row; other kinds show the
    /// matched line's.
    pub fn row_cost_center<'a>(&'a self, row: &'a MatchedRow) -> Option<&'a CostCenter> {
        match self.kind {
            VoucherKind::InventoryAdjustment => self.header.cost_center.as_ref(),
            VoucherKind::Check | VoucherKind::Deposit => row.cost_center.as_ref(),
        }
    }
}

/// The check amount: total credits posted to Cash In Bank accounts
pub fn check_amount(gl_rows: &[GlRow]) -> BigDecimal {
    gl_rows
        .iter()
        .filter(|row| row.account_name.contains(CASH_IN_BANK))
        .map(|row| &row.credit_amount)
        .sum()
}

/// Assemble a voucher summary from the document snapshot and its GL
/// posting rows
pub fn summarize(
    kind: VoucherKind,
    header: VoucherHeader,
    line_items: &[LineItem],
    gl_rows: &[GlRow],
    currencies: &CurrencyTable,
) -> VoucherResult<VoucherSummary> {
    let rows = reconcile(line_items, gl_rows, kind)?;
    let totals = Totals::of(gl_rows);

    let amount_in_words = match kind {
        VoucherKind::Check => {
            Some(currencies.words_for(&check_amount(gl_rows), &header.currency_code)?)
        }
        VoucherKind::InventoryAdjustment | VoucherKind::Deposit => None,
    };

    Ok(VoucherSummary {
        kind,
        header,
        rows,
        totals,
        amount_in_words,
    })
}
