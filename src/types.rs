//! Core types and data structures for voucher processing

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Kinds of business documents that can be printed as vouchers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoucherKind {
    /// Check payment printed as a Check Voucher
    Check,
    /// Inventory adjustment printed as a Journal Voucher
    InventoryAdjustment,
    /// Bank deposit printed as a Journal Voucher
    Deposit,
}

impl VoucherKind {
    /// Title rendered at the top of the printed voucher
    pub fn print_title(&self) -> &'static str {
        match self {
            VoucherKind::Check => "Check Voucher",
            VoucherKind::InventoryAdjustment => "Inventory Adjustment",
            VoucherKind::Deposit => "Deposit",
        }
    }

    /// Line amount rule for this document kind.
    ///
    /// Inventory adjustments value a line as `|quantity * unit_cost|`;
    /// every other kind carries the amount directly on the line as
    /// `|unit_cost|`. Resolved once per document instead of per-field
    /// conditionals scattered through the extraction code.
    pub fn line_amount(&self, quantity: &BigDecimal, unit_cost: &BigDecimal) -> BigDecimal {
        match self {
            VoucherKind::InventoryAdjustment => (quantity * unit_cost).abs(),
            VoucherKind::Check | VoucherKind::Deposit => unit_cost.abs(),
        }
    }

    /// Whether lines of this document kind carry a meaningful
    /// adjustment quantity worth displaying on the voucher
    pub fn carries_quantities(&self) -> bool {
        matches!(self, VoucherKind::InventoryAdjustment)
    }
}

/// One of the three mutually-exclusive cost center classifications.
///
/// A document line (or header) is classified by at most one of these;
/// the exclusivity rule itself lives in [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostCenter {
    Department(String),
    TrustFund(String),
    DcbFund(String),
}

impl CostCenter {
    /// Human-readable field label, as shown in validation messages
    pub fn label(&self) -> &'static str {
        match self {
            CostCenter::Department(_) => "Department",
            CostCenter::TrustFund(_) => "Trust Fund",
            CostCenter::DcbFund(_) => "DCB Fund",
        }
    }

    /// The classification value itself
    pub fn value(&self) -> &str {
        match self {
            CostCenter::Department(v) | CostCenter::TrustFund(v) | CostCenter::DcbFund(v) => v,
        }
    }
}

/// One line of a source business document (inventory adjustment line,
/// expense line, deposit line)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Position in the source document, unique and in source line order
    pub index: usize,
    /// Catalog item identifier; absent for pure expense/GL lines
    pub item_id: Option<String>,
    /// Free-text line description
    pub description: String,
    /// At most one cost center classification
    pub cost_center: Option<CostCenter>,
    /// Signed quantity; meaningful only for inventory adjustments
    pub quantity: BigDecimal,
    /// Signed unit cost (or line rate/amount, per document kind)
    pub unit_cost: BigDecimal,
    /// Derived line amount, always non-negative
    pub amount: BigDecimal,
}

impl LineItem {
    /// Create a line item, deriving `amount` from the document kind's
    /// line amount rule so the non-negativity invariant holds
    pub fn new(
        kind: VoucherKind,
        index: usize,
        item_id: Option<String>,
        description: String,
        cost_center: Option<CostCenter>,
        quantity: BigDecimal,
        unit_cost: BigDecimal,
    ) -> Self {
        let amount = kind.line_amount(&quantity, &unit_cost);
        Self {
            index,
            item_id,
            description,
            cost_center,
            quantity,
            unit_cost,
            amount,
        }
    }
}

/// One posting row from the general ledger for a business document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlRow {
    /// Display string, conventionally "<code> <title>"
    pub account_name: String,
    /// Credit amount, non-negative
    pub credit_amount: BigDecimal,
    /// Debit amount, non-negative
    pub debit_amount: BigDecimal,
    /// Department attached directly to the posting
    pub department: Option<String>,
    /// Trust fund (class) attached directly to the posting
    pub trust_fund: Option<String>,
}

impl GlRow {
    /// Account code: the leading token of the account name up to the
    /// first space, empty when the name has no space
    pub fn account_code(&self) -> &str {
        match self.account_name.find(' ') {
            Some(pos) => &self.account_name[..pos],
            None => "",
        }
    }

    /// The amount this row posts: credit when positive, else debit
    pub fn posted_amount(&self) -> &BigDecimal {
        if self.credit_amount > BigDecimal::from(0) {
            &self.credit_amount
        } else {
            &self.debit_amount
        }
    }
}

/// A GL row annotated with descriptive fields copied from the source
/// line item it reconciled against, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedRow {
    /// The underlying ledger posting
    pub row: GlRow,
    /// Description from the matched line item
    pub description: Option<String>,
    /// Cost center from the matched line item
    pub cost_center: Option<CostCenter>,
    /// Adjustment quantity, only for document kinds that carry one
    pub quantity: Option<BigDecimal>,
}

impl MatchedRow {
    /// Whether this row carries anything worth printing; rows with
    /// neither credit nor debit are skipped at the rendering boundary
    pub fn is_printable(&self) -> bool {
        let zero = BigDecimal::from(0);
        self.row.credit_amount != zero || self.row.debit_amount != zero
    }
}

/// Document-level credit and debit totals over the full GL row set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub credit: BigDecimal,
    pub debit: BigDecimal,
}

impl Totals {
    /// Sum credits and debits across all rows, matched or not.
    /// Iteration order is the input order, so the summation is
    /// deterministic.
    pub fn of(gl_rows: &[GlRow]) -> Self {
        Self {
            credit: gl_rows.iter().map(|r| &r.credit_amount).sum(),
            debit: gl_rows.iter().map(|r| &r.debit_amount).sum(),
        }
    }
}

/// Errors that can occur while preparing voucher data
#[derive(Debug, thiserror::Error)]
pub enum VoucherError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Amount out of range: {0}")]
    OutOfRange(String),
}

/// Result type for voucher operations
pub type VoucherResult<T> = Result<T, VoucherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_amount_rule_per_kind() {
        let qty = BigDecimal::from(-4);
        let cost = BigDecimal::from(25);

        assert_eq!(
            VoucherKind::InventoryAdjustment.line_amount(&qty, &cost),
            BigDecimal::from(100)
        );
        assert_eq!(
            VoucherKind::Check.line_amount(&qty, &cost),
            BigDecimal::from(25)
        );
        assert_eq!(
            VoucherKind::Deposit.line_amount(&qty, &BigDecimal::from(-25)),
            BigDecimal::from(25)
        );
    }

    #[test]
    fn test_line_item_amount_is_non_negative() {
        let item = LineItem::new(
            VoucherKind::InventoryAdjustment,
            0,
            Some("widget".to_string()),
            "Widget write-off".to_string(),
            None,
            BigDecimal::from(-3),
            BigDecimal::from(10),
        );
        assert_eq!(item.amount, BigDecimal::from(30));
    }

    #[test]
    fn test_account_code_extraction() {
        let row = GlRow {
            account_name: "10101 Cash In Bank - BDO".to_string(),
            credit_amount: BigDecimal::from(0),
            debit_amount: BigDecimal::from(0),
            department: None,
            trust_fund: None,
        };
        assert_eq!(row.account_code(), "10101");

        let no_space = GlRow {
            account_name: "10101".to_string(),
            ..row
        };
        assert_eq!(no_space.account_code(), "");
    }

    #[test]
    fn test_posted_amount_prefers_credit() {
        let row = GlRow {
            account_name: "20101 Accounts Payable".to_string(),
            credit_amount: BigDecimal::from(500),
            debit_amount: BigDecimal::from(0),
            department: None,
            trust_fund: None,
        };
        assert_eq!(row.posted_amount(), &BigDecimal::from(500));

        let debit_row = GlRow {
            credit_amount: BigDecimal::from(0),
            debit_amount: BigDecimal::from(750),
            ..row
        };
        assert_eq!(debit_row.posted_amount(), &BigDecimal::from(750));
    }

    #[test]
    fn test_cost_center_labels() {
        assert_eq!(
            CostCenter::Department("Maintenance".to_string()).label(),
            "Department"
        );
        assert_eq!(
            CostCenter::TrustFund("Building Fund".to_string()).label(),
            "Trust Fund"
        );
        assert_eq!(
            CostCenter::DcbFund("DCB 2024".to_string()).label(),
            "DCB Fund"
        );
        assert_eq!(
            CostCenter::TrustFund("Building Fund".to_string()).value(),
            "Building Fund"
        );
    }

    #[test]
    fn test_totals_fold_over_all_rows() {
        let rows = vec![
            GlRow {
                account_name: "10101 Cash In Bank".to_string(),
                credit_amount: BigDecimal::from(100),
                debit_amount: BigDecimal::from(0),
                department: None,
                trust_fund: None,
            },
            GlRow {
                account_name: "50101 Office Supplies".to_string(),
                credit_amount: BigDecimal::from(0),
                debit_amount: BigDecimal::from(100),
                department: None,
                trust_fund: None,
            },
            // Zero row still participates in totals
            GlRow {
                account_name: "99999 Rounding".to_string(),
                credit_amount: BigDecimal::from(0),
                debit_amount: BigDecimal::from(0),
                department: None,
                trust_fund: None,
            },
        ];

        let totals = Totals::of(&rows);
        assert_eq!(totals.credit, BigDecimal::from(100));
        assert_eq!(totals.debit, BigDecimal::from(100));
    }
}
