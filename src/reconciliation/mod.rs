//! Reconciliation of general-ledger postings against source document lines
//!
//! GL postings carry no correlation key back to the document line that
//! produced them, so rows are paired to lines by amount proximity. The
//! pairing is first-match-by-index, not best-match: two lines with equal
//! or near-equal amounts resolve to the earlier line, and one line may
//! serve several rows. A deliberate simplification with a known
//! accuracy limit; the source data offers no stronger key.

use bigdecimal::BigDecimal;

use crate::types::{GlRow, LineItem, MatchedRow, VoucherError, VoucherKind, VoucherResult};

/// Amounts within this distance of each other are considered the same
/// posting. BigDecimal has no const constructor, hence a function.
pub fn amount_tolerance() -> BigDecimal {
    BigDecimal::from(1) / BigDecimal::from(100)
}

/// Annotate each GL row with descriptive fields from the first source
/// line whose amount lies within [`amount_tolerance`] of the row's
/// posted amount.
///
/// Rows are processed in input order. Line items are scanned in
/// ascending `index` order and the first hit wins; a line is not
/// consumed by matching, and a row with no hit comes back with its
/// optional fields empty (not an error). The adjustment quantity is
/// copied only for document kinds that carry one.
///
/// Fails with `InvalidInput` when any input amount is negative; the
/// data model requires non-negative line amounts and credit/debit
/// columns.
pub fn reconcile(
    line_items: &[LineItem],
    gl_rows: &[GlRow],
    kind: VoucherKind,
) -> VoucherResult<Vec<MatchedRow>> {
    let zero = BigDecimal::from(0);

    for item in line_items {
        if item.amount < zero {
            return Err(VoucherError::InvalidInput(format!(
                "line {} has negative amount {}",
                item.index, item.amount
            )));
        }
    }
    for row in gl_rows {
        if row.credit_amount < zero || row.debit_amount < zero {
            return Err(VoucherError::InvalidInput(format!(
                "GL row '{}' has a negative credit or debit amount",
                row.account_name
            )));
        }
    }

    // Scan order is ascending index regardless of slice order
    let mut ordered: Vec<&LineItem> = line_items.iter().collect();
    ordered.sort_by_key(|item| item.index);

    let tolerance = amount_tolerance();

    Ok(gl_rows
        .iter()
        .map(|row| {
            let gl_amount = row.posted_amount();
            let matched = ordered
                .iter()
                .find(|item| (&item.amount - gl_amount).abs() <= tolerance);

            match matched {
                Some(item) => MatchedRow {
                    row: row.clone(),
                    description: Some(item.description.clone()),
                    cost_center: item.cost_center.clone(),
                    quantity: kind.carries_quantities().then(|| item.quantity.clone()),
                },
                None => MatchedRow {
                    row: row.clone(),
                    description: None,
                    cost_center: None,
                    quantity: None,
                },
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CostCenter, Totals};

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    fn line(index: usize, amount: &str, description: &str) -> LineItem {
        LineItem {
            index,
            item_id: None,
            description: description.to_string(),
            cost_center: Some(CostCenter::Department(format!("Dept {}", index))),
            quantity: BigDecimal::from(index as i64 + 1),
            unit_cost: dec(amount),
            amount: dec(amount),
        }
    }

    fn credit_row(amount: &str) -> GlRow {
        GlRow {
            account_name: "20101 Accounts Payable".to_string(),
            credit_amount: dec(amount),
            debit_amount: BigDecimal::from(0),
            department: None,
            trust_fund: None,
        }
    }

    #[test]
    fn test_first_match_wins_on_equal_amounts() {
        let items = vec![line(0, "100.00", "A"), line(1, "100.00", "B")];
        let rows = vec![credit_row("100.00")];

        let matched = reconcile(&items, &rows, VoucherKind::Check).unwrap();
        assert_eq!(matched[0].description.as_deref(), Some("A"));
    }

    #[test]
    fn test_ascending_index_order_even_when_slice_is_shuffled() {
        let items = vec![line(1, "100.00", "B"), line(0, "100.00", "A")];
        let rows = vec![credit_row("100.00")];

        let matched = reconcile(&items, &rows, VoucherKind::Check).unwrap();
        assert_eq!(matched[0].description.as_deref(), Some("A"));
    }

    #[test]
    fn test_no_match_leaves_fields_empty() {
        let items = vec![line(0, "50.00", "A")];
        let rows = vec![credit_row("100.00")];

        let matched = reconcile(&items, &rows, VoucherKind::Check).unwrap();
        assert_eq!(matched[0].description, None);
        assert_eq!(matched[0].cost_center, None);
        assert_eq!(matched[0].quantity, None);
    }

    #[test]
    fn test_tolerance_boundary() {
        let items = vec![line(0, "100.01", "A")];

        let hit = reconcile(&items, &[credit_row("100.00")], VoucherKind::Check).unwrap();
        assert_eq!(hit[0].description.as_deref(), Some("A"));

        let miss = reconcile(&items, &[credit_row("99.99")], VoucherKind::Check).unwrap();
        assert_eq!(miss[0].description, None);
    }

    #[test]
    fn test_many_rows_may_share_one_line() {
        let items = vec![line(0, "75.00", "Shared")];
        let rows = vec![credit_row("75.00"), credit_row("75.00")];

        let matched = reconcile(&items, &rows, VoucherKind::Check).unwrap();
        assert_eq!(matched[0].description.as_deref(), Some("Shared"));
        assert_eq!(matched[1].description.as_deref(), Some("Shared"));
    }

    #[test]
    fn test_quantity_copied_only_for_inventory_adjustments() {
        let items = vec![line(0, "100.00", "A")];
        let rows = vec![credit_row("100.00")];

        let adj = reconcile(&items, &rows, VoucherKind::InventoryAdjustment).unwrap();
        assert_eq!(adj[0].quantity, Some(BigDecimal::from(1)));

        let check = reconcile(&items, &rows, VoucherKind::Check).unwrap();
        assert_eq!(check[0].quantity, None);
    }

    #[test]
    fn test_debit_amount_used_when_credit_is_zero() {
        let items = vec![line(0, "42.00", "Debit side")];
        let rows = vec![GlRow {
            account_name: "50101 Office Supplies".to_string(),
            credit_amount: BigDecimal::from(0),
            debit_amount: dec("42.00"),
            department: None,
            trust_fund: None,
        }];

        let matched = reconcile(&items, &rows, VoucherKind::Check).unwrap();
        assert_eq!(matched[0].description.as_deref(), Some("Debit side"));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut bad = line(0, "10.00", "A");
        bad.amount = dec("-10.00");

        let err = reconcile(&[bad], &[credit_row("10.00")], VoucherKind::Check).unwrap_err();
        assert!(matches!(err, VoucherError::InvalidInput(_)));
    }

    #[test]
    fn test_totals_independent_of_matching() {
        let rows = vec![
            credit_row("100.00"),
            GlRow {
                account_name: "50101 Office Supplies".to_string(),
                credit_amount: BigDecimal::from(0),
                debit_amount: dec("100.00"),
                department: None,
                trust_fund: None,
            },
        ];

        // No line items at all; totals still cover every row
        let matched = reconcile(&[], &rows, VoucherKind::Check).unwrap();
        assert!(matched.iter().all(|m| m.description.is_none()));

        let totals = Totals::of(&rows);
        assert_eq!(totals.credit, dec("100.00"));
        assert_eq!(totals.debit, dec("100.00"));
    }
}
