//! Inventory adjustment voucher walkthrough example

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use voucher_core::utils::format_amount;
use voucher_core::{
    summarize, validate_exclusive, CostCenter, CostCenterFields, CurrencyTable, ExclusivityMode,
    GlRow, LineItem, VoucherHeader, VoucherKind,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Voucher Core - Inventory Adjustment Example\n");

    let kind = VoucherKind::InventoryAdjustment;

    // 1. Validate the header classification before anything else
    let fields = CostCenterFields {
        department: Some("Warehouse".to_string()),
        trust_fund: None,
        dcb_fund: None,
    };
    let check = validate_exclusive(&fields, ExclusivityMode::ExactlyOne);
    println!(
        "Cost center check: valid={}, populated={:?}\n",
        check.valid, check.populated_labels
    );

    // 2. Adjustment lines; the amount rule is |quantity * unit_cost|
    let line_items = vec![
        LineItem::new(
            kind,
            0,
            Some("cement-40kg".to_string()),
            "Cement 40kg".to_string(),
            None,
            BigDecimal::from(-3),
            "250.00".parse()?,
        ),
        LineItem::new(
            kind,
            1,
            Some("pvc-pipe".to_string()),
            "PVC Pipe 2in".to_string(),
            None,
            BigDecimal::from(2),
            "180.00".parse()?,
        ),
    ];

    let gl_rows = vec![
        GlRow {
            account_name: "10201 Inventory - Construction".to_string(),
            credit_amount: "750.00".parse()?,
            debit_amount: BigDecimal::from(0),
            department: None,
            trust_fund: None,
        },
        GlRow {
            account_name: "50105 Inventory Variance".to_string(),
            credit_amount: BigDecimal::from(0),
            debit_amount: "750.00".parse()?,
            department: None,
            trust_fund: None,
        },
        GlRow {
            account_name: "10201 Inventory - Construction".to_string(),
            credit_amount: BigDecimal::from(0),
            debit_amount: "360.00".parse()?,
            department: None,
            trust_fund: None,
        },
        GlRow {
            account_name: "50105 Inventory Variance".to_string(),
            credit_amount: "360.00".parse()?,
            debit_amount: BigDecimal::from(0),
            department: None,
            trust_fund: None,
        },
    ];

    let header = VoucherHeader {
        tran_id: "IA-2026-0042".to_string(),
        tran_date: NaiveDate::from_ymd_opt(2026, 8, 15).ok_or("bad date")?,
        memo: "Monthly stock count adjustments".to_string(),
        currency_code: "PHP".to_string(),
        payee: None,
        location: None,
        cost_center: Some(CostCenter::Department("Warehouse".to_string())),
    };

    // 3. Reconcile and total
    let summary = summarize(kind, header, &line_items, &gl_rows, &CurrencyTable::default())?;

    println!("{}", kind.print_title());
    println!("Reference No: {}\n", summary.header.tran_id);
    println!(
        "{:<16} {:<32} {:<12} {:>6} {:>10} {:>10}",
        "Description", "GL Account", "Cost Center", "Qty", "Debit", "Credit"
    );
    for row in summary.printable_rows() {
        println!(
            "{:<16} {:<32} {:<12} {:>6} {:>10} {:>10}",
            row.description.as_deref().unwrap_or(""),
            row.row.account_name,
            summary
                .row_cost_center(row)
                .map(|c| c.value())
                .unwrap_or(""),
            row.quantity
                .as_ref()
                .map(|q| q.abs().to_string())
                .unwrap_or_default(),
            format_amount(&row.row.debit_amount),
            format_amount(&row.row.credit_amount),
        );
    }
    println!(
        "\nTotal: debit {}, credit {}",
        format_amount(&summary.totals.debit),
        format_amount(&summary.totals.credit),
    );

    Ok(())
}
