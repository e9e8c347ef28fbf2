//! Check voucher walkthrough example

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use voucher_core::utils::{format_amount, format_print_date, manila_now};
use voucher_core::{
    summarize, CostCenter, CurrencyTable, GlRow, LineItem, VoucherHeader, VoucherKind,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Voucher Core - Check Voucher Example\n");

    let kind = VoucherKind::Check;
    let currencies = CurrencyTable::default();

    // 1. The document lines, as the host would extract them
    let line_items = vec![
        LineItem::new(
            kind,
            0,
            None,
            "Electricity - August".to_string(),
            Some(CostCenter::Department("Maintenance".to_string())),
            BigDecimal::from(0),
            "12500.00".parse()?,
        ),
        LineItem::new(
            kind,
            1,
            None,
            "Water - August".to_string(),
            Some(CostCenter::Department("Maintenance".to_string())),
            BigDecimal::from(0),
            "3100.25".parse()?,
        ),
    ];

    // 2. The GL posting rows for the same document
    let gl_rows = vec![
        GlRow {
            account_name: "10101 Cash In Bank - BDO".to_string(),
            credit_amount: "15600.25".parse()?,
            debit_amount: BigDecimal::from(0),
            department: None,
            trust_fund: None,
        },
        GlRow {
            account_name: "50110 Utilities - Electricity".to_string(),
            credit_amount: BigDecimal::from(0),
            debit_amount: "12500.00".parse()?,
            department: Some("Maintenance".to_string()),
            trust_fund: None,
        },
        GlRow {
            account_name: "50111 Utilities - Water".to_string(),
            credit_amount: BigDecimal::from(0),
            debit_amount: "3100.25".parse()?,
            department: Some("Maintenance".to_string()),
            trust_fund: None,
        },
    ];

    let header = VoucherHeader {
        tran_id: "CV-2026-0815".to_string(),
        tran_date: NaiveDate::from_ymd_opt(2026, 8, 29).ok_or("bad date")?,
        memo: "August utility bills".to_string(),
        currency_code: "PHP".to_string(),
        payee: Some("Visayan Electric Co.".to_string()),
        location: Some("Cebu Main".to_string()),
        cost_center: None,
    };

    // 3. Assemble everything the PDF template needs
    let summary = summarize(kind, header, &line_items, &gl_rows, &currencies)?;

    println!("Payee:        {}", summary.header.payee.as_deref().unwrap_or(""));
    println!("CV #:         {}", summary.header.tran_id);
    println!(
        "Check Amount: {}\n",
        summary.amount_in_words.as_deref().unwrap_or("")
    );

    println!("{:<8} {:<32} {:>12} {:>12}", "Code", "Account Title", "Debit", "Credit");
    for row in summary.printable_rows() {
        println!(
            "{:<8} {:<32} {:>12} {:>12}",
            row.row.account_code(),
            row.row.account_name,
            format_amount(&row.row.debit_amount),
            format_amount(&row.row.credit_amount),
        );
    }
    println!(
        "{:<41} {:>12} {:>12}",
        "Overall Total",
        format_amount(&summary.totals.debit),
        format_amount(&summary.totals.credit),
    );

    println!("\nDate Printed: {}", format_print_date(&manila_now()));
    Ok(())
}
