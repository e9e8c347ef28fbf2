//! # Voucher Core
//!
//! Core logic behind printed accounting vouchers (Check Voucher,
//! Journal / Inventory Adjustment Voucher): the numeric, matching, and
//! validation pieces, with record access and PDF rendering left to the
//! hosting report layer.
//!
//! ## Features
//!
//! - **Amount in words**: short-scale English rendering of a check
//!   amount ("One Million ... Pesos and 89/100 only")
//! - **Line reconciliation**: amount-tolerance pairing of GL posting
//!   rows with the source document lines that produced them
//! - **Cost center validation**: the at-most-one (or exactly-one) rule
//!   across Department / Trust Fund / DCB Fund
//! - **Voucher assembly**: reconciled rows, credit/debit totals, and
//!   the words string packaged for a templating layer
//! - **Report utilities**: thousands grouping, formatted-number
//!   parsing, Manila-time print stamps
//!
//! ## Quick Start
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use voucher_core::CurrencyTable;
//!
//! let currencies = CurrencyTable::default();
//! let amount: BigDecimal = "1234.56".parse().unwrap();
//! let words = currencies.words_for(&amount, "PHP").unwrap();
//! assert_eq!(
//!     words,
//!     "One Thousand Two Hundred Thirty Four Pesos and 56/100 only"
//! );
//! ```

pub mod currency;
pub mod reconciliation;
pub mod types;
pub mod utils;
pub mod validation;
pub mod voucher;
pub mod words;

// Re-export commonly used types
pub use currency::CurrencyTable;
pub use reconciliation::*;
pub use types::*;
pub use validation::*;
pub use voucher::*;
pub use words::amount_in_words;
