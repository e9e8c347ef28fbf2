//! Shared formatting and date utilities for voucher reports

pub mod date;
pub mod format;

pub use date::*;
pub use format::*;
