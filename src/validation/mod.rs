//! Cost center exclusivity validation
//!
//! A document (or document line) classifies spending against at most
//! one of three dimensions: Department, Trust Fund, or DCB Fund. These
//! are pure predicates; the hosting UI decides how to surface a failed
//! check (blocking dialog, rejected save) using the returned labels.

use serde::{Deserialize, Serialize};

/// The three cost center fields, identified for the interactive
/// edit protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostCenterField {
    Department,
    TrustFund,
    DcbFund,
}

impl CostCenterField {
    /// Field label as shown in validation messages
    pub fn label(&self) -> &'static str {
        match self {
            CostCenterField::Department => "Department",
            CostCenterField::TrustFund => "Trust Fund",
            CostCenterField::DcbFund => "DCB Fund",
        }
    }
}

/// Snapshot of the three cost center field values on a document.
/// Empty and whitespace-only strings count as not populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCenterFields {
    pub department: Option<String>,
    pub trust_fund: Option<String>,
    pub dcb_fund: Option<String>,
}

impl CostCenterFields {
    /// The populated fields, in the fixed Department, Trust Fund,
    /// DCB Fund order used by validation messages
    pub fn populated(&self) -> Vec<CostCenterField> {
        let mut fields = Vec::new();
        if is_populated(&self.department) {
            fields.push(CostCenterField::Department);
        }
        if is_populated(&self.trust_fund) {
            fields.push(CostCenterField::TrustFund);
        }
        if is_populated(&self.dcb_fund) {
            fields.push(CostCenterField::DcbFund);
        }
        fields
    }
}

fn is_populated(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// How many cost center fields a document is required to populate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExclusivityMode {
    /// Zero or one populated field is valid
    AtMostOne,
    /// Exactly one populated field is required
    ExactlyOne,
}

/// Outcome of an exclusivity check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusivityCheck {
    pub valid: bool,
    /// Labels of every populated field, for the host's error message
    pub populated_labels: Vec<String>,
}

/// Check the exclusivity rule against a field snapshot
pub fn validate_exclusive(fields: &CostCenterFields, mode: ExclusivityMode) -> ExclusivityCheck {
    let populated = fields.populated();
    let valid = match mode {
        ExclusivityMode::AtMostOne => populated.len() <= 1,
        ExclusivityMode::ExactlyOne => populated.len() == 1,
    };

    ExclusivityCheck {
        valid,
        populated_labels: populated.iter().map(|f| f.label().to_string()).collect(),
    }
}

/// Outcome of an interactive field edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldChange {
    /// The edit stands
    Accepted,
    /// The edit violated exclusivity; the host must clear the field
    /// that was just changed and show the offending labels
    Reverted {
        cleared: CostCenterField,
        populated_labels: Vec<String>,
    },
}

/// Interactive edit rule: when a change to one of the three fields
/// leaves more than one populated, the just-changed field is reverted
/// immediately rather than waiting for save time.
pub fn on_field_changed(fields: &CostCenterFields, changed: CostCenterField) -> FieldChange {
    let populated = fields.populated();
    if populated.len() > 1 && populated.contains(&changed) {
        FieldChange::Reverted {
            cleared: changed,
            populated_labels: populated.iter().map(|f| f.label().to_string()).collect(),
        }
    } else {
        FieldChange::Accepted
    }
}

/// Save-time gate: the same exclusivity check, rerun against the final
/// field values in case the record was loaded already in violation
pub fn on_save(fields: &CostCenterFields, mode: ExclusivityMode) -> ExclusivityCheck {
    validate_exclusive(fields, mode)
}
