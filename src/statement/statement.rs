use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::EngineError;

use super::line_item::LineItem;
use super::violation::Violation;

/// The four statement types the engine validates. Wire form is kebab-case
/// (`balance-sheet`, `income`, `cash-flow`, `pnl`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StatementType {
    BalanceSheet,
    Income,
    CashFlow,
    #[serde(rename = "pnl")]
    ProfitAndLoss,
}

impl StatementType {
    pub const ALL: [StatementType; 4] = [
        StatementType::BalanceSheet,
        StatementType::Income,
        StatementType::CashFlow,
        StatementType::ProfitAndLoss,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatementType::BalanceSheet => "balance-sheet",
            StatementType::Income => "income",
            StatementType::CashFlow => "cash-flow",
            StatementType::ProfitAndLoss => "pnl",
        }
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatementType {
    type Err = EngineError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "balance-sheet" => Ok(StatementType::BalanceSheet),
            "income" => Ok(StatementType::Income),
            "cash-flow" => Ok(StatementType::CashFlow),
            "pnl" => Ok(StatementType::ProfitAndLoss),
            other => Err(EngineError::UnknownStatementType(other.to_string())),
        }
    }
}

/// Derived per-section sum, recomputed whenever line items change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subtotal {
    pub description: String,
    pub amount: f64,
}

impl Subtotal {
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

/// A statement produced by the external generation collaborator, monitored
/// in memory while active. `validations` and `corrections` are append-only
/// audit logs, cleared only on full regeneration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedStatement {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub subtotals: Vec<Subtotal>,
    pub total: f64,
    #[serde(default)]
    pub validations: Vec<String>,
    #[serde(default)]
    pub corrections: Vec<Violation>,
}

impl GeneratedStatement {
    pub fn new(line_items: Vec<LineItem>, subtotals: Vec<Subtotal>, total: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            line_items,
            subtotals,
            total,
            validations: Vec::new(),
            corrections: Vec::new(),
        }
    }

    /// Parses a statement from the JSON shape the generation service emits.
    pub fn from_json_str(data: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn line_items_total(&self) -> f64 {
        self.line_items.iter().map(|item| item.amount).sum()
    }

    /// Appends an audit line to the validation trail.
    pub fn record_validation(&mut self, note: impl Into<String>) {
        self.validations.push(note.into());
    }

    /// Appends violations to the correction log. The log is append-only;
    /// deduplication is the caller's concern.
    pub fn record_corrections(&mut self, violations: impl IntoIterator<Item = Violation>) {
        self.corrections.extend(violations);
    }

    /// Clears both audit logs. Only legal on full regeneration.
    pub fn reset_audit_trail(&mut self) {
        self.validations.clear();
        self.corrections.clear();
    }
}
