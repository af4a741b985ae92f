use crate::config::EngineConfig;
use crate::registry::AccountType;
use crate::statement::{LineItem, Violation};

use super::ValidationResult;

/// Case-insensitive keywords marking contra-style accounts across the
/// supported languages (English, Russian, Uzbek).
const CONTRA_KEYWORDS: &[&str] = &[
    "depreciation",
    "amortization",
    "allowance",
    "износ",
    "амортизация",
    "резерв",
    "amortizatsiya",
    "eskirish",
];

fn has_contra_keyword(description: &str) -> bool {
    let lowered = description.to_lowercase();
    CONTRA_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

pub struct SignValidator;

impl SignValidator {
    /// Checks a line item's amount sign against its account's normal
    /// balance convention.
    ///
    /// Classification comes from the exact registry entry when one exists;
    /// otherwise from the code's type block. The description-keyword
    /// heuristic only applies when the exact table does not know the
    /// account and the type block alone cannot rule out a contra account.
    pub fn validate_line_item(config: &EngineConfig, item: &LineItem) -> ValidationResult {
        let chart = config.chart();
        let kind = match chart.lookup(&item.code) {
            Some(classification) => Some(classification.kind),
            None => match chart.type_for_code(&item.code) {
                Some(AccountType::Asset)
                    if item.amount < 0.0 && has_contra_keyword(&item.description) =>
                {
                    Some(AccountType::ContraAsset)
                }
                other => other,
            },
        };

        let mut result = ValidationResult::ok();
        let Some(kind) = kind else {
            // Classification miss: the item belongs to the "other" bucket
            // and carries no sign convention.
            tracing::debug!(code = %item.code, "no classification for account; skipping sign check");
            return result;
        };

        match kind {
            AccountType::Asset => {
                if item.amount < 0.0 {
                    result.push(
                        Violation::error(format!(
                            "Asset account {} ({}) should have a positive balance",
                            item.code, item.description
                        ))
                        .with_suggestion(format!(
                            "Verify whether {} is a contra account",
                            item.description
                        )),
                    );
                }
            }
            AccountType::ContraAsset => {
                if item.amount > 0.0 {
                    result.push(Violation::error(format!(
                        "Contra account {} ({}) should have a negative balance",
                        item.code, item.description
                    )));
                }
            }
            AccountType::Liability => {
                if item.amount < 0.0 && !config.allows_negative(&item.code) {
                    result.push(
                        Violation::error(format!(
                            "Liability account {} ({}) should have a positive balance",
                            item.code, item.description
                        ))
                        .with_suggestion(format!(
                            "Check for an abnormal balance on account {}",
                            item.code
                        )),
                    );
                }
            }
            AccountType::Equity => {
                if item.amount < 0.0 && !config.allows_negative(&item.code) {
                    result.push(Violation::error(format!(
                        "Equity account {} ({}) should have a positive balance",
                        item.code, item.description
                    )));
                }
            }
            AccountType::Revenue => {
                if item.amount < 0.0 {
                    result.push(Violation::error(format!(
                        "Revenue account {} ({}) should have a positive balance",
                        item.code, item.description
                    )));
                }
            }
            AccountType::Expense => {
                if item.amount > 0.0 {
                    result.push(Violation::error(format!(
                        "Expense account {} ({}) should have a negative balance",
                        item.code, item.description
                    )));
                }
            }
            AccountType::Manufacturing => {
                if item.amount < 0.0 {
                    result.push(Violation::error(format!(
                        "Manufacturing account {} ({}) should have a positive balance",
                        item.code, item.description
                    )));
                }
            }
        }

        result
    }
}
