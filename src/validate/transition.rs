use crate::classify::section_for_account;
use crate::config::EngineConfig;
use crate::registry::AccountType;
use crate::statement::{LineItem, SectionId, StatementType};

/// Outcome of a reclassification gate check. Rejections carry a reason for
/// the UI; nothing is thrown and the move is simply not applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionDecision {
    pub is_valid: bool,
    pub reason: Option<String>,
}

impl TransitionDecision {
    pub fn allow() -> Self {
        Self {
            is_valid: true,
            reason: None,
        }
    }

    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason.into()),
        }
    }
}

pub struct TransitionValidator;

impl TransitionValidator {
    /// Decides whether a line item may move between sections during
    /// interactive reclassification. Pure decision function with no stored
    /// history; re-evaluated on every drag event.
    pub fn can_move(
        config: &EngineConfig,
        item: &LineItem,
        from_section: &str,
        to_section: &str,
        statement_type: StatementType,
    ) -> TransitionDecision {
        let chart = config.chart();
        let expected = section_for_account(&chart, &item.code, statement_type);
        tracing::debug!(
            item = %item.id(),
            from = from_section,
            to = to_section,
            expected = %expected,
            "validating transition"
        );

        // Moving an item to its canonical home is never blocked.
        let to_parsed = SectionId::parse(to_section);
        if to_parsed == Some(expected) {
            return TransitionDecision::allow();
        }

        let known = SectionId::sections_for(statement_type);
        let from_parsed = SectionId::parse(from_section);
        let from_known = matches!(from_parsed, Some(SectionId::Other))
            || from_parsed.is_some_and(|section| known.contains(&section));
        if !from_known {
            return TransitionDecision::reject(format!(
                "Unknown source section `{}` for a {} statement",
                from_section, statement_type
            ));
        }
        let to_known = matches!(to_parsed, Some(SectionId::Other))
            || to_parsed.is_some_and(|section| known.contains(&section));
        if !to_known {
            return TransitionDecision::reject(format!(
                "Unknown target section `{}` for a {} statement",
                to_section, statement_type
            ));
        }
        let to_id = match to_parsed {
            Some(section) => section,
            None => return TransitionDecision::allow(),
        };

        match statement_type {
            StatementType::BalanceSheet => {
                Self::check_balance_sheet_move(&chart, item, to_id)
            }
            StatementType::Income | StatementType::ProfitAndLoss => {
                Self::check_income_move(&chart, item, to_id)
            }
            // Cash-flow categorization is advisory; judgment calls in
            // activity classification are left to the editor.
            StatementType::CashFlow => TransitionDecision::allow(),
        }
    }

    fn check_balance_sheet_move(
        chart: &crate::registry::ChartOfAccounts,
        item: &LineItem,
        to_section: SectionId,
    ) -> TransitionDecision {
        match chart.type_for_code(&item.code) {
            Some(AccountType::Asset) | Some(AccountType::ContraAsset) => {
                if to_section.is_assets_section() {
                    TransitionDecision::allow()
                } else {
                    TransitionDecision::reject(format!(
                        "Asset account {} must remain in an assets section",
                        item.code
                    ))
                }
            }
            Some(AccountType::Liability) => {
                if to_section.is_liabilities_section() {
                    TransitionDecision::allow()
                } else {
                    TransitionDecision::reject(format!(
                        "Liability account {} must remain in a liabilities section",
                        item.code
                    ))
                }
            }
            Some(AccountType::Equity) => {
                if to_section == SectionId::Equity {
                    TransitionDecision::allow()
                } else {
                    TransitionDecision::reject(format!(
                        "Equity account {} must remain in the equity section",
                        item.code
                    ))
                }
            }
            _ => TransitionDecision::allow(),
        }
    }

    fn check_income_move(
        chart: &crate::registry::ChartOfAccounts,
        item: &LineItem,
        to_section: SectionId,
    ) -> TransitionDecision {
        match chart.type_for_code(&item.code) {
            Some(AccountType::Revenue) => {
                if to_section == SectionId::Revenue {
                    TransitionDecision::allow()
                } else {
                    TransitionDecision::reject(format!(
                        "Revenue account {} must remain in the revenue section",
                        item.code
                    ))
                }
            }
            Some(AccountType::Expense) => {
                if to_section.is_expense_subsection() {
                    TransitionDecision::allow()
                } else {
                    TransitionDecision::reject(format!(
                        "Expense account {} must stay within cost of sales or operating expenses",
                        item.code
                    ))
                }
            }
            _ => TransitionDecision::allow(),
        }
    }
}
