use crate::classify::section_for_account;
use crate::config::EngineConfig;
use crate::registry::{
    relationship_rules, AccountCodeRange, AccountType, RelationshipRule,
};
use crate::statement::{GeneratedStatement, LineItem, SectionId, StatementType, Violation};

use super::ValidationResult;

pub struct ArithmeticValidator;

impl ArithmeticValidator {
    /// Whole-statement reconciliation: line items against the stated total,
    /// subtotals against their members, the statement type's accounting
    /// identity, required-section completeness, and the configured account
    /// relationship rules. All comparisons use the configured epsilon.
    pub fn validate_statement(
        config: &EngineConfig,
        statement: &GeneratedStatement,
        statement_type: StatementType,
    ) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::check_line_items_total(config, statement, &mut result);
        Self::check_subtotals(config, statement, &mut result);
        match statement_type {
            StatementType::BalanceSheet => {
                Self::check_balance_sheet_identity(config, statement, &mut result)
            }
            StatementType::Income | StatementType::ProfitAndLoss => {
                Self::check_income_identity(config, statement, &mut result)
            }
            StatementType::CashFlow => Self::check_cash_flow_identity(config, statement, &mut result),
        }
        Self::check_required_sections(config, statement, statement_type, &mut result);
        Self::check_relationships(config, statement, &mut result);

        result
    }

    fn check_line_items_total(
        config: &EngineConfig,
        statement: &GeneratedStatement,
        result: &mut ValidationResult,
    ) {
        let computed = statement.line_items_total();
        if (computed - statement.total).abs() > config.epsilon {
            result.push(
                Violation::error(format!(
                    "Total mismatch: line items sum to {:.2} but the statement total is {:.2}",
                    computed, statement.total
                ))
                .with_suggestion("Review all line items for accuracy"),
            );
        }
    }

    fn check_subtotals(
        config: &EngineConfig,
        statement: &GeneratedStatement,
        result: &mut ValidationResult,
    ) {
        let mut suggested = false;
        for subtotal in &statement.subtotals {
            let Some(key) = subtotal.description.split_whitespace().next() else {
                continue;
            };
            let key = key.to_lowercase();
            let computed: f64 = statement
                .line_items
                .iter()
                .filter(|item| item.section.to_lowercase().starts_with(&key))
                .map(|item| item.amount)
                .sum();
            if (computed - subtotal.amount).abs() > config.epsilon {
                let mut violation = Violation::error(format!(
                    "Subtotal mismatch for {}: calculated {:.2} but the statement shows {:.2}",
                    subtotal.description, computed, subtotal.amount
                ));
                if !suggested {
                    violation =
                        violation.with_suggestion("Review the items grouped under each subtotal");
                    suggested = true;
                }
                result.push(violation);
            }
        }
    }

    fn check_balance_sheet_identity(
        config: &EngineConfig,
        statement: &GeneratedStatement,
        result: &mut ValidationResult,
    ) {
        let chart = config.chart();
        let mut net_assets = 0.0;
        let mut liabilities = 0.0;
        let mut equity = 0.0;
        for item in &statement.line_items {
            match chart.type_for_code(&item.code) {
                Some(AccountType::Asset) | Some(AccountType::ContraAsset) => {
                    net_assets += item.amount
                }
                Some(AccountType::Liability) => liabilities += item.amount,
                Some(AccountType::Equity) => equity += item.amount,
                _ => {}
            }
        }
        // Sign-adjusted so both sides compare as positive magnitudes,
        // whichever convention the producer used for the credit side.
        let rhs = liabilities.abs() + equity.abs();
        if (net_assets.abs() - rhs).abs() > config.epsilon {
            result.push(
                Violation::error(format!(
                    "Balance sheet does not balance: assets {:.2} vs liabilities + equity {:.2}",
                    net_assets.abs(),
                    rhs
                ))
                .with_suggestion("Review account classifications"),
            );
        }
    }

    fn check_income_identity(
        config: &EngineConfig,
        statement: &GeneratedStatement,
        result: &mut ValidationResult,
    ) {
        let buckets = config.chart().income_buckets();
        let items = &statement.line_items;

        let revenue = sum_in(items, buckets.revenue);
        let other_income = sum_in(items, buckets.other_income);
        let financial_income = sum_in(items, buckets.financial_income);
        // Expenses are recorded negative; magnitudes flip the sign.
        let cost_of_sales = -sum_in(items, buckets.cost_of_sales);
        let operating_expenses = -sum_in(items, buckets.operating_expenses);
        let other_expenses = -sum_in(items, buckets.other_expenses);
        let financial_expenses = -sum_in(items, buckets.financial_expenses);
        let income_tax = -sum_in(items, buckets.income_tax);

        let gross_profit = revenue - cost_of_sales;
        let operating_profit = gross_profit - operating_expenses;
        let net_income = operating_profit + financial_income - financial_expenses + other_income
            - other_expenses
            - income_tax;

        if (net_income - statement.total).abs() > config.epsilon {
            result.push(
                Violation::error(format!(
                    "Income statement does not reconcile: computed net income {:.2} but the statement total is {:.2}",
                    net_income, statement.total
                ))
                .with_suggestion("Verify expense accounts carry negative balances"),
            );
        }
    }

    fn check_cash_flow_identity(
        config: &EngineConfig,
        statement: &GeneratedStatement,
        result: &mut ValidationResult,
    ) {
        let mut operating = 0.0;
        let mut investing = 0.0;
        let mut financing = 0.0;
        for item in &statement.line_items {
            let section = item.section.to_lowercase();
            if section.contains("operating") {
                operating += item.amount;
            } else if section.contains("investing") {
                investing += item.amount;
            } else if section.contains("financing") {
                financing += item.amount;
            }
        }
        let net_cash_flow = operating + investing + financing;
        if (net_cash_flow - statement.total).abs() > config.epsilon {
            result.push(
                Violation::error(format!(
                    "Cash flow does not balance: operating {:.2} + investing {:.2} + financing {:.2} differs from total {:.2}",
                    operating, investing, financing, statement.total
                ))
                .with_suggestion("Review activity classifications"),
            );
        }
    }

    fn check_required_sections(
        config: &EngineConfig,
        statement: &GeneratedStatement,
        statement_type: StatementType,
        result: &mut ValidationResult,
    ) {
        let chart = config.chart();
        let mut suggested = false;
        for section in Self::required_sections(statement_type) {
            let present = statement.line_items.iter().any(|item| {
                section_for_account(&chart, &item.code, statement_type) == *section
                    || SectionId::parse(&item.section) == Some(*section)
            });
            if !present {
                let mut violation = Violation::error(format!(
                    "Required section `{}` has no line items",
                    section.as_str()
                ));
                if !suggested {
                    violation = violation
                        .with_suggestion(format!("Add line items to the {} section", section.as_str()));
                    suggested = true;
                }
                result.push(violation);
            }
        }
    }

    fn required_sections(statement_type: StatementType) -> &'static [SectionId] {
        match statement_type {
            StatementType::BalanceSheet => &[
                SectionId::AssetsCurrent,
                SectionId::LiabilitiesCurrent,
                SectionId::Equity,
            ],
            StatementType::Income | StatementType::ProfitAndLoss => &[
                SectionId::Revenue,
                SectionId::CostOfSales,
                SectionId::OperatingExpenses,
            ],
            StatementType::CashFlow => &[SectionId::Operating],
        }
    }

    fn check_relationships(
        config: &EngineConfig,
        statement: &GeneratedStatement,
        result: &mut ValidationResult,
    ) {
        for rule in relationship_rules(config.layout) {
            match rule {
                RelationshipRule::MainCoversContra { name, main, contra } => {
                    let main_total = code_total(&statement.line_items, main);
                    let contra_total = code_total(&statement.line_items, contra);
                    let (Some(main_total), Some(contra_total)) = (main_total, contra_total) else {
                        continue;
                    };
                    if main_total < contra_total.abs() - config.epsilon {
                        result.push(
                            Violation::warning(format!(
                                "Account {} ({:.2}) does not cover contra account {} ({:.2})",
                                main, main_total, contra, contra_total
                            ))
                            .with_suggestion(format!("Reconcile the {} balances", name)),
                        );
                    }
                }
                RelationshipRule::SumPositive { name, accounts } => {
                    let related: Vec<&LineItem> = statement
                        .line_items
                        .iter()
                        .filter(|item| accounts.contains(&item.code.as_str()))
                        .collect();
                    if related.is_empty() {
                        continue;
                    }
                    let sum: f64 = related.iter().map(|item| item.amount).sum();
                    if sum <= 0.0 {
                        result.push(Violation::warning(format!(
                            "Accounts {} should sum to a positive amount (currently {:.2})",
                            accounts.join(", "),
                            sum
                        )).with_suggestion(format!("Reconcile the {} balances", name)));
                    }
                }
            }
        }
    }
}

fn sum_in(items: &[LineItem], ranges: &[AccountCodeRange]) -> f64 {
    items
        .iter()
        .filter(|item| ranges.iter().any(|range| range.contains(&item.code)))
        .map(|item| item.amount)
        .sum()
}

/// Sum of all items carrying a code, or `None` when the code is absent.
fn code_total(items: &[LineItem], code: &str) -> Option<f64> {
    let matching: Vec<f64> = items
        .iter()
        .filter(|item| item.code.as_str() == code)
        .map(|item| item.amount)
        .collect();
    if matching.is_empty() {
        None
    } else {
        Some(matching.iter().sum())
    }
}
