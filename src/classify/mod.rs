//! Section classifier: maps an account code to its canonical statement
//! section for a given statement type.

use crate::registry::{AccountCode, ChartOfAccounts};
use crate::statement::{SectionId, StatementType};

/// Returns the canonical section for a code under the given statement type.
///
/// Iterates the type's ordered range table; the first range containing the
/// zero-padded code wins. Codes outside every range resolve to
/// [`SectionId::Other`]. Pure and deterministic; the transition validator
/// relies on this to compute an item's expected home regardless of where
/// the user dragged it.
pub fn section_for_account(
    chart: &ChartOfAccounts,
    code: &AccountCode,
    statement_type: StatementType,
) -> SectionId {
    chart
        .section_ranges(statement_type)
        .iter()
        .find(|entry| entry.range.contains(code))
        .map(|entry| entry.section)
        .unwrap_or(SectionId::Other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CoaLayout;

    fn code(raw: &str) -> AccountCode {
        AccountCode::new(raw).expect("valid code")
    }

    #[test]
    fn classification_is_deterministic() {
        let chart = ChartOfAccounts::for_layout(CoaLayout::Standard);
        for raw in ["0100", "0830", "1450", "2100", "2500", "3300", "4000", "5200", "9999"] {
            for statement_type in StatementType::ALL {
                let first = section_for_account(&chart, &code(raw), statement_type);
                let second = section_for_account(&chart, &code(raw), statement_type);
                assert_eq!(first, second, "{raw} under {statement_type}");
            }
        }
    }

    #[test]
    fn balance_sheet_sections_follow_code_blocks() {
        let chart = ChartOfAccounts::for_layout(CoaLayout::Standard);
        let statement_type = StatementType::BalanceSheet;
        assert_eq!(
            section_for_account(&chart, &code("0400"), statement_type),
            SectionId::AssetsCurrent
        );
        assert_eq!(
            section_for_account(&chart, &code("0900"), statement_type),
            SectionId::AssetsNoncurrent
        );
        assert_eq!(
            section_for_account(&chart, &code("1500"), statement_type),
            SectionId::AssetsNoncurrent
        );
        assert_eq!(
            section_for_account(&chart, &code("2100"), statement_type),
            SectionId::LiabilitiesCurrent
        );
        assert_eq!(
            section_for_account(&chart, &code("2400"), statement_type),
            SectionId::LiabilitiesNoncurrent
        );
        assert_eq!(
            section_for_account(&chart, &code("3300"), statement_type),
            SectionId::Equity
        );
    }

    #[test]
    fn unmatched_codes_fall_back_to_other() {
        let chart = ChartOfAccounts::for_layout(CoaLayout::Standard);
        assert_eq!(
            section_for_account(&chart, &code("1900"), StatementType::BalanceSheet),
            SectionId::Other
        );
        assert_eq!(
            section_for_account(&chart, &code("0400"), StatementType::Income),
            SectionId::Other
        );
    }

    #[test]
    fn same_code_classifies_by_statement_type() {
        let chart = ChartOfAccounts::for_layout(CoaLayout::Standard);
        let cash = code("0200");
        assert_eq!(
            section_for_account(&chart, &cash, StatementType::BalanceSheet),
            SectionId::AssetsCurrent
        );
        assert_eq!(
            section_for_account(&chart, &cash, StatementType::CashFlow),
            SectionId::Operating
        );
    }

    #[test]
    fn legacy_layout_classifies_income_in_the_7000_block() {
        let chart = ChartOfAccounts::for_layout(CoaLayout::Legacy);
        assert_eq!(
            section_for_account(&chart, &code("7000"), StatementType::Income),
            SectionId::Revenue
        );
        assert_eq!(
            section_for_account(&chart, &code("8000"), StatementType::ProfitAndLoss),
            SectionId::CostOfSales
        );
        assert_eq!(
            section_for_account(&chart, &code("8200"), StatementType::Income),
            SectionId::OperatingExpenses
        );
    }
}
