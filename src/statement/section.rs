use std::fmt;

use serde::{Deserialize, Serialize};

use super::statement::StatementType;

/// Display language for account and section labels.
///
/// `Native` resolves to the chart profile's local language: Russian for the
/// standard profile, Uzbek for the legacy profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Language {
    En,
    Native,
}

/// Stable section identifier, decoupled from the human-readable title so a
/// renamed label can never break a range lookup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    AssetsCurrent,
    AssetsNoncurrent,
    LiabilitiesCurrent,
    LiabilitiesNoncurrent,
    Equity,
    Revenue,
    CostOfSales,
    OperatingExpenses,
    Operating,
    Investing,
    Financing,
    Other,
}

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::AssetsCurrent => "assets_current",
            SectionId::AssetsNoncurrent => "assets_noncurrent",
            SectionId::LiabilitiesCurrent => "liabilities_current",
            SectionId::LiabilitiesNoncurrent => "liabilities_noncurrent",
            SectionId::Equity => "equity",
            SectionId::Revenue => "revenue",
            SectionId::CostOfSales => "cost_of_sales",
            SectionId::OperatingExpenses => "operating_expenses",
            SectionId::Operating => "operating",
            SectionId::Investing => "investing",
            SectionId::Financing => "financing",
            SectionId::Other => "other",
        }
    }

    /// Parses a section identifier from its wire form. Unknown names return
    /// `None`; callers decide whether that is a rejection or `Other`.
    pub fn parse(raw: &str) -> Option<SectionId> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "assets_current" => Some(SectionId::AssetsCurrent),
            "assets_noncurrent" => Some(SectionId::AssetsNoncurrent),
            "liabilities_current" => Some(SectionId::LiabilitiesCurrent),
            "liabilities_noncurrent" => Some(SectionId::LiabilitiesNoncurrent),
            "equity" => Some(SectionId::Equity),
            "revenue" => Some(SectionId::Revenue),
            "cost_of_sales" => Some(SectionId::CostOfSales),
            "operating_expenses" => Some(SectionId::OperatingExpenses),
            "operating" => Some(SectionId::Operating),
            "investing" => Some(SectionId::Investing),
            "financing" => Some(SectionId::Financing),
            "other" => Some(SectionId::Other),
            _ => None,
        }
    }

    /// The sections a statement type displays, in presentation order. The
    /// `other` sentinel is implicit and always accepted alongside these.
    pub fn sections_for(statement_type: StatementType) -> &'static [SectionId] {
        match statement_type {
            StatementType::BalanceSheet => &[
                SectionId::AssetsCurrent,
                SectionId::AssetsNoncurrent,
                SectionId::LiabilitiesCurrent,
                SectionId::LiabilitiesNoncurrent,
                SectionId::Equity,
            ],
            StatementType::Income | StatementType::ProfitAndLoss => &[
                SectionId::Revenue,
                SectionId::CostOfSales,
                SectionId::OperatingExpenses,
            ],
            StatementType::CashFlow => &[
                SectionId::Operating,
                SectionId::Investing,
                SectionId::Financing,
            ],
        }
    }

    pub fn is_assets_section(&self) -> bool {
        matches!(self, SectionId::AssetsCurrent | SectionId::AssetsNoncurrent)
    }

    pub fn is_liabilities_section(&self) -> bool {
        matches!(
            self,
            SectionId::LiabilitiesCurrent | SectionId::LiabilitiesNoncurrent
        )
    }

    pub fn is_expense_subsection(&self) -> bool {
        matches!(self, SectionId::CostOfSales | SectionId::OperatingExpenses)
    }

    /// Presentation title for the section, per language.
    pub fn title(&self, language: Language) -> &'static str {
        match (self, language) {
            (SectionId::AssetsCurrent, Language::En) => "Current Assets",
            (SectionId::AssetsCurrent, Language::Native) => "Текущие активы",
            (SectionId::AssetsNoncurrent, Language::En) => "Non-Current Assets",
            (SectionId::AssetsNoncurrent, Language::Native) => "Долгосрочные активы",
            (SectionId::LiabilitiesCurrent, Language::En) => "Current Liabilities",
            (SectionId::LiabilitiesCurrent, Language::Native) => "Текущие обязательства",
            (SectionId::LiabilitiesNoncurrent, Language::En) => "Non-Current Liabilities",
            (SectionId::LiabilitiesNoncurrent, Language::Native) => "Долгосрочные обязательства",
            (SectionId::Equity, Language::En) => "Equity",
            (SectionId::Equity, Language::Native) => "Собственный капитал",
            (SectionId::Revenue, Language::En) => "Revenue",
            (SectionId::Revenue, Language::Native) => "Доходы",
            (SectionId::CostOfSales, Language::En) => "Cost of Sales",
            (SectionId::CostOfSales, Language::Native) => "Себестоимость реализации",
            (SectionId::OperatingExpenses, Language::En) => "Operating Expenses",
            (SectionId::OperatingExpenses, Language::Native) => "Операционные расходы",
            (SectionId::Operating, Language::En) => "Operating Activities",
            (SectionId::Operating, Language::Native) => "Операционная деятельность",
            (SectionId::Investing, Language::En) => "Investing Activities",
            (SectionId::Investing, Language::Native) => "Инвестиционная деятельность",
            (SectionId::Financing, Language::En) => "Financing Activities",
            (SectionId::Financing, Language::Native) => "Финансовая деятельность",
            (SectionId::Other, Language::En) => "Other",
            (SectionId::Other, Language::Native) => "Прочее",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
