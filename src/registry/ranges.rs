use serde::{Deserialize, Serialize};

use crate::statement::{Language, SectionId, StatementType};

use super::accounts::{
    AccountClassification, AccountCode, AccountType, LEGACY_ACCOUNTS, LEGACY_INDEX,
    STANDARD_ACCOUNTS, STANDARD_INDEX,
};

/// Inclusive account-code range, compared as zero-padded strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountCodeRange {
    pub start: &'static str,
    pub end: &'static str,
}

impl AccountCodeRange {
    pub const fn new(start: &'static str, end: &'static str) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, code: &AccountCode) -> bool {
        let code = code.as_str();
        code >= self.start && code <= self.end
    }
}

/// Maps a top-level account type to its code block within a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeBlock {
    pub kind: AccountType,
    pub range: AccountCodeRange,
}

/// Maps a statement section to one of its code ranges. A section may own
/// several disjoint ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRange {
    pub section: SectionId,
    pub range: AccountCodeRange,
}

/// Income-statement aggregates, each a set of disjoint code ranges.
#[derive(Debug, Clone, Copy)]
pub struct IncomeBuckets {
    pub revenue: &'static [AccountCodeRange],
    pub other_income: &'static [AccountCodeRange],
    pub financial_income: &'static [AccountCodeRange],
    pub cost_of_sales: &'static [AccountCodeRange],
    pub operating_expenses: &'static [AccountCodeRange],
    pub other_expenses: &'static [AccountCodeRange],
    pub financial_expenses: &'static [AccountCodeRange],
    pub income_tax: &'static [AccountCodeRange],
}

/// Named chart-of-accounts profile. The two layouts reuse the same code
/// space for different semantic buckets and are never merged.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CoaLayout {
    #[default]
    Standard,
    Legacy,
}

const fn block(kind: AccountType, start: &'static str, end: &'static str) -> TypeBlock {
    TypeBlock {
        kind,
        range: AccountCodeRange::new(start, end),
    }
}

const fn section(id: SectionId, start: &'static str, end: &'static str) -> SectionRange {
    SectionRange {
        section: id,
        range: AccountCodeRange::new(start, end),
    }
}

static STANDARD_TYPE_BLOCKS: &[TypeBlock] = &[
    block(AccountType::Asset, "0100", "1399"),
    block(AccountType::ContraAsset, "1400", "1799"),
    block(AccountType::Liability, "2000", "2899"),
    block(AccountType::Equity, "3000", "3499"),
    block(AccountType::Revenue, "4000", "4999"),
    block(AccountType::Expense, "5000", "5499"),
];

static LEGACY_TYPE_BLOCKS: &[TypeBlock] = &[
    block(AccountType::Asset, "0100", "2999"),
    block(AccountType::ContraAsset, "3000", "3999"),
    block(AccountType::Liability, "4000", "5999"),
    block(AccountType::Equity, "6000", "6999"),
    block(AccountType::Revenue, "7000", "7999"),
    block(AccountType::Expense, "8000", "8999"),
    block(AccountType::Manufacturing, "9000", "9499"),
];

static STANDARD_BALANCE_SHEET: &[SectionRange] = &[
    section(SectionId::AssetsCurrent, "0100", "0799"),
    section(SectionId::AssetsNoncurrent, "0800", "1399"),
    // Contra assets net against the long-term assets they relate to.
    section(SectionId::AssetsNoncurrent, "1400", "1799"),
    section(SectionId::LiabilitiesCurrent, "2000", "2399"),
    section(SectionId::LiabilitiesNoncurrent, "2400", "2899"),
    section(SectionId::Equity, "3000", "3499"),
];

static STANDARD_INCOME: &[SectionRange] = &[
    section(SectionId::Revenue, "4000", "4999"),
    section(SectionId::CostOfSales, "5000", "5099"),
    section(SectionId::OperatingExpenses, "5100", "5499"),
];

static STANDARD_CASH_FLOW: &[SectionRange] = &[
    section(SectionId::Operating, "0100", "0799"),
    section(SectionId::Investing, "0800", "1799"),
    section(SectionId::Operating, "2000", "2399"),
    section(SectionId::Financing, "2400", "2899"),
    section(SectionId::Financing, "3000", "3499"),
    section(SectionId::Operating, "4000", "4999"),
    section(SectionId::Operating, "5000", "5499"),
];

static LEGACY_BALANCE_SHEET: &[SectionRange] = &[
    section(SectionId::AssetsCurrent, "0100", "0799"),
    section(SectionId::AssetsNoncurrent, "0800", "2999"),
    section(SectionId::AssetsNoncurrent, "3000", "3999"),
    section(SectionId::LiabilitiesCurrent, "4000", "4999"),
    section(SectionId::LiabilitiesNoncurrent, "5000", "5999"),
    section(SectionId::Equity, "6000", "6999"),
];

static LEGACY_INCOME: &[SectionRange] = &[
    section(SectionId::Revenue, "7000", "7999"),
    section(SectionId::CostOfSales, "8000", "8099"),
    section(SectionId::OperatingExpenses, "8100", "8999"),
];

static LEGACY_CASH_FLOW: &[SectionRange] = &[
    section(SectionId::Operating, "0100", "0799"),
    section(SectionId::Investing, "0800", "3999"),
    section(SectionId::Operating, "4000", "4999"),
    section(SectionId::Financing, "5000", "6999"),
    section(SectionId::Operating, "7000", "8999"),
];

static STANDARD_INCOME_BUCKETS: IncomeBuckets = IncomeBuckets {
    revenue: &[AccountCodeRange::new("4000", "4099")],
    other_income: &[
        AccountCodeRange::new("4100", "4199"),
        AccountCodeRange::new("4300", "4999"),
    ],
    financial_income: &[AccountCodeRange::new("4200", "4299")],
    cost_of_sales: &[AccountCodeRange::new("5000", "5099")],
    operating_expenses: &[AccountCodeRange::new("5100", "5299")],
    other_expenses: &[AccountCodeRange::new("5300", "5399")],
    financial_expenses: &[AccountCodeRange::new("5400", "5449")],
    income_tax: &[AccountCodeRange::new("5450", "5499")],
};

static LEGACY_INCOME_BUCKETS: IncomeBuckets = IncomeBuckets {
    revenue: &[AccountCodeRange::new("7000", "7499")],
    other_income: &[AccountCodeRange::new("7600", "7999")],
    financial_income: &[AccountCodeRange::new("7500", "7599")],
    cost_of_sales: &[AccountCodeRange::new("8000", "8099")],
    operating_expenses: &[AccountCodeRange::new("8100", "8499")],
    other_expenses: &[
        AccountCodeRange::new("8600", "8699"),
        AccountCodeRange::new("8800", "8999"),
    ],
    financial_expenses: &[AccountCodeRange::new("8500", "8599")],
    income_tax: &[AccountCodeRange::new("8700", "8799")],
};

/// Read-only view over one chart-of-accounts profile. Cheap to construct;
/// all tables are static.
#[derive(Debug, Clone, Copy)]
pub struct ChartOfAccounts {
    layout: CoaLayout,
}

impl ChartOfAccounts {
    pub fn for_layout(layout: CoaLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> CoaLayout {
        self.layout
    }

    /// Exact-account lookup. A miss means "other/unclassified", never a
    /// fatal error.
    pub fn lookup(&self, code: &AccountCode) -> Option<&'static AccountClassification> {
        let index = match self.layout {
            CoaLayout::Standard => &STANDARD_INDEX,
            CoaLayout::Legacy => &LEGACY_INDEX,
        };
        index.get(code.as_str()).copied()
    }

    /// Localized display name for an account, when the registry knows it.
    pub fn account_name(&self, code: &AccountCode, language: Language) -> Option<&'static str> {
        self.lookup(code).map(|acc| match language {
            Language::En => acc.name.en,
            Language::Native => acc.name.native,
        })
    }

    pub fn accounts(&self) -> &'static [AccountClassification] {
        match self.layout {
            CoaLayout::Standard => STANDARD_ACCOUNTS,
            CoaLayout::Legacy => LEGACY_ACCOUNTS,
        }
    }

    pub fn type_blocks(&self) -> &'static [TypeBlock] {
        match self.layout {
            CoaLayout::Standard => STANDARD_TYPE_BLOCKS,
            CoaLayout::Legacy => LEGACY_TYPE_BLOCKS,
        }
    }

    /// Coarse range-based account type for codes the exact table does not
    /// know.
    pub fn type_for_code(&self, code: &AccountCode) -> Option<AccountType> {
        self.type_blocks()
            .iter()
            .find(|b| b.range.contains(code))
            .map(|b| b.kind)
    }

    /// Ordered section ranges for a statement type; first containing range
    /// wins during classification.
    pub fn section_ranges(&self, statement_type: StatementType) -> &'static [SectionRange] {
        match (self.layout, statement_type) {
            (CoaLayout::Standard, StatementType::BalanceSheet) => STANDARD_BALANCE_SHEET,
            (CoaLayout::Standard, StatementType::Income)
            | (CoaLayout::Standard, StatementType::ProfitAndLoss) => STANDARD_INCOME,
            (CoaLayout::Standard, StatementType::CashFlow) => STANDARD_CASH_FLOW,
            (CoaLayout::Legacy, StatementType::BalanceSheet) => LEGACY_BALANCE_SHEET,
            (CoaLayout::Legacy, StatementType::Income)
            | (CoaLayout::Legacy, StatementType::ProfitAndLoss) => LEGACY_INCOME,
            (CoaLayout::Legacy, StatementType::CashFlow) => LEGACY_CASH_FLOW,
        }
    }

    pub fn income_buckets(&self) -> &'static IncomeBuckets {
        match self.layout {
            CoaLayout::Standard => &STANDARD_INCOME_BUCKETS,
            CoaLayout::Legacy => &LEGACY_INCOME_BUCKETS,
        }
    }
}
