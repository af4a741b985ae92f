use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Four-digit, zero-padded account code as used by the national chart of
/// accounts. Ordering is lexicographic, which at fixed width is equivalent
/// to numeric ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct AccountCode(String);

impl AccountCode {
    /// Parses and zero-pads a raw ledger code (`"830"` becomes `"0830"`).
    pub fn new(raw: &str) -> Result<Self, EngineError> {
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed.len() > 4
            || !trimmed.chars().all(|ch| ch.is_ascii_digit())
        {
            return Err(EngineError::InvalidAccountCode(raw.to_string()));
        }
        Ok(Self(format!("{:0>4}", trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountCode {
    type Err = EngineError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

impl TryFrom<String> for AccountCode {
    type Error = EngineError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl From<AccountCode> for String {
    fn from(code: AccountCode) -> Self {
        code.0
    }
}

/// Top-level account taxonomy shared by every validator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AccountType {
    Asset,
    ContraAsset,
    Liability,
    Equity,
    Revenue,
    Expense,
    Manufacturing,
}

/// Which side an un-violated balance conventionally sits on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NormalBalance {
    Debit,
    Credit,
}

/// Account label in English plus the chart's native language (Russian for
/// the standard profile, Uzbek for the legacy profile).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedName {
    pub en: &'static str,
    pub native: &'static str,
}

/// One row of the static chart-of-accounts registry. Loaded once at process
/// start; never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountClassification {
    pub code: &'static str,
    pub name: LocalizedName,
    pub kind: AccountType,
    pub category: &'static str,
    pub normal_balance: NormalBalance,
}

const fn account(
    code: &'static str,
    en: &'static str,
    native: &'static str,
    kind: AccountType,
    category: &'static str,
    normal_balance: NormalBalance,
) -> AccountClassification {
    AccountClassification {
        code,
        name: LocalizedName { en, native },
        kind,
        category,
        normal_balance,
    }
}

use AccountType::*;
use NormalBalance::*;

/// Standard profile: assets 0100-1399, contra assets 1400-1799, liabilities
/// 2000-2899, equity 3000-3499, revenue 4000-4999, expenses 5000-5499.
pub(crate) static STANDARD_ACCOUNTS: &[AccountClassification] = &[
    account("0100", "Cash on hand", "Денежные средства в кассе", Asset, "current", Debit),
    account("0200", "Cash in bank", "Денежные средства на расчетном счете", Asset, "current", Debit),
    account("0300", "Short-term investments", "Краткосрочные инвестиции", Asset, "current", Debit),
    account("0400", "Accounts receivable", "Счета к получению", Asset, "current", Debit),
    account("0500", "Inventory", "Товарно-материальные запасы", Asset, "current", Debit),
    account("0600", "Prepaid expenses", "Предоплаченные расходы", Asset, "current", Debit),
    account("0800", "Long-term investments", "Долгосрочные инвестиции", Asset, "noncurrent", Debit),
    account("0900", "Fixed assets", "Основные средства", Asset, "noncurrent", Debit),
    account("1100", "Intangible assets", "Нематериальные активы", Asset, "noncurrent", Debit),
    account("1400", "Allowance for doubtful accounts", "Резерв по сомнительным долгам", ContraAsset, "contra", Credit),
    account("1500", "Accumulated depreciation - fixed assets", "Накопленная амортизация - основные средства", ContraAsset, "contra", Credit),
    account("1600", "Accumulated amortization - intangible assets", "Накопленная амортизация - нематериальные активы", ContraAsset, "contra", Credit),
    account("2000", "Short-term loans", "Краткосрочные кредиты и займы", Liability, "current", Credit),
    account("2100", "Accounts payable", "Счета к оплате", Liability, "current", Credit),
    account("2200", "Accrued liabilities", "Начисленные обязательства", Liability, "current", Credit),
    account("2300", "Taxes payable", "Налоги к оплате", Liability, "current", Credit),
    account("2400", "Long-term loans", "Долгосрочные кредиты и займы", Liability, "noncurrent", Credit),
    account("3000", "Charter capital", "Уставный капитал", Equity, "capital", Credit),
    account("3100", "Additional paid-in capital", "Добавленный капитал", Equity, "capital", Credit),
    account("3200", "Reserve capital", "Резервный капитал", Equity, "capital", Credit),
    account("3300", "Retained earnings", "Нераспределенная прибыль", Equity, "capital", Credit),
    account("3400", "Treasury shares", "Собственные выкупленные акции", Equity, "capital", Credit),
    account("4000", "Sales revenue", "Выручка от реализации", Revenue, "operating", Credit),
    account("4100", "Other income", "Прочие доходы", Revenue, "other", Credit),
    account("4200", "Financial income", "Доходы от финансовой деятельности", Revenue, "financial", Credit),
    account("5000", "Cost of sales", "Себестоимость реализации", Expense, "operating", Debit),
    account("5100", "Selling expenses", "Коммерческие расходы", Expense, "operating", Debit),
    account("5200", "Administrative expenses", "Административные расходы", Expense, "operating", Debit),
    account("5300", "Other operating expenses", "Прочие операционные расходы", Expense, "other", Debit),
    account("5400", "Financial expenses", "Расходы по финансовой деятельности", Expense, "financial", Debit),
    account("5450", "Income tax", "Налог на прибыль", Expense, "tax", Debit),
];

/// Legacy profile: the alternate block layout with revenue and expenses in
/// the 7000-9999 region and manufacturing accounts at 9000-9499.
pub(crate) static LEGACY_ACCOUNTS: &[AccountClassification] = &[
    account("0100", "Cash on hand", "Kassa", Asset, "current", Debit),
    account("0110", "Foreign currency cash", "Valyuta kassasi", Asset, "current", Debit),
    account("0200", "Settlement account", "Hisob-kitob schyoti", Asset, "current", Debit),
    account("0210", "Foreign currency account", "Valyuta schyoti", Asset, "current", Debit),
    account("0300", "Short-term investments", "Qisqa muddatli investitsiyalar", Asset, "current", Debit),
    account("0400", "Accounts receivable", "Olinadigan schetlar", Asset, "current", Debit),
    account("0500", "Inventory", "Tovar-moddiy zaxiralar", Asset, "current", Debit),
    account("0600", "Prepaid expenses", "Kelgusi davr xarajatlari", Asset, "current", Debit),
    account("1000", "Fixed assets", "Asosiy vositalar", Asset, "noncurrent", Debit),
    account("1100", "Intangible assets", "Nomoddiy aktivlar", Asset, "noncurrent", Debit),
    account("1200", "Long-term investments", "Uzoq muddatli investitsiyalar", Asset, "noncurrent", Debit),
    account("3000", "Accumulated depreciation - fixed assets", "Asosiy vositalar amortizatsiyasi", ContraAsset, "contra", Credit),
    account("3100", "Accumulated amortization - intangible assets", "Nomoddiy aktivlar amortizatsiyasi", ContraAsset, "contra", Credit),
    account("3400", "Allowance for doubtful accounts", "Shubhali qarzlar rezervi", ContraAsset, "contra", Credit),
    account("4000", "Accounts payable", "Toʻlanadigan schetlar", Liability, "current", Credit),
    account("4100", "Short-term bank loans", "Qisqa muddatli bank kreditlari", Liability, "current", Credit),
    account("4200", "Tax payable", "Soliqlar boʻyicha qarz", Liability, "current", Credit),
    account("4300", "Wages payable", "Mehnatga haq toʻlash boʻyicha qarz", Liability, "current", Credit),
    account("5000", "Long-term bank loans", "Uzoq muddatli bank kreditlari", Liability, "noncurrent", Credit),
    account("5100", "Long-term debt", "Uzoq muddatli qarzlar", Liability, "noncurrent", Credit),
    account("6000", "Charter capital", "Ustav kapitali", Equity, "capital", Credit),
    account("6100", "Reserve capital", "Rezerv kapitali", Equity, "capital", Credit),
    account("6200", "Additional paid-in capital", "Qoʻshilgan kapital", Equity, "capital", Credit),
    account("6300", "Retained earnings", "Taqsimlanmagan foyda", Equity, "capital", Credit),
    account("7000", "Revenue from main activities", "Asosiy faoliyatdan tushum", Revenue, "operating", Credit),
    account("7100", "Other operating revenue", "Boshqa operatsion daromadlar", Revenue, "operating", Credit),
    account("7500", "Financial income", "Moliyaviy faoliyatdan daromadlar", Revenue, "financial", Credit),
    account("8000", "Cost of goods sold", "Sotilgan mahsulot tannarxi", Expense, "operating", Debit),
    account("8100", "Period expenses", "Davr xarajatlari", Expense, "operating", Debit),
    account("8500", "Financial expenses", "Moliyaviy faoliyat boʻyicha xarajatlar", Expense, "financial", Debit),
    account("8600", "Extraordinary losses", "Favqulodda zararlar", Expense, "other", Debit),
    account("8700", "Income tax", "Daromad (foyda) soligʻi", Expense, "tax", Debit),
    account("9000", "Direct materials", "Bevosita materiallar", Manufacturing, "materials", Debit),
    account("9100", "Direct labor", "Bevosita mehnat", Manufacturing, "labor", Debit),
    account("9200", "Manufacturing overhead", "Ishlab chiqarish ustama xarajatlari", Manufacturing, "overhead", Debit),
    account("9300", "Work in process", "Tugallanmagan ishlab chiqarish", Manufacturing, "wip", Debit),
];

pub(crate) static STANDARD_INDEX: Lazy<HashMap<&'static str, &'static AccountClassification>> =
    Lazy::new(|| STANDARD_ACCOUNTS.iter().map(|acc| (acc.code, acc)).collect());

pub(crate) static LEGACY_INDEX: Lazy<HashMap<&'static str, &'static AccountClassification>> =
    Lazy::new(|| LEGACY_ACCOUNTS.iter().map(|acc| (acc.code, acc)).collect());
