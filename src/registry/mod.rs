//! Static chart-of-accounts registry: account classifications, code ranges,
//! and reconciliation rules for the supported chart profiles.

pub mod accounts;
pub mod ranges;
pub mod rules;

pub use accounts::{
    AccountClassification, AccountCode, AccountType, LocalizedName, NormalBalance,
};
pub use ranges::{
    AccountCodeRange, ChartOfAccounts, CoaLayout, IncomeBuckets, SectionRange, TypeBlock,
};
pub use rules::{relationship_rules, RelationshipRule};
