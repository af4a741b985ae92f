use super::ranges::CoaLayout;

/// Declarative reconciliation rule between named accounts, evaluated by the
/// arithmetic validator's interpreter. Tagged variants replace any runtime
/// expression evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipRule {
    /// The main account's balance must cover the contra account's magnitude
    /// (e.g. receivables vs. the doubtful-debt allowance).
    MainCoversContra {
        name: &'static str,
        main: &'static str,
        contra: &'static str,
    },
    /// The listed accounts, when present, must sum to a positive amount.
    SumPositive {
        name: &'static str,
        accounts: &'static [&'static str],
    },
}

static STANDARD_RULES: &[RelationshipRule] = &[
    RelationshipRule::MainCoversContra {
        name: "receivables-allowance",
        main: "0400",
        contra: "1400",
    },
    RelationshipRule::MainCoversContra {
        name: "fixed-assets-depreciation",
        main: "0900",
        contra: "1500",
    },
];

static LEGACY_RULES: &[RelationshipRule] = &[
    RelationshipRule::MainCoversContra {
        name: "receivables-allowance",
        main: "0400",
        contra: "3400",
    },
    RelationshipRule::MainCoversContra {
        name: "fixed-assets-depreciation",
        main: "1000",
        contra: "3000",
    },
    RelationshipRule::SumPositive {
        name: "manufacturing-accounts",
        accounts: &["9000", "9100", "9200"],
    },
];

/// Reconciliation rules configured for a layout.
pub fn relationship_rules(layout: CoaLayout) -> &'static [RelationshipRule] {
    match layout {
        CoaLayout::Standard => STANDARD_RULES,
        CoaLayout::Legacy => LEGACY_RULES,
    }
}
