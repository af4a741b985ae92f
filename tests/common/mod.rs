use statement_core::registry::AccountCode;
use statement_core::statement::{GeneratedStatement, LineItem, Subtotal};

pub fn line_item(code: &str, description: &str, amount: f64, section: &str) -> LineItem {
    LineItem::new(
        description,
        AccountCode::new(code).expect("valid code"),
        amount,
        section,
    )
}

/// A balanced income statement: revenue 100, cost of sales 40, operating
/// expenses 10, net income 50.
pub fn income_statement() -> GeneratedStatement {
    GeneratedStatement::new(
        vec![
            line_item("4000", "Sales revenue", 100.0, "revenue"),
            line_item("5000", "Cost of sales", -40.0, "cost_of_sales"),
            line_item("5100", "Selling expenses", -10.0, "operating_expenses"),
        ],
        vec![
            Subtotal::new("revenue total", 100.0),
            Subtotal::new("cost_of_sales total", -40.0),
            Subtotal::new("operating_expenses total", -10.0),
        ],
        50.0,
    )
}

/// A balanced balance sheet with the credit side recorded negative.
pub fn balance_sheet() -> GeneratedStatement {
    GeneratedStatement::new(
        vec![
            line_item("0100", "Cash on hand", 300.0, "assets_current"),
            line_item("0400", "Accounts receivable", 1000.0, "assets_current"),
            line_item("0900", "Fixed assets", 500.0, "assets_noncurrent"),
            line_item("2100", "Accounts payable", -800.0, "liabilities_current"),
            line_item("3000", "Charter capital", -1000.0, "equity"),
        ],
        Vec::new(),
        0.0,
    )
}
