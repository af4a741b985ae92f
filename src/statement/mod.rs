//! Statement domain models: line items, subtotals, statements, sections,
//! and the violation/severity taxonomy.

pub mod line_item;
pub mod section;
#[allow(clippy::module_inception)]
pub mod statement;
pub mod violation;

pub use line_item::LineItem;
pub use section::{Language, SectionId};
pub use statement::{GeneratedStatement, StatementType, Subtotal};
pub use violation::{Severity, Violation};
