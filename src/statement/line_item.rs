use serde::{Deserialize, Serialize};

use crate::registry::AccountCode;
use crate::utils::slugify;

/// One row of a generated statement. The `section` field is the only part
/// mutated during interactive reclassification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub description: String,
    pub code: AccountCode,
    pub amount: f64,
    pub section: String,
}

impl LineItem {
    pub fn new(
        description: impl Into<String>,
        code: AccountCode,
        amount: f64,
        section: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            code,
            amount,
            section: section.into(),
        }
    }

    /// Stable derived identifier: account code plus a slug of the
    /// description.
    pub fn id(&self) -> String {
        format!("{}-{}", self.code, slugify(&self.description))
    }
}
