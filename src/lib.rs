#![doc(test(attr(deny(warnings))))]

//! Statement Core offers chart-of-accounts classification, statement
//! validation, and continuous monitoring primitives that power financial
//! statement review workflows.

pub mod classify;
pub mod config;
pub mod errors;
pub mod monitor;
pub mod registry;
pub mod statement;
pub mod utils;
pub mod validate;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Statement Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
