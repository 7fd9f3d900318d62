#![doc(test(attr(deny(warnings))))]

//! Project Core offers customer, project cost, and inventory aggregation
//! primitives that power project-management dashboards and reports.

pub mod agg;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod format;
pub mod storage;
pub mod tax;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Project Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
