#![doc(test(attr(deny(warnings))))]

//! Finboard Core holds the domain records, mutation contract, and prognosis
//! scoring that power the personal-finance dashboard front end.

pub mod currency;
pub mod domain;
pub mod errors;
pub mod prognosis;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finboard Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
