//! Weight and balance calculator for a fixed catalog of light aircraft.
//!
//! The computation core is split across small focused crates; this façade
//! re-exports them so front-ends (CLI, future GUI or web callers) share one
//! dependency. Everything is synchronous and side-effect free: the catalog
//! is built once, and each computation is a pure function over it.

pub use wb_catalog as catalog;
pub use wb_core::{balance, constants, time, units};
pub use wb_engine as engine;
pub use wb_envelope as envelope;
pub use wb_export as export;
pub use wb_fuel as fuel;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
