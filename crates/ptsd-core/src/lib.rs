//! ptsd-core
//!
//! Pure domain types for the PTSD risk intake: the sixteen-field intake
//! record, its categorical codes, the ordered field schema, and the
//! assessment result. No I/O and no model dependency.

pub mod error;
pub mod fields;
pub mod models;
