//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure math and formatting used by components, kept DOM-free so it runs
//! under native tests.

pub mod chart_math;
pub mod palette;
pub mod time;
