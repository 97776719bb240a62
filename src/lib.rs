//! ChartNote — deterministic clinical narrative generation.
//!
//! Turns structured treatment-session selections into defensible skilled
//! documentation at the press of a button, using a pipeline of billing-code
//! grouping, index-cycled sentence templates, and aggregate assessment
//! synthesis. No randomness; identical input always yields identical text.

pub mod core;
pub mod lexicon;
pub mod schema;
pub mod session;
