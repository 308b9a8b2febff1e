//! Property-based testing for `TrellisDB` invariants.
//!
//! Uses proptest to verify that pipeline properties hold for generated
//! requests, not just hand-picked ones.

pub mod properties;
