//! State management for a titration run.
//!
//! Holds the composition of the vessel; pH and species are always derived
//! from it on demand and never stored.

mod solution;

pub use solution::SolutionState;
