//! rustana-select: Kinematic selection and overlap removal.
//!
//! This crate provides the stateless per-event selection operations:
//! - **filter** - kinematic cut windows over candidate collections
//! - **`filter_with`** - arbitrary caller-supplied selection predicates
//! - **`remove_overlap`** - angular-distance overlap removal
//! - **`remove_conditional`** - rule-based overlap removal
//!
#![warn(missing_docs)]

mod filter;
mod overlap;

pub use filter::{filter, filter_with, sort_by_pt, KinematicCuts};
pub use overlap::{remove_conditional, remove_overlap};

// Re-export the core capability trait
pub use rustana_core::Candidate;
