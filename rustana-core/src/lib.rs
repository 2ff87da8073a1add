//! rustana-core: Core traits and types for collider event analysis.
//!
//! This crate provides the foundational abstractions for reconstructed-object
//! kinematics, per-event weight bookkeeping, and the capability seam to an
//! external jet-clustering backend.
//!

pub mod candidate;
pub mod clustering;
pub mod error;
pub mod weights;

pub use candidate::{delta_phi, Candidate, CandidateData};
pub use clustering::JetClustering;
pub use error::{Error, Result};
pub use weights::WeightStore;
