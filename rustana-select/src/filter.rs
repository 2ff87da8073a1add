//! Kinematic selection over candidate collections.

use rustana_core::Candidate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kinematic cut window for candidate selection.
///
/// The defaults keep everything a detector can reconstruct: no momentum
/// floor and a pseudorapidity window open on both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KinematicCuts {
    /// Minimum transverse momentum (GeV).
    pub pt_min: f64,
    /// Maximum absolute pseudorapidity.
    pub abs_eta_max: f64,
    /// Minimum absolute pseudorapidity.
    pub abs_eta_min: f64,
}

impl Default for KinematicCuts {
    fn default() -> Self {
        Self {
            pt_min: 0.0,
            abs_eta_max: 20.0,
            abs_eta_min: -1.0,
        }
    }
}

impl KinematicCuts {
    /// Creates cuts with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum transverse momentum.
    #[must_use]
    pub fn with_pt_min(mut self, pt_min: f64) -> Self {
        self.pt_min = pt_min;
        self
    }

    /// Sets the maximum absolute pseudorapidity.
    #[must_use]
    pub fn with_abs_eta_max(mut self, abs_eta_max: f64) -> Self {
        self.abs_eta_max = abs_eta_max;
        self
    }

    /// Sets the minimum absolute pseudorapidity.
    #[must_use]
    pub fn with_abs_eta_min(mut self, abs_eta_min: f64) -> Self {
        self.abs_eta_min = abs_eta_min;
        self
    }

    /// Returns true if a candidate falls inside the cut window.
    pub fn passes<C: Candidate>(&self, candidate: &C) -> bool {
        let abs_eta = candidate.abs_eta();
        candidate.pt() >= self.pt_min && abs_eta <= self.abs_eta_max && abs_eta >= self.abs_eta_min
    }
}

/// Selects the candidates inside a kinematic cut window.
///
/// Input elements are never copied or mutated; the output borrows them in
/// their original relative order. Because references to candidates are
/// candidates themselves, the output can be filtered again with equal or
/// tighter cuts.
pub fn filter<'a, C: Candidate>(objects: &'a [C], cuts: &KinematicCuts) -> Vec<&'a C> {
    objects.iter().filter(|&obj| cuts.passes(obj)).collect()
}

/// Selects candidates with an arbitrary predicate.
///
/// Same contract as [`filter`] with the inclusion test supplied by the
/// caller, for selections that are not plain kinematic windows.
pub fn filter_with<'a, C, F>(objects: &'a [C], mut select: F) -> Vec<&'a C>
where
    C: Candidate,
    F: FnMut(&C) -> bool,
{
    objects.iter().filter(|&obj| select(obj)).collect()
}

/// Sorts a reference collection by descending transverse momentum.
pub fn sort_by_pt<C: Candidate>(objects: &mut [&C]) {
    objects.sort_by(|a, b| b.pt().total_cmp(&a.pt()));
}
