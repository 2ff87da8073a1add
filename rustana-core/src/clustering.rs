//! Jet-clustering capability seam.
//!
//! The clustering algorithms themselves live in an external backend; this
//! module only defines the interface through which the analysis consumes
//! them.

use crate::candidate::Candidate;

/// Trait for external jet-clustering backends.
///
/// Implementations wrap a concrete clustering library and rebuild jets from
/// this crate's candidates without exposing any backend types.
pub trait JetClustering<C: Candidate>: Send + Sync {
    /// Returns the name of the backend algorithm.
    fn name(&self) -> &'static str;

    /// Reclusters a single jet and returns the hardest resulting jet.
    fn recluster(&self, jet: &C) -> C;

    /// Reclusters each jet in a collection, hardest first.
    fn recluster_all(&self, jets: &[&C]) -> Vec<C> {
        let mut output: Vec<C> = jets.iter().map(|jet| self.recluster(jet)).collect();
        output.sort_by(|a, b| b.pt().total_cmp(&a.pt()));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::CandidateData;
    use approx::assert_relative_eq;

    /// Test double standing in for a real clustering backend.
    struct HalvingBackend;

    impl JetClustering<CandidateData> for HalvingBackend {
        fn name(&self) -> &'static str {
            "halving"
        }

        fn recluster(&self, jet: &CandidateData) -> CandidateData {
            CandidateData::new(jet.pt / 2.0, jet.eta, jet.phi)
        }
    }

    #[test]
    fn test_recluster_all_orders_hardest_first() {
        let jets = [
            CandidateData::new(40.0, 0.1, 0.0),
            CandidateData::new(120.0, -0.4, 1.0),
            CandidateData::new(80.0, 1.2, 2.0),
        ];
        let refs: Vec<&CandidateData> = jets.iter().collect();

        let backend = HalvingBackend;
        assert_eq!(backend.name(), "halving");

        let reclustered = backend.recluster_all(&refs);
        assert_eq!(reclustered.len(), 3);
        assert_relative_eq!(reclustered[0].pt, 60.0);
        assert_relative_eq!(reclustered[1].pt, 40.0);
        assert_relative_eq!(reclustered[2].pt, 20.0);
    }
}
