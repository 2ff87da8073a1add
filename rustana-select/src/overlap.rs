//! Overlap removal between candidate collections.

use rustana_core::Candidate;

/// Removes from `primary` every candidate closer than `dr_min` to any
/// candidate in `secondary`.
///
/// The inner scan stops at the first overlapping partner; survivors are
/// returned in their original relative order. An empty `secondary` returns
/// all of `primary`. Worst case O(|primary| * |secondary|).
pub fn remove_overlap<'a, P, S>(primary: &'a [P], secondary: &[S], dr_min: f64) -> Vec<&'a P>
where
    P: Candidate,
    S: Candidate,
{
    remove_conditional(primary, secondary, |p, s| p.delta_r(s) < dr_min)
}

/// Removes from `primary` every candidate for which `overlaps` holds against
/// some candidate in `secondary`.
///
/// Identical control flow to [`remove_overlap`] with the removal test
/// supplied by the caller, for rules such as pt-dependent isolation cones.
pub fn remove_conditional<'a, P, S, F>(
    primary: &'a [P],
    secondary: &[S],
    mut overlaps: F,
) -> Vec<&'a P>
where
    P: Candidate,
    S: Candidate,
    F: FnMut(&P, &S) -> bool,
{
    primary
        .iter()
        .filter(|&p| !secondary.iter().any(|s| overlaps(p, s)))
        .collect()
}
