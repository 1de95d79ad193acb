//! Enumeration of truth assignments.
//!
//! Assignments are produced in lexicographic order with `true` before `false`
//! at every position, so the first variable varies slowest:
//!
//! ```text
//! [T, T], [T, F], [F, T], [F, F]
//! ```

use std::iter::FusedIterator;

/// One truth value per variable, in variable-set order.
pub type Assignment = Vec<bool>;

/// Iterator over all `2^n` assignments of `n` variables.
///
/// Works like an odometer: the rightmost `true` flips to `false` and every
/// position after it resets to `true`.
#[derive(Debug, Clone)]
pub struct Assignments {
    current: Option<Assignment>,
}

impl Assignments {
    pub fn new(num_vars: usize) -> Self {
        Self {
            current: Some(vec![true; num_vars]),
        }
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        if let Some(pos) = current.iter().rposition(|&b| b) {
            let mut next = current.clone();
            next[pos] = false;
            next[pos + 1..].fill(true);
            self.current = Some(next);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.current {
            None => (0, Some(0)),
            Some(current) => {
                // Remaining = 1 + `current` read as a binary number with true = 1.
                let remaining = current.iter().try_fold(0usize, |acc, &b| {
                    acc.checked_mul(2).and_then(|acc| acc.checked_add(usize::from(b)))
                });
                match remaining.and_then(|r| r.checked_add(1)) {
                    Some(r) => (r, Some(r)),
                    None => (usize::MAX, None),
                }
            }
        }
    }
}

impl FusedIterator for Assignments {}

/// Returns every assignment of `num_vars` variables in enumeration order.
///
/// Zero variables yield exactly one empty assignment.
pub fn enumerate(num_vars: usize) -> Vec<Assignment> {
    Assignments::new(num_vars).collect()
}

/// Number of assignments of `num_vars` variables, if it fits in `usize`.
pub fn count(num_vars: usize) -> Option<usize> {
    u32::try_from(num_vars).ok().and_then(|n| 1usize.checked_shl(n))
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_zero_vars() {
        assert_eq!(enumerate(0), vec![Vec::<bool>::new()]);
    }

    #[test]
    fn test_one_var() {
        assert_eq!(enumerate(1), vec![vec![true], vec![false]]);
    }

    #[test]
    fn test_two_vars() {
        assert_eq!(
            enumerate(2),
            vec![
                vec![true, true],
                vec![true, false],
                vec![false, true],
                vec![false, false],
            ]
        );
    }

    #[test]
    fn test_count_and_distinct() {
        for n in 0..=8 {
            let all = enumerate(n);
            assert_eq!(Some(all.len()), count(n));
            let mut sorted = all.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), all.len());
            assert!(all.iter().all(|a| a.len() == n));
        }
    }

    #[test]
    fn test_lexicographic_true_first() {
        let all = enumerate(4);
        for (i, a) in all.iter().enumerate() {
            // `i` written in binary with 1 = false, most significant bit first
            let expected: Vec<bool> = (0..4).rev().map(|j| (i >> j) & 1 == 0).collect();
            assert_eq!(a, &expected);
        }
    }

    #[test]
    fn test_size_hint() {
        let mut it = Assignments::new(3);
        assert_eq!(it.size_hint(), (8, Some(8)));
        it.next();
        it.next();
        assert_eq!(it.size_hint(), (6, Some(6)));
        assert_eq!(it.by_ref().count(), 6);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
    }
}
