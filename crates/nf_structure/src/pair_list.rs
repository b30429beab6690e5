//! Pair lists: the folding output representation.
//!
//! A `PairList` records which positions of a length-n sequence are
//! bonded. Indices are **0-based** throughout, consistent with
//! `PairTable` and the dynamic programming matrices in `nf_folding`.

/// An unordered collection of base pairs (i, j) with i < j over a
/// sequence of `length` positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairList {
    pub length: usize,
    pub pairs: Vec<(usize, usize)>,
}

impl PairList {
    /// Create an empty pair list for a given sequence length.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            pairs: Vec::new(),
        }
    }

    /// Number of pairs contained in the list.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Append a pair (i, j). Panics in debug if i >= j.
    pub fn push(&mut self, i: usize, j: usize) {
        debug_assert!(i < j);
        debug_assert!(j < self.length);
        self.pairs.push((i, j));
    }

    /// Check that the list is a partial matching: every pair is in
    /// bounds with i < j, and no position occurs twice.
    pub fn is_matching(&self) -> bool {
        let mut seen = vec![false; self.length];
        for &(i, j) in &self.pairs {
            if i >= j || j >= self.length {
                return false;
            }
            if seen[i] || seen[j] {
                return false;
            }
            seen[i] = true;
            seen[j] = true;
        }
        true
    }

    /// Check that no two pairs cross: (a, b) and (c, d) with
    /// a < c < b < d never both occur.
    pub fn is_noncrossing(&self) -> bool {
        for (x, &(a, b)) in self.pairs.iter().enumerate() {
            for &(c, d) in &self.pairs[x + 1..] {
                let (a, b, c, d) = if a < c { (a, b, c, d) } else { (c, d, a, b) };
                if c < b && b < d {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_len() {
        let mut pl = PairList::new(6);
        assert!(pl.is_empty());
        pl.push(0, 5);
        pl.push(1, 4);
        assert_eq!(pl.len(), 2);
        assert_eq!(pl.pairs, vec![(0, 5), (1, 4)]);
    }

    #[test]
    fn test_matching_detects_reused_position() {
        let pl = PairList { length: 6, pairs: vec![(0, 3), (3, 5)] };
        assert!(!pl.is_matching());
    }

    #[test]
    fn test_matching_detects_out_of_bounds() {
        let pl = PairList { length: 4, pairs: vec![(1, 4)] };
        assert!(!pl.is_matching());
    }

    #[test]
    fn test_nested_pairs_do_not_cross() {
        let pl = PairList { length: 8, pairs: vec![(0, 7), (1, 4), (5, 6)] };
        assert!(pl.is_matching());
        assert!(pl.is_noncrossing());
    }

    #[test]
    fn test_crossing_pairs_detected() {
        let pl = PairList { length: 6, pairs: vec![(0, 3), (2, 5)] };
        assert!(pl.is_matching());
        assert!(!pl.is_noncrossing());
    }
}
