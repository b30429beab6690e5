//! Nussinov-style base-pair maximization.
//!
//! Fills an O(n^2) dynamic programming table where `table[(i, j)]` is
//! the maximum number of Watson-Crick pairs achievable on the closed
//! subsequence i..=j, then reconstructs one optimal structure by a
//! deterministic traceback.

use ndarray::Array2;
use rayon::prelude::*;

use nf_structure::DotBracketVec;
use nf_structure::PairList;

use crate::error::FoldingError;
use crate::nucleotides::Base;
use crate::nucleotides::NucleotideVec;
use crate::nucleotides::PairType;

/// Pairing score for positions (i, j): 1 for A-U and C-G, else 0.
/// Wobble pairs (G-U) do not count.
fn bonus(seq: &[Base], i: usize, j: usize) -> usize {
    PairType::from((seq[i], seq[j])).is_wcf() as usize
}

/// One cell of the recurrence. All referenced cells span strictly
/// narrower intervals, so every width < j - i must be filled already.
fn cell(table: &Array2<usize>, seq: &[Base], min_loop_length: usize, i: usize, j: usize) -> usize {
    if j - i < min_loop_length {
        return 0;
    }
    let mut best = table[(i + 1, j)].max(table[(i, j - 1)]);
    best = best.max(table[(i + 1, j - 1)] + bonus(seq, i, j));
    for t in i..j {
        best = best.max(table[(i, t)] + table[(t + 1, j)]);
    }
    best
}

/// Nussinov dynamic program over a fixed sequence and minimal loop
/// length. The table is filled once on construction and read-only
/// afterwards.
pub struct Nussinov {
    sequence: NucleotideVec,
    min_loop_length: usize,
    table: Array2<usize>,
}

impl Nussinov {
    /// Fill the table sequentially, widths in increasing order.
    pub fn new(sequence: NucleotideVec, min_loop_length: usize) -> Self {
        let n = sequence.len();
        let mut table = Array2::from_elem((n, n), 0);
        for k in 1..n {
            for i in 0..n - k {
                let value = cell(&table, &sequence, min_loop_length, i, i + k);
                table[(i, i + k)] = value;
            }
        }
        Self {
            sequence,
            min_loop_length,
            table,
        }
    }

    /// Fill the table with all cells of one width computed in
    /// parallel. The sequential width loop is the barrier: a width is
    /// fully materialized before any wider cell reads it.
    pub fn new_parallel(sequence: NucleotideVec, min_loop_length: usize) -> Self {
        let n = sequence.len();
        let mut table = Array2::from_elem((n, n), 0);
        for k in 1..n {
            let width: Vec<usize> = (0..n - k)
                .into_par_iter()
                .map(|i| cell(&table, &sequence, min_loop_length, i, i + k))
                .collect();
            for (i, value) in width.into_iter().enumerate() {
                table[(i, i + k)] = value;
            }
        }
        Self {
            sequence,
            min_loop_length,
            table,
        }
    }

    pub fn sequence(&self) -> &NucleotideVec {
        &self.sequence
    }

    pub fn min_loop_length(&self) -> usize {
        self.min_loop_length
    }

    pub fn table(&self) -> &Array2<usize> {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The optimal total pair count: `table[(0, n-1)]`, or 0 for the
    /// empty sequence.
    pub fn score(&self) -> usize {
        let n = self.sequence.len();
        if n == 0 {
            0
        } else {
            self.table[(0, n - 1)]
        }
    }

    /// Reconstruct the pairs realizing `table[(i, j)]` for an explicit
    /// span. Spans outside the table, or with j < i - 1, are a contract
    /// violation and rejected as `InvalidRange`.
    pub fn traceback(&self, i: usize, j: usize) -> Result<PairList, FoldingError> {
        let n = self.sequence.len();
        if i >= n || j >= n || j + 1 < i {
            return Err(FoldingError::InvalidRange { i, j, length: n });
        }
        let mut pairs = PairList::new(n);
        self.trace_into(i, j, &mut pairs);
        Ok(pairs)
    }

    /// Reconstruct one optimal structure for the whole sequence.
    pub fn fold(&self) -> PairList {
        let n = self.sequence.len();
        let mut pairs = PairList::new(n);
        if n > 1 {
            self.trace_into(0, n - 1, &mut pairs);
        }
        pairs
    }

    /// The dot-bracket encoding of `fold()`.
    pub fn structure(&self) -> Result<DotBracketVec, FoldingError> {
        Ok(DotBracketVec::try_from(&self.fold())?)
    }

    // Explicit work stack instead of native recursion; children are
    // pushed right-to-left so popping left-first reproduces the
    // recursive visit order.
    //
    // The rule order below is a fixed tie-break policy: whenever the
    // optimum has several decompositions it selects one reproducibly.
    // Reordering the rules changes the output structure.
    fn trace_into(&self, i: usize, j: usize, pairs: &mut PairList) {
        let seq = &self.sequence;
        let table = &self.table;
        let mut spans = vec![(i, j)];

        while let Some((i, j)) = spans.pop() {
            if i >= j {
                continue;
            }
            let here = table[(i, j)];

            if here == table[(i + 1, j)] {
                // i unpaired
                spans.push((i + 1, j));
            } else if here == table[(i, j - 1)] {
                // j unpaired
                spans.push((i, j - 1));
            } else if here == table[(i + 1, j - 1)] + bonus(seq, i, j) {
                // i pairs with j
                pairs.push(i, j);
                spans.push((i + 1, j - 1));
            } else {
                // bifurcation, first matching split point
                for t in i + 1..j - 1 {
                    if here == table[(i, t)] + table[(t + 1, j)] {
                        spans.push((t + 1, j));
                        spans.push((i, t));
                        break;
                    }
                }
            }
        }
    }
}

/// One prediction: score, pairs, and dot-bracket string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub score: usize,
    pub pairs: PairList,
    pub structure: DotBracketVec,
}

/// Predict a maximum-pairing structure as a pure function of
/// (sequence, minimal loop length).
pub fn predict(sequence: NucleotideVec, min_loop_length: usize) -> Result<Prediction, FoldingError> {
    let dp = Nussinov::new(sequence, min_loop_length);
    let pairs = dp.fold();
    let structure = DotBracketVec::try_from(&pairs)?;
    Ok(Prediction {
        score: dp.score(),
        pairs,
        structure,
    })
}
