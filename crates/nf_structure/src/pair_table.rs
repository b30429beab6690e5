use std::ops::{Deref, DerefMut};
use std::convert::TryFrom;

use crate::error::StructureError;
use crate::dotbracket::{DotBracket, DotBracketVec};
use crate::pair_list::PairList;

/// Per-position partner view of a structure: entry i holds the index
/// paired with i, or `None` if i is unpaired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable(pub Vec<Option<usize>>);

impl Deref for PairTable {
    type Target = [Option<usize>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PairTable {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl TryFrom<&str> for PairTable {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let db = DotBracketVec::try_from(s)?;
        PairTable::try_from(&db)
    }
}

impl TryFrom<&DotBracketVec> for PairTable {
    type Error = StructureError;

    fn try_from(db: &DotBracketVec) -> Result<Self, Self::Error> {
        let mut stack: Vec<usize> = Vec::new();
        let mut table = vec![None; db.len()];

        for (i, dot) in db.iter().enumerate() {
            match dot {
                DotBracket::Open => stack.push(i),
                DotBracket::Close => {
                    let j = stack.pop().ok_or(StructureError::UnmatchedClose(i))?;
                    table[i] = Some(j);
                    table[j] = Some(i);
                }
                DotBracket::Unpaired => {}
            }
        }

        if let Some(i) = stack.pop() {
            return Err(StructureError::UnmatchedOpen(i));
        }

        Ok(PairTable(table))
    }
}

impl TryFrom<&PairList> for PairTable {
    type Error = StructureError;

    fn try_from(pl: &PairList) -> Result<Self, Self::Error> {
        let mut table = vec![None; pl.length];

        for &(i, j) in &pl.pairs {
            if i >= j {
                return Err(StructureError::InvalidToken("self-pairing".to_string(), i));
            }
            if j >= pl.length {
                return Err(StructureError::OutOfBounds(j, pl.length));
            }
            if table[i].is_some() {
                return Err(StructureError::ConflictingPair(i));
            }
            if table[j].is_some() {
                return Err(StructureError::ConflictingPair(j));
            }
            table[i] = Some(j);
            table[j] = Some(i);
        }

        Ok(PairTable(table))
    }
}
