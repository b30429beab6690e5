use std::fmt;
use std::ops::Deref;
use std::convert::TryFrom;

use crate::pair_list::PairList;
use crate::error::StructureError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotBracket {
    Unpaired, // '.'
    Open,     // '('
    Close,    // ')'
}

impl TryFrom<char> for DotBracket {
    type Error = StructureError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(DotBracket::Unpaired),
            '(' => Ok(DotBracket::Open),
            ')' => Ok(DotBracket::Close),
            _ => Err(StructureError::InvalidToken(c.to_string(), 0)),
        }
    }
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> Self {
        match db {
            DotBracket::Open => '(',
            DotBracket::Close => ')',
            DotBracket::Unpaired => '.',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DotBracketVec(pub Vec<DotBracket>);

impl Deref for DotBracketVec {
    type Target = [DotBracket];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&str> for DotBracketVec {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            match DotBracket::try_from(c) {
                Ok(db) => vec.push(db),
                Err(StructureError::InvalidToken(tok, _)) => {
                    return Err(StructureError::InvalidToken(tok, i));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(DotBracketVec(vec))
    }
}

/// The dot-bracket encoding of a pair list: a length-n string of '.',
/// where every pair (i, j) sets position i to '(' and position j to ')'.
///
/// A position claimed twice means the pair list is not a partial
/// matching; that is an upstream invariant violation and reported as
/// `ConflictingPair` rather than silently overwritten.
impl TryFrom<&PairList> for DotBracketVec {
    type Error = StructureError;

    fn try_from(pl: &PairList) -> Result<Self, Self::Error> {
        let mut vec = vec![DotBracket::Unpaired; pl.length];

        for &(i, j) in &pl.pairs {
            if i >= j {
                return Err(StructureError::InvalidToken("self-pairing".to_string(), i));
            }
            if j >= pl.length {
                return Err(StructureError::OutOfBounds(j, pl.length));
            }
            if vec[i] != DotBracket::Unpaired {
                return Err(StructureError::ConflictingPair(i));
            }
            if vec[j] != DotBracket::Unpaired {
                return Err(StructureError::ConflictingPair(j));
            }
            vec[i] = DotBracket::Open;
            vec[j] = DotBracket::Close;
        }

        Ok(DotBracketVec(vec))
    }
}

impl fmt::Display for DotBracketVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for db in &self.0 {
            write!(f, "{}", char::from(*db))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_bracket_from_char() {
        assert_eq!(DotBracket::try_from('.').unwrap(), DotBracket::Unpaired);
        assert_eq!(DotBracket::try_from('(').unwrap(), DotBracket::Open);
        assert_eq!(DotBracket::try_from(')').unwrap(), DotBracket::Close);
    }

    #[test]
    fn test_char_from_dot_bracket() {
        assert_eq!(char::from(DotBracket::Unpaired), '.');
        assert_eq!(char::from(DotBracket::Open), '(');
        assert_eq!(char::from(DotBracket::Close), ')');
    }

    #[test]
    fn test_dot_bracket_from_invalid_char() {
        let err = DotBracketVec::try_from("(x)").unwrap_err();
        assert_eq!(format!("{}", err), "Invalid token 'x' at position 1");
    }

    #[test]
    fn test_dot_bracket_vec_from_str() {
        let dbv = DotBracketVec::try_from("(.).").unwrap();
        assert_eq!(format!("{}", dbv), "(.).");
        assert_eq!(dbv.len(), 4);
        assert_eq!(dbv[0], DotBracket::Open);
        assert_eq!(dbv[1], DotBracket::Unpaired);
        assert_eq!(dbv[2], DotBracket::Close);
        assert_eq!(dbv[3], DotBracket::Unpaired);
    }

    #[test]
    fn test_encode_pair_list() {
        let pl = PairList { length: 6, pairs: vec![(0, 5), (1, 4)] };
        let dbv = DotBracketVec::try_from(&pl).unwrap();
        assert_eq!(format!("{}", dbv), "((..))");
    }

    #[test]
    fn test_encode_empty_pair_list() {
        let pl = PairList { length: 0, pairs: vec![] };
        let dbv = DotBracketVec::try_from(&pl).unwrap();
        assert_eq!(format!("{}", dbv), "");
    }

    #[test]
    fn test_encode_is_idempotent() {
        let pl = PairList { length: 5, pairs: vec![(1, 3)] };
        let first = DotBracketVec::try_from(&pl).unwrap();
        let second = DotBracketVec::try_from(&pl).unwrap();
        assert_eq!(first, second);
        assert_eq!(format!("{}", first), ".(.).");
    }

    #[test]
    fn test_encode_rejects_duplicate_position() {
        let pl = PairList { length: 6, pairs: vec![(0, 3), (3, 5)] };
        let err = DotBracketVec::try_from(&pl).unwrap_err();
        assert_eq!(format!("{}", err), "Position 3 occurs in more than one pair");
    }

    #[test]
    fn test_encode_rejects_out_of_bounds() {
        let pl = PairList { length: 4, pairs: vec![(1, 4)] };
        let err = DotBracketVec::try_from(&pl).unwrap_err();
        assert_eq!(format!("{}", err), "Pair index 4 exceeds structure length 4");
    }
}
