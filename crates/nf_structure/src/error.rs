use std::fmt;

#[derive(Debug)]
pub enum StructureError {
    UnmatchedOpen(usize),          // '(' at this position was never closed
    UnmatchedClose(usize),         // ')' at this position has no matching '('
    InvalidToken(String, usize),   // invalid char and position
    ConflictingPair(usize),        // position claimed by more than one pair
    OutOfBounds(usize, usize),     // index and structure length
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::UnmatchedOpen(i) => {
                write!(f, "Unmatched '(' at position {}", i)
            }
            StructureError::UnmatchedClose(i) => {
                write!(f, "Unmatched ')' at position {}", i)
            }
            StructureError::InvalidToken(tok, i) => {
                write!(f, "Invalid token '{}' at position {}", tok, i)
            }
            StructureError::ConflictingPair(i) => {
                write!(f, "Position {} occurs in more than one pair", i)
            }
            StructureError::OutOfBounds(i, n) => {
                write!(f, "Pair index {} exceeds structure length {}", i, n)
            }
        }
    }
}

impl std::error::Error for StructureError {}
