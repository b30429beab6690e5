use std::fmt;

use nf_structure::StructureError;

#[derive(Debug)]
pub enum FoldingError {
    /// Traceback requested outside the DP table, or with j < i - 1.
    InvalidRange {
        i: usize,
        j: usize,
        length: usize,
    },
    Structure(StructureError),
}

impl fmt::Display for FoldingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldingError::InvalidRange { i, j, length } => {
                write!(f, "Invalid traceback range [{}, {}] for table of size {}", i, j, length)
            }
            FoldingError::Structure(e) => {
                write!(f, "{}", e)
            }
        }
    }
}

impl std::error::Error for FoldingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FoldingError::Structure(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StructureError> for FoldingError {
    fn from(e: StructureError) -> Self {
        FoldingError::Structure(e)
    }
}
