/// Base, NucleotideVec, PairType, ....
mod nucleotides;

/// Folding errors.
mod error;

/// The Nussinov dynamic program: matrix fill, score, traceback.
mod nussinov;

pub use nucleotides::*;
pub use error::*;
pub use nussinov::*;
