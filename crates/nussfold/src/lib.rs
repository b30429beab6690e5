//! # nussfold
//!
//! Command line frontend for Nussinov maximum base-pair prediction.
//!
//! This crate re-exports the main functionality from its submodules.

pub mod input_parsers;
pub mod gen_dot;

pub mod structure {
    pub use ::nf_structure::*;
}

pub mod folding {
    pub use ::nf_folding::*;
}
