mod error;
mod dotbracket;
mod pair_list;
mod pair_table;

pub use error::*;
pub use dotbracket::*;
pub use pair_list::*;
pub use pair_table::*;
