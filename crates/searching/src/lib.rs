mod binary;
mod linear;

pub use binary::{binary_search, binary_search_by};
pub use linear::{linear_search, linear_search_by};
