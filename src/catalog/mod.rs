//! Pure, in-memory catalog logic: category hierarchy resolution and
//! product filtering/ordering.
//!
//! Nothing in this module performs I/O. The services layer fetches
//! documents through the repository and feeds the resulting slices into
//! these functions; the routes layer only translates query strings into
//! the value objects defined here.

pub mod filter;
pub mod tree;
