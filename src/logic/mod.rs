//! Logic modules - turn a user's selections into the rows worth showing.
//!
//! The logic layer resolves a reservation category into its fallback chain and
//! filters the seat matrix with it.
//!
//! # Modules
//!
//! - `fallback` - Category fallback chains
//! - `filter` - Row selection, projection and selector options

pub mod fallback;
pub mod filter;
