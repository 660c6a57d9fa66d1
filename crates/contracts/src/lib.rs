//! Shared content contracts for the portfolio application.
//!
//! Pure data: the project catalog types, the fixed profile content, the
//! navigation anchor surface, and the lightweight emphasis markup used in
//! project descriptions. No DOM, no framework types.

pub mod domain;
pub mod shared;
