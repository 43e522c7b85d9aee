//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`number`]: the single numeric-to-string rule used for answers

pub mod error;
pub mod number;
