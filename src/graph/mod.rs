//! Graph construction and representation
//!
//! This module builds the sentence similarity graph and stores it in the
//! forms the ranker needs.

pub mod builder;
pub mod csr;
pub mod matrix;
