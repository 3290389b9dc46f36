//! Summarization pipeline
//!
//! [`runner::SummaryPipeline`] drives the stages; [`observer`] defines the
//! hooks it calls at each stage boundary.

pub mod observer;
pub mod runner;
